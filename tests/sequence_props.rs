use lazyseq::{algorithm, GenerativeSequence, Sequence, TraversalConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn successor_range_matches_std_range(begin in -500i64..500, len in 0i64..200) {
        let end = begin + len;
        let ours: Vec<i64> = Sequence::new(begin, end).iter().collect();
        let expected: Vec<i64> = (begin..end).collect();
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn empty_iff_bounds_equal(begin in -50i32..50, end in -50i32..50) {
        prop_assert_eq!(Sequence::new(begin, end).is_empty(), begin == end);
    }

    #[test]
    fn step_count_is_distance(begin in 0u32..1000, len in 0u32..1000) {
        let seq = Sequence::new(begin, begin + len);
        let config = TraversalConfig::new().with_step_budget(len as usize + 1);
        prop_assert_eq!(seq.step_count(&config), Ok(len as usize));
    }

    #[test]
    fn generated_length_is_max(max in 0usize..256, seed in any::<u32>()) {
        let mut state = seed;
        let seq = GenerativeSequence::new(max, move || {
            // xorshift
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        });
        prop_assert_eq!(seq.iter().count(), max);
        prop_assert_eq!(seq.iter().size_hint(), (max, Some(max)));
        // Two walks replay the same stream
        prop_assert_eq!(seq.iter().collect::<Vec<_>>(), seq.iter().collect::<Vec<_>>());
    }

    #[test]
    fn adjacent_pairs_differ_by_one(begin in -100i32..100, len in 0i32..50) {
        let mut pairs = 0;
        let mut ok = true;
        algorithm::for_each_adjacent(&Sequence::new(begin, begin + len), |a, b| {
            pairs += 1;
            ok &= b - a == 1;
        });
        prop_assert!(ok);
        prop_assert_eq!(pairs, (len - 1).max(0));
    }
}
