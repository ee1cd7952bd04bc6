use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lazyseq::{GenerativeSequence, Predecessor, Sequence, Successor, TraversalConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lazyseq", about = "Print stepped and generated lazy sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk `[begin, end)` under a step rule.
    Step {
        /// First value of the sequence.
        #[arg(allow_hyphen_values = true)]
        begin: i64,
        /// Value that terminates the sequence (excluded).
        #[arg(allow_hyphen_values = true)]
        end: i64,
        /// Step rule applied between elements.
        #[arg(long, value_enum, default_value_t = Rule::Succ)]
        rule: Rule,
        /// Give up after this many steps (defaults to LAZYSEQ_STEP_BUDGET, else unbounded).
        #[arg(long)]
        budget: Option<usize>,
    },
    /// Print the first `count` outputs of a generator.
    Generate {
        /// Number of elements to produce.
        count: usize,
        /// Generator to drive.
        #[arg(long, value_enum, default_value_t = Kind::Counter)]
        kind: Kind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rule {
    /// value + 1
    Succ,
    /// value - 1
    Pred,
    /// value * 2
    Double,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// 0, 1, 2, ...
    Counter,
    /// 0, 1, 1, 2, 3, 5, ...
    Fibonacci,
    /// 1, 4, 9, 16, ...
    Squares,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Step {
            begin,
            end,
            rule,
            budget,
        } => run_step(begin, end, rule, budget)?,
        Commands::Generate { count, kind } => run_generate(count, kind),
    }

    Ok(())
}

fn run_step(begin: i64, end: i64, rule: Rule, budget: Option<usize>) -> Result<()> {
    let mut config = TraversalConfig::from_env();
    if let Some(budget) = budget {
        config = config.with_step_budget(budget);
    }
    config.validate().context("invalid traversal configuration")?;

    let values = match rule {
        Rule::Succ => walk(Sequence::with_step(begin, end, Successor), &config),
        Rule::Pred => walk(Sequence::with_step(begin, end, Predecessor), &config),
        Rule::Double => walk(
            Sequence::with_step(begin, end, |v: &mut i64| *v *= 2),
            &config,
        ),
    }
    .with_context(|| format!("stepping from {begin} never reached {end}"))?;

    print_values(&values);
    Ok(())
}

fn walk<S>(sequence: Sequence<i64, S>, config: &TraversalConfig) -> Result<Vec<i64>>
where
    S: lazyseq::StepRule<i64> + Clone,
{
    let values = sequence
        .checked_iter(config)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(values)
}

fn run_generate(count: usize, kind: Kind) {
    let values: Vec<u64> = match kind {
        Kind::Counter => {
            let mut next = 0u64;
            GenerativeSequence::new(count, move || {
                next += 1;
                next - 1
            })
            .into_iter()
            .collect()
        }
        Kind::Fibonacci => {
            let (mut a, mut b) = (0u64, 1u64);
            GenerativeSequence::new(count, move || {
                let out = a;
                (a, b) = (b, a.saturating_add(b));
                out
            })
            .into_iter()
            .collect()
        }
        Kind::Squares => {
            let mut n = 0u64;
            GenerativeSequence::new(count, move || {
                n += 1;
                n.saturating_mul(n)
            })
            .into_iter()
            .collect()
        }
    };

    print_values(&values);
}

fn print_values<T: std::fmt::Display>(values: &[T]) {
    if values.is_empty() {
        println!("(empty)");
        return;
    }
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
}
