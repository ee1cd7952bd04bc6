use std::cell::Cell;
use std::rc::Rc;

/// Generator returning 0, 1, 2, ... from its own captured state.
pub fn counter() -> impl FnMut() -> usize + Clone {
    let mut next = 0;
    move || {
        let out = next;
        next += 1;
        out
    }
}

/// Generator whose state lives behind a shared handle, so every clone
/// draws from the same stream.
pub fn shared_counter() -> (Rc<Cell<usize>>, impl FnMut() -> usize + Clone) {
    let state = Rc::new(Cell::new(0));
    let handle = Rc::clone(&state);
    let generator = move || {
        let out = handle.get();
        handle.set(out + 1);
        out
    };
    (state, generator)
}
