//! Widgets currently mounted on the page, so a remount can release the old one.

use std::any::Any;
use std::cell::{Cell, RefCell};

use web_sys::HtmlElement;

struct Mounted {
    id: u64,
    container: HtmlElement,
    // Leptos unmount handle; dropping it tears the widget's reactive graph down.
    _handle: Box<dyn Any>,
}

thread_local! {
    static MOUNTED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

pub fn register(container: HtmlElement, handle: Box<dyn Any>) -> u64 {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    MOUNTED.with(|mounted| mounted.borrow_mut().push(Mounted { id, container, _handle: handle }));
    id
}

fn take_where(matches: impl Fn(&Mounted) -> bool) -> Vec<Mounted> {
    MOUNTED.with(|mounted| {
        let mut mounted = mounted.borrow_mut();
        let (taken, kept): (Vec<_>, Vec<_>) = mounted.drain(..).partition(|entry| matches(entry));
        *mounted = kept;
        taken
    })
}

/// Unmounts whatever widget lives in `container`. Returns how many were released.
pub fn release_container(container: &HtmlElement) -> usize {
    // Dropped outside the borrow: unmounting runs arbitrary cleanup.
    let taken = take_where(|entry| &entry.container == container);
    taken.len()
}

pub fn release(id: u64) -> bool {
    !take_where(|entry| entry.id == id).is_empty()
}

pub fn count() -> usize {
    MOUNTED.with(|mounted| mounted.borrow().len())
}
