//! A shared mutable cell that async tasks can write into.
//!
//! `RwSignal<S>` is the browser implementation; `Rc<RefCell<S>>` stands in
//! for it in tests. Both return `None` once the backing value is gone (a
//! disposed signal), which callers treat as "view torn down".

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

pub trait Store<S>: Clone + 'static {
    /// Mutate the stored value, returning the closure's result.
    fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;

    /// Read the stored value without subscribing to changes.
    fn observe<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S: 'static> Store<S> for Rc<RefCell<S>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn observe<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<S: Send + Sync + 'static> Store<S> for RwSignal<S> {
    fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn observe<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
