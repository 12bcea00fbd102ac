//! Deferred element cells.

use std::fmt::{self, Debug};
use std::rc::Rc;

/// A deferred computation producing at most one element when forced.
///
/// Nothing runs until [`Thunk::force`]. Forcing does not cache: each call
/// re-runs the computation, and composed transformations re-run with it. The
/// computations are assumed pure, so repeated forcing is repeated work but
/// never a different answer; an impure computation observes one run per
/// force. A thunk whose composed filter rejects the element forces to
/// `None`.
pub struct Thunk<T: 'static> {
    run: Rc<dyn Fn() -> Option<T>>,
}

impl<T> Thunk<T> {
    /// Wraps a computation producing one element.
    ///
    /// # Examples
    /// ```
    /// use freshet::stream::Thunk;
    ///
    /// let cell = Thunk::new(|| 6 * 7);
    /// assert_eq!(cell.force(), Some(42));
    /// ```
    pub fn new<F: Fn() -> T + 'static>(logic: F) -> Self {
        Self {
            run: Rc::new(move || Some(logic())),
        }
    }

    /// Wraps an already computed element, cloned out on each force.
    pub fn value(item: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || item.clone())
    }

    /// Wraps a raw computation which may produce no element.
    pub(crate) fn raw(run: Rc<dyn Fn() -> Option<T>>) -> Self {
        Self { run }
    }

    /// Runs the computation, yielding its element unless a composed filter
    /// rejected it.
    pub fn force(&self) -> Option<T> {
        (self.run)()
    }
}

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk").finish_non_exhaustive()
    }
}
