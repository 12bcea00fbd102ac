//! Conversion from containers to streams.

use crate::container::Container;
use crate::stream::{eager, lazy, stepped};
use crate::Data;

/// Conversion from a container to a stream of each execution strategy.
///
/// Implemented for every adapted container; the method picks the strategy.
/// All three strategies read the source through [`Container::iter`] and leave
/// it unmutated.
pub trait ToStream: Container + Sized {
    /// A stream queueing steps against this container.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let total = vec![1, 2, 3].stepped().map(|x| x * 2).sum();
    /// assert_eq!(total, 12);
    /// ```
    fn stepped(&self) -> stepped::Stream<'_, Self>
    where
        Self::Item: 'static;

    /// A stream materializing each intermediate operation at its call.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let lengths = vec!["a", "bc", "def"].eager().map(|s| s.len()).collect();
    /// assert_eq!(lengths, vec![1, 2, 3]);
    /// ```
    fn eager(&self) -> eager::Stream<'_, Self>
    where
        Self: Clone;

    /// A stream deferring every element behind a forceable cell.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let found = vec![1, 2, 3].lazy().filter(|x| x % 2 == 0).find_any();
    /// assert_eq!(found, Some(2));
    /// ```
    fn lazy(&self) -> lazy::Stream<Self>
    where
        Self::Item: Data;
}

impl<C: Container> ToStream for C {
    fn stepped(&self) -> stepped::Stream<'_, Self>
    where
        Self::Item: 'static,
    {
        stepped::Stream::new(self)
    }

    fn eager(&self) -> eager::Stream<'_, Self>
    where
        Self: Clone,
    {
        eager::Stream::new(self)
    }

    fn lazy(&self) -> lazy::Stream<Self>
    where
        Self::Item: Data,
    {
        lazy::Stream::new(self)
    }
}
