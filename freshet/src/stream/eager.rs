//! Streams that materialize every intermediate operation at its call.
//!
//! [`Stream`] wraps its data in a [`Cow`]: a fresh stream borrows the source
//! container, and each `map` or `filter` walks the current data once and
//! produces a new stream owning the result. Work happens exactly where the
//! call appears, so intermediate streams are honest containers that can be
//! consumed, kept, and branched from independently.
//!
//! This is the strategy to pick when each chained call should pay its own
//! cost up front; for one-traversal pipelines see
//! [`stepped`](crate::stream::stepped), for demand-driven evaluation see
//! [`lazy`](crate::stream::lazy).

use std::borrow::Cow;

use itertools::{FoldWhile, Itertools};

use crate::container::{Container, PushInto, Retype};
use crate::logging::{OperatorEvent, OperatorKind, StreamLogger, TerminalKind};
use crate::stream::Terminal;

/// A stream whose intermediate operations run at the call site.
///
/// The first transformation detaches the stream from the source container;
/// everything after that owns its data outright.
#[derive(Clone)]
pub struct Stream<'a, C: Container + Clone> {
    /// Borrowed from the source until the first transformation.
    data: Cow<'a, C>,
    /// Logger receiving this stream's operator and terminal events.
    logger: Option<StreamLogger>,
}

impl<'a, C: Container + Clone> Stream<'a, C> {
    /// Creates a stream borrowing `source`.
    ///
    /// No copy happens until the first transformation.
    pub fn new(source: &'a C) -> Self {
        Self {
            data: Cow::Borrowed(source),
            logger: None,
        }
    }

    /// Attaches a logger receiving this stream's events.
    ///
    /// Streams produced by later `map` and `filter` calls inherit the
    /// logger.
    pub fn with_logger(mut self, logger: StreamLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Maps every element through `logic`, right now.
    ///
    /// The result owns a freshly built container of the same kind over the
    /// output element type; the original stream is untouched and can keep
    /// producing. Mapping may change the element type.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let labels = vec![1, 2, 3].eager().map(|x| x.to_string()).collect();
    /// assert_eq!(labels, vec!["1", "2", "3"]);
    /// ```
    pub fn map<X, F>(&self, logic: F) -> Stream<'static, C::Output>
    where
        C: Retype<X>,
        F: Fn(&C::Item) -> X,
    {
        self.log_operator(OperatorKind::Map);
        let mut output = C::Output::default();
        for item in self.data.iter() {
            output.push_into(logic(item));
        }
        Stream {
            data: Cow::Owned(output),
            logger: self.logger.clone(),
        }
    }

    /// Keeps the elements for which `predicate` holds, right now.
    ///
    /// The result owns a freshly built container of the same kind; the
    /// original stream is untouched.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let evens = vec![1, 2, 3, 4].eager().filter(|x| x % 2 == 0).collect();
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    pub fn filter<P>(&self, predicate: P) -> Stream<'static, C>
    where
        C: PushInto<C::Item>,
        C::Item: Clone,
        P: Fn(&C::Item) -> bool,
    {
        self.log_operator(OperatorKind::Filter);
        let mut output = C::default();
        for item in self.data.iter() {
            if predicate(item) {
                output.push_into(item.clone());
            }
        }
        Stream {
            data: Cow::Owned(output),
            logger: self.logger.clone(),
        }
    }

    fn log_operator(&self, kind: OperatorKind) {
        if let Some(logger) = &self.logger {
            logger.log(OperatorEvent { kind });
        }
    }
}

impl<'a, C: Container + Clone> From<&'a C> for Stream<'a, C> {
    fn from(source: &'a C) -> Self {
        Self::new(source)
    }
}

impl<C: Container + Clone> From<C> for Stream<'static, C> {
    fn from(data: C) -> Self {
        Self {
            data: Cow::Owned(data),
            logger: None,
        }
    }
}

impl<C> Terminal for Stream<'_, C>
where
    C: Container + PushInto<C::Item> + Clone,
    C::Item: Clone,
{
    type Item = C::Item;
    type Collected = C;

    fn fold_while<A, F>(&self, init: A, op: F) -> FoldWhile<A>
    where
        F: FnMut(A, Self::Item) -> FoldWhile<A>,
    {
        self.data.iter().cloned().fold_while(init, op)
    }

    fn logging(&self) -> Option<&StreamLogger> {
        self.logger.as_ref()
    }

    /// The backing container is already materialized, so counting is a size
    /// query rather than a traversal.
    fn count(&self) -> usize {
        let counted = self.data.len();
        self.log_terminal(TerminalKind::Count, counted);
        counted
    }
}
