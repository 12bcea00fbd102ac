//! Streams that queue steps and replay them in one terminal traversal.
//!
//! [`Stream`] borrows its source container and records `map` and `filter`
//! steps in a single ordered list. Nothing runs until a terminal operation
//! walks the source once, applying the steps to each element strictly in
//! registration order; an element a filter rejects skips the rest of its
//! steps and is never produced.
//!
//! The queued pipeline is homogeneous: `map` here keeps the element type,
//! since every step must fit one list. For a type-changing `map`, use the
//! [`eager`](crate::stream::eager) or [`lazy`](crate::stream::lazy)
//! strategy.

use itertools::FoldWhile;
use smallvec::SmallVec;

use crate::container::{Container, PushInto};
use crate::logging::{OperatorEvent, OperatorKind, StreamLogger};
use crate::stream::Terminal;
use crate::Data;

/// A queued transformation step.
enum Step<T: 'static> {
    /// Replace the element.
    Map(Box<dyn Fn(&T) -> T>),
    /// Keep the element only if the predicate holds.
    Filter(Box<dyn Fn(&T) -> bool>),
}

/// A stream which queues steps against a borrowed source container.
///
/// Intermediate calls only record work; the source is read exactly once per
/// terminal operation. Pipelines are typically a handful of steps, so they
/// live inline until they grow past that.
pub struct Stream<'a, C: Container>
where
    C::Item: 'static,
{
    /// The borrowed source; never mutated.
    source: &'a C,
    /// Steps in registration order.
    steps: SmallVec<[Step<C::Item>; 4]>,
    /// Logger receiving this stream's operator and terminal events.
    logger: Option<StreamLogger>,
}

impl<'a, C: Container> Stream<'a, C>
where
    C::Item: 'static,
{
    /// Creates a stream over `source` with an empty pipeline.
    ///
    /// The source is borrowed, not copied, so it must stay unmutated for as
    /// long as the stream is consumed.
    pub fn new(source: &'a C) -> Self {
        Self {
            source,
            steps: SmallVec::new(),
            logger: None,
        }
    }

    /// Attaches a logger receiving this stream's events.
    pub fn with_logger(mut self, logger: StreamLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Queues a step replacing each element with `logic(&element)`.
    ///
    /// The step is recorded, not executed; over an empty source `logic`
    /// never runs at all.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let tripled = vec![1, 2, 3].stepped().map(|x| x * 3).collect();
    /// assert_eq!(tripled, vec![3, 6, 9]);
    /// ```
    pub fn map<F>(mut self, logic: F) -> Self
    where
        F: Fn(&C::Item) -> C::Item + 'static,
    {
        self.log_operator(OperatorKind::Map);
        self.steps.push(Step::Map(Box::new(logic)));
        self
    }

    /// Queues a step keeping only elements for which `predicate` holds.
    ///
    /// Steps queued after this one never see a rejected element.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let bumped = vec![1, 2, 3, 4]
    ///     .stepped()
    ///     .filter(|x| x % 2 == 0)
    ///     .map(|x| x + 1)
    ///     .collect();
    /// assert_eq!(bumped, vec![3, 5]);
    /// ```
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&C::Item) -> bool + 'static,
    {
        self.log_operator(OperatorKind::Filter);
        self.steps.push(Step::Filter(Box::new(predicate)));
        self
    }

    fn log_operator(&self, kind: OperatorKind) {
        if let Some(logger) = &self.logger {
            logger.log(OperatorEvent { kind });
        }
    }
}

impl<'a, C: Container> From<&'a C> for Stream<'a, C>
where
    C::Item: 'static,
{
    fn from(source: &'a C) -> Self {
        Self::new(source)
    }
}

impl<C> Terminal for Stream<'_, C>
where
    C: Container + PushInto<C::Item>,
    C::Item: Data,
{
    type Item = C::Item;
    type Collected = C;

    fn fold_while<A, F>(&self, init: A, mut op: F) -> FoldWhile<A>
    where
        F: FnMut(A, Self::Item) -> FoldWhile<A>,
    {
        let mut acc = init;
        'elements: for element in self.source.iter() {
            let mut current = element.clone();
            for step in self.steps.iter() {
                match step {
                    Step::Map(logic) => current = logic(&current),
                    Step::Filter(predicate) => {
                        if !predicate(&current) {
                            continue 'elements;
                        }
                    }
                }
            }
            match op(acc, current) {
                FoldWhile::Continue(next) => acc = next,
                done @ FoldWhile::Done(_) => return done,
            }
        }
        FoldWhile::Continue(acc)
    }

    fn logging(&self) -> Option<&StreamLogger> {
        self.logger.as_ref()
    }
}
