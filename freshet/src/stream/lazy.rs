//! Streams that defer every element behind a forceable cell.
//!
//! [`Stream`] wraps each source element in a [`Thunk`] at construction, and
//! every `map` and `filter` composes into the cells instead of running.
//! Nothing executes until a terminal operation forces cells, and terminal
//! operations that exit early force only the prefix they inspect: `find_any`
//! on a mapped stream runs the map once.
//!
//! Forcing does not cache. A cell forced twice runs its whole composed
//! pipeline twice, so transformations are assumed pure; an impure closure
//! observes one run per force.

use std::rc::Rc;

use itertools::{FoldWhile, Itertools};

use crate::container::{Container, PushInto, Retype};
use crate::logging::{OperatorEvent, OperatorKind, StreamLogger};
use crate::stream::{Terminal, Thunk};
use crate::Data;

/// A stream of deferred cells, one per source element.
///
/// Intermediate operations consume the stream and wrap its cells; terminal
/// operations take `&self` and force them. A cell whose composed filter
/// rejects its element forces to `None` and is simply not produced.
pub struct Stream<C: Container>
where
    C::Item: 'static,
{
    /// One deferred cell per source element, in source order.
    cells: Vec<Thunk<C::Item>>,
    /// Logger receiving this stream's operator and terminal events.
    logger: Option<StreamLogger>,
}

impl<C: Container> Stream<C>
where
    C::Item: Data,
{
    /// Creates a stream deferring every element of `source`.
    ///
    /// Elements are cloned into value cells up front, so the stream does not
    /// borrow the source afterwards.
    pub fn new(source: &C) -> Self {
        let cells = source
            .iter()
            .map(|item| Thunk::value(item.clone()))
            .collect();
        Self {
            cells,
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

    /// Defers queueing `logic` behind every cell.
    ///
    /// The call composes cells and returns immediately; `logic` runs when a
    /// terminal operation forces an element, once per force. Mapping may
    /// change the element type.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let labels = vec![1, 2, 3].lazy().map(|x| format!("#{}", x)).collect();
    /// assert_eq!(labels, vec!["#1", "#2", "#3"]);
    /// ```
    pub fn map<X, F>(self, logic: F) -> Stream<C::Output>
    where
        C: Retype<X>,
        X: Data,
        F: Fn(C::Item) -> X + 'static,
    {
        self.log_operator(OperatorKind::Map);
        let logic: Rc<dyn Fn(C::Item) -> X> = Rc::new(logic);
        let cells = self
            .cells
            .into_iter()
            .map(|cell| {
                let logic = Rc::clone(&logic);
                Thunk::raw(Rc::new(move || cell.force().map(|item| logic(item))))
            })
            .collect();
        Stream {
            cells,
            logger: self.logger,
        }
    }

    /// Defers keeping only elements for which `predicate` holds.
    ///
    /// The call composes cells and returns immediately; `predicate` runs
    /// when a terminal operation forces an element, and a rejected element
    /// is withheld along with everything queued after the filter.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let evens = vec![1, 2, 3, 4].lazy().filter(|x| x % 2 == 0).collect();
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&C::Item) -> bool + 'static,
    {
        self.log_operator(OperatorKind::Filter);
        let predicate: Rc<dyn Fn(&C::Item) -> bool> = Rc::new(predicate);
        let cells = self
            .cells
            .into_iter()
            .map(|cell| {
                let predicate = Rc::clone(&predicate);
                Thunk::raw(Rc::new(move || {
                    cell.force().filter(|item| predicate(item))
                }))
            })
            .collect();
        Self {
            cells,
            logger: self.logger,
        }
    }

    fn log_operator(&self, kind: OperatorKind) {
        if let Some(logger) = &self.logger {
            logger.log(OperatorEvent { kind });
        }
    }
}

impl<C: Container> From<&C> for Stream<C>
where
    C::Item: Data,
{
    fn from(source: &C) -> Self {
        Self::new(source)
    }
}

/// Cloning shares the deferred cells, so a pipeline can branch without
/// re-running anything upstream.
impl<C: Container> Clone for Stream<C>
where
    C::Item: 'static,
{
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl<C> Terminal for Stream<C>
where
    C: Container + PushInto<C::Item>,
    C::Item: 'static,
{
    type Item = C::Item;
    type Collected = C;

    fn fold_while<A, F>(&self, init: A, op: F) -> FoldWhile<A>
    where
        F: FnMut(A, Self::Item) -> FoldWhile<A>,
    {
        self.cells
            .iter()
            .filter_map(Thunk::force)
            .fold_while(init, op)
    }

    fn logging(&self) -> Option<&StreamLogger> {
        self.logger.as_ref()
    }
}
