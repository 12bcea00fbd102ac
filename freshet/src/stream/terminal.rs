//! Terminal operations, derived from a single early-exit traversal.

use std::ops::Add;

pub use itertools::FoldWhile;

use crate::container::{Container, PushInto};
use crate::logging::{StreamLogger, TerminalEvent, TerminalKind};

/// Terminal operations over a stream's transformed element sequence.
///
/// Implementors provide [`Terminal::fold_while`], one traversal that presents
/// every element the stream produces, with all queued steps applied and all
/// deferred cells forced, in source order. Every terminal operation is derived
/// from that traversal, so the execution strategies cannot drift apart in
/// what `collect`, `sum`, and friends mean.
///
/// Terminal operations take `&self`: the same stream can be consumed more
/// than once, and repeated calls agree as long as the source container is not
/// mutated in between.
pub trait Terminal {
    /// The element type the stream produces.
    type Item;

    /// The container built by [`Terminal::collect`]: the stream's container
    /// kind over [`Terminal::Item`].
    type Collected: Container<Item = Self::Item> + PushInto<Self::Item>;

    /// Folds the transformed element sequence, with early exit.
    ///
    /// Elements are presented to `op` in source order; returning
    /// [`FoldWhile::Done`] stops the traversal without touching later
    /// elements. The result reports whether the traversal ran to completion
    /// ([`FoldWhile::Continue`]) or stopped early ([`FoldWhile::Done`]).
    fn fold_while<A, F>(&self, init: A, op: F) -> FoldWhile<A>
    where
        F: FnMut(A, Self::Item) -> FoldWhile<A>;

    /// The logger receiving this stream's events, if one is attached.
    fn logging(&self) -> Option<&StreamLogger>;

    /// Materializes the produced sequence into a fresh container.
    ///
    /// Elements are appended in source order with the container kind's
    /// natural insertion, so a set deduplicates and a sequence preserves
    /// order.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let doubled = vec![0, 1, 2].stepped().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![0, 2, 4]);
    /// ```
    fn collect(&self) -> Self::Collected {
        let output = self
            .fold_while(Self::Collected::default(), |mut output, item| {
                output.push_into(item);
                FoldWhile::Continue(output)
            })
            .into_inner();
        self.log_terminal(TerminalKind::Collect, output.len());
        output
    }

    /// Like [`Terminal::collect`], but stops once the output holds `limit`
    /// elements.
    ///
    /// The result holds exactly `min(limit, n)` elements, where `n` is the
    /// number of elements the stream produces; a `limit` of zero yields the
    /// empty container. The limit bounds the *output* size: an insertion a
    /// set deduplicates away does not use it up.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let head = vec![0, 1, 2, 3, 4, 5].stepped().collect_up_to(3);
    /// assert_eq!(head, vec![0, 1, 2]);
    /// ```
    fn collect_up_to(&self, limit: usize) -> Self::Collected {
        if limit == 0 {
            self.log_terminal(TerminalKind::Collect, 0);
            return Self::Collected::default();
        }
        let output = self
            .fold_while(Self::Collected::default(), |mut output, item| {
                output.push_into(item);
                if output.len() >= limit {
                    FoldWhile::Done(output)
                } else {
                    FoldWhile::Continue(output)
                }
            })
            .into_inner();
        self.log_terminal(TerminalKind::Collect, output.len());
        output
    }

    /// Left-folds the produced sequence with `op`, starting from `init`.
    ///
    /// Elements are combined in source order; an empty sequence yields
    /// `init` untouched.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let digits = vec![0, 1, 2];
    /// let joined = digits.stepped().reduce(String::new(), |acc, x| format!("{}{}", acc, x));
    /// assert_eq!(joined, "012");
    /// ```
    fn reduce<R, F>(&self, init: R, mut op: F) -> R
    where
        F: FnMut(R, Self::Item) -> R,
    {
        let (result, folded) = self
            .fold_while((init, 0), |(acc, folded), item| {
                FoldWhile::Continue((op(acc, item), folded + 1))
            })
            .into_inner();
        self.log_terminal(TerminalKind::Reduce, folded);
        result
    }

    /// Adds up the produced sequence, starting from `Item::default()`.
    ///
    /// An empty sequence sums to `Item::default()`.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// assert_eq!(numbers.stepped().sum(), 45);
    /// ```
    fn sum(&self) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item> + Default,
    {
        self.sum_from(Self::Item::default())
    }

    /// Adds up the produced sequence, starting from `start`.
    ///
    /// An empty sequence yields `start` untouched.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let numbers = vec![1, 2, 3];
    /// assert_eq!(numbers.stepped().sum_from(100), 106);
    /// ```
    fn sum_from(&self, start: Self::Item) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item>,
    {
        let (total, folded) = self
            .fold_while((start, 0), |(acc, folded), item| {
                FoldWhile::Continue((acc + item, folded + 1))
            })
            .into_inner();
        self.log_terminal(TerminalKind::Sum, folded);
        total
    }

    /// The first produced element satisfying `predicate`, if any.
    ///
    /// The predicate observes the transformed sequence: queued steps are
    /// applied and deferred cells forced before it runs. Elements after the
    /// first match are not touched. Absence is an `Option`; supply a default
    /// with `unwrap_or` at the call site if one makes sense there.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
    /// assert_eq!(numbers.stepped().find_first(|x| x % 2 == 0), Some(2));
    /// assert_eq!(numbers.stepped().find_first(|x| *x > 100).unwrap_or(0), 0);
    /// ```
    fn find_first<P>(&self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let found = self
            .fold_while(None, |none, item| {
                if predicate(&item) {
                    FoldWhile::Done(Some(item))
                } else {
                    FoldWhile::Continue(none)
                }
            })
            .into_inner();
        self.log_terminal(TerminalKind::FindFirst, usize::from(found.is_some()));
        found
    }

    /// Some produced element, or `None` if the stream produces nothing.
    ///
    /// Which element is returned is unspecified; this implementation takes
    /// the first one produced, so a lazy stream forces a single cell.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let numbers = vec![7, 8, 9];
    /// assert!(numbers.stepped().find_any().is_some());
    /// assert_eq!(numbers.stepped().filter(|x| *x > 100).find_any(), None);
    /// ```
    fn find_any(&self) -> Option<Self::Item> {
        let found = self
            .fold_while(None, |_, item| FoldWhile::Done(Some(item)))
            .into_inner();
        self.log_terminal(TerminalKind::FindAny, usize::from(found.is_some()));
        found
    }

    /// The number of elements the stream produces.
    ///
    /// Counting consumes the stream like any other terminal operation:
    /// queued steps run and deferred cells are forced, since filters decide
    /// what is produced. Strategies backed by an already materialized
    /// container override this with a constant-time size query.
    ///
    /// # Examples
    /// ```
    /// use freshet::{Terminal, ToStream};
    ///
    /// let numbers = vec![1, 2, 3, 4];
    /// assert_eq!(numbers.stepped().filter(|x| x % 2 == 0).count(), 2);
    /// ```
    fn count(&self) -> usize {
        let counted = self
            .fold_while(0, |n, _| FoldWhile::Continue(n + 1))
            .into_inner();
        self.log_terminal(TerminalKind::Count, counted);
        counted
    }

    /// Records the completion of a terminal operation, if a logger is
    /// attached.
    fn log_terminal(&self, kind: TerminalKind, produced: usize) {
        if let Some(logger) = self.logging() {
            logger.log(TerminalEvent { kind, produced });
        }
    }
}
