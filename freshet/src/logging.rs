//! Traits, types, and logic related to the recording of stream events.

use serde::{Deserialize, Serialize};

/// Logger receiving the events of one stream.
pub type StreamLogger = crate::logging_core::Logger<StreamEvent>;

/// The kind of an intermediate operation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum OperatorKind {
    /// Element replacement.
    Map,
    /// Element selection.
    Filter,
}

/// An intermediate operation was registered on a stream.
///
/// Stepped streams emit this when the step is queued, before anything runs;
/// eager and lazy streams emit it at the call that absorbs the operation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct OperatorEvent {
    /// What the operation does to elements.
    pub kind: OperatorKind,
}

/// The kind of a terminal operation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TerminalKind {
    /// Materialization into a container.
    Collect,
    /// Addition of all elements.
    Sum,
    /// A general left fold.
    Reduce,
    /// Search for the first match.
    FindFirst,
    /// Search for an arbitrary element.
    FindAny,
    /// Size of the produced sequence.
    Count,
}

/// A terminal operation ran to completion.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TerminalEvent {
    /// Which terminal operation ran.
    pub kind: TerminalKind,
    /// How many elements were delivered into its result.
    pub produced: usize,
}

/// An event in the life of a stream.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum StreamEvent {
    /// An intermediate operation was registered.
    Operator(OperatorEvent),
    /// A terminal operation ran to completion.
    Terminal(TerminalEvent),
}

impl From<OperatorEvent> for StreamEvent {
    fn from(v: OperatorEvent) -> StreamEvent {
        StreamEvent::Operator(v)
    }
}

impl From<TerminalEvent> for StreamEvent {
    fn from(v: TerminalEvent) -> StreamEvent {
        StreamEvent::Terminal(v)
    }
}
