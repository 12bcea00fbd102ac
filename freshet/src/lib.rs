//! Freshet is a library for chaining element transformations over ordinary containers.
//!
//! A stream is built from a container, extended with intermediate operations
//! (`map`, `filter`), and consumed by a terminal operation (`collect`, `sum`,
//! `reduce`, `find_first`, `find_any`, `count`). Intermediate operations apply
//! to every element in source order; terminal operations observe the sequence
//! with all of them applied.
//!
//! Three execution strategies share that vocabulary and differ only in *when*
//! the intermediate work runs:
//!
//! * [`stepped`](stream::stepped) queues steps and replays them during the
//!   terminal operation, one source traversal in total.
//! * [`eager`](stream::eager) materializes a fresh container at every
//!   intermediate call.
//! * [`lazy`](stream::lazy) wraps each element in a deferred cell and forces
//!   only what the terminal operation demands.
//!
//! # Examples
//!
//! ```
//! use freshet::{Terminal, ToStream};
//!
//! let numbers = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! let sum = numbers
//!     .stepped()
//!     .filter(|x| x % 2 == 0)
//!     .sum();
//!
//! assert_eq!(sum, 20);
//! ```

#![forbid(missing_docs)]

pub use stream::{FoldWhile, Terminal, ToStream};

/// Re-export of the `freshet_container` crate.
pub mod container {
    pub use freshet_container::*;
}

/// Re-export of the `freshet_logging` crate.
pub mod logging_core {
    pub use freshet_logging::*;
}

pub mod logging;
pub mod stream;

/// A composite trait for types usable as stream elements.
///
/// Elements are cloned out of borrowed sources, and queued steps and deferred
/// cells capture them by value, hence `Clone + 'static`.
pub trait Data: Clone + 'static {}
impl<T: Clone + 'static> Data for T {}
