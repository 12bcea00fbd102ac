//! Streams over containers, in three execution strategies.
//!
//! Each strategy lives in its own module and exposes a `Stream` type with the
//! same intermediate vocabulary (`map`, `filter`). All three implement
//! [`Terminal`], which derives every terminal operation from one early-exit
//! traversal, so `collect`, `sum`, `reduce`, `find_first`, `find_any`, and
//! `count` mean the same thing everywhere.
//!
//! Streams are normally obtained through [`ToStream`], implemented for every
//! adapted container.

pub mod eager;
pub mod lazy;
pub mod stepped;
pub mod terminal;
pub mod thunk;
pub mod to_stream;

pub use terminal::{FoldWhile, Terminal};
pub use thunk::Thunk;
pub use to_stream::ToStream;
