//! Collection pitfalls made visible.
//!
//! The domain layer provides containers with reference semantics that the
//! standard collections do not model: a list shared by fail-fast iterators,
//! removal cursors and live sub-list views, and a list adapter over a
//! fixed-size array. The application layer runs one demonstration per rule
//! and returns its output as a report; the CLI prints it.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
