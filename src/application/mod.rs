//! Application layer: demonstrations and their reports
//!
//! This layer drives the domain containers; printing is left to the CLI.

pub mod catalog;
pub mod demos;
pub mod error;
pub mod report;

pub use catalog::{catalog_tree, DemoKind, Severity};
pub use demos::{run, run_all};
pub use error::{ApplicationError, ApplicationResult};
pub use report::DemoReport;
