//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::application::catalog::DemoKind;
use crate::domain::CollectionError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("demonstration '{demo}' failed: {source}")]
    Demo {
        demo: DemoKind,
        #[source]
        source: CollectionError,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
