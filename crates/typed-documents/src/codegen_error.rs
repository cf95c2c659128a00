use crate::ast;
use thiserror::Error;

/// Fatal errors that abort a generation run.
///
/// No partial output is produced when any of these occur.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CodegenError {
    #[error("Missing document location")]
    MissingDocumentLocation,

    #[error("Missing document node for `{location}`")]
    MissingDocumentNode {
        location: String,
    },

    #[error("Operation must have a name (at {location}:{position})")]
    UnnamedOperation {
        location: String,
        position: ast::AstPos,
    },
}
