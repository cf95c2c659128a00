use crate::ast;
use crate::file_reader;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SourceDocumentLoadError>;

/// One input document as handed to a plugin by its host.
///
/// Both fields are required for generation. They are optional here because
/// hosts may construct documents incrementally, and their absence is reported
/// as a [`CodegenError`](crate::CodegenError) when the document is processed.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceDocument {
    pub location: Option<String>,
    pub document: Option<ast::operation::Document>,
}
impl SourceDocument {
    pub fn new(
        location: impl Into<String>,
        document: ast::operation::Document,
    ) -> Self {
        Self {
            location: Some(location.into()),
            document: Some(document),
        }
    }

    /// Read and parse the executable document at `file_path`. The path (as
    /// displayed) becomes the document's location.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|e| SourceDocumentLoadError::FileReadError(Arc::new(e)))?;
        Self::from_str(content, file_path.display().to_string())
    }

    pub fn from_str(
        content: impl AsRef<str>,
        location: impl Into<String>,
    ) -> Result<Self> {
        let location = location.into();
        match ast::operation::parse(content.as_ref()) {
            Ok(document) => Ok(Self::new(location, document)),
            Err(err) => Err(SourceDocumentLoadError::ParseError {
                location,
                err: Arc::new(err),
            }),
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum SourceDocumentLoadError {
    #[error("Failure while trying to read a document file from disk: {0}")]
    FileReadError(Arc<file_reader::ReadContentError>),

    #[error("Error parsing executable document `{location}`: {err}")]
    ParseError {
        location: String,
        err: Arc<ast::operation::ParseError>,
    },
}
