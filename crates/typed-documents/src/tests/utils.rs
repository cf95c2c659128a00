use crate::SourceDocument;

/// Parses `content` into a [`SourceDocument`], panicking on parse errors.
pub fn source_doc(location: &str, content: &str) -> SourceDocument {
    SourceDocument::from_str(content, location).unwrap()
}
