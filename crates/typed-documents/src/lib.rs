//! Generates `TypedDocumentNode` declarations for the named operations in a
//! set of GraphQL executable documents.
//!
//! For every named operation this emits a TypeScript declaration binding the
//! operation's runtime document to its result and variables types:
//!
//! ```ts
//! export const authors: TypedDocumentNode<AuthorsQuery, AuthorsQueryVariables>;
//! ```
//!
//! The result/variables types themselves are produced by a separate type
//! generation stage and are only referenced here by name (see
//! [`OperationTypeNames`]).

pub mod ast;
mod codegen_error;
mod codegen_plugin;
pub mod file_reader;
mod generation_result;
pub mod naming;
mod operation_kind;
mod source_document;
mod typed_document_plugin;
mod typed_document_visitor;
mod user_config;

pub use codegen_error::CodegenError;
pub use codegen_plugin::CodegenPlugin;
pub use generation_result::GenerationResult;
pub use generation_result::IMPORT_STATEMENT;
pub use naming::OperationTypeNames;
pub use operation_kind::OperationKind;
pub use source_document::SourceDocument;
pub use source_document::SourceDocumentLoadError;
pub use typed_document_plugin::TypedDocumentPlugin;
pub use typed_document_visitor::TypedDocumentVisitor;
pub use user_config::UserConfig;

#[cfg(test)]
mod test;
