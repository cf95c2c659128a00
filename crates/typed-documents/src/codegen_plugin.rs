use crate::ast;
use crate::CodegenError;
use crate::GenerationResult;
use crate::SourceDocument;

/// The boundary between a code generation host and a plugin.
///
/// A host resolves the schema, loads and parses documents, and writes files.
/// The plugin is a pure function from documents (and configuration) to a
/// [`GenerationResult`].
pub trait CodegenPlugin {
    type Config;

    /// Check the plugin's configuration before [`generate`](Self::generate)
    /// is called.
    fn validate(&self, config: &Self::Config) -> Result<(), CodegenError>;

    fn generate(
        &self,
        schema: Option<&ast::schema::Document>,
        documents: &[SourceDocument],
        config: &Self::Config,
    ) -> Result<GenerationResult, CodegenError>;
}
