use crate::ast;
use crate::CodegenError;
use crate::CodegenPlugin;
use crate::GenerationResult;
use crate::SourceDocument;
use crate::TypedDocumentVisitor;
use crate::UserConfig;
use inherent::inherent;

type Result<T> = std::result::Result<T, CodegenError>;

/// Generates `TypedDocumentNode` declarations across all of a run's
/// documents.
#[derive(Clone, Debug, Default)]
pub struct TypedDocumentPlugin;

#[inherent]
impl CodegenPlugin for TypedDocumentPlugin {
    type Config = UserConfig;

    /// Always succeeds: there are no options to validate.
    pub fn validate(&self, _config: &UserConfig) -> Result<()> {
        Ok(())
    }

    /// Run a [`TypedDocumentVisitor`] over each document in order and join
    /// their output.
    ///
    /// Documents that produce no declarations (such as fragment-only
    /// documents) contribute neither text nor a separator. The
    /// [`IMPORT_STATEMENT`](crate::IMPORT_STATEMENT) is only prepended when
    /// there is content for it to serve.
    pub fn generate(
        &self,
        _schema: Option<&ast::schema::Document>,
        documents: &[SourceDocument],
        config: &UserConfig,
    ) -> Result<GenerationResult> {
        log::debug!("Generating typed documents for {} documents...", documents.len());

        let mut outputs = vec![];
        for source_doc in documents {
            let location = match source_doc.location.as_deref() {
                Some(location) if !location.is_empty() => location,
                _ => return Err(CodegenError::MissingDocumentLocation),
            };
            let Some(document) = &source_doc.document else {
                return Err(CodegenError::MissingDocumentNode {
                    location: location.to_string(),
                });
            };

            let output =
                TypedDocumentVisitor::new(location, config)
                    .visit_document(document)?;
            if output.is_empty() {
                log::debug!("No operations found in `{location}`.");
            } else {
                outputs.push(output);
            }
        }

        Ok(GenerationResult::from_content(outputs.join("\n\n")))
    }
}
