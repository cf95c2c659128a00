/// The import that brings `TypedDocumentNode` into scope for the generated
/// declarations.
pub const IMPORT_STATEMENT: &str =
    "import { TypedDocumentNode } from \"@graphql-typed-document-node/core\";\n";

/// The output of a generation run, handed back to the host.
///
/// `prepend` is non-empty if and only if `content` is non-empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerationResult {
    pub prepend: Vec<String>,
    pub content: String,
}
impl GenerationResult {
    pub(crate) fn from_content(content: String) -> Self {
        let prepend =
            if content.is_empty() {
                vec![]
            } else {
                vec![IMPORT_STATEMENT.to_string()]
            };

        Self {
            prepend,
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Concatenate `prepend` and `content` the way a code generation host
    /// assembles a plugin's output into a file: prepend entries joined by
    /// newlines, then a newline, then the content.
    pub fn render(&self) -> String {
        if self.prepend.is_empty() {
            return self.content.clone();
        }
        format!("{}\n{}", self.prepend.join("\n"), self.content)
    }
}
