use crate::ast;
use crate::CodegenError;
use crate::OperationKind;
use crate::OperationTypeNames;
use crate::UserConfig;

type Result<T> = std::result::Result<T, CodegenError>;

/// Emits `TypedDocumentNode` declarations for the operations of a single
/// document.
///
/// Only the top-level definition list is inspected. Selection sets, variable
/// definitions and fragments never affect the output since the shape of each
/// operation's types is decided by the sibling type-generation stage.
#[derive(Clone, Debug)]
pub struct TypedDocumentVisitor<'a> {
    config: &'a UserConfig,
    location: &'a str,
}
impl<'a> TypedDocumentVisitor<'a> {
    /// `location` identifies the document in error messages. It is never
    /// echoed into the generated output.
    pub fn new(location: &'a str, config: &'a UserConfig) -> Self {
        Self {
            config,
            location,
        }
    }

    /// Produce the declarations for every operation in `document`, in source
    /// order, followed by a default export if the document contains exactly
    /// one operation.
    ///
    /// Returns an empty string for documents without operations (e.g. a
    /// document containing only fragments).
    pub fn visit_document(
        &self,
        document: &ast::operation::Document,
    ) -> Result<String> {
        let operations: Vec<&ast::operation::OperationDefinition> =
            document.definitions
                .iter()
                .filter_map(|def| match def {
                    ast::operation::Definition::Operation(op_def) => Some(op_def),
                    ast::operation::Definition::Fragment(_) => None,
                })
                .collect();

        let mut output = String::new();
        for op_def in &operations {
            let op_name = self.operation_name(op_def)?;
            let type_names = OperationTypeNames::new(
                op_name,
                OperationKind::from_ast(op_def),
            );
            log::trace!(
                "Declaring `{op_name}` as TypedDocumentNode<{}, {}> (`{}`).",
                type_names.result_type_name(),
                type_names.variables_type_name(),
                self.location,
            );

            output.push_str(&format!(
                "export const {op_name}: TypedDocumentNode<{}, {}>;\n",
                type_names.result_type_name(),
                type_names.variables_type_name(),
            ));
        }

        if let [sole_op_def] = operations.as_slice() {
            let op_name = self.operation_name(sole_op_def)?;
            output.push_str(&format!("export default {op_name};\n"));
        }

        Ok(output)
    }

    pub fn config(&self) -> &UserConfig {
        self.config
    }

    pub fn location(&self) -> &str {
        self.location
    }

    fn operation_name<'doc>(
        &self,
        op_def: &'doc ast::operation::OperationDefinition,
    ) -> Result<&'doc str> {
        use ast::operation::OperationDefinition as OpDef;
        let (name, position) = match op_def {
            OpDef::Mutation(op) => (op.name.as_deref(), op.position),
            OpDef::Query(op) => (op.name.as_deref(), op.position),
            OpDef::SelectionSet(ss) => (None, ss.span.0),
            OpDef::Subscription(op) => (op.name.as_deref(), op.position),
        };

        match name {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(CodegenError::UnnamedOperation {
                location: self.location.to_string(),
                position,
            }),
        }
    }
}
