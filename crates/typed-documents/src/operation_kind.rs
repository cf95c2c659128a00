use crate::ast;

/// The kind of a GraphQL operation, independent of any operation's details.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The keyword used to declare this kind of operation in a GraphQL
    /// document (e.g. `"query"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The shorthand selection-set form (`{ ... }`) is an anonymous query.
    pub fn from_ast(def: &ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition as OpDef;
        match def {
            OpDef::Mutation(_) => Self::Mutation,
            OpDef::Query(_) | OpDef::SelectionSet(_) => Self::Query,
            OpDef::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
