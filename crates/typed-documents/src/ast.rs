//! Owned (`'static`) aliases over the [`graphql_parser`] AST.

pub type AstPos = graphql_parser::Pos;

pub mod operation {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type Mutation = graphql_parser::query::Mutation<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Query = graphql_parser::query::Query<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Subscription = graphql_parser::query::Subscription<'static, String>;

    /// Parse an executable document into an owned AST.
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        graphql_parser::query::parse_query::<String>(content)
            .map(|doc| doc.into_static())
    }
}

pub mod schema {
    pub type Document = graphql_parser::schema::Document<'static, String>;
}
