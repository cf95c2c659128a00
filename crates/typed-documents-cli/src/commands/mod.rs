mod generate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-typed-documents")]
pub(crate) enum CommandEnum {
    /// Generate `TypedDocumentNode` declarations for GraphQL operations.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await
        }
    }
}
