use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_typed_documents::SourceDocument;
use graphql_typed_documents::TypedDocumentPlugin;
use graphql_typed_documents::UserConfig;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="File to write the generated declarations to. Defaults to \
             stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL operation files or directories \
             containing GraphQL operation files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl GenerateCmd {
    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg, in argument order and sorted by path within each
    /// argument.
    fn collect_file_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            let walker =
                WalkDir::new(path.as_path())
                    .follow_links(true)
                    .sort_by_file_name();

            for entry in walker {
                let entry = entry.with_context(|| format!(
                    "Failed to scan files at/under {path:?}"
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:?}.");
                    continue;
                }

                if has_graphql_file_ext(entry_path, &graphql_file_exts) {
                    log::trace!("Found GraphQL file at {entry_path:?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    log::trace!("Skipping non-GraphQL file at {entry_path:?}.");
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file processed as a GraphQL file, even if
        // its file extension doesn't match one of `graphql_file_exts`.
        if file_paths.is_empty()
            && let [first_arg_path] = self.file_or_dir_paths.as_slice()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to process {first_arg_path:?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        Ok(file_paths)
    }

    fn generate(&self) -> anyhow::Result<Option<String>> {
        let file_paths = self.collect_file_paths()?;
        log::debug!("Found {} GraphQL files.", file_paths.len());

        let documents = file_paths
            .iter()
            .map(|path| SourceDocument::from_file(path))
            .collect::<Result<Vec<_>, _>>()?;

        let plugin = TypedDocumentPlugin;
        let config = UserConfig::default();
        plugin.validate(&config)?;
        let result = plugin.generate(None, &documents, &config)?;
        let rendered = result.render();

        match &self.output {
            Some(output_path) => {
                std::fs::write(output_path, &rendered).with_context(|| format!(
                    "Failed to write generated declarations to {output_path:?}"
                ))?;
                log::info!(
                    "{} Wrote typed document declarations for {} files to \
                    {output_path:?}.",
                    output_utils::GREEN_CHECK,
                    documents.len(),
                );
                Ok(None)
            },

            None => Ok(Some(rendered)),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.generate() {
            Ok(stdout) => CommandResult::success(stdout),
            Err(e) => CommandResult::failure(format_args!(
                "{} Failed to generate typed documents: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

/// Normalize extensions to their dotless, lowercase form.
fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .collect()
}

fn has_graphql_file_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}
