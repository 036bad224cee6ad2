use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgqlpick::operation::OperationKind;
use libgqlpick::schema::SchemaBuilder;
use libgqlpick::PickContext;
use libgqlpick::PickOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OperationKindArg {
    Mutation,
    Query,
    Subscription,
}
impl From<OperationKindArg> for OperationKind {
    fn from(value: OperationKindArg) -> Self {
        match value {
            OperationKindArg::Mutation => OperationKind::Mutation,
            OperationKindArg::Query => OperationKind::Query,
            OperationKindArg::Subscription => OperationKind::Subscription,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct PickCmd {
    #[arg(
        default_value_t=1,
        help="How many times an object type may repeat along one branch of \
             the expanded operation.",
        long,
    )]
    circular_reference_depth: usize,

    #[arg(
        help="GraphQL files or directories holding fragment definitions that \
             field paths may spread with `__fragment_<Name>`.",
        long="fragments",
        value_name="FILE_OR_DIR_PATH",
    )]
    fragment_paths: Vec<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Object types never chosen when a union or interface is resolved \
             without an explicit type condition.",
        long,
        value_delimiter = ',',
    )]
    no_resolve: Vec<String>,

    #[arg(
        default_value="query",
        help="Kind of operation to build.",
        long,
        value_enum,
    )]
    operation_kind: OperationKindArg,

    #[arg(
        help="GraphQL schema files or directories containing them.",
        long="schema",
        required=true,
        value_name="FILE_OR_DIR_PATH",
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="Dotted field paths to select (e.g. `user.organization.name`).",
        name="FIELD_PATHS",
        required=true,
    )]
    field_paths: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for PickCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.pick() {
            Ok(document) => CommandResult::stdout(format_args!("{document}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

impl PickCmd {
    fn pick(&self) -> anyhow::Result<String> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        let schema_files = find_graphql_files(&self.schema_paths, &graphql_file_exts)?;
        log::debug!("Loading schema from {} file(s)...", schema_files.len());
        let schema = SchemaBuilder::new()
            .load_files(schema_files)
            .and_then(|builder| builder.build())
            .context("Failed to build schema")?;

        let mut options = PickOptions::builder()
            .circular_reference_depth(self.circular_reference_depth)
            .no_resolve(self.no_resolve.iter().map(|name| name.trim().to_string()));
        for fragment_file in find_graphql_files(&self.fragment_paths, &graphql_file_exts)? {
            options = options.fragment_file(fragment_file);
        }

        let ctx = PickContext::new(schema, options.build())
            .context("Invalid pick options")?;
        let document = ctx
            .pick_operation(self.operation_kind.into(), &self.field_paths)
            .context("Failed to pick field paths")?;
        Ok(document.to_string())
    }
}

/// Every GraphQL file at or under `paths`. A path naming a file directly is
/// kept whatever its extension.
fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut file_paths = vec![];
    for path in paths {
        if path.is_file() {
            file_paths.push(path.to_path_buf());
            continue;
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if has_graphql_ext(entry_path, graphql_file_exts) {
                log::trace!("Found file at {entry_path:#?}.");
                file_paths.push(entry_path.to_path_buf());
            }
        }
    }
    Ok(file_paths)
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
        .unwrap_or(false)
}
