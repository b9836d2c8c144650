use crate::commands::SortOptions;
use crate::file_util;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SortCmd {
    #[arg(
        default_value=".bak",
        help="Extension appended to a schema file's name to name its backup.",
        long,
    )]
    backup_file_extension: String,

    #[arg(
        help="Do not back up schema files before overwriting them.",
        long,
    )]
    no_backup: bool,

    #[command(flatten)]
    pub(crate) options: SortOptions,
}
impl SortCmd {
    /// Rewrites every unsorted file with its sorted rendering and returns
    /// the paths that were rewritten.
    pub(crate) fn sort_files(&self) -> anyhow::Result<SortSummary> {
        if !self.no_backup {
            file_util::check_backup_extension(&self.backup_file_extension)?;
        }

        let mut summary = SortSummary::default();
        for (path, sorted_schema) in self.options.sort_files()? {
            log::info!("Sorting file {}", path.display());
            if sorted_schema.is_sorted() {
                log::info!("Schema file is already sorted, exiting");
                summary.already_sorted.push(path);
                continue;
            }

            if !self.no_backup {
                let backup_path = file_util::backup_file(&path, &self.backup_file_extension)?;
                log::info!("Saved backup of {} to {}", path.display(), backup_path.display());
            }
            file_util::save_schema(&path, &sorted_schema.sorted)?;
            log::info!("Saved sorted schema file to {}", path.display());
            summary.rewritten.push(path);
        }
        Ok(summary)
    }
}

#[inherent::inherent]
impl RunnableCommand for SortCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.sort_files() {
            Ok(summary) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Sorted GraphQL schema files:\n",
                    "  * Rewrote {} files.\n",
                    "  * {} files were already sorted.",
                ),
                output_utils::GREEN_CHECK,
                summary.rewritten.len(),
                summary.already_sorted.len(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Could not sort schema files: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct SortSummary {
    pub(crate) already_sorted: Vec<PathBuf>,
    pub(crate) rewritten: Vec<PathBuf>,
}
