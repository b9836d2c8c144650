use crate::commands::SortOptions;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[command(flatten)]
    options: SortOptions,
}
impl CheckCmd {
    /// Returns the paths of the files that are not sorted.
    pub(crate) fn unsorted_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut unsorted = vec![];
        for (path, sorted_schema) in self.options.sort_files()? {
            if sorted_schema.is_sorted() {
                log::debug!("{} is sorted.", path.display());
            } else {
                log::info!("{} is not sorted.", path.display());
                unsorted.push(path);
            }
        }
        Ok(unsorted)
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.unsorted_files() {
            Ok(unsorted) if unsorted.is_empty() => CommandResult::stdout(format_args!(
                "{} All GraphQL schema files are sorted.",
                output_utils::GREEN_CHECK,
            )),

            Ok(unsorted) => CommandResult::failed_stdout(format_args!(
                "{} {} GraphQL schema files are not sorted:\n{}",
                output_utils::WARNING,
                unsorted.len(),
                unsorted.iter()
                    .map(|path| format!("  * {}", path.display()))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Could not check schema files: {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
