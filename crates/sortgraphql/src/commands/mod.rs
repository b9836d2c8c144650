mod check;
mod sort;
mod sort_options;

use crate::Cli;
use crate::CommandResult;
pub(crate) use check::CheckCmd;
pub(crate) use sort::SortCmd;
pub(crate) use sort_options::SortOptions;

#[derive(Debug, clap::Parser)]
#[command(name = "sortgraphql")]
pub(crate) enum CommandEnum {
    /// Lists the schema files that are not sorted, without changing them.
    Check(Box<CheckCmd>),

    /// Sorts schema files in place.
    Sort(Box<SortCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Sort(cmd) => cmd.run(cli).await,
        }
    }
}
