use clap::CommandFactory;
use crate::commands;
use crate::logging;

#[derive(clap::Parser, Debug)]
#[command(name = "sortgraphql", version, after_help = logging::LOG_LEVEL_HELP)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose (debug level) output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> std::process::ExitCode {
        match Self::command().print_help() {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                log::error!("Could not print help: {e}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}
