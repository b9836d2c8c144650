use crate::Cli;
use crate::commands::CheckCmd;
use crate::commands::CommandEnum;
use crate::commands::SortCmd;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;

pub(super) const UNSORTED: &str = "type Query {\n  b: Int\n  a: String\n}\n";
pub(super) const SORTED: &str = "type Query {\n  a: String\n  b: Int\n}\n";

fn parse_command(args: &[&str]) -> CommandEnum {
    let cli =
        Cli::try_parse_from(std::iter::once("sortgraphql").chain(args.iter().copied()))
            .expect("arguments should parse");
    cli.cmd.expect("a subcommand was given")
}

pub(super) fn check_cmd(args: &[&str]) -> CheckCmd {
    let mut all_args = vec!["check"];
    all_args.extend_from_slice(args);
    match parse_command(&all_args) {
        CommandEnum::Check(cmd) => *cmd,
        other => panic!("expected the check command, got: {other:?}"),
    }
}

pub(super) fn sort_cmd(args: &[&str]) -> SortCmd {
    let mut all_args = vec!["sort"];
    all_args.extend_from_slice(args);
    match parse_command(&all_args) {
        CommandEnum::Sort(cmd) => *cmd,
        other => panic!("expected the sort command, got: {other:?}"),
    }
}

pub(super) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("could not create directory");
    }
    std::fs::write(&path, content).expect("could not write file");
    std::fs::canonicalize(&path).expect("could not canonicalize")
}

pub(super) fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).expect("could not read file")
}

pub(super) fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
