//! Command-line argument parsing and help for peek.
//!
//! Flags may appear in any order; the first non-dash argument becomes the
//! target path. Unknown dash arguments are ignored.

use crate::app::Options;

use std::path::PathBuf;

#[derive(Debug)]
pub enum CliAction {
    Run(Options),
    Exit,
}

/// Parses the process arguments into a [CliAction].
pub fn handle_args() -> CliAction {
    parse_args(std::env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();

    for arg in args {
        match arg.as_str() {
            "-a" | "--all" => opts.show_all = true,
            "-f" | "--files" => opts.files_only = true,
            "-h" | "--help" => {
                print_help();
                return CliAction::Exit;
            }
            "-v" | "--version" => {
                print_version();
                return CliAction::Exit;
            }
            arg if !arg.starts_with('-') => opts.target = PathBuf::from(arg),
            _ => {}
        }
    }
    CliAction::Run(opts)
}

fn print_version() {
    println!("peek {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"peek - a one-shot directory overview in side-by-side panels

USAGE:
  peek [OPTIONS] [PATH]

PATH:
  Directory to list (defaults to the current directory)

OPTIONS:
  -a, --all               Show hidden files (dotfiles)
  -f, --files             Files only, no directory panel
  -h, --help              Print help information
  -v, --version           Display the current installed version of peek
"#
    );
}
