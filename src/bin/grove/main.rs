mod tasks;

use std::process::ExitCode;

use clap::Parser;

use grove::dispatch::{DispatchError, Dispatcher};
use grove::resolve::ResolveError;

/// clap's own help flag is disabled so `-h`/`--help` reach the tree, where
/// the dispatcher registers them as an ordinary group entry.
#[derive(Parser, Debug)]
#[command(
    name = "grove",
    about = "Run this project's tasks from a nested command tree",
    disable_help_flag = true
)]
struct Cli {
    /// Command path, e.g. `test doc`; prints the tree when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    path: Vec<String>,
}

fn main() -> ExitCode {
    grove::logger::init();
    let cli = Cli::parse();

    let dispatcher = Dispatcher::new(tasks::tree(), tasks::prefix());
    let path: Vec<&str> = cli.path.iter().map(String::as_str).collect();
    match dispatcher.run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        // the usage hint has already been printed
        Err(DispatchError::Resolve(ResolveError::UnsupportedPath { .. })) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
