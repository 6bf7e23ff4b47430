//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process;

use reversi::input_handler::{read_problem, Problem};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct InputArgs {
    /// Problem file: mover, depth limit and 8 board rows
    #[structopt(short, long, default_value = "input.txt", parse(from_os_str))]
    pub input: PathBuf,
}

pub(crate) fn load_problem(path: &Path) -> Problem {
    match read_problem(path) {
        Ok(problem) => problem,
        Err(err) => exit_with_error(err),
    }
}

pub(crate) fn exit_with_error<E: Display>(error: E) -> ! {
    eprintln!("error: {}", error);
    process::exit(1)
}
