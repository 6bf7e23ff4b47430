//! Search command - run the alpha-beta search and write the report.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use log::info;
use reversi::alpha_beta_searcher::{execute, SearchConfig};
use reversi::report::write_report;
use structopt::StructOpt;

use super::util::{exit_with_error, load_problem, InputArgs};
use super::Command;

#[derive(StructOpt)]
pub struct SearchArgs {
    #[structopt(flatten)]
    pub input: InputArgs,
    /// Write the report to this file instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
    /// Override the depth limit from the input file
    #[structopt(short, long, allow_hyphen_values = true)]
    pub depth: Option<i32>,
    /// Visit every node instead of pruning
    #[structopt(long)]
    pub no_pruning: bool,
    /// Give up after visiting this many nodes
    #[structopt(long)]
    pub node_budget: Option<usize>,
}

impl Command for SearchArgs {
    fn execute(self) {
        let problem = load_problem(&self.input.input);
        let config = SearchConfig::new(self.depth.unwrap_or(problem.depth_limit))
            .with_pruning(!self.no_pruning)
            .with_node_budget(self.node_budget);

        let outcome = match execute(&problem.board, problem.mover, config) {
            Ok(outcome) => outcome,
            Err(err) => exit_with_error(format!("search failed: {}", err)),
        };
        info!(
            "{} to move, value {}, {} trace entries",
            problem.mover,
            outcome.value,
            outcome.trace.len()
        );

        let written = match &self.output {
            Some(path) => {
                File::create(path).and_then(|file| write_report(&mut BufWriter::new(file), &outcome))
            }
            None => write_report(&mut io::stdout().lock(), &outcome),
        };
        if let Err(err) = written {
            exit_with_error(format!("unable to write report: {}", err));
        }
    }
}
