//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    evaluate::EvaluateArgs, legal_moves::LegalMovesArgs, search::SearchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "reversi",
    about = "Depth-limited alpha-beta search for Reversi positions, with a full trace of every visited node"
)]
pub enum Reversi {
    #[structopt(
        name = "search",
        about = "Search the position in `--input` (default: input.txt) to the depth limit given in the file, or `--depth` when provided. Prints the best next board followed by the node trace, to stdout or to `--output`. Pass `--no-pruning` for plain minimax."
    )]
    Search(SearchArgs),
    #[structopt(
        name = "legal-moves",
        about = "List the legal moves of the side to move in `--input`, with the directions each one flips."
    )]
    LegalMoves(LegalMovesArgs),
    #[structopt(
        name = "evaluate",
        about = "Print the positional evaluation of the board in `--input` from the perspective of the side to move."
    )]
    Evaluate(EvaluateArgs),
}

impl crate::cli::commands::Command for Reversi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Search(cmd),
            LegalMoves(cmd),
            Evaluate(cmd),
        }
    }
}
