//! Legal moves command - list the placements available to the side to move.

use reversi::move_generator::generate_moves;
use reversi::reversi_move::Move;
use structopt::StructOpt;

use super::util::{load_problem, InputArgs};
use super::Command;

#[derive(StructOpt)]
pub struct LegalMovesArgs {
    #[structopt(flatten)]
    pub input: InputArgs,
}

impl Command for LegalMovesArgs {
    fn execute(self) {
        let problem = load_problem(&self.input.input);
        let moves = generate_moves(&problem.board, problem.mover);
        if moves.is_empty() {
            println!("{}", Move::Pass);
            return;
        }

        for reversi_move in moves.iter() {
            if let Move::Place(placement) = reversi_move {
                let directions: Vec<String> = placement
                    .directions()
                    .iter()
                    .map(|direction| direction.to_string())
                    .collect();
                println!("{} {}", placement.coord(), directions.join(","));
            }
        }
    }
}
