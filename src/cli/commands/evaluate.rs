//! Evaluate command - print the static evaluation of a position.

use reversi::board::Player;
use reversi::evaluate;
use structopt::StructOpt;

use super::util::{load_problem, InputArgs};
use super::Command;

#[derive(StructOpt)]
pub struct EvaluateArgs {
    #[structopt(flatten)]
    pub input: InputArgs,
}

impl Command for EvaluateArgs {
    fn execute(self) {
        let problem = load_problem(&self.input.input);
        let board = &problem.board;
        println!("{}", board);
        println!(
            "score for {}: {}",
            problem.mover,
            evaluate::score(board, problem.mover)
        );
        println!(
            "pieces: {} {}, {} {}",
            Player::Black,
            board.count(Player::Black),
            Player::White,
            board.count(Player::White)
        );
        if evaluate::is_game_over(board) {
            println!("game over: neither side can move");
        }
    }
}
