mod cli;

use cli::commands::Command;
use cli::Reversi;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Reversi::from_args().execute();
}
