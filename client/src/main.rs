mod cli;
mod game_loop;
mod options;

use std::io;

use alphabeta::ValueSearch;
use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use common::ConfigLoader;
use dotenv::dotenv;
use engine::GameState;
use env_logger::Env;
use game_loop::GameLoop;
use log::info;
use options::PlayOptions;

const DEFAULT_REVERSI_DEPTH: usize = 6;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game_loop = GameLoop::new(stdin.lock(), stdout.lock());

    match &cli.command {
        Commands::TicTacToe(args) => {
            let config = ConfigLoader::load_or_default(&args.config, "tictactoe".to_string())?;
            let options = config.load::<PlayOptions>()?.with_human(args.human)?;

            info!("{:?}", options);

            let heuristic = |state: &tictactoe::GameState| state.terminal_value().unwrap_or(0.0);
            let search: Box<dyn ValueSearch<tictactoe::GameState>> =
                options.search.search(heuristic);

            game_loop.play(tictactoe::GameState::initial(), search.as_ref(), options.human)?;
        }
        Commands::Reversi(args) => {
            let config = ConfigLoader::load_or_default(&args.config, "reversi".to_string())?;
            let options = config
                .load::<PlayOptions>()?
                .with_human(args.human)?
                .with_depth(args.depth)?
                .with_heuristic(args.heuristic.as_deref())?
                .with_default_depth(DEFAULT_REVERSI_DEPTH)?;

            info!("{:?}", options);

            let search: Box<dyn ValueSearch<reversi::GameState>> =
                options.search.search(options.heuristic);

            game_loop.play(reversi::GameState::initial(), search.as_ref(), options.human)?;
        }
    }

    Ok(())
}
