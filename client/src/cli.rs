use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Alpha-Beta Console Client")]
#[clap(about = "Play tic-tac-toe or reversi against an alpha-beta search", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[clap(name = "tictactoe")]
    TicTacToe(TicTacToeCommand),
    Reversi(ReversiCommand),
}

#[derive(Args)]
pub struct TicTacToeCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// The player the human controls, 0 moves first. Asked for at the start when omitted.
    #[clap(long)]
    pub human: Option<usize>,
}

#[derive(Args)]
pub struct ReversiCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// The player the human controls, 0 moves first. Asked for at the start when omitted.
    #[clap(long)]
    pub human: Option<usize>,

    /// Plies searched before the heuristic estimates a position.
    #[clap(short, long)]
    pub depth: Option<usize>,

    /// "piece-count" or "corners".
    #[clap(long)]
    pub heuristic: Option<String>,
}
