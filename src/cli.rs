use clap::Parser;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe", version, long_about = None)]
pub struct Cli {
    /// Name of the player who moves first and plays X
    #[arg(long, env = "TTT_FIRST_PLAYER", default_value = "X")]
    pub first: String,

    /// Name of the player who plays O
    #[arg(long, env = "TTT_SECOND_PLAYER", default_value = "O")]
    pub second: String,

    /// Log filter, e.g. `debug` or `tic_tac_toe=trace`
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log: String,
}
