mod cli;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use tic_tac_toe::game::{Player, TicTacToe};
use tic_tac_toe::presenter::{Session, SessionError};
use tic_tac_toe::terminal::{Command, CommandError, TerminalRenderer, HELP};

fn prompt() -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "> ")?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(io::stderr)
        .init();

    let game = TicTacToe::with_players(
        Player::new(cli.first, true),
        Player::new(cli.second, false),
    )?;
    info!("starting a new game");
    let mut session = Session::new(game, TerminalRenderer::new(io::stdout()))?;
    println!("type `help` for the list of commands");
    prompt()?;

    for line in io::stdin().lock().lines() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => {
                prompt()?;
                continue;
            }
            Err(err) => {
                println!("{}, type `help` for the list of commands", err);
                prompt()?;
                continue;
            }
        };

        let result = match command {
            Command::Play { x, y } => session.on_cell_activated(x, y),
            Command::NewGame => session.on_new_game(),
            Command::Help => {
                println!("{}", HELP);
                prompt()?;
                continue;
            }
            Command::Quit => break,
        };

        match result {
            Ok(status) if status.is_final() => {
                println!("type `new` to play again or `quit` to leave");
            }
            Ok(_) => {}
            Err(SessionError::Game(err)) => {
                debug!(%err, "command rejected");
                println!("{}", err);
            }
            Err(err) => return Err(err.into()),
        }
        prompt()?;
    }

    info!("leaving the game");
    Ok(())
}
