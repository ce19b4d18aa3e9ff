mod args;
#[cfg(feature = "tui")]
mod input;
#[cfg(feature = "tui")]
mod menu;
mod session;

use args::{Args, Mode, NewGame};
use log::info;
use rlifeboard_lib::{CancellationToken, MIN_BOARD_SIZE};
use session::Session;
use simple_logger::SimpleLogger;
use std::{
    error::Error,
    io::{self, Write},
    process,
};

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = SimpleLogger::new().with_level(args.log_level).init() {
        eprintln!("Cannot set up logging: {}", e);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Cannot start the runtime: {}", e);
            process::exit(1)
        });
    if let Err(e) = runtime.block_on(run(args)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(&args.config);
    match args.mode {
        #[cfg(feature = "tui")]
        Mode::Menu => menu::run(&mut session).await?,
        Mode::Headless { turns, new_game } => headless(&mut session, turns, new_game).await?,
    }
    Ok(())
}

/// Runs the game without the menu, printing every generation.
async fn headless(
    session: &mut Session,
    turns: Option<u64>,
    new_game: Option<NewGame>,
) -> Result<(), Box<dyn Error>> {
    match new_game {
        Some(new_game) => {
            let template = session.load_template(&new_game.template)?;
            let height = new_game
                .height
                .unwrap_or_else(|| template.height().max(MIN_BOARD_SIZE));
            let width = new_game
                .width
                .unwrap_or_else(|| template.width().max(MIN_BOARD_SIZE));
            session.new_game(&template, height, width, new_game.x, new_game.y)?;
        }
        None => {
            if !session.load_game()? {
                return Err("no saved game to resume, start a new one with --template".into());
            }
        }
    }

    let token = CancellationToken::new();
    let interrupt = tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted");
                token.cancel();
            }
        }
    });

    let mut stdout = io::stdout();
    let played = session
        .play(&token, turns, |board| {
            writeln!(stdout, "Generation {}\n{}", board.generation(), board)
        })
        .await;
    interrupt.abort();
    played?;

    if let Some(board) = session.board() {
        writeln!(stdout, "Generation {}\n{}", board.generation(), board)?;
    }
    session.save_game()?;
    Ok(())
}
