//! The interactive menu.

use crate::{
    input::{self, RawMode},
    session::Session,
};
use crossterm::{
    cursor::{MoveTo, MoveToNextLine},
    event::{Event, EventStream, KeyEventKind},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use futures_util::StreamExt;
use log::{error, warn};
use rlifeboard_lib::{
    Cancel, CancellationToken, GameBoard, Template, MAX_BOARD_SIZE, MAX_TEMPLATE_SIZE,
    MIN_BOARD_SIZE, MIN_TEMPLATE_SIZE,
};
use std::io::{self, Write};

/// The screens of the menu. Each handler returns the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Menu {
    Main,
    CreateTemplate,
    PlayGame,
    NewGame,
    ResumeGame,
    Play,
    Exit,
}

/// Runs the menu until the user exits.
pub(crate) async fn run(session: &mut Session) -> io::Result<()> {
    let mut menu = Menu::Main;
    while menu != Menu::Exit {
        let next = match menu {
            Menu::Main => main_menu(),
            Menu::CreateTemplate => create_template(session),
            Menu::PlayGame => play_game_menu(),
            Menu::NewGame => new_game(session),
            Menu::ResumeGame => resume_game(session),
            Menu::Play => play(session).await,
            Menu::Exit => Ok(Menu::Exit),
        };
        menu = match next {
            Ok(next) => next,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Menu::Exit,
            Err(e) => return Err(e),
        };
    }
    println!("Goodbye.");
    Ok(())
}

fn main_menu() -> io::Result<Menu> {
    println!("--- Game of Life ---");
    println!("1. Create Template");
    println!("2. Play Game");
    println!("3. Exit\n");
    Ok(match input::read_option("Enter an option: ", 3)? {
        Ok(1) => Menu::CreateTemplate,
        Ok(2) => Menu::PlayGame,
        Ok(_) => Menu::Exit,
        Err(e) => {
            println!("\n{}\n", e);
            Menu::Main
        }
    })
}

fn play_game_menu() -> io::Result<Menu> {
    println!("\n--- Play Game ---\n");
    println!("1. New Game");
    println!("2. Resume Game\n");
    Ok(match input::read_option("Enter an option: ", 2)? {
        Ok(1) => Menu::NewGame,
        Ok(_) => Menu::ResumeGame,
        Err(e) => {
            println!("\n{}\n", e);
            Menu::Main
        }
    })
}

fn create_template(session: &Session) -> io::Result<Menu> {
    println!("\n--- Create Template ---\n");
    let name = loop {
        let name = input::read_line("Enter template name: ")?;
        match Template::validate_name(&name) {
            Ok(()) => break name,
            Err(e) => println!("{} Try again...", e),
        }
    };
    let height = input::ask_number("Enter height: ", MIN_TEMPLATE_SIZE, MAX_TEMPLATE_SIZE)?;
    let width = input::ask_number("Enter width: ", MIN_TEMPLATE_SIZE, MAX_TEMPLATE_SIZE)?;

    println!("Enter cells ('O' is alive, 'X' is dead)");
    let mut cells = Vec::with_capacity(height);
    for _ in 0..height {
        let row = (0..width)
            .map(|_| input::read_cell())
            .collect::<io::Result<Vec<_>>>()?;
        println!();
        cells.push(row);
    }

    match Template::new(name, height, width, cells).and_then(|t| session.save_template(&t)) {
        Ok(()) => println!("Template saved.\n"),
        Err(e) => {
            error!("Cannot save the template: {}", e);
            println!("Template not saved: {}\n", e);
        }
    }
    Ok(Menu::Main)
}

fn new_game(session: &mut Session) -> io::Result<Menu> {
    let names = match session.list_templates() {
        Ok(names) => names,
        Err(e) => {
            println!("\nCannot list the templates: {}\n", e);
            return Ok(Menu::Main);
        }
    };
    if names.is_empty() {
        println!("\nNo templates found. Please create one before continuing.\n");
        return Ok(Menu::Main);
    }

    println!("\n--- New Game ---\n");
    println!("Templates:");
    for (i, name) in names.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    println!();
    let option = match input::parse_number(
        &input::read_line("Select a template: ")?,
        1,
        names.len(),
    ) {
        Ok(option) => option,
        Err(e) => {
            println!("\n{}\n", e);
            return Ok(Menu::Main);
        }
    };
    let template = match session.load_template(&names[option - 1]) {
        Ok(template) => template,
        Err(e) => {
            println!("\nAn error occurred while loading the template: {}\n", e);
            return Ok(Menu::Main);
        }
    };

    println!("\nTemplate\n");
    println!("{:<8}{}", "Name:", template.name());
    println!("{:<8}{}", "Height:", template.height());
    println!("{:<8}{}\n", "Width:", template.width());
    println!("{}", template);

    let min = template.height().max(MIN_BOARD_SIZE);
    let height = input::ask_number(
        &format!("Enter game height (must be at least {}): ", min),
        min,
        MAX_BOARD_SIZE,
    )?;
    let min = template.width().max(MIN_BOARD_SIZE);
    let width = input::ask_number(
        &format!("Enter game width (must be at least {}): ", min),
        min,
        MAX_BOARD_SIZE,
    )?;
    let max = width - template.width();
    let x = input::ask_number(
        &format!("Enter template x coordinate (cannot be more than {}): ", max),
        0,
        max,
    )?;
    let max = height - template.height();
    let y = input::ask_number(
        &format!("Enter template y coordinate (cannot be more than {}): ", max),
        0,
        max,
    )?;

    Ok(match session.new_game(&template, height, width, x, y) {
        Ok(()) => Menu::Play,
        Err(e) => {
            println!("\n{}\n", e);
            Menu::Main
        }
    })
}

fn resume_game(session: &mut Session) -> io::Result<Menu> {
    println!("\n--- Resume Game ---\n");
    Ok(match session.load_game() {
        Ok(true) => Menu::Play,
        Ok(false) => {
            println!("No saved game found.\n");
            Menu::Main
        }
        Err(e) => {
            println!("Cannot load the saved game: {}\n", e);
            Menu::Main
        }
    })
}

fn draw<W: Write>(out: &mut W, board: &GameBoard) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!("Generation {}", board.generation())),
        MoveToNextLine(2)
    )?;
    for line in board.to_string().lines() {
        queue!(out, Print(line), MoveToNextLine(1))?;
    }
    queue!(out, MoveToNextLine(1), Print("Press any key to stop game..."))?;
    out.flush()
}

/// Completes on the first key press.
async fn wait_for_key() {
    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return,
            Ok(_) => (),
            Err(e) => {
                warn!("Cannot read the terminal: {}", e);
                return;
            }
        }
    }
}

/// Plays the current game until a key is pressed, then saves it.
async fn play(session: &mut Session) -> io::Result<Menu> {
    let token = CancellationToken::new();
    let raw = RawMode::enable()?;
    let mut stdout = io::stdout();

    let game = async {
        let played = session
            .play(&token, None, |board| draw(&mut stdout, board))
            .await;
        token.cancel();
        played
    };
    let stop = async {
        tokio::select! {
            _ = wait_for_key() => token.cancel(),
            _ = token.cancelled() => (),
        }
    };
    let (played, ()) = tokio::join!(game, stop);
    drop(raw);
    println!("\n");
    played?;

    if let Err(e) = session.save_game() {
        error!("Cannot save the game: {}", e);
        println!("Game state not saved: {}\n", e);
    }
    Ok(Menu::Main)
}
