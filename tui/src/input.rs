//! Reading the user's input.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use displaydoc::Display;
use rlifeboard_lib::Cell;
use std::io::{self, Write};
use thiserror::Error;

/// Invalid number input.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub(crate) enum InputError {
    /// Input not a valid number! Try again...
    NotANumber,
    /// Input is out of bounds. Must be between {min} and {max}
    OutOfBounds { min: usize, max: usize },
}

/// Parses a number in `[min, max]`.
pub(crate) fn parse_number(input: &str, min: usize, max: usize) -> Result<usize, InputError> {
    let number = input
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber)?;
    if number < min || number > max {
        return Err(InputError::OutOfBounds { min, max });
    }
    Ok(number)
}

/// Keeps the terminal in raw mode while alive.
pub(crate) struct RawMode(());

impl RawMode {
    pub(crate) fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Whether `key` is Ctrl-C, which raw mode does not turn into a signal.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn interrupted() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "interrupted")
}

/// Prints `prompt` and reads a line, without the line break.
pub(crate) fn read_line(prompt: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Asks for a number in `[min, max]` until a valid one is entered.
pub(crate) fn ask_number(prompt: &str, min: usize, max: usize) -> io::Result<usize> {
    loop {
        match parse_number(&read_line(prompt)?, min, max) {
            Ok(number) => return Ok(number),
            Err(e) => println!("\n{}\n", e),
        }
    }
}

/// Waits for a single key press, without echoing it.
///
/// Enter is read as `'\n'`. Other keys without a character are skipped.
pub(crate) fn read_key() -> io::Result<char> {
    let _raw = RawMode::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_interrupt(&key) {
                return Err(interrupted());
            }
            match key.code {
                KeyCode::Char(c) => return Ok(c),
                KeyCode::Enter => return Ok('\n'),
                _ => (),
            }
        }
    }
}

/// Prints `prompt` and reads a menu option in `[1, count]` from a single key.
pub(crate) fn read_option(prompt: &str, count: usize) -> io::Result<Result<usize, InputError>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;
    let key = read_key()?;
    let option = parse_number(&key.to_string(), 1, count);
    if let Ok(option) = option {
        println!("{}", option);
    }
    Ok(option)
}

/// Reads one template cell: `O` for alive, `X` for dead.
///
/// Other keys are ignored. The accepted key is echoed.
pub(crate) fn read_cell() -> io::Result<Cell> {
    loop {
        let cell = match read_key()?.to_ascii_uppercase() {
            'O' => Cell::Alive,
            'X' => Cell::Dead,
            _ => continue,
        };
        let mut stdout = io::stdout();
        write!(stdout, "{}", if cell.is_alive() { 'O' } else { 'X' })?;
        stdout.flush()?;
        return Ok(cell);
    }
}
