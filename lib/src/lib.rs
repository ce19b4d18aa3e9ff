//! __Rlifeboard__ simulates [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a bounded board.
//!
//! A [`GameBoard`] holds the cells. [`Template`]s, small named patterns,
//! are placed on it with [`GameBoard::insert_template`], and a
//! [`TurnScheduler`] advances it one generation per turn, waiting a
//! pacing interval first so that the driver can cancel the turn.
//!
//! Cells outside the board count as dead; there is no wraparound.
//!
//! # Example
//!
//! ```rust
//! use rlifeboard_lib::{CancellationToken, GameBoard, Template, TurnOutcome, TurnScheduler};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), rlifeboard_lib::Error> {
//! let blinker = Template::from_plaintext("blinker", "OOO\n...")?;
//! let mut board = GameBoard::new(5, 5)?;
//! board.insert_template(&blinker, 1, 2)?;
//!
//! let scheduler = TurnScheduler::new(Duration::from_millis(1));
//! let token = CancellationToken::new();
//! assert_eq!(scheduler.advance_turn(&mut board, &token).await, TurnOutcome::Advanced);
//! assert_eq!(board.to_string(), ".....\n..O..\n..O..\n..O..\n.....\n");
//! # Ok(())
//! # }
//! ```

mod board;
mod cancel;
mod cells;
mod config;
mod error;
mod format;
mod grid;
mod save;
mod scheduler;
#[cfg(feature = "serde")]
mod store;
mod template;

pub use board::{GameBoard, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use cancel::{Cancel, CancellationToken, Never};
pub use cells::{Cell, ALIVE_GLYPH, DEAD_GLYPH};
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use format::Format;
pub use save::{BoardSnapshot, TemplateRecord};
pub use scheduler::{SchedulerState, TurnOutcome, TurnScheduler, DEFAULT_TURN_INTERVAL};
#[cfg(feature = "serde")]
pub use store::{FileGameStore, FileTemplateStore, GameStore, TemplateStore};
pub use template::{Template, MAX_NAME_LEN, MAX_TEMPLATE_SIZE, MIN_TEMPLATE_SIZE};
