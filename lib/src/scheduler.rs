//! Pacing of turns.

use crate::{board::GameBoard, cancel::Cancel};
use log::debug;
use std::{cell::Cell, time::Duration};

/// The default pacing interval.
pub const DEFAULT_TURN_INTERVAL: Duration = Duration::from_secs(1);

/// What the scheduler is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SchedulerState {
    /// Between turns.
    #[default]
    Idle,
    /// Inside the pacing delay of a turn.
    Waiting,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// The pacing delay elapsed and the next generation was applied.
    Advanced,
    /// Cancellation was observed during the pacing delay.
    /// The board is unchanged.
    Cancelled,
}

/// Paces generation advances, one turn at a time.
///
/// A turn first waits for the pacing interval. Cancellation is only
/// checked during that wait; once it has elapsed, the whole next
/// generation is computed and applied. The scheduler holds no loop of
/// its own: the caller decides when to start the next turn.
///
/// The state can be read while a turn is pending, for example from a
/// task joined with the turn.
#[derive(Clone, Debug)]
pub struct TurnScheduler {
    interval: Duration,
    state: Cell<SchedulerState>,
}

impl Default for TurnScheduler {
    fn default() -> Self {
        TurnScheduler::new(DEFAULT_TURN_INTERVAL)
    }
}

impl TurnScheduler {
    /// Creates a scheduler with the given pacing interval.
    pub fn new(interval: Duration) -> Self {
        TurnScheduler {
            interval,
            state: Cell::new(SchedulerState::Idle),
        }
    }

    /// The pacing interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The current state.
    pub fn state(&self) -> SchedulerState {
        self.state.get()
    }

    /// Runs one turn on `board`.
    ///
    /// Returns [`TurnOutcome::Cancelled`] with the board untouched if
    /// `cancel` fires before the pacing interval elapses, including when
    /// it has already fired before the call.
    pub async fn advance_turn<C: Cancel>(&self, board: &mut GameBoard, cancel: &C) -> TurnOutcome {
        let waiting = Waiting::enter(&self.state);
        let elapsed = tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            _ = tokio::time::sleep(self.interval) => true,
        };
        drop(waiting);

        if !elapsed {
            debug!("Turn cancelled at generation {}", board.generation());
            return TurnOutcome::Cancelled;
        }
        board.next_generation();
        debug!(
            "Generation {}: {} living cells",
            board.generation(),
            board.live_count()
        );
        TurnOutcome::Advanced
    }
}

/// Holds the scheduler in [`SchedulerState::Waiting`], and returns it to
/// [`SchedulerState::Idle`] when dropped, also when the turn itself is dropped.
struct Waiting<'a>(&'a Cell<SchedulerState>);

impl<'a> Waiting<'a> {
    fn enter(state: &'a Cell<SchedulerState>) -> Self {
        state.set(SchedulerState::Waiting);
        Waiting(state)
    }
}

impl Drop for Waiting<'_> {
    fn drop(&mut self) {
        self.0.set(SchedulerState::Idle);
    }
}
