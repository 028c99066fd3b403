//! A game clock for frontends which display the time spent on a board.
//!
//! The clock is polled rather than ticked: the frontend reads `elapsed` whenever it draws a frame. It never looks at the board, so pausing it, resetting it or reading it has no effect on the game.

use std::time::{Duration, Instant};

/// A pausable stopwatch.
///
/// # Usage
/// ```
/// # use saper::GameClock;
/// #
/// let mut clock = GameClock::new();
/// assert!(!clock.is_running());
/// clock.start();
/// clock.pause();
/// let frozen = clock.elapsed();
/// assert_eq!(clock.elapsed(), frozen); // Paused clocks don't move
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct GameClock {
    accumulated: Duration,
    running_since: Option<Instant>,
}
impl GameClock {
    /// Creates a paused clock showing zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
    /// Starts counting from now. Does nothing if the clock is already running.
    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }
    /// Continues counting after a `pause`. The same as `start`.
    #[inline(always)]
    pub fn resume(&mut self) {
        self.start();
    }
    /// Stops counting, keeping the time counted so far. Does nothing if the clock is paused.
    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }
    /// Pauses the clock and sets it back to zero, typically together with `Board::retry`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    /// Returns `true` if the clock is counting, `false` if it is paused.
    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }
    /// Returns the time counted so far.
    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + since.elapsed(),
            None => self.accumulated,
        }
    }
    /// Returns the number of whole seconds counted so far, as shown by a typical Minesweeper timer.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}
