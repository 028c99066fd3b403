//! A single field of a Minesweeper board and its display state.

use core::fmt::{self, Display, Formatter};
use alloc::string::{String, ToString};
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// Glyph shown on a field flagged as a mine.
pub const FLAG_GLYPH: &str = "P";
/// Glyph shown on a field flagged as uncertain.
pub const UNCERTAIN_GLYPH: &str = "?";
/// Glyph shown on a revealed mine.
pub const MINE_GLYPH: &str = "X";

/// A field on a Minesweeper board.
///
/// The value is fixed once the board is filled; only the state changes in response to the player's gestures. Fields are owned by a [`Board`][board] and are only handed out by reference.
///
/// [board]: struct.Board.html "Board — a Minesweeper board"
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Field {
    pub(crate) value: FieldValue,
    pub(crate) state: FieldState,
}
impl Field {
    /// Returns `true` if the field holds a mine, `false` otherwise.
    #[inline]
    pub fn is_mine(&self) -> bool {
        self.value.is_mine()
    }
    /// Returns the value of the field: either a mine or the amount of neighboring mines.
    #[inline(always)]
    pub fn value(&self) -> FieldValue {
        self.value
    }
    /// Returns the display state of the field.
    #[inline(always)]
    pub fn state(&self) -> FieldState {
        self.state
    }
    /// Tries to reveal the field, returning `true` if the field was handled.
    ///
    /// Fields flagged as mines must be unflagged first, and revealed fields ignore repeated clicks: both return `false` and are left untouched.
    pub fn reveal_attempt(&mut self) -> bool {
        match self.state {
            FieldState::FlaggedAsMine
          | FieldState::Revealed => false,
            FieldState::Hidden
          | FieldState::FlaggedUncertain => {
                self.state = FieldState::Revealed;
                true
            }
        }
    }
    /// Advances the flag on the field: hidden, flagged as a mine, uncertain, then hidden again.
    ///
    /// Does nothing on a revealed field.
    pub fn cycle_flag(&mut self) {
        self.state = match self.state {
            FieldState::Hidden => FieldState::FlaggedAsMine,
            FieldState::FlaggedAsMine => FieldState::FlaggedUncertain,
            FieldState::FlaggedUncertain => FieldState::Hidden,
            FieldState::Revealed => FieldState::Revealed,
        };
    }
    /// Returns the label a renderer shows on this field.
    ///
    /// Hidden fields have an empty label, revealed ones show their value and flagged ones show the flag glyph.
    pub fn label(&self) -> String {
        self.to_string()
    }
}
impl Display for Field {
    /// Writes the same text as [`label`][label].
    ///
    /// [label]: #method.label "label — returns the label a renderer shows on this field"
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.state {
            FieldState::Hidden => Ok(()),
            FieldState::Revealed => Display::fmt(&self.value, f),
            FieldState::FlaggedAsMine => f.write_str(FLAG_GLYPH),
            FieldState::FlaggedUncertain => f.write_str(UNCERTAIN_GLYPH),
        }
    }
}

/// The value stored in a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FieldValue {
    /// A field without a mine and the amount of mines among its neighbors, from 0 to 8.
    Count(u8),
    /// A field with a mine.
    Mine,
}
impl FieldValue {
    /// The integer used for mines in the `i8` form of a value.
    pub const MINE_SENTINEL: i8 = -1;

    /// Returns `true` for `Mine`, `false` otherwise.
    #[inline]
    pub fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
    /// Returns the amount of neighboring mines, or `None` for a mine.
    #[inline]
    pub fn count(self) -> Option<u8> {
        match self {
            Self::Count(count) => Some(count),
            Self::Mine => None,
        }
    }
    /// Adds one neighboring mine. Mines stay mines.
    #[inline]
    pub(crate) fn increment(&mut self) {
        if let Self::Count(count) = self {
            *count += 1;
        }
    }
}
impl Default for FieldValue {
    /// Returns `Count(0)`, the value of a blank field.
    #[inline(always)]
    fn default() -> Self {
        Self::Count(0)
    }
}
impl From<FieldValue> for i8 {
    /// Converts to the integer form: the count itself, or `-1` for a mine.
    #[allow(clippy::cast_possible_wrap)]
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Count(count) => count as i8,
            FieldValue::Mine => FieldValue::MINE_SENTINEL,
        }
    }
}
impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{}", count),
            Self::Mine => f.write_str(MINE_GLYPH),
        }
    }
}

/// The display state of a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FieldState {
    /// The field is covered.
    ///
    /// Returned by the `Default` trait implementation.
    Hidden,
    /// The field has been opened, showing its value.
    Revealed,
    /// The player is sure the field holds a mine.
    FlaggedAsMine,
    /// The player suspects the field holds a mine.
    FlaggedUncertain,
}
impl FieldState {
    /// Returns `true` if the field is covered without any flag, `false` otherwise.
    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
    /// Returns `true` if the field is open, `false` otherwise.
    #[inline]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
    /// Returns `true` if the field is flagged as a mine, `false` otherwise. Uncertain flags don't count.
    #[inline]
    pub fn is_flagged(self) -> bool {
        matches!(self, Self::FlaggedAsMine)
    }
}
impl Default for FieldState {
    /// Returns the `Hidden` state.
    #[inline(always)]
    fn default() -> Self {
        Self::Hidden
    }
}
