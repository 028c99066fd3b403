//! Board parameters and their validation.

use core::num::NonZeroUsize;
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::BoardDimensions;

/// The parameters a board is built from.
///
/// A configuration is plain data and can be deserialized from any format Serde supports; it is checked with [`validate`][validate] when a board is built from it.
///
/// [validate]: #method.validate "validate — checks that a board can be built from the configuration"
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// The number of columns.
    pub width: usize,
    /// The number of rows.
    pub height: usize,
    /// The number of mines to place. Must be smaller than the area of the board.
    pub mines: usize,
    /// Which field states swallow a left click.
    #[cfg_attr(feature = "serialization", serde(default))]
    pub reveal_guard: RevealGuard,
}
impl BoardConfig {
    /// Creates a configuration with the default reveal guard.
    #[inline]
    pub const fn new(width: usize, height: usize, mines: usize) -> Self {
        Self {width, height, mines, reveal_guard: RevealGuard::Revealed}
    }
    /// Replaces the reveal guard.
    #[inline]
    #[must_use]
    pub fn with_reveal_guard(mut self, reveal_guard: RevealGuard) -> Self {
        self.reveal_guard = reveal_guard;
        self
    }
    /// Checks that a board can be built from the configuration and returns its dimensions.
    ///
    /// Both sides have to be positive and at least one field has to stay free of mines, otherwise mine placement could never finish.
    pub fn validate(&self) -> Result<BoardDimensions, ConfigError> {
        let width = NonZeroUsize::new(self.width).ok_or(ConfigError::ZeroWidth)?;
        let height = NonZeroUsize::new(self.height).ok_or(ConfigError::ZeroHeight)?;
        let area = self.width.checked_mul(self.height)
            .ok_or(ConfigError::AreaOverflow {width: self.width, height: self.height})?;
        if self.mines >= area {
            return Err(ConfigError::TooManyMines {mines: self.mines, area});
        }
        Ok([width, height])
    }
}

/// Which field states swallow a left click.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum RevealGuard {
    /// Only revealed fields ignore the click. A field flagged as a mine is opened right through its flag.
    ///
    /// Returned by the `Default` trait implementation.
    Revealed,
    /// Revealed fields and fields flagged as mines ignore the click, so a flag has to be removed before the field can be opened.
    RevealedOrFlagged,
}
impl Default for RevealGuard {
    /// Returns the `Revealed` variant.
    #[inline(always)]
    fn default() -> Self {
        Self::Revealed
    }
}

/// A configuration from which no board can be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board has no columns.
    #[error("board width must be positive")]
    ZeroWidth,
    /// The board has no rows.
    #[error("board height must be positive")]
    ZeroHeight,
    /// The number of fields does not fit in `usize`.
    #[error("a {width}x{height} board is too large")]
    AreaOverflow {
        /// The requested width.
        width: usize,
        /// The requested height.
        height: usize,
    },
    /// Every field would hold a mine, or more mines were requested than there are fields.
    #[error("{mines} mines do not fit on a board of {area} fields, at least one field must stay free")]
    TooManyMines {
        /// The requested number of mines.
        mines: usize,
        /// The number of fields on the board.
        area: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_classic_expert_board() {
        let [width, height] = BoardConfig::new(30, 16, 99).validate().unwrap();
        assert_eq!(width.get(), 30);
        assert_eq!(height.get(), 16);
    }

    #[test]
    fn rejects_zero_sides() {
        assert_eq!(BoardConfig::new(0, 5, 0).validate(), Err(ConfigError::ZeroWidth));
        assert_eq!(BoardConfig::new(5, 0, 0).validate(), Err(ConfigError::ZeroHeight));
    }

    #[test]
    fn at_least_one_field_stays_free() {
        assert!(BoardConfig::new(3, 3, 8).validate().is_ok());
        assert_eq!(
            BoardConfig::new(3, 3, 9).validate(),
            Err(ConfigError::TooManyMines {mines: 9, area: 9})
        );
        assert_eq!(
            BoardConfig::new(1, 1, 1).validate(),
            Err(ConfigError::TooManyMines {mines: 1, area: 1})
        );
    }

    #[test]
    fn rejects_overflowing_area() {
        assert_eq!(
            BoardConfig::new(usize::MAX, 2, 0).validate(),
            Err(ConfigError::AreaOverflow {width: usize::MAX, height: 2})
        );
    }

    #[test]
    fn guard_defaults_to_revealed() {
        assert_eq!(BoardConfig::new(2, 2, 1).reveal_guard, RevealGuard::Revealed);
        let strict = BoardConfig::new(2, 2, 1).with_reveal_guard(RevealGuard::RevealedOrFlagged);
        assert_eq!(strict.reveal_guard, RevealGuard::RevealedOrFlagged);
    }

    #[cfg(all(feature = "serialization", feature = "std"))]
    #[test]
    fn deserializes_without_guard() {
        let config: BoardConfig = serde_json::from_str(r#"{"width": 9, "height": 9, "mines": 10}"#).unwrap();
        assert_eq!(config, BoardConfig::new(9, 9, 10));

        let strict: BoardConfig = serde_json::from_str(
            r#"{"width": 9, "height": 9, "mines": 10, "reveal_guard": "RevealedOrFlagged"}"#
        ).unwrap();
        assert_eq!(strict.reveal_guard, RevealGuard::RevealedOrFlagged);
    }
}
