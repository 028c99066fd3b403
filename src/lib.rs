//! The rules engine of a Minesweeper game.
//!
//! The crate owns everything a Minesweeper session needs besides drawing it: a [`Board`] of [`Field`]s with randomly placed mines and precomputed numbers, the two click gestures (revealing a field, flooding over clearings, and cycling the flag on a field) and the frozen state a board enters once a mine is revealed. Windows, input handling, fonts and colors belong to the frontend, which translates pointer positions into `[row, column]` coordinates and calls into the board.
//!
//! ```
//! use saper::{Board, BoardConfig, FieldState};
//!
//! let mut board = Board::seeded(BoardConfig::new(30, 16, 99), 2021).unwrap();
//! board.right_click([0, 0]);
//! assert_eq!(board.field([0, 0]).state(), FieldState::FlaggedAsMine);
//! let lost = board.left_click([8, 15]);
//! assert_eq!(lost, board.is_frozen());
//! ```
//!
//! # Feature gates
//! - `std` — enable a dependency on the hosted standard library (**enabled by default**)
//!
//!   Without this feature, the crate only depends on `core` and `alloc`, so boards can run in a freestanding environment. The [`GameClock`] and `Board::new` need the standard library.
//!
//! - `generation` — enable random generation (**enabled by default**)
//!
//!   Enables the dependency on `rand`, making every random number generator a [`MineSource`] and adding `Board::seeded` and `Board::new`. Disable to remove said dependency if you'd like to use your own mine source.
//!
//! - `serialization` — enable support for serialization (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde` and its derive macros for [`BoardConfig`] and the field types, so configurations can be loaded from files and field snapshots can be handed to a frontend in a platform-independent format.
//!
//! - `track_caller` — use `track_caller` attributes
//!
//!   Places the `track_caller` attribute on indexing operators and other panicking methods, improving panic messages.

#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
// Copypaste the following to enable this on specific methods:
//  #[cfg_attr(feature = "track_caller", track_caller)]

// Copypaste to derive Serde traits on specific types:
// #[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod board;
pub use board::*;
mod config;
pub use config::*;
mod field;
pub use field::*;
pub mod iter;
pub use iter::*;
mod source;
pub use source::*;
#[cfg(feature = "std")]
mod clock;
#[cfg(feature = "std")]
pub use clock::*;
