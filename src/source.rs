//! Where mine positions come from.

use crate::{BoardDimensions, FieldCoordinates};

/// A source of candidate mine positions.
///
/// Boards draw from their source until enough distinct fields hold a mine, discarding positions which already have one. A source therefore has to keep producing fresh positions: one which only ever repeats already mined fields will stall the fill.
///
/// With the `generation` feature enabled, every `rand::Rng` is a source which picks a row and a column uniformly. Tests and replays can implement the trait on their own types to lay out mines by hand.
pub trait MineSource {
    /// Picks a position inside a board with the given dimensions, as `[row, column]`.
    fn pick(&mut self, dimensions: BoardDimensions) -> FieldCoordinates;
}

#[cfg(feature = "generation")]
impl<R: rand::Rng> MineSource for R {
    #[inline]
    fn pick(&mut self, dimensions: BoardDimensions) -> FieldCoordinates {
        let (width, height) = (dimensions[0].get(), dimensions[1].get());
        let row = self.gen_range(0_usize, height);
        let column = self.gen_range(0_usize, width);
        [row, column]
    }
}
