//! Iterators useful for traversing a board.
//!
//! Currently available:
//! - [`Neighbours`][neighbours] — iterates over the coordinates of the fields around a field
//! - [`RowIter`][rowiter] — iterates over a single board row
//! - [`BoardRowsIter`][bri] — iterates over the rows of a board (each item is a [`RowIter`][rowiter])
//!
//! [neighbours]: struct.Neighbours.html "Neighbours — iterates over the coordinates of the fields around a field"
//! [rowiter]: struct.RowIter.html "RowIter — iterates over a single board row"
//! [bri]: struct.BoardRowsIter.html "BoardRowsIter — an iterator over the rows of a board"

use core::{
    ops::{Range, Index},
    iter::FusedIterator
};
use crate::{
    Board, BoardDimensions, Field, FieldCoordinates,
};

/// Row and column offsets of the neighbours, in the order they are visited: ↖, ↑, ↗, ←, →, ↙, ↓, ↘.
const OFFSETS: [[isize; 2]; 8] = [
    [-1, -1], [-1, 0], [-1, 1],
    [ 0, -1],          [ 0, 1],
    [ 1, -1], [ 1, 0], [ 1, 1],
];

/// Iterates over the coordinates of the fields directly or diagonally adjacent to a field.
///
/// Coordinates outside of the board are skipped, so a corner field has 3 neighbours, an edge field has 5 and every other field has 8. The order is fixed: the 3x3 block around the field is scanned row by row, skipping the center.
///
/// The iterator only copies the dimensions of the board, so the board can be mutated while the iterator is alive.
///
/// # Usage
/// ```
/// # use saper::Neighbours;
/// # use core::num::NonZeroUsize;
/// #
/// let dimensions = [NonZeroUsize::new(3).unwrap(), NonZeroUsize::new(3).unwrap()];
/// let corner: Vec<_> = Neighbours::new(dimensions, [0, 0]).collect();
/// assert_eq!(corner, vec![[0, 1], [1, 0], [1, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct Neighbours {
    dimensions: BoardDimensions,
    center: FieldCoordinates,
    index: Range<usize>,
}
impl Neighbours {
    /// Creates an iterator over the neighbours of `center` on a board with the specified dimensions.
    #[inline]
    pub fn new(dimensions: BoardDimensions, center: FieldCoordinates) -> Self {
        Self {dimensions, center, index: 0..OFFSETS.len()}
    }
    /// Returns the field around which the neighbours are enumerated.
    #[inline(always)]
    pub fn center(&self) -> FieldCoordinates {
        self.center
    }
    fn offset(&self, offset: [isize; 2]) -> Option<FieldCoordinates> {
        let (width, height) = (self.dimensions[0].get(), self.dimensions[1].get());
        let row = self.center[0].checked_add_signed(offset[0])?;
        let column = self.center[1].checked_add_signed(offset[1])?;
        if row < height && column < width {
            Some([row, column])
        } else {None}
    }
}
impl Iterator for Neighbours {
    type Item = FieldCoordinates;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.index.next() {
            if let Some(location) = self.offset(OFFSETS[i]) {
                return Some(location);
            }
        }
        None
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.index.len()))
    }
}
impl FusedIterator for Neighbours {}

/// Iterates over a single board row.
///
/// Can also be indexed to pull arbitrary fields from the row, regardless of the iterator state.
///
/// # Usage
/// ```
/// # use saper::{Board, BoardConfig};
/// #
/// let board = Board::seeded(BoardConfig::new(9, 4, 0), 7).unwrap();
/// let mut rowiter = board.row(3); // An iterator over the fourth row
/// let field = rowiter.nth(8) // The ninth field in the row
///     .unwrap();
/// assert!(field.state().is_hidden());
/// ```
#[derive(Clone)]
pub struct RowIter<'b, S> {
    board: &'b Board<S>,
    row: usize,
    index: Range<usize>
}
impl<'b, S> RowIter<'b, S> {
    /// Creates an iterator over the specified row of the specified board.
    ///
    /// # Panics
    /// Panics if the row is out of range.
    #[inline]
    #[cfg_attr(feature = "track_caller", track_caller)]
    pub fn new(board: &'b Board<S>, row: usize) -> Self {
        assert!(row < board.height(), "row index out of bounds");
        Self {board, row, index: 0..board.width()}
    }
    /// Returns the field at the specified column, or `None` if such a column doesn't exist. The row for which the iterator was created is used.
    #[inline(always)]
    pub fn get(&self, column: usize) -> Option<&'b Field> {
        self.board.get([self.row, column])
    }
    /// Returns the index of the row this iterator walks.
    #[inline(always)]
    pub fn row(&self) -> usize {
        self.row
    }
    /// Returns the board which the iterator iterates over.
    #[inline(always)]
    pub fn board(&self) -> &'b Board<S> {
        self.board
    }
}
impl<'b, S> Iterator for RowIter<'b, S> {
    type Item = &'b Field;
    fn next(&mut self) -> Option<Self::Item> {
        let column = self.index.next()?;
        self.board.get([self.row, column])
    }
    /// Returns the remaining amount of fields to iterate upon.
    ///
    /// See `len` from the `ExactSizedIterator` trait.
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'b, S> DoubleEndedIterator for RowIter<'b, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let column = self.index.next_back()?;
        self.board.get([self.row, column])
    }
}
impl<'b, S> ExactSizeIterator for RowIter<'b, S> {
    /// Returns the remaining amount of fields to iterate upon.
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl<S> FusedIterator for RowIter<'_, S> {}
impl<S> Index<usize> for RowIter<'_, S> {
    type Output = Field;
    /// Returns the field at the specified column.
    ///
    /// Used as a convenience function, allowing you to write `board.row(r)[c]` to find specific fields.
    #[inline(always)]
    #[cfg_attr(feature = "track_caller", track_caller)]
    fn index(&self, column: usize) -> &Field {
        self.get(column).expect("field coordinates out of bounds")
    }
}

/// An iterator over the rows of a board, from top to bottom.
///
/// Each item is a [`RowIter`][rowiter].
///
/// [rowiter]: struct.RowIter.html "RowIter — iterates over a single board row"
#[derive(Clone)]
pub struct BoardRowsIter<'b, S> {
    board: &'b Board<S>,
    index: Range<usize>
}
impl<'b, S> BoardRowsIter<'b, S> {
    /// Creates an iterator over the rows of the specified board.
    #[inline(always)]
    pub fn new(board: &'b Board<S>) -> Self {
        Self {board, index: 0..board.height()}
    }
    /// Returns the board which the iterator iterates over.
    #[inline(always)]
    pub fn board(&self) -> &'b Board<S> {
        self.board
    }
}
impl<'b, S> Iterator for BoardRowsIter<'b, S> {
    type Item = RowIter<'b, S>;
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.index.next()?;
        Some(RowIter::new(self.board, row))
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'b, S> DoubleEndedIterator for BoardRowsIter<'b, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.index.next_back()?;
        Some(RowIter::new(self.board, row))
    }
}
impl<'b, S> ExactSizeIterator for BoardRowsIter<'b, S> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl<S> FusedIterator for BoardRowsIter<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    fn dims(width: usize, height: usize) -> BoardDimensions {
        [NonZeroUsize::new(width).unwrap(), NonZeroUsize::new(height).unwrap()]
    }

    #[test]
    fn interior_field_has_eight_neighbours_in_row_major_order() {
        let around: Vec<_> = Neighbours::new(dims(5, 5), [2, 2]).collect();
        assert_eq!(around, [
            [1, 1], [1, 2], [1, 3],
            [2, 1],         [2, 3],
            [3, 1], [3, 2], [3, 3],
        ]);
    }

    #[test]
    fn edges_and_corners_are_clipped() {
        assert_eq!(Neighbours::new(dims(4, 3), [0, 0]).count(), 3);
        assert_eq!(Neighbours::new(dims(4, 3), [2, 3]).count(), 3);
        assert_eq!(Neighbours::new(dims(4, 3), [0, 2]).count(), 5);
        assert_eq!(Neighbours::new(dims(4, 3), [1, 0]).count(), 5);
        assert_eq!(Neighbours::new(dims(4, 3), [1, 1]).count(), 8);
    }

    #[test]
    fn single_row_board() {
        let around: Vec<_> = Neighbours::new(dims(3, 1), [0, 1]).collect();
        assert_eq!(around, [[0, 0], [0, 2]]);
    }

    #[test]
    fn single_field_board_has_no_neighbours() {
        assert_eq!(Neighbours::new(dims(1, 1), [0, 0]).next(), None);
    }
}
