//! The board of a Minesweeper game.
//!
//! Mines are placed and counted here, and this is where clicks are handled and games are lost.

use core::{
    fmt::{self, Display, Formatter, Write},
    ops::{Index, IndexMut},
    num::NonZeroUsize,
};
use alloc::{
    vec, vec::Vec
};
#[cfg(feature = "generation")]
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace, warn};
use crate::{
    BoardConfig, ConfigError, RevealGuard,
    Field, FieldState, FieldValue,
    FLAG_GLYPH, UNCERTAIN_GLYPH, MINE_GLYPH,
    MineSource, Neighbours,
    RowIter, BoardRowsIter,
};

/// The dimensions of a board.
///
/// The first element specifies the width (the number of columns), while the second one specifies the height (number of rows). As required by `NonZeroUsize`, a board cannot be smaller than 1x1.
pub type BoardDimensions = [NonZeroUsize; 2];
/// Draws per field after which a fill that is still running is reported as stalled.
const STALL_FACTOR: usize = 64;

/// The coordinates of a field on a board.
///
/// The first element specifies the row index, while the second one specifies the column index, matching the row-major layout of the board. The coordinate system starts from zero, i.e. the coordinates `[0, 0]` correspond to the top left corner.
pub type FieldCoordinates = [usize; 2];
/// A board which places its mines with the standard random number generator.
#[cfg(feature = "generation")]
pub type RandomBoard = Board<StdRng>;

/// Represents a board.
///
/// Boards are matrices of [fields][field] with a fixed number of mines. Every field without a mine knows how many of its neighbours hold one. Implementations call [`left_click`][m_left] and [`right_click`][m_right] when the player clicks a field and render the fields afterwards; the board itself never draws anything except for the plain text grid produced by its `Display` implementation.
///
/// Revealing a mine loses the game: every unflagged mine is shown and the board freezes, ignoring all clicks until [`retry`][m_retry] lays out a new game. There is no winning condition: the board only ever reports losses.
///
/// [field]: struct.Field.html "Field — a field on a Minesweeper board"
/// [m_left]: #method.left_click "left_click — reveals a field, flooding over clearings"
/// [m_right]: #method.right_click "right_click — cycles the flag on a field"
/// [m_retry]: #method.retry "retry — unfreezes the board and lays out new mines"
#[derive(Debug)]
pub struct Board<S> {
    config: BoardConfig,
    dimensions: BoardDimensions,
    storage: Vec<Field>,
    source: S,
    frozen: bool,
}
#[cfg(feature = "generation")]
impl Board<StdRng> {
    /// Creates a board with mines placed by a generator seeded from the operating system.
    #[cfg(feature = "std")]
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, StdRng::from_entropy())
    }
    /// Creates a board with mines placed by a generator with the specified seed.
    ///
    /// The same seed and configuration always produce the same layout, and so do the following calls to `retry`.
    pub fn seeded(config: BoardConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, StdRng::seed_from_u64(seed))
    }
}
impl<S: MineSource> Board<S> {
    /// Creates a board which takes its mine positions from the specified source, and fills it.
    ///
    /// # Errors
    /// Fails if the configuration has a zero side or as many mines as fields (or more), since no layout could be generated for it.
    pub fn with_source(config: BoardConfig, source: S) -> Result<Self, ConfigError> {
        let dimensions = config.validate()?;
        let area = dimensions[0].get() * dimensions[1].get();
        let mut board = Self {
            config,
            dimensions,
            storage: vec![Field::default(); area],
            source,
            frozen: false,
        };
        board.fill();
        Ok(board)
    }
    /// Unfreezes the board and lays out a new game from scratch.
    ///
    /// Every field is covered again and the mines are drawn anew from the source, so the layout usually differs from the previous one.
    pub fn retry(&mut self) {
        self.frozen = false;
        self.fill();
        debug!("board reset");
    }

    fn fill(&mut self) {
        for field in &mut self.storage {
            *field = Field::default();
        }

        // Rejection sampling: a position which already holds a mine is drawn again.
        // Termination relies on at least one field staying free, which the config guarantees.
        let mut placed = 0_usize;
        let mut draws = 0_usize;
        let stall_limit = (self.width() * self.height()).saturating_mul(STALL_FACTOR);
        while placed < self.config.mines {
            let location = self.source.pick(self.dimensions);
            draws += 1;
            if draws == stall_limit {
                warn!(draws, placed, mines = self.config.mines, "mine source keeps picking taken fields");
            }
            let field = &mut self[location];
            if field.is_mine() {
                continue;
            }
            field.value = FieldValue::Mine;
            for neighbour in Neighbours::new(self.dimensions, location) {
                self[neighbour].value.increment();
            }
            placed += 1;
        }
        debug!(
            width = self.width(),
            height = self.height(),
            mines = placed,
            draws,
            "board filled"
        );
    }
}
impl<S> Board<S> {
    /// Returns the width (number of columns) and height (number of rows) of the board.
    #[inline(always)]
    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }
    /// Returns the number of columns.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.dimensions[0].get()
    }
    /// Returns the number of rows.
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.dimensions[1].get()
    }
    /// Returns the number of mines on the board.
    #[inline(always)]
    pub fn mine_count(&self) -> usize {
        self.config.mines
    }
    /// Returns the configuration the board was built from.
    #[inline(always)]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
    /// Returns `true` if a mine has been revealed and the board ignores clicks until `retry` is called.
    #[inline(always)]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns the field at the specified row and column, or `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, coordinates: FieldCoordinates) -> Option<&Field> {
        let offset = self.offset(coordinates)?;
        self.storage.get(offset)
    }
    /// Returns the field at the specified row and column.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds. Callers translating pointer positions are expected to clamp them to the board first; see `get` for a version which returns `None` instead.
    #[inline]
    #[cfg_attr(feature = "track_caller", track_caller)]
    pub fn field(&self, coordinates: FieldCoordinates) -> &Field {
        &self[coordinates]
    }
    /// Returns an iterator over the coordinates of the fields around the specified one.
    #[inline(always)]
    pub fn neighbours(&self, coordinates: FieldCoordinates) -> Neighbours {
        Neighbours::new(self.dimensions, coordinates)
    }
    /// Returns an iterator over all fields in row-major order, together with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (FieldCoordinates, &Field)> + '_ {
        let width = self.width();
        self.storage.iter()
            .enumerate()
            .map(move |(i, field)| ([i / width, i % width], field))
    }
    /// Returns an iterator over a single row.
    ///
    /// # Panics
    /// Panics if the specified row is out of range.
    #[inline(always)]
    #[cfg_attr(feature = "track_caller", track_caller)]
    pub fn row(&self, row: usize) -> RowIter<'_, S> {
        RowIter::new(self, row)
    }
    /// Returns an iterator over the board's rows, from top to bottom.
    #[inline(always)]
    pub fn rows(&self) -> BoardRowsIter<'_, S> {
        BoardRowsIter::new(self)
    }

    /// Reveals a field, returning `true` if it held a mine and the game is lost.
    ///
    /// Nothing happens on a frozen board or on a field the [reveal guard][guard] protects. A field without neighbouring mines floods over the board: every neighbour is clicked in turn, which keeps going as long as fields without neighbouring mines are uncovered, so the whole clearing opens together with its numbered border.
    ///
    /// Revealing a mine freezes the board and shows every mine which isn't flagged.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    ///
    /// [guard]: enum.RevealGuard.html "RevealGuard — which field states swallow a left click"
    #[cfg_attr(feature = "track_caller", track_caller)]
    pub fn left_click(&mut self, coordinates: FieldCoordinates) -> bool {
        if self.frozen {
            trace!(?coordinates, "left click on a frozen board");
            return false;
        }
        if !self.open(coordinates) {
            return false;
        }
        match self[coordinates].value {
            FieldValue::Mine => {
                self.lose(coordinates);
                true
            },
            FieldValue::Count(0) => {
                self.flood(coordinates);
                false
            },
            FieldValue::Count(_) => false,
        }
    }
    /// Cycles the flag on a field: hidden, flagged as a mine, uncertain, then hidden again.
    ///
    /// Nothing happens on a frozen board or on a revealed field.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    #[cfg_attr(feature = "track_caller", track_caller)]
    pub fn right_click(&mut self, coordinates: FieldCoordinates) {
        if self.frozen {
            trace!(?coordinates, "right click on a frozen board");
            return;
        }
        self[coordinates].cycle_flag();
    }

    /// Opens a single field if the reveal guard allows it, returning whether it was opened.
    fn open(&mut self, coordinates: FieldCoordinates) -> bool {
        let guard = self.config.reveal_guard;
        let field = &mut self[coordinates];
        match guard {
            RevealGuard::Revealed => {
                if field.state.is_revealed() {
                    false
                } else {
                    field.state = FieldState::Revealed;
                    true
                }
            },
            RevealGuard::RevealedOrFlagged => field.reveal_attempt(),
        }
    }
    /// Clicks every neighbour of an opened field without neighbouring mines, spreading over the whole clearing.
    fn flood(&mut self, anchor: FieldCoordinates) {
        // Explicit stack rather than recursion. Fields are opened before being pushed, so none is pushed twice.
        let mut stack = Vec::<FieldCoordinates>::with_capacity(10);
        stack.push(anchor);
        let mut opened = 1_usize;
        while let Some(location) = stack.pop() {
            for neighbour in Neighbours::new(self.dimensions, location) {
                if !self.open(neighbour) {
                    continue;
                }
                opened += 1;
                // Neighbours of a zero are never mines.
                if self[neighbour].value == FieldValue::Count(0) {
                    stack.push(neighbour);
                }
            }
        }
        trace!(?anchor, opened, "clearing opened");
    }
    fn lose(&mut self, coordinates: FieldCoordinates) {
        self.frozen = true;
        for field in &mut self.storage {
            if field.is_mine() && !field.state.is_flagged() {
                field.state = FieldState::Revealed;
            }
        }
        info!(?coordinates, "mine revealed, board frozen");
    }

    fn offset(&self, coordinates: FieldCoordinates) -> Option<usize> {
        let [row, column] = coordinates;
        if row < self.height() && column < self.width() {
            Some(row * self.width() + column)
        } else {None}
    }
}
impl<S> Index<FieldCoordinates> for Board<S> {
    type Output = Field;
    /// Returns the field at row `coordinates[0]` and column `coordinates[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get`.
    #[inline(always)]
    #[cfg_attr(feature = "track_caller", track_caller)]
    fn index(&self, coordinates: FieldCoordinates) -> &Self::Output {
        self.get(coordinates).expect("field coordinates out of bounds")
    }
}
impl<S> IndexMut<FieldCoordinates> for Board<S> {
    /// Returns the field at row `coordinates[0]` and column `coordinates[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method.
    #[inline(always)]
    #[cfg_attr(feature = "track_caller", track_caller)]
    fn index_mut(&mut self, coordinates: FieldCoordinates) -> &mut Self::Output {
        let offset = self.offset(coordinates).expect("field coordinates out of bounds");
        &mut self.storage[offset]
    }
}
impl<S> Display for Board<S> {
    /// Draws the board as text, one line per row and one character per field.
    ///
    /// `#` is a covered field, `P` a flag, `?` an uncertain flag, `X` a revealed mine, `.` a revealed field without neighbouring mines and a digit the number of neighbouring mines.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for field in row {
                f.write_char(glyph(field))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

fn glyph(field: &Field) -> char {
    match (field.state, field.value) {
        (FieldState::Hidden, _) => HIDDEN_GLYPH,
        (FieldState::FlaggedAsMine, _) => first_char(FLAG_GLYPH),
        (FieldState::FlaggedUncertain, _) => first_char(UNCERTAIN_GLYPH),
        (FieldState::Revealed, FieldValue::Mine) => first_char(MINE_GLYPH),
        (FieldState::Revealed, FieldValue::Count(0)) => CLEAR_GLYPH,
        (FieldState::Revealed, FieldValue::Count(count)) => char::from(b'0' + count),
    }
}
const HIDDEN_GLYPH: char = '#';
const CLEAR_GLYPH: char = '.';
/// The field labels are single ASCII characters.
fn first_char(label: &str) -> char {
    label.chars().next().unwrap_or(HIDDEN_GLYPH)
}
