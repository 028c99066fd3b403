#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use saper::{Board, BoardConfig, BoardDimensions, FieldCoordinates, FieldValue, MineSource};

/// Hands out a fixed list of mine positions, starting over once it runs out.
#[derive(Debug)]
pub struct Layout {
    mines: Vec<FieldCoordinates>,
    next: usize,
}

impl Layout {
    pub fn new(mines: &[FieldCoordinates]) -> Self {
        Self { mines: mines.to_vec(), next: 0 }
    }
}

impl MineSource for Layout {
    fn pick(&mut self, _: BoardDimensions) -> FieldCoordinates {
        let location = self.mines[self.next % self.mines.len()];
        self.next += 1;
        location
    }
}

pub fn board(width: usize, height: usize, mines: &[FieldCoordinates]) -> Board<Layout> {
    Board::with_source(BoardConfig::new(width, height, mines.len()), Layout::new(mines)).unwrap()
}

pub fn board_with(config: BoardConfig, mines: &[FieldCoordinates]) -> Board<Layout> {
    Board::with_source(config, Layout::new(mines)).unwrap()
}

/// Counts mines around a field from scratch, without trusting the stored values.
pub fn mines_around<S>(board: &Board<S>, at: FieldCoordinates) -> u8 {
    board.neighbours(at).filter(|&n| board.field(n).is_mine()).count() as u8
}

/// The connected zero region around `start` plus its numbered border, found with a plain BFS.
pub fn expected_clearing<S>(board: &Board<S>, start: FieldCoordinates) -> HashSet<FieldCoordinates> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(at) = queue.pop_front() {
        if board.field(at).value() != FieldValue::Count(0) {
            continue;
        }
        for n in board.neighbours(at) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}
