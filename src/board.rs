use bitvec::prelude::*;

use crate::data::{Dir, Pos};

/// One bit per cell of the flattened grid
pub(crate) type CellSet = BitVec;

pub(crate) fn empty_cells(len: usize) -> CellSet {
    BitVec::repeat(false, len)
}

/// Static part of a level - everything except the player and boxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    walls: CellSet,
    targets: CellSet,
    fragile: CellSet,
    goals: Vec<Pos>,
}

impl Board {
    pub(crate) fn new(
        rows: usize,
        cols: usize,
        walls: CellSet,
        targets: CellSet,
        fragile: CellSet,
    ) -> Self {
        debug_assert_eq!(walls.len(), rows * cols);
        debug_assert_eq!(targets.len(), rows * cols);
        debug_assert_eq!(fragile.len(), rows * cols);
        debug_assert!(walls.iter_ones().all(|pos| !targets[pos]));

        let goals = targets.iter_ones().collect();
        Board {
            rows,
            cols,
            walls,
            targets,
            fragile,
            goals,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls[pos]
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.targets[pos]
    }

    /// Boxes can never be pushed onto fragile cells, the player can walk on them.
    pub fn is_fragile(&self, pos: Pos) -> bool {
        self.fragile[pos]
    }

    pub(crate) fn blocks_box(&self, pos: Pos) -> bool {
        self.walls[pos] || self.fragile[pos]
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub(crate) fn walls(&self) -> &CellSet {
        &self.walls
    }

    pub(crate) fn targets(&self) -> &CellSet {
        &self.targets
    }

    pub(crate) fn fragile(&self) -> &CellSet {
        &self.fragile
    }

    /// Targets in ascending cell order
    pub(crate) fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub(crate) fn pos(&self, r: usize, c: usize) -> Pos {
        r * self.cols + c
    }

    pub(crate) fn row_col(&self, pos: Pos) -> (usize, usize) {
        (pos / self.cols, pos % self.cols)
    }

    /// Neighbor in `dir` without bounds checking.
    ///
    /// Only valid for cells that are not on the edge of the grid - after level processing
    /// that's every non-wall cell.
    pub(crate) fn step(&self, pos: Pos, dir: Dir) -> Pos {
        match dir {
            Dir::Up => pos - self.cols,
            Dir::Left => pos - 1,
            Dir::Down => pos + self.cols,
            Dir::Right => pos + 1,
        }
    }

    pub(crate) fn checked_step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        let (r, c) = self.row_col(pos);
        match dir {
            Dir::Up if r > 0 => Some(pos - self.cols),
            Dir::Left if c > 0 => Some(pos - 1),
            Dir::Down if r + 1 < self.rows => Some(pos + self.cols),
            Dir::Right if c + 1 < self.cols => Some(pos + 1),
            _ => None,
        }
    }

    /// Renders a cell set as a grid of 0s and 1s, mostly for debugging
    pub(crate) fn format_cells(&self, cells: &BitSlice) -> String {
        let mut ret = String::with_capacity(self.rows * (self.cols + 1));
        for row in cells.chunks(self.cols) {
            for bit in row.iter().by_vals() {
                ret.push(if bit { '1' } else { '0' });
            }
            ret.push('\n');
        }
        ret
    }
}
