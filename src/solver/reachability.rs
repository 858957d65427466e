use std::collections::VecDeque;

use crate::board::{empty_cells, Board, CellSet};
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::moves::{Move, Moves};
use crate::state::State;

/// Cells the player can walk to without pushing anything.
#[derive(Debug, Clone)]
pub(crate) struct Reachability {
    start: Pos,
    reachable: CellSet,
    /// Direction of the last step into each reached cell, `None` for the start and unreached cells
    prev_dirs: Vec<Option<Dir>>,
}

impl Reachability {
    pub(crate) fn contains(&self, pos: Pos) -> bool {
        self.reachable[pos]
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> &CellSet {
        &self.reachable
    }

    /// Shortest walk from the start to `dest`, `None` if `dest` can't be reached.
    pub(crate) fn path_to(&self, board: &Board, dest: Pos) -> Option<Moves> {
        if !self.contains(dest) {
            return None;
        }

        let mut moves = Moves::default();
        let mut cur = dest;
        while cur != self.start {
            let dir = self.prev_dirs[cur]?;
            moves.add(Move::new(dir, false));
            cur = board.step(cur, dir.inverse());
        }
        moves.reverse();
        Some(moves)
    }
}

/// BFS over cells that are neither walls nor boxes.
///
/// Fragile cells only block boxes, the player walks over them.
pub(crate) fn reachable_positions(board: &Board, state: &State) -> Reachability {
    let mut reachable = empty_cells(board.cell_count());
    let mut prev_dirs = vec![None; board.cell_count()];

    reachable.set(state.player_pos, true);
    let mut to_visit = VecDeque::new();
    to_visit.push_back(state.player_pos);

    while let Some(cur) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            let next = board.step(cur, dir);
            if board.is_wall(next) || state.has_box(next) || reachable[next] {
                continue;
            }
            reachable.set(next, true);
            prev_dirs[next] = Some(dir);
            to_visit.push_back(next);
        }
    }

    Reachability {
        start: state.player_pos,
        reachable,
        prev_dirs,
    }
}

pub(crate) fn path_between(board: &Board, state: &State, dest: Pos) -> Option<Moves> {
    reachable_positions(board, state).path_to(board, dest)
}
