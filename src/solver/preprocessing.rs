use std::collections::VecDeque;

use log::debug;

use crate::board::{empty_cells, Board, CellSet};
use crate::data::{Pos, DIRECTIONS};

/// Push distance of cells from which a box can't reach a target
pub(crate) const INFINITE: u32 = u32::max_value();

/// BFS of pulls fanning out from `target`.
///
/// Pulling the box from `b` in direction `d` moves it to `b + d` and the player to `b + 2d`,
/// which is the same as the player pushing it back from `b + 2d`.
/// Other boxes are ignored so the distances are the number of pushes on an otherwise empty board.
fn pull_dists(board: &Board, target: Pos) -> Vec<Option<u32>> {
    let mut dists = vec![None; board.cell_count()];
    dists[target] = Some(0);

    let mut to_visit = VecDeque::new();
    to_visit.push_back((target, 0));

    while let Some((box_pos, dist)) = to_visit.pop_front() {
        for &dir in &DIRECTIONS {
            let new_box_pos = board.step(box_pos, dir);
            // short circuit - stepping from a wall could leave the grid
            if board.blocks_box(new_box_pos)
                || board.is_wall(board.step(new_box_pos, dir))
                || dists[new_box_pos].is_some()
            {
                continue;
            }
            dists[new_box_pos] = Some(dist + 1);
            to_visit.push_back((new_box_pos, dist + 1));
        }
    }

    dists
}

/// Cells from which a box can't be pushed to any target even with no other boxes around.
///
/// Walls and targets are never dead.
#[inline(never)] // this is called only once and this way it's easier to see in callgrind
pub(crate) fn find_dead_cells(board: &Board) -> CellSet {
    let mut alive = empty_cells(board.cell_count());
    for &target in board.goals() {
        for (pos, dist) in pull_dists(board, target).into_iter().enumerate() {
            if dist.is_some() {
                alive.set(pos, true);
            }
        }
    }

    let mut dead = empty_cells(board.cell_count());
    for pos in 0..board.cell_count() {
        if !board.is_wall(pos) && !board.is_target(pos) && !alive[pos] {
            dead.set(pos, true);
        }
    }
    dead
}

/// Squared push distances from every cell to every target.
#[derive(Debug, Clone)]
pub(crate) struct DistTable {
    /// Indexed by the target's index in `Board::goals`, then by cell
    dists: Vec<Vec<u32>>,
}

impl DistTable {
    #[inline(never)]
    pub(crate) fn new(board: &Board) -> Self {
        let dists = board
            .goals()
            .iter()
            .map(|&target| {
                pull_dists(board, target)
                    .into_iter()
                    .map(|dist| match dist {
                        // squared to make the search prefer finishing boxes close to their targets
                        Some(d) => d.saturating_mul(d),
                        None => INFINITE,
                    })
                    .collect()
            })
            .collect::<Vec<_>>();
        debug!("Computed push distances to {} targets", dists.len());
        DistTable { dists }
    }

    pub(crate) fn get(&self, goal_index: usize, pos: Pos) -> u32 {
        self.dists[goal_index][pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::level::Level;
    use crate::solver::process_level;

    #[test]
    fn dead_cells() {
        let level: Level = r"
#####
##o##
##x##
#  .#
#####"
            .parse()
            .unwrap();
        let sd = process_level(&level).unwrap();
        let expected = r"
00000
00100
00000
01000
00000
"
        .trim_start_matches('\n');
        let dead = find_dead_cells(&level.board);
        assert_eq!(sd.board.format_cells(&dead), expected);
        // processing adds them to fragile cells
        assert_eq!(sd.board.format_cells(sd.board.fragile()), expected);
    }

    #[test]
    fn dead_cells_keep_explicit_fragile_cells() {
        let level: Level = r"
#######
#o @x.#
#######"
            .parse()
            .unwrap();
        let sd = process_level(&level).unwrap();
        // the fragile cell cuts the corridor, nothing left of the box can reach the target
        assert_eq!(
            sd.board.format_cells(sd.board.fragile()),
            "0000000\n0111000\n0000000\n"
        );
    }

    #[test]
    fn dead_cells_idempotent() {
        let level: Level = r"
########
#  #   #
# x  x #
#o.#  .#
########"
            .parse()
            .unwrap();
        let sd = process_level(&level).unwrap();
        let again = find_dead_cells(&sd.board);
        let mut merged = sd.board.fragile().clone();
        for pos in again.iter_ones() {
            merged.set(pos, true);
        }
        assert_eq!(&merged, sd.board.fragile());
    }

    #[test]
    fn distances_one_target() {
        let level: Level = r"
#######
#  o###
# #x###
#    .#
#######"
            .parse()
            .unwrap();
        let sd = process_level(&level).unwrap();
        let board = &sd.board;
        let table = &sd.dists;

        assert_eq!(table.get(0, board.pos(3, 5)), 0);
        assert_eq!(table.get(0, board.pos(3, 4)), 1);
        assert_eq!(table.get(0, board.pos(3, 3)), 4);
        assert_eq!(table.get(0, board.pos(3, 2)), 9);
        assert_eq!(table.get(0, board.pos(2, 3)), 9);
        // pushing left from (3, 1) needs the player in the wall
        assert_eq!(table.get(0, board.pos(3, 1)), INFINITE);
        assert_eq!(table.get(0, board.pos(1, 1)), INFINITE);
        assert_eq!(table.get(0, board.pos(0, 0)), INFINITE);
    }

    #[test]
    fn distances_finite_iff_pushable() {
        // only the top left corridor leads to the left target
        let level: Level = r"
#########
#.  #   #
### #   #
#o  x x #
#   #  .#
#########"
            .parse()
            .unwrap();
        let sd = process_level(&level).unwrap();
        let board = &sd.board;
        let left = board.goals().iter().position(|&g| g == board.pos(1, 1)).unwrap();
        let right = board.goals().iter().position(|&g| g == board.pos(4, 7)).unwrap();

        for pos in 0..board.cell_count() {
            let to_any = table_finite(&sd.dists, left, pos) || table_finite(&sd.dists, right, pos);
            assert_eq!(to_any, !board.blocks_box(pos), "pos {:?}", board.row_col(pos));
        }
        assert!(!table_finite(&sd.dists, left, board.pos(3, 5)));
        assert!(table_finite(&sd.dists, right, board.pos(3, 5)));
    }

    fn table_finite(table: &DistTable, goal_index: usize, pos: Pos) -> bool {
        table.get(goal_index, pos) != INFINITE
    }
}
