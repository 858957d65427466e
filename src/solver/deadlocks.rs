use crate::board::Board;
use crate::data::{Dir, Pos};
use crate::state::State;

/// The four L shapes around a box: (vertical neighbor, horizontal neighbor)
const CORNERS: [(Dir, Dir); 4] = [
    (Dir::Up, Dir::Left),
    (Dir::Up, Dir::Right),
    (Dir::Down, Dir::Left),
    (Dir::Down, Dir::Right),
];

/// Cheap local test - true means no sequence of pushes can solve the state.
///
/// Misses most deadlocks, only frozen boxes next to each other or walls are detected.
pub(crate) fn is_dead(board: &Board, state: &State) -> bool {
    state
        .boxes
        .iter_ones()
        .filter(|&box_pos| !board.is_target(box_pos))
        .any(|box_pos| is_frozen(board, state, box_pos))
}

fn is_frozen(board: &Board, state: &State, box_pos: Pos) -> bool {
    let occupied = |pos: Pos| board.is_wall(pos) || state.has_box(pos);

    CORNERS.iter().any(|&(vertical, horizontal)| {
        let v = board.step(box_pos, vertical);
        let h = board.step(box_pos, horizontal);
        if board.is_wall(v) && board.is_wall(h) {
            // corner - can't be pushed along either axis
            return true;
        }
        // 2x2 block of walls and boxes - none of them can move
        occupied(v) && occupied(h) && occupied(board.step(v, horizontal))
    })
}
