use crate::board::Board;
use crate::moves::{Move, Moves};
use crate::solver::a_star::SearchNode;
use crate::solver::reachability::path_between;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// Turns the chain of pushes ending in `final_index` into the full list of moves.
///
/// Nodes only remember where the player stood before each push,
/// the steps to get there are searched again here - only once per push of the solution.
pub(crate) fn reconstruct_moves(board: &Board, nodes: &[SearchNode<'_>], final_index: usize) -> Moves {
    let mut chain = Vec::new();
    let mut cur = final_index;
    while let Some(prev) = nodes[cur].prev {
        chain.push((prev, cur));
        cur = prev;
    }

    let mut moves = Moves::default();
    for &(prev, cur) in chain.iter().rev() {
        let (player_pos, dir) = nodes[cur]
            .push
            .expect("Every node except the initial one was created by a push");
        let steps = path_between(board, nodes[prev].state, player_pos)
            .expect("The player must be able to reach the position before the push");
        moves.extend(&steps);
        moves.add(Move::new(dir, true));
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Dir;
    use crate::level::Level;

    #[test]
    fn backtracking() {
        let level: Level = r"
########
#o     #
#  x . #
########
"
        .parse()
        .unwrap();
        let board = &level.board;

        // the box goes right twice, the player walks around only before the first push
        let s0 = level.state.clone();
        let s1 = s0.push(board.pos(2, 3), board.pos(2, 4));
        let s2 = s1.push(board.pos(2, 4), board.pos(2, 5));
        let nodes = vec![
            SearchNode::new(&s0, None, None, 0, 0),
            SearchNode::new(&s1, Some(0), Some((board.pos(2, 2), Dir::Right)), 1, 0),
            SearchNode::new(&s2, Some(1), Some((board.pos(2, 3), Dir::Right)), 2, 0),
        ];

        let moves = reconstruct_moves(board, &nodes, 2);
        assert_eq!(moves.to_string(), "SDDD");
        assert_eq!(format!("{:?}", moves), "sdDD");
        assert_eq!(moves.push_cnt(), 2);

        assert!(reconstruct_moves(board, &nodes, 0).is_empty());
    }
}
