pub(crate) mod a_star;
mod backtracking;
mod deadlocks;
mod preprocessing;
mod reachability;

use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};
use typed_arena::Arena;

use crate::board::{empty_cells, Board};
use crate::config::Method;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::level::Level;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

use self::a_star::{QueueEntry, SearchNode, Stats};
use self::backtracking::reconstruct_moves;
use self::deadlocks::is_dead;
use self::preprocessing::{find_dead_cells, DistTable, INFINITE};
use self::reachability::reachable_positions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    IncompleteBorder,
    UnreachableBoxes,
    UnreachableGoals,
    BoxesGoals,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::IncompleteBorder => write!(f, "Incomplete border"),
            SolverErr::UnreachableBoxes => write!(
                f,
                "Unreachable boxes - some boxes are not on goal but can't be reached"
            ),
            SolverErr::UnreachableGoals => write!(
                f,
                "Unreachable goals - some goals don't have a box but can't be reached"
            ),
            SolverErr::BoxesGoals => write!(f, "Different number of reachable boxes and goals"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, method: Method) -> Self {
        Self {
            moves,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "{}: No solution", self.method)?,
            Some(ref moves) => writeln!(
                f,
                "{}: moves {}, pushes {}",
                self.method,
                moves.move_cnt(),
                moves.push_cnt()
            )?,
        }
        write!(f, "{:?}", self.stats)
    }
}

/// Everything that doesn't change during the search
#[derive(Debug, Clone)]
pub(crate) struct StaticData {
    pub(crate) board: Board,
    pub(crate) dists: DistTable,
    /// Initial state without the boxes that were removed together with their targets
    pub(crate) state: State,
}

impl Solve for Level {
    fn solve(&self, method: Method, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, method, print_status)
    }
}

fn solve(level: &Level, method: Method, print_status: bool) -> Result<SolverOk, SolverErr> {
    debug!("Processing level...");
    let static_data = process_level(level)?;
    debug!("Processed level");

    let ok = match method {
        Method::AStar => search(&static_data, method, print_status, heuristic_push),
        Method::Bfs => search(&static_data, method, print_status, heuristic_none),
    };
    Ok(ok)
}

pub(crate) fn process_level(level: &Level) -> Result<StaticData, SolverErr> {
    // Guarantees we have here:
    // - the player exists and therefore the grid is at least 1x1
    // Do some more low level checking so we can omit bounds checks later.

    let board = &level.board;
    let state = &level.state;

    // make sure the player's region is surrounded by walls
    let mut visited = empty_cells(board.cell_count());
    visited.set(state.player_pos, true);
    let mut to_visit = vec![state.player_pos];
    while let Some(cur) = to_visit.pop() {
        for &dir in &DIRECTIONS {
            // this is the only place we need to check bounds
            // everything after that will be surrounded by walls
            let next = board
                .checked_step(cur, dir)
                .ok_or(SolverErr::IncompleteBorder)?;
            if !visited[next] && !board.is_wall(next) {
                visited.set(next, true);
                to_visit.push(next);
            }
        }
    }

    // make sure all relevant game elements are reachable
    let mut boxes = state.boxes.clone();
    let mut targets = board.targets().clone();
    for pos in state.boxes.iter_ones() {
        if !visited[pos] {
            if !board.is_target(pos) {
                return Err(SolverErr::UnreachableBoxes);
            }
            boxes.set(pos, false);
        }
    }
    for pos in board.targets().iter_ones() {
        if !visited[pos] {
            if !state.has_box(pos) {
                return Err(SolverErr::UnreachableGoals);
            }
            targets.set(pos, false);
        }
    }

    let clean_state = State::new(state.player_pos, boxes);
    if clean_state.box_cnt() != targets.count_ones() {
        return Err(SolverErr::BoxesGoals);
    }

    // make sure all non-reachable cells are walls
    // to avoid errors with code that iterates through all non-walls
    let mut walls = board.walls().clone();
    for pos in visited.iter_zeros() {
        walls.set(pos, true);
    }

    let (rows, cols) = board.dimensions();
    let fragile = board.fragile().clone();
    let processed = Board::new(rows, cols, walls.clone(), targets.clone(), fragile.clone());

    let dead_cells = find_dead_cells(&processed);
    debug!("Dead cells:\n{}", processed.format_cells(&dead_cells));
    let mut fragile = fragile;
    for pos in dead_cells.iter_ones() {
        fragile.set(pos, true);
    }

    let board = Board::new(rows, cols, walls, targets, fragile);
    let dists = DistTable::new(&board);
    Ok(StaticData {
        board,
        dists,
        state: clean_state,
    })
}

fn search<H>(sd: &StaticData, method: Method, print_status: bool, heuristic: H) -> SolverOk
where
    H: Fn(&StaticData, &State) -> u32,
{
    info!("Search called with method {}", method);

    let mut stats = Stats::new();

    let arena = Arena::new();
    let mut nodes: Vec<SearchNode<'_>> = Vec::new();
    let mut visited = FnvHashSet::default();
    let mut to_visit = BinaryHeap::new();

    let start: &State = arena.alloc(sd.state.clone());
    if is_dead(&sd.board, start) {
        stats.add_dead(0);
        info!("Initial state is dead");
        return SolverOk::new(None, stats, method);
    }
    visited.insert(start);
    nodes.push(SearchNode::new(start, None, None, 0, heuristic(sd, start)));
    stats.add_created(0);
    to_visit.push(QueueEntry {
        cost: nodes[0].cost(),
        index: 0,
    });

    while let Some(QueueEntry { index, .. }) = to_visit.pop() {
        let cur_node = nodes[index];
        if stats.add_visited(cur_node.dist) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if is_solved(&sd.board, cur_node.state) {
            info!("Solved, backtracking path");
            let moves = reconstruct_moves(&sd.board, &nodes, index);
            return SolverOk::new(Some(moves), stats, method);
        }

        let depth = cur_node.dist + 1;
        for (from, dir, new_state) in expand_push(&sd.board, cur_node.state) {
            if is_dead(&sd.board, &new_state) {
                stats.add_dead(depth);
                continue;
            }
            if visited.contains(&new_state) {
                stats.add_duplicate(depth);
                continue;
            }

            let h = heuristic(sd, &new_state);
            let new_state: &State = arena.alloc(new_state);
            visited.insert(new_state);

            let new_node = SearchNode::new(new_state, Some(index), Some((from, dir)), depth, h);
            to_visit.push(QueueEntry {
                cost: new_node.cost(),
                index: nodes.len(),
            });
            nodes.push(new_node);
            stats.add_created(depth);
        }
    }

    info!("No solution");
    SolverOk::new(None, stats, method)
}

/// Every push the player can make without pushing anything else first.
///
/// Returns where the player stands before the push, the direction and the resulting state.
fn expand_push(board: &Board, state: &State) -> Vec<(Pos, Dir, State)> {
    let reachable = reachable_positions(board, state);

    let mut new_states = Vec::new();
    for box_pos in state.boxes.iter_ones() {
        for &dir in &DIRECTIONS {
            let player_pos = board.step(box_pos, dir.inverse());
            let push_dest = board.step(box_pos, dir);
            // fragile means either marked in the level or a dead cell
            if reachable.contains(player_pos)
                && !board.blocks_box(push_dest)
                && !state.has_box(push_dest)
            {
                new_states.push((player_pos, dir, state.push(box_pos, push_dest)));
            }
        }
    }
    new_states
}

/// Greedy matching - each box in order takes the closest target no other box took yet.
///
/// Not admissible in general, the squared distances make it prefer nearly finished states.
fn heuristic_push(sd: &StaticData, state: &State) -> u32 {
    // less is better

    let goals = sd.board.goals();
    let mut claimed = vec![false; goals.len()];
    let mut sum: u32 = 0;
    for box_pos in state.boxes.iter_ones() {
        let closest = (0..goals.len())
            .filter(|&goal_index| !claimed[goal_index])
            .map(|goal_index| (sd.dists.get(goal_index, box_pos), goal_index))
            .min();
        match closest {
            Some((dist, goal_index)) if dist != INFINITE => {
                claimed[goal_index] = true;
                sum = sum.saturating_add(dist);
            }
            _ => return INFINITE,
        }
    }
    sum
}

/// Turns the search into BFS by pushes
fn heuristic_none(_sd: &StaticData, _state: &State) -> u32 {
    0
}

fn is_solved(board: &Board, state: &State) -> bool {
    state.boxes == *board.targets()
}
