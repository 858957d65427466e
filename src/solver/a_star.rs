use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

use crate::data::{Dir, Pos};
use crate::state::State;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    dead_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub fn total_dead(&self) -> usize {
        self.dead_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_dead(&mut self, depth: u32) -> bool {
        Self::add(&mut self.dead_states, depth)
    }

    /// Returns true if this is the first state at this depth
    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Deadlocks pruned total: {}",
            self.total_dead().separated_string()
        )?;
        writeln!(
            f,
            "Created but not reached total: {}",
            created.saturating_sub(visited).separated_string()
        )?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Unique", "Duplicates", "Deadlocks", "Unknown (not reached)"]
                .iter()
                .map(|&title| Cell::new(title))
                .collect(),
        ));

        let depths = self.created_states.len().max(self.dead_states.len());
        let get = |counts: &Vec<usize>, depth: usize| counts.get(depth).cloned().unwrap_or(0);
        for depth in 0..depths {
            let created = get(&self.created_states, depth);
            let visited = get(&self.visited_states, depth);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&get(&self.duplicate_states, depth).separated_string()),
                Cell::new(&get(&self.dead_states, depth).separated_string()),
                Cell::new(&created.saturating_sub(visited).separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates / deadlocks:")?;
        writeln!(
            f,
            "{:<16}{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_visited().separated_string(),
            self.total_duplicates().separated_string(),
            self.total_dead().separated_string()
        )
    }
}

/// Entry of the node arena. Parents are referenced by their index in the arena.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: &'a State,
    pub(crate) prev: Option<usize>,
    /// Where the player stood and which way they pushed to get here from `prev`
    pub(crate) push: Option<(Pos, Dir)>,
    pub(crate) dist: u32,
    pub(crate) h: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        state: &'a State,
        prev: Option<usize>,
        push: Option<(Pos, Dir)>,
        dist: u32,
        h: u32,
    ) -> Self {
        Self {
            state,
            prev,
            push,
            dist,
            h,
        }
    }

    pub(crate) fn cost(&self) -> u32 {
        self.dist.saturating_add(self.h)
    }
}

/// What actually goes into the priority queue - ordered by cost, then by node index
/// so nodes created earlier go first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueueEntry {
    pub(crate) cost: u32,
    pub(crate) index: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BinaryHeap;

    #[test]
    fn queue_order() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry { cost: 5, index: 1 });
        heap.push(QueueEntry { cost: 3, index: 4 });
        heap.push(QueueEntry { cost: 3, index: 2 });
        heap.push(QueueEntry { cost: u32::max_value(), index: 0 });
        heap.push(QueueEntry { cost: 4, index: 3 });

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.index).collect();
        assert_eq!(order, vec![2, 4, 3, 1, 0]);
    }

    #[test]
    fn saturating_cost() {
        let state = State::new(0, crate::board::empty_cells(1));
        let node = SearchNode::new(&state, None, None, 7, u32::max_value());
        assert_eq!(node.cost(), u32::max_value());
        let node = SearchNode::new(&state, Some(0), Some((0, Dir::Up)), 7, 9);
        assert_eq!(node.cost(), 16);
    }

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_visited(0));
        assert!(stats.add_created(2));
        assert!(!stats.add_created(1));
        assert!(!stats.add_created(2));
        assert!(stats.add_dead(3));
        assert!(stats.add_duplicate(1));

        assert_eq!(stats.total_created(), 4);
        assert_eq!(stats.total_visited(), 1);
        assert_eq!(stats.total_duplicates(), 1);
        assert_eq!(stats.total_dead(), 1);

        let text = stats.to_string();
        assert!(text.contains("States created total: 4"));
        assert!(text.contains("Created but not reached total: 3"));
        // one row per depth including the one which only has deadlocks
        assert!(text.contains("3:"));
    }

    #[test]
    fn thousands_separators() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(0);
        }
        assert!(stats.to_string().contains("States created total: 1,234"));
    }
}
