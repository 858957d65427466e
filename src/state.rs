use crate::board::CellSet;
use crate::data::Pos;

/// Player position and box positions - nothing else is part of a state's identity.
///
/// Boxes are a bit set over the whole grid so equal configurations
/// compare and hash equally no matter in which order the boxes were moved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub(crate) player_pos: Pos,
    pub(crate) boxes: CellSet,
}

impl State {
    pub(crate) fn new(player_pos: Pos, boxes: CellSet) -> State {
        State { player_pos, boxes }
    }

    pub(crate) fn has_box(&self, pos: Pos) -> bool {
        self.boxes[pos]
    }

    pub(crate) fn box_cnt(&self) -> usize {
        self.boxes.count_ones()
    }

    /// Copy of this state with one box pushed from `box_pos` to `dest`.
    /// The player ends up where the box was.
    pub(crate) fn push(&self, box_pos: Pos, dest: Pos) -> State {
        let mut boxes = self.boxes.clone();
        boxes.set(box_pos, false);
        boxes.set(dest, true);
        State::new(box_pos, boxes)
    }
}
