use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::map_formatter::MapFormatter;
use crate::state::State;

#[derive(Clone)]
pub struct Level {
    pub(crate) board: Board,
    pub(crate) state: State,
}

impl Level {
    pub(crate) fn new(board: Board, state: State) -> Self {
        Level { board, state }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn initial_state(&self) -> &State {
        &self.state
    }

    pub fn native(&self) -> MapFormatter<'_> {
        self.format(Format::Native)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.format(Format::Xsb)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.board, Some(&self.state), format)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.native())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.native())
    }
}
