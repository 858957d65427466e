use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::data::Contents;
use crate::state::State;

pub struct MapFormatter<'a> {
    board: &'a Board,
    state: Option<&'a State>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(board: &'a Board, state: Option<&'a State>, format: Format) -> Self {
        Self {
            board,
            state,
            format,
        }
    }

    fn contents(&self, pos: usize) -> Contents {
        match self.state {
            Some(state) if state.player_pos == pos => Contents::Player,
            Some(state) if state.has_box(pos) => Contents::Box,
            _ => Contents::Empty,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.board.dimensions();
        for r in 0..rows {
            // don't print trailing empty cells to match the input level strings
            let last_non_empty = (0..cols).rev().find(|&c| {
                let pos = self.board.pos(r, c);
                self.board.is_wall(pos)
                    || self.board.is_target(pos)
                    || self.board.is_fragile(pos)
                    || self.contents(pos) != Contents::Empty
            });

            if let Some(last) = last_non_empty {
                for c in 0..=last {
                    let pos = self.board.pos(r, c);
                    let cell = match self.format {
                        Format::Native => self.native_cell(pos),
                        Format::Xsb => self.xsb_cell(pos),
                    };
                    write!(f, "{}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn native_cell(&self, pos: usize) -> char {
        if self.board.is_wall(pos) {
            return '#';
        }
        let target = self.board.is_target(pos);
        let fragile = self.board.is_fragile(pos);
        match self.contents(pos) {
            Contents::Player if target => 'O',
            Contents::Player if fragile => '!',
            Contents::Player => 'o',
            Contents::Box if target => 'X',
            Contents::Box => 'x',
            Contents::Empty if target => '.',
            Contents::Empty if fragile => '@',
            Contents::Empty => ' ',
        }
    }

    /// XSB has no fragile tiles, they're printed as floor
    fn xsb_cell(&self, pos: usize) -> char {
        if self.board.is_wall(pos) {
            return '#';
        }
        let target = self.board.is_target(pos);
        match self.contents(pos) {
            Contents::Player if target => '+',
            Contents::Player => '@',
            Contents::Box if target => '*',
            Contents::Box => '$',
            Contents::Empty if target => '.',
            Contents::Empty => ' ',
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
