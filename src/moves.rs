use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) dir: Dir,
    pub(crate) is_push: bool,
}

impl Move {
    pub(crate) fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // steps and pushes look the same, the output alphabet is just WASD
        write!(f, "{}", self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir)
        } else {
            write!(f, "{}", self.dir.to_char().to_ascii_lowercase())
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub(crate) fn extend(&mut self, moves: &Moves) {
        self.0.extend_from_slice(&moves.0);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{:?}", mov)?;
        }
        Ok(())
    }
}
