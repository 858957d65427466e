use std::fmt::{self, Display, Formatter};

/// Index into the flattened grid: `r * cols + c`
pub(crate) type Pos = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Dir {
    Up,
    Left,
    Down,
    Right,
}

pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Left, Dir::Down, Dir::Right];

impl Dir {
    pub(crate) fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Left => Dir::Right,
            Dir::Down => Dir::Up,
            Dir::Right => Dir::Left,
        }
    }

    pub(crate) fn to_char(self) -> char {
        match self {
            Dir::Up => 'W',
            Dir::Left => 'A',
            Dir::Down => 'S',
            Dir::Right => 'D',
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}
