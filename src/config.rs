use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Native,
    Xsb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Best-first by pushes + squared push distance to the closest free target
    AStar,
    /// Breadth-first by pushes - push optimal but explores a lot more
    Bfs,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Native => write!(f, "native"),
            Format::Xsb => write!(f, "xsb"),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::AStar => write!(f, "a-star"),
            Method::Bfs => write!(f, "bfs"),
        }
    }
}
