// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod level;
pub mod map_formatter;
pub mod moves;
pub mod solver;

mod board;
mod data;
mod fs;
mod parser;
mod state;

use std::error::Error;

use crate::config::{Format, Method};
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub use crate::board::Board;
pub use crate::parser::ParserErr;
pub use crate::state::State;

pub trait LoadLevel {
    /// Reads the level from a file, the format is detected from its content
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, method: Method, print_status: bool) -> Result<SolverOk, SolverErr>;
}
