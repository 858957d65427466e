use std::fmt::{self, Display, Formatter};
use std::error::Error;
use std::str::FromStr;

use crate::board::{empty_cells, Board};
use crate::config::Format;
use crate::level::Level;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// What a single character of the level says about its cell
#[derive(Debug, Clone, Copy, Default)]
struct Tile {
    wall: bool,
    target: bool,
    fragile: bool,
    has_box: bool,
    player: bool,
}

pub(crate) fn detect_format(level: &str) -> Format {
    // only the native format can mark the player with these
    if level.contains(|c: char| c == 'o' || c == 'O' || c == '!') {
        Format::Native
    } else {
        Format::Xsb
    }
}

pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    parse_format(level, detect_format(level))
}

pub(crate) fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut tiles = Vec::new();
    for (r, line) in level.lines().enumerate() {
        let mut line_tiles = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let tile = match format {
                Format::Native => parse_native(cur_char),
                Format::Xsb => parse_xsb(cur_char),
            };
            line_tiles.push(tile.ok_or(ParserErr::Pos(r, c))?);
        }
        tiles.push(line_tiles);
    }

    // rows can be ragged - pad them with empty cells,
    // level processing turns everything the player can't reach into walls anyway
    let rows = tiles.len();
    let cols = tiles.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut walls = empty_cells(rows * cols);
    let mut targets = empty_cells(rows * cols);
    let mut fragile = empty_cells(rows * cols);
    let mut boxes = empty_cells(rows * cols);
    let mut player_pos = None;

    for (r, row) in tiles.iter().enumerate() {
        for (c, tile) in row.iter().enumerate() {
            let pos = r * cols + c;
            walls.set(pos, tile.wall);
            targets.set(pos, tile.target);
            fragile.set(pos, tile.fragile);
            boxes.set(pos, tile.has_box);
            if tile.player {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(pos);
            }
        }
    }
    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;

    Ok(Level::new(
        Board::new(rows, cols, walls, targets, fragile),
        State::new(player_pos, boxes),
    ))
}

fn parse_native(c: char) -> Option<Tile> {
    let empty = Tile::default();
    Some(match c {
        '#' => Tile { wall: true, ..empty },
        ' ' => empty,
        '.' => Tile { target: true, ..empty },
        '@' => Tile { fragile: true, ..empty },
        'o' => Tile { player: true, ..empty },
        'O' => Tile { player: true, target: true, ..empty },
        '!' => Tile { player: true, fragile: true, ..empty },
        'x' => Tile { has_box: true, ..empty },
        'X' => Tile { has_box: true, target: true, ..empty },
        _ => return None,
    })
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
fn parse_xsb(c: char) -> Option<Tile> {
    let empty = Tile::default();
    Some(match c {
        '#' => Tile { wall: true, ..empty },
        ' ' | '-' | '_' => empty,
        '.' => Tile { target: true, ..empty },
        '@' | 'p' => Tile { player: true, ..empty },
        '+' | 'P' => Tile { player: true, target: true, ..empty },
        '$' | 'b' => Tile { has_box: true, ..empty },
        '*' | 'B' => Tile { has_box: true, target: true, ..empty },
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        let level = "";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn native_fail_no_player() {
        let level = r"
####
#x.#
####
";
        assert_eq!(
            parse_format(level, Format::Native).unwrap_err(),
            ParserErr::NoPlayer
        );
    }

    #[test]
    fn native_fail_multiple_players() {
        let level = r"
#####
#o!x#
#.  #
#####
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn native_fail_pos() {
        let level = r"
#####
#o$.#
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn xsb_fail_pos() {
        let level = r"
#####
#@X.#
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn detecting_format() {
        assert_eq!(detect_format("#o x.#"), Format::Native);
        assert_eq!(detect_format("#O#"), Format::Native);
        assert_eq!(detect_format("#!x.#"), Format::Native);
        assert_eq!(detect_format("#@$.#"), Format::Xsb);
        // fragile tiles alone don't make it native - without a player it wouldn't parse anyway
        assert_eq!(detect_format("#@ .#"), Format::Xsb);
    }

    #[test]
    fn native_tiles() {
        let level: Level = r"
#######
#o@xX #
# .   #
#######
"
        .parse()
        .unwrap();
        let board = &level.board;

        assert_eq!(board.dimensions(), (4, 7));
        assert_eq!(level.state.player_pos, board.pos(1, 1));
        assert!(board.is_fragile(board.pos(1, 2)));
        assert!(level.state.has_box(board.pos(1, 3)));
        assert!(level.state.has_box(board.pos(1, 4)));
        assert!(board.is_target(board.pos(1, 4)));
        assert!(board.is_target(board.pos(2, 2)));
        assert_eq!(level.state.box_cnt(), 2);
        assert_eq!(board.goals().len(), 2);
    }

    #[test]
    fn player_on_special_tiles() {
        let on_target: Level = "#O#".parse().unwrap();
        assert!(on_target.board.is_target(on_target.state.player_pos));

        let on_fragile: Level = "#!#".parse().unwrap();
        assert!(on_fragile.board.is_fragile(on_fragile.state.player_pos));
    }

    #[test]
    fn ragged_rows() {
        let level = r"
#####
#o x.#
#####
";
        let level = parse_format(level, Format::Native).unwrap();
        assert_eq!(level.board.dimensions(), (3, 6));
        // padding is empty, not wall
        assert!(!level.board.is_wall(level.board.pos(0, 5)));
        assert!(level.board.is_wall(level.board.pos(1, 5)));
    }

    #[test]
    fn xsb_original_1() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
";
        let level = parse_format(level, Format::Xsb).unwrap();
        assert_eq!(level.state.box_cnt(), 6);
        assert_eq!(level.board.goals().len(), 6);
        assert_eq!(level.board.dimensions(), (11, 19));
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }
}
