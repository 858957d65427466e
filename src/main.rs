use std::env;
use std::process;

use clap::{App, Arg, ArgGroup};
use log::debug;

use sokoban_astar::config::{Format, Method};
use sokoban_astar::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-astar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds a sequence of moves that pushes every box onto a target")
        .arg(
            Arg::with_name("native")
                .short("n")
                .long("native")
                .help("parse as native format (detected automatically if neither is given)"),
        )
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("parse as XSB format"),
        )
        .group(ArgGroup::with_name("format").arg("native").arg("xsb"))
        .arg(
            Arg::with_name("bfs")
                .short("b")
                .long("bfs")
                .help("search breadth-first by pushes instead of A*"),
        )
        .arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("print progress whenever the search reaches a new depth"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let format = if matches.is_present("native") {
        Some(Format::Native)
    } else if matches.is_present("xsb") {
        Some(Format::Xsb)
    } else {
        None
    };
    let method = if matches.is_present("bfs") {
        Method::Bfs
    } else {
        Method::AStar
    };
    let print_status = matches.is_present("status");
    // required so it can't be missing
    let path = matches.value_of("file").unwrap();
    debug!("Format: {:?}, method: {}", format, method);

    let level = match format {
        Some(format) => path.load_level_as(format),
        None => path.load_level(),
    };
    let level = level.unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => println!("Can't load level {} in {}: {}", path, dir.display(), err),
            Err(_) => println!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    print!("{}", level.format(format.unwrap_or(Format::Native)));
    let solver_ok = level.solve(method, print_status).unwrap_or_else(|err| {
        println!("Invalid level: {}", err);
        process::exit(1);
    });

    println!("{}", solver_ok.stats);
    match solver_ok.moves {
        Some(moves) => {
            println!("Found solution:");
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => {
            println!("No solution");
            process::exit(1);
        }
    }
}
