//! popshot-app: headless driver for the arcade shooter simulation.
//!
//! Usage:
//!   popshot-app --level levels/level1.json
//!   popshot-app --level levels/level1.json --seed 7 --ticks 3600 --unpaced
//!
//! Runs the engine on scripted demo input and streams one snapshot per
//! tick to stdout as JSON lines. Progress and errors go to stderr.

use std::path::PathBuf;
use std::process;

use popshot_app::game_loop::{self, GameLoopCommand, GameLoopConfig};
use popshot_core::commands::PlayerCommand;
use popshot_core::level::load_level;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let level_path = match parse_level_path(&args) {
        Some(p) => p,
        None => {
            eprintln!("Error: --level <path> is required");
            print_usage();
            process::exit(1);
        }
    };

    let config = GameLoopConfig {
        seed: parse_seed(&args),
        max_ticks: parse_ticks(&args),
        unpaced: args.iter().any(|a| a == "--unpaced"),
    };

    let level = match load_level(&level_path) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error loading level {}: {e}", level_path.display());
            process::exit(1);
        }
    };

    eprintln!("Playing {} (seed {})...", level_path.display(), config.seed);

    let (commands, handle) = game_loop::spawn(config, std::io::stdout());
    if commands
        .send(GameLoopCommand::PlayerCommand(PlayerCommand::LoadLevel {
            level,
        }))
        .is_err()
    {
        eprintln!("Error: game loop exited before accepting the level");
        process::exit(1);
    }

    if handle.join().is_err() {
        eprintln!("Error: game loop thread panicked");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "popshot-app: headless arcade shooter simulation driver\n\
         \n\
         Options:\n\
         \n\
           --level <path>  Level document to play (required)\n\
           --seed <N>      Simulation seed (default: 42)\n\
           --ticks <N>     Stop after N ticks (default: run until the level resolves)\n\
           --unpaced       Run as fast as possible instead of real time\n\
         \n\
         Examples:\n\
         \n\
           popshot-app --level levels/level1.json\n\
           popshot-app --level levels/level1.json --seed 7 --ticks 3600 --unpaced > run.jsonl\n"
    );
}

fn parse_level_path(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--level" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_seed(args: &[String]) -> u64 {
    for i in 0..args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
        }
    }
    42
}

fn parse_ticks(args: &[String]) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == "--ticks" && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return Some(n);
            }
        }
    }
    None
}
