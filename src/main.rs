//! Wirelife CLI - run a saved world or a JSON seed for a number of cycles.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use wirelife::{Seed, Simulation, SimulationStats, codec};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <world.gol | seed.json> [cycles] [--out <dir>]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life or WireWorld simulation.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  world.gol    Save token produced by a previous run");
        eprintln!("  seed.json    Seed description (mode + pattern)");
        eprintln!("  cycles       Number of cycles to run (default: 100)");
        eprintln!("  --out <dir>  Write the final state to <dir>/life_XXX.gol");
        eprintln!();
        eprintln!("An example seed is printed with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example();
        return;
    }

    let input = PathBuf::from(&args[1]);
    let mut cycles: u64 = 100;
    let mut out_dir: Option<PathBuf> = None;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        if arg.as_str() == "--out" {
            match rest.next() {
                Some(dir) => out_dir = Some(PathBuf::from(dir)),
                None => {
                    eprintln!("--out needs a directory argument");
                    std::process::exit(1);
                }
            }
        } else {
            cycles = arg.parse().unwrap_or_else(|_| {
                eprintln!("Invalid cycle count: {}", arg);
                std::process::exit(1);
            });
        }
    }

    let mut sim = Simulation::default();

    if input.extension().and_then(|e| e.to_str()) == Some("json") {
        let seed_str = fs::read_to_string(&input).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        let seed: Seed = serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        });
        sim.seed(&seed).unwrap_or_else(|e| {
            eprintln!("Error installing seed: {}", e);
            std::process::exit(1);
        });
    } else {
        let token = codec::read_save_file(&input).unwrap_or_else(|e| {
            eprintln!("Error reading save file: {}", e);
            std::process::exit(1);
        });
        sim.load(&token).unwrap_or_else(|e| {
            eprintln!("Error decoding save token: {}", e);
            std::process::exit(1);
        });
    }

    println!("Wirelife Simulation");
    println!("===================");
    println!("Mode: {:?}", sim.mode());
    println!("Initial: {}", SimulationStats::from_sim(&sim));
    println!("Cycles: {}", cycles);
    println!();

    let start = Instant::now();

    for i in 0..cycles {
        sim.advance();

        // Print progress every 10%
        if (i + 1) % (cycles / 10).max(1) == 0 {
            let elapsed = start.elapsed().as_secs_f32();
            let cycles_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  {} ({:.1} cycles/s)",
                SimulationStats::from_sim(&sim),
                cycles_per_sec
            );
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!("Final: {}", SimulationStats::from_sim(&sim));
    println!(
        "Time: {:.2}s ({:.1} cycles/s)",
        elapsed.as_secs_f32(),
        cycles as f32 / elapsed.as_secs_f32()
    );
    println!();

    let token = sim.save();
    match out_dir {
        Some(dir) => {
            let path = codec::write_save_file(&dir, &token).unwrap_or_else(|e| {
                eprintln!("Error writing save file: {}", e);
                std::process::exit(1);
            });
            println!("Saved {}", path.display());
        }
        None => println!("{}", token),
    }
}

fn print_example() {
    let seed = Seed::default();

    println!("Example seed (seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
    println!();

    let mut sim = Simulation::default();
    sim.seed(&seed).unwrap();
    println!("Matching save token:");
    println!("{}", sim.save());
}
