use std::thread;
use std::time::Instant;

use clap::Parser;

use monopoly_odds::{Game, GameError, Landings};

/// Long-run tile-occupancy odds for French Monopoly, by simulation.
#[derive(Parser, Debug)]
#[command(name = "monopoly-odds", about = "Monopoly tile-occupancy odds by simulation", long_about = None)]
struct Args {
    /// Top-level turns to simulate
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    turns: u64,

    /// RNG seed; a random one is drawn (and echoed) when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Worker threads, each sampling an independent session
    #[arg(short, long, default_value_t = 1)]
    workers: u64,
}

fn main() {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let workers = args.workers.max(1);

    println!(
        "Simulating {} turns (seed {}, {} workers)",
        args.turns, seed, workers
    );

    let start = Instant::now();
    let landings = match sample(args.turns, seed, workers) {
        Ok(landings) => landings,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let duration = start.elapsed();

    match landings.report() {
        Ok(report) => {
            for (tile, probability) in report {
                println!("{}: \x1b[36m{:.6}\x1b[0m", tile, probability);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    println!("{} landings", landings.total());
    println!("Time elapsed: {:?}", duration);
}

/// Run independent sessions and merge their counters.
fn sample(turns: u64, seed: u64, workers: u64) -> Result<Landings, GameError> {
    if workers == 1 {
        return run_session(seed, turns);
    }

    let mut handles = Vec::with_capacity(workers as usize);
    for worker in 0..workers {
        // spread the remainder over the first workers
        let share = turns / workers + u64::from(worker < turns % workers);
        let worker_seed = seed.wrapping_add(worker);
        handles.push(thread::spawn(move || run_session(worker_seed, share)));
    }

    let mut merged = Landings::new();
    for handle in handles {
        let landings = handle.join().expect("worker thread panicked")?;
        merged.merge(&landings);
    }
    Ok(merged)
}

fn run_session(seed: u64, turns: u64) -> Result<Landings, GameError> {
    let mut game = Game::new(seed);
    for _ in 0..turns {
        game.take_turn()?;
    }
    Ok(game.into_landings())
}
