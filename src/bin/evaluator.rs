use clap::Parser;
use eight_puzzle_solver::engine::State;
use eight_puzzle_solver::heuristics::{manhattan, misplaced_tiles};
use eight_puzzle_solver::solver::{solve, Algorithm};
use std::collections::HashMap;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::AStar];

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare BFS and A* on scrambled 8-puzzle boards", long_about = None)]
struct Args {
    /// Number of boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first board; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Length of the random walk used to scramble each board
    #[clap(long, default_value_t = 30)]
    scramble: usize,
}

#[derive(Default)]
struct Totals {
    discovered: usize,
    elapsed: Duration,
    runs: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let goal = State::goal();
    let mut totals: HashMap<Algorithm, Totals> = HashMap::new();
    let mut mismatches = 0;

    println!("Starting solver evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx;
        let start = goal.scramble(args.scramble, current_seed);

        println!(
            "\nBoard {} (Seed: {}) {}  manhattan={} misplaced={}",
            board_idx,
            current_seed,
            start.to_compact(),
            manhattan(&start, &goal),
            misplaced_tiles(&start, &goal)
        );

        let mut move_counts = Vec::new();
        for algorithm in ALGORITHMS {
            let timer = Instant::now();
            let outcome = solve(&start, &goal, algorithm);
            let elapsed = timer.elapsed();

            match outcome {
                Ok(Some(solution)) => {
                    println!(
                        "  Solver: {:<4} Moves: {:<3} Discovered: {:<7} Time: {:?}",
                        algorithm.to_string(),
                        solution.moves,
                        solution.discovered,
                        elapsed
                    );
                    let entry = totals.entry(algorithm).or_default();
                    entry.discovered += solution.discovered;
                    entry.elapsed += elapsed;
                    entry.runs += 1;
                    move_counts.push(solution.moves);
                }
                Ok(None) => {
                    eprintln!(
                        "Error: {} found no solution for board {} although it was scrambled from the goal.",
                        algorithm, board_idx
                    );
                    mismatches += 1;
                }
                Err(e) => {
                    eprintln!("Error: {} failed on board {}: {}", algorithm, board_idx, e);
                    mismatches += 1;
                }
            }
        }

        if move_counts.windows(2).any(|pair| pair[0] != pair[1]) {
            eprintln!(
                "Error: solvers disagree on the optimal length for board {}: {:?}",
                board_idx, move_counts
            );
            mismatches += 1;
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");
    for algorithm in ALGORITHMS {
        match totals.get(&algorithm) {
            Some(t) if t.runs > 0 => println!(
                "Solver {:<4}: Discovered = {:.1}, Time = {:?}",
                algorithm.to_string(),
                t.discovered as f64 / t.runs as f64,
                t.elapsed / t.runs
            ),
            _ => println!("Solver {}: No runs recorded.", algorithm),
        }
    }

    if mismatches > 0 {
        eprintln!("\n{} problem(s) found.", mismatches);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
