use clap::{Parser, ValueEnum};
use eight_puzzle_solver::engine::State;
use eight_puzzle_solver::heuristics::manhattan;
use eight_puzzle_solver::sampler::sample_graph;
use eight_puzzle_solver::solver::{solve, Algorithm, Solution};
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Which solvers to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Bfs,
    #[value(name = "astar")]
    AStar,
    Both,
}

impl Mode {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Mode::Bfs => &[Algorithm::Bfs],
            Mode::AStar => &[Algorithm::AStar],
            Mode::Both => &[Algorithm::Bfs, Algorithm::AStar],
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Find a shortest solution to an 8-puzzle", long_about = None)]
struct Args {
    /// Starting board, e.g. "123406758" or "1,2,3,4,0,6,7,5,8" (`.` or `_` also mark the blank)
    #[clap(short, long, default_value = "123406758")]
    start: State,

    /// Goal board, in the same format as --start
    #[clap(short, long, default_value = "123456780")]
    goal: State,

    /// Solver(s) to run
    #[clap(short, long, value_enum, default_value_t = Mode::Both)]
    algorithm: Mode,

    /// Only print the move count of each solver
    #[clap(short, long)]
    quiet: bool,

    /// Sample the transition graph around the start, stopping once this many new states are found
    #[clap(long)]
    sample: Option<usize>,

    /// Write the sampled graph (DOT) to this file instead of stdout
    #[clap(long, requires = "sample")]
    dot: Option<PathBuf>,
}

fn print_solution(solution: &Solution, quiet: bool) {
    println!(
        "{}: {} moves ({} states discovered)",
        solution.algorithm, solution.moves, solution.discovered
    );
    if quiet {
        return;
    }
    let directions = solution.directions();
    if directions.is_empty() {
        println!("  Start is already the goal.");
    }
    for (i, (direction, state)) in directions.iter().zip(solution.path.iter().skip(1)).enumerate() {
        println!("  Move {}: blank {}", i + 1, direction);
        for row in state.to_string().lines() {
            println!("    {}", row);
        }
    }
    println!();
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    println!("Start:\n{}\n", args.start);
    println!("Goal:\n{}\n", args.goal);
    println!(
        "Manhattan distance: {}\n",
        manhattan(&args.start, &args.goal)
    );
    if !args.start.parity_matches(&args.goal) {
        println!("Start and goal have different parity; expecting no solution.\n");
    }

    for &algorithm in args.algorithm.algorithms() {
        info!("running {}", algorithm);
        match solve(&args.start, &args.goal, algorithm) {
            Ok(Some(solution)) => print_solution(&solution, args.quiet),
            Ok(None) => println!("{}: no solution, the goal is unreachable from the start.", algorithm),
            Err(e) => {
                error!("{} failed: {}", algorithm, e);
                eprintln!("{} failed: {}", algorithm, e);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(limit) = args.sample {
        let graph = sample_graph(&args.start, limit);
        let dot = graph.to_dot();
        match &args.dot {
            Some(path) => {
                if let Err(e) = fs::write(path, dot) {
                    eprintln!("Failed to write {}: {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
                println!(
                    "Wrote transition graph ({} states, {} edges) to {}",
                    graph.node_count(),
                    graph.edge_count(),
                    path.display()
                );
            }
            None => print!("{}", dot),
        }
    }

    ExitCode::SUCCESS
}
