use clap::Parser;
use eight_puzzle_solver::engine::{Direction, State};
use eight_puzzle_solver::solver::{solve, Algorithm};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play the 8-puzzle in the terminal", long_about = None)]
struct Args {
    /// Seed for the starting scramble
    #[clap(short, long, default_value_t = 2024)]
    seed: u64,

    /// Length of the random walk used to scramble the board
    #[clap(long, default_value_t = 20)]
    scramble: usize,
}

/// The first move of an optimal solution from `state`, if any.
fn hint(state: &State) -> Option<Direction> {
    match solve(state, &State::goal(), Algorithm::AStar) {
        Ok(Some(solution)) => solution.directions().first().copied(),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let goal = State::goal();
    let mut state = goal.scramble(args.scramble, args.seed);
    let mut history: Vec<State> = Vec::new();
    println!("Welcome to the 8-puzzle! Slide the blank (.) until the board reads 1-8 in order.");

    loop {
        println!("---------------------");
        println!("Moves: {}", history.len());
        println!("{}", state);

        if state == goal {
            println!();
            println!("---------------------");
            println!("Solved in {} moves!", history.len());
            println!("---------------------");
            break;
        }

        print!("Move the blank (u/d/l/r), 'b' to take back, 'h' for a hint, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "b" => match history.pop() {
                Some(previous) => {
                    state = previous;
                    println!("Move taken back.");
                }
                None => println!("Nothing to take back."),
            },
            "h" => match hint(&state) {
                Some(direction) => println!("Hint: move the blank {}.", direction),
                None => println!("No hint available."),
            },
            other => {
                let mut chars = other.chars();
                let direction = match (chars.next(), chars.next()) {
                    (Some(c), None) => Direction::from_char(c),
                    _ => None,
                };
                match direction {
                    Some(direction) => match state.apply(direction) {
                        Some(next) => {
                            history.push(state);
                            state = next;
                        }
                        None => println!("The blank cannot move {} from here.", direction),
                    },
                    None => println!("Invalid input. Use u, d, l, r, b, h or q."),
                }
            }
        }
    }

    Ok(())
}
