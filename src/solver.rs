//! Shortest-path search over the 8-puzzle state graph.
//!
//! Both solvers return a [`PredecessorMap`] on success and `None` when the goal
//! cannot be reached from the start (the two states lie in different parity
//! classes). [`reconstruct_path`] turns a map into the explicit sequence of
//! states, and [`solve`] wraps search plus reconstruction into a [`Solution`].
use crate::engine::{Direction, State};
use crate::error::PuzzleError;
use crate::heuristics::manhattan;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, VecDeque};

/// Maps every discovered state to the state it was reached from.
/// The search root maps to `None`.
///
/// The map doubles as the visited set of a search.
pub type PredecessorMap = HashMap<State, Option<State>>;

/// Search strategy used by [`solve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Uninformed breadth-first search.
    Bfs,
    /// A* guided by the Manhattan distance.
    #[value(name = "astar")]
    AStar,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::AStar => write!(f, "A*"),
        }
    }
}

/// Represents a solution found by one of the solvers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The algorithm that produced this solution.
    pub algorithm: Algorithm,
    /// States from start to goal inclusive; consecutive states are one move apart.
    pub path: Vec<State>,
    /// Number of moves, i.e. `path.len() - 1`.
    pub moves: usize,
    /// Number of distinct states the search discovered before reaching the goal.
    pub discovered: usize,
}

impl Solution {
    /// The direction the blank travels on each step of the path.
    pub fn directions(&self) -> Vec<Direction> {
        self.path
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(&pair[1]))
            .collect()
    }
}

/// Breadth-first search from `start` to `goal`.
///
/// Each state is recorded in the predecessor map the first time it is seen and
/// enqueued exactly once, so states leave the queue in non-decreasing distance
/// from `start` and the first time `goal` is popped its recorded chain is a
/// shortest path.
///
/// Returns `None` once the queue empties without reaching `goal`.
pub fn bfs(start: &State, goal: &State) -> Option<PredecessorMap> {
    debug!("bfs: {} -> {}", start.to_compact(), goal.to_compact());

    let mut predecessors = PredecessorMap::new();
    predecessors.insert(*start, None);
    let mut queue = VecDeque::from([*start]);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if current == *goal {
            debug!(
                "bfs: reached goal after expanding {} states ({} discovered)",
                expanded,
                predecessors.len()
            );
            return Some(predecessors);
        }
        expanded += 1;
        trace!("bfs: expanding {}", current.to_compact());

        for next in current.neighbors() {
            if let Entry::Vacant(slot) = predecessors.entry(next) {
                slot.insert(Some(current));
                queue.push_back(next);
            }
        }
    }

    debug!(
        "bfs: frontier exhausted after {} states, goal unreachable",
        expanded
    );
    None
}

/// An A* frontier entry.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    /// Estimated total cost `g + h`.
    f: u32,
    /// Moves from the start when this entry was pushed.
    g: u32,
    state: State,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest f, then the smallest state.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.state.cmp(&self.state))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search from `start` to `goal` using [`manhattan`] as the estimate.
///
/// The frontier is ordered by `g + h`, ties broken by the lexicographic order
/// of [`State`]. A neighbor is (re)recorded and pushed whenever a strictly
/// cheaper path to it is found, so a state can sit in the frontier several
/// times; entries whose cost has since been improved are skipped when popped.
///
/// Returns `None` once the frontier empties without reaching `goal`.
pub fn a_star(start: &State, goal: &State) -> Option<PredecessorMap> {
    debug!("a_star: {} -> {}", start.to_compact(), goal.to_compact());

    let mut predecessors = PredecessorMap::new();
    predecessors.insert(*start, None);
    let mut cost: HashMap<State, u32> = HashMap::new();
    cost.insert(*start, 0);

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        f: manhattan(start, goal),
        g: 0,
        state: *start,
    });
    let mut expanded = 0usize;

    while let Some(FrontierEntry { g, state: current, .. }) = frontier.pop() {
        if current == *goal {
            debug!(
                "a_star: reached goal at cost {} after expanding {} states ({} discovered)",
                g,
                expanded,
                predecessors.len()
            );
            return Some(predecessors);
        }

        if cost.get(&current).is_some_and(|&best| g > best) {
            continue; // stale
        }
        expanded += 1;
        trace!("a_star: expanding {} (g = {})", current.to_compact(), g);

        let candidate = g + 1;
        for next in current.neighbors() {
            let improves = cost.get(&next).map_or(true, |&known| candidate < known);
            if improves {
                cost.insert(next, candidate);
                predecessors.insert(next, Some(current));
                frontier.push(FrontierEntry {
                    f: candidate + manhattan(&next, goal),
                    g: candidate,
                    state: next,
                });
            }
        }
    }

    debug!(
        "a_star: frontier exhausted after {} states, goal unreachable",
        expanded
    );
    None
}

/// Walks the predecessor chain from `target` back to the search root and
/// returns it in start-to-target order.
///
/// # Errors
/// Returns `PuzzleError::TargetNotDiscovered` if `target` is not a key of
/// `predecessors`, or if its chain leads to a state that is missing or never
/// reaches a root. A partial path is never returned.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// use eight_puzzle_solver::solver::{bfs, reconstruct_path};
///
/// let start = State::goal();
/// let map = bfs(&start, &start).unwrap();
/// assert_eq!(reconstruct_path(&map, &start).unwrap(), vec![start]);
/// ```
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    target: &State,
) -> Result<Vec<State>, PuzzleError> {
    let mut path = Vec::new();
    let mut current = Some(*target);

    while let Some(state) = current {
        if path.len() >= predecessors.len() {
            return Err(PuzzleError::TargetNotDiscovered);
        }
        let previous = predecessors
            .get(&state)
            .ok_or(PuzzleError::TargetNotDiscovered)?;
        path.push(state);
        current = *previous;
    }

    path.reverse();
    Ok(path)
}

/// Runs `algorithm` from `start` to `goal` and reconstructs the path.
///
/// Returns `Ok(None)` when the goal is unreachable.
pub fn solve(
    start: &State,
    goal: &State,
    algorithm: Algorithm,
) -> Result<Option<Solution>, PuzzleError> {
    let search = match algorithm {
        Algorithm::Bfs => bfs(start, goal),
        Algorithm::AStar => a_star(start, goal),
    };
    let Some(predecessors) = search else {
        return Ok(None);
    };

    let path = reconstruct_path(&predecessors, goal)?;
    Ok(Some(Solution {
        algorithm,
        moves: path.len() - 1,
        path,
        discovered: predecessors.len(),
    }))
}

/// Exact distance from `start` to every state within `max_depth` moves.
#[cfg(test)]
pub(crate) fn bfs_distances(start: &State, max_depth: u32) -> HashMap<State, u32> {
    let mut distances = HashMap::from([(*start, 0)]);
    let mut queue = VecDeque::from([*start]);
    while let Some(current) = queue.pop_front() {
        let depth = distances[&current];
        if depth == max_depth {
            continue;
        }
        for next in current.neighbors() {
            if let Entry::Vacant(slot) = distances.entry(next) {
                slot.insert(depth + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tiles: [u8; 9]) -> State {
        State::new(tiles).unwrap()
    }

    fn assert_valid_path(path: &[State], start: &State, goal: &State) {
        assert_eq!(path.first(), Some(start));
        assert_eq!(path.last(), Some(goal));
        for pair in path.windows(2) {
            assert!(
                pair[0].neighbors().contains(&pair[1]),
                "{} -> {} is not a single move",
                pair[0].to_compact(),
                pair[1].to_compact()
            );
        }
    }

    #[test_log::test]
    fn test_two_move_scenario() {
        let start = state([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        let goal = State::goal();
        let expected = vec![start, state([1, 2, 3, 4, 5, 6, 7, 0, 8]), goal];

        for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
            let solution = solve(&start, &goal, algorithm).unwrap().unwrap();
            assert_eq!(solution.moves, 2, "{}", algorithm);
            assert_eq!(solution.path, expected, "{}", algorithm);
            assert_eq!(solution.directions(), vec![Direction::Down, Direction::Right]);
        }
    }

    #[test_log::test]
    fn test_unreachable_goal_reports_no_solution() {
        let start = state([1, 2, 3, 4, 5, 6, 8, 7, 0]);
        let goal = State::goal();
        assert!(bfs(&start, &goal).is_none());
        assert!(a_star(&start, &goal).is_none());
        assert_eq!(solve(&start, &goal, Algorithm::AStar), Ok(None));
    }

    #[test]
    fn test_start_equals_goal() {
        let start = state([4, 1, 3, 7, 2, 6, 0, 5, 8]);
        for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
            let solution = solve(&start, &start, algorithm).unwrap().unwrap();
            assert_eq!(solution.path, vec![start]);
            assert_eq!(solution.moves, 0);
            assert!(solution.directions().is_empty());
        }
    }

    #[test]
    fn test_bfs_records_each_state_once() {
        let start = state([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        let map = bfs(&start, &State::goal()).unwrap();
        assert_eq!(map.get(&start), Some(&None));
        for (child, parent) in &map {
            if let Some(parent) = parent {
                assert!(parent.neighbors().contains(child));
            }
        }
    }

    #[test]
    fn test_bfs_and_a_star_agree_on_length() {
        let goal = State::goal();
        for seed in 0..12 {
            let start = goal.scramble(24, seed);
            let by_bfs = solve(&start, &goal, Algorithm::Bfs).unwrap().unwrap();
            let by_a_star = solve(&start, &goal, Algorithm::AStar).unwrap().unwrap();
            assert_valid_path(&by_bfs.path, &start, &goal);
            assert_valid_path(&by_a_star.path, &start, &goal);
            assert_eq!(by_bfs.moves, by_a_star.moves, "seed {}", seed);
        }
    }

    #[test]
    fn test_paths_are_optimal() {
        let goal = State::goal();
        let distances = bfs_distances(&goal, 16);
        for seed in 0..10 {
            let start = goal.scramble(16, seed);
            let expected = distances[&start] as usize;
            for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
                let solution = solve(&start, &goal, algorithm).unwrap().unwrap();
                assert_eq!(solution.moves, expected, "{} seed {}", algorithm, seed);
            }
        }
    }

    /// Swaps the first two non-blank tiles, moving `s` into the other parity class.
    fn flip_parity(s: &State) -> State {
        let mut tiles = *s.tiles();
        let picks: Vec<usize> = (0..9).filter(|&i| tiles[i] != 0).take(2).collect();
        tiles.swap(picks[0], picks[1]);
        State::new(tiles).unwrap()
    }

    #[test]
    fn test_random_shuffles_between_arbitrary_states() {
        for seed in 0..4 {
            let start = State::new_random_with_seed(seed);
            let drawn = State::new_random_with_seed(seed + 100);
            let reachable = start.parity_matches(&drawn);
            assert_eq!(bfs(&start, &drawn).is_some(), reachable);
            assert_eq!(a_star(&start, &drawn).is_some(), reachable);

            let goal = if reachable { drawn } else { flip_parity(&drawn) };
            let by_bfs = solve(&start, &goal, Algorithm::Bfs).unwrap().unwrap();
            let by_a_star = solve(&start, &goal, Algorithm::AStar).unwrap().unwrap();
            assert_valid_path(&by_a_star.path, &start, &goal);
            assert_eq!(by_bfs.moves, by_a_star.moves, "seed {}", seed);
            assert!(by_a_star.discovered <= by_bfs.discovered);
        }
    }

    #[test]
    fn test_searches_are_deterministic() {
        let goal = State::goal();
        let start = goal.scramble(20, 42);
        for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
            let first = solve(&start, &goal, algorithm).unwrap();
            let second = solve(&start, &goal, algorithm).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_reconstruct_path_from_hand_built_map() {
        let a = state([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        let b = state([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let c = State::goal();
        let map = PredecessorMap::from([(a, None), (b, Some(a)), (c, Some(b))]);
        assert_eq!(reconstruct_path(&map, &c), Ok(vec![a, b, c]));
        assert_eq!(reconstruct_path(&map, &b), Ok(vec![a, b]));
        assert_eq!(reconstruct_path(&map, &a), Ok(vec![a]));
    }

    #[test]
    fn test_reconstruct_path_rejects_undiscovered_target() {
        let start = State::goal();
        let map = PredecessorMap::from([(start, None)]);
        let stranger = state([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            reconstruct_path(&map, &stranger),
            Err(PuzzleError::TargetNotDiscovered)
        );
    }

    #[test]
    fn test_reconstruct_path_rejects_broken_chain() {
        let a = state([1, 2, 3, 4, 0, 6, 7, 5, 8]);
        let b = state([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let missing_parent = PredecessorMap::from([(b, Some(a))]);
        assert_eq!(
            reconstruct_path(&missing_parent, &b),
            Err(PuzzleError::TargetNotDiscovered)
        );

        let cycle = PredecessorMap::from([(a, Some(b)), (b, Some(a))]);
        assert_eq!(
            reconstruct_path(&cycle, &a),
            Err(PuzzleError::TargetNotDiscovered)
        );
    }

    #[test]
    fn test_frontier_entry_order() {
        let low = state([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let high = State::goal();
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { f: 5, g: 1, state: high });
        heap.push(FrontierEntry { f: 5, g: 1, state: low });
        heap.push(FrontierEntry { f: 3, g: 2, state: high });
        assert_eq!(heap.pop().map(|e| (e.f, e.state)), Some((3, high)));
        assert_eq!(heap.pop().map(|e| (e.f, e.state)), Some((5, low)));
        assert_eq!(heap.pop().map(|e| (e.f, e.state)), Some((5, high)));
    }
}
