use crate::engine::{State, BLANK, BOARD_SIZE, TILE_COUNT};

/// Estimates the number of moves from `state` to `goal` by summing, for each
/// tile `1..=8`, the row distance plus the column distance between its cell in
/// `state` and its cell in `goal`. The blank is not counted.
///
/// Every slide moves exactly one tile by one cell, so this value changes by
/// exactly one per move. It therefore never overestimates the remaining
/// distance (admissible) and never drops by more than one per step (consistent).
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// use eight_puzzle_solver::heuristics::manhattan;
///
/// let start = State::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
/// assert_eq!(manhattan(&start, &State::goal()), 2);
/// assert_eq!(manhattan(&start, &start), 0);
/// ```
pub fn manhattan(state: &State, goal: &State) -> u32 {
    let here = state.positions();
    let there = goal.positions();

    (1..TILE_COUNT)
        .map(|tile| {
            let (r1, c1) = (here[tile] / BOARD_SIZE, here[tile] % BOARD_SIZE);
            let (r2, c2) = (there[tile] / BOARD_SIZE, there[tile] % BOARD_SIZE);
            (r1.abs_diff(r2) + c1.abs_diff(c2)) as u32
        })
        .sum()
}

/// Counts tiles (blank excluded) that are not on their goal cell.
///
/// Weaker than [`manhattan`] but also admissible; the evaluator reports it
/// alongside as a reference point.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    state
        .tiles()
        .iter()
        .zip(goal.tiles().iter())
        .filter(|&(&a, &b)| a != BLANK && a != b)
        .count() as u32
}
