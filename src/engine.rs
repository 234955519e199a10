//! Core state-space model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: The four ways the blank can travel, in their fixed enumeration order.
//! - `State`: An immutable, validated arrangement of the tiles `0..=8` on a 3x3 grid,
//!   together with neighbor generation, the reachability (parity) check and seeded
//!   random state construction.
use crate::error::PuzzleError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Value used for the blank cell.
pub const BLANK: u8 = 0;

/// A direction in which the blank moves.
///
/// Moving the blank `Up` slides the tile above it down into the hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in enumeration order. Neighbor generation follows this order,
    /// which decides the order states enter a frontier and therefore which optimal
    /// path is reported when several exist.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column offset applied to the blank's position.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Single-letter form (`U`, `D`, `L`, `R`).
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Direction;
    /// assert_eq!(Direction::Left.to_char(), 'L');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parses a single letter, case-insensitively. Returns `None` for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An arrangement of the tiles `0..=8` on the 3x3 board, stored row-major.
///
/// Cell `i` sits at `row = i / 3`, `col = i % 3`. A `State` can only be built
/// through validating constructors, so every value is a permutation of `0..=8`.
/// States are plain `Copy` values; producing a neighbor builds a new value and
/// never touches the original.
///
/// The derived `Ord` is lexicographic over the tile sequence. A* relies on it
/// to break ties between frontier entries of equal estimated cost.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// let state = State::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
/// assert_eq!(state.neighbors().len(), 4);
/// assert!(State::new([1, 1, 3, 4, 0, 6, 7, 5, 8]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    tiles: [u8; TILE_COUNT],
}

impl State {
    /// Creates a state from nine tiles, checking that they form a permutation of `0..=8`.
    ///
    /// # Errors
    /// * `PuzzleError::TileOutOfRange` if any value is greater than 8.
    /// * `PuzzleError::DuplicateTile` if a value repeats.
    pub fn new(tiles: [u8; TILE_COUNT]) -> Result<Self, PuzzleError> {
        let mut seen = [false; TILE_COUNT];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(PuzzleError::TileOutOfRange(tile))?;
            if *slot {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            *slot = true;
        }
        Ok(State { tiles })
    }

    /// The solved arrangement `1 2 3 / 4 5 6 / 7 8 _`.
    pub fn goal() -> Self {
        State {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
        }
    }

    /// Creates a uniformly shuffled state from a seed.
    ///
    /// The result may belong to either parity class, so it is not necessarily
    /// reachable from [`State::goal`]. Use [`State::scramble`] for a state that is.
    pub fn new_random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles = State::goal().tiles;
        tiles.shuffle(&mut rng);
        State { tiles }
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u8; TILE_COUNT] {
        &self.tiles
    }

    /// Returns the tile at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the board.
    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * BOARD_SIZE + col]
    }

    /// Returns the cell index of every tile: `positions()[t]` is where tile `t` sits.
    pub fn positions(&self) -> [usize; TILE_COUNT] {
        let mut positions = [0; TILE_COUNT];
        for (index, &tile) in self.tiles.iter().enumerate() {
            positions[tile as usize] = index;
        }
        positions
    }

    /// Returns the `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self.positions()[BLANK as usize];
        (index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Moves the blank one cell in `direction`.
    ///
    /// Returns the new state, or `None` if the blank would leave the board.
    pub fn apply(&self, direction: Direction) -> Option<State> {
        let (row, col) = self.blank_position();
        let (dr, dc) = direction.delta();
        let new_row = row as isize + dr;
        let new_col = col as isize + dc;

        if new_row < 0
            || new_row >= BOARD_SIZE as isize
            || new_col < 0
            || new_col >= BOARD_SIZE as isize
        {
            return None;
        }

        let mut tiles = self.tiles;
        tiles.swap(
            row * BOARD_SIZE + col,
            new_row as usize * BOARD_SIZE + new_col as usize,
        );
        Some(State { tiles })
    }

    /// Every legal move from this state, paired with the state it leads to,
    /// in [`Direction::ALL`] order.
    pub fn successors(&self) -> Vec<(Direction, State)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.apply(direction).map(|next| (direction, next)))
            .collect()
    }

    /// States one move away, in [`Direction::ALL`] order.
    ///
    /// Always returns between 2 and 4 states and never `self`.
    pub fn neighbors(&self) -> Vec<State> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.apply(direction))
            .collect()
    }

    /// The direction that turns `self` into `other`, if they are one move apart.
    pub fn direction_to(&self, other: &State) -> Option<Direction> {
        self.successors()
            .into_iter()
            .find(|(_, next)| next == other)
            .map(|(direction, _)| direction)
    }

    /// Counts pairs of tiles (blank excluded) that appear in reverse order when
    /// the board is read row-major.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum()
    }

    /// Whether `other` lies in the same parity class, i.e. is reachable from `self`.
    ///
    /// On an odd-width board a slide never changes the inversion parity, and the
    /// two parity classes are each fully connected.
    ///
    /// ```
    /// use eight_puzzle_solver::engine::State;
    /// let swapped = State::new([1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
    /// assert!(!swapped.parity_matches(&State::goal()));
    /// ```
    pub fn parity_matches(&self, other: &State) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }

    /// Random walk of `steps` moves from this state, never immediately undoing
    /// the previous move. The result is always reachable from `self`, and the
    /// same seed always produces the same walk.
    pub fn scramble(&self, steps: usize, seed: u64) -> State {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = *self;
        let mut last: Option<Direction> = None;

        for _ in 0..steps {
            let options: Vec<(Direction, State)> = current
                .successors()
                .into_iter()
                .filter(|(direction, _)| Some(direction.opposite()) != last)
                .collect();
            match options.choose(&mut rng) {
                Some(&(direction, next)) => {
                    current = next;
                    last = Some(direction);
                }
                None => break,
            }
        }
        current
    }

    /// The nine tiles as a digit string, e.g. `"123456780"`.
    pub fn to_compact(&self) -> String {
        self.tiles.iter().map(|t| char::from(b'0' + t)).collect()
    }
}

impl TryFrom<&[u8]> for State {
    type Error = PuzzleError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        let tiles: [u8; TILE_COUNT] = tiles
            .try_into()
            .map_err(|_| PuzzleError::WrongLength { found: tiles.len() })?;
        State::new(tiles)
    }
}

impl FromStr for State {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::state_from_str(s)
    }
}

impl fmt::Display for State {
    /// Three rows of tiles, with `.` standing in for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.tile_at(row, col) {
                    BLANK => write!(f, ".")?,
                    tile => write!(f, "{}", tile)?,
                }
            }
        }
        Ok(())
    }
}
