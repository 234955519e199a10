use crate::engine::{State, BLANK};
use crate::error::PuzzleError;

/// Parses a textual description of a board into a `State`.
///
/// Every character is read as one cell, in row-major order. Digits `0`-`8`
/// are tiles and `.` or `_` also stand for the blank. Whitespace, commas and
/// the brackets `()[]` are separators and are skipped, so all of the following
/// describe the same board:
///
/// - `"123406758"`
/// - `"1,2,3,4,0,6,7,5,8"` or `"(1, 2, 3, 4, 0, 6, 7, 5, 8)"`
/// - `"1 2 3\n4 . 6\n7 5 8"` (the `Display` form of a `State`)
///
/// # Returns
/// * `Ok(State)` if the text describes a permutation of `0..=8`.
/// * `Err(PuzzleError)` if:
///     - A character is neither a cell nor a separator (`InvalidToken`).
///     - A digit is `9` (`TileOutOfRange`).
///     - A tile repeats (`DuplicateTile`).
///     - There are not exactly nine cells (`WrongLength`).
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// use eight_puzzle_solver::utils::state_from_str;
///
/// let a = state_from_str("123406758").unwrap();
/// let b = state_from_str("1 2 3\n4 . 6\n7 5 8").unwrap();
/// assert_eq!(a, b);
/// assert!(state_from_str("12340675").is_err());
/// ```
pub fn state_from_str(s: &str) -> Result<State, PuzzleError> {
    let mut tiles = Vec::with_capacity(9);

    for ch in s.chars() {
        match ch {
            c if c.is_whitespace() => continue,
            ',' | '(' | ')' | '[' | ']' => continue,
            '.' | '_' => tiles.push(BLANK),
            // `9` is a digit but not a tile; let `State::new` name it.
            c if c.is_ascii_digit() => tiles.push(c as u8 - b'0'),
            other => return Err(PuzzleError::InvalidToken(other.to_string())),
        }
    }

    State::try_from(tiles.as_slice())
}
