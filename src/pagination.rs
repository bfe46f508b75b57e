//! Pure pagination logic and direction-token parsing
//!
//! The chat layer delivers a pressed button as an opaque token; parsing and
//! the wraparound cursor arithmetic live here, stateless, so the session
//! store can apply them atomically under its own lock.

use crate::errors::{PagerError, PagerResult};

/// Pagination direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the next result, wrapping to the first past the end
    Forward,
    /// Step to the previous result, wrapping to the last before the first
    Backward,
}

impl Direction {
    /// Parse a button token into a direction
    ///
    /// Accepts `forward`/`next` and `backward`/`back`/`previous`/`prev`,
    /// case-insensitive, surrounding whitespace ignored. Anything else fails:
    /// a swallowed token would desynchronize the displayed page from the
    /// button the user pressed, so unrecognized tokens are surfaced rather
    /// than ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` for unrecognized tokens. The caller must
    /// leave the cursor unchanged and perform no render mutation.
    pub fn parse(token: &str) -> PagerResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "forward" | "next" => Ok(Self::Forward),
            "backward" | "back" | "previous" | "prev" => Ok(Self::Backward),
            _ => Err(PagerError::InvalidDirection(token.to_owned())),
        }
    }
}

/// Compute the next cursor position
///
/// `Forward` moves to `(index + 1) % len`, `Backward` to
/// `(index + len - 1) % len`, so both wrap around the result set. `len` must
/// be at least 1; session records are never empty.
pub fn advance(index: usize, len: usize, direction: Direction) -> usize {
    debug_assert!(len >= 1, "result sets are never empty");
    match direction {
        Direction::Forward => (index + 1) % len,
        Direction::Backward => (index + len - 1) % len,
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, advance};

    #[test]
    fn forward_and_backward_wrap_around() {
        // three results: three forwards return to the start
        assert_eq!(advance(0, 3, Direction::Forward), 1);
        assert_eq!(advance(1, 3, Direction::Forward), 2);
        assert_eq!(advance(2, 3, Direction::Forward), 0);
        // one step back from the start lands on the last result
        assert_eq!(advance(0, 3, Direction::Backward), 2);
    }

    #[test]
    fn single_result_always_stays_put() {
        assert_eq!(advance(0, 1, Direction::Forward), 0);
        assert_eq!(advance(0, 1, Direction::Backward), 0);
    }

    #[test]
    fn presses_net_out_modulo_len() {
        let len = 4;
        let mut index = 0;
        for _ in 0..10 {
            index = advance(index, len, Direction::Forward);
        }
        assert_eq!(index, 10 % len);

        let mut index = 0;
        for _ in 0..5 {
            index = advance(index, 3, Direction::Backward);
        }
        // (-5) mod 3 == 1
        assert_eq!(index, 1);
    }

    #[test]
    fn interleaved_presses_match_the_net_sum() {
        let len = 5;
        let mut index = 2;
        for direction in [
            Direction::Forward,
            Direction::Backward,
            Direction::Forward,
            Direction::Forward,
            Direction::Backward,
        ] {
            index = advance(index, len, direction);
        }
        // net +1 from the starting position
        assert_eq!(index, 3);
    }

    #[test]
    fn full_cycle_restores_the_index() {
        let len = 6;
        let start = 4;
        let mut index = start;
        for _ in 0..len {
            index = advance(index, len, Direction::Forward);
        }
        assert_eq!(index, start);
    }

    #[test]
    fn parse_accepts_known_tokens() {
        for token in ["forward", "next", " NEXT ", "Forward"] {
            assert_eq!(
                Direction::parse(token).expect("token must parse"),
                Direction::Forward
            );
        }
        for token in ["backward", "back", "previous", "prev", "PREV"] {
            assert_eq!(
                Direction::parse(token).expect("token must parse"),
                Direction::Backward
            );
        }
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        for token in ["", "sideways", "next-page", "forward2"] {
            let err = Direction::parse(token).expect_err("token must be rejected");
            assert!(err.to_string().contains("unrecognized direction token"));
        }
    }
}
