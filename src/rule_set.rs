use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub const fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub const fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// The next state of a cell with `neighbors` live neighbors.
    pub const fn next(&self, alive: bool, neighbors: u8) -> bool {
        if neighbors > 8 {
            return false;
        }

        let n = 1 << neighbors;

        if alive {
            self.survivals() & n == n
        } else {
            self.births() & n == n
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule string is empty")]
    Empty,

    #[error("Expected 'B' or 'S', found '{got}'")]
    UnexpectedToken { got: char },

    #[error("Neighbor count must be between 0 and 8, found '{got}'")]
    InvalidCount { got: char },

    #[error("Rule is missing its survival part")]
    NoSurvivals,
}

/// # Format
///
/// `B[0-8]*/?S[0-8]*`, case insensitive. `B3/S23` and `b3s23` are the same rule.
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        #[derive(Clone, Copy)]
        enum State {
            Start,
            Birth,
            /// Just read the single `/` between the two parts
            Slash,
            Survival,
        }

        if rule.is_empty() {
            return Err(RuleError::Empty);
        }

        let mut state = State::Start;
        let (mut b, mut s) = (0u16, 0u16);

        for c in rule.chars() {
            match (state, c) {
                (State::Start, 'b' | 'B') => state = State::Birth,
                (State::Birth, '/') => state = State::Slash,
                (State::Birth | State::Slash, 's' | 'S') => state = State::Survival,
                (State::Birth | State::Survival, n) if n.is_ascii_digit() => {
                    let Some(n) = n.to_digit(10).filter(|&n| n <= 8) else {
                        return Err(RuleError::InvalidCount { got: c });
                    };

                    match state {
                        State::Birth => b |= 1 << n,
                        _ => s |= 1 << n,
                    }
                }
                (_, got) => return Err(RuleError::UnexpectedToken { got }),
            }
        }

        match state {
            State::Survival => Ok(RuleSet::new(b, s)),
            _ => Err(RuleError::NoSurvivals),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |bits: u16| -> String {
            (0..=8u8)
                .filter(|n| bits & (1 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}
