//! Bin map positions.
//!
//! A position names one cell of the bin map as `"<col>-<row>"`, 1-indexed,
//! column first. The column-first order is what the front-end expects, so it
//! must not be swapped to the usual row-major form.
//!
//! ```ignore
//! let pos: Position = "3-5".parse().unwrap();
//! assert_eq!(pos.col, 3);
//! assert_eq!(pos.row, 5);
//! assert_eq!(pos.to_string(), "3-5");
//! ```

use crate::error::TableError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<col>[0-9]+)-(?<row>[0-9]+)$").expect("position pattern is valid")
});

/// Largest column an xlsx sheet can hold (XFD).
pub const MAX_COL: u32 = 16_384;
/// Largest row an xlsx sheet can hold.
pub const MAX_ROW: u32 = 1_048_576;

/// A bin map cell address, inside `1..=MAX_COL` x `1..=MAX_ROW`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub col: u32,
    pub row: u32,
}

impl Position {
    /// Returns None when either component is zero or past the sheet limits.
    pub fn new(col: u32, row: u32) -> Option<Position> {
        ((1..=MAX_COL).contains(&col) && (1..=MAX_ROW).contains(&row))
            .then_some(Position { col, row })
    }

    fn parse_pair(name: &str) -> Option<Position> {
        let caps = POSITION_RE.captures(name.trim())?;
        let col = caps["col"].parse::<u32>().ok()?;
        let row = caps["row"].parse::<u32>().ok()?;
        Position::new(col, row)
    }
}

impl std::str::FromStr for Position {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_pair(s).ok_or_else(|| TableError::InvalidPosition(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.col, self.row)
    }
}
