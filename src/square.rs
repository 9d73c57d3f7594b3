// This file is part of the chequer library.
// Copyright (C) 2024-2026 The chequer developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use core::{fmt, str::FromStr};

use crate::{errors::ParseSquareError, Coordinates};

/// A cell of a rectangular board, addressed by rank and file.
///
/// Ranks and files are zero based. Squares may lie off any particular
/// board, which is how movement rules describe candidates before checking
/// them with [`Board::is_valid_position`](crate::Board::is_valid_position).
///
/// # Examples
///
/// ```
/// use chequer::{Coordinates, Square};
///
/// let e2 = Square::new(1, 4);
/// assert_eq!(e2.distance_to(&Square::new(3, 4)), Some(2));
/// assert_eq!(e2.distance_to(&Square::new(3, 6)), Some(2));
/// assert_eq!(e2.distance_to(&Square::new(3, 5)), None);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Square {
    pub rank: i32,
    pub file: i32,
}

impl Square {
    #[inline]
    pub const fn new(rank: i32, file: i32) -> Square {
        Square { rank, file }
    }

    /// The square `ranks` ranks and `files` files away.
    #[inline]
    #[must_use]
    pub const fn offset(self, ranks: i32, files: i32) -> Square {
        Square {
            rank: self.rank.saturating_add(ranks),
            file: self.file.saturating_add(files),
        }
    }

    /// Parses a square from `rank,file`, optionally wrapped in parentheses
    /// and padded with spaces, e.g. `(1,4)`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if either component is missing or not
    /// an integer.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let s = trim_ascii(s);
        let s = match s {
            [b'(', inner @ .., b')'] => inner,
            _ => s,
        };

        let comma = s
            .iter()
            .position(|&ch| ch == b',')
            .ok_or(ParseSquareError)?;

        let rank = btoi::btoi(trim_ascii(&s[..comma])).map_err(|_| ParseSquareError)?;
        let file = btoi::btoi(trim_ascii(&s[comma + 1..])).map_err(|_| ParseSquareError)?;
        Ok(Square::new(rank, file))
    }
}

fn trim_ascii(mut s: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = s {
        s = rest;
    }
    while let [rest @ .., b' '] = s {
        s = rest;
    }
    s
}

impl Coordinates for Square {
    fn distance_to(&self, other: &Square) -> Option<u32> {
        let ranks = self.rank.abs_diff(other.rank);
        let files = self.file.abs_diff(other.file);

        if ranks == 0 {
            Some(files)
        } else if files == 0 || ranks == files {
            Some(ranks)
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Square {
    #[inline]
    fn from((rank, file): (i32, i32)) -> Square {
        Square::new(rank, file)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.rank, self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_along_lines() {
        let origin = Square::new(3, 3);
        assert_eq!(origin.distance_to(&origin), Some(0));
        assert_eq!(origin.distance_to(&Square::new(3, 7)), Some(4));
        assert_eq!(origin.distance_to(&Square::new(0, 3)), Some(3));
        assert_eq!(origin.distance_to(&Square::new(5, 1)), Some(2));
        assert_eq!(origin.distance_to(&Square::new(-1, -1)), Some(4));
    }

    #[test]
    fn test_distance_off_line() {
        let origin = Square::new(0, 1);
        assert_eq!(origin.distance_to(&Square::new(2, 0)), None);
        assert_eq!(origin.distance_to(&Square::new(7, 4)), None);
    }

    #[test]
    fn test_same_as() {
        assert!(Square::new(1, 2).same_as(&Square::new(1, 2)));
        assert!(!Square::new(1, 2).same_as(&Square::new(2, 1)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1,4".parse::<Square>(), Ok(Square::new(1, 4)));
        assert_eq!("(6, 4)".parse::<Square>(), Ok(Square::new(6, 4)));
        assert_eq!(" (-1,12) ".parse::<Square>(), Ok(Square::new(-1, 12)));
        assert!("14".parse::<Square>().is_err());
        assert!("a,4".parse::<Square>().is_err());
        assert!("(1,)".parse::<Square>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let sq = Square::new(7, 0);
        assert_eq!(sq.to_string(), "(7,0)");
        assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
    }
}
