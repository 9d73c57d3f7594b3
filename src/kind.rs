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

use crate::{errors::ParseKindError, Piece, Player};

/// Piece kinds.
///
/// The first six form the default set. [`Kind::Berolina`] and
/// [`Kind::Grasshopper`] are the extended set, see [`variant`](crate::variant).
///
/// # Examples
///
/// ```
/// use chequer::Kind;
///
/// assert_eq!(Kind::from_name("king"), Some(Kind::King));
/// assert_eq!(Kind::Grasshopper.name(), "GRASSHOPPER");
/// assert_eq!(Kind::from_char('N'), Some(Kind::Knight));
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Kind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Berolina,
    Grasshopper,
}

impl Kind {
    /// Every kind, default set first.
    pub const ALL: [Kind; 8] = [
        Kind::Pawn,
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
        Kind::King,
        Kind::Berolina,
        Kind::Grasshopper,
    ];

    /// Identifier used when printing boards and logging.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Pawn => "PAWN",
            Kind::Knight => "KNIGHT",
            Kind::Bishop => "BISHOP",
            Kind::Rook => "ROOK",
            Kind::Queen => "QUEEN",
            Kind::King => "KING",
            Kind::Berolina => "BEROLINA",
            Kind::Grasshopper => "GRASSHOPPER",
        }
    }

    /// Looks up a kind by identifier, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Lowercase letter.
    pub const fn char(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Rook => 'r',
            Kind::Queen => 'q',
            Kind::King => 'k',
            Kind::Berolina => 'e',
            Kind::Grasshopper => 'g',
        }
    }

    /// Uppercase letter.
    pub const fn upper_char(self) -> char {
        self.char().to_ascii_uppercase()
    }

    pub const fn from_char(ch: char) -> Option<Kind> {
        match ch {
            'P' | 'p' => Some(Kind::Pawn),
            'N' | 'n' => Some(Kind::Knight),
            'B' | 'b' => Some(Kind::Bishop),
            'R' | 'r' => Some(Kind::Rook),
            'Q' | 'q' => Some(Kind::Queen),
            'K' | 'k' => Some(Kind::King),
            'E' | 'e' => Some(Kind::Berolina),
            'G' | 'g' => Some(Kind::Grasshopper),
            _ => None,
        }
    }

    /// Gets a [`Piece`] of this kind owned by `player`.
    #[inline]
    pub const fn of(self, player: Player) -> Piece {
        Piece { kind: self, player }
    }

    /// Whether the kind belongs to the extended set.
    pub const fn is_extended(self) -> bool {
        matches!(self, Kind::Berolina | Kind::Grasshopper)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Kind, ParseKindError> {
        Kind::from_name(s).ok_or(ParseKindError)
    }
}
