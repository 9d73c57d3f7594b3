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

use core::{fmt, ops};

use crate::{Kind, Piece};

/// Player tag.
///
/// The tag is an integer. The two standard players are `+1` ([`Player::A`])
/// and `-1` ([`Player::B`]). The sign of the tag is also the direction in
/// which pawn-like pieces of that player advance along the ranks, so tags
/// are not arbitrary identifiers.
///
/// # Examples
///
/// ```
/// use chequer::Player;
///
/// assert_eq!(-Player::A, Player::B);
/// assert_eq!(Player::B.direction(), -1);
/// assert_eq!(Player::NEUTRAL.opponent(), Player::NEUTRAL);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub struct Player(pub i32);

impl Player {
    /// The player moving up the ranks.
    pub const A: Player = Player(1);
    /// The player moving down the ranks.
    pub const B: Player = Player(-1);
    /// Nobody. Used as the turn holder before the first move.
    pub const NEUTRAL: Player = Player(0);

    /// `A` and `B`, in this order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    #[inline]
    pub const fn tag(self) -> i32 {
        self.0
    }

    /// The other player. Negates the tag.
    #[inline]
    pub const fn opponent(self) -> Player {
        Player(self.0.wrapping_neg())
    }

    /// Rank direction of pawn-like pieces: `1`, `-1`, or `0` for the
    /// neutral tag.
    #[inline]
    pub const fn direction(self) -> i32 {
        self.0.signum()
    }

    #[inline]
    pub const fn is_neutral(self) -> bool {
        self.0 == 0
    }

    /// Gets a [`Piece`] of the given kind owned by this player.
    #[inline]
    pub const fn piece(self, kind: Kind) -> Piece {
        Piece { kind, player: self }
    }
}

impl ops::Neg for Player {
    type Output = Player;

    #[inline]
    fn neg(self) -> Player {
        self.opponent()
    }
}

impl From<i32> for Player {
    #[inline]
    fn from(tag: i32) -> Player {
        Player(tag)
    }
}

impl From<Player> for i32 {
    #[inline]
    fn from(player: Player) -> i32 {
        player.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Player::A => f.write_str("A"),
            Player::B => f.write_str("B"),
            Player(tag) => write!(f, "#{tag}"),
        }
    }
}
