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

use core::fmt;

use crate::{Kind, Player};

/// A piece with [`Kind`] and [`Player`].
///
/// Pieces carry no identity beyond these two fields: two pieces of the
/// same kind owned by the same player are interchangeable. How a piece
/// moves is determined by its kind.
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub kind: Kind,
    pub player: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: Kind, player: Player) -> Piece {
        Piece { kind, player }
    }

    /// Letter of the kind, uppercase for players with a positive tag.
    pub const fn char(self) -> char {
        if self.player.tag() > 0 {
            self.kind.upper_char()
        } else {
            self.kind.char()
        }
    }

    /// Whether `other` belongs to a different player.
    #[inline]
    pub fn is_opponent_of(self, other: Piece) -> bool {
        self.player != other.player
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.player)
    }
}

/// A move as applied by [`Game`](crate::Game).
///
/// Keeps the captured piece, if any, so that the move can be taken back.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Move<C> {
    pub player: Player,
    pub from: C,
    pub to: C,
    pub capture: Option<Piece>,
}

impl<C> Move<C> {
    /// Checks if the move is a capture.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }
}

impl<C: fmt::Display> fmt::Display for Move<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.player, self.from)?;
        match self.capture {
            Some(captured) => write!(f, "x{} {}", self.to, captured),
            None => write!(f, "-{}", self.to),
        }
    }
}

/// `Normal` or `Checkmate`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum State {
    /// Moves can be played.
    #[default]
    Normal,
    /// A critical piece was captured or can be captured. No further moves
    /// are accepted until the game is undone or restarted.
    Checkmate,
}

impl State {
    #[inline]
    pub const fn is_checkmate(self) -> bool {
        matches!(self, State::Checkmate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_piece_char() {
        assert_eq!(Kind::Queen.of(Player::A).char(), 'Q');
        assert_eq!(Kind::Queen.of(Player::B).char(), 'q');
        assert_eq!(Kind::Grasshopper.of(Player(2)).char(), 'G');
    }

    #[test]
    fn test_move_display() {
        let quiet = Move {
            player: Player::A,
            from: Square::new(1, 4),
            to: Square::new(3, 4),
            capture: None,
        };
        assert!(!quiet.is_capture());
        assert_eq!(quiet.to_string(), "A: (1,4)-(3,4)");

        let capture = Move {
            player: Player::B,
            from: Square::new(5, 4),
            to: Square::new(4, 3),
            capture: Some(Kind::Pawn.of(Player::A)),
        };
        assert!(capture.is_capture());
        assert_eq!(capture.to_string(), "B: (5,4)x(4,3) PAWN_A");
    }
}
