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

use crate::{Board, Game, Kind, Layout, Player, RectBoard, Square};

/// Player moving up from rank 0.
pub const PLAYER_A: Player = Player::A;
/// Player moving down from rank 7.
pub const PLAYER_B: Player = Player::B;

const BACK_RANK: [Kind; 8] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];

/// The standard 8×8 starting position with the king as critical piece.
///
/// [`PLAYER_A`] sets up on ranks 0 and 1, [`PLAYER_B`] on ranks 7 and 6.
/// The pawn row can be replaced by another pawn-like kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Standard {
    pawn: Kind,
}

impl Standard {
    /// Standard setup with Berolina pawns.
    pub const fn berolina() -> Standard {
        Standard {
            pawn: Kind::Berolina,
        }
    }

    /// Standard setup with `pawn` on the pawn rows.
    pub const fn with_pawns(pawn: Kind) -> Standard {
        Standard { pawn }
    }

    pub const fn pawn(self) -> Kind {
        self.pawn
    }
}

impl Default for Standard {
    fn default() -> Standard {
        Standard { pawn: Kind::Pawn }
    }
}

impl Layout for Standard {
    type Board = RectBoard;

    fn critical_kind(&self) -> Kind {
        Kind::King
    }

    fn empty_board(&self) -> RectBoard {
        RectBoard::new(8, 8)
    }

    fn initialize(&self, board: &mut RectBoard) {
        for (file, kind) in (0..).zip(BACK_RANK) {
            board.add_piece(kind.of(PLAYER_A), Square::new(0, file));
            board.add_piece(self.pawn.of(PLAYER_A), Square::new(1, file));
            board.add_piece(self.pawn.of(PLAYER_B), Square::new(6, file));
            board.add_piece(kind.of(PLAYER_B), Square::new(7, file));
        }
    }
}

/// A game in the [`Standard`] layout.
///
/// # Examples
///
/// ```
/// use chequer::{State, StandardGame, PLAYER_A};
///
/// let mut game = StandardGame::default();
/// assert!(game.step_with_coords(PLAYER_A, 1, 4, 3, 4));
/// assert_eq!(game.state(), State::Normal);
/// ```
pub type StandardGame = Game<Standard>;

impl Game<Standard> {
    /// [`Game::step_with_move()`] with rank and file numbers.
    pub fn step_with_coords(
        &mut self,
        player: Player,
        from_rank: i32,
        from_file: i32,
        to_rank: i32,
        to_file: i32,
    ) -> bool {
        self.step_with_move(
            player,
            Square::new(from_rank, from_file),
            Square::new(to_rank, to_file),
        )
    }
}
