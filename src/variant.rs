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

//! Movement rules of the extended piece set.
//!
//! These pieces play on the same [`RectBoard`] as the default set and can
//! be mixed freely with it, e.g. in
//! [`Standard::berolina`](crate::Standard::berolina).

use crate::{
    attacks::{self, is_capture, is_vacant, is_valid_target, KING_STEPS},
    board::SquareSet,
    Board, Coordinates, RectBoard, Square,
};

/// The Berolina pawn: a pawn with its move and capture swapped.
///
/// At distance 1 it steps diagonally ahead onto an empty square, or
/// straight ahead onto an opponent. From its starting rank it may also
/// advance two squares diagonally ahead if both squares on the way are
/// empty.
pub fn berolina_moves(from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    let mut moves = SquareSet::new();
    let Some(piece) = board.get_piece(from) else {
        return moves;
    };
    let forward = piece.player.direction();

    match distance {
        1 if forward != 0 => {
            let ahead = from.offset(forward, 0);
            if is_capture(board, from, ahead) {
                moves.insert(ahead);
            }
            for side in [-1, 1] {
                let diagonal = from.offset(forward, side);
                if is_vacant(board, diagonal) {
                    moves.insert(diagonal);
                }
            }
        }
        2 if attacks::on_pawn_rank(board, from, forward) => {
            for side in [-1, 1] {
                let to = from.offset(2 * forward, 2 * side);
                if is_vacant(board, from.offset(forward, side)) && is_vacant(board, to) {
                    moves.insert(to);
                }
            }
        }
        _ => (),
    }

    moves
}

/// The grasshopper moves along queen lines, but only by hopping over the
/// first piece in its way and landing directly behind it.
pub fn grasshopper_moves(from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    let Some(distance) = attacks::signed(distance) else {
        return SquareSet::new();
    };
    attacks::rays(from, &KING_STEPS, distance)
        .into_iter()
        .filter(|&to| {
            is_valid_target(board, from, to)
                && board
                    .nearest_leap(from, to)
                    .is_some_and(|hurdle| hurdle.distance_to(&to) == Some(1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, Player};

    fn squares(list: &[(i32, i32)]) -> SquareSet {
        list.iter().map(|&(r, f)| Square::new(r, f)).collect()
    }

    fn alone(kind: Kind, player: Player, sq: Square) -> RectBoard {
        let mut board = RectBoard::new(8, 8);
        board.add_piece(kind.of(player), sq);
        board
    }

    #[test]
    fn test_berolina_quiet_moves_are_diagonal() {
        let from = Square::new(1, 3);
        let board = alone(Kind::Berolina, Player::A, from);
        assert_eq!(berolina_moves(from, &board, 1), squares(&[(2, 2), (2, 4)]));
        assert_eq!(berolina_moves(from, &board, 2), squares(&[(3, 1), (3, 5)]));
        assert!(berolina_moves(from, &board, 3).is_empty());

        let from = Square::new(6, 0);
        let board = alone(Kind::Berolina, Player::B, from);
        assert_eq!(berolina_moves(from, &board, 1), squares(&[(5, 1)]));
        assert_eq!(berolina_moves(from, &board, 2), squares(&[(4, 2)]));
    }

    #[test]
    fn test_berolina_captures_straight_ahead_only() {
        let from = Square::new(3, 3);
        let mut board = alone(Kind::Berolina, Player::A, from);
        board.add_piece(Kind::Knight.of(Player::B), Square::new(4, 3));
        board.add_piece(Kind::Knight.of(Player::B), Square::new(4, 2));

        assert_eq!(berolina_moves(from, &board, 1), squares(&[(4, 3), (4, 4)]));

        board.add_piece(Kind::Knight.of(Player::A), Square::new(4, 3));
        assert_eq!(berolina_moves(from, &board, 1), squares(&[(4, 4)]));
    }

    #[test]
    fn test_berolina_double_step_needs_clear_path() {
        let from = Square::new(1, 3);
        let mut board = alone(Kind::Berolina, Player::A, from);
        board.add_piece(Kind::Pawn.of(Player::B), Square::new(2, 2));
        board.add_piece(Kind::Pawn.of(Player::B), Square::new(3, 5));
        assert!(berolina_moves(from, &board, 2).is_empty());

        let from = Square::new(2, 3);
        let board = alone(Kind::Berolina, Player::A, from);
        assert!(berolina_moves(from, &board, 2).is_empty());
    }

    #[test]
    fn test_grasshopper_needs_hurdle() {
        let from = Square::new(3, 3);
        let board = alone(Kind::Grasshopper, Player::A, from);
        for distance in 0..8 {
            assert!(grasshopper_moves(from, &board, distance).is_empty());
        }
    }

    #[test]
    fn test_grasshopper_lands_behind_hurdle() {
        let from = Square::new(3, 3);
        let mut board = alone(Kind::Grasshopper, Player::A, from);
        board.add_piece(Kind::Pawn.of(Player::B), Square::new(5, 3));
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(3, 4));
        board.add_piece(Kind::Pawn.of(Player::B), Square::new(2, 2));

        assert_eq!(grasshopper_moves(from, &board, 1), squares(&[]));
        assert_eq!(grasshopper_moves(from, &board, 2), squares(&[(3, 5), (1, 1)]));
        assert_eq!(grasshopper_moves(from, &board, 3), squares(&[(6, 3)]));
        assert_eq!(grasshopper_moves(from, &board, 4), squares(&[]));
    }

    #[test]
    fn test_grasshopper_capture_and_self_capture() {
        let from = Square::new(0, 0);
        let mut board = alone(Kind::Grasshopper, Player::B, from);
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(1, 1));
        board.add_piece(Kind::Queen.of(Player::A), Square::new(2, 2));
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(0, 1));
        board.add_piece(Kind::Rook.of(Player::B), Square::new(0, 2));

        assert_eq!(grasshopper_moves(from, &board, 2), squares(&[(2, 2)]));
    }
}
