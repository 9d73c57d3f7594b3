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

//! Movement rules of the default piece set on rectangular boards.
//!
//! Every rule is a pure function of the acting piece's square, the board
//! and a distance. The rule reads the acting piece from the board, returns
//! the set of squares it can move to at exactly that distance, and never
//! includes its own square. Callers that want every destination query each
//! distance from 1 to [`Board::max_distance`] (see [`Board::reachable`]).
//!
//! A destination is only ever valid if it is on the board and not occupied
//! by a piece of the acting player.

use arrayvec::ArrayVec;

use crate::{board::SquareSet, variant, Board, Kind, RectBoard, Square};

pub(crate) const ORTHOGONALS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KING_STEPS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
];

/// Destinations of a piece of `kind` standing on `from` moving exactly
/// `distance`.
pub fn moves(kind: Kind, from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    match kind {
        Kind::Pawn => pawn_moves(from, board, distance),
        Kind::Knight => knight_moves(from, board, distance),
        Kind::Bishop => bishop_moves(from, board, distance),
        Kind::Rook => rook_moves(from, board, distance),
        Kind::Queen => queen_moves(from, board, distance),
        Kind::King => king_moves(from, board, distance),
        Kind::Berolina => variant::berolina_moves(from, board, distance),
        Kind::Grasshopper => variant::grasshopper_moves(from, board, distance),
    }
}

/// Tests if the piece on `from` may end its move on `to`: the target is on
/// the board, the source is occupied, and the target is empty or held by
/// an opponent.
pub fn is_valid_target(board: &RectBoard, from: Square, to: Square) -> bool {
    if !board.is_valid_position(to) {
        return false;
    }
    match (board.get_piece(from), board.get_piece(to)) {
        (Some(piece), Some(target)) => piece.is_opponent_of(target),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Tests if `to` holds an opponent of the piece on `from`.
pub fn is_capture(board: &RectBoard, from: Square, to: Square) -> bool {
    board.piece_exists(to) && is_valid_target(board, from, to)
}

/// Tests if `to` is on the board and empty.
pub fn is_vacant(board: &RectBoard, to: Square) -> bool {
    board.is_valid_position(to) && !board.piece_exists(to)
}

/// Tests if a pawn-like piece advancing in `direction` stands on its
/// starting rank: rank 1 advancing up, `ranks - 2` advancing down.
pub(crate) fn on_pawn_rank(board: &RectBoard, sq: Square, direction: i32) -> bool {
    match direction {
        1 => sq.rank == 1,
        -1 => board.ranks() >= 2 && sq.rank == board.ranks() as i32 - 2,
        _ => false,
    }
}

pub(crate) fn signed(distance: u32) -> Option<i32> {
    i32::try_from(distance).ok().filter(|&d| d >= 1)
}

pub(crate) fn rays(from: Square, directions: &[(i32, i32)], distance: i32) -> ArrayVec<Square, 8> {
    directions
        .iter()
        .map(|&(dr, df)| from.offset(dr * distance, df * distance))
        .collect()
}

fn sliding(from: Square, board: &RectBoard, distance: u32, directions: &[(i32, i32)]) -> SquareSet {
    let Some(distance) = signed(distance) else {
        return SquareSet::new();
    };
    rays(from, directions, distance)
        .into_iter()
        .filter(|&to| is_valid_target(board, from, to) && !board.needs_leap(from, to))
        .collect()
}

pub fn king_moves(from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    if distance != 1 {
        return SquareSet::new();
    }
    rays(from, &KING_STEPS, 1)
        .into_iter()
        .filter(|&to| is_valid_target(board, from, to))
        .collect()
}

pub fn rook_moves(from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    sliding(from, board, distance, &ORTHOGONALS)
}

pub fn bishop_moves(from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    sliding(from, board, distance, &DIAGONALS)
}

pub fn queen_moves(from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    let mut moves = rook_moves(from, board, distance);
    moves.extend(bishop_moves(from, board, distance));
    moves
}

/// Knights ignore `distance` and jump over anything in between.
pub fn knight_moves(from: Square, board: &RectBoard, _distance: u32) -> SquareSet {
    KNIGHT_JUMPS
        .iter()
        .map(|&(dr, df)| from.offset(dr, df))
        .filter(|&to| is_valid_target(board, from, to))
        .collect()
}

/// Pawns advance in the direction of their player's tag.
///
/// At distance 1 a pawn steps straight ahead onto an empty or opponent
/// square, or diagonally ahead onto an opponent. At distance 2 a pawn on
/// its starting rank advances straight ahead if both squares are empty.
pub fn pawn_moves(from: Square, board: &RectBoard, distance: u32) -> SquareSet {
    let mut moves = SquareSet::new();
    let Some(pawn) = board.get_piece(from) else {
        return moves;
    };
    let forward = pawn.player.direction();

    match distance {
        1 if forward != 0 => {
            let ahead = from.offset(forward, 0);
            if is_valid_target(board, from, ahead) {
                moves.insert(ahead);
            }
            for side in [-1, 1] {
                let diagonal = from.offset(forward, side);
                if is_capture(board, from, diagonal) {
                    moves.insert(diagonal);
                }
            }
        }
        2 if on_pawn_rank(board, from, forward) => {
            let ahead = from.offset(2 * forward, 0);
            if is_vacant(board, from.offset(forward, 0)) && is_vacant(board, ahead) {
                moves.insert(ahead);
            }
        }
        _ => (),
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn squares(list: &[(i32, i32)]) -> SquareSet {
        list.iter().map(|&(r, f)| Square::new(r, f)).collect()
    }

    fn alone(kind: Kind, player: Player, sq: Square) -> RectBoard {
        let mut board = RectBoard::new(8, 8);
        board.add_piece(kind.of(player), sq);
        board
    }

    #[test]
    fn test_empty_source() {
        let board = RectBoard::new(8, 8);
        for kind in Kind::ALL {
            assert!(moves(kind, Square::new(3, 3), &board, 1).is_empty(), "{kind}");
        }
    }

    #[test]
    fn test_king() {
        let from = Square::new(0, 4);
        let mut board = alone(Kind::King, Player::A, from);
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(1, 4));
        board.add_piece(Kind::Pawn.of(Player::B), Square::new(1, 5));

        assert_eq!(
            king_moves(from, &board, 1),
            squares(&[(0, 3), (0, 5), (1, 3), (1, 5)])
        );
        assert!(king_moves(from, &board, 2).is_empty());
        assert!(king_moves(from, &board, 0).is_empty());
    }

    #[test]
    fn test_rook_exact_distance() {
        let from = Square::new(3, 3);
        let board = alone(Kind::Rook, Player::A, from);
        assert_eq!(
            rook_moves(from, &board, 2),
            squares(&[(5, 3), (1, 3), (3, 5), (3, 1)])
        );
        assert_eq!(rook_moves(from, &board, 4), squares(&[(7, 3), (3, 7)]));
        assert!(rook_moves(from, &board, 0).is_empty());
        assert!(rook_moves(from, &board, u32::MAX).is_empty());
    }

    #[test]
    fn test_rook_blocked() {
        let from = Square::new(3, 3);
        let mut board = alone(Kind::Rook, Player::A, from);
        board.add_piece(Kind::Pawn.of(Player::B), Square::new(5, 3));
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(3, 1));

        // Capture on the blocker, but nothing beyond it.
        assert!(rook_moves(from, &board, 2).contains(&Square::new(5, 3)));
        assert!(!rook_moves(from, &board, 3).contains(&Square::new(6, 3)));
        assert!(!rook_moves(from, &board, 2).contains(&Square::new(3, 1)));
        assert!(!rook_moves(from, &board, 3).contains(&Square::new(3, 0)));
        assert_eq!(rook_moves(from, &board, 3), squares(&[(0, 3), (3, 6)]));
    }

    #[test]
    fn test_bishop_blocked() {
        let from = Square::new(2, 4);
        let mut board = alone(Kind::Bishop, Player::A, from);
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(3, 3));
        board.add_piece(Kind::Pawn.of(Player::B), Square::new(4, 6));

        assert_eq!(
            bishop_moves(from, &board, 1),
            squares(&[(3, 5), (1, 5), (1, 3)])
        );
        assert_eq!(
            bishop_moves(from, &board, 2),
            squares(&[(4, 6), (0, 6), (0, 2)])
        );
        assert_eq!(bishop_moves(from, &board, 3), squares(&[]));
    }

    #[test]
    fn test_queen_is_rook_and_bishop() {
        let from = Square::new(4, 2);
        let mut board = alone(Kind::Queen, Player::B, from);
        board.add_piece(Kind::Knight.of(Player::A), Square::new(4, 4));
        board.add_piece(Kind::Knight.of(Player::B), Square::new(6, 4));

        for distance in 0..8 {
            let mut expected = rook_moves(from, &board, distance);
            expected.extend(bishop_moves(from, &board, distance));
            assert_eq!(queen_moves(from, &board, distance), expected);
        }
        assert_eq!(queen_moves(from, &board, 1).len(), 8);
    }

    #[test]
    fn test_knight_ignores_blockers_and_distance() {
        let from = Square::new(3, 3);
        let mut board = alone(Kind::Knight, Player::A, from);
        let open = knight_moves(from, &board, 1);
        assert_eq!(open.len(), 8);

        for (dr, df) in KING_STEPS {
            board.add_piece(Kind::Pawn.of(Player::A), from.offset(dr, df));
        }
        for distance in [0, 1, 2, 7] {
            assert_eq!(knight_moves(from, &board, distance), open);
        }
    }

    #[test]
    fn test_knight_corner() {
        let from = Square::new(0, 1);
        let mut board = alone(Kind::Knight, Player::A, from);
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(1, 3));
        assert_eq!(knight_moves(from, &board, 1), squares(&[(2, 0), (2, 2)]));
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let from = Square::new(1, 3);
        let board = alone(Kind::Pawn, Player::A, from);
        assert_eq!(pawn_moves(from, &board, 1), squares(&[(2, 3)]));
        assert_eq!(pawn_moves(from, &board, 2), squares(&[(3, 3)]));
        assert!(pawn_moves(from, &board, 3).is_empty());

        let from = Square::new(6, 4);
        let board = alone(Kind::Pawn, Player::B, from);
        assert_eq!(pawn_moves(from, &board, 1), squares(&[(5, 4)]));
        assert_eq!(pawn_moves(from, &board, 2), squares(&[(4, 4)]));
    }

    #[test]
    fn test_pawn_double_step_only_from_own_rank() {
        let from = Square::new(6, 4);
        let board = alone(Kind::Pawn, Player::A, from);
        assert!(pawn_moves(from, &board, 2).is_empty());

        let from = Square::new(2, 4);
        let board = alone(Kind::Pawn, Player::A, from);
        assert!(pawn_moves(from, &board, 2).is_empty());
    }

    #[test]
    fn test_pawn_double_step_blocked() {
        let from = Square::new(1, 0);
        let mut board = alone(Kind::Pawn, Player::A, from);
        board.add_piece(Kind::Knight.of(Player::B), Square::new(2, 0));
        assert!(pawn_moves(from, &board, 2).is_empty());

        let mut board = alone(Kind::Pawn, Player::A, from);
        board.add_piece(Kind::Knight.of(Player::B), Square::new(3, 0));
        assert!(pawn_moves(from, &board, 2).is_empty());
    }

    #[test]
    fn test_pawn_diagonal_captures() {
        let from = Square::new(1, 3);
        let mut board = alone(Kind::Pawn, Player::A, from);
        board.add_piece(Kind::Bishop.of(Player::B), Square::new(2, 2));
        assert_eq!(pawn_moves(from, &board, 1), squares(&[(2, 3), (2, 2)]));

        board.add_piece(Kind::Rook.of(Player::B), Square::new(2, 4));
        assert_eq!(pawn_moves(from, &board, 1), squares(&[(2, 3), (2, 2), (2, 4)]));

        // Own pieces are never targets.
        board.add_piece(Kind::Rook.of(Player::A), Square::new(2, 4));
        assert_eq!(pawn_moves(from, &board, 1), squares(&[(2, 3), (2, 2)]));
    }

    #[test]
    fn test_pawn_straight_ahead() {
        let from = Square::new(4, 4);
        let mut board = alone(Kind::Pawn, Player::B, from);
        board.add_piece(Kind::Pawn.of(Player::A), Square::new(3, 4));
        assert_eq!(pawn_moves(from, &board, 1), squares(&[(3, 4)]));

        board.add_piece(Kind::Pawn.of(Player::B), Square::new(3, 4));
        assert!(pawn_moves(from, &board, 1).is_empty());
    }

    #[test]
    fn test_pawn_last_rank() {
        let from = Square::new(7, 2);
        let board = alone(Kind::Pawn, Player::A, from);
        assert!(pawn_moves(from, &board, 1).is_empty());
    }
}
