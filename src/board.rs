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

//! Boards: piece placement over a coordinate system.
//!
//! [`Board`] is the capability every geometry provides to
//! [`Game`](crate::Game). [`RectBoard`] is the rectangular geometry used
//! by the standard game.

use core::fmt;
use std::collections::{HashMap, HashSet};

use crate::{attacks, Coordinates, Kind, Piece, Square};

/// A set of squares, as produced by movement rules.
pub type SquareSet = HashSet<Square>;

/// Piece placement on cells addressed by [`Board::Coord`].
///
/// Besides the cells, a board keeps an index from piece kind to the
/// coordinates holding a piece of that kind. Every mutation keeps both in
/// sync: each occupied cell is listed under its piece's kind and every
/// listed coordinate is occupied by a piece of that kind.
pub trait Board {
    type Coord: Coordinates;

    /// Tests if `pos` lies on the board.
    fn is_valid_position(&self, pos: Self::Coord) -> bool;

    /// The piece at `pos`, or `None` for empty or off-board cells.
    fn get_piece(&self, pos: Self::Coord) -> Option<Piece>;

    /// Tests if there is a piece at `pos`.
    #[inline]
    fn piece_exists(&self, pos: Self::Coord) -> bool {
        self.get_piece(pos).is_some()
    }

    /// Places `piece` at `pos`, replacing any previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not on the board.
    fn add_piece(&mut self, piece: Piece, pos: Self::Coord);

    /// Coordinates of all pieces of `kind`. Empty if there are none.
    fn pieces_by_kind(&self, kind: Kind) -> HashSet<Self::Coord>;

    /// Coordinates of all pieces.
    fn all_pieces(&self) -> HashSet<Self::Coord>;

    /// Removes every piece.
    fn remove_all_pieces(&mut self);

    /// Largest distance a move can span on this board.
    fn max_distance(&self) -> u32;

    /// Destinations of the piece at `pos` moving exactly `distance`, or
    /// `None` if there is no piece at `pos`.
    fn possible_moves(&self, pos: Self::Coord, distance: u32) -> Option<HashSet<Self::Coord>>;

    /// Moves the piece at `from` to `to`, returning the captured piece.
    ///
    /// Does not check legality. Nothing happens if `from` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not on the board.
    fn move_piece(&mut self, from: Self::Coord, to: Self::Coord) -> Option<Piece>;

    /// Tests if the piece at `from` can move to `to`.
    ///
    /// The piece is asked for its destinations at the distance between the
    /// two coordinates. When they are not on a common line only pieces
    /// that ignore distance can reach `to`, and those are asked at
    /// distance 1.
    fn can_move(&self, from: Self::Coord, to: Self::Coord) -> bool {
        let distance = from.distance_to(&to).unwrap_or(1);
        self.possible_moves(from, distance)
            .is_some_and(|moves| moves.iter().any(|m| m.same_as(&to)))
    }

    /// All destinations of the piece at `pos`, over every distance from 1
    /// to [`Board::max_distance`]. Empty if there is no piece.
    fn reachable(&self, pos: Self::Coord) -> HashSet<Self::Coord> {
        (1..=self.max_distance())
            .filter_map(|distance| self.possible_moves(pos, distance))
            .flatten()
            .collect()
    }
}

/// A rectangular board of `ranks` × `files` cells addressed by [`Square`].
///
/// Rank 0 is the first rank of [`Player::A`](crate::Player::A).
///
/// # Examples
///
/// ```
/// use chequer::{Board, Kind, Player, RectBoard, Square};
///
/// let mut board = RectBoard::new(8, 8);
/// board.add_piece(Kind::Rook.of(Player::A), Square::new(0, 0));
/// board.add_piece(Kind::Pawn.of(Player::A), Square::new(0, 3));
///
/// assert!(board.can_move(Square::new(0, 0), Square::new(0, 2)));
/// assert!(!board.can_move(Square::new(0, 0), Square::new(0, 4)));
/// assert_eq!(board.reachable(Square::new(0, 0)).len(), 9);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RectBoard {
    ranks: usize,
    files: usize,
    cells: Vec<Option<Piece>>,
    by_kind: HashMap<Kind, HashSet<Square>>,
}

impl RectBoard {
    /// An empty board.
    pub fn new(ranks: usize, files: usize) -> RectBoard {
        RectBoard {
            ranks,
            files,
            cells: vec![None; ranks * files],
            by_kind: HashMap::with_capacity(Kind::ALL.len()),
        }
    }

    #[inline]
    pub fn ranks(&self) -> usize {
        self.ranks
    }

    #[inline]
    pub fn files(&self) -> usize {
        self.files
    }

    fn index(&self, sq: Square) -> Option<usize> {
        let rank = usize::try_from(sq.rank).ok().filter(|&r| r < self.ranks)?;
        let file = usize::try_from(sq.file).ok().filter(|&f| f < self.files)?;
        Some(rank * self.files + file)
    }

    fn expect_index(&self, sq: Square) -> usize {
        self.index(sq)
            .unwrap_or_else(|| panic!("square {sq} is not on a {}x{} board", self.ranks, self.files))
    }

    fn unindex(&mut self, Piece { kind, .. }: Piece, sq: Square) {
        if let Some(squares) = self.by_kind.get_mut(&kind) {
            squares.remove(&sq);
            if squares.is_empty() {
                self.by_kind.remove(&kind);
            }
        }
    }

    /// Squares on the board strictly between `from` and `to`, nearest to
    /// `from` first. Empty if the two are not on a common line.
    fn between(&self, from: Square, to: Square) -> impl Iterator<Item = Square> {
        let steps = match from.distance_to(&to) {
            Some(distance) if distance > 1 => i64::from(distance) - 1,
            _ => 0,
        };
        let rank_step = to.rank.cmp(&from.rank) as i32;
        let file_step = to.file.cmp(&from.file) as i32;

        let (lo, hi) = [
            on_board_span(from.rank, rank_step, self.ranks),
            on_board_span(from.file, file_step, self.files),
        ]
        .into_iter()
        .fold((1, steps), |(lo, hi), (a, b)| (lo.max(a), hi.min(b)));

        (lo..=hi).filter_map(move |i| {
            let rank = i32::try_from(i64::from(from.rank) + i64::from(rank_step) * i).ok()?;
            let file = i32::try_from(i64::from(from.file) + i64::from(file_step) * i).ok()?;
            Some(Square::new(rank, file))
        })
    }

    /// Tests if any piece stands strictly between `from` and `to`, i.e.,
    /// whether moving along the line would have to leap.
    ///
    /// Always `false` for squares not on a common line.
    pub fn needs_leap(&self, from: Square, to: Square) -> bool {
        self.nearest_leap(from, to).is_some()
    }

    /// The occupied square strictly between `from` and `to` that is
    /// nearest to `from`.
    pub fn nearest_leap(&self, from: Square, to: Square) -> Option<Square> {
        self.between(from, to).find(|&sq| self.piece_exists(sq))
    }

    /// Occupied squares and their pieces, in rank-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|piece| {
                let sq = Square::new((i / self.files) as i32, (i % self.files) as i32);
                (sq, piece)
            })
        })
    }
}

/// Range of steps `i` for which `start + step * i` lies in `0..len`.
fn on_board_span(start: i32, step: i32, len: usize) -> (i64, i64) {
    let start = i64::from(start);
    let last = i64::try_from(len).unwrap_or(i64::MAX) - 1;
    match step {
        0 if (0..=last).contains(&start) => (i64::MIN, i64::MAX),
        0 => (1, 0),
        1 => (-start, last.saturating_sub(start)),
        _ => (start.saturating_sub(last), start),
    }
}

impl Board for RectBoard {
    type Coord = Square;

    #[inline]
    fn is_valid_position(&self, sq: Square) -> bool {
        self.index(sq).is_some()
    }

    #[inline]
    fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.index(sq).and_then(|i| self.cells[i])
    }

    fn add_piece(&mut self, piece: Piece, sq: Square) {
        let i = self.expect_index(sq);
        if let Some(previous) = self.cells[i].replace(piece) {
            self.unindex(previous, sq);
        }
        self.by_kind.entry(piece.kind).or_default().insert(sq);
    }

    fn pieces_by_kind(&self, kind: Kind) -> HashSet<Square> {
        self.by_kind.get(&kind).cloned().unwrap_or_default()
    }

    fn all_pieces(&self) -> HashSet<Square> {
        self.by_kind.values().flatten().copied().collect()
    }

    fn remove_all_pieces(&mut self) {
        self.cells.fill(None);
        self.by_kind.clear();
    }

    fn max_distance(&self) -> u32 {
        self.ranks.max(self.files).saturating_sub(1) as u32
    }

    fn possible_moves(&self, sq: Square, distance: u32) -> Option<SquareSet> {
        self.get_piece(sq)
            .map(|piece| attacks::moves(piece.kind, sq, self, distance))
    }

    fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let (i, j) = (self.expect_index(from), self.expect_index(to));
        let piece = self.cells[i].take()?;

        let captured = self.cells[j].replace(piece);
        if let Some(captured) = captured {
            self.unindex(captured, to);
        }
        self.unindex(piece, from);
        self.by_kind.entry(piece.kind).or_default().insert(to);

        captured
    }
}

impl fmt::Display for RectBoard {
    /// Ranks from top to bottom, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.ranks).rev() {
            for file in 0..self.files {
                let ch = self.cells[rank * self.files + file].map_or('.', Piece::char);
                if file > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
