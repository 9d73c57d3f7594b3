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
use std::error::Error;

/// Reason a move was rejected by [`Game::try_step_with_move`](crate::Game::try_step_with_move).
///
/// A rejected move leaves the game untouched.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MoveError {
    /// The game is in checkmate. Undo or restart to continue.
    GameOver,
    /// There is no piece on the source square, or the source is off the
    /// board.
    EmptySquare,
    /// The piece on the source square belongs to another player.
    NotOwner,
    /// It is not the player's turn. Only reported when
    /// [`Policy::ENFORCE_TURN`](crate::Policy::ENFORCE_TURN) is set.
    OutOfTurn,
    /// The piece cannot reach the destination.
    Illegal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            MoveError::GameOver => "game is over",
            MoveError::EmptySquare => "no piece on source square",
            MoveError::NotOwner => "piece belongs to another player",
            MoveError::OutOfTurn => "not the player's turn",
            MoveError::Illegal => "illegal move",
        })
    }
}

impl Error for MoveError {}

/// Error when parsing an invalid square.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square")
    }
}

impl Error for ParseSquareError {}

/// Error when parsing an unknown piece kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseKindError;

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown piece kind")
    }
}

impl Error for ParseKindError {}
