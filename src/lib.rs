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

//! A rules engine for two-player board games, with an 8×8 chess setup.
//!
//! Boards are generic over their coordinate system ([`Coordinates`],
//! [`Board`]). [`RectBoard`] is the rectangular instantiation, and
//! [`StandardGame`] plays on it with the usual starting position. Pieces
//! move by the rules of their [`Kind`], including the extended kinds in
//! [`variant`].
//!
//! # Examples
//!
//! Play moves until one player can capture the other's king:
//!
//! ```
//! use chequer::{Board, Square, StandardGame, State, PLAYER_A, PLAYER_B};
//!
//! let mut game = StandardGame::default();
//!
//! assert!(game.step_with_coords(PLAYER_A, 1, 4, 3, 4));
//! assert!(game.step_with_coords(PLAYER_A, 3, 4, 4, 4));
//! assert!(game.step_with_coords(PLAYER_A, 4, 4, 5, 4));
//! assert_eq!(game.state(), State::Normal);
//!
//! // The pawn takes the pawn in front of the king.
//! assert!(game.step_with_coords(PLAYER_A, 5, 4, 6, 4));
//! assert_eq!(game.state(), State::Checkmate);
//! assert_eq!(game.defeater_position(), Some(Square::new(6, 4)));
//! assert_eq!(game.score_manager().score(PLAYER_A), 1);
//!
//! // No moves until the game is undone or restarted.
//! assert!(!game.step_with_coords(PLAYER_B, 7, 4, 6, 4));
//! assert!(game.undo());
//! assert_eq!(game.state(), State::Normal);
//! assert!(game.board().piece_exists(Square::new(6, 4)));
//! ```
//!
//! Get reasons for rejected moves:
//!
//! ```
//! use chequer::{MoveError, Square, StandardGame, PLAYER_B};
//!
//! let mut game = StandardGame::default();
//! assert_eq!(
//!     game.try_step_with_move(PLAYER_B, Square::new(0, 1), Square::new(2, 0)),
//!     Err(MoveError::NotOwner)
//! );
//! ```
//!
//! Observe the game:
//!
//! ```
//! use chequer::{Move, Square, StandardGame, PLAYER_A};
//!
//! let mut game = StandardGame::default();
//! game.set_observer(|game: &StandardGame, mv: &Move<Square>| {
//!     println!("{mv}, {:?}", game.state());
//! });
//! assert!(game.step_with_coords(PLAYER_A, 0, 6, 2, 5));
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Square`], [`Player`], [`Kind`] and [`Piece`].
//!
//! # Logging
//!
//! Moves, undo and restart are logged at debug level, checkmates at info
//! level and rejected moves at trace level, through the
//! [`log`](https://docs.rs/log) facade.

#![doc(html_root_url = "https://docs.rs/chequer/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod coordinates;
mod errors;
mod game;
mod kind;
mod player;
mod score;
mod square;
mod standard;
mod types;

pub mod attacks;
pub mod board;
pub mod variant;

pub use board::{Board, RectBoard, SquareSet};
pub use coordinates::Coordinates;
pub use errors::{MoveError, ParseKindError, ParseSquareError};
pub use game::{CoordOf, Game, GameObserver, Layout, Policy};
pub use kind::Kind;
pub use player::Player;
pub use score::ScoreManager;
pub use square::Square;
pub use standard::{Standard, StandardGame, PLAYER_A, PLAYER_B};
pub use types::{Move, Piece, State};
