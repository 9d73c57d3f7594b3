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

//! The turn-based game state machine.

use core::fmt;
use std::collections::HashSet;

use bitflags::bitflags;

use crate::{Board, Kind, Move, MoveError, Player, ScoreManager, State};

/// Coordinate type of the board of a layout.
pub type CoordOf<L> = <<L as Layout>::Board as Board>::Coord;

/// Board geometry and starting position of a game.
pub trait Layout {
    type Board: Board;

    /// The piece kind whose capture or isolation ends the game.
    fn critical_kind(&self) -> Kind;

    /// Tags of the participating players.
    fn players(&self) -> &[Player] {
        &Player::ALL
    }

    /// A board without pieces.
    fn empty_board(&self) -> Self::Board;

    /// Places the starting pieces on an empty board.
    fn initialize(&self, board: &mut Self::Board);
}

bitflags! {
    /// Rules that can be switched on for a [`Game`].
    ///
    /// The default is empty: scores survive [`Game::restart()`] and players
    /// may move out of turn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Policy: u8 {
        /// [`Game::restart()`] also resets all scores.
        const RESET_SCORES_ON_RESTART = 1 << 0;
        /// Reject moves by a player whose turn it is not. While the turn
        /// is neutral, either player may move.
        const ENFORCE_TURN = 1 << 1;
    }
}

/// Receives every applied move.
///
/// Implemented for closures, so most callers pass one to
/// [`Game::set_observer()`].
pub trait GameObserver<L: Layout> {
    /// Called after `mv` has been applied and the game state recomputed.
    fn on_state_update(&mut self, game: &Game<L>, mv: &Move<CoordOf<L>>);
}

impl<L, F> GameObserver<L> for F
where
    L: Layout,
    F: FnMut(&Game<L>, &Move<CoordOf<L>>),
{
    fn on_state_update(&mut self, game: &Game<L>, mv: &Move<CoordOf<L>>) {
        self(game, mv)
    }
}

/// A game between the players of a [`Layout`].
///
/// Applies moves that the board considers reachable, detects checkmate
/// after every move, keeps the move history for undo, and tracks scores
/// across restarts.
///
/// Checkmate is declared when fewer than two pieces of the critical kind
/// remain, or when any piece could move onto a critical piece. The piece
/// that could do so (searching the mover's pieces first) is the defeater,
/// and its player scores a point. No further moves are accepted until the
/// checkmating move is undone or the game is restarted.
pub struct Game<L: Layout> {
    layout: L,
    board: L::Board,
    history: Vec<Move<CoordOf<L>>>,
    // Turn before each move in `history`.
    turns: Vec<Player>,
    turn: Player,
    state: State,
    defeater: Option<(CoordOf<L>, Player)>,
    scores: ScoreManager,
    policy: Policy,
    observer: Option<Box<dyn GameObserver<L> + Send>>,
}

impl<L: Layout> Game<L> {
    /// Starts a game from the layout's initial position. The turn is
    /// neutral until the first move.
    pub fn new(layout: L) -> Game<L> {
        Game::with_policy(layout, Policy::default())
    }

    pub fn with_policy(layout: L, policy: Policy) -> Game<L> {
        let mut board = layout.empty_board();
        layout.initialize(&mut board);
        Game {
            layout,
            board,
            history: Vec::new(),
            turns: Vec::new(),
            turn: Player::NEUTRAL,
            state: State::Normal,
            defeater: None,
            scores: ScoreManager::new(),
            policy,
            observer: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &L::Board {
        &self.board
    }

    /// Mutable access to the board, e.g. to set up a custom position.
    ///
    /// Changes made here are not recorded in the history and cannot be
    /// undone.
    #[inline]
    pub fn board_mut(&mut self) -> &mut L::Board {
        &mut self.board
    }

    #[inline]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// The player expected to move next. [`Player::NEUTRAL`] before the
    /// first move.
    #[inline]
    pub fn player_turn(&self) -> Player {
        self.turn
    }

    pub fn set_player_turn(&mut self, player: Player) {
        self.turn = player;
    }

    /// Tests if `player` may move now. A neutral turn admits everybody.
    pub fn is_players_turn(&self, player: Player) -> bool {
        self.turn.is_neutral() || self.turn == player
    }

    pub fn last_move(&self) -> Option<&Move<CoordOf<L>>> {
        self.history.last()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move<CoordOf<L>>] {
        &self.history
    }

    #[inline]
    pub fn score_manager(&self) -> &ScoreManager {
        &self.scores
    }

    pub fn critical_kind(&self) -> Kind {
        self.layout.critical_kind()
    }

    pub fn players(&self) -> &[Player] {
        self.layout.players()
    }

    /// Position of the piece that caused the current checkmate.
    pub fn defeater_position(&self) -> Option<CoordOf<L>> {
        self.defeater.map(|(pos, _)| pos)
    }

    /// Player credited with the current checkmate.
    pub fn defeater(&self) -> Option<Player> {
        self.defeater.map(|(_, player)| player)
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
    }

    /// Installs `observer`, replacing any previous one.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: GameObserver<L> + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Squares the piece on `from` can move to, if it belongs to `player`.
    pub fn legal_destinations(&self, player: Player, from: CoordOf<L>) -> HashSet<CoordOf<L>> {
        match self.board.get_piece(from) {
            Some(piece) if piece.player == player && !self.state.is_checkmate() => {
                self.board.reachable(from)
            }
            _ => HashSet::new(),
        }
    }

    /// Moves the piece on `from` to `to` on behalf of `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the move is not accepted, in which case
    /// the game is unchanged.
    pub fn try_step_with_move(
        &mut self,
        player: Player,
        from: CoordOf<L>,
        to: CoordOf<L>,
    ) -> Result<Move<CoordOf<L>>, MoveError> {
        if let Err(err) = self.validate(player, from, to) {
            log::trace!("rejected move of {player} from {from:?} to {to:?}: {err}");
            return Err(err);
        }

        let capture = self.board.move_piece(from, to);
        let mv = Move {
            player,
            from,
            to,
            capture,
        };
        self.history.push(mv);
        self.turns.push(self.turn);
        self.turn = player.opponent();
        log::debug!("{player} moved {from:?} to {to:?}, capturing {capture:?}");

        self.update_state(&mv);
        self.notify(&mv);
        Ok(mv)
    }

    /// Like [`Game::try_step_with_move()`], but only reports whether the
    /// move was applied.
    pub fn step_with_move(&mut self, player: Player, from: CoordOf<L>, to: CoordOf<L>) -> bool {
        self.try_step_with_move(player, from, to).is_ok()
    }

    fn validate(&self, player: Player, from: CoordOf<L>, to: CoordOf<L>) -> Result<(), MoveError> {
        if self.state.is_checkmate() {
            return Err(MoveError::GameOver);
        }
        let piece = self.board.get_piece(from).ok_or(MoveError::EmptySquare)?;
        if piece.player != player {
            return Err(MoveError::NotOwner);
        }
        if self.policy.contains(Policy::ENFORCE_TURN) && !self.is_players_turn(player) {
            return Err(MoveError::OutOfTurn);
        }
        if !self.board.can_move(from, to) {
            return Err(MoveError::Illegal);
        }
        Ok(())
    }

    /// Takes back the last move and returns it.
    ///
    /// Restores the captured piece, the turn and the state from before the
    /// move. If the move ended the game, the point awarded for it is taken
    /// away again.
    pub fn take_back(&mut self) -> Option<Move<CoordOf<L>>> {
        let mv = self.history.pop()?;
        if let Some(turn) = self.turns.pop() {
            self.turn = turn;
        }

        self.board.move_piece(mv.to, mv.from);
        if let Some(captured) = mv.capture {
            self.board.add_piece(captured, mv.to);
        }

        if let Some((_, player)) = self.defeater.take() {
            self.scores.lower(player, 1);
        }
        self.state = State::Normal;

        log::debug!("took back {} {:?} to {:?}", mv.player, mv.from, mv.to);
        Some(mv)
    }

    /// Takes back the last move. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        self.take_back().is_some()
    }

    /// Sets up the initial position again and clears the history. Scores
    /// are kept unless [`Policy::RESET_SCORES_ON_RESTART`] is set.
    pub fn restart(&mut self) {
        self.history.clear();
        self.turns.clear();
        self.board.remove_all_pieces();
        self.layout.initialize(&mut self.board);
        self.turn = Player::NEUTRAL;
        self.state = State::Normal;
        self.defeater = None;
        if self.policy.contains(Policy::RESET_SCORES_ON_RESTART) {
            self.scores.reset();
        }
        log::debug!("restarted");
    }

    fn update_state(&mut self, mv: &Move<CoordOf<L>>) {
        let critical_kind = self.critical_kind();
        let critical = self.board.pieces_by_kind(critical_kind);
        let took_critical = mv.capture.is_some_and(|p| p.kind == critical_kind);

        let defeater = if took_critical && critical.len() < 2 {
            Some((mv.to, mv.player))
        } else {
            self.find_attacker(mv.player, &critical)
                .or_else(|| (critical.len() < 2).then_some((mv.to, mv.player)))
        };

        if let Some((pos, player)) = defeater {
            log::info!("checkmate by {player} from {pos:?}");
            self.defeater = Some((pos, player));
            self.state = State::Checkmate;
            self.scores.raise(player, 1);
        }
    }

    /// A piece that can move onto one of `targets`, searching the pieces of
    /// `mover` first.
    fn find_attacker(
        &self,
        mover: Player,
        targets: &HashSet<CoordOf<L>>,
    ) -> Option<(CoordOf<L>, Player)> {
        let mut pieces: Vec<_> = self.board.all_pieces().into_iter().collect();
        pieces.sort_by_key(|&pos| {
            let own = self.board.get_piece(pos).is_some_and(|p| p.player == mover);
            (!own, pos)
        });

        pieces
            .into_iter()
            .find(|&pos| targets.iter().any(|&target| self.board.can_move(pos, target)))
            .and_then(|pos| Some((pos, self.board.get_piece(pos)?.player)))
    }

    fn notify(&mut self, mv: &Move<CoordOf<L>>) {
        if let Some(mut observer) = self.observer.take() {
            observer.on_state_update(self, mv);
            self.observer = Some(observer);
        }
    }
}

impl<L: Layout + Default> Default for Game<L> {
    fn default() -> Game<L> {
        Game::new(L::default())
    }
}

impl<L> fmt::Debug for Game<L>
where
    L: Layout + fmt::Debug,
    L::Board: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("layout", &self.layout)
            .field("board", &self.board)
            .field("history", &self.history)
            .field("turn", &self.turn)
            .field("state", &self.state)
            .field("defeater", &self.defeater)
            .field("scores", &self.scores)
            .field("policy", &self.policy)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
