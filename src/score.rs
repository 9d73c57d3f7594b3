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

use std::collections::HashMap;

use crate::Player;

/// Integer score per player.
///
/// Players that never scored have a score of 0. [`Game`](crate::Game)
/// raises the defeater's score when a game ends in checkmate and lowers it
/// again when that move is undone.
///
/// # Examples
///
/// ```
/// use chequer::{Player, ScoreManager};
///
/// let mut scores = ScoreManager::new();
/// scores.raise(Player::A, 2);
/// scores.raise(Player::B, 1);
/// assert_eq!(scores.score(Player::A), 2);
/// assert_eq!(scores.leader(), Some(Player::A));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreManager {
    scores: HashMap<Player, i32>,
}

impl ScoreManager {
    pub fn new() -> ScoreManager {
        ScoreManager::default()
    }

    /// Current score of `player`.
    pub fn score(&self, player: Player) -> i32 {
        self.scores.get(&player).copied().unwrap_or(0)
    }

    /// Adds `magnitude` to the score of `player`.
    pub fn raise(&mut self, player: Player, magnitude: i32) {
        let score = self.scores.entry(player).or_insert(0);
        *score = score.saturating_add(magnitude);
        log::debug!("score of {player} raised to {score}");
    }

    /// Subtracts `magnitude` from the score of `player`. Scores may become
    /// negative.
    pub fn lower(&mut self, player: Player, magnitude: i32) {
        let score = self.scores.entry(player).or_insert(0);
        *score = score.saturating_sub(magnitude);
        log::debug!("score of {player} lowered to {score}");
    }

    /// The player with the strictly highest score, or `None` if nobody has
    /// scored or the best score is shared.
    pub fn leader(&self) -> Option<Player> {
        let mut leader = None;
        let mut tied = false;
        for (&player, &score) in &self.scores {
            match leader {
                Some((_, best)) if score < best => (),
                Some((_, best)) if score == best => tied = true,
                _ => {
                    leader = Some((player, score));
                    tied = false;
                }
            }
        }
        leader.filter(|_| !tied).map(|(player, _)| player)
    }

    /// Forgets all scores.
    pub fn reset(&mut self) {
        self.scores.clear();
    }

    /// Players with a recorded score, in no particular order.
    pub fn scores(&self) -> impl Iterator<Item = (Player, i32)> + '_ {
        self.scores.iter().map(|(&player, &score)| (player, score))
    }
}
