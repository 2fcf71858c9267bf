// This file is part of swiss-tournament.
//
// swiss-tournament is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// swiss-tournament is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fmt;

use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{Error, Id, Result, match_record::MatchRecord, player::Player};

/// Durable record of the registered players and the recorded matches.
///
/// Every mutation either applies completely or leaves the store unchanged.
pub trait Store {
    /// # Errors
    ///
    /// If the store can't be written.
    fn add_player(&mut self, name: &str) -> Result<Id>;

    /// Removes every player, and with them every match.
    ///
    /// # Errors
    ///
    /// If the store can't be written.
    fn clear_players(&mut self) -> Result<()>;

    /// # Errors
    ///
    /// If the store can't be written.
    fn clear_matches(&mut self) -> Result<()>;

    /// # Errors
    ///
    /// If the store can't be read.
    fn count_players(&self) -> Result<usize>;

    /// Records the outcome of one match, `loser == None` being a bye.
    ///
    /// # Errors
    ///
    /// If the two players already played each other, the winner already had
    /// a bye, a player isn't registered, a player is paired with themself,
    /// or the store can't be written.
    fn record_match(&mut self, winner: Id, loser: Option<Id>, draw: bool) -> Result<()>;

    /// All players in registration order.
    ///
    /// # Errors
    ///
    /// If the store can't be read.
    fn players(&self) -> Result<Vec<Player>>;

    /// All matches in the order they were recorded.
    ///
    /// # Errors
    ///
    /// If the store can't be read.
    fn matches(&self) -> Result<Vec<MatchRecord>>;
}

/// Everything a store holds.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TournamentData {
    #[serde(default = "first_id")]
    next_id: Id,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

fn first_id() -> Id {
    1
}

impl Default for TournamentData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            players: Vec::new(),
            matches: Vec::new(),
        }
    }
}

impl fmt::Display for TournamentData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} players, {} matches",
            self.players.len(),
            self.matches.len()
        )
    }
}

impl TournamentData {
    /// Applies `change` to a copy of the data, hands the copy to `commit` and
    /// only then replaces `self` with it.
    pub(crate) fn transaction<T>(
        &mut self,
        change: impl FnOnce(&mut Self) -> Result<T>,
        commit: impl FnOnce(&Self) -> Result<()>,
    ) -> Result<T> {
        let mut next = self.clone();
        let value = change(&mut next)?;
        commit(&next)?;
        *self = next;

        Ok(value)
    }

    /// Checks data read from outside the store, as if every player had been
    /// added and every match recorded through it.
    ///
    /// `next_id` is raised past the highest registered id.
    ///
    /// # Errors
    ///
    /// If a player id is registered twice or a match could not have been
    /// recorded.
    pub fn validate(&mut self) -> Result<()> {
        let mut ids = FxHashSet::default();
        for player in &self.players {
            if !ids.insert(player.id) {
                return Err(Error::StoreUnavailable(format!(
                    "player {} is registered twice",
                    player.id
                )));
            }
        }

        let mut checked = Self {
            next_id: self.next_id,
            players: self.players.clone(),
            matches: Vec::with_capacity(self.matches.len()),
        };
        for record in &self.matches {
            checked
                .record_match(record.winner, record.loser, record.draw)
                .map_err(|error| {
                    Error::StoreUnavailable(format!("invalid match {record}: {error}"))
                })?;
        }

        let next_id = ids
            .iter()
            .max()
            .map_or(first_id(), |id| id + 1)
            .max(self.next_id);
        if next_id != self.next_id {
            warn!("next_id {} is already taken, using {next_id}", self.next_id);
        }

        self.next_id = next_id;
        self.matches = checked.matches;
        Ok(())
    }

    /// Ids are never handed out twice, not even after clearing the players.
    pub fn add_player(&mut self, name: &str) -> Id {
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player {
            id,
            name: name.to_string(),
        });

        info!("registered player {id} {name}");
        id
    }

    pub fn clear_players(&mut self) {
        info!(
            "deleting {} players and {} matches",
            self.players.len(),
            self.matches.len()
        );

        self.players.clear();
        self.matches.clear();
    }

    pub fn clear_matches(&mut self) {
        info!("deleting {} matches", self.matches.len());
        self.matches.clear();
    }

    #[must_use]
    pub fn is_registered(&self, id: Id) -> bool {
        self.players.iter().any(|player| player.id == id)
    }

    /// # Errors
    ///
    /// See [`Store::record_match`].
    pub fn record_match(&mut self, winner: Id, loser: Option<Id>, draw: bool) -> Result<()> {
        if !self.is_registered(winner) {
            return Err(Error::UnknownPlayer(winner));
        }

        let record = if let Some(loser) = loser {
            if !self.is_registered(loser) {
                return Err(Error::UnknownPlayer(loser));
            }
            if loser == winner {
                return Err(Error::SelfMatch(winner));
            }
            if self.matches.iter().any(|record| record.between(winner, loser)) {
                return Err(Error::DuplicateMatch { winner, loser });
            }

            MatchRecord {
                winner,
                loser: Some(loser),
                draw,
            }
        } else {
            if draw {
                warn!("a bye can't be a draw, recording player {winner}'s bye as a win");
            }
            if self
                .matches
                .iter()
                .any(|record| record.is_bye() && record.winner == winner)
            {
                return Err(Error::DuplicateBye(winner));
            }

            MatchRecord::bye(winner)
        };

        debug!("recorded match {record}");
        self.matches.push(record);

        Ok(())
    }
}

/// A store that lives only as long as the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: TournamentData,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data(&self) -> &TournamentData {
        &self.data
    }
}

impl TryFrom<TournamentData> for MemoryStore {
    type Error = Error;

    fn try_from(mut data: TournamentData) -> Result<Self> {
        data.validate()?;
        Ok(Self { data })
    }
}

impl Store for MemoryStore {
    fn add_player(&mut self, name: &str) -> Result<Id> {
        Ok(self.data.add_player(name))
    }

    fn clear_players(&mut self) -> Result<()> {
        self.data.clear_players();
        Ok(())
    }

    fn clear_matches(&mut self) -> Result<()> {
        self.data.clear_matches();
        Ok(())
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.data.players.len())
    }

    fn record_match(&mut self, winner: Id, loser: Option<Id>, draw: bool) -> Result<()> {
        self.data.record_match(winner, loser, draw)
    }

    fn players(&self) -> Result<Vec<Player>> {
        Ok(self.data.players.clone())
    }

    fn matches(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.data.matches.clone())
    }
}
