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

use std::{cmp::Ordering, fmt};

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Id, Result, match_record::MatchRecord, player::Player, store::Store};

/// One player's record so far.
///
/// A draw counts as a match played for both players but as a win for
/// neither. A bye counts as a match played and won.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct StandingsEntry {
    pub id: Id,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
    pub draws: u32,
    pub byes: u32,
}

impl StandingsEntry {
    #[must_use]
    pub fn losses(&self) -> u32 {
        self.matches
            .saturating_sub(self.wins)
            .saturating_sub(self.draws)
    }

    /// More wins first, then the lower id.
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        other.wins.cmp(&self.wins).then(self.id.cmp(&other.id))
    }
}

impl From<&Player> for StandingsEntry {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            ..Self::default()
        }
    }
}

impl fmt::Display for StandingsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} {:<30} {:>6} {:>6} {:>6} {:>6}",
            self.id,
            self.name,
            self.wins,
            self.losses(),
            self.draws,
            self.matches
        )
    }
}

/// Ranks `players` by the results in `matches`.
///
/// Matches naming an unregistered player only count for the registered one.
#[must_use]
pub fn standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingsEntry> {
    let mut entries: FxHashMap<Id, StandingsEntry> = players
        .iter()
        .map(|player| (player.id, StandingsEntry::from(player)))
        .collect();

    for record in matches {
        match record.loser {
            None => {
                if let Some(entry) = entries.get_mut(&record.winner) {
                    entry.wins += 1;
                    entry.matches += 1;
                    entry.byes += 1;
                }
            }
            Some(loser) => {
                if let Some(entry) = entries.get_mut(&record.winner) {
                    entry.matches += 1;
                    if record.draw {
                        entry.draws += 1;
                    } else {
                        entry.wins += 1;
                    }
                }
                if let Some(entry) = entries.get_mut(&loser) {
                    entry.matches += 1;
                    if record.draw {
                        entry.draws += 1;
                    }
                }
            }
        }
    }

    let mut standings: Vec<_> = entries.into_values().collect();
    standings.sort_unstable_by(StandingsEntry::rank);
    standings
}

/// Reads every player and match from `store` and ranks them.
///
/// # Errors
///
/// If the store can't be read.
pub fn compute_standings(store: &impl Store) -> Result<Vec<StandingsEntry>> {
    let players = store.players()?;
    let matches = store.matches()?;
    debug!(
        "computing standings for {} players and {} matches",
        players.len(),
        matches.len()
    );

    Ok(standings(&players, &matches))
}

/// # Errors
///
/// If the player isn't registered or the store can't be read.
pub fn player_draw_count(store: &impl Store, id: Id) -> Result<u32> {
    compute_standings(store)?
        .into_iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.draws)
        .ok_or(Error::UnknownPlayer(id))
}

#[must_use]
pub fn header() -> String {
    format!(
        "{:>6} {:<30} {:>6} {:>6} {:>6} {:>6}",
        "id", "name", "wins", "losses", "draws", "played"
    )
}
