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

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::{
    Error, Id, Result,
    standings::{StandingsEntry, standings},
    store::Store,
    tournament::{Bye, Pairing, Round},
};

/// Pairs each player with the player next to them in `standings`.
///
/// `standings` has to be ranked already. With an odd number of players the
/// lowest ranked player who hasn't had a bye yet sits out the round and the
/// rest are paired.
///
/// # Errors
///
/// If there are no players, or there is an odd number of players and all of
/// them already had a bye.
pub fn generate_pairings(standings: &[StandingsEntry]) -> Result<Round> {
    if standings.is_empty() {
        return Err(Error::InsufficientPlayers);
    }

    let mut players: Vec<&StandingsEntry> = standings.iter().collect();

    let bye = if players.len() % 2 == 1 {
        let Some(index) = players.iter().rposition(|entry| entry.byes == 0) else {
            return Err(Error::NoEligiblePlayerForBye);
        };

        let entry = players.remove(index);
        info!("{} {} gets a bye", entry.id, entry.name);
        Some(Bye::from(entry))
    } else {
        None
    };

    let pairings: Vec<Pairing> = players
        .chunks_exact(2)
        .filter_map(|pair| {
            if let [player1, player2] = pair {
                Some(Pairing::new(player1, player2))
            } else {
                None
            }
        })
        .collect();

    debug!("paired {} players into {} matches", standings.len(), pairings.len());
    Ok(Round { pairings, bye })
}

/// Pairs the next round from the standings in `store`.
///
/// The standings are ranked as in [`crate::standings::compute_standings`],
/// but from the same snapshot of the store that the rematch check reads.
///
/// The store refuses rematches when they are reported, so any pairing of two
/// players who already met is only logged here.
///
/// # Errors
///
/// If the store can't be read, or see [`generate_pairings`].
pub fn swiss_pairings(store: &impl Store) -> Result<Round> {
    let players = store.players()?;
    let matches = store.matches()?;

    let round = generate_pairings(&standings(&players, &matches))?;

    let played: FxHashSet<(Id, Id)> = matches
        .iter()
        .filter_map(|record| {
            record
                .loser
                .map(|loser| (record.winner.min(loser), record.winner.max(loser)))
        })
        .collect();

    for pairing in &round.pairings {
        let (player1, player2) = pairing.ids();
        if played.contains(&(player1.min(player2), player1.max(player2))) {
            warn!("{player1} and {player2} are paired again but already played each other");
        }
    }

    Ok(round)
}
