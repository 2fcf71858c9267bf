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

use serde::{Deserialize, Serialize};

use crate::{Id, standings::StandingsEntry};

/// One match scheduled for the next round, `player1` being the higher ranked.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Pairing {
    pub player1_id: Id,
    pub player1_name: String,
    pub player2_id: Id,
    pub player2_name: String,
}

impl Pairing {
    #[must_use]
    pub fn new(player1: &StandingsEntry, player2: &StandingsEntry) -> Self {
        Self {
            player1_id: player1.id,
            player1_name: player1.name.clone(),
            player2_id: player2.id,
            player2_name: player2.name.clone(),
        }
    }

    #[must_use]
    pub fn ids(&self) -> (Id, Id) {
        (self.player1_id, self.player2_id)
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} vs {} {}",
            self.player1_id, self.player1_name, self.player2_id, self.player2_name
        )
    }
}

/// The player sitting out the round, who is awarded a win.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Bye {
    pub id: Id,
    pub name: String,
}

impl From<&StandingsEntry> for Bye {
    fn from(entry: &StandingsEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
        }
    }
}

impl fmt::Display for Bye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} bye", self.id, self.name)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    pub pairings: Vec<Pairing>,
    #[serde(default)]
    pub bye: Option<Bye>,
}

impl Round {
    /// Every player scheduled this round, the bye included.
    pub fn players(&self) -> impl Iterator<Item = Id> + '_ {
        self.pairings
            .iter()
            .flat_map(|pairing| [pairing.player1_id, pairing.player2_id])
            .chain(self.bye.iter().map(|bye| bye.id))
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self.pairings.iter().map(ToString::to_string).collect();
        if let Some(bye) = &self.bye {
            lines.push(bye.to_string());
        }

        write!(f, "{}", lines.join("\n"))
    }
}
