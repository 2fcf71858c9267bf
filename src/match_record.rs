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

use crate::Id;

/// The outcome of one match.
///
/// A missing `loser` means the winner received a bye. When `draw` is set
/// neither player won and `winner` is only the first of the two players.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MatchRecord {
    pub winner: Id,
    #[serde(default)]
    pub loser: Option<Id>,
    #[serde(default)]
    pub draw: bool,
}

impl MatchRecord {
    #[must_use]
    pub fn bye(player: Id) -> Self {
        Self {
            winner: player,
            loser: None,
            draw: false,
        }
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        self.loser.is_none()
    }

    #[must_use]
    pub fn involves(&self, player: Id) -> bool {
        self.winner == player || self.loser == Some(player)
    }

    /// Whether this match was between `a` and `b`, in either order.
    #[must_use]
    pub fn between(&self, a: Id, b: Id) -> bool {
        match self.loser {
            Some(loser) => (self.winner == a && loser == b) || (self.winner == b && loser == a),
            None => false,
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.loser {
            None => write!(f, "{} bye", self.winner),
            Some(loser) if self.draw => write!(f, "{} {loser} draw", self.winner),
            Some(loser) => write!(f, "{} {loser} win", self.winner),
        }
    }
}
