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

use thiserror::Error;

use crate::Id;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("store: unavailable: {0}")]
    StoreUnavailable(String),
    #[error("pairings: there are no players registered")]
    InsufficientPlayers,
    #[error("pairings: every player has already received a bye")]
    NoEligiblePlayerForBye,
    #[error("report: players {winner} and {loser} have already played each other")]
    DuplicateMatch { winner: Id, loser: Id },
    #[error("report: player {0} has already received a bye")]
    DuplicateBye(Id),
    #[error("report: player {0} can't play against themself")]
    SelfMatch(Id),
    #[error("player {0} is not registered")]
    UnknownPlayer(Id),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::StoreUnavailable(error.to_string())
    }
}

impl From<ron::Error> for Error {
    fn from(error: ron::Error) -> Self {
        Self::StoreUnavailable(format!("RON: {error}"))
    }
}
