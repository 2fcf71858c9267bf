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

use std::{io::Write as _, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use swiss_tournament::{COPYRIGHT, Id, LONG_VERSION};

/// Swiss-system Tournament
///
/// Registers players, records match results and pairs the next round.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Swiss-system Tournament")]
pub(crate) struct Args {
    /// The tournament data file [default: DATA_DIR/swiss-tournament/tournament.ron]
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Whether the application is being run by systemd
    #[arg(long)]
    pub systemd: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Register a player and print their id
    Register {
        /// The player's full name, it need not be unique
        name: String,
    },

    /// Print the number of registered players
    Count,

    /// Record the result of a match, leave out the loser to record a bye
    Report {
        winner: Id,
        loser: Option<Id>,

        /// The match was drawn
        #[arg(long)]
        draw: bool,
    },

    /// Print the players ranked by wins
    Standings,

    /// Print the pairings for the next round
    Pairings {
        /// Print the round as RON
        #[arg(long)]
        ron: bool,
    },

    /// Print the number of matches a player drew
    Draws { id: Id },

    /// Delete every match
    DeleteMatches,

    /// Delete every player and their matches
    DeletePlayers,
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command().name("swiss-tournament").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-19");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("swiss-tournament.1", buffer)?;
        Ok(())
    }
}
