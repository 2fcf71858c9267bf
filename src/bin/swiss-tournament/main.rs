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

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

mod command_line;

use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use log::{debug, info};
use swiss_tournament::{
    pairing::swiss_pairings,
    ron_store::RonStore,
    standings::{self, compute_standings, player_draw_count},
    store::Store,
    utils,
};

use crate::command_line::{Args, Command};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug, args.systemd);

    if args.man {
        return Args::generate_man_page();
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let mut store = match args.data_file {
        Some(path) => RonStore::open(path)?,
        None => RonStore::open_default()?,
    };
    debug!("using {}", store.path().display());

    let stdout = io::stdout();
    run(&mut store, command, &mut stdout.lock())
}

fn run(store: &mut impl Store, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Register { name } => {
            let id = store.add_player(&name)?;
            writeln!(out, "{id}")?;
        }
        Command::Count => writeln!(out, "{}", store.count_players()?)?,
        Command::Report {
            winner,
            loser,
            draw,
        } => {
            store.record_match(winner, loser, draw)?;
            match loser {
                Some(loser) => info!("reported {winner} {loser} draw: {draw}"),
                None => info!("reported a bye for {winner}"),
            }
        }
        Command::Standings => {
            writeln!(out, "{}", standings::header())?;
            for entry in compute_standings(store)? {
                writeln!(out, "{entry}")?;
            }
        }
        Command::Pairings { ron } => {
            let round = swiss_pairings(store)?;
            if ron {
                writeln!(
                    out,
                    "{}",
                    ron::ser::to_string_pretty(&round, ron::ser::PrettyConfig::default())?
                )?;
            } else {
                writeln!(out, "{round}")?;
            }
        }
        Command::Draws { id } => writeln!(out, "{}", player_draw_count(store, id)?)?,
        Command::DeleteMatches => store.clear_matches()?,
        Command::DeletePlayers => store.clear_players()?,
    }

    Ok(())
}
