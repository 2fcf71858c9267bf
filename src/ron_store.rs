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

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    DATA_FILE, Error, Id, Result,
    match_record::MatchRecord,
    player::Player,
    store::{Store, TournamentData},
    utils::{create_data_folder, data_file},
};

/// A store kept in a RON file.
///
/// The whole file is rewritten on every change. The new contents go to a
/// sibling `.tmp` file first and are renamed over the old file, so a failed
/// write never leaves a half written tournament behind.
#[derive(Clone, Debug)]
pub struct RonStore {
    path: PathBuf,
    data: TournamentData,
}

impl RonStore {
    /// Opens the store at `path`, starting empty if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// If the file can't be read, isn't valid RON, or holds a tournament the
    /// store would never have written.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut data: TournamentData = match fs::read_to_string(&path) {
            Ok(string) => match ron::from_str(string.as_str()) {
                Ok(data) => data,
                Err(err) => {
                    return Err(Error::StoreUnavailable(format!(
                        "RON: {}: {err}",
                        path.display(),
                    )));
                }
            },
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    info!("{} not found, starting a new tournament", path.display());
                    TournamentData::default()
                }
                _ => {
                    return Err(Error::StoreUnavailable(format!(
                        "{}: {err}",
                        path.display()
                    )));
                }
            },
        };

        data.validate()?;

        debug!("opened {}: {data}", path.display());
        Ok(Self { path, data })
    }

    /// Opens `tournament.ron` in the user's data folder.
    ///
    /// # Errors
    ///
    /// If the data folder can't be created or the file can't be read.
    pub fn open_default() -> Result<Self> {
        create_data_folder()?;
        Self::open(data_file(DATA_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn change<T>(&mut self, change: impl FnOnce(&mut TournamentData) -> Result<T>) -> Result<T> {
        let path = &self.path;
        self.data.transaction(change, |data| save(path, data))
    }
}

fn save(path: &Path, data: &TournamentData) -> Result<()> {
    let string = ron::ser::to_string_pretty(data, ron::ser::PrettyConfig::default())?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut file = File::create(&tmp)?;
    file.write_all(string.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;

    debug!("saved {}: {data}", path.display());
    Ok(())
}

impl Store for RonStore {
    fn add_player(&mut self, name: &str) -> Result<Id> {
        self.change(|data| Ok(data.add_player(name)))
    }

    fn clear_players(&mut self) -> Result<()> {
        self.change(|data| {
            data.clear_players();
            Ok(())
        })
    }

    fn clear_matches(&mut self) -> Result<()> {
        self.change(|data| {
            data.clear_matches();
            Ok(())
        })
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.data.players.len())
    }

    fn record_match(&mut self, winner: Id, loser: Option<Id>, draw: bool) -> Result<()> {
        self.change(|data| data.record_match(winner, loser, draw))
    }

    fn players(&self) -> Result<Vec<Player>> {
        Ok(self.data.players.clone())
    }

    fn matches(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.data.matches.clone())
    }
}
