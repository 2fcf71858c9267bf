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

use std::{env, fs, io::Write, path::PathBuf};

use chrono::Utc;
use env_logger::Builder;
use log::LevelFilter;

use crate::HOME;

pub fn init_logger(debug: bool, systemd: bool) {
    let mut builder = Builder::new();

    if systemd {
        builder.format(|formatter, record| {
            writeln!(formatter, "[{}]: {}", record.level(), record.args())
        });
    } else {
        builder.format(|formatter, record| {
            writeln!(
                formatter,
                "{} [{}] ({}): {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    }

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        // if no RUST_LOG provided, default to logging at the Info level
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

#[must_use]
pub fn data_folder() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_default();
    path.push(HOME);
    path
}

#[must_use]
pub fn data_file(file: &str) -> PathBuf {
    let mut path = data_folder();
    path.push(file);
    path
}

/// # Errors
///
/// If the folder can't be created.
pub fn create_data_folder() -> std::io::Result<()> {
    fs::create_dir_all(data_folder())
}
