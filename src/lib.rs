//! Standings, match recording and pairing generation for a Swiss-system
//! tournament.
//!
//! ## Overview
//!
//! Players and match outcomes live in a [`store::Store`]. Every operation
//! takes the store it works on as an argument, so the same code runs against
//! the in-memory [`store::MemoryStore`] in tests and against the
//! [`ron_store::RonStore`] data file used by the `swiss-tournament` binary.
//!
//! * [`standings::compute_standings`] ranks the players by wins, then by id.
//! * [`pairing::swiss_pairings`] pairs adjacent players in the standings and
//!   hands out at most one bye per player.
//! * [`standings::player_draw_count`] counts a player's drawn matches.

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

#![deny(clippy::panic)]

pub mod error;
pub mod match_record;
pub mod pairing;
pub mod player;
pub mod ron_store;
pub mod standings;
pub mod store;
pub mod tournament;
pub mod utils;

pub use error::Error;

/// A player's identifier, assigned serially by the store starting at 1.
pub type Id = u64;

pub type Result<T> = std::result::Result<T, Error>;

pub const HOME: &str = "swiss-tournament";
pub const DATA_FILE: &str = "tournament.ron";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the swiss-tournament project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the swiss-tournament project
Licensed under the AGPLv3"
);
