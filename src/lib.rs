// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Generates sample kit definitions from a directory of WAV files.
//!
//! Each WAV file in the directory is mapped onto the next free range of keys, in file name
//! order, and written out as one block of the kit text format.

pub mod config;
mod error;
pub mod kit;
pub mod note;
pub mod scanner;
#[cfg(test)]
mod testutil;
mod util;

pub use error::Error;

use crate::config::{KitConfig, KitSettings};
use crate::kit::Kit;

/// Validates the settings, scans the sample directory and renders the kit. An empty string is
/// returned if no sample files were found.
pub fn generate(settings: KitSettings) -> Result<String, Error> {
    let config = KitConfig::new(settings)?;
    let kit = Kit::scan(config)?;
    Ok(kit.to_string())
}
