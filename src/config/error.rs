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
use std::io;
use std::path::PathBuf;

use crate::note::NoteError;

/// Typed error for kit configuration failures. All of these are detected before the sample
/// directory is read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config load/parse error: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid value {0:?} for --ref, allowed are only 'lo' and 'hi'")]
    InvalidRefKey(String),

    #[error("invalid value {0} for --keys, allowed are only values up to {max}", max = super::MAX_KEYS_PER_SAMPLE)]
    InvalidKeys(u32),

    #[error("invalid value {0} for --pan, allowed are only values between -1.0 and 1.0")]
    InvalidPan(f32),

    #[error("invalid value {pattern:?} for --match: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("invalid value for --start: {0}")]
    InvalidStartKey(#[from] NoteError),

    #[error("unable to resolve directory {}: {source}", path.display())]
    Directory { path: PathBuf, source: io::Error },
}
