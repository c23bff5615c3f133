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
use std::path::{Path, PathBuf};
use std::str::FromStr;

use regex::Regex;
use tracing::debug;

use crate::note::Note;
use crate::util::absolute_dir;

mod error;
mod profile;

pub use error::ConfigError;
pub use profile::KitSettings;

/// The default directory to scan.
pub const DEFAULT_DIR: &str = ".";

/// The default kit name.
pub const DEFAULT_NAME: &str = "mkkitgen";

/// The most keys a single sample can span, the whole MIDI note range.
pub const MAX_KEYS_PER_SAMPLE: u32 = 128;

/// The default release time.
pub const DEFAULT_RELEASE: f32 = 0.1;

/// How the reference key of a sample is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefKeyPolicy {
    /// The key in the middle of the range. Single key ranges leave the reference key unset.
    #[default]
    Middle,
    /// The lowest key of the range.
    Lo,
    /// The highest key of the range.
    Hi,
}

impl FromStr for RefKeyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lo" => Ok(RefKeyPolicy::Lo),
            "hi" => Ok(RefKeyPolicy::Hi),
            _ => Err(ConfigError::InvalidRefKey(s.to_string())),
        }
    }
}

/// How samples are assigned to groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Samples are not grouped.
    #[default]
    Disabled,
    /// Every sample is put into the given group.
    Fixed(u32),
    /// A new group is started every n samples.
    Every(u32),
}

impl From<i32> for Grouping {
    fn from(value: i32) -> Self {
        match value {
            0 => Grouping::Disabled,
            value if value > 0 => Grouping::Fixed(value.unsigned_abs()),
            value => Grouping::Every(value.unsigned_abs()),
        }
    }
}

/// The validated, immutable configuration for a single kit generation run.
#[derive(Clone, Debug)]
pub struct KitConfig {
    /// The absolute directory to scan.
    dir: PathBuf,
    /// The name of the kit.
    name: String,
    /// The number of keys mapped to each sample. Always at least 1.
    keys_per_sample: u32,
    /// The first key to assign.
    start_key: Note,
    /// Record bare file names instead of absolute paths.
    relative_paths: bool,
    /// The release time for every sample.
    release: f32,
    /// Play every sample at its native pitch.
    fixed_pitch: bool,
    /// How reference keys are chosen.
    ref_key: RefKeyPolicy,
    /// How samples are grouped.
    grouping: Grouping,
    /// The pan for every sample.
    pan: f32,
    /// Only files whose names match this are used.
    filter: Option<Regex>,
}

impl KitConfig {
    /// Resolves and validates the given settings. Unset values take their defaults.
    pub fn new(settings: KitSettings) -> Result<KitConfig, ConfigError> {
        let dir = settings.dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
        let dir = absolute_dir(&dir).map_err(|source| ConfigError::Directory {
            path: dir.clone(),
            source,
        })?;

        let ref_key = match settings.ref_key {
            Some(ref_key) => ref_key.parse()?,
            None => RefKeyPolicy::default(),
        };

        let keys_per_sample = settings.keys.unwrap_or(0).max(1);
        if keys_per_sample > MAX_KEYS_PER_SAMPLE {
            return Err(ConfigError::InvalidKeys(keys_per_sample));
        }

        let pan = settings.pan.unwrap_or(0.0);
        if !(-1.0..=1.0).contains(&pan) {
            return Err(ConfigError::InvalidPan(pan));
        }

        let filter = match settings.pattern {
            Some(pattern) => Some(Regex::new(&pattern).map_err(|source| {
                ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?),
            None => None,
        };

        let start_key = match settings.start {
            Some(start) => start.parse()?,
            None => Note::C1,
        };

        let config = KitConfig {
            dir,
            name: settings.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            keys_per_sample,
            start_key,
            relative_paths: settings.relative.unwrap_or(false),
            release: settings.rel.unwrap_or(DEFAULT_RELEASE),
            fixed_pitch: settings.fixed.unwrap_or(false),
            ref_key,
            grouping: Grouping::from(settings.group.unwrap_or(0)),
            pan,
            filter,
        };
        debug!(config = ?config, "Resolved kit configuration");
        Ok(config)
    }

    /// Gets the directory to scan.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Gets the kit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the number of keys per sample.
    pub fn keys_per_sample(&self) -> u32 {
        self.keys_per_sample
    }

    /// Gets the configured start key. The first key actually assigned is never below 12.
    pub fn start_key(&self) -> Note {
        self.start_key
    }

    /// Returns true if bare file names should be recorded.
    pub fn relative_paths(&self) -> bool {
        self.relative_paths
    }

    /// Gets the release time.
    pub fn release(&self) -> f32 {
        self.release
    }

    /// Returns true if samples play at a fixed pitch.
    pub fn fixed_pitch(&self) -> bool {
        self.fixed_pitch
    }

    /// Gets the reference key policy.
    pub fn ref_key(&self) -> RefKeyPolicy {
        self.ref_key
    }

    /// Gets the grouping.
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Gets the pan.
    pub fn pan(&self) -> f32 {
        self.pan
    }

    /// Gets the file name filter.
    pub fn filter(&self) -> Option<&Regex> {
        self.filter.as_ref()
    }
}
