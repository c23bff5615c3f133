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

//! Kit generation.
//!
//! A kit is built in a single pass over the sample directory:
//! - The scanner returns the WAV files in name order
//! - The sample builder maps each file onto the next free key range
//! - The finished kit is rendered once through its `Display` implementation

mod builder;
mod format;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::KitConfig;
use crate::note::Note;
use crate::scanner::{self, ScanError};

pub use builder::SampleBuilder;

/// A single sample mapping in a kit.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// The sample file, absolute or a bare file name.
    file: PathBuf,
    /// Play the sample at its native pitch.
    fixed_pitch: bool,
    /// The first key of the range.
    key_start: Note,
    /// The last key of the range.
    key_end: Note,
    /// The reference key. Unset lets the playback engine choose.
    ref_key: Note,
    /// The group. Zero is ungrouped.
    group: u32,
    /// The pan, between -1.0 and 1.0.
    pan: f32,
    /// The release time. Negative means note off is ignored.
    rel: f32,
}

impl Sample {
    /// Gets the sample file.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Returns true if the sample plays at a fixed pitch.
    pub fn fixed_pitch(&self) -> bool {
        self.fixed_pitch
    }

    /// Gets the first key of the sample's range.
    pub fn key_start(&self) -> Note {
        self.key_start
    }

    /// Gets the last key of the sample's range.
    pub fn key_end(&self) -> Note {
        self.key_end
    }

    /// Gets the reference key.
    pub fn ref_key(&self) -> Note {
        self.ref_key
    }

    /// Gets the group.
    pub fn group(&self) -> u32 {
        self.group
    }

    /// Gets the pan.
    pub fn pan(&self) -> f32 {
        self.pan
    }

    /// Gets the release time.
    pub fn rel(&self) -> f32 {
        self.rel
    }
}

/// A generated kit: a name and its samples in scan order.
pub struct Kit {
    config: KitConfig,
    samples: Vec<Sample>,
}

impl Kit {
    /// Scans the configured directory and builds a kit from the files found. Nothing is
    /// returned if the directory can't be read.
    pub fn scan(config: KitConfig) -> Result<Kit, ScanError> {
        let files = scanner::scan_dir(config.dir(), config.filter())?;
        let kit = Kit::from_files(config, files);
        info!(
            name = kit.name(),
            samples = kit.samples.len(),
            "Generated kit"
        );
        Ok(kit)
    }

    /// Builds a kit from the given files, in the order given.
    pub fn from_files<I>(config: KitConfig, files: I) -> Kit
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut samples = Vec::new();
        let mut builder = SampleBuilder::new(&config);
        for file in files {
            let sample = builder.build(&file, samples.len());
            samples.push(sample);
        }

        Kit { config, samples }
    }

    /// Gets the kit name.
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Gets the samples in scan order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns true if no samples were found.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
