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
use std::cmp;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Grouping, KitConfig, RefKeyPolicy};
use crate::note::Note;

use super::Sample;

/// Builds samples one file at a time. The builder carries the key and group cursors from one
/// file to the next, so files must be given in scan order.
pub struct SampleBuilder<'a> {
    config: &'a KitConfig,
    /// The last key handed out.
    current_key: Note,
    /// The group of the last sample.
    current_group: u32,
}

impl<'a> SampleBuilder<'a> {
    /// Creates a new builder with its cursors seeded from the config.
    pub fn new(config: &'a KitConfig) -> SampleBuilder<'a> {
        let start = config.start_key().transpose(-1);
        let current_group = match config.grouping() {
            Grouping::Fixed(group) => group,
            Grouping::Disabled | Grouping::Every(_) => 0,
        };

        SampleBuilder {
            config,
            current_key: cmp::max(start, Note::SCAN_FLOOR),
            current_group,
        }
    }

    /// Gets the last key handed out.
    pub fn current_key(&self) -> Note {
        self.current_key
    }

    /// Gets the current group.
    pub fn current_group(&self) -> u32 {
        self.current_group
    }

    /// Builds the sample for the given file. `appended` is the number of samples already in
    /// the kit.
    pub fn build(&mut self, file: &Path, appended: usize) -> Sample {
        let key_start = self.current_key.increment();
        // keys_per_sample is bounded by the config, so this always fits.
        let span = i32::try_from(self.config.keys_per_sample() - 1).unwrap_or(i32::MAX);
        let key_end = key_start.transpose(span);
        self.current_key = key_end;

        let ref_key = self.ref_key(key_start, key_end);

        if let Grouping::Every(period) = self.config.grouping() {
            if appended % period as usize == 0 {
                self.current_group += 1;
            }
        }

        let file = if self.config.relative_paths() {
            file.file_name().map(PathBuf::from).unwrap_or_default()
        } else {
            file.to_path_buf()
        };

        debug!(
            file = ?file,
            key_start = %key_start,
            key_end = %key_end,
            group = self.current_group,
            "Mapped sample"
        );

        Sample {
            file,
            fixed_pitch: self.config.fixed_pitch(),
            key_start,
            key_end,
            ref_key,
            group: self.current_group,
            pan: self.config.pan(),
            rel: self.config.release(),
        }
    }

    fn ref_key(&self, key_start: Note, key_end: Note) -> Note {
        if self.config.fixed_pitch() {
            return Note::UNSET;
        }

        match self.config.ref_key() {
            RefKeyPolicy::Lo => key_start,
            RefKeyPolicy::Hi => key_end,
            RefKeyPolicy::Middle if key_start < key_end => {
                key_start.transpose(key_start.semitones_to(key_end) / 2)
            }
            RefKeyPolicy::Middle => Note::UNSET,
        }
    }
}
