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
use std::ffi::OsStr;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::util::filename_display;

/// The extension a file needs to be picked up, compared case-insensitively.
const SAMPLE_EXTENSION: &str = "wav";

/// Errors produced while reading the sample directory.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("unable to read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

/// Reads a single level of the given directory and returns the sample files in it, sorted by
/// file name. Subdirectories are never descended into. If a filter is given, only files whose
/// name matches it are returned.
pub fn scan_dir(root: &Path, filter: Option<&Regex>) -> Result<Vec<PathBuf>, ScanError> {
    let read_error = |source| ScanError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(root)
        .map_err(read_error)?
        .collect::<Result<Vec<DirEntry>, io::Error>>()
        .map_err(read_error)?;

    // Key assignment depends on the order, so don't rely on the order the OS hands back.
    entries.sort_by_key(|entry| entry.file_name());

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.path();
        if entry.file_type().map_err(read_error)?.is_dir() {
            debug!(path = ?path, "Skipping subdirectory");
            continue;
        }

        if !is_sample_file(&path, filter) {
            debug!(file = filename_display(&path), "Ignoring file");
            continue;
        }

        files.push(path);
    }

    debug!(
        root = ?root,
        count = files.len(),
        "Finished scanning sample directory"
    );
    Ok(files)
}

/// Returns true if the path has a WAV extension and its file name passes the optional filter.
pub fn is_sample_file(path: &Path, filter: Option<&Regex>) -> bool {
    let is_wav = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| extension.eq_ignore_ascii_case(SAMPLE_EXTENSION));
    if !is_wav {
        return false;
    }

    match filter {
        Some(filter) => path
            .file_name()
            .is_some_and(|name| filter.is_match(&name.to_string_lossy())),
        None => true,
    }
}
