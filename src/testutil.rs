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

use std::{error::Error, fs::File, io, path::Path, path::PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};

/// Creates an empty file. The scanner only looks at names, so this is enough for most tests.
pub fn touch(path: &Path) -> io::Result<()> {
    File::create(path).map(|_| ())
}

/// Writes a 32 bit integer WAV file with one inner vector of samples per channel.
pub fn write_wav(
    path: PathBuf,
    samples: Vec<Vec<i32>>,
    sample_rate: u32,
) -> Result<(), Box<dyn Error>> {
    let tempwav = File::create(path)?;

    let num_channels = samples.len();
    assert!(num_channels <= u16::MAX.into(), "Too many channels!");
    let mut writer = WavWriter::new(
        tempwav,
        WavSpec {
            channels: num_channels as u16,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Int,
        },
    )?;

    for channel in samples.iter() {
        for sample in channel {
            writer.write_sample(*sample)?;
        }
    }
    writer.finalize()?;

    Ok(())
}

/// Creates a directory of WAV files with the given names and returns it.
pub fn sample_dir(names: &[&str]) -> Result<tempfile::TempDir, Box<dyn Error>> {
    let tempdir = tempfile::tempdir()?;
    for name in names {
        write_wav(tempdir.path().join(name), vec![vec![1_i32, 2_i32, 3_i32]], 44100)?;
    }
    Ok(tempdir)
}
