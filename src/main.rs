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
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{crate_version, Parser};
use mkkit::config::KitSettings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Generates sample kits from a directory of sound files in WAV format."
)]
struct Cli {
    /// The directory where the WAV files reside. Defaults to the current directory.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// The name of the kit. Defaults to mkkitgen.
    #[arg(short, long)]
    name: Option<String>,

    /// The number of keys per sample, at most 128. Defaults to 1.
    #[arg(short, long)]
    keys: Option<u32>,

    /// The start key, as a MIDI number or a note name like c4. Keys below 12 (c0) are raised
    /// to 12. Defaults to c1.
    #[arg(long, allow_negative_numbers = true)]
    start: Option<String>,

    /// Write the file names of the samples to the kit instead of absolute paths.
    #[arg(long)]
    relative: bool,

    /// The release time of each sample. If negative, note off events are ignored and samples
    /// always play to their end. Defaults to 0.1.
    #[arg(long, allow_negative_numbers = true)]
    rel: Option<f32>,

    /// Play all samples at a fixed pitch.
    #[arg(long)]
    fixed: bool,

    /// The reference key, either 'lo' or 'hi'. If not set, the key in the middle of each
    /// range is used.
    #[arg(short = 'e', long = "ref")]
    ref_key: Option<String>,

    /// The group property. 0 disables grouping, -n creates a new group every n samples and a
    /// positive value puts every sample into that group.
    #[arg(short, long, allow_negative_numbers = true)]
    group: Option<i32>,

    /// The pan value, between -1.0 and 1.0.
    #[arg(long, allow_negative_numbers = true)]
    pan: Option<f32>,

    /// Only use sound files whose names match the given regular expression.
    #[arg(short = 'm', long = "match")]
    pattern: Option<String>,

    /// A YAML kit profile providing defaults for any of the options above.
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

impl Cli {
    /// Converts the flags that were given into kit settings.
    fn settings(&self) -> KitSettings {
        KitSettings {
            dir: self.dir.clone(),
            name: self.name.clone(),
            keys: self.keys,
            start: self.start.clone(),
            relative: self.relative.then_some(true),
            rel: self.rel,
            fixed: self.fixed.then_some(true),
            ref_key: self.ref_key.clone(),
            group: self.group,
            pan: self.pan,
            pattern: self.pattern.clone(),
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so that stdout only ever carries the kit.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let kit = match run(&cli) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error: {}", e.single_line());
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(kit.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("Error: unable to write kit: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Layers the flags over the optional profile and generates the kit text.
fn run(cli: &Cli) -> Result<String, mkkit::Error> {
    let profile = match &cli.profile {
        Some(path) => KitSettings::load(path)?,
        None => KitSettings::default(),
    };

    mkkit::generate(profile.merge(cli.settings()))
}
