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

use ::config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use super::error::ConfigError;

/// Raw, unvalidated kit settings. Every field is optional so that settings from a kit profile
/// and from the command line can be layered before they are resolved into a
/// [`KitConfig`](super::KitConfig).
///
/// A kit profile is a YAML file using the long flag names as keys:
///
/// ```yaml
/// dir: /samples/drums
/// name: drums
/// keys: 2
/// start: c2
/// ref: lo
/// group: -4
/// ```
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct KitSettings {
    /// The directory where the WAV files reside.
    pub dir: Option<PathBuf>,

    /// The name of the kit.
    pub name: Option<String>,

    /// The number of keys per sample.
    pub keys: Option<u32>,

    /// The start key, either a MIDI number or a note name.
    pub start: Option<String>,

    /// Write bare file names instead of absolute paths.
    pub relative: Option<bool>,

    /// The release time. Negative values mean the sample always plays to its end.
    pub rel: Option<f32>,

    /// Play all samples at a fixed pitch.
    pub fixed: Option<bool>,

    /// The reference key policy, "lo" or "hi".
    #[serde(rename = "ref")]
    pub ref_key: Option<String>,

    /// The group value. 0 disables grouping, -n starts a new group every n samples and a
    /// positive value puts every sample into that group.
    pub group: Option<i32>,

    /// The pan value, between -1.0 and 1.0.
    pub pan: Option<f32>,

    /// A regular expression that sample file names must match.
    #[serde(rename = "match")]
    pub pattern: Option<String>,
}

impl KitSettings {
    /// Loads kit settings from a YAML profile.
    pub fn load(path: &Path) -> Result<KitSettings, ConfigError> {
        debug!(path = ?path, "Loading kit profile");
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml))
            .build()?
            .try_deserialize::<KitSettings>()?;
        Ok(settings)
    }

    /// Layers the given settings on top of these. Any value set in `overrides` wins.
    pub fn merge(self, overrides: KitSettings) -> KitSettings {
        KitSettings {
            dir: overrides.dir.or(self.dir),
            name: overrides.name.or(self.name),
            keys: overrides.keys.or(self.keys),
            start: overrides.start.or(self.start),
            relative: overrides.relative.or(self.relative),
            rel: overrides.rel.or(self.rel),
            fixed: overrides.fixed.or(self.fixed),
            ref_key: overrides.ref_key.or(self.ref_key),
            group: overrides.group.or(self.group),
            pan: overrides.pan.or(self.pan),
            pattern: overrides.pattern.or(self.pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::fs;
    use std::path::PathBuf;

    use ::config::{Config, File, FileFormat};

    use super::*;

    #[test]
    fn test_kit_settings_deserialize() {
        let yaml = r#"
            dir: /samples/drums
            name: drums
            keys: 2
            start: c2
            relative: true
            rel: -1.0
            fixed: false
            ref: LO
            group: -4
            pan: 0.5
            match: "^kick"
        "#;

        let settings: KitSettings = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(Some(PathBuf::from("/samples/drums")), settings.dir);
        assert_eq!(Some("drums".to_string()), settings.name);
        assert_eq!(Some(2), settings.keys);
        assert_eq!(Some("c2".to_string()), settings.start);
        assert_eq!(Some(true), settings.relative);
        assert_eq!(Some(-1.0), settings.rel);
        assert_eq!(Some(false), settings.fixed);
        assert_eq!(Some("LO".to_string()), settings.ref_key);
        assert_eq!(Some(-4), settings.group);
        assert_eq!(Some(0.5), settings.pan);
        assert_eq!(Some("^kick".to_string()), settings.pattern);
    }

    #[test]
    fn test_kit_settings_partial() {
        let yaml = r#"
            name: pads
        "#;

        let settings: KitSettings = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(
            KitSettings {
                name: Some("pads".to_string()),
                ..Default::default()
            },
            settings
        );
    }

    #[test]
    fn test_load() -> Result<(), Box<dyn Error>> {
        let tempdir = tempfile::tempdir()?;
        let path = tempdir.path().join("kit.yaml");
        fs::write(&path, "name: strings\nkeys: 3\n")?;

        let settings = KitSettings::load(&path)?;
        assert_eq!(Some("strings".to_string()), settings.name);
        assert_eq!(Some(3), settings.keys);
        assert_eq!(None, settings.dir);

        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let result = KitSettings::load(&tempdir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_merge() {
        let profile = KitSettings {
            name: Some("profile".to_string()),
            keys: Some(4),
            pan: Some(-0.5),
            ..Default::default()
        };
        let flags = KitSettings {
            name: Some("flags".to_string()),
            group: Some(2),
            ..Default::default()
        };

        let merged = profile.merge(flags);
        assert_eq!(Some("flags".to_string()), merged.name);
        assert_eq!(Some(4), merged.keys);
        assert_eq!(Some(-0.5), merged.pan);
        assert_eq!(Some(2), merged.group);
        assert_eq!(None, merged.ref_key);
    }
}
