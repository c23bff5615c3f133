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

//! The kit text format read by the playback engine.

use std::fmt;

use super::{Kit, Sample};

/// Ends every sample block.
const SAMPLE_SEPARATOR: &str = "--";

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "file {}", self.file.display())?;
        writeln!(f, "keyrange {} {}", self.key_start, self.key_end)?;
        if self.ref_key.is_set() {
            writeln!(f, "refkey {}", self.ref_key)?;
        }
        if self.fixed_pitch {
            writeln!(f, "fixedpitch")?;
        }
        if self.group > 0 {
            writeln!(f, "group {}", self.group)?;
        }
        if self.pan != 0.0 {
            writeln!(f, "pan {:.1}", self.pan)?;
        }
        // Negative release times mean note off is ignored, so there's nothing to write.
        if self.rel >= 0.0 {
            writeln!(f, "rel {:.1}", self.rel)?;
        }
        writeln!(f, "{}", SAMPLE_SEPARATOR)?;
        writeln!(f)
    }
}

impl fmt::Display for Kit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.samples.is_empty() {
            return Ok(());
        }

        writeln!(f, ";;; {}", self.name())?;
        writeln!(f)?;
        for sample in self.samples.iter() {
            write!(f, "{}", sample)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{KitConfig, KitSettings};
    use crate::kit::Kit;

    fn kit(settings: KitSettings, names: &[&str]) -> Kit {
        let config = KitConfig::new(KitSettings {
            dir: Some(PathBuf::from("/samples")),
            ..settings
        })
        .expect("valid config");
        let files = names.iter().map(|name| PathBuf::from("/samples").join(name));
        Kit::from_files(config, files)
    }

    #[test]
    fn test_empty_kit() {
        let kit = kit(KitSettings::default(), &[]);
        assert_eq!("", kit.to_string());
    }

    #[test]
    fn test_single_key_kit() {
        let kit = kit(
            KitSettings {
                name: Some("drums".to_string()),
                start: Some("60".to_string()),
                ..Default::default()
            },
            &["hat.wav", "kick.wav", "snare.wav"],
        );

        let expected = "\
;;; drums

file /samples/hat.wav
keyrange c4 c4
rel 0.1
--

file /samples/kick.wav
keyrange c#4 c#4
rel 0.1
--

file /samples/snare.wav
keyrange d4 d4
rel 0.1
--

";
        assert_eq!(expected, kit.to_string());
    }

    #[test]
    fn test_multi_key_kit() {
        let kit = kit(
            KitSettings {
                name: Some("drums".to_string()),
                keys: Some(4),
                start: Some("60".to_string()),
                ..Default::default()
            },
            &["hat.wav", "kick.wav", "snare.wav"],
        );

        let expected = "\
;;; drums

file /samples/hat.wav
keyrange c4 d#4
refkey c#4
rel 0.1
--

file /samples/kick.wav
keyrange e4 g4
refkey f4
rel 0.1
--

file /samples/snare.wav
keyrange g#4 b4
refkey a4
rel 0.1
--

";
        assert_eq!(expected, kit.to_string());
    }

    #[test]
    fn test_all_attributes() {
        let kit = kit(
            KitSettings {
                name: Some("pads".to_string()),
                keys: Some(2),
                start: Some("c2".to_string()),
                relative: Some(true),
                rel: Some(1.5),
                fixed: Some(true),
                group: Some(-2),
                pan: Some(-0.5),
                ..Default::default()
            },
            &["a.wav", "b.wav", "c.wav"],
        );

        let expected = "\
;;; pads

file a.wav
keyrange c2 c#2
fixedpitch
group 1
pan -0.5
rel 1.5
--

file b.wav
keyrange d2 d#2
fixedpitch
group 1
pan -0.5
rel 1.5
--

file c.wav
keyrange e2 f2
fixedpitch
group 2
pan -0.5
rel 1.5
--

";
        assert_eq!(expected, kit.to_string());
    }

    #[test]
    fn test_release_boundaries() {
        let infinite = kit(
            KitSettings {
                rel: Some(-1.0),
                ..Default::default()
            },
            &["a.wav"],
        );
        assert!(!infinite.to_string().contains("rel "));

        let zero = kit(
            KitSettings {
                rel: Some(0.0),
                ..Default::default()
            },
            &["a.wav"],
        );
        assert!(zero.to_string().contains("\nrel 0.0\n"));
    }

    #[test]
    fn test_fixed_group_and_pan() {
        let kit = kit(
            KitSettings {
                group: Some(5),
                pan: Some(1.0),
                ..Default::default()
            },
            &["a.wav", "b.wav"],
        );
        let text = kit.to_string();
        assert_eq!(2, text.matches("\ngroup 5\n").count());
        assert_eq!(2, text.matches("\npan 1.0\n").count());
        assert!(text.starts_with(";;; mkkitgen\n\n"));
    }

    #[test]
    fn test_render_is_stable() {
        let kit = kit(
            KitSettings {
                keys: Some(3),
                group: Some(-1),
                ..Default::default()
            },
            &["a.wav", "b.wav", "c.wav"],
        );
        assert_eq!(kit.to_string(), kit.to_string());
    }
}
