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
use crate::config::ConfigError;
use crate::scanner::ScanError;

/// Any failure that ends a kit generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl Error {
    /// Renders the error as a single line, suitable for a one line diagnostic. Some errors,
    /// such as regex syntax errors, span several lines.
    pub fn single_line(&self) -> String {
        self.to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

#[cfg(test)]
mod test {
    use crate::config::{ConfigError, KitConfig, KitSettings};

    use super::Error;

    #[test]
    fn test_single_line() {
        let err = KitConfig::new(KitSettings {
            pattern: Some("(unclosed".to_string()),
            ..Default::default()
        })
        .map_err(Error::from)
        .expect_err("expected an invalid pattern");

        let line = err.single_line();
        assert!(!line.contains('\n'));
        assert!(line.starts_with("invalid value \"(unclosed\" for --match:"));
    }

    #[test]
    fn test_messages() {
        let err = Error::from(ConfigError::InvalidRefKey("mid".to_string()));
        assert_eq!(
            "invalid value \"mid\" for --ref, allowed are only 'lo' and 'hi'",
            err.single_line()
        );

        let err = Error::from(ConfigError::InvalidPan(1.5));
        assert_eq!(
            "invalid value 1.5 for --pan, allowed are only values between -1.0 and 1.0",
            err.single_line()
        );
    }
}
