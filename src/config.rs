//! Settings store and config file loading.
//!
//! Settings are named string values, the way host editors usually expose
//! user variables. The highlighter reads two of them:
//!
//! - `paren-hl-max-line-length`: scan cutoff in columns (default 500)
//! - `paren-hl-highlight-bg`: optional `#RRGGBB` background for highlights
//!
//! A TOML file can seed them:
//!
//! ```toml
//! [paren_hl]
//! max_line_length = 800
//! highlight_bg = "#3a3a5c"
//! ```

use crate::error::{Error, Result};
use crate::log::{LogLevel, emit_log_with};
use crate::scan::DEFAULT_MAX_LINE_WIDTH;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Setting holding the scan cutoff in display columns.
pub const MAX_LINE_LENGTH_SETTING: &str = "paren-hl-max-line-length";

/// Setting holding the highlight background color.
pub const HIGHLIGHT_BG_SETTING: &str = "paren-hl-highlight-bg";

/// A named-value configuration store.
pub trait ConfigStore {
    /// Raw value of a setting.
    fn get(&self, name: &str) -> Option<&str>;

    /// Set or replace a setting.
    fn set(&mut self, name: &str, value: &str);

    /// Value of a setting parsed as an integer.
    ///
    /// `Ok(None)` when the setting is absent.
    fn get_int(&self, name: &str) -> Result<Option<i64>> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidSetting {
                name: name.to_string(),
                value: raw.to_string(),
            })
    }
}

/// In-memory settings, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut settings = Self::new();
        settings.apply(&file.paren_hl);
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        emit_log_with(LogLevel::Debug, || {
            format!("loaded {} bytes of config from {}", contents.len(), path.display())
        });
        Self::from_toml_str(&contents)
    }

    /// Remove a setting, returning its old value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn apply(&mut self, section: &ParenHlSection) {
        if let Some(max) = section.max_line_length {
            self.set(MAX_LINE_LENGTH_SETTING, &max.to_string());
        }
        if let Some(bg) = &section.highlight_bg {
            self.set(HIGHLIGHT_BG_SETTING, bg);
        }
    }
}

impl ConfigStore for Settings {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    paren_hl: ParenHlSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParenHlSection {
    max_line_length: Option<u32>,
    highlight_bg: Option<String>,
}

/// Seed missing settings with their defaults. Existing values are kept.
pub fn ensure_defaults<S>(store: &mut S)
where
    S: ConfigStore + ?Sized,
{
    if store.get(MAX_LINE_LENGTH_SETTING).is_none() {
        store.set(MAX_LINE_LENGTH_SETTING, &DEFAULT_MAX_LINE_WIDTH.to_string());
    }
}

/// The scan cutoff currently configured.
///
/// Missing or non-integer values fall back to the default. Negative values
/// clamp to 0, which makes every non-blank line abort the scan.
#[must_use]
pub fn max_line_width<S>(store: &S) -> usize
where
    S: ConfigStore + ?Sized,
{
    match store.get_int(MAX_LINE_LENGTH_SETTING) {
        Ok(Some(value)) => usize::try_from(value.max(0)).unwrap_or(usize::MAX),
        Ok(None) => DEFAULT_MAX_LINE_WIDTH,
        Err(err) => {
            emit_log_with(LogLevel::Warn, || {
                format!("{err}; using {DEFAULT_MAX_LINE_WIDTH}")
            });
            DEFAULT_MAX_LINE_WIDTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_ensure_defaults_fills_missing() {
        let mut settings = Settings::new();
        ensure_defaults(&mut settings);
        assert_eq!(settings.get(MAX_LINE_LENGTH_SETTING), Some("500"));
    }

    #[test]
    fn test_ensure_defaults_keeps_existing() {
        let mut settings = Settings::new();
        settings.set(MAX_LINE_LENGTH_SETTING, "80");
        ensure_defaults(&mut settings);
        assert_eq!(settings.get(MAX_LINE_LENGTH_SETTING), Some("80"));
    }

    #[test]
    fn test_max_line_width_parsing() {
        let mut settings = Settings::new();
        assert_eq!(max_line_width(&settings), DEFAULT_MAX_LINE_WIDTH);

        settings.set(MAX_LINE_LENGTH_SETTING, " 120 ");
        assert_eq!(max_line_width(&settings), 120);

        settings.set(MAX_LINE_LENGTH_SETTING, "-3");
        assert_eq!(max_line_width(&settings), 0);

        settings.set(MAX_LINE_LENGTH_SETTING, "wide");
        assert_eq!(max_line_width(&settings), DEFAULT_MAX_LINE_WIDTH);
    }

    #[test]
    fn test_get_int_error() {
        let mut settings = Settings::new();
        settings.set(MAX_LINE_LENGTH_SETTING, "12px");
        let err = settings.get_int(MAX_LINE_LENGTH_SETTING).unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { ref value, .. } if value == "12px"));
        assert!(settings.get_int("missing").unwrap().is_none());
    }

    #[test]
    fn test_from_toml_str() {
        let settings = Settings::from_toml_str(
            r##"
[paren_hl]
max_line_length = 800
highlight_bg = "#3a3a5c"
"##,
        )
        .unwrap();
        assert_eq!(settings.get(MAX_LINE_LENGTH_SETTING), Some("800"));
        assert_eq!(settings.get(HIGHLIGHT_BG_SETTING), Some("#3a3a5c"));
        assert_eq!(settings.iter().count(), 2);
    }

    #[test]
    fn test_from_toml_str_empty_and_other_tables() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::new());
        let settings = Settings::from_toml_str("[editor]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(settings.iter().count(), 0);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_values() {
        let err = Settings::from_toml_str("[paren_hl]\nmax_line_length = \"lots\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Settings::from_toml_str("[paren_hl]\nmax_width = 3\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Settings::from_toml_str("[paren_hl\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[paren_hl]\nmax_line_length = 64").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(max_line_width(&settings), 64);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_remove() {
        let mut settings = Settings::new();
        ensure_defaults(&mut settings);
        assert_eq!(settings.remove(MAX_LINE_LENGTH_SETTING).as_deref(), Some("500"));
        assert_eq!(settings.get(MAX_LINE_LENGTH_SETTING), None);
    }
}
