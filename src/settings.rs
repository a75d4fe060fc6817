//! Layered runtime settings.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! `GASWATCH_*` environment variables. CLI flags override the result in
//! `main` after loading.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Theme preference; `Auto` probes the terminal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Runtime settings for the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds between automatic refreshes.
    pub refresh_secs: u64,
    pub theme: ThemePreference,
    /// Seed for the simulator and chart generator; omit for OS entropy.
    pub seed: Option<u64>,
    /// Lower bound of the gas Warning band, ppm.
    pub gas_warning: f64,
    /// Lower bound of the gas Danger band, ppm.
    pub gas_danger: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_secs: 5,
            theme: ThemePreference::Auto,
            seed: None,
            gas_warning: 70.0,
            gas_danger: 90.0,
        }
    }
}

impl Settings {
    /// Load settings from an optional file path plus the environment.
    ///
    /// With no explicit path, `gaswatch.toml` in the working directory is
    /// used when present; a missing file is not an error, a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name("gaswatch").required(false),
        };

        let settings: Settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("GASWATCH"))
            .build()
            .context("failed to read settings")?
            .try_deserialize()
            .context("invalid settings")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_secs == 0 {
            bail!("refresh_secs must be at least 1");
        }
        if self.gas_warning >= self.gas_danger {
            bail!(
                "gas_warning ({}) must be below gas_danger ({})",
                self.gas_warning,
                self.gas_danger
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_apply_without_file() {
        let settings = Settings::default();
        assert_eq!(settings.refresh_secs, 5);
        assert_eq!(settings.theme, ThemePreference::Auto);
        assert_eq!(settings.gas_warning, 70.0);
        assert_eq!(settings.gas_danger, 90.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "refresh_secs = 2\ntheme = \"dark\"\nseed = 7").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.refresh_secs, 2);
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.seed, Some(7));
        // Untouched keys keep their defaults.
        assert_eq!(settings.gas_danger, 90.0);
    }

    #[test]
    fn test_inverted_gas_bands_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "gas_warning = 95.0").unwrap();

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("gas_warning"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/gaswatch.toml"))).is_err());
    }
}
