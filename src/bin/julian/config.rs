use std::path::Path;

use anyhow::{Context, Result};
use julian_day::Region;
use serde::Deserialize;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "julian.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JulianConfig {
    /// Calendar reform the conversions follow.
    #[serde(default)]
    pub region: Region,

    /// Default bounds for `range` and `hist`.
    #[serde(default)]
    pub range: RangeToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_start")]
    pub start: i64,
    #[serde(default = "default_end")]
    pub end: i64,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

const fn default_start() -> i64 {
    0
}
/// One four-year Julian cycle
const fn default_end() -> i64 {
    1461
}

impl JulianConfig {
    /// Loads `path`, or `./julian.toml` if it exists, or the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// CLI `--region` overrides the file.
    pub fn with_region(mut self, region: Option<Region>) -> Self {
        if let Some(region) = region {
            self.region = region;
        }
        self
    }
}
