//! Advisor configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//!
//! ```
//! use oss_logic::config::AdvisorConfig;
//!
//! let config = AdvisorConfig::from_toml_str("seed = 7\ntop_n = 3").unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.land_tolerance.plot, 0.2);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OssError, Result};
use crate::scoring::LandTolerance;
use crate::zones::{default_catalog, load_catalog, Zone};

/// Runtime settings for the advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisorConfig {
    /// Seed for mock live data.
    pub seed: u64,
    /// How many zones to show.
    pub top_n: usize,
    /// Where drafts are persisted.
    pub store_path: PathBuf,
    /// Custom zone catalog (JSON). `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    pub land_tolerance: LandTolerance,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            top_n: 5,
            store_path: PathBuf::from("oss-store.json"),
            catalog_path: None,
            land_tolerance: LandTolerance::default(),
        }
    }
}

impl AdvisorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                OssError::MissingConfig {
                    path: path.to_path_buf(),
                }
            } else {
                OssError::io(path, e)
            }
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(OssError::InvalidConfig {
                details: "top_n must be at least 1".into(),
            });
        }
        for (name, value) in [
            ("land_tolerance.plot", self.land_tolerance.plot),
            ("land_tolerance.catalog", self.land_tolerance.catalog),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(OssError::InvalidConfig {
                    details: format!("{name} must be in [0, 1), got {value}"),
                });
            }
        }
        Ok(())
    }

    /// The configured catalog: the custom file if set, else the built-in one.
    pub fn catalog(&self) -> Result<Vec<Zone>> {
        match &self.catalog_path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|e| OssError::io(path, e))?;
                load_catalog(&raw)
            }
            None => Ok(default_catalog()),
        }
    }
}
