//! Configuration for color operations.
//!
//! Groups the tunable parameters of the adjuster and the best contrast
//! selection so they can be kept in a JSON file and reused.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use colorops::OpsConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = OpsConfig::from_json_file(Path::new("colorops.json"))?;
//!
//! // Or use defaults
//! let config = OpsConfig::default();
//! # Ok::<(), colorops::ColorError>(())
//! ```
//!
//! # File Format
//!
//! ```json
//! {
//!   "adjustment": {
//!     "hue_offset": 0.0,
//!     "saturation_multiplier": 1.2,
//!     "contrast_multiplier": 1.0,
//!     "brightness_offset": -0.05
//!   },
//!   "contrast_candidates": ["000000", "#FFF", "rgb(0, 51, 102)"]
//! }
//! ```
//!
//! Every field is optional; missing fields take their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_CONTRAST_CANDIDATES;
use crate::{Adjustment, ColorError, Result, RgbColor};

/// Complete configuration for color operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsConfig {
    /// Hue, saturation, contrast and brightness parameters
    pub adjustment: Adjustment,

    /// Ordered candidates for best contrast selection; earlier entries win ties
    pub contrast_candidates: Vec<RgbColor>,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            adjustment: Adjustment::default(),
            contrast_candidates: default_contrast_candidates(),
        }
    }
}

/// Black, then white
pub fn default_contrast_candidates() -> Vec<RgbColor> {
    DEFAULT_CONTRAST_CANDIDATES
        .iter()
        .filter_map(|&packed| RgbColor::from_packed(packed).ok())
        .collect()
}

impl OpsConfig {
    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.contrast_candidates.is_empty() {
            return Err(ColorError::argument(
                "contrast_candidates must contain at least one color",
            ));
        }
        Ok(())
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ColorError::config("Failed to parse configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize configuration", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ColorError::config(format!("Failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        std::fs::write(path, json).map_err(|e| {
            ColorError::config(format!("Failed to write {}", path.display()), e)
        })?;
        debug!(path = %path.display(), "saved configuration");
        Ok(())
    }
}
