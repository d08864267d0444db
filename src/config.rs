//! Analyzer configuration.
//!
//! [`AnalyzerConfig`] carries every option that influences an analysis run.
//! It serializes as a flat JSON object with camelCase keys so a host can
//! persist it as-is:
//!
//! ```json
//! {
//!   "autoAnalyzeOnType": true,
//!   "perfectThreshold": 0.18,
//!   "slantThreshold": 0.5,
//!   "assonanceEnabled": true,
//!   "assonanceThreshold": 0.35,
//!   "ignoreStopwords": true
//! }
//! ```
//!
//! Strict parsing ([`AnalyzerConfig::from_json_str`]) requires every key.
//! Hosts that store only the options a user changed should parse a
//! [`ConfigOverlay`] instead and apply it on top of the defaults.
//!
//! # Examples
//!
//! ```
//! use rhymer::config::{AnalyzerConfig, ConfigOverlay};
//!
//! let overlay = ConfigOverlay::from_json_str(r#"{"slantThreshold": 0.6}"#).unwrap();
//! let config = overlay.apply(AnalyzerConfig::default());
//!
//! assert_eq!(config.slant_threshold, 0.6);
//! assert_eq!(config.perfect_threshold, 0.18);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RhymerError};

/// Default cutoff for pairs of line-final words.
pub const DEFAULT_PERFECT_THRESHOLD: f64 = 0.18;

/// Default cutoff for pairs involving at least one internal word.
pub const DEFAULT_SLANT_THRESHOLD: f64 = 0.50;

/// Default cutoff for vowel-only clustering.
pub const DEFAULT_ASSONANCE_THRESHOLD: f64 = 0.35;

/// Options for a rhyme analysis run.
///
/// Thresholds are distances on the 0 (identical) to 1 (unrelated) scale.
/// Values outside that range are accepted and simply make clustering
/// stricter or looser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Re-run analysis while the user types. Only meaningful to a front end.
    pub auto_analyze_on_type: bool,

    /// Cutoff applied when both words of a pair end their lines.
    pub perfect_threshold: f64,

    /// Cutoff applied when either word of a pair is line-internal.
    pub slant_threshold: f64,

    /// Whether vowel-only clusters are computed.
    pub assonance_enabled: bool,

    /// Cutoff on nucleus distance for vowel-only clusters.
    pub assonance_threshold: f64,

    /// Exclude common function words from every grouping.
    pub ignore_stopwords: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            auto_analyze_on_type: true,
            perfect_threshold: DEFAULT_PERFECT_THRESHOLD,
            slant_threshold: DEFAULT_SLANT_THRESHOLD,
            assonance_enabled: true,
            assonance_threshold: DEFAULT_ASSONANCE_THRESHOLD,
            ignore_stopwords: true,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete configuration. Every key must be present.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)
            .map_err(|e| RhymerError::config(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a complete configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Render this configuration as a flat JSON object.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Validate the configuration.
    ///
    /// Only non-finite thresholds are rejected; a NaN cutoff would make every
    /// comparison silently fail.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("perfectThreshold", self.perfect_threshold),
            ("slantThreshold", self.slant_threshold),
            ("assonanceThreshold", self.assonance_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(RhymerError::config(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Set the cutoff for line-end pairs.
    pub fn with_perfect_threshold(mut self, threshold: f64) -> Self {
        self.perfect_threshold = threshold;
        self
    }

    /// Set the cutoff for pairs involving an internal word.
    pub fn with_slant_threshold(mut self, threshold: f64) -> Self {
        self.slant_threshold = threshold;
        self
    }

    /// Enable or disable vowel-only clustering.
    pub fn with_assonance(mut self, enabled: bool) -> Self {
        self.assonance_enabled = enabled;
        self
    }

    /// Set the cutoff for vowel-only clustering.
    pub fn with_assonance_threshold(mut self, threshold: f64) -> Self {
        self.assonance_threshold = threshold;
        self
    }

    /// Include or exclude stopwords.
    pub fn with_ignore_stopwords(mut self, ignore: bool) -> Self {
        self.ignore_stopwords = ignore;
        self
    }
}

/// A partial configuration, as stored by hosts that only persist the
/// options a user touched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_analyze_on_type: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perfect_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slant_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assonance_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assonance_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_stopwords: Option<bool>,
}

impl ConfigOverlay {
    /// Parse a partial configuration. Missing keys are left unset.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RhymerError::config(format!("invalid configuration: {e}")))
    }

    /// Load a partial configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Overlay the set options onto `base`.
    pub fn apply(&self, base: AnalyzerConfig) -> AnalyzerConfig {
        AnalyzerConfig {
            auto_analyze_on_type: self
                .auto_analyze_on_type
                .unwrap_or(base.auto_analyze_on_type),
            perfect_threshold: self.perfect_threshold.unwrap_or(base.perfect_threshold),
            slant_threshold: self.slant_threshold.unwrap_or(base.slant_threshold),
            assonance_enabled: self.assonance_enabled.unwrap_or(base.assonance_enabled),
            assonance_threshold: self
                .assonance_threshold
                .unwrap_or(base.assonance_threshold),
            ignore_stopwords: self.ignore_stopwords.unwrap_or(base.ignore_stopwords),
        }
    }

    /// Later overlays win over earlier ones.
    pub fn merge(self, other: ConfigOverlay) -> ConfigOverlay {
        ConfigOverlay {
            auto_analyze_on_type: other.auto_analyze_on_type.or(self.auto_analyze_on_type),
            perfect_threshold: other.perfect_threshold.or(self.perfect_threshold),
            slant_threshold: other.slant_threshold.or(self.slant_threshold),
            assonance_enabled: other.assonance_enabled.or(self.assonance_enabled),
            assonance_threshold: other.assonance_threshold.or(self.assonance_threshold),
            ignore_stopwords: other.ignore_stopwords.or(self.ignore_stopwords),
        }
    }
}
