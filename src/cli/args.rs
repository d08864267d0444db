//! Command line argument parsing for the Rhymer CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, ConfigOverlay};
use crate::error::Result;

/// Rhymer - find rhymes, slant rhymes and vowel echoes in text
#[derive(Parser, Debug, Clone)]
#[command(name = "rhymer")]
#[command(about = "Find rhymes, slant rhymes and vowel echoes in text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RhymerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RhymerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text files (or stdin) for rhymes
    Analyze(AnalyzeArgs),

    /// Show how words are resolved to phonemes
    Phones(PhonesArgs),

    /// Print the effective configuration as JSON
    Config(ConfigArgs),
}

/// Arguments for analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text files to analyze; reads stdin when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub config: ConfigFlags,
}

/// Arguments for phoneme inspection
#[derive(Parser, Debug, Clone)]
pub struct PhonesArgs {
    /// Words to resolve
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for printing configuration
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub config: ConfigFlags,
}

/// Configuration sources shared by the commands.
///
/// Precedence, lowest first: built-in defaults, the config file, flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigFlags {
    /// JSON configuration file; missing keys keep their defaults
    #[arg(short, long, value_name = "CONFIG_FILE", env = "RHYMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cutoff for pairs of line-final words (lower = stricter)
    #[arg(long)]
    pub perfect_threshold: Option<f64>,

    /// Cutoff for pairs involving an internal word (higher = looser)
    #[arg(long)]
    pub slant_threshold: Option<f64>,

    /// Cutoff for vowel-only clusters
    #[arg(long)]
    pub assonance_threshold: Option<f64>,

    /// Disable vowel-only clusters
    #[arg(long)]
    pub no_assonance: bool,

    /// Keep common function words in the analysis
    #[arg(long)]
    pub keep_stopwords: bool,
}

impl ConfigFlags {
    /// Overlay built from the command line flags alone.
    pub fn overlay(&self) -> ConfigOverlay {
        ConfigOverlay {
            auto_analyze_on_type: None,
            perfect_threshold: self.perfect_threshold,
            slant_threshold: self.slant_threshold,
            assonance_enabled: self.no_assonance.then_some(false),
            assonance_threshold: self.assonance_threshold,
            ignore_stopwords: self.keep_stopwords.then_some(false),
        }
    }

    /// Resolve the effective configuration.
    pub fn resolve(&self) -> Result<AnalyzerConfig> {
        let file = match &self.config {
            Some(path) => ConfigOverlay::from_file(path)?,
            None => ConfigOverlay::default(),
        };
        let config = file.merge(self.overlay()).apply(AnalyzerConfig::default());
        config.validate()?;
        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
