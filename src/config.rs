//! Runtime configuration.
//!
//! The config file is optional: a missing file means built-in defaults,
//! and every field has a default so a partial file is fine. A file that
//! exists but fails to parse or validate is a hard error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the guideline CSV tables (with a `stacks/`
    /// subdirectory for stack tables).
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Default result limit when the CLI doesn't pass one.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// BM25 term-frequency saturation.
    #[serde(default = "default_k1")]
    pub k1: f64,
    /// BM25 length-normalization strength.
    #[serde(default = "default_b")]
    pub b: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            k1: default_k1(),
            b: default_b(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_max_results() -> usize {
    3
}
fn default_k1() -> f64 {
    crate::bm25::DEFAULT_K1
}
fn default_b() -> f64 {
    crate::bm25::DEFAULT_B
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.retrieval.max_results < 1 {
        anyhow::bail!("retrieval.max_results must be >= 1");
    }
    if config.retrieval.k1 <= 0.0 {
        anyhow::bail!("retrieval.k1 must be > 0");
    }
    if !(0.0..=1.0).contains(&config.retrieval.b) {
        anyhow::bail!("retrieval.b must be in [0.0, 1.0]");
    }

    Ok(config)
}
