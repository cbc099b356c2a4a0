use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing;

#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub policies: PoliciesConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub logbook: LogbookConfig,
}

impl CoreConfig {
    /// Load `config.toml` from `root`, falling back to defaults when the file
    /// is absent. Relative paths in the file resolve against `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("config.toml");
        let mut cfg = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str::<CoreConfig>(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        } else {
            tracing::info!(
                "No config file found at {}. Using CoreConfig::default().",
                path.display()
            );
            CoreConfig::default()
        };
        cfg.resolve_paths(root);
        Ok(cfg)
    }

    fn resolve_paths(&mut self, root: &Path) {
        self.sources.profile_path = absolutize(root, &self.sources.profile_path);
        self.sources.dictionary_path = absolutize(root, &self.sources.dictionary_path);
        self.sources.catalog_path = absolutize(root, &self.sources.catalog_path);
        self.logbook.scan_log = absolutize(root, &self.logbook.scan_log);
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            policies: PoliciesConfig::default(),
            sources: SourcesConfig::default(),
            logbook: LogbookConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesConfig {
    #[serde(default = "PoliciesConfig::default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

impl PoliciesConfig {
    fn default_fetch_timeout_ms() -> u64 {
        1500
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

impl Default for PoliciesConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: Self::default_fetch_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "SourcesConfig::default_profile_path")]
    pub profile_path: PathBuf,
    #[serde(default = "SourcesConfig::default_dictionary_path")]
    pub dictionary_path: PathBuf,
    #[serde(default = "SourcesConfig::default_catalog_path")]
    pub catalog_path: PathBuf,
}

impl SourcesConfig {
    fn default_profile_path() -> PathBuf {
        PathBuf::from("profiles.toml")
    }

    fn default_dictionary_path() -> PathBuf {
        PathBuf::from("synonyms.toml")
    }

    fn default_catalog_path() -> PathBuf {
        PathBuf::from("catalog.json")
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            profile_path: Self::default_profile_path(),
            dictionary_path: Self::default_dictionary_path(),
            catalog_path: Self::default_catalog_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogbookConfig {
    #[serde(default = "LogbookConfig::default_scan_log")]
    pub scan_log: PathBuf,
}

impl LogbookConfig {
    fn default_scan_log() -> PathBuf {
        PathBuf::from("logbook/scans.jsonl")
    }
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            scan_log: Self::default_scan_log(),
        }
    }
}

fn absolutize(root: &Path, value: &Path) -> PathBuf {
    if value.is_absolute() {
        value.to_path_buf()
    } else {
        root.join(value)
    }
}
