use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TelarError};
use crate::progress::RetryConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assessment: AssessmentConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Config {
    /// Layered load: defaults, then the global config file, then the
    /// project-local `telar.toml`, then environment overrides. An explicit
    /// path (flag or `TELAR_CONFIG`) replaces the file layers entirely.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TELAR_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(Path::new("telar.toml"))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("telar/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| TelarError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| TelarError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.assessment {
            self.assessment.merge(patch);
        }
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
        if let Some(patch) = patch.remote {
            self.remote.merge(patch);
        }
        if let Some(patch) = patch.extraction {
            self.extraction.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("TELAR_LANG") {
            self.assessment.language = value;
        }
        if let Some(value) = env_string("TELAR_MODE") {
            self.assessment.mode = value;
        }
        if let Some(value) = env_string("TELAR_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = env_bool("TELAR_REMOTE_ENABLED") {
            self.remote.enabled = value;
        }
        if let Some(value) = env_string("TELAR_REMOTE_URL") {
            self.remote.base_url = value;
        }
        if let Some(value) = env_bool("TELAR_EXTRACTION_ENABLED") {
            self.extraction.enabled = value;
        }
        if let Some(value) = env_string("TELAR_EXTRACTION_URL") {
            self.extraction.endpoint = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub remote_flush_every: usize,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            language: "es".to_string(),
            mode: "full".to_string(),
            remote_flush_every: 3,
        }
    }
}

impl AssessmentConfig {
    fn merge(&mut self, patch: AssessmentPatch) {
        if let Some(value) = patch.language {
            self.language = value;
        }
        if let Some(value) = patch.mode {
            self.mode = value;
        }
        if let Some(value) = patch.remote_flush_every {
            self.remote_flush_every = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Progress store root. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.data_dir {
            self.data_dir = Some(value);
        }
    }

    /// Resolve the progress directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("telar/progress"))
            .ok_or_else(|| TelarError::MissingConfig("data directory not found".to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub base_url: String,
    /// Environment variable holding the bearer token.
    #[serde(default)]
    pub token_env: String,
    #[serde(default)]
    pub max_attempts: u32,
    #[serde(default)]
    pub base_delay_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.telar.app/telar/server".to_string(),
            token_env: "TELAR_REMOTE_TOKEN".to_string(),
            max_attempts: 3,
            base_delay_ms: 1_000,
        }
    }
}

impl RemoteConfig {
    fn merge(&mut self, patch: RemotePatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.base_url {
            self.base_url = value;
        }
        if let Some(value) = patch.token_env {
            self.token_env = value;
        }
        if let Some(value) = patch.max_attempts {
            self.max_attempts = value;
        }
        if let Some(value) = patch.base_delay_ms {
            self.base_delay_ms = value;
        }
    }

    pub fn token(&self) -> Result<String> {
        std::env::var(&self.token_env)
            .map_err(|_| TelarError::MissingConfig(format!("{} is not set", self.token_env)))
    }

    #[must_use]
    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.base_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Extraction endpoint; falls back to the remote base URL.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ExtractionConfig {
    fn merge(&mut self, patch: ExtractionPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.endpoint {
            self.endpoint = Some(value);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub assessment: Option<AssessmentPatch>,
    pub storage: Option<StoragePatch>,
    pub remote: Option<RemotePatch>,
    pub extraction: Option<ExtractionPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AssessmentPatch {
    pub language: Option<String>,
    pub mode: Option<String>,
    pub remote_flush_every: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RemotePatch {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub token_env: Option<String>,
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ExtractionPatch {
    pub enabled: Option<bool>,
    pub endpoint: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
