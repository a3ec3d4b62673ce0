//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RESUME_FIT_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::analysis::AnalyzerOptions;
use crate::constants::{
    DEFAULT_CACHE_DIR, DEFAULT_DEDUP_THRESHOLD, DEFAULT_EMBEDDING_CACHE_CAPACITY,
    DEFAULT_ENCODE_TIMEOUT_SECS, DEFAULT_EXPERIENCE_THRESHOLD, DEFAULT_HUB_ENDPOINT,
    DEFAULT_LOAD_TIMEOUT_SECS, DEFAULT_MAX_SENTENCES, DEFAULT_MODEL_NAME,
};
use crate::embedding::{DevicePreference, EmbedderConfig};
use crate::scoring::{DocumentScoring, NegativePolicy};
use crate::skills::SkillStrategy;

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RESUME_FIT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hub repository id of the embedding model.
    pub model_name: String,

    /// Local model directory. When set the hub is never contacted.
    pub model_dir: Option<PathBuf>,

    /// Directory hub downloads are cached in. Default: `./model_cache`.
    pub cache_dir: PathBuf,

    /// Hub base URL. Default: `https://huggingface.co`.
    pub hub_endpoint: String,

    /// Refuse network access; only cached files are used.
    pub offline: bool,

    pub device: DevicePreference,

    pub skill_strategy: SkillStrategy,

    /// How negative cosine similarities map to percentages.
    pub negative_policy: NegativePolicy,

    pub document_scoring: DocumentScoring,

    /// Responsibility dedup threshold. Default: `0.8`.
    pub dedup_threshold: f32,

    /// Missing-experience threshold. Default: `0.5`.
    pub experience_threshold: f32,

    /// Sentences considered per text by the quadratic stages. Default: `200`.
    pub max_sentences: usize,

    pub load_timeout: Duration,

    pub encode_timeout: Duration,

    /// Entries kept in the in-memory embedding cache. Default: `4096`.
    pub embedding_cache_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_dir: None,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            hub_endpoint: DEFAULT_HUB_ENDPOINT.to_string(),
            offline: false,
            device: DevicePreference::default(),
            skill_strategy: SkillStrategy::default(),
            negative_policy: NegativePolicy::default(),
            document_scoring: DocumentScoring::default(),
            dedup_threshold: DEFAULT_DEDUP_THRESHOLD,
            experience_threshold: DEFAULT_EXPERIENCE_THRESHOLD,
            max_sentences: DEFAULT_MAX_SENTENCES,
            load_timeout: Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS),
            encode_timeout: Duration::from_secs(DEFAULT_ENCODE_TIMEOUT_SECS),
            embedding_cache_capacity: DEFAULT_EMBEDDING_CACHE_CAPACITY,
        }
    }
}

impl Config {
    const ENV_MODEL_NAME: &'static str = "RESUME_FIT_MODEL_NAME";
    const ENV_MODEL_DIR: &'static str = "RESUME_FIT_MODEL_DIR";
    const ENV_CACHE_DIR: &'static str = "RESUME_FIT_CACHE_DIR";
    const ENV_HUB_ENDPOINT: &'static str = "RESUME_FIT_HUB_ENDPOINT";
    const ENV_OFFLINE: &'static str = "RESUME_FIT_OFFLINE";
    const ENV_DEVICE: &'static str = "RESUME_FIT_DEVICE";
    const ENV_SKILL_STRATEGY: &'static str = "RESUME_FIT_SKILL_STRATEGY";
    const ENV_NEGATIVE_POLICY: &'static str = "RESUME_FIT_NEGATIVE_POLICY";
    const ENV_DOCUMENT_SCORING: &'static str = "RESUME_FIT_DOCUMENT_SCORING";
    const ENV_DEDUP_THRESHOLD: &'static str = "RESUME_FIT_DEDUP_THRESHOLD";
    const ENV_EXPERIENCE_THRESHOLD: &'static str = "RESUME_FIT_EXPERIENCE_THRESHOLD";
    const ENV_MAX_SENTENCES: &'static str = "RESUME_FIT_MAX_SENTENCES";
    const ENV_LOAD_TIMEOUT_SECS: &'static str = "RESUME_FIT_LOAD_TIMEOUT_SECS";
    const ENV_ENCODE_TIMEOUT_SECS: &'static str = "RESUME_FIT_ENCODE_TIMEOUT_SECS";
    const ENV_EMBEDDING_CACHE: &'static str = "RESUME_FIT_EMBEDDING_CACHE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            model_name: Self::parse_string_from_env(Self::ENV_MODEL_NAME, defaults.model_name),
            model_dir: Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR),
            cache_dir: Self::parse_path_from_env(Self::ENV_CACHE_DIR, defaults.cache_dir),
            hub_endpoint: Self::parse_string_from_env(
                Self::ENV_HUB_ENDPOINT,
                defaults.hub_endpoint,
            ),
            offline: Self::parse_bool_from_env(Self::ENV_OFFLINE, defaults.offline)?,
            device: Self::parse_choice_from_env(Self::ENV_DEVICE, defaults.device)?,
            skill_strategy: Self::parse_choice_from_env(
                Self::ENV_SKILL_STRATEGY,
                defaults.skill_strategy,
            )?,
            negative_policy: Self::parse_choice_from_env(
                Self::ENV_NEGATIVE_POLICY,
                defaults.negative_policy,
            )?,
            document_scoring: Self::parse_choice_from_env(
                Self::ENV_DOCUMENT_SCORING,
                defaults.document_scoring,
            )?,
            dedup_threshold: Self::parse_number_from_env(
                Self::ENV_DEDUP_THRESHOLD,
                defaults.dedup_threshold,
            )?,
            experience_threshold: Self::parse_number_from_env(
                Self::ENV_EXPERIENCE_THRESHOLD,
                defaults.experience_threshold,
            )?,
            max_sentences: Self::parse_number_from_env(
                Self::ENV_MAX_SENTENCES,
                defaults.max_sentences,
            )?,
            load_timeout: Duration::from_secs(Self::parse_number_from_env(
                Self::ENV_LOAD_TIMEOUT_SECS,
                defaults.load_timeout.as_secs(),
            )?),
            encode_timeout: Duration::from_secs(Self::parse_number_from_env(
                Self::ENV_ENCODE_TIMEOUT_SECS,
                defaults.encode_timeout.as_secs(),
            )?),
            embedding_cache_capacity: Self::parse_number_from_env(
                Self::ENV_EMBEDDING_CACHE,
                defaults.embedding_cache_capacity,
            )?,
        })
    }

    /// Validates thresholds and paths (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            (Self::ENV_DEDUP_THRESHOLD, self.dedup_threshold),
            (Self::ENV_EXPERIENCE_THRESHOLD, self.experience_threshold),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }

        if self.max_sentences == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_MAX_SENTENCES,
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.cache_dir.exists() && !self.cache_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.cache_dir.clone(),
            });
        }

        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Embedding provider settings derived from this configuration.
    pub fn embedder_config(&self) -> EmbedderConfig {
        EmbedderConfig {
            model_name: self.model_name.clone(),
            model_dir: self.model_dir.clone(),
            cache_dir: self.cache_dir.clone(),
            hub_endpoint: self.hub_endpoint.clone(),
            offline: self.offline,
            device: self.device,
            load_timeout: self.load_timeout,
            encode_timeout: Some(self.encode_timeout),
            cache_capacity: self.embedding_cache_capacity,
            ..EmbedderConfig::default()
        }
    }

    /// Analyzer settings derived from this configuration.
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            skill_strategy: self.skill_strategy,
            negative_policy: self.negative_policy,
            document_scoring: self.document_scoring,
            dedup_threshold: self.dedup_threshold,
            experience_threshold: self.experience_threshold,
            max_sentences: self.max_sentences,
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    name: var_name,
                    value,
                    reason: "expected a boolean".to_string(),
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_number_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    name: var_name,
                    value: value.clone(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_choice_from_env<T>(var_name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr<Err = ConfigError>,
    {
        match env::var(var_name) {
            Ok(value) => value.parse(),
            Err(_) => Ok(default),
        }
    }
}
