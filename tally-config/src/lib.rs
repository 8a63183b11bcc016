//! Loader for service configuration with YAML + environment overlays.
//!
//! Sources merge in order: YAML file (optional), then `TALLY_`-prefixed
//! environment variables. `${VAR}` placeholders inside values are expanded
//! recursively before the typed config materialises, so the RapidAPI key can
//! live in the environment while the YAML file stays checked in.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Top-level runtime configuration for the follower service.
#[derive(Debug, Deserialize)]
pub struct TallyConfig {
    pub rapidapi: RapidApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Credentials for the shared RapidAPI provider gateway.
///
/// The key is identical for all three provider adapters and is loaded once at
/// process start; it is never embedded in source.
#[derive(Debug, Deserialize)]
pub struct RapidApiConfig {
    pub key: String,
}

/// HTTP boundary settings.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Origins allowed to call us cross-origin with credentials.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        // React dev server + deployed front-end
        "http://localhost:3000".into(),
        "https://followers-me.vercel.app".into(),
    ]
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct TallyConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for TallyConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TallyConfigLoader {
    /// Start with the defaults: `TALLY_`-prefixed env overrides, `__` as the
    /// nesting separator (`TALLY_RAPIDAPI__KEY` → `rapidapi.key`).
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("TALLY").separator("__"));
        Self { builder }
    }

    /// Attach a config file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a config file only if it exists, so headless deployments can
    /// rely purely on environment variables.
    pub fn with_file_if_exists<P: AsRef<Path>>(self, path: P) -> Self {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            self
        }
    }

    /// Merge an inline YAML snippet (tests, CLI overrides).
    ///
    /// ```
    /// use tally_config::TallyConfigLoader;
    ///
    /// let cfg = TallyConfigLoader::new()
    ///     .with_yaml_str("rapidapi:\n  key: \"example\"")
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.rapidapi.key, "example");
    /// assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// Values pass through a `serde_json::Value` stage first so `${VAR}`
    /// placeholders expand anywhere in the tree, arrays included.
    pub fn load(self) -> Result<TallyConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: TallyConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
