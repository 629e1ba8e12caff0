//! # wsmconfig - Configuration de la génération de messages WS-Management
//!
//! This crate provides the configuration layer of the workspace:
//! - An embedded default configuration (`wsman.yaml`)
//! - Merging with an external `config.yaml` when present
//! - Environment variable overrides (`WSMAN_CONFIG__SECTION__KEY=value`)
//! - Typed getters with fallbacks and persisting setters
//! - A lazily loaded global instance
//!
//! ## Usage
//!
//! ```no_run
//! use wsmconfig::get_config;
//!
//! let config = get_config();
//! let base = config.get_resource_uri_base("amt");
//! let timeout = config.get_operation_timeout();
//! config.set_operation_timeout("PT30S".to_string())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_yaml::{Mapping, Number, Value};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{info, warn};
use wsmcore::actions::{self, ANONYMOUS_ADDRESS, DEFAULT_DESTINATION, DEFAULT_TIMEOUT};

// Configuration par défaut intégrée
const DEFAULT_CONFIG: &str = include_str!("wsman.yaml");

const CONFIG_FILE: &str = "config.yaml";
const LOCAL_DIR: &str = ".wsman";
const ENV_CONFIG_DIR: &str = "WSMAN_CONFIG";
const ENV_PREFIX: &str = "WSMAN_CONFIG__";

lazy_static! {
    static ref CONFIG: Arc<Config> = Arc::new(Config::load_config("").unwrap_or_else(|err| {
        warn!(error = %err, "Failed to load WS-Management configuration, using embedded defaults");
        Config::embedded()
    }));
}

/// Macro to generate getter/setter for string values with default
macro_rules! impl_string_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> String {
            match self.get_value($path) {
                Ok(Value::String(s)) if !s.is_empty() => s,
                _ => $default.to_string(),
            }
        }

        pub fn $setter(&self, value: String) -> Result<()> {
            self.set_value($path, Value::String(value))
        }
    };
}

/// Configuration manager
///
/// Holds the merged YAML tree. Setters update the tree and, when the
/// configuration was loaded from a directory, persist it to `config.yaml`.
#[derive(Debug)]
pub struct Config {
    path: Option<PathBuf>,
    data: Mutex<Value>,
}

impl Config {
    /// Finds the config directory: argument, `WSMAN_CONFIG`, `./.wsman`, `~/.wsman`
    fn find_config_dir(directory: &str) -> PathBuf {
        if !directory.is_empty() {
            return PathBuf::from(directory);
        }

        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var = ENV_CONFIG_DIR, path = %env_path, "Using config directory from env");
            return PathBuf::from(env_path);
        }

        let local = Path::new(LOCAL_DIR);
        if local.exists() {
            return local.to_path_buf();
        }

        match home_dir() {
            Some(home) => home.join(LOCAL_DIR),
            None => local.to_path_buf(),
        }
    }

    /// Loads the configuration
    ///
    /// The embedded defaults are merged with `<dir>/config.yaml` if it exists,
    /// then environment overrides are applied. Nothing is written on load; a
    /// missing file simply means defaults.
    pub fn load_config(directory: &str) -> Result<Self> {
        let config_dir = Self::find_config_dir(directory);
        let path = config_dir.join(CONFIG_FILE);

        let mut value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;
        match fs::read(&path) {
            Ok(data) => {
                info!(config_file = %path.display(), "Loaded config file");
                let external: Value = serde_yaml::from_slice(&data)?;
                merge_yaml(&mut value, &lower_keys(external));
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(config_file = %path.display(), "Config file not found, using embedded defaults");
            }
            Err(err) => {
                return Err(anyhow!(
                    "Cannot read config file {}: {}",
                    path.display(),
                    err
                ));
            }
        }

        let mut value = lower_keys(value);
        apply_env_overrides(&mut value);

        Ok(Self {
            path: Some(path),
            data: Mutex::new(value),
        })
    }

    /// Builds an in-memory configuration from a YAML document merged over the defaults
    ///
    /// Setters on such a configuration are never persisted.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let mut value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;
        let external: Value = serde_yaml::from_str(yaml)?;
        merge_yaml(&mut value, &lower_keys(external));
        Ok(Self {
            path: None,
            data: Mutex::new(lower_keys(value)),
        })
    }

    fn embedded() -> Self {
        let value = serde_yaml::from_str(DEFAULT_CONFIG).unwrap_or(Value::Null);
        Self {
            path: None,
            data: Mutex::new(lower_keys(value)),
        }
    }

    /// Path of the backing `config.yaml`, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Saves the current configuration to `config.yaml`, creating its directory
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let yaml = {
            let data = self.lock()?;
            serde_yaml::to_string(&*data)?
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, yaml)?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Value>> {
        self.data
            .lock()
            .map_err(|_| anyhow!("Configuration lock poisoned"))
    }

    /// Sets a value at `path` (e.g. `&["wsman", "header", "destination"]`) and saves
    pub fn set_value(&self, path: &[&str], value: Value) -> Result<()> {
        {
            let mut data = self.lock()?;
            set_in(&mut data, path, value)?;
        }
        self.save()
    }

    /// Gets the value at `path`
    pub fn get_value(&self, path: &[&str]) -> Result<Value> {
        let data = self.lock()?;
        let mut current = &*data;
        for (i, key) in path.iter().enumerate() {
            let Value::Mapping(map) = current else {
                return Err(anyhow!("Path {} is not a mapping", path[..i].join(".")));
            };
            current = map
                .get(Value::String(key.to_lowercase()))
                .ok_or_else(|| anyhow!("Path {} does not exist", path[..=i].join(".")))?;
        }
        Ok(current.clone())
    }

    /// Base of resource URIs for a schema ("amt", "cim" or "ips")
    pub fn get_resource_uri_base(&self, schema: &str) -> String {
        let default = match schema {
            "cim" => actions::schema::CIM,
            "ips" => actions::schema::IPS,
            _ => actions::schema::AMT,
        };
        match self.get_value(&["wsman", "resource_uri_base", schema]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => default.to_string(),
        }
    }

    pub fn set_resource_uri_base(&self, schema: &str, base: String) -> Result<()> {
        self.set_value(&["wsman", "resource_uri_base", schema], Value::String(base))
    }

    impl_string_config!(
        get_destination,
        set_destination,
        &["wsman", "header", "destination"],
        DEFAULT_DESTINATION
    );

    impl_string_config!(
        get_reply_to,
        set_reply_to,
        &["wsman", "header", "reply_to"],
        ANONYMOUS_ADDRESS
    );

    impl_string_config!(
        get_operation_timeout,
        set_operation_timeout,
        &["wsman", "header", "operation_timeout"],
        DEFAULT_TIMEOUT
    );

    /// First MessageID of a new session
    pub fn get_first_message_id(&self) -> u64 {
        match self.get_value(&["wsman", "message_id", "first"]) {
            Ok(Value::Number(n)) => n.as_u64().unwrap_or(0),
            Ok(Value::String(s)) => s.parse().unwrap_or_else(|_| {
                warn!("Invalid first message id '{}', using 0", s);
                0
            }),
            _ => 0,
        }
    }

    pub fn set_first_message_id(&self, first: u64) -> Result<()> {
        self.set_value(
            &["wsman", "message_id", "first"],
            Value::Number(Number::from(first)),
        )
    }
}

/// Returns the global configuration instance, loaded on first access
pub fn get_config() -> Arc<Config> {
    CONFIG.clone()
}

fn set_in(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
    let Some((first, rest)) = path.split_first() else {
        *data = value;
        return Ok(());
    };
    let Value::Mapping(map) = data else {
        return Err(anyhow!("Current node is not a map"));
    };
    let key = Value::String(first.to_lowercase());
    if rest.is_empty() {
        map.insert(key, value);
        Ok(())
    } else {
        let entry = map.entry(key).or_insert(Value::Mapping(Mapping::new()));
        set_in(entry, rest, value)
    }
}

fn apply_env_overrides(config: &mut Value) {
    for (key, raw) in env::vars() {
        let Some(stripped) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let path: Vec<&str> = stripped.split("__").collect();
        let value = serde_yaml::from_str::<Value>(&raw).unwrap_or(Value::String(raw.clone()));
        if let Err(err) = set_in(config, &path, value) {
            warn!(env_var = %key, error = %err, "Ignoring configuration override");
        }
    }
}

fn lower_keys(value: Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| {
                    let k = match k {
                        Value::String(s) => Value::String(s.to_lowercase()),
                        other => other,
                    };
                    (k, lower_keys(v))
                })
                .collect(),
        ),
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(lower_keys).collect()),
        other => other,
    }
}

/// Merges `external` into `default`: mappings are merged key by key, anything else is replaced
fn merge_yaml(default: &mut Value, external: &Value) {
    match (default, external) {
        (Value::Mapping(dmap), Value::Mapping(emap)) => {
            for (k, v) in emap {
                match dmap.get_mut(k) {
                    Some(dv) => merge_yaml(dv, v),
                    None => {
                        dmap.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (d, e) => *d = e.clone(),
    }
}
