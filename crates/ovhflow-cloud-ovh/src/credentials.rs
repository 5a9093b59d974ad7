//! API credential resolution
//!
//! Each value is looked up in the environment first, then in `ovh.conf`
//! files (INI). Files are read in the order `/etc/ovh.conf`, `~/.ovh.conf`,
//! `./ovh.conf`; later files override earlier ones.
//!
//! ```ini
//! [default]
//! endpoint=ovh-eu
//!
//! [ovh-eu]
//! application_key=...
//! application_secret=...
//! consumer_key=...
//! ```

use crate::endpoint::{DEFAULT_ENDPOINT, Endpoint};
use crate::error::{OvhError, Result};
use config::{Config, File, FileFormat, Value};
use std::collections::HashMap;
use std::path::PathBuf;

/// Credentials for signed API calls
#[derive(Clone)]
pub struct Credentials {
    pub endpoint: Endpoint,
    pub application_key: String,
    pub application_secret: String,
    pub consumer_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("application_key", &self.application_key)
            .field("application_secret", &"***")
            .field("consumer_key", &"***")
            .finish()
    }
}

impl Credentials {
    /// Resolve credentials from the environment and the default ovh.conf locations
    ///
    /// `endpoint` overrides both `OVH_ENDPOINT` and `[default] endpoint`.
    pub fn load(endpoint: Option<&str>) -> Result<Self> {
        Self::load_from(endpoint, &default_config_paths())
    }

    /// Resolve credentials using an explicit list of ovh.conf candidates
    pub fn load_from(endpoint: Option<&str>, paths: &[PathBuf]) -> Result<Self> {
        let sections = read_sections(paths)?;

        let endpoint_name = endpoint
            .map(str::to_string)
            .or_else(|| env_value("OVH_ENDPOINT"))
            .or_else(|| lookup(&sections, "default", "endpoint"))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Endpoint::resolve(&endpoint_name)?;

        let resolve = |key: &'static str, env: &'static str| -> Result<String> {
            env_value(env)
                .or_else(|| lookup(&sections, endpoint.name(), key))
                .ok_or(OvhError::MissingCredential { key, env })
        };

        let application_key = resolve("application_key", "OVH_APPLICATION_KEY")?;
        let application_secret = resolve("application_secret", "OVH_APPLICATION_SECRET")?;
        let consumer_key = resolve("consumer_key", "OVH_CONSUMER_KEY")?;

        tracing::debug!(endpoint = endpoint.name(), "Resolved API credentials");

        Ok(Self {
            endpoint,
            application_key,
            application_secret,
            consumer_key,
        })
    }
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/ovh.conf")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".ovh.conf"));
    }
    paths.push(PathBuf::from("ovh.conf"));
    paths
}

fn read_sections(paths: &[PathBuf]) -> Result<HashMap<String, Value>> {
    let mut builder = Config::builder();
    for path in paths {
        builder = builder
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Ini).required(false));
    }
    Ok(builder.build()?.try_deserialize()?)
}

fn lookup(sections: &HashMap<String, Value>, section: &str, key: &str) -> Option<String> {
    sections
        .get(section)?
        .clone()
        .into_table()
        .ok()?
        .remove(key)?
        .into_string()
        .ok()
        .filter(|v| !v.is_empty())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
