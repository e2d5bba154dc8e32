// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{JdkmError, Result};
use crate::paths::home;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV_VAR: &str = "JDKM_HOME";
const DEFAULT_HOME_DIR: &str = ".jdkm";
const ENV_PREFIX: &str = "JDKM";

const DEFAULT_CATALOG_BASE_URL: &str = "https://api.adoptium.net/v3";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdkmConfig {
    /// Home directory the configuration was loaded from. Never read from files.
    #[serde(skip)]
    home: PathBuf,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,

    #[serde(default = "default_catalog_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_base_url(),
            timeout_secs: default_catalog_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    #[serde(default = "default_download_timeout_secs")]
    pub timeout_secs: u64,

    /// Verify SHA-256 checksums when the catalog publishes one.
    #[serde(default = "default_verify_checksum")]
    pub verify_checksum: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_download_timeout_secs(),
            verify_checksum: default_verify_checksum(),
        }
    }
}

fn default_catalog_base_url() -> String {
    DEFAULT_CATALOG_BASE_URL.to_string()
}

fn default_catalog_timeout_secs() -> u64 {
    DEFAULT_CATALOG_TIMEOUT_SECS
}

fn default_download_timeout_secs() -> u64 {
    DEFAULT_DOWNLOAD_TIMEOUT_SECS
}

fn default_verify_checksum() -> bool {
    true
}

impl JdkmConfig {
    /// Configuration with built-in defaults rooted at `home`.
    pub fn with_home(home: &Path) -> Self {
        Self {
            home: home.to_path_buf(),
            catalog: CatalogConfig::default(),
            download: DownloadConfig::default(),
        }
    }

    /// Layer built-in defaults, `<home>/config.toml` and `JDKM_*` variables.
    ///
    /// Nested keys use a double underscore, e.g. `JDKM_CATALOG__BASE_URL`.
    pub fn load(jdkm_home: &Path) -> Result<Self> {
        let config_path = jdkm_home.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
        } else {
            debug!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| JdkmError::ConfigError(format!("Failed to load configuration: {e}")))?;

        let mut loaded: JdkmConfig = settings
            .try_deserialize()
            .map_err(|e| JdkmError::ConfigError(format!("Invalid configuration: {e}")))?;
        loaded.home = jdkm_home.to_path_buf();
        Ok(loaded)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Installation root, `<home>/jdks`.
    pub fn jdks_dir(&self) -> PathBuf {
        home::jdks_dir(&self.home)
    }
}

/// Resolve the jdkm home directory and load the configuration stored there.
pub fn new_jdkm_config() -> Result<JdkmConfig> {
    let home = resolve_home()?;
    JdkmConfig::load(&home)
}

/// `$JDKM_HOME` when set to an absolute path, `~/.jdkm` otherwise.
pub fn resolve_home() -> Result<PathBuf> {
    if let Ok(value) = env::var(HOME_ENV_VAR) {
        let path = PathBuf::from(&value);
        if path.is_absolute() {
            return Ok(path);
        }
        log::warn!("{HOME_ENV_VAR} is not an absolute path ({value}), ignoring it");
    }

    dirs::home_dir()
        .map(|dir| dir.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| JdkmError::ConfigError("Unable to determine home directory".to_string()))
}
