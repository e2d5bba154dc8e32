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

//! The installation root: one directory per installed JDK plus the active
//! pointer.
//!
//! ```text
//! <root>/
//!   17/          installed, named by the exact install-time version string
//!   21.0.1/
//!   current  ->  <root>/17
//!   .tmp/        staging for installs in progress
//! ```

mod formatting;
mod installation;
mod listing;

pub use formatting::format_size;
pub use installation::{ArtifactFetcher, InstallOutcome};
pub use listing::{InstalledVersion, is_valid_jdk};

use crate::error::{IoContext, JdkmError, Result};
use crate::paths::install::{self, ACTIVE_POINTER_NAME};
use crate::paths::shared::normalize_path;
use crate::platform::{OsFamily, file_ops, symlink};
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct InstallationStore {
    root: PathBuf,
    family: OsFamily,
}

impl InstallationStore {
    /// Open the store at `root`, creating it (owner-only on Unix) if needed.
    pub fn open(root: &Path) -> Result<Self> {
        file_ops::create_private_dir_all(root).with_path("create directory", root)?;
        debug!("Opened installation root {}", root.display());
        Ok(Self {
            root: root.to_path_buf(),
            family: OsFamily::current(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn family(&self) -> OsFamily {
        self.family
    }

    pub fn active_pointer_path(&self) -> PathBuf {
        install::active_pointer(&self.root)
    }

    /// Directory a version id maps to. The id must be a single plain segment.
    pub fn version_path(&self, version_id: &str) -> Result<PathBuf> {
        validate_version_id(version_id)?;
        Ok(install::installation_directory(&self.root, version_id))
    }

    /// Valid installations, sorted lexicographically by version id.
    pub fn list_installed(&self) -> Result<Vec<InstalledVersion>> {
        Ok(self
            .scan()?
            .into_iter()
            .filter(|version| version.valid)
            .collect())
    }

    /// Every candidate directory with its validity flag, sorted by id.
    pub fn scan(&self) -> Result<Vec<InstalledVersion>> {
        listing::scan_root(&self.root, self.family)
    }

    pub fn is_installed(&self, version_id: &str) -> bool {
        self.version_path(version_id)
            .map(|path| is_valid_jdk(&path, self.family))
            .unwrap_or(false)
    }

    pub fn resolve_path(&self, version_id: &str) -> Result<PathBuf> {
        let path = self.version_path(version_id)?;
        if is_valid_jdk(&path, self.family) {
            Ok(path)
        } else {
            Err(JdkmError::NotInstalled(version_id.to_string()))
        }
    }

    /// Remove an installed version. The active pointer is left untouched even
    /// if it refers to this version.
    pub fn uninstall(&self, version_id: &str) -> Result<()> {
        let path = self.version_path(version_id)?;
        if !path.is_dir() {
            return Err(JdkmError::NotInstalled(version_id.to_string()));
        }

        fs::remove_dir_all(&path).with_path("remove directory", &path)?;
        info!("Removed {}", path.display());
        Ok(())
    }

    /// Total size in bytes of the files of an installed version.
    pub fn installed_size(&self, version_id: &str) -> Result<u64> {
        let path = self.version_path(version_id)?;
        if !path.is_dir() {
            return Err(JdkmError::NotInstalled(version_id.to_string()));
        }
        listing::directory_size(&path)
    }

    /// Version the active pointer designates, if any.
    ///
    /// `None` when the pointer is missing, is not a link, cannot be read, or
    /// resolves outside the installation root.
    pub fn current_active(&self) -> Option<String> {
        let pointer = self.active_pointer_path();
        if !symlink::is_symlink(&pointer).unwrap_or(false) {
            return None;
        }

        let target = match symlink::read_link(&pointer) {
            Ok(target) => target,
            Err(e) => {
                debug!("Cannot read {}: {e}", pointer.display());
                return None;
            }
        };
        let target = if target.is_absolute() {
            target
        } else {
            self.root.join(target)
        };

        let root = normalize_path(&self.root);
        let target = normalize_path(&target);
        let Ok(relative) = target.strip_prefix(&root) else {
            debug!(
                "Active pointer target {} is outside {}",
                target.display(),
                root.display()
            );
            return None;
        };

        match relative.components().next() {
            Some(Component::Normal(name)) => name
                .to_str()
                .filter(|name| !install::is_reserved_name(name))
                .map(str::to_string),
            _ => None,
        }
    }
}

/// A version id names one directory directly under the root.
pub fn validate_version_id(version_id: &str) -> Result<()> {
    let reason = if version_id.is_empty() {
        Some("must not be empty")
    } else if version_id.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else if version_id == ACTIVE_POINTER_NAME {
        Some("is reserved for the active pointer")
    } else if version_id.starts_with('.') {
        Some("must not start with '.'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(JdkmError::InvalidFormat(format!(
            "version id '{version_id}' {reason}"
        ))),
        None => Ok(()),
    }
}
