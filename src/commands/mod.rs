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

pub mod current;
pub mod deactivate;
pub mod install;
pub mod list;
pub mod list_remote;
pub mod uninstall;
pub mod use_version;

use crate::activation::{JAVA_HOME_VAR, ShellDialect};
use crate::config::JdkmConfig;
use crate::error::Result;
use crate::paths::install::is_reserved_name;
use crate::paths::shared::normalize_path;
use crate::platform::OsFamily;
use crate::storage::InstallationStore;
use std::env;
use std::path::{Component, Path, PathBuf};

pub(crate) fn open_store(config: &JdkmConfig) -> Result<InstallationStore> {
    InstallationStore::open(&config.jdks_dir())
}

/// Dialect named by `--shell`, or the one native to this OS.
pub(crate) fn shell_dialect(shell: Option<&str>) -> Result<ShellDialect> {
    match shell {
        Some(name) => ShellDialect::from_name(name),
        None => Ok(ShellDialect::from_family(OsFamily::current())),
    }
}

pub(crate) fn java_home_env() -> Option<PathBuf> {
    env::var_os(JAVA_HOME_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Installed version a `JAVA_HOME` value refers to, either through the active
/// pointer or directly. Only used for display.
pub(crate) fn java_home_version(store: &InstallationStore, java_home: &Path) -> Option<String> {
    let java_home = normalize_path(java_home);
    if java_home == normalize_path(&store.active_pointer_path()) {
        return store.current_active();
    }

    let relative = java_home
        .strip_prefix(normalize_path(store.root()))
        .ok()?;
    match relative.components().next() {
        Some(Component::Normal(name)) => name
            .to_str()
            .filter(|name| !is_reserved_name(name))
            .map(str::to_string),
        _ => None,
    }
}
