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

use crate::error::{IoContext, Result};
use crate::paths::install::{bin_directory, is_reserved_name};
use crate::platform::{OsFamily, executable_name};
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};

const REQUIRED_TOOLS: [&str; 2] = ["java", "javac"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledVersion {
    /// Directory name, exactly as given at install time.
    pub version_id: String,
    pub path: PathBuf,
    pub valid: bool,
}

/// A directory is a JDK when `bin/java` and `bin/javac` exist, with the
/// `.exe` suffix on Windows.
pub fn is_valid_jdk(path: &Path, family: OsFamily) -> bool {
    let bin = bin_directory(path);
    REQUIRED_TOOLS
        .iter()
        .all(|tool| bin.join(executable_name(tool, family)).is_file())
}

/// Immediate subdirectories of `root` that may hold a JDK, sorted by name.
/// Links (including the active pointer) and reserved names are skipped.
pub(super) fn scan_root(root: &Path, family: OsFamily) -> Result<Vec<InstalledVersion>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut versions = Vec::new();
    for entry in fs::read_dir(root).with_path("read directory", root)? {
        let entry = entry.with_path("read directory", root)?;
        let file_type = entry.file_type().with_path("inspect", &entry.path())?;
        if !file_type.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            trace!("Skipping non UTF-8 entry {:?}", entry.file_name());
            continue;
        };
        if is_reserved_name(&name) {
            continue;
        }

        let path = entry.path();
        let valid = is_valid_jdk(&path, family);
        versions.push(InstalledVersion {
            version_id: name,
            path,
            valid,
        });
    }

    versions.sort_by(|a, b| a.version_id.cmp(&b.version_id));
    Ok(versions)
}

pub(super) fn directory_size(path: &Path) -> Result<u64> {
    let mut total_size = 0u64;

    for entry in walkdir::WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total_size += entry.metadata()?.len();
        }
    }

    Ok(total_size)
}
