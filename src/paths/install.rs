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

use crate::error::Result;
use crate::paths::home;
use crate::paths::shared::ensure_directory;
use std::path::{Path, PathBuf};

/// Name of the active pointer inside the installation root.
pub const ACTIVE_POINTER_NAME: &str = "current";
pub const TEMP_STAGING_DIR: &str = ".tmp";

pub fn installation_directory<S: AsRef<str>>(root: &Path, version_id: S) -> PathBuf {
    root.join(version_id.as_ref())
}

pub fn active_pointer(root: &Path) -> PathBuf {
    root.join(ACTIVE_POINTER_NAME)
}

pub fn temp_staging_directory(root: &Path) -> PathBuf {
    root.join(TEMP_STAGING_DIR)
}

pub fn ensure_temp_staging_directory(root: &Path) -> Result<PathBuf> {
    ensure_directory(temp_staging_directory(root))
}

pub fn bin_directory(java_home: &Path) -> PathBuf {
    java_home.join(home::BIN_DIR)
}

/// True for entries of the installation root that are never installed versions.
pub fn is_reserved_name(name: &str) -> bool {
    name == ACTIVE_POINTER_NAME || name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn installation_paths_follow_layout() {
        let root = Path::new("/opt/jdkm/jdks");

        assert_eq!(
            installation_directory(root, "17.0.8"),
            PathBuf::from("/opt/jdkm/jdks/17.0.8")
        );
        assert_eq!(
            active_pointer(root),
            PathBuf::from("/opt/jdkm/jdks/current")
        );
        assert_eq!(
            temp_staging_directory(root),
            PathBuf::from("/opt/jdkm/jdks/.tmp")
        );
        assert_eq!(
            bin_directory(Path::new("/opt/jdkm/jdks/current")),
            PathBuf::from("/opt/jdkm/jdks/current/bin")
        );
    }

    #[test]
    fn reserved_names() {
        assert!(is_reserved_name("current"));
        assert!(is_reserved_name(".tmp"));
        assert!(is_reserved_name(".hidden"));
        assert!(!is_reserved_name("21"));
    }

    #[test]
    fn ensure_staging_creates_directory() {
        let temp = TempDir::new().unwrap();
        let staging = ensure_temp_staging_directory(temp.path()).unwrap();
        assert!(staging.is_dir());
        assert_eq!(staging, temp.path().join(TEMP_STAGING_DIR));
    }
}
