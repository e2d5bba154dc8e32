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

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch home directory for one test, removed when dropped.
///
/// `JDKM_HOME` must be absolute, so the directory lives in the system temp
/// location rather than under `target/`.
pub struct TestHomeGuard {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestHomeGuard {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("jdkm-test-")
            .tempdir()
            .expect("Failed to create test home directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn jdkm_home(&self) -> PathBuf {
        self.dir.path().join(".jdkm")
    }

    pub fn jdks_dir(&self) -> PathBuf {
        self.jdkm_home().join("jdks")
    }

    pub fn setup_jdkm_structure(&self) -> &Self {
        fs::create_dir_all(self.jdks_dir()).expect("Failed to create jdks directory");
        self
    }

    pub fn write_config(&self, contents: &str) -> &Self {
        fs::create_dir_all(self.jdkm_home()).expect("Failed to create .jdkm directory");
        fs::write(self.jdkm_home().join("config.toml"), contents)
            .expect("Failed to write config.toml");
        self
    }
}
