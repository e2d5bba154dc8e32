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

//! Platform detection and the mapping from native identifiers to the release
//! catalog's vocabulary.
//!
//! All OS-specific branching in jdkm lives under this module.

pub mod file_ops;
pub mod symlink;

mod constants;

pub use constants::{executable_extension, executable_name, path_separator};

use std::fmt;

/// Coarse OS family used to choose link semantics and shell dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    pub fn current() -> Self {
        Self::from_native(std::env::consts::OS)
    }

    /// Anything that is not Windows is treated as Unix-like.
    pub fn from_native(os: &str) -> Self {
        if os == "windows" {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }
}

/// Target platform expressed in catalog terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this binary was compiled for, mapped to catalog names.
    pub fn current() -> Self {
        Self::from_native(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn from_native(os: &str, arch: &str) -> Self {
        Self::new(catalog_os_name(os), catalog_arch_name(arch))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Map a native OS identifier to the catalog's name. Unknown values pass through.
pub fn catalog_os_name(native: &str) -> String {
    match native {
        "linux" => "linux",
        "windows" => "windows",
        "macos" => "mac",
        other => other,
    }
    .to_string()
}

/// Map a native CPU identifier to the catalog's name. Unknown values pass through.
pub fn catalog_arch_name(native: &str) -> String {
    match native {
        "x86_64" => "x64",
        "aarch64" => "aarch64",
        other => other,
    }
    .to_string()
}
