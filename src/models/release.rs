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

//! Release catalog records as reported by the Adoptium v3 API.

use serde::{Deserialize, Serialize};

/// Image kind of a full development kit. Runtime-only images are `jre`.
pub const JDK_IMAGE_TYPE: &str = "jdk";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    #[default]
    Ga,
    Ea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionData {
    pub major: u32,
    #[serde(default)]
    pub minor: u32,
    #[serde(default)]
    pub security: u32,
    #[serde(default)]
    pub build: Option<u32>,
    #[serde(default)]
    pub openjdk_version: Option<String>,
}

impl VersionData {
    /// Version known only by its major number; minor and security are 0.
    pub fn major_only(major: u32) -> Self {
        Self {
            major,
            minor: 0,
            security: 0,
            build: None,
            openjdk_version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    pub version_data: VersionData,
    #[serde(default)]
    pub release_type: ReleaseType,
    #[serde(default)]
    pub release_name: Option<String>,
    #[serde(default)]
    pub binaries: Vec<Binary>,
}

impl ReleaseDescriptor {
    pub fn major_only(major: u32, release_type: ReleaseType) -> Self {
        Self {
            version_data: VersionData::major_only(major),
            release_type,
            release_name: None,
            binaries: Vec::new(),
        }
    }

    pub fn major(&self) -> u32 {
        self.version_data.major
    }

    pub fn is_prerelease(&self) -> bool {
        self.release_type == ReleaseType::Ea
    }
}

/// One platform-specific build of a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binary {
    pub os: String,
    pub architecture: String,
    pub image_type: String,
    pub package: Artifact,
}

impl Binary {
    pub fn is_jdk(&self) -> bool {
        self.image_type == JDK_IMAGE_TYPE
    }
}

/// A downloadable archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub link: String,
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive, when published.
    #[serde(default)]
    pub checksum: Option<String>,
}
