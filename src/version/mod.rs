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
use crate::models::ReleaseDescriptor;
use std::fmt;
use std::str::FromStr;

mod lts;

pub use lts::is_lts;

const MAX_COMPONENTS: usize = 3;

/// A requested JDK version at one, two or three components of precision.
///
/// `17` matches every 17.x.y release, `17.0` every 17.0.y release and
/// `17.0.8` exactly one security update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionSpec {
    pub major: u32,
    pub minor: Option<u32>,
    pub security: Option<u32>,
}

impl VersionSpec {
    pub fn new(major: u32, minor: Option<u32>, security: Option<u32>) -> Self {
        Self {
            major,
            minor,
            // security without minor is not representable
            security: minor.and(security),
        }
    }

    /// Parse `<major>[.<minor>[.<security>]]`.
    ///
    /// Every component must consist of ASCII digits only, so signs, spaces,
    /// a leading `v` and suffixes such as `-ea` are rejected. A fourth
    /// component is rejected as well.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() > MAX_COMPONENTS {
            return Err(JdkmError::InvalidFormat(format!(
                "'{raw}' has {} components, at most {MAX_COMPONENTS} are allowed",
                parts.len()
            )));
        }

        let mut numbers = Vec::with_capacity(parts.len());
        for part in parts {
            numbers.push(parse_component(raw, part)?);
        }

        Ok(Self::new(
            numbers[0],
            numbers.get(1).copied(),
            numbers.get(2).copied(),
        ))
    }

    /// Number of components supplied (1, 2 or 3).
    pub fn precision(&self) -> usize {
        match (self.minor, self.security) {
            (None, _) => 1,
            (Some(_), None) => 2,
            (Some(_), Some(_)) => 3,
        }
    }

    /// Exact match on the supplied components. Not an ordering.
    pub fn matches(&self, release: &ReleaseDescriptor) -> bool {
        let data = &release.version_data;
        self.matches_components(data.major, data.minor, data.security)
    }

    pub fn matches_components(&self, major: u32, minor: u32, security: u32) -> bool {
        self.major == major
            && self.minor.is_none_or(|m| m == minor)
            && self.security.is_none_or(|s| s == security)
    }
}

fn parse_component(raw: &str, part: &str) -> Result<u32> {
    if part.is_empty() {
        return Err(JdkmError::InvalidFormat(format!(
            "'{raw}' contains an empty component"
        )));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(JdkmError::InvalidFormat(format!(
            "'{part}' in '{raw}' is not a non-negative integer"
        )));
    }
    part.parse::<u32>()
        .map_err(|_| JdkmError::InvalidFormat(format!("'{part}' in '{raw}' is too large")))
}

impl FromStr for VersionSpec {
    type Err = JdkmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
            if let Some(security) = self.security {
                write!(f, ".{security}")?;
            }
        }
        Ok(())
    }
}
