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

//! Remote release catalog.
//!
//! [`ReleaseCatalog`] is the seam between the installer and the network.
//! Artifact selection itself is the pure function [`select_artifact`].

mod adoptium;

pub use adoptium::AdoptiumCatalog;

use crate::error::{JdkmError, Result};
use crate::models::{Artifact, ReleaseDescriptor};
use crate::platform::Platform;
use crate::version::VersionSpec;
use log::debug;

pub trait ReleaseCatalog {
    /// Every known major version. May include pre-releases.
    fn list_releases(&self) -> Result<Vec<ReleaseDescriptor>>;

    /// GA releases of one major version, in catalog order.
    fn feature_releases(&self, major: u32) -> Result<Vec<ReleaseDescriptor>>;

    /// The downloadable JDK archive for `spec` on `platform`.
    fn find_artifact(&self, spec: &VersionSpec, platform: &Platform) -> Result<Artifact> {
        let releases = self.feature_releases(spec.major)?;
        select_artifact(&releases, spec, platform)
    }
}

/// First JDK binary for `platform` among releases matching `spec`.
///
/// Releases are visited in the given order. OS and architecture must equal
/// the platform exactly and the image type must be `jdk`.
pub fn select_artifact(
    releases: &[ReleaseDescriptor],
    spec: &VersionSpec,
    platform: &Platform,
) -> Result<Artifact> {
    let found = releases
        .iter()
        .filter(|release| spec.matches(release))
        .flat_map(|release| release.binaries.iter())
        .find(|binary| {
            binary.is_jdk() && binary.os == platform.os && binary.architecture == platform.arch
        });

    match found {
        Some(binary) => {
            debug!(
                "Selected {} ({} bytes) for {spec} on {platform}",
                binary.package.name, binary.package.size
            );
            Ok(binary.package.clone())
        }
        None => Err(JdkmError::NotFound {
            version: spec.to_string(),
            os: platform.os.clone(),
            arch: platform.arch.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Binary, ReleaseType, VersionData};

    fn binary(os: &str, arch: &str, image_type: &str, name: &str) -> Binary {
        Binary {
            os: os.to_string(),
            architecture: arch.to_string(),
            image_type: image_type.to_string(),
            package: Artifact {
                name: name.to_string(),
                link: format!("https://example.com/{name}"),
                size: 100,
                checksum: None,
            },
        }
    }

    fn release(major: u32, minor: u32, security: u32, binaries: Vec<Binary>) -> ReleaseDescriptor {
        ReleaseDescriptor {
            version_data: VersionData {
                major,
                minor,
                security,
                build: None,
                openjdk_version: None,
            },
            release_type: ReleaseType::Ga,
            release_name: None,
            binaries,
        }
    }

    fn catalog() -> Vec<ReleaseDescriptor> {
        vec![
            release(
                17,
                0,
                9,
                vec![
                    binary("linux", "x64", "jre", "jre-17.0.9-linux.tar.gz"),
                    binary("linux", "x64", "jdk", "jdk-17.0.9-linux.tar.gz"),
                    binary("windows", "x64", "jdk", "jdk-17.0.9-windows.zip"),
                ],
            ),
            release(
                17,
                0,
                8,
                vec![
                    binary("linux", "x64", "jdk", "jdk-17.0.8-linux.tar.gz"),
                    binary("mac", "aarch64", "jdk", "jdk-17.0.8-mac.tar.gz"),
                ],
            ),
        ]
    }

    #[test]
    fn test_major_only_takes_first_matching_release() {
        let spec = VersionSpec::parse("17").unwrap();
        let artifact = select_artifact(&catalog(), &spec, &Platform::new("linux", "x64")).unwrap();
        assert_eq!(artifact.name, "jdk-17.0.9-linux.tar.gz");
    }

    #[test]
    fn test_full_precision_selects_exact_release() {
        let spec = VersionSpec::parse("17.0.8").unwrap();
        let artifact = select_artifact(&catalog(), &spec, &Platform::new("linux", "x64")).unwrap();
        assert_eq!(artifact.name, "jdk-17.0.8-linux.tar.gz");
    }

    #[test]
    fn test_falls_through_to_later_release_for_platform() {
        let spec = VersionSpec::parse("17").unwrap();
        let artifact =
            select_artifact(&catalog(), &spec, &Platform::new("mac", "aarch64")).unwrap();
        assert_eq!(artifact.name, "jdk-17.0.8-mac.tar.gz");
    }

    #[test]
    fn test_jre_is_never_selected() {
        let releases = vec![release(
            21,
            0,
            1,
            vec![binary("linux", "x64", "jre", "jre-21.tar.gz")],
        )];
        let spec = VersionSpec::parse("21").unwrap();
        let result = select_artifact(&releases, &spec, &Platform::new("linux", "x64"));
        assert!(matches!(result, Err(JdkmError::NotFound { .. })));
    }

    #[test]
    fn test_not_found_reports_request() {
        let spec = VersionSpec::parse("17.0.7").unwrap();
        let err =
            select_artifact(&catalog(), &spec, &Platform::new("linux", "x64")).unwrap_err();
        match err {
            JdkmError::NotFound { version, os, arch } => {
                assert_eq!(version, "17.0.7");
                assert_eq!(os, "linux");
                assert_eq!(arch, "x64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_platform_passes_through_to_no_match() {
        let spec = VersionSpec::parse("17").unwrap();
        let platform = Platform::from_native("haiku", "riscv64");
        assert!(select_artifact(&catalog(), &spec, &platform).is_err());
    }

    struct FixedCatalog(Vec<ReleaseDescriptor>);

    impl ReleaseCatalog for FixedCatalog {
        fn list_releases(&self) -> Result<Vec<ReleaseDescriptor>> {
            Ok(self.0.clone())
        }

        fn feature_releases(&self, major: u32) -> Result<Vec<ReleaseDescriptor>> {
            Ok(self
                .0
                .iter()
                .filter(|r| r.major() == major)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_find_artifact_default_method() {
        let catalog = FixedCatalog(catalog());
        let spec = VersionSpec::parse("17.0").unwrap();
        let artifact = catalog
            .find_artifact(&spec, &Platform::new("windows", "x64"))
            .unwrap();
        assert_eq!(artifact.name, "jdk-17.0.9-windows.zip");

        let spec = VersionSpec::parse("11").unwrap();
        assert!(
            catalog
                .find_artifact(&spec, &Platform::new("linux", "x64"))
                .is_err()
        );
    }
}
