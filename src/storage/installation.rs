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

use super::{InstallationStore, is_valid_jdk};
use crate::archive;
use crate::error::{IoContext, JdkmError, Result};
use crate::models::Artifact;
use crate::paths::install;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STAGING_PREFIX: &str = "install-";
const DOWNLOAD_SUBDIR: &str = "download";
const EXTRACT_SUBDIR: &str = "extracted";

/// Obtains the archive for an artifact.
pub trait ArtifactFetcher {
    /// Place the artifact's archive inside `dest_dir` and return its path.
    fn fetch(&self, artifact: &Artifact, dest_dir: &Path) -> Result<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(PathBuf),
    /// A valid installation already existed and `force` was not set.
    AlreadyInstalled(PathBuf),
}

impl InstallOutcome {
    pub fn path(&self) -> &Path {
        match self {
            InstallOutcome::Installed(path) | InstallOutcome::AlreadyInstalled(path) => path,
        }
    }
}

/// Per-install scratch directory under `<root>/.tmp`, on the same filesystem
/// as the root. Removed on drop together with `.tmp` once it is empty.
struct Staging {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl Staging {
    fn create(root: &Path) -> Result<Self> {
        let parent = install::ensure_temp_staging_directory(root)?;
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&parent)
            .with_path("create staging directory in", &parent)?;
        debug!("Created staging directory {}", dir.path().display());
        Ok(Self {
            path: dir.path().to_path_buf(),
            dir: Some(dir),
        })
    }

    fn subdir(&self, name: &str) -> Result<PathBuf> {
        let path = self.path.join(name);
        fs::create_dir(&path).with_path("create directory", &path)?;
        Ok(path)
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        if let Err(e) = dir.close() {
            warn!(
                "Failed to clean up staging directory {}: {e}",
                self.path.display()
            );
        }
        // fails while other installs are staging, which is fine
        if let Some(parent) = self.path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}

impl InstallationStore {
    /// Download, extract and commit `artifact` as `version_id`.
    ///
    /// Any existing directory for `version_id` is removed first. The extracted
    /// tree is moved into the root with a single rename and verified
    /// afterwards; a failed verification removes it again.
    pub fn install(
        &self,
        version_id: &str,
        artifact: &Artifact,
        force: bool,
        fetcher: &dyn ArtifactFetcher,
    ) -> Result<InstallOutcome> {
        self.install_with(version_id, force, |download_dir| {
            fetcher.fetch(artifact, download_dir)
        })
    }

    /// Same as [`InstallationStore::install`] for an archive already on disk.
    pub fn install_archive(
        &self,
        version_id: &str,
        archive_path: &Path,
        force: bool,
    ) -> Result<InstallOutcome> {
        if !archive_path.is_file() {
            return Err(JdkmError::fs(
                "read archive",
                archive_path,
                io::ErrorKind::NotFound.into(),
            ));
        }
        self.install_with(version_id, force, |_| Ok(archive_path.to_path_buf()))
    }

    fn install_with<F>(&self, version_id: &str, force: bool, obtain: F) -> Result<InstallOutcome>
    where
        F: FnOnce(&Path) -> Result<PathBuf>,
    {
        let target = self.version_path(version_id)?;

        if !force && is_valid_jdk(&target, self.family) {
            info!("{version_id} is already installed at {}", target.display());
            return Ok(InstallOutcome::AlreadyInstalled(target));
        }

        remove_existing(&target)?;

        let staging = Staging::create(&self.root)?;
        let archive_path = obtain(&staging.subdir(DOWNLOAD_SUBDIR)?)?;
        let extracted = archive::extract(&archive_path, &staging.subdir(EXTRACT_SUBDIR)?)?;

        if fs::symlink_metadata(&extracted).is_err() {
            return Err(JdkmError::VerificationFailed(format!(
                "archive root {} was not extracted",
                extracted.display()
            )));
        }

        debug!("Committing {} to {}", extracted.display(), target.display());
        fs::rename(&extracted, &target).with_path("move installation to", &target)?;

        if !is_valid_jdk(&target, self.family) {
            if let Err(e) = remove_existing(&target) {
                warn!("Failed to remove invalid installation {}: {e}", target.display());
            }
            return Err(JdkmError::VerificationFailed(format!(
                "{version_id} does not contain bin/java and bin/javac"
            )));
        }

        info!("Installed {version_id} at {}", target.display());
        Ok(InstallOutcome::Installed(target))
    }
}

fn remove_existing(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            debug!("Removing existing directory {}", path.display());
            fs::remove_dir_all(path).with_path("remove directory", path)
        }
        Ok(_) => fs::remove_file(path).with_path("remove file", path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(JdkmError::fs("inspect", path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::install::TEMP_STAGING_DIR;
    use crate::platform::{OsFamily, executable_name};
    use std::cell::Cell;
    use std::fs::File;
    use tempfile::TempDir;

    fn write_jdk_tar_gz(path: &Path, root: &str, tools: &[&str]) {
        let file = File::create(path).unwrap();
        let gz = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut builder = tar::Builder::new(gz);
        let family = OsFamily::current();

        for tool in tools {
            let data = format!("#!/bin/sh\necho {tool}\n");
            let mut header = tar::Header::new_gnu();
            header
                .set_path(format!("{root}/bin/{}", executable_name(tool, family)))
                .unwrap();
            header.set_size(data.len() as u64);
            header.set_mode(0o755);
            header.set_cksum();
            builder.append(&header, data.as_bytes()).unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap();
    }

    /// Copies a prepared archive, counting how often it is asked to.
    struct CopyFetcher {
        source: PathBuf,
        calls: Cell<usize>,
    }

    impl CopyFetcher {
        fn new(source: PathBuf) -> Self {
            Self {
                source,
                calls: Cell::new(0),
            }
        }
    }

    impl ArtifactFetcher for CopyFetcher {
        fn fetch(&self, artifact: &Artifact, dest_dir: &Path) -> Result<PathBuf> {
            self.calls.set(self.calls.get() + 1);
            let dest = dest_dir.join(&artifact.name);
            fs::copy(&self.source, &dest)?;
            Ok(dest)
        }
    }

    struct FailingFetcher;

    impl ArtifactFetcher for FailingFetcher {
        fn fetch(&self, _artifact: &Artifact, _dest_dir: &Path) -> Result<PathBuf> {
            Err(JdkmError::Download("connection reset".to_string()))
        }
    }

    fn artifact(name: &str) -> Artifact {
        Artifact {
            name: name.to_string(),
            link: format!("https://example.com/{name}"),
            size: 0,
            checksum: None,
        }
    }

    fn setup() -> (TempDir, InstallationStore, TempDir) {
        let home = TempDir::new().unwrap();
        let store = InstallationStore::open(&home.path().join("jdks")).unwrap();
        let archives = TempDir::new().unwrap();
        (home, store, archives)
    }

    #[test]
    fn test_install_then_already_installed_then_force() {
        let (_home, store, archives) = setup();
        let source = archives.path().join("jdk-17.tar.gz");
        write_jdk_tar_gz(&source, "jdk-17.0.8+7", &["java", "javac"]);
        let fetcher = CopyFetcher::new(source);
        let artifact = artifact("jdk-17.tar.gz");

        let outcome = store.install("17", &artifact, false, &fetcher).unwrap();
        let path = store.root().join("17");
        assert_eq!(outcome, InstallOutcome::Installed(path.clone()));
        assert!(store.is_installed("17"));

        let outcome = store.install("17", &artifact, false, &fetcher).unwrap();
        assert_eq!(outcome, InstallOutcome::AlreadyInstalled(path.clone()));
        assert_eq!(fetcher.calls.get(), 1);

        fs::write(path.join("marker"), b"old").unwrap();
        let outcome = store.install("17", &artifact, true, &fetcher).unwrap();
        assert_eq!(outcome, InstallOutcome::Installed(path.clone()));
        assert_eq!(fetcher.calls.get(), 2);
        assert!(!path.join("marker").exists());
    }

    #[test]
    fn test_staging_is_removed_after_success() {
        let (_home, store, archives) = setup();
        let source = archives.path().join("jdk.tar.gz");
        write_jdk_tar_gz(&source, "jdk", &["java", "javac"]);

        store.install_archive("21", &source, false).unwrap();

        assert!(!store.root().join(TEMP_STAGING_DIR).exists());
        assert!(source.exists());
    }

    #[test]
    fn test_verification_failure_leaves_no_trace() {
        let (_home, store, archives) = setup();
        let source = archives.path().join("jre.tar.gz");
        write_jdk_tar_gz(&source, "jre-17", &["java"]);

        let result = store.install_archive("17", &source, false);

        assert!(matches!(result, Err(JdkmError::VerificationFailed(_))));
        assert!(!store.root().join("17").exists());
        assert!(!store.root().join(TEMP_STAGING_DIR).exists());
        assert!(store.list_installed().unwrap().is_empty());
    }

    #[test]
    fn test_fetch_failure_leaves_no_trace() {
        let (_home, store, _archives) = setup();

        let result = store.install("11", &artifact("jdk-11.zip"), false, &FailingFetcher);

        assert!(matches!(result, Err(JdkmError::Download(_))));
        assert!(!store.root().join("11").exists());
        assert!(!store.root().join(TEMP_STAGING_DIR).exists());
    }

    #[test]
    fn test_incomplete_directory_is_replaced_without_force() {
        let (_home, store, archives) = setup();
        fs::create_dir_all(store.root().join("17").join("bin")).unwrap();
        let source = archives.path().join("jdk.tgz");
        write_jdk_tar_gz(&source, "jdk", &["java", "javac"]);

        let outcome = store.install_archive("17", &source, false).unwrap();
        assert!(matches!(outcome, InstallOutcome::Installed(_)));
        assert!(store.is_installed("17"));
    }

    #[test]
    fn test_unsupported_archive_is_rejected() {
        let (_home, store, archives) = setup();
        let source = archives.path().join("jdk.pkg");
        fs::write(&source, b"not an archive").unwrap();

        let result = store.install_archive("17", &source, false);
        assert!(matches!(result, Err(JdkmError::UnsupportedFormat(_))));
        assert!(!store.root().join(TEMP_STAGING_DIR).exists());
    }

    #[test]
    fn test_invalid_version_id_is_rejected_before_fetching() {
        let (_home, store, archives) = setup();
        let fetcher = CopyFetcher::new(archives.path().join("unused.tar.gz"));

        let result = store.install("../escape", &artifact("x.tar.gz"), false, &fetcher);

        assert!(matches!(result, Err(JdkmError::InvalidFormat(_))));
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[test]
    fn test_missing_local_archive() {
        let (_home, store, archives) = setup();
        let result = store.install_archive("17", &archives.path().join("nope.tar.gz"), false);
        assert!(matches!(result, Err(JdkmError::FileSystem { .. })));
    }

    #[test]
    fn test_outcome_path() {
        let path = PathBuf::from("/jdks/17");
        assert_eq!(InstallOutcome::Installed(path.clone()).path(), path);
        assert_eq!(InstallOutcome::AlreadyInstalled(path.clone()).path(), path);
    }
}
