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

//! Extraction of downloaded JDK archives into a staging directory.
//!
//! Archive content is untrusted. Every entry is resolved against the
//! destination and must stay inside it after lexical cleaning.

use crate::error::{IoContext, JdkmError, Result};
use crate::paths::shared::{is_within, normalize_path};
use crate::platform::file_ops;
use log::{debug, info};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use tar::Archive as TarArchive;
use zip::ZipArchive;

/// Owner bits kept on every extracted directory so children can be written.
const OWNER_RWX: u32 = 0o700;
const PERMISSION_BITS: u32 = 0o777;
const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
}

impl ArchiveFormat {
    /// Choose the container format from the file name suffix alone.
    pub fn detect(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Ok(ArchiveFormat::TarGz)
        } else if name.ends_with(".zip") {
            Ok(ArchiveFormat::Zip)
        } else {
            Err(JdkmError::UnsupportedFormat(path.display().to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
    Other,
}

/// Extract `archive` into `destination` and return `destination/<root>`,
/// where `<root>` is the first path segment of the first entry.
pub fn extract(archive: &Path, destination: &Path) -> Result<PathBuf> {
    let format = ArchiveFormat::detect(archive)?;
    fs::create_dir_all(destination).with_path("create directory", destination)?;
    // A relative destination such as "." cleans to an empty path
    let destination =
        &std::path::absolute(destination).with_path("resolve directory", destination)?;

    debug!(
        "Extracting {} ({format:?}) into {}",
        archive.display(),
        destination.display()
    );

    let mut writer = EntryWriter::new(destination);
    match format {
        ArchiveFormat::TarGz => extract_tar_gz(archive, &mut writer)?,
        ArchiveFormat::Zip => extract_zip(archive, &mut writer)?,
    }
    writer.finish(archive)
}

fn extract_tar_gz(archive_path: &Path, writer: &mut EntryWriter) -> Result<()> {
    let file = File::open(archive_path).with_path("open archive", archive_path)?;
    let gz = flate2::read::GzDecoder::new(file);
    let mut archive = TarArchive::new(gz);

    for entry in archive.entries()? {
        let mut entry = entry?;
        let entry_path = entry.path()?.into_owned();
        let entry_type = entry.header().entry_type();
        let kind = if entry_type.is_dir() {
            EntryKind::Directory
        } else if entry_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        let mode = entry.header().mode().ok();

        writer.write(&entry_path, kind, mode, &mut entry)?;
    }

    Ok(())
}

fn extract_zip(archive_path: &Path, writer: &mut EntryWriter) -> Result<()> {
    let file = File::open(archive_path).with_path("open archive", archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        // Raw stored name; containment is enforced by the writer.
        let entry_path = PathBuf::from(file.name());
        let kind = if file.is_dir() {
            EntryKind::Directory
        } else if file.is_symlink() {
            EntryKind::Other
        } else if file.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        let mode = file.unix_mode();

        writer.write(&entry_path, kind, mode, &mut file)?;
    }

    Ok(())
}

/// Writes entries under one destination, tracking the archive root name.
struct EntryWriter {
    destination: PathBuf,
    root: Option<OsString>,
    entries: usize,
    files: usize,
    ignored: usize,
}

impl EntryWriter {
    fn new(destination: &Path) -> Self {
        Self {
            destination: normalize_path(destination),
            root: None,
            entries: 0,
            files: 0,
            ignored: 0,
        }
    }

    /// Destination for an entry, or `PathTraversal` if it would land outside.
    fn resolve(&self, entry_path: &Path) -> Result<PathBuf> {
        let escapes_root = entry_path
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
        if escapes_root {
            return Err(JdkmError::PathTraversal(entry_path.display().to_string()));
        }

        let target = self.destination.join(entry_path);
        if !is_within(&self.destination, &target) {
            return Err(JdkmError::PathTraversal(entry_path.display().to_string()));
        }
        Ok(normalize_path(&target))
    }

    fn write(
        &mut self,
        entry_path: &Path,
        kind: EntryKind,
        mode: Option<u32>,
        content: &mut dyn Read,
    ) -> Result<()> {
        let target = self.resolve(entry_path)?;

        if self.root.is_none() {
            self.root = entry_path.components().find_map(|c| match c {
                Component::Normal(name) => Some(name.to_os_string()),
                _ => None,
            });
        }

        self.entries += 1;
        if self.entries % PROGRESS_INTERVAL == 0 {
            debug!("Extracted {} entries...", self.entries);
        }

        // e.g. "./"
        if target == self.destination {
            return Ok(());
        }

        match kind {
            EntryKind::Directory => {
                fs::create_dir_all(&target).with_path("create directory", &target)?;
                if let Some(mode) = mode {
                    file_ops::set_permissions_from_mode(
                        &target,
                        (mode & PERMISSION_BITS) | OWNER_RWX,
                    )
                    .with_path("set permissions on", &target)?;
                }
            }
            EntryKind::File => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).with_path("create directory", parent)?;
                }
                remove_existing_file(&target)?;

                let mut out = File::create(&target).with_path("create file", &target)?;
                io::copy(content, &mut out).with_path("write file", &target)?;
                drop(out);

                if let Some(mode) = mode {
                    file_ops::set_permissions_from_mode(&target, mode & PERMISSION_BITS)
                        .with_path("set permissions on", &target)?;
                }
                self.files += 1;
            }
            EntryKind::Other => {
                debug!("Ignoring non-regular entry {}", entry_path.display());
                self.ignored += 1;
            }
        }

        Ok(())
    }

    fn finish(self, archive: &Path) -> Result<PathBuf> {
        let root = self
            .root
            .ok_or_else(|| JdkmError::EmptyArchive(archive.display().to_string()))?;

        info!(
            "Extracted {} entries ({} files, {} ignored) from {}",
            self.entries,
            self.files,
            self.ignored,
            archive.display()
        );
        Ok(self.destination.join(root))
    }
}

/// Read-only files left by an earlier entry would make `File::create` fail.
fn remove_existing_file(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if !metadata.is_dir() => {
            fs::remove_file(path).with_path("remove file", path)
        }
        _ => Ok(()),
    }
}
