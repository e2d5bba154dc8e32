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

//! Inspection of the active pointer link.
//!
//! Junctions created by `mklink /J` report as symlinks through
//! `symlink_metadata` on Windows, so the same code serves both families.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whether `path` itself (not its target) is a symbolic link.
///
/// Returns `Ok(false)` when nothing exists at `path`.
pub fn is_symlink(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(metadata) => Ok(metadata.file_type().is_symlink()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Read the target of a link, without the `\\?\` prefix Windows adds to
/// junction targets.
pub fn read_link(path: &Path) -> io::Result<PathBuf> {
    fs::read_link(path).map(strip_verbatim_prefix)
}

#[cfg(windows)]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    const VERBATIM: &str = r"\\?\";
    let stripped = path
        .to_str()
        .and_then(|s| s.strip_prefix(VERBATIM))
        .filter(|s| !s.starts_with("UNC"))
        .map(PathBuf::from);
    stripped.unwrap_or(path)
}

#[cfg(not(windows))]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    path
}

/// Create a directory symlink at `link` pointing to `target`.
#[cfg(unix)]
pub fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path_is_not_symlink() {
        let temp = TempDir::new().unwrap();
        assert!(!is_symlink(&temp.path().join("nothing")).unwrap());
    }

    #[test]
    fn test_regular_file_is_not_symlink() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("current");
        fs::write(&file, "17").unwrap();
        assert!(!is_symlink(&file).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_detection() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("17");
        fs::create_dir(&target).unwrap();
        let link = temp.path().join("current");
        create_dir_symlink(&target, &link).unwrap();

        assert!(is_symlink(&link).unwrap());
        assert_eq!(read_link(&link).unwrap(), target);
    }
}
