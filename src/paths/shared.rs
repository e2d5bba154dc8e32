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
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Ensure the provided path exists, returning it on success.
pub fn ensure_directory(path: PathBuf) -> Result<PathBuf> {
    fs::create_dir_all(&path).map_err(|error| {
        JdkmError::ConfigError(format!(
            "Failed to create directory {}: {error}",
            path.display()
        ))
    })?;
    Ok(path)
}

/// Lexically clean a path: drop `.` segments and resolve `..` against the
/// preceding segment. The filesystem is never consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                let leading_parent = matches!(
                    normalized.components().next_back(),
                    None | Some(Component::ParentDir)
                );
                if leading_parent && !normalized.has_root() {
                    normalized.push("..");
                } else {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Whether `candidate` lies inside `base` (or is `base` itself) after
/// lexical cleaning of both.
pub fn is_within(base: &Path, candidate: &Path) -> bool {
    let base = normalize_path(base);
    let candidate = normalize_path(candidate);

    // Empty after cleaning means the current directory
    if base.as_os_str().is_empty() {
        return !candidate.has_root()
            && !matches!(
                candidate.components().next(),
                Some(Component::ParentDir | Component::Prefix(_))
            );
    }

    candidate.starts_with(&base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_removes_dot_segments() {
        assert_eq!(
            normalize_path(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_path(Path::new("/a/b/..")), PathBuf::from("/a"));
        assert_eq!(normalize_path(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(
            normalize_path(Path::new("a/../../../x")),
            PathBuf::from("../../x")
        );
    }

    #[test]
    fn containment_is_lexical() {
        let base = Path::new("/dest");
        assert!(is_within(base, Path::new("/dest/jdk/bin")));
        assert!(is_within(base, Path::new("/dest/./jdk")));
        assert!(is_within(base, Path::new("/dest")));
        assert!(!is_within(base, Path::new("/dest/../etc/passwd")));
        assert!(!is_within(base, Path::new("/destination")));
    }

    #[test]
    fn containment_in_current_directory() {
        for base in [Path::new("."), Path::new("a/.."), Path::new("")] {
            assert!(is_within(base, Path::new("./jdk/bin")), "{base:?}");
            assert!(is_within(base, &base.join("jdk")), "{base:?}");
            assert!(!is_within(base, &base.join("../escaped.txt")), "{base:?}");
            assert!(!is_within(base, Path::new("/etc/passwd")), "{base:?}");
        }
        assert!(is_within(Path::new("../a"), Path::new("../a/b")));
        assert!(!is_within(Path::new("../a"), Path::new("../a/../b")));
    }
}
