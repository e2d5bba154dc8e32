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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JdkmError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    #[error("No suitable JDK found for version {version} on {os}/{arch}")]
    NotFound {
        version: String,
        os: String,
        arch: String,
    },

    #[error("JDK {0} is not installed")]
    NotInstalled(String),

    #[error("Unsupported archive format: {0}")]
    UnsupportedFormat(String),

    #[error("Archive is empty, could not determine root directory: {0}")]
    EmptyArchive(String),

    #[error("Archive entry escapes the destination directory: {0}")]
    PathTraversal(String),

    #[error("JDK installation verification failed: {0}")]
    VerificationFailed(String),

    #[error("Checksum verification failed: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Failed to fetch release catalog: {0}")]
    CatalogFetch(String),

    #[error("Failed to download JDK: {0}")]
    Download(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),

    #[error("Failed to {operation} {}: {source}", path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, JdkmError>;

impl JdkmError {
    /// Wrap an I/O error with the operation and path it happened on.
    pub fn fs(operation: &str, path: &Path, source: std::io::Error) -> Self {
        JdkmError::FileSystem {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Attach operation/path context to `std::io::Result`s.
pub trait IoContext<T> {
    fn with_path(self, operation: &str, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn with_path(self, operation: &str, path: &Path) -> Result<T> {
        self.map_err(|source| JdkmError::fs(operation, path, source))
    }
}
