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

use crate::error::JdkmError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a JdkmError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a JdkmError) -> Self {
        let (suggestion, details) = match error {
            JdkmError::InvalidFormat(msg) => {
                let suggestion = Some(
                    "Version format should be: <major>[.<minor>[.<security>]] (e.g., '21', \
                     '17.0' or '17.0.8')."
                        .to_string(),
                );
                let details = Some(format!("Invalid format: {msg}"));
                (suggestion, details)
            }
            JdkmError::NotFound { .. } => {
                let suggestion = Some(
                    "Run 'jdkm list-remote' to see the available major versions.".to_string(),
                );
                (suggestion, None)
            }
            JdkmError::NotInstalled(version) => {
                let suggestion = Some(format!("Install it with: jdkm install {version}"));
                (suggestion, None)
            }
            JdkmError::UnsupportedFormat(name) => {
                let suggestion = Some("Supported archive formats: .tar.gz, .tgz, .zip.".to_string());
                let details = Some(format!("Archive: {name}"));
                (suggestion, details)
            }
            JdkmError::PathTraversal(entry) => {
                let suggestion = Some(
                    "The archive may have been tampered with. Nothing was installed.".to_string(),
                );
                let details = Some(format!("Offending entry: {entry}"));
                (suggestion, details)
            }
            JdkmError::VerificationFailed(_) => {
                let suggestion = Some(
                    "The archive does not contain bin/java and bin/javac. Make sure it is a JDK \
                     (not a JRE) build for this platform."
                        .to_string(),
                );
                (suggestion, None)
            }
            JdkmError::ChecksumMismatch { .. } => {
                let suggestion = Some(
                    "Try downloading again. If the problem persists, the file may be corrupted at \
                     the source."
                        .to_string(),
                );
                let details = Some(
                    "The downloaded file's checksum doesn't match the expected value.".to_string(),
                );
                (suggestion, details)
            }
            JdkmError::Download(msg) => {
                let suggestion = Some(
                    "Check your internet connection and try again. Use --timeout to increase \
                     timeout if needed."
                        .to_string(),
                );
                let details = Some(format!("Download failed: {msg}"));
                (suggestion, details)
            }
            JdkmError::CatalogFetch(_) | JdkmError::NetworkError(_) => {
                let suggestion = Some(
                    "Check your internet connection and proxy settings, then try again."
                        .to_string(),
                );
                (suggestion, None)
            }
            JdkmError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.contains("timeout")
                    || error_string.contains("Timeout")
                {
                    Some(
                        "Try increasing the timeout with --timeout or JDKM_CATALOG__TIMEOUT_SECS."
                            .to_string(),
                    )
                } else {
                    Some("Check your internet connection and try again.".to_string())
                };
                let details = Some(format!("HTTP error: {http_err}"));
                (suggestion, details)
            }
            JdkmError::ConfigError(_) => {
                let suggestion = Some(
                    "Check $JDKM_HOME/config.toml and JDKM_* environment variables.".to_string(),
                );
                (suggestion, None)
            }
            JdkmError::UnsupportedShell(_) => {
                let suggestion =
                    Some("Supported shells: bash, zsh, sh, posix, powershell, pwsh.".to_string());
                (suggestion, None)
            }
            JdkmError::FileSystem { source, .. } | JdkmError::Io(source) => {
                let suggestion = match source.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        if cfg!(unix) {
                            Some("Check the permissions of the jdkm home directory.".to_string())
                        } else {
                            Some("Run as Administrator or check file permissions.".to_string())
                        }
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                (suggestion, None)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
