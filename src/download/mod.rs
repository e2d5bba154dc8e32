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

//! HTTP download of release archives.

mod checksum;
mod client;
mod http_file_downloader;
mod options;
mod progress;

pub use checksum::{calculate_sha256, verify_checksum};
pub use client::{AttohttpcClient, HttpClient, HttpResponse};
pub use http_file_downloader::{HttpFileDownloader, ProgressReporter};
pub use options::{DEFAULT_TIMEOUT, DownloadOptions, MAX_DOWNLOAD_SIZE};
pub use progress::IndicatifProgressReporter;

use crate::config::DownloadConfig;
use crate::error::{JdkmError, Result};
use crate::models::Artifact;
use crate::storage::ArtifactFetcher;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fetches artifacts over HTTP into the store's staging directory.
pub struct HttpArtifactFetcher {
    timeout: Duration,
    verify_checksum: bool,
    no_progress: bool,
}

impl HttpArtifactFetcher {
    pub fn new(config: &DownloadConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            verify_checksum: config.verify_checksum,
            no_progress: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }

    fn downloader(&self, artifact: &Artifact) -> HttpFileDownloader {
        let mut client = AttohttpcClient::new();
        client.set_timeout(self.timeout);

        let downloader = HttpFileDownloader::with_client(Box::new(client));
        if self.no_progress {
            downloader
        } else {
            downloader.with_progress_reporter(Box::new(IndicatifProgressReporter::new(
                &artifact.name,
            )))
        }
    }
}

impl ArtifactFetcher for HttpArtifactFetcher {
    fn fetch(&self, artifact: &Artifact, dest_dir: &Path) -> Result<PathBuf> {
        let destination = dest_dir.join(archive_file_name(artifact)?);
        let options = DownloadOptions {
            checksum: artifact
                .checksum
                .clone()
                .filter(|_| self.verify_checksum),
            timeout: self.timeout,
            max_size: MAX_DOWNLOAD_SIZE,
        };

        info!("Downloading {} from {}", artifact.name, artifact.link);
        self.downloader(artifact)
            .download(&artifact.link, &destination, &options)
    }
}

/// Local file name for a downloaded artifact. Must be a single path segment
/// because it comes from the network; the suffix selects the archive format.
pub fn archive_file_name(artifact: &Artifact) -> Result<String> {
    let candidates = [
        artifact.name.as_str(),
        artifact.link.rsplit('/').next().unwrap_or_default(),
    ];

    candidates
        .iter()
        .map(|c| c.split(['?', '#']).next().unwrap_or_default())
        .find(|c| {
            !c.is_empty()
                && *c != "."
                && *c != ".."
                && !c.contains(['/', '\\'])
                && Path::new(c).file_name().is_some()
        })
        .map(str::to_string)
        .ok_or_else(|| {
            JdkmError::Download(format!(
                "cannot derive a file name for artifact '{}'",
                artifact.name
            ))
        })
}
