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

use super::checksum::verify_checksum;
use super::client::{AttohttpcClient, HttpClient, HttpResponse};
use super::options::DownloadOptions;
use crate::error::{IoContext, JdkmError, Result};
use log::debug;
use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DOWNLOAD_CHUNK_SIZE: usize = 64 * 1024;

pub trait ProgressReporter {
    fn on_start(&mut self, total_bytes: u64);

    fn on_progress(&mut self, bytes_downloaded: u64);

    fn on_complete(&mut self);
}

pub struct HttpFileDownloader {
    http_client: Box<dyn HttpClient>,
    progress_reporter: Option<Box<dyn ProgressReporter>>,
}

impl Default for HttpFileDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFileDownloader {
    pub fn new() -> Self {
        Self::with_client(Box::new(AttohttpcClient::new()))
    }

    pub fn with_client(http_client: Box<dyn HttpClient>) -> Self {
        Self {
            http_client,
            progress_reporter: None,
        }
    }

    pub fn with_progress_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    /// Download `url` to `destination`.
    ///
    /// The body is written to a temporary file next to `destination` and only
    /// renamed into place once it is complete and its checksum matches.
    pub fn download(
        &mut self,
        url: &str,
        destination: &Path,
        options: &DownloadOptions,
    ) -> Result<PathBuf> {
        let parent = destination.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).with_path("create directory", parent)?;

        self.http_client.set_timeout(options.timeout);
        let response = self.http_client.get(url)?;
        validate_response(url, response.as_ref(), options.max_size)?;
        let total_size = content_length(response.as_ref()).unwrap_or(0);

        if let Some(reporter) = &mut self.progress_reporter {
            reporter.on_start(total_size);
        }

        let temp_file = NamedTempFile::new_in(parent).with_path("create temporary file in", parent)?;
        let downloaded = self.write_body(response, temp_file.as_file(), options.max_size)?;
        debug!("Downloaded {downloaded} bytes from {url}");

        if let Some(expected_checksum) = &options.checksum {
            verify_checksum(temp_file.path(), expected_checksum)?;
        }

        temp_file
            .persist(destination)
            .map_err(|e| JdkmError::fs("move download to", destination, e.error))?;

        if let Some(reporter) = &mut self.progress_reporter {
            reporter.on_complete();
        }

        Ok(destination.to_path_buf())
    }

    fn write_body(
        &mut self,
        mut response: Box<dyn HttpResponse>,
        file: &fs::File,
        max_size: u64,
    ) -> Result<u64> {
        let mut writer = BufWriter::new(file);
        let mut downloaded = 0u64;
        let mut buffer = vec![0; DOWNLOAD_CHUNK_SIZE];

        loop {
            match response.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    downloaded += n as u64;
                    if downloaded > max_size {
                        return Err(JdkmError::Download(format!(
                            "download exceeds maximum allowed size of {max_size} bytes"
                        )));
                    }
                    writer.write_all(&buffer[..n])?;

                    if let Some(reporter) = &mut self.progress_reporter {
                        reporter.on_progress(downloaded);
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(JdkmError::Download(format!("connection interrupted: {e}")));
                }
            }
        }

        writer.flush()?;
        Ok(downloaded)
    }
}

fn validate_response(url: &str, response: &dyn HttpResponse, max_size: u64) -> Result<()> {
    let status = response.status();
    if !(200..300).contains(&status) {
        return Err(JdkmError::Download(format!("HTTP {status} from {url}")));
    }

    if let Some(length) = content_length(response) {
        if length > max_size {
            return Err(JdkmError::Download(format!(
                "download size {length} exceeds maximum allowed size {max_size}"
            )));
        }
    }

    Ok(())
}

fn content_length(response: &dyn HttpResponse) -> Option<u64> {
    response
        .header("Content-Length")
        .and_then(|value| value.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::calculate_sha256;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;
    use std::time::Duration;
    use tempfile::tempdir;

    struct MockHttpClient {
        status: u16,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    }

    impl MockHttpClient {
        fn ok(body: &[u8]) -> Self {
            Self {
                status: 200,
                headers: vec![("Content-Length".to_string(), body.len().to_string())],
                body: body.to_vec(),
            }
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, _url: &str) -> Result<Box<dyn HttpResponse>> {
            Ok(Box::new(MockHttpResponse {
                status: self.status,
                headers: self.headers.clone(),
                body: Cursor::new(self.body.clone()),
            }))
        }

        fn set_timeout(&mut self, _timeout: Duration) {}
    }

    struct MockHttpResponse {
        status: u16,
        headers: Vec<(String, String)>,
        body: Cursor<Vec<u8>>,
    }

    impl Read for MockHttpResponse {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.body.read(buf)
        }
    }

    impl HttpResponse for MockHttpResponse {
        fn status(&self) -> u16 {
            self.status
        }

        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn on_start(&mut self, total_bytes: u64) {
            self.events.borrow_mut().push(format!("start {total_bytes}"));
        }

        fn on_progress(&mut self, bytes_downloaded: u64) {
            self.events
                .borrow_mut()
                .push(format!("progress {bytes_downloaded}"));
        }

        fn on_complete(&mut self) {
            self.events.borrow_mut().push("complete".to_string());
        }
    }

    #[test]
    fn test_successful_download() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("jdk.tar.gz");
        let reporter = RecordingReporter::default();
        let events = Rc::clone(&reporter.events);

        let mut downloader =
            HttpFileDownloader::with_client(Box::new(MockHttpClient::ok(b"archive bytes")))
                .with_progress_reporter(Box::new(reporter));

        let path = downloader
            .download("http://mock/jdk", &dest, &DownloadOptions::default())
            .unwrap();

        assert_eq!(path, dest);
        assert_eq!(fs::read(&dest).unwrap(), b"archive bytes");
        assert_eq!(
            *events.borrow(),
            vec!["start 13", "progress 13", "complete"]
        );
    }

    #[test]
    fn test_download_with_matching_checksum() {
        let dir = tempdir().unwrap();
        let reference = dir.path().join("reference");
        fs::write(&reference, b"payload").unwrap();
        let checksum = calculate_sha256(&reference).unwrap();

        let dest = dir.path().join("out.zip");
        let options = DownloadOptions {
            checksum: Some(checksum),
            ..Default::default()
        };
        let mut downloader =
            HttpFileDownloader::with_client(Box::new(MockHttpClient::ok(b"payload")));

        downloader.download("http://mock/x", &dest, &options).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn test_checksum_mismatch_leaves_no_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out.zip");
        let options = DownloadOptions {
            checksum: Some("00".repeat(32)),
            ..Default::default()
        };
        let mut downloader =
            HttpFileDownloader::with_client(Box::new(MockHttpClient::ok(b"payload")));

        let result = downloader.download("http://mock/x", &dest, &options);

        assert!(matches!(result, Err(JdkmError::ChecksumMismatch { .. })));
        assert!(!dest.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_http_error_status() {
        let dir = tempdir().unwrap();
        let client = MockHttpClient {
            status: 404,
            headers: Vec::new(),
            body: Vec::new(),
        };
        let mut downloader = HttpFileDownloader::with_client(Box::new(client));

        let result = downloader.download(
            "http://mock/missing",
            &dir.path().join("x.tar.gz"),
            &DownloadOptions::default(),
        );

        match result {
            Err(JdkmError::Download(msg)) => assert!(msg.contains("404")),
            other => panic!("expected Download error, got {other:?}"),
        }
    }

    #[test]
    fn test_content_length_over_limit() {
        let dir = tempdir().unwrap();
        let client = MockHttpClient {
            status: 200,
            headers: vec![("Content-Length".to_string(), "2048".to_string())],
            body: Vec::new(),
        };
        let options = DownloadOptions {
            max_size: 1024,
            ..Default::default()
        };
        let mut downloader = HttpFileDownloader::with_client(Box::new(client));

        let result = downloader.download("http://mock/big", &dir.path().join("x.zip"), &options);
        assert!(matches!(result, Err(JdkmError::Download(_))));
    }

    #[test]
    fn test_body_over_limit_without_content_length() {
        let dir = tempdir().unwrap();
        let client = MockHttpClient {
            status: 200,
            headers: Vec::new(),
            body: vec![7u8; 4096],
        };
        let options = DownloadOptions {
            max_size: 1024,
            ..Default::default()
        };
        let mut downloader = HttpFileDownloader::with_client(Box::new(client));

        let dest = dir.path().join("x.zip");
        let result = downloader.download("http://mock/big", &dest, &options);
        assert!(matches!(result, Err(JdkmError::Download(_))));
        assert!(!dest.exists());
    }
}
