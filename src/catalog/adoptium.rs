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

use crate::catalog::ReleaseCatalog;
use crate::config::CatalogConfig;
use crate::error::{JdkmError, Result};
use crate::models::{ReleaseDescriptor, ReleaseType};
use crate::user_agent;
use attohttpc::{ProxySettings, Session, StatusCode};
use log::{debug, trace};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Upper bound on pre-release majors listed past the newest GA.
const MAX_PRERELEASE_MAJORS: u32 = 8;

#[derive(Debug, Deserialize)]
struct AvailableReleases {
    available_releases: Vec<u32>,
    #[serde(default)]
    most_recent_feature_release: Option<u32>,
    #[serde(default)]
    tip_version: Option<u32>,
}

impl AvailableReleases {
    /// GA majors as listed, plus unreleased majors up to the tip as pre-releases.
    fn into_descriptors(self) -> Vec<ReleaseDescriptor> {
        let mut releases: Vec<ReleaseDescriptor> = self
            .available_releases
            .iter()
            .map(|&major| ReleaseDescriptor::major_only(major, ReleaseType::Ga))
            .collect();

        let newest_ga = self
            .most_recent_feature_release
            .or_else(|| self.available_releases.iter().copied().max());
        if let (Some(newest_ga), Some(tip)) = (newest_ga, self.tip_version) {
            let last = tip.min(newest_ga.saturating_add(MAX_PRERELEASE_MAJORS));
            for major in newest_ga.saturating_add(1)..=last {
                if !self.available_releases.contains(&major) {
                    releases.push(ReleaseDescriptor::major_only(major, ReleaseType::Ea));
                }
            }
        }

        releases
    }
}

/// Eclipse Adoptium v3 API client.
#[derive(Debug, Clone)]
pub struct AdoptiumCatalog {
    session: Session,
    base_url: String,
}

impl AdoptiumCatalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    pub fn with_base_url(base_url: String) -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::catalog_client());
        session.header("Accept", "application/json");
        session.timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        session.proxy_settings(ProxySettings::from_env());

        Self {
            session,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.timeout(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body. `Ok(None)` on 404.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");

        let response = self
            .session
            .get(&url)
            .send()
            .map_err(|e| JdkmError::CatalogFetch(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("{url} returned 404");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(JdkmError::CatalogFetch(format!(
                "HTTP {} from {url}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let body = response.text().map_err(|e| {
            JdkmError::CatalogFetch(format!("failed to read response from {url}: {e}"))
        })?;
        trace!("Response body: {body}");

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| JdkmError::CatalogFetch(format!("invalid response from {url}: {e}")))
    }
}

impl ReleaseCatalog for AdoptiumCatalog {
    fn list_releases(&self) -> Result<Vec<ReleaseDescriptor>> {
        let available: AvailableReleases =
            self.get_json("/info/available_releases")?.ok_or_else(|| {
                JdkmError::CatalogFetch("release list endpoint not found".to_string())
            })?;
        Ok(available.into_descriptors())
    }

    fn feature_releases(&self, major: u32) -> Result<Vec<ReleaseDescriptor>> {
        let releases: Option<Vec<ReleaseDescriptor>> =
            self.get_json(&format!("/assets/feature_releases/{major}/ga"))?;
        let releases = releases.unwrap_or_default();
        debug!("Catalog returned {} releases for {major}", releases.len());
        Ok(releases)
    }
}
