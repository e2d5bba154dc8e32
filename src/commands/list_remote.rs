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

use crate::catalog::{AdoptiumCatalog, ReleaseCatalog};
use crate::commands::open_store;
use crate::config::JdkmConfig;
use crate::error::Result;
use crate::models::ReleaseDescriptor;
use crate::version::{VersionSpec, is_lts};
use comfy_table::{Cell, Color, Table};
use log::{debug, info};
use std::collections::BTreeSet;

pub struct ListRemoteCommand<'a> {
    config: &'a JdkmConfig,
}

impl<'a> ListRemoteCommand<'a> {
    pub fn new(config: &'a JdkmConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, all: bool, lts_only: bool) -> Result<()> {
        info!("Fetching available releases");
        let catalog = AdoptiumCatalog::new(&self.config.catalog);
        let releases = filter_releases(catalog.list_releases()?, all, lts_only);
        debug!("{} releases after filtering", releases.len());

        if releases.is_empty() {
            println!("No matching releases found");
            return Ok(());
        }

        let installed_majors: BTreeSet<u32> = open_store(self.config)?
            .list_installed()?
            .iter()
            .filter_map(|version| VersionSpec::parse(&version.version_id).ok())
            .map(|spec| spec.major)
            .collect();

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("Version"),
            Cell::new("Support"),
            Cell::new("Status"),
            Cell::new("Installed"),
        ]);

        for release in &releases {
            let major = release.major();
            let support = if is_lts(major) {
                Cell::new("LTS").fg(Color::Green)
            } else {
                Cell::new("-").fg(Color::DarkGrey)
            };
            let status = if release.is_prerelease() {
                Cell::new("pre-release").fg(Color::Yellow)
            } else {
                Cell::new("GA").fg(Color::Green)
            };
            let installed = if installed_majors.contains(&major) {
                Cell::new("yes")
            } else {
                Cell::new("")
            };
            table.add_row(vec![Cell::new(major), support, status, installed]);
        }

        println!("{table}");
        Ok(())
    }
}

/// Newest first. Pre-releases only with `all`; `lts_only` keeps LTS majors.
fn filter_releases(
    mut releases: Vec<ReleaseDescriptor>,
    all: bool,
    lts_only: bool,
) -> Vec<ReleaseDescriptor> {
    releases.retain(|release| {
        (all || !release.is_prerelease()) && (!lts_only || is_lts(release.major()))
    });
    releases.sort_by(|a, b| b.major().cmp(&a.major()));
    releases
}
