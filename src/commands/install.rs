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
use crate::download::HttpArtifactFetcher;
use crate::error::Result;
use crate::platform::Platform;
use crate::storage::{InstallOutcome, format_size};
use crate::version::VersionSpec;
use log::{debug, info, trace};
use std::path::Path;
use std::time::Duration;

pub struct InstallCommand<'a> {
    config: &'a JdkmConfig,
}

impl<'a> InstallCommand<'a> {
    pub fn new(config: &'a JdkmConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        version: &str,
        force: bool,
        dry_run: bool,
        no_progress: bool,
        timeout_secs: Option<u64>,
        archive: Option<&Path>,
    ) -> Result<()> {
        info!("Installing JDK {version}");
        debug!(
            "Install options: force={force}, dry_run={dry_run}, no_progress={no_progress}, \
             timeout={timeout_secs:?}, archive={archive:?}"
        );

        let spec = VersionSpec::parse(version)?;
        trace!("Parsed version spec: {spec:?}");

        let store = open_store(self.config)?;
        let target = store.version_path(version)?;

        if let Some(archive) = archive {
            if dry_run {
                eprintln!(
                    "Would install {version} from {} to {}",
                    archive.display(),
                    target.display()
                );
                return Ok(());
            }
            let outcome = store.install_archive(version, archive, force)?;
            report(version, &outcome);
            return Ok(());
        }

        // skip the catalog round trip entirely when nothing would change
        if !force && store.is_installed(version) {
            report(version, &InstallOutcome::AlreadyInstalled(target));
            return Ok(());
        }

        let platform = Platform::current();
        debug!("Resolving {spec} for {platform}");
        let catalog = AdoptiumCatalog::new(&self.config.catalog);
        let artifact = catalog.find_artifact(&spec, &platform)?;
        trace!("Selected artifact: {artifact:?}");

        if dry_run {
            eprintln!(
                "Would install {version} from {} ({}) to {}",
                artifact.name,
                format_size(artifact.size),
                target.display()
            );
            return Ok(());
        }

        eprintln!(
            "Downloading {} ({})...",
            artifact.name,
            format_size(artifact.size)
        );

        let mut fetcher =
            HttpArtifactFetcher::new(&self.config.download).with_no_progress(no_progress);
        if let Some(secs) = timeout_secs {
            fetcher = fetcher.with_timeout(Duration::from_secs(secs));
        }

        let outcome = store.install(version, &artifact, force, &fetcher)?;
        report(version, &outcome);
        Ok(())
    }
}

fn report(version: &str, outcome: &InstallOutcome) {
    match outcome {
        InstallOutcome::Installed(path) => {
            eprintln!("Successfully installed JDK {version} to {}", path.display());
            eprintln!("Activate it with: eval \"$(jdkm use {version})\"");
        }
        InstallOutcome::AlreadyInstalled(path) => {
            eprintln!(
                "JDK {version} is already installed at {}. Use --force to reinstall.",
                path.display()
            );
        }
    }
}
