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

use crate::commands::{java_home_env, java_home_version, open_store};
use crate::config::JdkmConfig;
use crate::error::Result;
use crate::storage::format_size;
use colored::Colorize;
use log::{debug, warn};

pub struct ListCommand<'a> {
    config: &'a JdkmConfig,
}

impl<'a> ListCommand<'a> {
    pub fn new(config: &'a JdkmConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, show_size: bool) -> Result<()> {
        let store = open_store(self.config)?;

        let (installed, invalid): (Vec<_>, Vec<_>) =
            store.scan()?.into_iter().partition(|version| version.valid);
        for version in &invalid {
            warn!(
                "Ignoring {}: bin/java or bin/javac is missing",
                version.path.display()
            );
        }

        if installed.is_empty() {
            println!("No JDKs installed");
            println!("Use 'jdkm install <version>' to install a JDK");
            return Ok(());
        }

        let active = store.current_active();
        let from_java_home = java_home_env().and_then(|home| java_home_version(&store, &home));
        debug!("Active: {active:?}, JAVA_HOME: {from_java_home:?}");

        println!("Installed JDKs:");
        let mut total_size = 0u64;

        for version in &installed {
            let is_active = active.as_deref() == Some(version.version_id.as_str());
            let mut line = if is_active {
                format!("{} {}", "*".green().bold(), version.version_id.green())
            } else {
                format!("  {}", version.version_id)
            };

            if show_size {
                let size = store.installed_size(&version.version_id)?;
                total_size += size;
                line.push_str(&format!(" ({})", format_size(size)));
            }
            if from_java_home.as_deref() == Some(version.version_id.as_str()) {
                line.push_str(&format!(" {}", "(JAVA_HOME)".dimmed()));
            }

            println!("{line}");
        }

        if show_size {
            println!();
            println!(
                "Total disk usage: {} ({} JDK{})",
                format_size(total_size),
                installed.len(),
                if installed.len() == 1 { "" } else { "s" }
            );
        }

        Ok(())
    }
}
