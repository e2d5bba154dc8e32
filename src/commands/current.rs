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
use colored::Colorize;

pub struct CurrentCommand<'a> {
    config: &'a JdkmConfig,
}

impl<'a> CurrentCommand<'a> {
    pub fn new(config: &'a JdkmConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, quiet: bool) -> Result<()> {
        let store = open_store(self.config)?;
        let active = store.current_active();

        if quiet {
            // nothing printed when no version is active
            if let Some(version) = active {
                println!("{version}");
            }
            return Ok(());
        }

        match &active {
            Some(version) => {
                let path = store.version_path(version)?;
                if store.is_installed(version) {
                    println!("Active JDK: {}", version.green().bold());
                } else {
                    println!(
                        "Active JDK: {} {}",
                        version.yellow().bold(),
                        "(no longer installed)".yellow()
                    );
                }
                println!("Path: {}", path.display());
            }
            None => {
                println!("No active JDK");
                println!("Use 'jdkm use <version>' to activate an installed JDK");
            }
        }

        match java_home_env() {
            Some(java_home) => {
                println!("JAVA_HOME: {}", java_home.display());
                let from_java_home = java_home_version(&store, &java_home);
                if active.is_some() && from_java_home != active {
                    eprintln!(
                        "Note: JAVA_HOME does not point at the active JDK. Run: eval \"$(jdkm use {})\"",
                        active.as_deref().unwrap_or_default()
                    );
                }
            }
            None => println!("JAVA_HOME: not set"),
        }

        Ok(())
    }
}
