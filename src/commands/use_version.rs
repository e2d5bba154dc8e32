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

use crate::activation::{ShellDialect, plan_activation};
use crate::commands::{open_store, shell_dialect};
use crate::config::JdkmConfig;
use crate::error::Result;
use crate::version::VersionSpec;
use log::{debug, info};
use std::io::{IsTerminal, Write};

pub struct UseCommand<'a> {
    config: &'a JdkmConfig,
}

impl<'a> UseCommand<'a> {
    pub fn new(config: &'a JdkmConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, version: &str, shell: Option<&str>) -> Result<()> {
        let dialect = shell_dialect(shell)?;
        let script = self.activation_script(version, dialect)?;

        let mut stdout = std::io::stdout();
        stdout.write_all(script.as_bytes())?;
        stdout.flush()?;

        if stdout.is_terminal() {
            eprintln!("# Run this command to switch your shell:");
            match dialect {
                ShellDialect::Posix => eprintln!("# eval \"$(jdkm use {version})\""),
                ShellDialect::PowerShell => {
                    eprintln!("# jdkm use {version} | Out-String | Invoke-Expression")
                }
            }
        }
        Ok(())
    }

    /// Shell text that points the active link at `version` and exports it.
    pub fn activation_script(&self, version: &str, dialect: ShellDialect) -> Result<String> {
        VersionSpec::parse(version)?;

        let store = open_store(self.config)?;
        let target = store.resolve_path(version)?;
        info!("Activating JDK {version} at {}", target.display());

        if store.current_active().as_deref() == Some(version) {
            eprintln!("JDK {version} is already active");
        }

        let plan = plan_activation(&store.active_pointer_path(), &target, store.family());
        debug!("Activation plan: {plan:?}");
        Ok(plan.render(dialect))
    }
}
