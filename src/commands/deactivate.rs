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

use crate::activation::{ShellDialect, plan_deactivation};
use crate::commands::{open_store, shell_dialect};
use crate::config::JdkmConfig;
use crate::error::Result;
use log::debug;
use std::io::Write;

pub struct DeactivateCommand<'a> {
    config: &'a JdkmConfig,
}

impl<'a> DeactivateCommand<'a> {
    pub fn new(config: &'a JdkmConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, shell: Option<&str>) -> Result<()> {
        let script = self.deactivation_script(shell_dialect(shell)?)?;

        let mut stdout = std::io::stdout();
        stdout.write_all(script.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Emitted even when nothing is active so repeated runs are harmless.
    pub fn deactivation_script(&self, dialect: ShellDialect) -> Result<String> {
        let store = open_store(self.config)?;
        match store.current_active() {
            Some(version) => eprintln!("Deactivating JDK {version}"),
            None => debug!("No active JDK"),
        }

        let plan = plan_deactivation(&store.active_pointer_path(), store.family());
        Ok(plan.render(dialect))
    }
}
