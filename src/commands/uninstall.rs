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

use crate::commands::open_store;
use crate::config::JdkmConfig;
use crate::error::Result;
use crate::storage::format_size;
use log::{debug, info};

pub struct UninstallCommand<'a> {
    config: &'a JdkmConfig,
}

impl<'a> UninstallCommand<'a> {
    pub fn new(config: &'a JdkmConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, version: &str, dry_run: bool) -> Result<()> {
        info!("Uninstalling JDK {version}");

        let store = open_store(self.config)?;
        let path = store.version_path(version)?;
        let size = store.installed_size(version)?;
        debug!("{} occupies {size} bytes", path.display());

        if dry_run {
            eprintln!(
                "Would remove JDK {version} from {} ({})",
                path.display(),
                format_size(size)
            );
            return Ok(());
        }

        let was_active = store.current_active().as_deref() == Some(version);
        store.uninstall(version)?;

        eprintln!("Removed JDK {version}, freed {}", format_size(size));
        if was_active {
            eprintln!(
                "Note: {version} was the active JDK. Run 'jdkm use <version>' or 'jdkm deactivate' \
                 to update {}.",
                store.active_pointer_path().display()
            );
        }
        Ok(())
    }
}
