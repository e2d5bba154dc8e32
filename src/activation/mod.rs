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

//! Activation and deactivation plans.
//!
//! A running process cannot change its parent shell's environment, so
//! switching JDKs is expressed as a list of steps that the caller renders into
//! shell text for `eval` (POSIX) or `Invoke-Expression` (PowerShell). Nothing
//! in this module touches the filesystem.

mod render;

pub use render::ShellDialect;

use crate::paths::install::bin_directory;
use crate::platform::OsFamily;
use std::path::{Path, PathBuf};

pub const JAVA_HOME_VAR: &str = "JAVA_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationStep {
    /// Remove whatever link currently sits at the path.
    RemovePath(PathBuf),
    CreateLink { link: PathBuf, target: PathBuf },
    SetEnv { name: String, value: PathBuf },
    UnsetEnv(String),
    PrependPath(PathBuf),
    StripPath(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationPlan {
    pub family: OsFamily,
    pub steps: Vec<ActivationStep>,
}

impl ActivationPlan {
    pub fn render(&self, dialect: ShellDialect) -> String {
        dialect.render(self)
    }
}

/// Point `pointer` at `target` and export `JAVA_HOME` through the pointer.
///
/// `JAVA_HOME` names the pointer rather than the versioned directory, so a
/// later switch only has to replace the link. The `bin` entry is stripped
/// before it is prepended so `PATH` holds it once however often this runs.
pub fn plan_activation(pointer: &Path, target: &Path, family: OsFamily) -> ActivationPlan {
    let bin = bin_directory(pointer);
    let steps = vec![
        ActivationStep::RemovePath(pointer.to_path_buf()),
        ActivationStep::CreateLink {
            link: pointer.to_path_buf(),
            target: target.to_path_buf(),
        },
        ActivationStep::SetEnv {
            name: JAVA_HOME_VAR.to_string(),
            value: pointer.to_path_buf(),
        },
        ActivationStep::StripPath(bin.clone()),
        ActivationStep::PrependPath(bin),
    ];
    ActivationPlan { family, steps }
}

pub fn plan_deactivation(pointer: &Path, family: OsFamily) -> ActivationPlan {
    let steps = vec![
        ActivationStep::UnsetEnv(JAVA_HOME_VAR.to_string()),
        ActivationStep::StripPath(bin_directory(pointer)),
        ActivationStep::RemovePath(pointer.to_path_buf()),
    ];
    ActivationPlan { family, steps }
}
