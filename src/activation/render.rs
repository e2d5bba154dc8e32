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

use super::{ActivationPlan, ActivationStep};
use crate::error::{JdkmError, Result};
use crate::platform::{OsFamily, path_separator};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    Posix,
    PowerShell,
}

impl ShellDialect {
    pub fn from_family(family: OsFamily) -> Self {
        match family {
            OsFamily::Windows => ShellDialect::PowerShell,
            OsFamily::Unix => ShellDialect::Posix,
        }
    }

    /// Parse a `--shell` value.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "bash" | "zsh" | "sh" | "posix" => Ok(ShellDialect::Posix),
            "powershell" | "pwsh" => Ok(ShellDialect::PowerShell),
            _ => Err(JdkmError::UnsupportedShell(name.to_string())),
        }
    }

    /// Render every step of `plan` as one line of shell text.
    pub fn render(self, plan: &ActivationPlan) -> String {
        let mut output = String::new();
        for step in &plan.steps {
            let line = match self {
                ShellDialect::Posix => posix_line(step),
                ShellDialect::PowerShell => powershell_line(step, plan.family),
            };
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}

fn posix_quote(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn posix_line(step: &ActivationStep) -> String {
    let separator = path_separator(OsFamily::Unix);
    match step {
        ActivationStep::RemovePath(path) => format!("rm -f {}", posix_quote(path)),
        ActivationStep::CreateLink { link, target } => {
            format!("ln -s {} {}", posix_quote(target), posix_quote(link))
        }
        ActivationStep::SetEnv { name, value } => {
            format!("export {name}={}", posix_quote(value))
        }
        ActivationStep::UnsetEnv(name) => format!("unset {name}"),
        ActivationStep::PrependPath(dir) => {
            let quoted = posix_quote(dir);
            let inner = &quoted[1..quoted.len() - 1];
            format!("export PATH=\"{inner}{separator}$PATH\"")
        }
        // awk compares whole entries as strings, so no pattern escaping is needed
        ActivationStep::StripPath(dir) => format!(
            "export PATH=\"$(printf '%s' \"$PATH\" | awk -v RS='{separator}' -v ORS='{separator}' \
             -v drop={} '$0 != drop' | sed 's/{separator}$//')\"",
            posix_quote(dir)
        ),
    }
}

fn powershell_quote(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if matches!(c, '`' | '"' | '$') {
            quoted.push('`');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn powershell_line(step: &ActivationStep, family: OsFamily) -> String {
    let separator = path_separator(family);
    match step {
        ActivationStep::RemovePath(path) => match family {
            // rmdir removes a junction without touching its target
            OsFamily::Windows => format!("cmd /C rmdir {} 2>$null", powershell_quote(path)),
            OsFamily::Unix => format!(
                "Remove-Item -Force {} -ErrorAction SilentlyContinue",
                powershell_quote(path)
            ),
        },
        ActivationStep::CreateLink { link, target } => match family {
            OsFamily::Windows => format!(
                "cmd /C mklink /J {} {} | Out-Null",
                powershell_quote(link),
                powershell_quote(target)
            ),
            OsFamily::Unix => format!(
                "New-Item -ItemType SymbolicLink -Path {} -Target {} | Out-Null",
                powershell_quote(link),
                powershell_quote(target)
            ),
        },
        ActivationStep::SetEnv { name, value } => {
            format!("$env:{name} = {}", powershell_quote(value))
        }
        ActivationStep::UnsetEnv(name) => {
            format!("Remove-Item Env:{name} -ErrorAction SilentlyContinue")
        }
        ActivationStep::PrependPath(dir) => {
            let quoted = powershell_quote(dir);
            let inner = &quoted[1..quoted.len() - 1];
            format!("$env:PATH = \"{inner}{separator}$env:PATH\"")
        }
        ActivationStep::StripPath(dir) => format!(
            "$env:PATH = ($env:PATH -split '{separator}' | Where-Object {{ $_ -ne {} }}) -join '{separator}'",
            powershell_quote(dir)
        ),
    }
}
