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

use clap::{Parser, Subcommand};
use jdkm::commands::current::CurrentCommand;
use jdkm::commands::deactivate::DeactivateCommand;
use jdkm::commands::install::InstallCommand;
use jdkm::commands::list::ListCommand;
use jdkm::commands::list_remote::ListRemoteCommand;
use jdkm::commands::uninstall::UninstallCommand;
use jdkm::commands::use_version::UseCommand;
use jdkm::config::new_jdkm_config;
use jdkm::error::{JdkmError, Result, format_error_with_color, get_exit_code};
use jdkm::logging;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jdkm")]
#[command(author, version, about = "JDK version manager", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and install a JDK version
    Install {
        /// Version to install (e.g., "21", "17.0", "17.0.8")
        version: String,

        /// Reinstall even if already installed
        #[arg(short, long)]
        force: bool,

        /// Show what would be installed without installing
        #[arg(long)]
        dry_run: bool,

        /// Disable the download progress bar
        #[arg(long)]
        no_progress: bool,

        /// Download timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,

        /// Install from a local .tar.gz, .tgz or .zip archive instead of downloading
        #[arg(long, value_name = "PATH")]
        archive: Option<PathBuf>,
    },

    /// Remove an installed JDK version
    Uninstall {
        /// Version to remove, exactly as it was installed
        version: String,

        /// Show what would be removed without removing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List installed JDK versions
    #[command(visible_alias = "ls")]
    List {
        /// Show disk usage of each version
        #[arg(long)]
        size: bool,
    },

    /// List JDK major versions available for download
    ListRemote {
        /// Include pre-release versions
        #[arg(long)]
        all: bool,

        /// Show only LTS versions
        #[arg(long)]
        lts: bool,
    },

    /// Print shell commands that activate a JDK version
    #[command(long_about = "Print shell commands that activate a JDK version

The output must be evaluated by your shell:
  eval \"$(jdkm use 17)\"                         # bash/zsh/sh
  jdkm use 17 | Out-String | Invoke-Expression  # PowerShell")]
    Use {
        /// Installed version to activate
        version: String,

        /// Shell dialect (bash, zsh, sh, posix, powershell, pwsh)
        #[arg(long)]
        shell: Option<String>,
    },

    /// Print shell commands that deactivate the active JDK
    #[command(visible_alias = "clear")]
    Deactivate {
        /// Shell dialect (bash, zsh, sh, posix, powershell, pwsh)
        #[arg(long)]
        shell: Option<String>,
    },

    /// Show the active JDK version
    Current {
        /// Print only the version
        #[arg(short = 'q', long)]
        quiet: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let config = match new_jdkm_config() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Install {
            version,
            force,
            dry_run,
            no_progress,
            timeout,
            archive,
        } => {
            let command = InstallCommand::new(&config)?;
            command.execute(
                &version,
                force,
                dry_run,
                no_progress,
                timeout,
                archive.as_deref(),
            )
        }
        Commands::Uninstall { version, dry_run } => {
            let command = UninstallCommand::new(&config)?;
            command.execute(&version, dry_run)
        }
        Commands::List { size } => {
            let command = ListCommand::new(&config)?;
            command.execute(size)
        }
        Commands::ListRemote { all, lts } => {
            let command = ListRemoteCommand::new(&config)?;
            command.execute(all, lts)
        }
        Commands::Use { version, shell } => {
            let command = UseCommand::new(&config)?;
            command.execute(&version, shell.as_deref())
        }
        Commands::Deactivate { shell } => {
            let command = DeactivateCommand::new(&config)?;
            command.execute(shell.as_deref())
        }
        Commands::Current { quiet } => {
            let command = CurrentCommand::new(&config)?;
            command.execute(quiet)
        }
    })();

    if let Err(e) = result {
        exit_with_error(&e);
    }
}

fn exit_with_error(error: &JdkmError) -> ! {
    eprintln!(
        "{}",
        format_error_with_color(error, std::io::stderr().is_terminal())
    );
    std::process::exit(get_exit_code(error));
}
