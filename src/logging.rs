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

use env_logger::{Builder, Env};

/// Map the `-v` count to a default filter for this crate.
///
/// 0=warn, 1=info, 2=debug, 3+=trace. `RUST_LOG` still takes precedence.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "jdkm=warn",
        1 => "jdkm=info",
        2 => "jdkm=debug",
        _ => "jdkm=trace",
    }
}

/// Initialize the logger with the specified verbosity level
///
/// Log records are written to stderr so that activation commands printed on
/// stdout can be passed to `eval` unchanged.
pub fn setup_logger(verbose: u8) {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "jdkm=warn");
        assert_eq!(default_filter(1), "jdkm=info");
        assert_eq!(default_filter(2), "jdkm=debug");
        assert_eq!(default_filter(3), "jdkm=trace");
        assert_eq!(default_filter(9), "jdkm=trace");
    }
}
