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

//! Platform-specific constants and utility functions.

use super::OsFamily;

/// Platform-specific PATH separator
pub fn path_separator(family: OsFamily) -> char {
    match family {
        OsFamily::Windows => ';',
        OsFamily::Unix => ':',
    }
}

/// Get the executable file extension for the given OS family
pub fn executable_extension(family: OsFamily) -> &'static str {
    match family {
        OsFamily::Windows => ".exe",
        OsFamily::Unix => "",
    }
}

/// Add the executable extension to a tool name, e.g. `java` -> `java.exe`
pub fn executable_name(tool: &str, family: OsFamily) -> String {
    format!("{tool}{}", executable_extension(family))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_separator() {
        assert_eq!(path_separator(OsFamily::Windows), ';');
        assert_eq!(path_separator(OsFamily::Unix), ':');
    }

    #[test]
    fn test_executable_name() {
        assert_eq!(executable_name("java", OsFamily::Unix), "java");
        assert_eq!(executable_name("javac", OsFamily::Windows), "javac.exe");
    }
}
