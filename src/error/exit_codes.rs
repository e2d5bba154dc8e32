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

use crate::error::JdkmError;

pub fn get_exit_code(error: &JdkmError) -> i32 {
    match error {
        JdkmError::InvalidFormat(_)
        | JdkmError::ConfigError(_)
        | JdkmError::UnsupportedShell(_) => 2,

        JdkmError::NotFound { .. } => 3,

        JdkmError::NotInstalled(_) => 4,

        JdkmError::UnsupportedFormat(_)
        | JdkmError::EmptyArchive(_)
        | JdkmError::PathTraversal(_)
        | JdkmError::VerificationFailed(_)
        | JdkmError::ChecksumMismatch { .. } => 6,

        JdkmError::NetworkError(_)
        | JdkmError::Http(_)
        | JdkmError::CatalogFetch(_)
        | JdkmError::Download(_) => 20,

        _ => 1,
    }
}
