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

//! On-disk layout of the jdkm home directory.
//!
//! ```text
//! <home>/
//!   config.toml
//!   jdks/
//!     <version-id>/   installed JDKs
//!     current         active pointer (symlink or junction)
//!     .tmp/           staging for in-flight installs
//! ```

pub mod home;
pub mod install;
pub mod shared;
