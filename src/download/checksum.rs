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

use crate::error::{IoContext, JdkmError, Result};
use log::debug;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const CHECKSUM_CHUNK_SIZE: usize = 64 * 1024;

/// Compare the file's SHA-256 with a hex digest, ignoring case.
pub fn verify_checksum(file_path: &Path, expected: &str) -> Result<()> {
    let calculated = calculate_sha256(file_path)?;
    let expected = expected.trim().to_lowercase();

    if calculated != expected {
        return Err(JdkmError::ChecksumMismatch {
            expected,
            actual: calculated,
        });
    }

    debug!("Checksum verified for {}", file_path.display());
    Ok(())
}

pub fn calculate_sha256(file_path: &Path) -> Result<String> {
    let mut file = File::open(file_path).with_path("open", file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHECKSUM_CHUNK_SIZE];

    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(JdkmError::fs("read", file_path, e)),
        }
    }

    Ok(hex::encode(hasher.finalize()))
}
