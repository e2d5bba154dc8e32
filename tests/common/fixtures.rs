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

//! Fake JDK trees and archives.

#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const JDK_TOOLS: [&str; 2] = ["java", "javac"];

pub fn tool_name(tool: &str) -> String {
    if cfg!(windows) {
        format!("{tool}.exe")
    } else {
        tool.to_string()
    }
}

fn tool_script(tool: &str) -> String {
    format!("#!/bin/sh\necho {tool}\n")
}

/// Create `<jdks_dir>/<version_id>` with `bin/java` and `bin/javac`.
pub fn create_installed_jdk(jdks_dir: &Path, version_id: &str) -> PathBuf {
    let jdk_path = jdks_dir.join(version_id);
    let bin_dir = jdk_path.join("bin");
    fs::create_dir_all(&bin_dir).unwrap();

    for tool in JDK_TOOLS {
        let tool_path = bin_dir.join(tool_name(tool));
        fs::write(&tool_path, tool_script(tool)).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tool_path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }
    fs::write(jdk_path.join("release"), format!("JAVA_VERSION=\"{version_id}\"\n")).unwrap();

    jdk_path
}

/// A `.tar.gz` laid out like a vendor JDK: one root directory holding `bin/`
/// with the given tools and a `release` file.
pub fn jdk_tar_gz(root: &str, tools: &[&str]) -> Vec<u8> {
    let gz = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(gz);

    let mut dir = tar::Header::new_gnu();
    dir.set_entry_type(tar::EntryType::Directory);
    dir.set_path(format!("{root}/")).unwrap();
    dir.set_mode(0o755);
    dir.set_size(0);
    dir.set_cksum();
    builder.append(&dir, std::io::empty()).unwrap();

    for tool in tools {
        let data = tool_script(tool);
        let mut header = tar::Header::new_gnu();
        header
            .set_path(format!("{root}/bin/{}", tool_name(tool)))
            .unwrap();
        header.set_size(data.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append(&header, data.as_bytes()).unwrap();
    }

    let release = b"JAVA_VERSION=\"17.0.8\"\n";
    let mut header = tar::Header::new_gnu();
    header.set_path(format!("{root}/release")).unwrap();
    header.set_size(release.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append(&header, &release[..]).unwrap();

    builder.into_inner().unwrap().finish().unwrap()
}

/// Same layout as [`jdk_tar_gz`] in a `.zip`.
pub fn jdk_zip(root: &str, tools: &[&str]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o755);

    writer.add_directory(format!("{root}/"), options).unwrap();
    for tool in tools {
        writer
            .start_file(format!("{root}/bin/{}", tool_name(tool)), options)
            .unwrap();
        writer.write_all(tool_script(tool).as_bytes()).unwrap();
    }

    writer.finish().unwrap().into_inner()
}

pub fn write_archive(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(bytes).unwrap();
    path
}
