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

/// First LTS release of the three-release cadence.
const CADENCE_START: u32 = 21;
const CADENCE_STEP: u32 = 3;

/// Long-term-support classification of a major version.
///
/// 8, 11 and 17 predate the fixed cadence. From 21 on every third feature
/// release is LTS.
pub fn is_lts(major: u32) -> bool {
    match major {
        8 | 11 | 17 => true,
        m if m >= CADENCE_START => (m - CADENCE_START) % CADENCE_STEP == 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_lts_versions() {
        for major in [8, 11, 17, 21, 24, 27, 30] {
            assert!(is_lts(major), "{major} should be LTS");
        }
    }

    #[test]
    fn test_non_lts_versions() {
        for major in [9, 10, 12, 13, 14, 15, 16, 18, 19, 20, 22, 23, 25, 26, 28, 29] {
            assert!(!is_lts(major), "{major} should not be LTS");
        }
    }

    #[test]
    fn test_cadence_continues() {
        for n in 1..20 {
            assert!(is_lts(21 + 3 * n));
            assert!(!is_lts(21 + 3 * n + 1));
        }
        assert!(!is_lts(0));
        assert!(!is_lts(7));
    }
}
