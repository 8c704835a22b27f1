// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use regex::Regex;

pub trait RegexExactMatch {
    /// Returns true only if searching the pattern over `s` yields exactly
    /// one match and that match spans the whole string.
    ///
    /// This is not the same as an anchored `is_match`: patterns in metadata
    /// are not required to carry `^`/`$`, and an input the pattern splits
    /// into several matches is rejected.
    fn exact_match(&self, s: &str) -> bool;
}

impl RegexExactMatch for Regex {
    fn exact_match(&self, s: &str) -> bool {
        let mut found = self.find_iter(s);
        let Some(matched) = found.next() else {
            return false;
        };
        if found.next().is_some() {
            return false;
        }
        matched.start() == 0 && matched.end() == s.len()
    }
}
