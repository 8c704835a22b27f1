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

use log::trace;
use regex::Regex;

use super::regex_util::RegexExactMatch;
use crate::interfaces;

pub struct RegexBasedMatcher {}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {}
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_local_number(&self, number: &str, pattern: &Regex) -> bool {
        // We don't want to consider an empty pattern a match for any input
        if pattern.as_str().is_empty() {
            trace!("Empty pattern never matches '{number}'");
            return false;
        }
        pattern.exact_match(number)
    }
}
