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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Errors returned while building country metadata.
#[derive(Debug, PartialEq, Error)]
pub enum InvalidMetadataError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
    #[error("Country id must not be empty")]
    EmptyCountryId,
    #[error("Invalid country calling code: '{0}'")]
    InvalidCallingCode(String),
}

/// Which international form of the number was found at its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalizationPrefix {
    /// The number starts with `+`.
    Plus,
    /// The number starts with the country's international dialling prefix.
    InternationalPrefix,
}

/// A number that can't be interpreted against a country's
/// international-dialling convention.
///
/// This is an expected outcome: the country is simply skipped for the
/// number being matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocalizationError {
    #[error("Calling code after {prefix:?} doesn't belong to the country")]
    CallingCodeMismatch { prefix: LocalizationPrefix },
}
