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

use std::{fmt, sync::Arc};

use log::warn;
use regex::Regex;

use super::{NumberType, NumberTypeSet, errors::InvalidMetadataError};
use crate::regexp_cache::RegexCache;

/// Pattern of a single number type within a country.
#[derive(Clone)]
pub struct NumberTypeData {
    number_type: NumberType,
    /// Documentation only, never used while matching.
    example_number: String,
    pattern: Arc<Regex>,
}

impl NumberTypeData {
    pub fn number_type(&self) -> NumberType {
        self.number_type
    }

    pub fn example_number(&self) -> &str {
        &self.example_number
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl fmt::Debug for NumberTypeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberTypeData")
            .field("number_type", &self.number_type)
            .field("example_number", &self.example_number)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Metadata of a single country.
///
/// Built once through [`CountryBuilder`] and shared read-only afterwards,
/// there is no way to mutate a built country.
#[derive(Clone)]
pub struct Country {
    id: String,
    country_code: String,
    international_prefix: Option<String>,
    national_prefix: Option<String>,
    general_pattern: Arc<Regex>,
    number_types: Vec<NumberTypeData>,
}

impl Country {
    pub fn builder(id: impl Into<String>, country_code: impl Into<String>) -> CountryBuilder {
        CountryBuilder::new(id, country_code)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Country calling code without the leading `+`, e.g. `"44"`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn international_prefix(&self) -> Option<&str> {
        self.international_prefix.as_deref()
    }

    /// Kept for completeness of the metadata, matching never consults it.
    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref()
    }

    pub fn general_pattern(&self) -> &Regex {
        &self.general_pattern
    }

    /// Number type patterns in the order they were declared.
    pub fn number_types(&self) -> &[NumberTypeData] {
        &self.number_types
    }

    pub fn number_type_data(&self, number_type: NumberType) -> Option<&NumberTypeData> {
        self.number_types
            .iter()
            .find(|data| data.number_type == number_type)
    }

    pub fn supported_types(&self) -> NumberTypeSet {
        self.number_types.iter().map(|data| data.number_type).collect()
    }
}

impl PartialEq for Country {
    /// Countries are identified by their id.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Country {}

impl fmt::Debug for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Country")
            .field("id", &self.id)
            .field("country_code", &self.country_code)
            .field("international_prefix", &self.international_prefix)
            .field("national_prefix", &self.national_prefix)
            .field("general_pattern", &self.general_pattern.as_str())
            .field("number_types", &self.number_types)
            .finish()
    }
}

/// Collects raw metadata of a country and compiles its patterns.
#[derive(Debug, Clone)]
pub struct CountryBuilder {
    id: String,
    country_code: String,
    international_prefix: Option<String>,
    national_prefix: Option<String>,
    general_pattern: String,
    number_types: Vec<(NumberType, String, String)>,
}

impl CountryBuilder {
    pub fn new(id: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            country_code: country_code.into(),
            international_prefix: None,
            national_prefix: None,
            general_pattern: String::new(),
            number_types: Vec::new(),
        }
    }

    /// An empty prefix is the same as no prefix at all.
    pub fn international_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.international_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn national_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.national_prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn general_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.general_pattern = pattern.into();
        self
    }

    pub fn number_type(
        mut self,
        number_type: NumberType,
        example_number: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.number_types
            .push((number_type, example_number.into(), pattern.into()));
        self
    }

    pub fn build(self) -> Result<Country, InvalidMetadataError> {
        self.build_with_cache(&RegexCache::new())
    }

    /// Builds the country compiling its patterns through `cache`, so
    /// countries built with the same cache share identical patterns.
    pub fn build_with_cache(self, cache: &RegexCache) -> Result<Country, InvalidMetadataError> {
        if self.id.is_empty() {
            return Err(InvalidMetadataError::EmptyCountryId);
        }
        if self.country_code.is_empty() || !self.country_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidMetadataError::InvalidCallingCode(self.country_code));
        }
        if let Some(prefix) = &self.international_prefix {
            if !prefix.bytes().all(|b| b.is_ascii_digit()) {
                warn!(
                    "International prefix '{}' of {} contains non-digit characters",
                    prefix, self.id
                );
            }
        }

        let general_pattern = cache.get_regex(&self.general_pattern)?;
        let mut number_types = Vec::with_capacity(self.number_types.len());
        for (number_type, example_number, pattern) in self.number_types {
            number_types.push(NumberTypeData {
                number_type,
                example_number,
                pattern: cache.get_regex(&pattern)?,
            });
        }

        Ok(Country {
            id: self.id,
            country_code: self.country_code,
            international_prefix: self.international_prefix,
            national_prefix: self.national_prefix,
            general_pattern,
            number_types,
        })
    }
}
