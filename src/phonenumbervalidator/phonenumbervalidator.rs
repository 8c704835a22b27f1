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

use std::sync::Arc;

use log::{debug, trace};

use super::{
    Country, NumberType, NumberTypeSet, PhoneNumberMatch, ValidationConfig,
    helper_functions::{localize_number, sanitize},
};
use crate::{interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher};

pub struct PhoneNumberValidator {
    /// An API for pattern checking.
    matcher_api: Box<dyn MatcherApi>,
}

impl Default for PhoneNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberValidator {
    pub fn new() -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
        }
    }

    /// Tests a sanitized number against a single candidate country.
    ///
    /// Returns `None` when the number can't be localized for `country`, when
    /// it carries no international form and `country` is not the default
    /// one, or when neither a requested number type nor the general pattern
    /// of the country matches it.
    pub fn matching_country(
        &self,
        number: &str,
        default_country: &Country,
        types: NumberTypeSet,
        country: &Arc<Country>,
    ) -> Option<PhoneNumberMatch> {
        let local_number = match localize_number(country, number) {
            Ok(local_number) => local_number,
            Err(err) => {
                trace!("Number '{number}' skipped for {}: {err}", country.id());
                return None;
            }
        };

        // An unprefixed number is only ever assumed local to the default country.
        if local_number == number && **country != *default_country {
            trace!(
                "Number '{number}' has no international form for {}, which is not the default country",
                country.id()
            );
            return None;
        }

        let number_types: Vec<NumberType> = country
            .number_types()
            .iter()
            .filter(|data| types.contains(data.number_type()))
            .filter(|data| self.matcher_api.match_local_number(local_number, data.pattern()))
            .map(|data| data.number_type())
            .collect();

        if !number_types.is_empty() {
            trace!("Number '{local_number}' matched {:?} in {}", number_types, country.id());
            return Some(PhoneNumberMatch::new(
                Arc::clone(country),
                local_number.to_owned(),
                number_types,
            ));
        }

        if self.matcher_api.match_local_number(local_number, country.general_pattern()) {
            trace!("Number '{local_number}' matched only the general pattern of {}", country.id());
            Some(PhoneNumberMatch::new(Arc::clone(country), local_number.to_owned(), Vec::new()))
        } else {
            trace!("Number '{local_number}' doesn't match any pattern of {}", country.id());
            None
        }
    }

    /// Returns every country of `config` the number may belong to, default
    /// country first and then the other countries in their listed order.
    pub fn matches(&self, config: &ValidationConfig, number: &str) -> Vec<PhoneNumberMatch> {
        self.matches_with_types(config, number, config.types())
    }

    /// Same as [`Self::matches`] but with `types` in place of the number
    /// types of the config.
    pub fn matches_with_types(
        &self,
        config: &ValidationConfig,
        number: &str,
        types: NumberTypeSet,
    ) -> Vec<PhoneNumberMatch> {
        if types.is_empty() {
            debug!("No number types requested, only general patterns can match '{number}'");
        }
        let sanitized = sanitize(number);
        let default_country = config.default_country();
        config
            .countries()
            .filter_map(|country| {
                self.matching_country(&sanitized, default_country, types, country)
            })
            .collect()
    }

    /// Whether the number matches at least one country of `config`.
    pub fn valid(&self, config: &ValidationConfig, number: &str) -> bool {
        !self.matches(config, number).is_empty()
    }
}
