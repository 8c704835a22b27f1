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

use super::{Country, NumberTypeSet};

/// Input of a matching call: the country numbers are assumed local to,
/// the other candidate countries, and the number types of interest.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    default_country: Arc<Country>,
    other_countries: Vec<Arc<Country>>,
    types: NumberTypeSet,
}

impl ValidationConfig {
    pub fn new(
        default_country: Arc<Country>,
        other_countries: impl IntoIterator<Item = Arc<Country>>,
        types: impl Into<NumberTypeSet>,
    ) -> Self {
        Self {
            default_country,
            other_countries: other_countries.into_iter().collect(),
            types: types.into(),
        }
    }

    pub fn default_country(&self) -> &Arc<Country> {
        &self.default_country
    }

    pub fn other_countries(&self) -> &[Arc<Country>] {
        &self.other_countries
    }

    pub fn types(&self) -> NumberTypeSet {
        self.types
    }

    /// Countries in evaluation order: the default one first, then the
    /// others as listed. The default country is yielded even when it is
    /// absent from the other countries.
    pub fn countries(&self) -> impl Iterator<Item = &Arc<Country>> {
        std::iter::once(&self.default_country).chain(self.other_countries.iter())
    }
}
