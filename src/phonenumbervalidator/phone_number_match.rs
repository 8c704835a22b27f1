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

use super::{Country, NumberType};

/// A country the number may belong to, together with the number as dialled
/// locally in that country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberMatch {
    country: Arc<Country>,
    local_number: String,
    number_types: Vec<NumberType>,
}

impl PhoneNumberMatch {
    pub fn new(country: Arc<Country>, local_number: String, number_types: Vec<NumberType>) -> Self {
        Self { country, local_number, number_types }
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn local_number(&self) -> &str {
        &self.local_number
    }

    /// Matched number types in the country's declaration order. Empty when
    /// only the country's general pattern matched.
    pub fn number_types(&self) -> &[NumberType] {
        &self.number_types
    }

    /// Whether at least one of the requested number types matched.
    pub fn is_classified(&self) -> bool {
        !self.number_types.is_empty()
    }
}
