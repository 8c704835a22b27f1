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

mod config;
mod helper_functions;
mod metadata;
mod number_type_set;
mod phone_number_match;
pub mod enums;
pub mod errors;
pub mod phonenumbervalidator;

use std::sync::LazyLock;

pub use config::ValidationConfig;
pub use enums::NumberType;
pub use helper_functions::{localize_number, sanitize};
pub use metadata::{Country, CountryBuilder, NumberTypeData};
pub use number_type_set::{any_type, NumberTypeSet};
pub use phone_number_match::PhoneNumberMatch;
use crate::phonenumbervalidator::phonenumbervalidator::PhoneNumberValidator;

pub static PHONE_NUMBER_VALIDATOR: LazyLock<PhoneNumberValidator> = LazyLock::new(|| {
    PhoneNumberValidator::new()
});

/// Returns every country of `config` the number may belong to, see
/// [`PhoneNumberValidator::matches`].
pub fn matches(config: &ValidationConfig, number: &str) -> Vec<PhoneNumberMatch> {
    PHONE_NUMBER_VALIDATOR.matches(config, number)
}

pub fn valid(config: &ValidationConfig, number: &str) -> bool {
    PHONE_NUMBER_VALIDATOR.valid(config, number)
}
