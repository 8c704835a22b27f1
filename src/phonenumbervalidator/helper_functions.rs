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

use std::borrow::Cow;

use super::{
    Country,
    errors::{LocalizationError, LocalizationPrefix},
};
use crate::string_util::remove_spaces;

pub(super) const PLUS_SIGN: &str = "+";

/// Removes space characters from the raw input. No other character is
/// touched.
pub fn sanitize(number: &str) -> Cow<'_, str> {
    remove_spaces(number)
}

/// Strips a leading `+<country code>` or `<international prefix><country code>`
/// from a sanitized number, returning the number as dialled inside `country`.
///
/// Numbers that start with neither form, and every number of a country
/// without an international prefix, are returned unchanged. A recognised
/// form followed by a different calling code is an error.
pub fn localize_number<'a>(
    country: &Country,
    number: &'a str,
) -> Result<&'a str, LocalizationError> {
    let Some(international_prefix) = country.international_prefix() else {
        return Ok(number);
    };

    let (rest, prefix) = if let Some(rest) = number.strip_prefix(PLUS_SIGN) {
        (rest, LocalizationPrefix::Plus)
    } else if let Some(rest) = number.strip_prefix(international_prefix) {
        (rest, LocalizationPrefix::InternationalPrefix)
    } else {
        return Ok(number);
    };

    rest.strip_prefix(country.country_code())
        .ok_or(LocalizationError::CallingCodeMismatch { prefix })
}
