mod interfaces;
mod phonenumbervalidator;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use phonenumbervalidator::{
    any_type, errors, localize_number, matches, sanitize, valid,
    phonenumbervalidator::PhoneNumberValidator,
    Country, CountryBuilder, NumberType, NumberTypeData, NumberTypeSet,
    PhoneNumberMatch, ValidationConfig, PHONE_NUMBER_VALIDATOR,
};
pub use regexp_cache::{InvalidRegexError, RegexCache};
