use std::sync::Arc;

use crate::{
    any_type, matches, valid, Country, NumberType, NumberTypeSet, PhoneNumberValidator,
    ValidationConfig,
};

use super::{region_code::RegionCode, test_metadata::country};

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_validator() -> PhoneNumberValidator {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
    PhoneNumberValidator::new()
}

fn config(default_country: &str, others: &[&str], types: impl Into<NumberTypeSet>) -> ValidationConfig {
    ValidationConfig::new(
        country(default_country),
        others.iter().map(|id| country(id)),
        types,
    )
}

fn matched_ids(validator: &PhoneNumberValidator, config: &ValidationConfig, number: &str) -> Vec<String> {
    validator
        .matches(config, number)
        .iter()
        .map(|found| found.country().id().to_owned())
        .collect()
}

#[test]
fn local_number_of_default_country_without_international_prefix() {
    let validator = get_validator();
    let gb = Country::builder(RegionCode::gb(), "44")
        .general_pattern(r"\d{10}")
        .number_type(NumberType::Mobile, "7400123456", r"7\d{9}")
        .build()
        .map(Arc::new)
        .unwrap();
    let config = ValidationConfig::new(gb, Vec::new(), any_type());

    let found = validator.matches(&config, "7400 123456");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country().id(), RegionCode::gb());
    assert_eq!(found[0].local_number(), "7400123456");
    assert_eq!(found[0].number_types(), &[NumberType::Mobile]);
    assert!(validator.valid(&config, "7400 123456"));
}

#[test]
fn plus_form_is_localized() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[], any_type());

    let found = validator.matches(&config, "+447400123456");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].local_number(), "7400123456");
    assert_eq!(found[0].number_types(), &[NumberType::Mobile]);
}

#[test]
fn international_prefix_form_is_localized() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[], any_type());

    let found = validator.matches(&config, "00 44 7400 123456");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].local_number(), "7400123456");
    assert_eq!(found[0].number_types(), &[NumberType::Mobile]);
}

#[test]
fn unprefixed_number_never_belongs_to_other_country() {
    let validator = get_validator();
    let gb = country(RegionCode::gb());
    let de = country(RegionCode::de());

    // DE general pattern accepts seven digits, but the number has no +49/0049
    assert!(validator.matching_country("1234567", &gb, any_type(), &de).is_none());

    let config = config(RegionCode::gb(), &[RegionCode::de()], any_type());
    assert!(validator.matches(&config, "1234567").is_empty());
    assert!(!validator.valid(&config, "1234567"));

    // US patterns match first, GB patterns would match too but GB isn't the default
    let config = self::config(RegionCode::us(), &[RegionCode::gb()], any_type());
    let found = validator.matches(&config, "7400123456");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country().id(), RegionCode::us());
    assert_eq!(found[0].number_types(), &[NumberType::FixedLine, NumberType::Mobile]);
}

#[test]
fn default_country_comes_first() {
    let validator = get_validator();

    let config = config(RegionCode::gg(), &[RegionCode::gb()], any_type());
    assert_eq!(
        matched_ids(&validator, &config, "+447781123456"),
        vec![RegionCode::gg(), RegionCode::gb()]
    );

    let config = self::config(RegionCode::gb(), &[RegionCode::gg()], any_type());
    assert_eq!(
        matched_ids(&validator, &config, "+447781123456"),
        vec![RegionCode::gb(), RegionCode::gg()]
    );
}

#[test]
fn other_countries_keep_listed_order() {
    let validator = get_validator();
    let config = config(
        RegionCode::us(),
        &[RegionCode::de(), RegionCode::gg(), RegionCode::gb()],
        any_type(),
    );
    assert_eq!(
        matched_ids(&validator, &config, "+447781123456"),
        vec![RegionCode::gg(), RegionCode::gb()]
    );
}

#[test]
fn calling_code_mismatch_skips_country() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[RegionCode::de(), RegionCode::us()], any_type());

    let found = validator.matches(&config, "+49 7400 123456");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country().id(), RegionCode::de());
    assert_eq!(found[0].local_number(), "7400123456");
    assert_eq!(found[0].number_types(), &[NumberType::FixedLine]);
}

#[test]
fn international_prefixes_are_per_country() {
    let validator = get_validator();
    let config = config(RegionCode::us(), &[RegionCode::gb()], any_type());

    // US reads 011 as its prefix and finds 44 instead of 1, GB doesn't know 011
    assert!(validator.matches(&config, "011 44 7400 123456").is_empty());

    let found = validator.matches(&config, "011 1 201 555 0123");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country().id(), RegionCode::us());
    assert_eq!(found[0].local_number(), "2015550123");
}

#[test]
fn general_pattern_fallback() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[], [NumberType::TollFree]);

    let found = validator.matches(&config, "7400123456");
    assert_eq!(found.len(), 1);
    assert!(!found[0].is_classified());
    assert!(found[0].number_types().is_empty());

    let config = self::config(RegionCode::gb(), &[], [NumberType::TollFree, NumberType::Mobile]);
    let found = validator.matches(&config, "7400123456");
    assert_eq!(found[0].number_types(), &[NumberType::Mobile]);
    assert!(found[0].is_classified());
}

#[test]
fn empty_type_set_yields_unclassified_matches() {
    let validator = get_validator();
    let config = config(RegionCode::gg(), &[RegionCode::gb(), RegionCode::de()], NumberTypeSet::empty());

    let found = validator.matches(&config, "+447781123456");
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|found| found.number_types().is_empty()));

    // The emergency number only has a typed pattern
    assert!(validator.matches(&config, "999").is_empty());

    let config = self::config(RegionCode::gb(), &[], any_type());
    let found = validator.matches_with_types(&config, "7400123456", NumberTypeSet::empty());
    assert_eq!(found.len(), 1);
    assert!(found[0].number_types().is_empty());
}

#[test]
fn partial_matches_are_rejected() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[], any_type());

    // One digit too many: every pattern only covers a substring
    assert!(validator.matches(&config, "74001234567").is_empty());
    // Two back-to-back matches of the general pattern
    assert!(validator.matches(&config, "74001234567400123456").is_empty());

    // "112" is inside the number, but the emergency pattern must cover all of it
    let found = validator.matches(&config, "7781123456");
    assert_eq!(found[0].number_types(), &[NumberType::Mobile]);
}

#[test]
fn short_numbers_classified_by_type() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[], any_type());

    for number in ["999", "9 9 9", "112"] {
        let found = validator.matches(&config, number);
        assert_eq!(found.len(), 1, "{number}");
        assert_eq!(found[0].number_types(), &[NumberType::Emergency]);
    }
}

#[test]
fn several_types_in_declaration_order() {
    let validator = get_validator();
    let config = config(RegionCode::us(), &[], any_type());

    let found = validator.matches(&config, "800 234 5678");
    assert_eq!(
        found[0].number_types(),
        &[NumberType::FixedLine, NumberType::Mobile, NumberType::TollFree]
    );
}

#[test]
fn plus_is_not_stripped_without_international_prefix() {
    let validator = get_validator();
    let gb = Country::builder(RegionCode::gb(), "44")
        .international_prefix("")
        .general_pattern(r"\d{10}")
        .number_type(NumberType::Mobile, "7400123456", r"7\d{9}")
        .build()
        .map(Arc::new)
        .unwrap();
    let config = ValidationConfig::new(gb, Vec::new(), any_type());
    assert!(!validator.valid(&config, "+447400123456"));
}

#[test]
fn garbage_input_matches_nothing() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[RegionCode::gg(), RegionCode::de(), RegionCode::us()], any_type());

    for number in ["", " ", "abc", "+", "00", "+44", "7400-123456", "7400\t123456"] {
        assert!(validator.matches(&config, number).is_empty(), "{number:?}");
    }
}

#[test]
fn default_country_listed_twice_is_evaluated_twice() {
    let validator = get_validator();
    let config = config(RegionCode::gb(), &[RegionCode::gb()], any_type());
    assert_eq!(
        matched_ids(&validator, &config, "7400123456"),
        vec![RegionCode::gb(), RegionCode::gb()]
    );
}

#[test]
fn matches_are_deterministic_and_consistent_with_valid() {
    let validator = get_validator();
    let config = config(
        RegionCode::gb(),
        &[RegionCode::gg(), RegionCode::de(), RegionCode::us()],
        any_type(),
    );
    let numbers = [
        "7400 123456",
        "+447781123456",
        "0049 30 123456",
        "+1 201 555 0123",
        "1234567",
        "+33 1 23 45 67 89",
        "999",
        "not a number",
    ];
    for number in numbers {
        let first = validator.matches(&config, number);
        assert_eq!(first, validator.matches(&config, number), "{number}");
        assert_eq!(validator.valid(&config, number), !first.is_empty(), "{number}");
    }
}

#[test]
fn shared_validator_free_functions() {
    let _ = get_validator();
    let config = config(RegionCode::gb(), &[RegionCode::de()], any_type());

    let found = matches(&config, "+49 15123456789");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].country().id(), RegionCode::de());
    assert_eq!(found[0].number_types(), &[NumberType::Mobile]);
    assert!(valid(&config, "+49 15123456789"));
    assert!(!valid(&config, "+33 123456789"));
}

#[test]
fn config_countries_default_first() {
    let config = config(RegionCode::gb(), &[RegionCode::de(), RegionCode::us()], any_type());
    let ids: Vec<&str> = config.countries().map(|country| country.id()).collect();
    assert_eq!(ids, vec![RegionCode::gb(), RegionCode::de(), RegionCode::us()]);
    assert_eq!(config.other_countries().len(), 2);
    assert_eq!(config.types(), any_type());
}
