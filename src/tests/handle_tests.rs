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

use std::collections::HashSet;

use crate::{
    api,
    handle::PhoneNumberHandle,
    i18n::RegionCode,
    input::RawInput,
    phonenumber::CountryCodeSource,
    phonenumberutil::{PHONE_NUMBER_UTIL, PhoneNumberType},
};

use super::{DefaultRegionGuard, init_logger, region_code::RegionCode as Region};

fn handle(input: &str, region: Option<&str>) -> PhoneNumberHandle {
    init_logger();
    PhoneNumberHandle::new(input, region)
}

#[test]
fn us_number_in_international_format() {
    let number = handle("+14043841384", None);
    assert!(number.is_valid());
    assert!(!number.is_invalid());
    assert!(number.is_possible());
    assert!(!number.is_impossible());
    assert_eq!(Some(PhoneNumberType::FixedLineOrMobile), number.number_type());
    assert_eq!(Some("+14043841384"), number.e164());
    assert_eq!(Some("(404) 384-1384"), number.national());
    assert_eq!(Some("+1 404-384-1384"), number.international());
    assert_eq!(Some("tel:+1-404-384-1384"), number.rfc3966());
    assert_eq!(Some("4043841384"), number.raw_national());
    assert_eq!(Some("14043841384"), number.raw_international());
    assert_eq!(Some("404-384-1384"), number.dasherized_national());
    assert_eq!(Some("1-404-384-1384"), number.dasherized_international());
    assert_eq!(Some(1), number.country_code());
    assert_eq!(Some(RegionCode::parse(Region::us())), number.region_code());
    assert_eq!(number.region_code(), number.country());
    assert_eq!(Some("404"), number.area_code());
    assert_eq!(Some("+14043841384"), number.to_text());
    assert_eq!(Some("4043841384".to_owned()), number.national_significant_number());
    assert_eq!(None, number.extension());
    assert_eq!(None, number.input_region());
    assert_eq!("+14043841384", number.to_string());
}

#[test]
fn gb_mobile_with_explicit_region() {
    let number = handle("7911 123456", Some(Region::gb()));
    assert!(number.is_valid());
    assert_eq!(Some(PhoneNumberType::Mobile), number.number_type());
    assert_eq!(Some(RegionCode::parse(Region::gb())), number.region_code());
    assert_eq!(Some(RegionCode::parse(Region::gb())), number.input_region());
    assert_eq!(Some(44), number.country_code());
    assert_eq!(Some("+447911123456"), number.e164());
    assert_eq!(Some("07911 123456"), number.national());
    assert_eq!(Some("+44 7911 123456"), number.international());
    assert_eq!(Some("7911123456"), number.raw_national());
    assert_eq!(Some("447911123456"), number.raw_international());
    assert_eq!(Some("791-112-3456"), number.dasherized_national());
    assert_eq!(Some("44-791-112-3456"), number.dasherized_international());
    // Mobile numbers in the UK carry no area code.
    assert_eq!(Some(""), number.area_code());
}

#[test]
fn number_types() {
    let cases = [
        ("+1 (800) 221-1212", PhoneNumberType::TollFree),
        ("+12423570000", PhoneNumberType::Mobile),
        ("+12423651234", PhoneNumberType::FixedLine),
        ("+445631231234", PhoneNumberType::VoIP),
        ("+447031231234", PhoneNumberType::PersonalNumber),
        ("+80012345678", PhoneNumberType::TollFree),
        ("+165025311111", PhoneNumberType::Unknown),
    ];
    for (input, expected) in cases {
        assert_eq!(Some(expected), handle(input, None).number_type(), "{}", input);
    }
}

#[test]
fn possible_but_invalid_number() {
    // Ten digits fit the NANPA plan, but 555 is not an assigned area code.
    let number = handle("+1 555 123 4567", None);
    assert!(number.is_possible());
    assert!(number.is_invalid());
    assert_eq!(Some(PhoneNumberType::Unknown), number.number_type());
    assert_eq!(Some("+15551234567"), number.e164());

    let too_long = handle("+165025311111", None);
    assert!(too_long.is_impossible());
    assert!(too_long.is_invalid());
    assert_eq!(Some("+165025311111"), too_long.e164());
    assert_eq!(Some(RegionCode::parse(Region::us())), too_long.region_code());
    assert_eq!(Some(""), too_long.area_code());
}

#[test]
fn explicit_region_restricts_validity() {
    let us_number = handle("+14043841384", Some(Region::us()));
    assert!(us_number.is_valid());

    let elsewhere = handle("+14043841384", Some(Region::gb()));
    assert!(elsewhere.is_invalid());
    assert!(elsewhere.is_possible());
    assert_eq!(Some(RegionCode::parse(Region::gb())), elsewhere.region_code());
    // Identity does not depend on the region hint.
    assert_eq!(us_number, elsewhere);

    let bahamas = handle("+1 242 357 0000", Some(Region::bs()));
    assert!(bahamas.is_valid());
    assert!(handle("+1 242 357 0000", Some(Region::us())).is_invalid());
}

#[test]
fn non_geographical_number() {
    let number = handle("+800 1234 5678", None);
    assert!(number.is_valid());
    assert_eq!(Some(RegionCode::NON_GEO_ENTITY), number.region_code());
    assert_eq!(Some("+800 1234 5678"), number.international());
    assert_eq!(Some("1234 5678"), number.national());
    // Not ten digits, so the raw and dasherized forms keep the plain digits.
    assert_eq!(Some("12345678"), number.raw_national());
    assert_eq!(Some("80012345678"), number.raw_international());
    assert_eq!(Some("12345678"), number.dasherized_national());
    assert_eq!(Some("800-12345678"), number.dasherized_international());
    assert_eq!(Some(""), number.area_code());
}

#[test]
fn italian_leading_zero_is_kept() {
    let number = handle("+39 02 3661 8300", None);
    assert!(number.is_valid());
    assert_eq!(Some("+390236618300"), number.e164());
    assert_eq!(Some("02 3661 8300"), number.national());
    assert_eq!(Some("0236618300"), number.raw_national());
    assert_eq!(Some("023-661-8300"), number.dasherized_national());
    assert_eq!(Some("02"), number.area_code());
}

#[test]
fn extension_is_parsed_and_formatted() {
    let number = handle("+1 404-384-1384 ext. 123", None);
    assert!(number.is_valid());
    assert_eq!(Some("123"), number.extension());
    assert_eq!(Some("+14043841384"), number.e164());
    assert_eq!(Some("(404) 384-1384 ext. 123"), number.national());
    assert_eq!(Some("+1 404-384-1384 ext. 123"), number.international());
    assert_eq!(Some("tel:+1-404-384-1384;ext=123"), number.rfc3966());
    assert_eq!(Some("4043841384"), number.raw_national());
    assert_eq!(Some("1-404-384-1384"), number.dasherized_international());
    assert_ne!(number, handle("+14043841384", None));
}

#[test]
fn empty_handle_answers_absent() {
    init_logger();
    let inputs = [
        PhoneNumberHandle::new(None::<&str>, None),
        PhoneNumberHandle::new(RawInput::Absent, Some(Region::us())),
        PhoneNumberHandle::new("", Some(Region::us())),
        PhoneNumberHandle::new("not a number", Some(Region::us())),
        PhoneNumberHandle::new("+999 1234 5678", None),
    ];
    for number in &inputs {
        assert!(number.is_empty());
        assert!(!number.is_valid());
        assert!(number.is_invalid());
        assert!(!number.is_possible());
        assert!(number.is_impossible());
        assert_eq!(None, number.number_type());
        assert_eq!(None, number.e164());
        assert_eq!(None, number.national());
        assert_eq!(None, number.international());
        assert_eq!(None, number.rfc3966());
        assert_eq!(None, number.raw_national());
        assert_eq!(None, number.raw_international());
        assert_eq!(None, number.dasherized_national());
        assert_eq!(None, number.dasherized_international());
        assert_eq!(None, number.region_code());
        assert_eq!(None, number.country());
        assert_eq!(None, number.country_code());
        assert_eq!(None, number.area_code());
        assert_eq!(None, number.to_text());
        assert_eq!(None, number.extension());
        assert_eq!(None, number.phone_number());
        assert_eq!("", number.to_string());
    }
    // Empty handles are all equal to each other.
    assert!(inputs.iter().all(|number| *number == inputs[0]));
}

#[test]
fn equality_ignores_how_the_number_was_written() {
    let canonical = handle("+14043841384", None);
    let equivalents = [
        handle("(404) 384-1384", Some(Region::us())),
        handle("404.384.1384", Some(Region::us())),
        handle("1 404 384 1384", Some(Region::us())),
        handle("011 1 404 384 1384", Some(Region::us())),
        handle("tel:+1-404-384-1384", None),
        handle("+1 404 384 1384", Some(Region::nz())),
        PhoneNumberHandle::new(4043841384u64, Some(Region::us())),
        PhoneNumberHandle::new(14043841384i64, Some(Region::us())),
        PhoneNumberHandle::new(String::from("+14043841384"), None),
    ];
    for number in &equivalents {
        assert_eq!(canonical, *number, "{:?}", number);
    }
    assert_ne!(canonical, handle("+14043841385", None));
    assert_ne!(canonical, PhoneNumberHandle::new(None::<&str>, None));

    let set = equivalents.iter().cloned().collect::<HashSet<_>>();
    assert_eq!(1, set.len());
    assert!(set.contains(&canonical));
}

#[test]
fn canonical_text_parses_back_to_an_equal_handle() {
    for input in ["+14043841384", "+39 02 3661 8300", "+800 1234 5678", "+44 20 8738 9353"] {
        let number = handle(input, None);
        let reparsed = handle(number.e164().expect("number should parse"), None);
        assert_eq!(number, reparsed);
        assert_eq!(number.e164(), reparsed.e164());
    }
}

#[test]
fn accessors_are_memoized() {
    let number = handle("+14043841384", None);
    let first = number.national().expect("number should parse");
    let second = number.national().expect("number should parse");
    assert!(std::ptr::eq(first, second));

    let first = number.dasherized_international().expect("number should parse");
    let second = number.dasherized_international().expect("number should parse");
    assert!(std::ptr::eq(first, second));

    // Memoized state does not take part in equality.
    let fresh = handle("+14043841384", None);
    assert_eq!(number, fresh);

    // Clones carry the already computed values.
    let cloned = number.clone();
    assert_eq!(number.national(), cloned.national());
}

#[test]
fn raw_input_is_not_retained() {
    let padded = format!("+1 404 384 1384{}", " ".repeat(200));
    let number = handle(&padded, None);
    let parsed = number.phone_number().expect("number should parse");
    assert!(!parsed.has_raw_input());
    assert_eq!(CountryCodeSource::Unspecified, parsed.country_code_source());
    assert_eq!(4043841384, parsed.national_number());
    assert_eq!(Ok(parsed.clone()), PHONE_NUMBER_UTIL.parse(&padded, "ZZ"));

    // Dozens of digits are rejected rather than stored.
    let pathological = handle(&format!("+1{}", "9".repeat(60)), None);
    assert!(pathological.is_empty());
}

#[test]
fn region_hint_is_normalized() {
    let number = handle("7911 123456", Some(" gb "));
    assert_eq!(Some(RegionCode::parse(Region::gb())), number.input_region());
    assert!(number.is_valid());

    let blank = handle("+447911123456", Some("   "));
    assert_eq!(None, blank.input_region());
    assert!(blank.is_valid());
}

#[test]
fn national_input_needs_a_region() {
    let _guard = DefaultRegionGuard::with(None);
    let number = handle("4043841384", None);
    assert!(number.is_empty());
    assert!(number.is_invalid());

    let negative = PhoneNumberHandle::new(-12i32, None);
    assert!(negative.is_impossible());
    assert!(handle("-12", None).is_impossible());
}

#[test]
fn default_region_applies_when_no_region_is_given() {
    let _guard = DefaultRegionGuard::with(Some(Region::us()));
    let number = handle("4043841384", None);
    assert!(number.is_valid());
    assert_eq!(Some("+14043841384"), number.e164());
    // A number from the default region reports the region of its calling code.
    assert_eq!(Some(RegionCode::parse(Region::us())), number.region_code());
    assert_eq!(None, number.input_region());

    // An explicit region wins over the default one.
    let gb = handle("07911 123456", Some(Region::gb()));
    assert_eq!(Some("+447911123456"), gb.e164());
}

#[test]
fn default_region_changes_validity_of_national_input() {
    let _guard = DefaultRegionGuard::with(Some(Region::nz()));
    let number = handle("4043841384", None);
    assert!(number.is_invalid());
    assert_eq!(Some(64), number.country_code());
}

#[test]
fn default_region_does_not_restrict_validity() {
    let _guard = DefaultRegionGuard::with(Some(Region::us()));
    let number = handle("+447400123456", None);
    assert!(number.is_valid());
    assert_eq!(Some(RegionCode::parse(Region::gb())), number.region_code());
    assert!(api::is_valid("+447400123456"));
    assert!(api::is_valid("+44 7911 123456"));

    // Only an explicit region narrows validity.
    assert!(handle("+447400123456", Some(Region::us())).is_invalid());
    assert!(api::is_invalid_for_country("+447400123456", Region::us()));
}

#[test]
fn unrecognised_explicit_region_never_validates() {
    for region in ["USA", "1", Region::zz()] {
        let number = handle("+14043841384", Some(region));
        assert!(!number.is_empty(), "{}", region);
        assert_eq!(Some(RegionCode::UNKNOWN), number.input_region());
        assert!(number.is_invalid(), "{}", region);
        assert!(number.is_possible());
        assert_eq!(Some("+14043841384"), number.e164());
        // The calling code still names a region.
        assert_eq!(Some(RegionCode::parse(Region::us())), number.region_code());
    }
    assert!(api::is_invalid_for_country("+14043841384", "USA"));

    // Non-geographical numbers validate against `001` itself.
    assert!(handle("+800 1234 5678", Some(Region::un001())).is_valid());
}

#[test]
fn text_form_is_e164() {
    let number = handle("(404) 384-1384 ext. 12", Some(Region::us()));
    assert_eq!(Some("+14043841384"), number.to_text());
    assert_eq!(number.e164(), number.to_text());
    assert_eq!("+14043841384", number.to_string());
    assert_eq!(None, handle("", Some(Region::us())).to_text());
}
