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

use crate::{
    api::{
        format_e164, format_international, format_national, format_rfc3966, is_impossible,
        is_invalid, is_invalid_for_country, is_possible, is_valid, is_valid_for_country,
        normalize_digits_only, parse,
    },
    config::{default_region, set_default_region},
    i18n::RegionCode,
};

use super::{DefaultRegionGuard, init_logger, region_code::RegionCode as Region};

#[test]
fn validity_predicates() {
    init_logger();
    assert!(is_valid("+14043841384"));
    assert!(!is_invalid("+14043841384"));
    assert!(is_valid("+44 7400 123456"));
    assert!(is_invalid("+1 555 123 4567"));
    assert!(is_invalid("garbage"));
    assert!(is_invalid(None::<&str>));
    assert!(is_invalid(""));

    assert!(is_possible("+1 555 123 4567"));
    assert!(!is_impossible("+1 555 123 4567"));
    assert!(is_impossible("+165025311111"));
    assert!(is_impossible(None::<&str>));
}

#[test]
fn validity_for_a_country() {
    init_logger();
    assert!(is_valid_for_country("+14043841384", Region::us()));
    assert!(is_invalid_for_country("+14043841384", Region::gb()));
    assert!(is_invalid_for_country("+14043841384", Region::ca()));
    assert!(is_valid_for_country("(404) 384-1384", Region::us()));
    assert!(is_valid_for_country("07400 123456", Region::gb()));
    assert!(is_valid_for_country("242 357 0000", Region::bs()));
    assert!(is_invalid_for_country("242 357 0000", Region::us()));
    assert!(is_invalid_for_country(None::<&str>, Region::us()));
}

#[test]
fn integer_input() {
    init_logger();
    assert!(is_valid_for_country(4043841384u64, Region::us()));
    assert!(is_valid_for_country(14043841384i64, Region::us()));
    assert_eq!(
        Some("+14043841384".to_owned()),
        format_e164(4043841384u64, Some(Region::us()))
    );
    assert!(is_impossible(-12i32));
    assert!(is_impossible("-12"));
}

#[test]
fn normalizes_digits() {
    assert_eq!(Some("03456234".to_owned()), normalize_digits_only("034-56&+a#234"));
    assert_eq!(Some("14043841384".to_owned()), normalize_digits_only("+1 (404) 384-1384"));
    assert_eq!(Some("4043841384".to_owned()), normalize_digits_only(4043841384u64));
    assert_eq!(Some(String::new()), normalize_digits_only("no digits"));
    assert_eq!(None, normalize_digits_only(None::<&str>));
}

#[test]
fn formats() {
    init_logger();
    assert_eq!(Some("+14043841384".to_owned()), format_e164("(404) 384-1384", Some(Region::us())));
    assert_eq!(Some("(404) 384-1384".to_owned()), format_national("+14043841384", None));
    assert_eq!(Some("+1 404-384-1384".to_owned()), format_international("+14043841384", None));
    assert_eq!(Some("tel:+1-404-384-1384".to_owned()), format_rfc3966("+14043841384", None));
    assert_eq!(Some("02 3661 8300".to_owned()), format_national("+39 02 3661 8300", None));
    assert_eq!(Some("+44 7400 123456".to_owned()), format_international("07400123456", Some(Region::gb())));

    assert_eq!(None, format_e164("garbage", Some(Region::us())));
    assert_eq!(None, format_national(None::<&str>, Some(Region::us())));
}

#[test]
fn parse_returns_a_handle() {
    init_logger();
    let number = parse("+1 800 221 1212", None);
    assert!(number.is_valid());
    assert_eq!(Some(""), number.area_code());
    assert_eq!(number, parse("1-800-221-1212", Some(Region::us())));
    assert!(parse(None::<&str>, None).is_empty());
}

#[test]
fn default_region_round_trip() {
    let _guard = DefaultRegionGuard::with(None);
    assert_eq!(RegionCode::UNKNOWN, default_region());
    assert!(is_invalid("4043841384"));
    assert_eq!(None, format_e164("4043841384", None));

    set_default_region(Some(Region::us()));
    assert_eq!(Region::us(), default_region().as_str());
    assert!(is_valid("4043841384"));
    assert_eq!(Some("+14043841384".to_owned()), format_e164("4043841384", None));

    // An explicit region still wins.
    assert_eq!(Some("+447400123456".to_owned()), format_e164("07400 123456", Some(Region::gb())));

    set_default_region(Some(" "));
    assert_eq!(RegionCode::UNKNOWN, default_region());
    set_default_region(Some("gb"));
    assert_eq!(Region::gb(), default_region().as_str());
    set_default_region(None);
    assert_eq!(RegionCode::UNKNOWN, default_region());
}
