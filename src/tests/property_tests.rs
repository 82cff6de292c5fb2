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

use proptest::prelude::*;

use crate::{handle::PhoneNumberHandle, i18n::RegionCode};

fn arb_valid_number() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\+1 404 [2-9][0-9]{2} [0-9]{4}",
        "\\+1 242 357 [0-9]{4}",
        "\\+44 7400 [0-9]{6}",
        "\\+44 20 [0-9]{4} [0-9]{4}",
        "\\+39 02 [0-9]{4} [0-9]{4}",
        "\\+39 3[1-9][0-9] [0-9]{3} [0-9]{4}",
        "\\+61 2 [0-9]{4} [0-9]{4}",
        "\\+64 3[2-79][0-9]{2} [0-9]{4}",
        "\\+800 [1-9][0-9]{3} [0-9]{4}",
    ]
}

fn arb_phone_like() -> impl Strategy<Value = String> {
    "\\+?[0-9() .-]{0,24}"
}

proptest! {
    #[test]
    fn e164_parses_back_to_the_same_number(input in arb_valid_number()) {
        let number = PhoneNumberHandle::new(input.as_str(), None);
        prop_assert!(number.is_valid(), "{} should be valid", input);

        let e164 = number.e164().unwrap_or_default();
        let reparsed = PhoneNumberHandle::new(e164, None);
        prop_assert_eq!(&number, &reparsed);
        prop_assert_eq!(number.e164(), reparsed.e164());
        prop_assert_eq!(number.national(), reparsed.national());
    }

    #[test]
    fn national_form_parses_back_in_its_region(input in arb_valid_number()) {
        let number = PhoneNumberHandle::new(input.as_str(), None);
        let region = number.region_code().unwrap_or_default();
        // Non-geographical codes have no national dialling context.
        prop_assume!(!region.is_non_geo_entity());
        let national = number.national().unwrap_or_default();
        let reparsed = PhoneNumberHandle::new(national, Some(region.as_str()));
        prop_assert_eq!(&number, &reparsed);
    }

    #[test]
    fn valid_numbers_are_possible(input in arb_phone_like()) {
        let number = PhoneNumberHandle::new(input.as_str(), None);
        prop_assert!(!number.is_valid() || number.is_possible());
        prop_assert_eq!(number.is_valid(), !number.is_invalid());
        prop_assert_eq!(number.is_possible(), !number.is_impossible());
    }

    #[test]
    fn accessors_are_stable(input in arb_phone_like()) {
        let number = PhoneNumberHandle::new(input.as_str(), None);
        let cloned = number.clone();
        for _ in 0..2 {
            prop_assert_eq!(number.e164(), cloned.e164());
            prop_assert_eq!(number.national(), cloned.national());
            prop_assert_eq!(number.international(), cloned.international());
            prop_assert_eq!(number.rfc3966(), cloned.rfc3966());
            prop_assert_eq!(number.dasherized_international(), cloned.dasherized_international());
            prop_assert_eq!(number.raw_international(), cloned.raw_international());
            prop_assert_eq!(number.number_type(), cloned.number_type());
            prop_assert_eq!(number.area_code(), cloned.area_code());
            prop_assert_eq!(number.region_code(), cloned.region_code());
        }
        // Every accessor agrees on whether there is a number at all.
        prop_assert_eq!(number.is_empty(), number.e164().is_none());
        prop_assert_eq!(number.is_empty(), number.country_code().is_none());
    }

    #[test]
    fn region_code_survives_bit_packing(text in "[a-zA-Z]{2}|001|[a-z0-9 ]{0,4}") {
        let region = RegionCode::parse(&text);
        prop_assert_eq!(region, RegionCode::from_bits(region.to_bits()));
        if region != RegionCode::UNKNOWN && region != RegionCode::NON_GEO_ENTITY {
            prop_assert_eq!(region.as_str(), text.trim().to_ascii_uppercase());
        }
    }
}
