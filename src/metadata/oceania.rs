// Copyright (C) 2009 The Libphonenumber Authors
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

use crate::phonemetadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc};

pub(super) const NZ: PhoneMetadata = PhoneMetadata {
    id: "NZ",
    country_code: 64,
    international_prefix: Some("0(?:0|161)"),
    national_prefix: Some("0"),
    national_prefix_for_parsing: Some("0"),
    main_country_for_code: true,
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"[2-9]\d{7,9}"),
        possible_length: &[8, 9, 10],
        possible_length_local_only: &[7],
        example_number: None,
    },
    fixed_line: PhoneNumberDesc::new(
        r"(?:3[2-79]|[49][2-9]|6[235-9]|7[2-57-9])\d{6}",
        &[8],
        "32345678",
    )
    .with_local_only(&[7]),
    mobile: PhoneNumberDesc::new(r"2[0-27-9]\d{6,8}", &[8, 9, 10], "211234567"),
    toll_free: PhoneNumberDesc::new(r"508\d{6,7}|80\d{6,8}", &[8, 9, 10], "800123456"),
    premium_rate: PhoneNumberDesc::new(r"90\d{6,8}", &[8, 9, 10], "900123456"),
    number_format: &[
        NumberFormat::new(r"(\d)(\d{3})(\d{4})", "$1-$2 $3")
            .leading_digits(&["[34679]"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{2})(\d{3})(\d{3,5})", "$1 $2 $3")
            .leading_digits(&["2"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3")
            .leading_digits(&["[89]|50"])
            .national_prefix_rule("0$1"),
    ],
    ..PhoneMetadata::EMPTY
};

pub(super) const AU: PhoneMetadata = PhoneMetadata {
    id: "AU",
    country_code: 61,
    international_prefix: Some("001[14-689]"),
    national_prefix: Some("0"),
    national_prefix_for_parsing: Some("0"),
    main_country_for_code: true,
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"[2-578]\d{8}|1\d{5,9}"),
        possible_length: &[6, 7, 8, 9, 10],
        possible_length_local_only: &[],
        example_number: None,
    },
    fixed_line: PhoneNumberDesc::new(r"[2378]\d{8}", &[9], "212345678"),
    mobile: PhoneNumberDesc::new(r"4\d{8}", &[9], "412345678"),
    toll_free: PhoneNumberDesc::new(r"180(?:0\d{3}|2)\d{3}", &[7, 10], "1800123456"),
    premium_rate: PhoneNumberDesc::new(r"190[0-26]\d{6}", &[10], "1900123456"),
    shared_cost: PhoneNumberDesc::new(r"13(?:00\d{6}|\d{4})", &[6, 10], "1300123456"),
    personal_number: PhoneNumberDesc::new(r"500\d{6}", &[9], "500123456"),
    voip: PhoneNumberDesc::new(r"550\d{6}", &[9], "550123456"),
    number_format: &[
        NumberFormat::new(r"(\d{2})(\d{2})(\d{2})", "$1 $2 $3").leading_digits(&["13"]),
        NumberFormat::new(r"(\d{4})(\d{3})(\d{3})", "$1 $2 $3").leading_digits(&["1"]),
        NumberFormat::new(r"(\d)(\d{4})(\d{4})", "$1 $2 $3")
            .leading_digits(&["[2378]"])
            .national_prefix_rule("(0$1)"),
        NumberFormat::new(r"(\d{3})(\d{3})(\d{3})", "$1 $2 $3")
            .leading_digits(&["[45]"])
            .national_prefix_rule("0$1"),
    ],
    ..PhoneMetadata::EMPTY
};
