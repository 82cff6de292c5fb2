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

pub(super) const GB: PhoneMetadata = PhoneMetadata {
    id: "GB",
    country_code: 44,
    international_prefix: Some("00"),
    national_prefix: Some("0"),
    national_prefix_for_parsing: Some("0"),
    preferred_extn_prefix: Some(" x"),
    main_country_for_code: true,
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"[1-357-9]\d{9}|[18]\d{8}|8\d{6}"),
        possible_length: &[7, 9, 10],
        possible_length_local_only: &[],
        example_number: None,
    },
    fixed_line: PhoneNumberDesc::new(r"1\d{8,9}|2\d{9}", &[9, 10], "1212345678"),
    mobile: PhoneNumberDesc::new(
        concat!(
            r"7(?:457[0-57-9]|700[01]|911\d)\d{5}",
            r"|7(?:[1-3]\d\d|4(?:[0-46-9]\d|5[0-689])|5(?:0[0-8]|[13-9]\d|2[0-35-9])",
            r"|7(?:0[1-9]|[1-7]\d|8[02-9]|9[0-689])|8(?:[014-9]\d|[23][0-8])",
            r"|9(?:[024-9]\d|1[02-9]|3[0-689]))\d{6}",
        ),
        &[10],
        "7400123456",
    ),
    pager: PhoneNumberDesc::new(
        r"76(?:464|652)\d{5}|76(?:0[0-2]|2[356]|34|4[01347]|5[49]|6[0-369]|77|8[14]|9[139])\d{6}",
        &[10],
        "7640123456",
    ),
    toll_free: PhoneNumberDesc::new(r"80[08]\d{7}|800\d{6}|8001111", &[7, 9, 10], "8001234567"),
    premium_rate: PhoneNumberDesc::new(r"9[018]\d{8}", &[10], "9012345678"),
    shared_cost: PhoneNumberDesc::new(r"8(?:4[2-5]|7[0-3])\d{7}", &[10], "8431234567"),
    personal_number: PhoneNumberDesc::new(r"70\d{8}", &[10], "7012345678"),
    voip: PhoneNumberDesc::new(r"56\d{8}", &[10], "5612345678"),
    uan: PhoneNumberDesc::new(r"(?:3[0347]|55)\d{8}", &[10], "5512345678"),
    number_format: &[
        NumberFormat::new(r"(\d{3})(\d{4})", "$1 $2")
            .leading_digits(&["800", "8001", "80011", "800111", "8001111"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{3})(\d{6})", "$1 $2")
            .leading_digits(&["800"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{4})(\d{5})", "$1 $2")
            .leading_digits(&["1"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3")
            .leading_digits(&["1", r"1(?:1|\d1)"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{4})(\d{6})", "$1 $2")
            .leading_digits(&["1|7(?:[1-57-9]|62)"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3")
            .leading_digits(&["[25]|7(?:0|6[02-9])"])
            .national_prefix_rule("0$1"),
        NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3")
            .leading_digits(&["[389]"])
            .national_prefix_rule("0$1"),
    ],
    ..PhoneMetadata::EMPTY
};

pub(super) const IT: PhoneMetadata = PhoneMetadata {
    id: "IT",
    country_code: 39,
    international_prefix: Some("00"),
    main_country_for_code: true,
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"0\d{5,10}|3\d{8,9}|8\d{5,9}"),
        possible_length: &[6, 7, 8, 9, 10, 11],
        possible_length_local_only: &[],
        example_number: None,
    },
    fixed_line: PhoneNumberDesc::new(r"0\d{5,10}", &[6, 7, 8, 9, 10, 11], "0212345678"),
    mobile: PhoneNumberDesc::new(r"3[1-9]\d{7,8}", &[9, 10], "3123456789"),
    toll_free: PhoneNumberDesc::new(r"80(?:0\d{3}|3)\d{3}", &[6, 9], "800123456"),
    premium_rate: PhoneNumberDesc::new(r"89(?:2\d{3}|9\d{6})", &[6, 9], "899123456"),
    number_format: &[
        NumberFormat::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3").leading_digits(&["0[26]"]),
        NumberFormat::new(r"(\d{3})(\d{3})", "$1 $2").leading_digits(&["8"]),
        NumberFormat::new(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3")
            .leading_digits(&["0[13-57-9]|8"]),
        NumberFormat::new(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3").leading_digits(&["3"]),
    ],
    ..PhoneMetadata::EMPTY
};
