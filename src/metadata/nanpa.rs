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

const NANPA_TOLL_FREE: &str = r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}";
const NANPA_PREMIUM_RATE: &str = r"900[2-9]\d{6}";

const US_GEOGRAPHIC: &str = concat!(
    r"(?:2(?:0[1-35-9]|1[02-9]|2[03-589]|3[149]|4[08]|5[1-46]|6[0279]|7[0269]|8[13])",
    r"|3(?:0[1-57-9]|1[02-9]|2[0135]|3[0-24679]|4[167]|5[12]|6[014]|8[056])",
    r"|4(?:0[124-9]|1[02-579]|2[3-5]|3[0245]|4[023578]|58|6[39]|7[0589]|8[04])",
    r"|5(?:0[1-47-9]|1[0235-8]|20|3[0149]|4[01]|5[19]|6[1-47]|7[0-5]|8[0256])",
    r"|6(?:0[1-35-9]|1[024-9]|2[03689]|3[016]|4[0156]|5[01679]|6[0-279]|78|8[0-29])",
    r"|7(?:0[1-46-8]|1[2-9]|2[04-7]|3[1247]|4[037]|5[47]|6[02359]|7[0-59]|8[156])",
    r"|8(?:0[1-68]|1[02-8]|2[068]|3[0-289]|4[03578]|5[046-9]|6[02-5]|7[028])",
    r"|9(?:0[1346-9]|1[02-9]|2[0589]|3[0146-8]|4[01357-9]|5[12469]|7[0-389]|8[04-69]))",
    r"[2-9]\d{6}",
);

const CA_GEOGRAPHIC: &str = concat!(
    r"(?:2(?:04|[23]6|[48]9|50|63)|3(?:06|43|54|6[578]|82)|4(?:03|1[68]|[26]8|3[178]|50|74)",
    r"|5(?:06|1[49]|48|79|8[147])|6(?:04|[18]3|39|47|72)|7(?:0[59]|42|53|78|8[02])",
    r"|8(?:[06]7|19|25|7[39])|90[25])[2-9]\d{6}",
);

pub(super) const US: PhoneMetadata = PhoneMetadata {
    id: "US",
    country_code: 1,
    international_prefix: Some("011"),
    national_prefix: Some("1"),
    national_prefix_for_parsing: Some("1"),
    main_country_for_code: true,
    same_mobile_and_fixed_line_pattern: true,
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"[2-9]\d{9}"),
        possible_length: &[10],
        possible_length_local_only: &[7],
        example_number: None,
    },
    fixed_line: PhoneNumberDesc::new(US_GEOGRAPHIC, &[], "2015550123").with_local_only(&[7]),
    mobile: PhoneNumberDesc::new(US_GEOGRAPHIC, &[], "2015550123").with_local_only(&[7]),
    toll_free: PhoneNumberDesc::new(NANPA_TOLL_FREE, &[], "8002345678"),
    premium_rate: PhoneNumberDesc::new(NANPA_PREMIUM_RATE, &[], "9002345678"),
    personal_number: PhoneNumberDesc::new(
        r"5(?:00|2[12]|33|44|66|77|88)[2-9]\d{6}",
        &[],
        "5002345678",
    ),
    number_format: &[
        NumberFormat::new(r"(\d{3})(\d{4})", "$1-$2").leading_digits(&["[2-9]"]),
        NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3").leading_digits(&["[2-9]"]),
    ],
    intl_number_format: &[
        NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3").leading_digits(&["[2-9]"]),
    ],
    ..PhoneMetadata::EMPTY
};

pub(super) const CA: PhoneMetadata = PhoneMetadata {
    id: "CA",
    country_code: 1,
    international_prefix: Some("011"),
    national_prefix: Some("1"),
    national_prefix_for_parsing: Some("1"),
    same_mobile_and_fixed_line_pattern: true,
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"[2-9]\d{9}"),
        possible_length: &[10],
        possible_length_local_only: &[7],
        example_number: None,
    },
    fixed_line: PhoneNumberDesc::new(CA_GEOGRAPHIC, &[], "5062345678").with_local_only(&[7]),
    mobile: PhoneNumberDesc::new(CA_GEOGRAPHIC, &[], "5062345678").with_local_only(&[7]),
    toll_free: PhoneNumberDesc::new(NANPA_TOLL_FREE, &[], "8002123456"),
    premium_rate: PhoneNumberDesc::new(NANPA_PREMIUM_RATE, &[], "9002123456"),
    ..PhoneMetadata::EMPTY
};

pub(super) const BS: PhoneMetadata = PhoneMetadata {
    id: "BS",
    country_code: 1,
    international_prefix: Some("011"),
    national_prefix: Some("1"),
    national_prefix_for_parsing: Some("1"),
    leading_digits: Some("242"),
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"(?:242|8(?:00|33|44|55|66|77|88)|900)\d{7}"),
        possible_length: &[10],
        possible_length_local_only: &[7],
        example_number: None,
    },
    fixed_line: PhoneNumberDesc::new(
        concat!(
            r"242(?:3(?:02|[236][1-9]|4[0-24-9]|5[0-68]|7[347]|8[0-4]|9[2-467])",
            r"|461|502|6(?:0[1-5]|12|2[013]|[45]0|7[67]|8[78]|9[89])|7(?:02|88))\d{4}",
        ),
        &[],
        "2423456789",
    )
    .with_local_only(&[7]),
    mobile: PhoneNumberDesc::new(
        concat!(
            r"242(?:3(?:5[79]|7[56]|95)|4(?:[23][1-9]|4[1-35-9]|5[1-8]|6[2-8]|7\d|81)",
            r"|5(?:2[45]|3[35]|44|5[1-46-9]|65|77)|6[34]6|7(?:27|38)|8(?:0[1-9]|1[02-9]|2\d|[89]9))\d{4}",
        ),
        &[],
        "2423591234",
    )
    .with_local_only(&[7]),
    toll_free: PhoneNumberDesc::new(NANPA_TOLL_FREE, &[], "8002123456"),
    premium_rate: PhoneNumberDesc::new(NANPA_PREMIUM_RATE, &[], "9002123456"),
    ..PhoneMetadata::EMPTY
};
