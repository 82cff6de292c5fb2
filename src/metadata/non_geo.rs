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

/// Universal International Freephone Service, `+800`.
pub(super) const INTERNATIONAL_FREEPHONE: PhoneMetadata = PhoneMetadata {
    id: "001",
    country_code: 800,
    general_desc: PhoneNumberDesc {
        national_number_pattern: Some(r"(?:00|[1-9]\d)\d{6}"),
        possible_length: &[8],
        possible_length_local_only: &[],
        example_number: None,
    },
    toll_free: PhoneNumberDesc::new(r"(?:00|[1-9]\d)\d{6}", &[], "12345678"),
    number_format: &[NumberFormat::new(r"(\d{4})(\d{4})", "$1 $2")],
    ..PhoneMetadata::EMPTY
};
