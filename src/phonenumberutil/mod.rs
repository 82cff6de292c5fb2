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

mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
pub(self) mod helper_types;

use std::sync::LazyLock;

pub use enums::{NumberLengthType, PhoneNumberFormat, PhoneNumberType};
pub(crate) use helper_constants::{
    DASHERIZED_GROUPING_FORMAT, RAW_GROUPING_FORMAT,
    TEN_DIGIT_GROUPING_PATTERN,
};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Process-wide engine instance; built on first use and read-only afterwards.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
