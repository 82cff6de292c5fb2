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

//! Phone number value objects.
//!
//! [`PhoneNumberHandle`] parses free-form text once and lazily derives
//! validity, type, region and the standard formats from it. The engine behind
//! it, [`PhoneNumberUtil`], works on compiled-in metadata and is shared
//! process-wide through [`PHONE_NUMBER_UTIL`].

mod interfaces;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;
mod metadata;
mod phonemetadata;
mod phonenumber;
mod config;
mod input;
mod handle;
mod api;

/// Small macros for spots where the same few lines would otherwise repeat.
mod macros;

pub use api::{
    format_e164, format_international, format_national, format_rfc3966, is_impossible,
    is_invalid, is_invalid_for_country, is_possible, is_valid, is_valid_for_country,
    normalize_digits_only, parse,
};
pub use config::{default_region, set_default_region};
pub use handle::PhoneNumberHandle;
pub use i18n::RegionCode;
pub use input::RawInput;
pub use phonemetadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc};
pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phonenumberutil::{
    NumberLengthType, PHONE_NUMBER_UTIL, PhoneNumberFormat, PhoneNumberType,
    errors::{GetExampleNumberError, ParseError, ValidationError, NotANumberError, ExtractNumberError},
    phonenumberutil::PhoneNumberUtil,
};

#[cfg(test)]
mod tests;
