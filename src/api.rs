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

//! One-shot helpers over [`PhoneNumberHandle`].
//!
//! Each function builds a transient handle, so the default region applies
//! whenever no region is passed.

use crate::{
    handle::PhoneNumberHandle,
    input::RawInput,
    phonenumberutil::phonenumberutil::PhoneNumberUtil,
};

/// Parses `input` into a handle. Never fails; see [`PhoneNumberHandle::new`].
pub fn parse<'a>(input: impl Into<RawInput<'a>>, region: Option<&str>) -> PhoneNumberHandle {
    PhoneNumberHandle::new(input, region)
}

pub fn is_valid<'a>(input: impl Into<RawInput<'a>>) -> bool {
    PhoneNumberHandle::new(input, None).is_valid()
}

pub fn is_invalid<'a>(input: impl Into<RawInput<'a>>) -> bool {
    !is_valid(input)
}

pub fn is_possible<'a>(input: impl Into<RawInput<'a>>) -> bool {
    PhoneNumberHandle::new(input, None).is_possible()
}

pub fn is_impossible<'a>(input: impl Into<RawInput<'a>>) -> bool {
    !is_possible(input)
}

/// Validity restricted to `region`: the number must be valid and belong to it.
pub fn is_valid_for_country<'a>(input: impl Into<RawInput<'a>>, region: &str) -> bool {
    PhoneNumberHandle::new(input, Some(region)).is_valid()
}

pub fn is_invalid_for_country<'a>(input: impl Into<RawInput<'a>>, region: &str) -> bool {
    !is_valid_for_country(input, region)
}

/// Keeps only the decimal digits of `input`, mapped to ASCII. Absent input
/// gives `None`.
pub fn normalize_digits_only<'a>(input: impl Into<RawInput<'a>>) -> Option<String> {
    let text = input.into().into_text()?;
    Some(PhoneNumberUtil::normalize_digits_only(&text))
}

pub fn format_e164<'a>(input: impl Into<RawInput<'a>>, region: Option<&str>) -> Option<String> {
    PhoneNumberHandle::new(input, region).e164().map(str::to_owned)
}

pub fn format_national<'a>(input: impl Into<RawInput<'a>>, region: Option<&str>) -> Option<String> {
    PhoneNumberHandle::new(input, region).national().map(str::to_owned)
}

pub fn format_international<'a>(
    input: impl Into<RawInput<'a>>,
    region: Option<&str>,
) -> Option<String> {
    PhoneNumberHandle::new(input, region)
        .international()
        .map(str::to_owned)
}

pub fn format_rfc3966<'a>(input: impl Into<RawInput<'a>>, region: Option<&str>) -> Option<String> {
    PhoneNumberHandle::new(input, region).rfc3966().map(str::to_owned)
}
