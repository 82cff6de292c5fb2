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

//! Numbering plan data model.
//!
//! Everything here is plain `'static` data so that the compiled-in tables can
//! live in read-only memory and be shared between threads without locking.

/// Describes one category of numbers (fixed line, mobile, ...) of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    /// Full-match pattern for the national significant number.
    pub national_number_pattern: Option<&'static str>,
    /// Sorted possible lengths of the national significant number.
    ///
    /// An empty slice means the lengths are inherited from the general
    /// description; `[-1]` means numbers of this type do not exist.
    pub possible_length: &'static [i32],
    /// Lengths that can only be dialled locally (without an area code).
    pub possible_length_local_only: &'static [i32],
    pub example_number: Option<&'static str>,
}

impl PhoneNumberDesc {
    /// Description of a number type that does not exist in a region.
    pub const NONE: PhoneNumberDesc = PhoneNumberDesc {
        national_number_pattern: None,
        possible_length: &[-1],
        possible_length_local_only: &[],
        example_number: None,
    };

    pub const fn new(
        national_number_pattern: &'static str,
        possible_length: &'static [i32],
        example_number: &'static str,
    ) -> Self {
        Self {
            national_number_pattern: Some(national_number_pattern),
            possible_length,
            possible_length_local_only: &[],
            example_number: Some(example_number),
        }
    }

    pub const fn with_local_only(mut self, possible_length_local_only: &'static [i32]) -> Self {
        self.possible_length_local_only = possible_length_local_only;
        self
    }

    pub fn national_number_pattern(&self) -> &'static str {
        self.national_number_pattern.unwrap_or("")
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn example_number(&self) -> &'static str {
        self.example_number.unwrap_or("")
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }
}

/// A formatting rule: which numbers it applies to and how to group them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Full-match pattern with one capturing group per output group.
    pub pattern: &'static str,
    /// Replacement template, e.g. `$1 $2`.
    pub format: &'static str,
    /// Prefix patterns, from least to most specific. Only the last one is used.
    pub leading_digits_pattern: &'static [&'static str],
    /// Rule applied to the first group in national format, e.g. `0$1`.
    /// `$NP` and `$FG` placeholders are accepted in user supplied formats.
    pub national_prefix_formatting_rule: Option<&'static str>,
}

impl NumberFormat {
    pub const fn new(pattern: &'static str, format: &'static str) -> Self {
        Self {
            pattern,
            format,
            leading_digits_pattern: &[],
            national_prefix_formatting_rule: None,
        }
    }

    pub const fn leading_digits(mut self, leading_digits_pattern: &'static [&'static str]) -> Self {
        self.leading_digits_pattern = leading_digits_pattern;
        self
    }

    pub const fn national_prefix_rule(mut self, rule: &'static str) -> Self {
        self.national_prefix_formatting_rule = Some(rule);
        self
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn format(&self) -> &'static str {
        self.format
    }

    pub fn national_prefix_formatting_rule(&self) -> &'static str {
        self.national_prefix_formatting_rule.unwrap_or("")
    }
}

/// Numbering plan of a single region (or non-geographical entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneMetadata {
    /// Region code, or `001` for non-geographical entities.
    pub id: &'static str,
    pub country_code: i32,
    pub international_prefix: Option<&'static str>,
    pub national_prefix: Option<&'static str>,
    pub national_prefix_for_parsing: Option<&'static str>,
    pub preferred_extn_prefix: Option<&'static str>,
    /// Prefix pattern that identifies this region among those sharing a
    /// country calling code.
    pub leading_digits: Option<&'static str>,
    pub main_country_for_code: bool,
    pub same_mobile_and_fixed_line_pattern: bool,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub voicemail: PhoneNumberDesc,
    pub no_international_dialling: PhoneNumberDesc,

    pub number_format: &'static [NumberFormat],
    /// Formats used for international output when they differ from the
    /// national ones.
    pub intl_number_format: &'static [NumberFormat],
}

impl PhoneMetadata {
    /// Base value for table entries; every description is absent.
    pub const EMPTY: PhoneMetadata = PhoneMetadata {
        id: "ZZ",
        country_code: 0,
        international_prefix: None,
        national_prefix: None,
        national_prefix_for_parsing: None,
        preferred_extn_prefix: None,
        leading_digits: None,
        main_country_for_code: false,
        same_mobile_and_fixed_line_pattern: false,
        general_desc: PhoneNumberDesc::NONE,
        fixed_line: PhoneNumberDesc::NONE,
        mobile: PhoneNumberDesc::NONE,
        toll_free: PhoneNumberDesc::NONE,
        premium_rate: PhoneNumberDesc::NONE,
        shared_cost: PhoneNumberDesc::NONE,
        personal_number: PhoneNumberDesc::NONE,
        voip: PhoneNumberDesc::NONE,
        pager: PhoneNumberDesc::NONE,
        uan: PhoneNumberDesc::NONE,
        voicemail: PhoneNumberDesc::NONE,
        no_international_dialling: PhoneNumberDesc::NONE,
        number_format: &[],
        intl_number_format: &[],
    };

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn international_prefix(&self) -> &'static str {
        self.international_prefix.unwrap_or("")
    }

    pub fn national_prefix(&self) -> &'static str {
        self.national_prefix.unwrap_or("")
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    pub fn national_prefix_for_parsing(&self) -> &'static str {
        self.national_prefix_for_parsing.unwrap_or("")
    }

    pub fn preferred_extn_prefix(&self) -> &'static str {
        self.preferred_extn_prefix.unwrap_or("")
    }

    pub fn has_preferred_extn_prefix(&self) -> bool {
        self.preferred_extn_prefix.is_some()
    }

    pub fn leading_digits(&self) -> &'static str {
        self.leading_digits.unwrap_or("")
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        self.same_mobile_and_fixed_line_pattern
    }
}
