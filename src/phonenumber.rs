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

/// Where the country calling code of a parsed number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCodeSource {
    #[default]
    Unspecified,
    /// The number started with a plus sign, e.g. `+44 20 7031 3000`.
    FromNumberWithPlusSign,
    /// The number started with the international dialling prefix of the
    /// default region, e.g. `011 44 20 7031 3000` dialled from the US.
    FromNumberWithIdd,
    /// The number started with the country calling code but without any
    /// prefix, e.g. `44 20 7031 3000`.
    FromNumberWithoutPlusSign,
    /// The country calling code was taken from the default region.
    FromDefaultCountry,
}

/// A parsed phone number.
///
/// Equality and hashing cover every field, so two numbers only compare equal
/// when they were both produced by `parse` (which keeps core fields only) or
/// both kept the same raw input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    italian_leading_zero: bool,
    number_of_leading_zeros: i32,
    raw_input: Option<String>,
    country_code_source: CountryCodeSource,
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self {
            country_code: 0,
            national_number: 0,
            extension: None,
            italian_leading_zero: false,
            number_of_leading_zeros: 1,
            raw_input: None,
            country_code_source: CountryCodeSource::Unspecified,
        }
    }
}

impl PhoneNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension = Some(extension.into());
    }

    pub fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = italian_leading_zero;
    }

    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros
    }

    pub fn set_number_of_leading_zeros(&mut self, number_of_leading_zeros: i32) {
        self.number_of_leading_zeros = number_of_leading_zeros;
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn set_raw_input(&mut self, raw_input: impl Into<String>) {
        self.raw_input = Some(raw_input.into());
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }

    pub fn set_country_code_source(&mut self, country_code_source: CountryCodeSource) {
        self.country_code_source = country_code_source;
    }

    pub fn clear_country_code_source(&mut self) {
        self.country_code_source = CountryCodeSource::Unspecified;
    }
}
