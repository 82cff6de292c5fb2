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

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::OnceLock,
};

use log::debug;

use crate::{
    i18n::RegionCode,
    input::{RawInput, resolve_region},
    phonemetadata::NumberFormat,
    phonenumber::PhoneNumber,
    phonenumberutil::{
        DASHERIZED_GROUPING_FORMAT, PHONE_NUMBER_UTIL, PhoneNumberFormat, PhoneNumberType,
        RAW_GROUPING_FORMAT, TEN_DIGIT_GROUPING_PATTERN,
        phonenumberutil::PhoneNumberUtil,
    },
};

const RAW_NATIONAL_FORMATS: [NumberFormat; 1] =
    [NumberFormat::new(TEN_DIGIT_GROUPING_PATTERN, RAW_GROUPING_FORMAT)];
const DASHERIZED_NATIONAL_FORMATS: [NumberFormat; 1] =
    [NumberFormat::new(TEN_DIGIT_GROUPING_PATTERN, DASHERIZED_GROUPING_FORMAT)];

/// Derived values of a handle. Every slot is written at most once.
#[derive(Debug, Clone, Default)]
struct Memo {
    valid: OnceLock<bool>,
    possible: OnceLock<bool>,
    number_type: OnceLock<PhoneNumberType>,
    region_code: OnceLock<RegionCode>,
    area_code: OnceLock<String>,
    e164: OnceLock<String>,
    national: OnceLock<String>,
    international: OnceLock<String>,
    rfc3966: OnceLock<String>,
    raw_national: OnceLock<String>,
    raw_international: OnceLock<String>,
    dasherized_national: OnceLock<String>,
    dasherized_international: OnceLock<String>,
}

/// A parsed phone number with lazily computed, memoized properties.
///
/// Construction never fails: absent or unparseable input yields an empty
/// handle, for which every predicate reports invalid and impossible and every
/// other accessor returns `None`.
///
/// Handles compare by the number they denote (country calling code, national
/// significant number including leading zeros, and extension), so
/// differently written inputs for the same number are equal. Empty handles
/// are equal to each other. The raw input text is not kept.
///
/// ```
/// use miniphone::PhoneNumberHandle;
///
/// let number = PhoneNumberHandle::new("+14043841384", None);
/// assert_eq!(number.national(), Some("(404) 384-1384"));
/// assert_eq!(number, PhoneNumberHandle::new("(404) 384-1384", Some("US")));
/// ```
#[derive(Debug, Clone)]
pub struct PhoneNumberHandle {
    number: Option<PhoneNumber>,
    input_region: Option<RegionCode>,
    memo: Memo,
}

impl PhoneNumberHandle {
    /// Parses `input` against `region`, falling back to the default region
    /// when `region` is `None` or blank.
    ///
    /// A region that is neither a two-letter code nor `001` (e.g. `"USA"`) is
    /// kept as [`RegionCode::UNKNOWN`]: numbers written with a plus still
    /// parse, but [`PhoneNumberHandle::is_valid`] reports `false` for them.
    pub fn new<'a>(input: impl Into<RawInput<'a>>, region: Option<&str>) -> Self {
        let input_region = region
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map(|text| {
                let region = RegionCode::parse(text);
                if region.is_unknown() && !text.eq_ignore_ascii_case(region.as_str()) {
                    debug!("Unrecognised region '{}' treated as unknown", text);
                }
                region
            });
        let Some(text) = input.into().into_text() else {
            return Self::empty(input_region);
        };
        let effective_region = resolve_region(region);
        let number = match PHONE_NUMBER_UTIL.parse(&text, effective_region.as_str()) {
            Ok(parsed) => {
                debug!("Parsed '{}' in region {}", text, effective_region);
                Some(parsed)
            }
            Err(err) => {
                debug!("Could not parse '{}' in region {}: {}", text, effective_region, err);
                None
            }
        };
        Self {
            number,
            input_region,
            memo: Memo::default(),
        }
    }

    /// Same as [`PhoneNumberHandle::new`].
    pub fn parse<'a>(input: impl Into<RawInput<'a>>, region: Option<&str>) -> Self {
        Self::new(input, region)
    }

    fn empty(input_region: Option<RegionCode>) -> Self {
        Self {
            number: None,
            input_region,
            memo: Memo::default(),
        }
    }

    fn util() -> &'static PhoneNumberUtil {
        &PHONE_NUMBER_UTIL
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_none()
    }

    /// The parsed number, core fields only.
    pub fn phone_number(&self) -> Option<&PhoneNumber> {
        self.number.as_ref()
    }

    /// The region explicitly passed at construction, if any.
    pub fn input_region(&self) -> Option<RegionCode> {
        self.input_region
    }

    /// Whether the number matches an allocated pattern. With an explicit input
    /// region the number must also belong to that region, so an unrecognised
    /// explicit region never validates. The default region plays no part.
    pub fn is_valid(&self) -> bool {
        let Some(number) = &self.number else {
            return false;
        };
        *self.memo.valid.get_or_init(|| match self.input_region {
            Some(region) => Self::util().is_valid_number_for_region(number, region.as_str()),
            None => Self::util().is_valid_number(number),
        })
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Whether the national significant number has a plausible length.
    pub fn is_possible(&self) -> bool {
        let Some(number) = &self.number else {
            return false;
        };
        *self
            .memo
            .possible
            .get_or_init(|| Self::util().is_possible_number(number))
    }

    pub fn is_impossible(&self) -> bool {
        !self.is_possible()
    }

    pub fn number_type(&self) -> Option<PhoneNumberType> {
        let number = self.number.as_ref()?;
        Some(
            *self
                .memo
                .number_type
                .get_or_init(|| Self::util().get_number_type(number)),
        )
    }

    /// The explicit input region, or else the main region of the country
    /// calling code.
    pub fn region_code(&self) -> Option<RegionCode> {
        let number = self.number.as_ref()?;
        Some(*self.memo.region_code.get_or_init(|| {
            match self.input_region {
                Some(region) if !region.is_unknown() => region,
                _ => RegionCode::parse(
                    Self::util().get_region_code_for_country_code(number.country_code()),
                ),
            }
        }))
    }

    /// Alias of [`PhoneNumberHandle::region_code`].
    pub fn country(&self) -> Option<RegionCode> {
        self.region_code()
    }

    pub fn country_code(&self) -> Option<i32> {
        self.number.as_ref().map(PhoneNumber::country_code)
    }

    /// Leading digits of the national significant number forming the
    /// geographical area code; empty when the number has none.
    pub fn area_code(&self) -> Option<&str> {
        let number = self.number.as_ref()?;
        Some(self.memo.area_code.get_or_init(|| {
            let util = Self::util();
            let length = util.get_length_of_geographical_area_code(number);
            let mut national_significant_number =
                PhoneNumberUtil::get_national_significant_number(number);
            national_significant_number.truncate(length);
            national_significant_number
        }))
    }

    pub fn extension(&self) -> Option<&str> {
        self.number
            .as_ref()
            .filter(|number| number.has_extension())
            .map(PhoneNumber::extension)
    }

    pub fn national_significant_number(&self) -> Option<String> {
        self.number
            .as_ref()
            .map(PhoneNumberUtil::get_national_significant_number)
    }

    pub fn e164(&self) -> Option<&str> {
        self.formatted(&self.memo.e164, PhoneNumberFormat::E164)
    }

    pub fn national(&self) -> Option<&str> {
        self.formatted(&self.memo.national, PhoneNumberFormat::National)
    }

    pub fn international(&self) -> Option<&str> {
        self.formatted(&self.memo.international, PhoneNumberFormat::International)
    }

    pub fn rfc3966(&self) -> Option<&str> {
        self.formatted(&self.memo.rfc3966, PhoneNumberFormat::RFC3966)
    }

    /// National significant number as contiguous digits.
    pub fn raw_national(&self) -> Option<&str> {
        self.formatted_by_pattern(&self.memo.raw_national, &RAW_NATIONAL_FORMATS)
    }

    /// Country calling code followed by [`PhoneNumberHandle::raw_national`].
    pub fn raw_international(&self) -> Option<&str> {
        let number = self.number.as_ref()?;
        let raw_national = self.raw_national()?;
        Some(self.memo.raw_international.get_or_init(|| {
            let mut buf = itoa::Buffer::new();
            fast_cat::concat_str!(buf.format(number.country_code()), raw_national)
        }))
    }

    /// National significant number grouped as `XXX-XXX-XXXX` when it has ten
    /// digits.
    pub fn dasherized_national(&self) -> Option<&str> {
        self.formatted_by_pattern(&self.memo.dasherized_national, &DASHERIZED_NATIONAL_FORMATS)
    }

    /// Country calling code, a dash, then [`PhoneNumberHandle::dasherized_national`].
    pub fn dasherized_international(&self) -> Option<&str> {
        let number = self.number.as_ref()?;
        let dasherized_national = self.dasherized_national()?;
        Some(self.memo.dasherized_international.get_or_init(|| {
            let mut buf = itoa::Buffer::new();
            fast_cat::concat_str!(buf.format(number.country_code()), "-", dasherized_national)
        }))
    }

    /// Canonical text of the number, its E.164 form.
    pub fn to_text(&self) -> Option<&str> {
        self.e164()
    }

    fn formatted<'s>(
        &'s self,
        slot: &'s OnceLock<String>,
        number_format: PhoneNumberFormat,
    ) -> Option<&'s str> {
        let number = self.number.as_ref()?;
        Some(slot.get_or_init(|| Self::util().format(number, number_format).into_owned()))
    }

    fn formatted_by_pattern<'s>(
        &'s self,
        slot: &'s OnceLock<String>,
        formats: &[NumberFormat],
    ) -> Option<&'s str> {
        let number = self.number.as_ref()?;
        Some(slot.get_or_init(|| {
            // Built from the national number alone.
            let mut number = number.clone();
            number.clear_extension();
            Self::util().format_by_pattern(&number, PhoneNumberFormat::National, formats)
        }))
    }
}

impl PartialEq for PhoneNumberHandle {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for PhoneNumberHandle {}

impl Hash for PhoneNumberHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for PhoneNumberHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.e164().unwrap_or(""))
    }
}

impl From<&str> for PhoneNumberHandle {
    fn from(value: &str) -> Self {
        Self::new(value, None)
    }
}
