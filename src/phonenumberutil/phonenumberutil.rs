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

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet, VecDeque},
};

use log::{error, trace, warn};
use regex::{NoExpand, Regex};

use super::{
    NumberLengthType, PhoneNumberFormat, PhoneNumberType,
    errors::{
        EngineError, ExampleNumberResult, ExtractNumberError, GetExampleNumberError,
        NotANumberError, ParseError, ParseResult, ValidationError,
    },
    helper_constants::{
        DEFAULT_EXTN_PREFIX, MAX_INPUT_STRING_LENGTH, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN,
        MIN_LENGTH_FOR_NSN, PLUS_SIGN, REGION_CODE_FOR_NON_GEO_ENTITY, RFC3966_EXTN_PREFIX,
        RFC3966_ISDN_SUBADDRESS, RFC3966_PHONE_CONTEXT, RFC3966_PREFIX, UNKNOWN_REGION,
    },
    helper_functions::{
        self, get_number_desc_by_type, get_supported_types_for_metadata, normalize_helper,
        prefix_number_with_country_calling_code, test_number_length_with_unknown_type,
    },
    helper_types::IddStrippedNumber,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    i18n::RegionCode,
    interfaces::MatcherApi,
    macros::owned_from_cow_or,
    metadata::METADATA,
    phonemetadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc},
    phonenumber::{CountryCodeSource, PhoneNumber},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::{RegexConsume, find_all_first_groups},
    regexp_cache::{RegexResult, or_library_bug},
};

pub struct PhoneNumberUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. Regions under NANPA
    /// share the country calling code 1; the main region of a code comes first.
    /// This is implemented as a sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<&'static str>)>,

    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<&'static str, &'static PhoneMetadata>,

    /// A mapping from a country calling code for a non-geographical entity to the
    /// PhoneMetadata for that country calling code. Examples of the country
    /// calling codes include 800 (International Toll Free Service) and 808
    /// (International Shared Cost Service).
    country_code_to_non_geographical_metadata_map: HashMap<i32, &'static PhoneMetadata>,
}

impl PhoneNumberUtil {
    /// Creates an instance backed by the compiled-in metadata.
    pub fn new() -> Self {
        Self::new_for_metadata(METADATA)
    }

    /// Creates an instance backed by the given metadata tables.
    pub fn new_for_metadata(metadata_collection: &'static [PhoneMetadata]) -> Self {
        let mut instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            country_calling_code_to_region_code_map: Default::default(),
            region_to_metadata_map: Default::default(),
            country_code_to_non_geographical_metadata_map: Default::default(),
        };
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<&'static str>>::new();
        for metadata in metadata_collection {
            let region_code = metadata.id();
            if RegionCode::UNKNOWN == region_code {
                continue;
            }

            let country_calling_code = metadata.country_code();
            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                instance
                    .country_code_to_non_geographical_metadata_map
                    .insert(country_calling_code, metadata);
            } else {
                instance.region_to_metadata_map.insert(region_code, metadata);
            }

            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if metadata.main_country_for_code() {
                regions.push_front(region_code);
            } else {
                regions.push_back(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(k, v)| (k, Vec::from(v))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(a, _)| *a);
        instance
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.region_to_metadata_map.keys().copied()
    }

    pub fn get_supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_code_to_non_geographical_metadata_map
            .keys()
            .copied()
    }

    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.get_metadata_for_region(region_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    pub fn get_supported_types_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.get_metadata_for_non_geographical_region(country_calling_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!(
                    "Unknown country calling code for a non-geographical entity provided: {}",
                    country_calling_code
                );
                None
            })
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all. At the moment, checks to see that the string begins with
    /// at least 3 digits, ignoring any punctuation commonly found in phone
    /// numbers, or is exactly two digits long. This method does not require the
    /// number to be normalized in advance.
    pub fn is_viable_phone_number(&self, phone_number: &str) -> bool {
        if phone_number.len() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.is_match(phone_number)
    }

    /// Keeps every decimal digit of the input, converted to ASCII, and drops
    /// everything else.
    pub fn normalize_digits_only(phone_number: &str) -> String {
        dec_from_char::normalize_decimals(phone_number)
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    /// Normalizes a string of characters representing a phone number. Decimal
    /// digits of any script are converted to ASCII digits, and if the number
    /// contains at least three letters they are converted with the ITU keypad
    /// mapping. Everything else is removed.
    fn normalize(&self, phone_number: &str) -> String {
        let phone_number = dec_from_char::normalize_decimals(phone_number);
        if self.reg_exps.valid_alpha_phone_pattern.is_match(&phone_number) {
            normalize_helper(
                |c| self.reg_exps.alpha_phone_mappings.get(&c).copied(),
                true,
                &phone_number,
            )
        } else {
            Self::normalize_digits_only(&phone_number)
        }
    }

    fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    fn has_valid_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(k, _)| *k)
            .is_ok()
    }

    fn get_metadata_for_region(&self, region_code: &str) -> Option<&'static PhoneMetadata> {
        self.region_to_metadata_map.get(region_code).copied()
    }

    fn get_metadata_for_non_geographical_region(
        &self,
        country_calling_code: i32,
    ) -> Option<&'static PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
            .copied()
    }

    fn get_metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&'static PhoneMetadata> {
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            self.get_metadata_for_non_geographical_region(country_calling_code)
        } else {
            self.get_metadata_for_region(region_code)
        }
    }

    /// Formats a phone number in the specified format using default rules.
    ///
    /// Numbers whose country calling code is unknown come back as the bare
    /// national significant number, except in E164 which always carries the
    /// code.
    pub fn format<'b>(
        &self,
        phone_number: &'b PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        or_library_bug(self.format_internal(phone_number, number_format))
    }

    fn format_internal<'b>(
        &self,
        phone_number: &'b PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> RegexResult<Cow<'b, str>> {
        if phone_number.national_number() == 0 {
            let raw_input = phone_number.raw_input();
            if !raw_input.is_empty() {
                // Unparseable numbers that kept their raw input just use that.
                return Ok(Cow::Borrowed(raw_input));
            }
        }
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);

        if number_format == PhoneNumberFormat::E164 {
            // Early exit for E164 case (even if the country calling code is invalid)
            // since no formatting of the national number needs to be applied.
            // Extensions are not formatted.
            let mut formatted_number = national_significant_number;
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Ok(Cow::Owned(formatted_number));
        }
        // Note here that all NANPA formatting rules are contained by US, so we use
        // that to format NANPA numbers.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(Cow::Owned(national_significant_number));
        };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn(&national_significant_number, metadata, number_format)?,
            national_significant_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(Cow::Owned(formatted_number))
    }

    /// Formats a phone number using client-defined formatting rules. `$NP` in a
    /// national prefix formatting rule is replaced by the region's national
    /// prefix and `$FG` by the first group.
    ///
    /// When no supplied format matches, the national significant number is
    /// used unformatted.
    pub fn format_by_pattern(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> String {
        or_library_bug(self.format_by_pattern_internal(
            phone_number,
            number_format,
            user_defined_formats,
        ))
    }

    fn format_by_pattern_internal(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> RegexResult<String> {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        // Formatting information for regions which share a country calling code
        // is contained by only one region, so the main region is used.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_calling_code, region_code)
        else {
            return Ok(national_significant_number);
        };

        let formatting_pattern = self.choose_formatting_pattern_for_number(
            user_defined_formats,
            &national_significant_number,
        )?;

        let mut formatted_number = if let Some(formatting_pattern) = formatting_pattern {
            let national_prefix_formatting_rule =
                formatting_pattern.national_prefix_formatting_rule();
            let national_prefix = metadata.national_prefix();
            let rule = if !national_prefix_formatting_rule.is_empty()
                && !national_prefix.is_empty()
            {
                // Replace $NP with national prefix and $FG with the first group ($1).
                Cow::Owned(
                    national_prefix_formatting_rule
                        .replace("$NP", national_prefix)
                        .replace("$FG", "$1"),
                )
            } else {
                // We don't want to have a rule for how to format the national prefix if
                // there isn't one.
                Cow::Borrowed("")
            };
            self.format_nsn_using_pattern(
                &national_significant_number,
                formatting_pattern,
                &rule,
                number_format,
            )?
            .into_owned()
        } else {
            national_significant_number
        };
        if let Some(extension) =
            Self::get_formatted_extension(phone_number, metadata, number_format)
        {
            formatted_number.push_str(&extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    /// Gets the national significant number of a phone number. Note a national
    /// significant number doesn't contain a national prefix or any formatting.
    pub fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
        // If leading zero(s) have been set, we prefix this now. Note this is not a
        // national prefix. Negative counts are treated as zero.
        let zeros_start = if phone_number.italian_leading_zero() {
            "0".repeat(phone_number.number_of_leading_zeros().max(0) as usize)
        } else {
            String::new()
        };

        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());

        fast_cat::concat_str!(zeros_start.as_str(), national_number)
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, `ZZ` will be returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &'static str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .first()
            .copied()
            .unwrap_or(UNKNOWN_REGION)
    }

    /// Returns the region codes that match the specific country calling code,
    /// main region first. Empty when the code is unknown.
    pub fn get_region_codes_for_country_calling_code(
        &self,
        country_calling_code: i32,
    ) -> &[&'static str] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the country calling code for a specific region, or 0 for an
    /// unknown or invalid region.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        match self.get_metadata_for_region(region_code) {
            Some(metadata) => metadata.country_code(),
            None => {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                0
            }
        }
    }

    fn format_nsn<'b>(
        &self,
        phone_number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> RegexResult<Cow<'b, str>> {
        // When the intl_number_formats exists, we use that to format national number
        // for the INTERNATIONAL format instead of using the number_formats.
        let available_formats = if metadata.intl_number_format.is_empty()
            || number_format == PhoneNumberFormat::National
        {
            metadata.number_format
        } else {
            metadata.intl_number_format
        };
        let formatting_pattern =
            self.choose_formatting_pattern_for_number(available_formats, phone_number)?;
        if let Some(formatting_pattern) = formatting_pattern {
            self.format_nsn_using_pattern(
                phone_number,
                formatting_pattern,
                formatting_pattern.national_prefix_formatting_rule(),
                number_format,
            )
        } else {
            Ok(Cow::Borrowed(phone_number))
        }
    }

    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> RegexResult<Option<&'b NumberFormat>> {
        for format in available_formats {
            // We always use the last leading_digits_pattern, as it is the most
            // detailed.
            if let Some(leading_digits) = format.leading_digits_pattern.last() {
                if !self
                    .reg_exps
                    .regexp_cache
                    .get_prefix_regex(leading_digits)?
                    .is_match(national_number)
                {
                    continue;
                }
            }
            let pattern_to_match = self
                .reg_exps
                .regexp_cache
                .get_full_match_regex(format.pattern())?;
            if pattern_to_match.is_match(national_number) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    /// Applies `formatting_pattern` to the national number. The national prefix
    /// formatting rule is passed separately so that user supplied formats can
    /// override it.
    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        national_prefix_formatting_rule: &str,
        number_format: PhoneNumberFormat,
    ) -> RegexResult<Cow<'b, str>> {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format());
        if number_format == PhoneNumberFormat::National
            && !national_prefix_formatting_rule.is_empty()
        {
            // Apply the national_prefix_formatting_rule as the formatting_pattern
            // contains only information on how the national significant number
            // should be formatted at this point.
            let with_prefix_rule = self
                .reg_exps
                .first_group_capturing_pattern
                .replacen(
                    &number_format_rule,
                    1,
                    NoExpand(national_prefix_formatting_rule),
                )
                .into_owned();
            number_format_rule = Cow::Owned(with_prefix_rule);
        }

        let pattern_to_match = self
            .reg_exps
            .regexp_cache
            .get_full_match_regex(formatting_pattern.pattern())?;

        let mut formatted_number =
            pattern_to_match.replace_all(national_number, number_format_rule.as_ref());

        if number_format == PhoneNumberFormat::RFC3966 {
            // First consume any leading punctuation, if any was present.
            if let Some(rest) = self
                .reg_exps
                .separator_pattern
                .consume_start(&formatted_number)
            {
                let rest = rest.to_owned();
                formatted_number = Cow::Owned(rest);
            }
            // Then replace all separators with a "-".
            let dasherized = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted_number, "-")
                .into_owned();
            formatted_number = Cow::Owned(dasherized);
        }
        Ok(formatted_number)
    }

    /// Returns the formatted extension of a phone number, if the phone number had an
    /// extension specified else None.
    fn get_formatted_extension(
        phone_number: &PhoneNumber,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Option<String> {
        if !phone_number.has_extension() || phone_number.extension().is_empty() {
            return None;
        }

        let prefix = if number_format == PhoneNumberFormat::RFC3966 {
            RFC3966_EXTN_PREFIX
        } else if metadata.has_preferred_extn_prefix() {
            metadata.preferred_extn_prefix()
        } else {
            DEFAULT_EXTN_PREFIX
        };
        Some(fast_cat::concat_str!(prefix, phone_number.extension()))
    }

    /// Gets the type of a valid phone number.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        or_library_bug(self.get_number_type_internal(phone_number))
    }

    fn get_number_type_internal(
        &self,
        phone_number: &PhoneNumber,
    ) -> RegexResult<PhoneNumberType> {
        let region_code = self.get_region_code_for_number_internal(phone_number)?;
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(phone_number.country_code(), region_code)
        else {
            return Ok(PhoneNumberType::Unknown);
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        Ok(self.get_number_type_helper(&national_significant_number, metadata))
    }

    /// Returns the region where a phone number is from. This could be used for
    /// geocoding at the region level. Only guarantees correct results for valid,
    /// full numbers (not short-codes, or invalid numbers).
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> &'static str {
        or_library_bug(self.get_region_code_for_number_internal(phone_number))
    }

    fn get_region_code_for_number_internal(
        &self,
        phone_number: &PhoneNumber,
    ) -> RegexResult<&'static str> {
        let country_calling_code = phone_number.country_code();
        let region_codes = self.get_region_codes_for_country_calling_code(country_calling_code);
        match region_codes {
            [] => {
                trace!(
                    "Missing/invalid country calling code ({})",
                    country_calling_code
                );
                Ok(UNKNOWN_REGION)
            }
            [region_code] => Ok(*region_code),
            _ => self.get_region_code_for_number_from_region_list(phone_number, region_codes),
        }
    }

    fn get_region_code_for_number_from_region_list(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &[&'static str],
    ) -> RegexResult<&'static str> {
        let national_number = Self::get_national_significant_number(phone_number);
        for &code in region_codes {
            let Some(metadata) = self.get_metadata_for_region(code) else {
                continue;
            };
            if metadata.has_leading_digits() {
                if self
                    .reg_exps
                    .regexp_cache
                    .get_prefix_regex(metadata.leading_digits())?
                    .is_match(&national_number)
                {
                    return Ok(code);
                }
            } else if self.get_number_type_helper(&national_number, metadata)
                != PhoneNumberType::Unknown
            {
                return Ok(code);
            }
        }
        Ok(UNKNOWN_REGION)
    }

    fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            trace!(
                "Number '{national_number}' type unknown - doesn't match general national number pattern"
            );
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national_number, &metadata.premium_rate) {
            trace!("Number '{national_number}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, &metadata.toll_free) {
            trace!("Number '{national_number}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, &metadata.shared_cost) {
            trace!("Number '{national_number}' is a shared cost number.");
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, &metadata.voip) {
            trace!("Number '{national_number}' is a VOIP (Voice over IP) number.");
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, &metadata.personal_number) {
            trace!("Number '{national_number}' is a personal number.");
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, &metadata.pager) {
            trace!("Number '{national_number}' is a pager number.");
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, &metadata.uan) {
            trace!("Number '{national_number}' is a UAN.");
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, &metadata.voicemail) {
            trace!("Number '{national_number}' is a voicemail number.");
            return PhoneNumberType::VoiceMail;
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line);
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!(
                    "Number '{national_number}': fixed-line and mobile patterns equal, \
                     number is fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            } else if self.is_number_matching_desc(national_number, &metadata.mobile) {
                trace!(
                    "Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                     still fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, &metadata.mobile)
        {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!(
            "Number '{national_number}' type unknown - doesn't match any specific number type pattern."
        );
        PhoneNumberType::Unknown
    }

    fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> bool {
        // Check if any possible number lengths are present; if so, we use them to
        // avoid checking the validation pattern if they don't match. If they are
        // absent, this means they match the general description, which we have
        // already checked before checking a specific number type.
        let actual_length = national_number.len() as i32;
        if !number_desc.possible_length.is_empty()
            && !number_desc.possible_length.contains(&actual_length)
        {
            return false;
        }
        helper_functions::is_match(self.matcher_api.as_ref(), national_number, number_desc)
    }

    /// Tests whether a phone number matches a valid pattern. Note this doesn't
    /// verify the number is actually in use, which is impossible to tell by just
    /// looking at a number itself.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.get_region_code_for_number(phone_number);
        self.is_valid_number_for_region(phone_number, region_code)
    }

    /// Tests whether a phone number is valid for a certain region. Note this does
    /// not verify the number is actually in use, which is impossible to tell by
    /// just looking at a number itself. If the country calling code is not the
    /// same as the country calling code for the region, this immediately exits
    /// with false.
    pub fn is_valid_number_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_code: &str,
    ) -> bool {
        let country_code = phone_number.country_code();
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return false;
        };
        if REGION_CODE_FOR_NON_GEO_ENTITY != region_code
            && country_code != metadata.country_code()
        {
            // The country calling code for this number does not match that of the
            // region code.
            return false;
        }
        let national_number = Self::get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_number, metadata) != PhoneNumberType::Unknown
    }

    /// Convenience wrapper around [`PhoneNumberUtil::is_possible_number_with_reason`].
    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(phone_number).is_ok()
    }

    /// Checks whether a phone number is a possible number, using only its length.
    ///
    /// For regions that share a country calling code, like NANPA numbers, the
    /// rules of the main region are used, since the region of a number that is
    /// possible but not valid cannot be told.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        let national_number = Self::get_national_significant_number(phone_number);
        let country_code = phone_number.country_code();
        if !self.has_valid_country_calling_code(country_code) {
            return Err(ValidationError::InvalidCountryCode);
        }
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return Err(ValidationError::InvalidCountryCode);
        };
        test_number_length_with_unknown_type(&national_number, metadata)
    }

    /// Tests whether a phone number has a geographical association: fixed-line
    /// numbers, and mobile numbers in countries that assign them geographically.
    pub fn is_number_geographical(&self, phone_number: &PhoneNumber) -> bool {
        self.is_number_type_geographical(
            self.get_number_type(phone_number),
            phone_number.country_code(),
        )
    }

    fn is_number_type_geographical(
        &self,
        phone_number_type: PhoneNumberType,
        country_calling_code: i32,
    ) -> bool {
        matches!(
            phone_number_type,
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
        ) || (phone_number_type == PhoneNumberType::Mobile
            && self
                .reg_exps
                .geo_mobile_countries
                .contains(&country_calling_code))
    }

    /// Gets the length of the geographical area code from the national number.
    /// Returns 0 when the number has no area code, e.g. for non-geographical
    /// numbers or closed dialling plans.
    pub fn get_length_of_geographical_area_code(&self, phone_number: &PhoneNumber) -> usize {
        let region_code = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self.get_metadata_for_region(region_code) else {
            return 0;
        };
        let phone_number_type = self.get_number_type(phone_number);
        let country_calling_code = phone_number.country_code();
        // Note this is a rough heuristic; it doesn't cover Indonesia well, for
        // example, where area codes are present for some mobile phones but not for
        // others.
        if phone_number_type == PhoneNumberType::Mobile
            && self
                .reg_exps
                .geo_mobile_countries_without_mobile_area_codes
                .contains(&country_calling_code)
        {
            return 0;
        }
        // If a country doesn't use a national prefix, and this number doesn't have
        // an Italian leading zero, we assume it is a closed dialling plan with no
        // area codes.
        if !metadata.has_national_prefix()
            && !phone_number.italian_leading_zero()
            && !self
                .reg_exps
                .countries_without_national_prefix_with_area_codes
                .contains(&country_calling_code)
        {
            return 0;
        }
        if !self.is_number_type_geographical(phone_number_type, country_calling_code) {
            return 0;
        }
        self.get_length_of_national_destination_code(phone_number)
    }

    /// Gets the length of the national destination code (NDC) from the number,
    /// as read from its international format.
    pub fn get_length_of_national_destination_code(&self, phone_number: &PhoneNumber) -> usize {
        let mut copied_number = phone_number.clone();
        copied_number.clear_extension();
        let formatted_number = self.format(&copied_number, PhoneNumberFormat::International);
        let digit_groups = find_all_first_groups(
            &self.reg_exps.capturing_ascii_digits_pattern,
            &formatted_number,
        );
        // We should find at least three groups: the country calling code, the NDC
        // and the subscriber number.
        if digit_groups.len() < 3 {
            return 0;
        }
        if self.get_number_type(phone_number) == PhoneNumberType::Mobile {
            // For example Argentinian mobile numbers, when formatted in the
            // international format, are in the form of +54 9 NDC XXXX... As a result,
            // we take the length of the third group (NDC) and add the length of the
            // mobile token, which also forms part of the national significant number.
            if let Some(mobile_token) = self
                .reg_exps
                .mobile_token_mappings
                .get(&phone_number.country_code())
            {
                return digit_groups[2].len() + mobile_token.len_utf8();
            }
        }
        digit_groups[1].len()
    }

    /// Gets a valid fixed-line number for the specified region.
    pub fn get_example_number(
        &self,
        region_code: &str,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    /// Gets a valid number for the specified region and number type.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        phone_number_type: PhoneNumberType,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type_internal(region_code, phone_number_type)
            .map_err(EngineError::into_public)
    }

    fn get_example_number_for_type_internal(
        &self,
        region_code: &str,
        phone_number_type: PhoneNumberType,
    ) -> ExampleNumberResult<PhoneNumber> {
        let Some(region_metadata) = self.get_metadata_for_region(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode.into());
        };
        let desc = get_number_desc_by_type(region_metadata, phone_number_type);
        if !desc.has_example_number() {
            return Err(GetExampleNumberError::NoExampleNumber.into());
        }
        self.parse_helper(desc.example_number(), region_code, false, true)
            .inspect_err(|err| error!("Error parsing example number ({:?})", err))
            .map_err(EngineError::from)
    }

    /// Gets a valid number for the specified non-geographical country calling
    /// code, trying the number types in a fixed order.
    pub fn get_example_number_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        let Some(metadata) = self.get_metadata_for_non_geographical_region(country_calling_code)
        else {
            warn!(
                "Invalid or unknown country calling code provided: {}",
                country_calling_code
            );
            return Err(GetExampleNumberError::InvalidRegionCode);
        };
        // Fixed-line and personal numbers aren't used by non-geographical
        // entities.
        let types = [
            &metadata.mobile,
            &metadata.toll_free,
            &metadata.shared_cost,
            &metadata.voip,
            &metadata.voicemail,
            &metadata.uan,
            &metadata.premium_rate,
        ];
        let mut buf = itoa::Buffer::new();
        let country_calling_code_str = buf.format(country_calling_code);
        for desc in types.into_iter().filter(|desc| desc.has_example_number()) {
            let number_to_parse = fast_cat::concat_str!(
                PLUS_SIGN,
                country_calling_code_str,
                desc.example_number()
            );
            match self.parse_helper(&number_to_parse, UNKNOWN_REGION, false, true) {
                Ok(phone_number) => return Ok(phone_number),
                Err(EngineError::Regex(err)) => {
                    return Err(EngineError::<GetExampleNumberError>::Regex(err).into_public());
                }
                Err(err) => error!("Error parsing example number ({:?})", err),
            }
        }
        Err(GetExampleNumberError::CouldNotGetNumber)
    }

    /// Parses a string and returns it as a phone number with core fields only.
    ///
    /// `default_region` is only used if the number is not written in
    /// international format (a leading plus). With an unknown region such
    /// numbers fail with [`ParseError::InvalidCountryCode`].
    pub fn parse(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false, true)
            .map_err(EngineError::into_public)
    }

    /// Like [`PhoneNumberUtil::parse`], but also records the raw input and the
    /// country code source.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, true, true)
            .map_err(EngineError::into_public)
    }

    fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: &str,
        keep_raw_input: bool,
        check_region: bool,
    ) -> ParseResult<PhoneNumber> {
        if number_to_parse.len() > MAX_INPUT_STRING_LENGTH {
            trace!("Input exceeds maximum allowed length.");
            return Err(ParseError::TooLongNsn.into());
        }
        let national_number = self.build_national_number_for_parsing(number_to_parse)?;

        if !self.is_viable_phone_number(&national_number) {
            trace!(
                "The string supplied did not seem to be a phone number '{}'.",
                national_number
            );
            return Err(NotANumberError::NotMatchedValidNumberPattern.into());
        }

        if check_region && !self.check_region_for_parsing(&national_number, default_region) {
            trace!("Missing or invalid default country.");
            return Err(ParseError::InvalidCountryCode.into());
        }
        let mut temp_number = PhoneNumber::new();
        if keep_raw_input {
            temp_number.set_raw_input(number_to_parse);
        }
        // Attempt to parse extension first, since it doesn't require
        // region-specific data and we want to have the non-normalised number here.
        let national_number = match self.maybe_strip_extension(&national_number) {
            Some((number, extension)) => {
                temp_number.set_extension(extension);
                number
            }
            None => national_number.as_str(),
        };

        let mut country_metadata = self.get_metadata_for_region(default_region);
        let mut normalized_national_number = national_number.to_owned();
        if let Err(err) = self.maybe_extract_country_code(
            country_metadata,
            keep_raw_input,
            &mut normalized_national_number,
            &mut temp_number,
        ) {
            let without_plus = self
                .reg_exps
                .plus_chars_pattern
                .consume_start(national_number);
            match (err, without_plus) {
                (EngineError::Public(ParseError::InvalidCountryCode), Some(rest)) => {
                    // Strip the plus-char, and try again.
                    normalized_national_number = rest.to_owned();
                    if let Err(EngineError::Regex(err)) = self
                        .maybe_extract_country_code(
                            country_metadata,
                            keep_raw_input,
                            &mut normalized_national_number,
                            &mut temp_number,
                        )
                    {
                        return Err(err.into());
                    }
                    if temp_number.country_code() == 0 {
                        return Err(ParseError::InvalidCountryCode.into());
                    }
                }
                (err, _) => return Err(err),
            }
        }

        let mut country_code = temp_number.country_code();
        if country_code != 0 {
            let phone_number_region = self.get_region_code_for_country_code(country_code);
            if phone_number_region != default_region {
                country_metadata = self
                    .get_metadata_for_region_or_calling_code(country_code, phone_number_region);
            }
        } else if let Some(metadata) = country_metadata {
            // If no extracted country calling code, use the region supplied
            // instead. The national number was already normalized by
            // maybe_extract_country_code.
            country_code = metadata.country_code();
        }

        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }
        if let Some(country_metadata) = country_metadata {
            if let Some(potential_national_number) =
                self.maybe_strip_national_prefix(country_metadata, &normalized_national_number)?
            {
                // We require that the NSN remaining after stripping the national
                // prefix is of a possible length for the region. Otherwise, we
                // don't do the stripping, since the original number could be a
                // valid number.
                let validation_result = test_number_length_with_unknown_type(
                    potential_national_number,
                    country_metadata,
                );
                if !matches!(
                    validation_result,
                    Err(ValidationError::TooShort)
                        | Err(ValidationError::InvalidLength)
                        | Ok(NumberLengthType::IsPossibleLocalOnly)
                ) {
                    let potential_national_number = potential_national_number.to_owned();
                    normalized_national_number = potential_national_number;
                }
            }
        }
        let normalized_national_number_length = normalized_national_number.len();
        if normalized_national_number_length < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }
        if normalized_national_number_length > MAX_LENGTH_FOR_NSN {
            trace!("The string supplied is too long to be a phone number.");
            return Err(ParseError::TooLongNsn.into());
        }
        temp_number.set_country_code(country_code);
        Self::set_italian_leading_zeros_for_phone_number(
            &normalized_national_number,
            &mut temp_number,
        );
        let number_as_int = normalized_national_number
            .parse::<u64>()
            .map_err(NotANumberError::FailedToParseNumberAsInt)?;
        temp_number.set_national_number(number_as_int);
        Ok(temp_number)
    }

    /// Converts `number_to_parse` to a form that we can parse: the number part
    /// of an RFC3966 URI (with a global phone-context prepended), or otherwise
    /// the possible number extracted from free text.
    fn build_national_number_for_parsing(
        &self,
        number_to_parse: &str,
    ) -> ParseResult<String> {
        let index_of_phone_context = number_to_parse.find(RFC3966_PHONE_CONTEXT);
        let phone_context = Self::extract_phone_context(number_to_parse, index_of_phone_context);
        if !self.is_phone_context_valid(phone_context) {
            trace!("The phone-context value is invalid.");
            return Err(NotANumberError::InvalidPhoneContext.into());
        }

        let mut national_number = String::with_capacity(number_to_parse.len());
        match (index_of_phone_context, phone_context) {
            (Some(index_of_phone_context), Some(phone_context)) => {
                // If the phone context contains a phone number prefix, we need to
                // capture it, whereas domains will be ignored.
                if phone_context.starts_with(PLUS_SIGN) {
                    national_number.push_str(phone_context);
                }
                // Now append everything between the "tel:" prefix and the
                // phone-context. This should include the national number, an
                // optional extension or isdn-subaddress component. "tel:" may be
                // missing, in which case we append everything from the beginning.
                let index_of_national_number = number_to_parse
                    .find(RFC3966_PREFIX)
                    .map(|index| index + RFC3966_PREFIX.len())
                    .filter(|index| *index <= index_of_phone_context)
                    .unwrap_or(0);
                national_number
                    .push_str(&number_to_parse[index_of_national_number..index_of_phone_context]);
            }
            _ => {
                // Extract a possible number from the string passed in (this strips
                // leading characters that could not be the start of a phone
                // number.)
                national_number.push_str(self.extract_possible_number(number_to_parse)?);
            }
        }

        // Delete the isdn-subaddress and everything after it if it is present.
        // Note extension won't appear at the same time with isdn-subaddress
        // according to paragraph 5.3 of RFC3966.
        if let Some(index_of_isdn) = national_number.find(RFC3966_ISDN_SUBADDRESS) {
            national_number.truncate(index_of_isdn);
        }
        // If both phone context and isdn-subaddress are absent but other
        // parameters are present, the parameters are left in national_number.
        // Content is only deleted when the number is clearly written in RFC3966.
        Ok(national_number)
    }

    /// Extracts the value of the phone-context parameter, following the
    /// syntax of RFC3966. `None` when the parameter is absent.
    fn extract_phone_context(
        number_to_extract_from: &str,
        index_of_phone_context: Option<usize>,
    ) -> Option<&str> {
        let index_of_phone_context = index_of_phone_context?;
        let phone_context_start = index_of_phone_context + RFC3966_PHONE_CONTEXT.len();
        // If phone-context parameter is empty
        if phone_context_start >= number_to_extract_from.len() {
            return Some("");
        }
        let phone_context = &number_to_extract_from[phone_context_start..];
        // Return the value up to the next parameter, if any.
        Some(
            phone_context
                .find(';')
                .map_or(phone_context, |end| &phone_context[..end]),
        )
    }

    /// Returns whether the value of the phone-context parameter follows the
    /// syntax defined in RFC3966.
    fn is_phone_context_valid(&self, phone_context: Option<&str>) -> bool {
        let Some(phone_context) = phone_context else {
            return true;
        };
        if phone_context.is_empty() {
            return false;
        }
        // Does phone-context value match pattern of global-number-digits or
        // domainname
        self.reg_exps
            .rfc3966_global_number_digits_pattern
            .is_match(phone_context)
            || self
                .reg_exps
                .rfc3966_domainname_pattern
                .is_match(phone_context)
    }

    /// Attempts to extract a possible number from the string passed in. This
    /// currently strips all leading characters that cannot be used to start a
    /// phone number, trailing characters that are neither alphanumeric nor `#`,
    /// and anything that looks like the start of a second number.
    fn extract_possible_number<'a>(
        &self,
        phone_number: &'a str,
    ) -> Result<&'a str, ExtractNumberError> {
        let Some(start) = self.reg_exps.valid_start_char_pattern.find(phone_number) else {
            trace!(
                "Number does not contain valid start characters: '{}'",
                phone_number
            );
            return Err(ExtractNumberError::NoValidStartCharacter);
        };
        // Remove trailing non-alpha non-numerical characters.
        let mut extracted_number = self.trim_unwanted_end_chars(&phone_number[start.start()..]);
        if extracted_number.is_empty() {
            return Err(ExtractNumberError::NotANumber);
        }
        // Now remove any extra numbers at the end.
        if let Some(first_number) = self
            .reg_exps
            .capture_up_to_second_number_start_pattern
            .captures(extracted_number)
            .and_then(|captures| captures.get(1))
        {
            extracted_number = first_number.as_str();
        }
        Ok(extracted_number)
    }

    fn trim_unwanted_end_chars<'a>(&self, phone_number: &'a str) -> &'a str {
        let mut buf = [0u8; 4];
        let trimmed_len = phone_number
            .char_indices()
            .rev()
            .find(|(_, c)| {
                !self
                    .reg_exps
                    .unwanted_end_char_pattern
                    .is_match(c.encode_utf8(&mut buf))
            })
            .map_or(0, |(index, c)| index + c.len_utf8());
        &phone_number[..trimmed_len]
    }

    /// Checks to see that the region code used is valid, or if it is not valid,
    /// that the number to parse starts with a + symbol so that we can attempt to
    /// infer the country from the number.
    fn check_region_for_parsing(&self, number_to_parse: &str, default_region: &str) -> bool {
        if !self.is_valid_region_code(default_region) && !number_to_parse.is_empty() {
            return self
                .reg_exps
                .plus_chars_pattern
                .matches_start(number_to_parse);
        }
        true
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns the number without it together with
    /// the extension.
    fn maybe_strip_extension<'a>(&self, phone_number: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self.reg_exps.extn_pattern.captures(phone_number)?;
        let whole_match = captures.get(0)?;
        // The extension is the first non-empty capturing group.
        let extension = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|group| group.as_str())
            .find(|group| !group.is_empty())?;
        let number_without_extension = &phone_number[..whole_match.start()];
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        if !self.is_viable_phone_number(number_without_extension) {
            return None;
        }
        Some((number_without_extension, extension))
    }

    /// Tries to extract a country calling code from a number. Country calling
    /// codes are extracted in the following ways:
    ///   - by stripping the international dialing prefix of the region the
    ///     person is dialing from, if this is present in the number, and looking
    ///     at the next digits
    ///   - by stripping the '+' sign if present and then looking at the next
    ///     digits
    ///   - by comparing the start of the number and the country calling code of
    ///     the default region. If the number is not considered possible for the
    ///     numbering plan of the default region initially, but starts with the
    ///     country calling code of this region, validation will be reattempted
    ///     after stripping this country calling code. If this number is
    ///     considered a possible number, then the first digits will be considered
    ///     the country calling code and removed as such.
    ///
    /// Sets the country code of `phone_number` to 0 when none was found. On
    /// success `national_number` holds the normalized remainder.
    fn maybe_extract_country_code(
        &self,
        default_region_metadata: Option<&PhoneMetadata>,
        keep_raw_input: bool,
        national_number: &mut String,
        phone_number: &mut PhoneNumber,
    ) -> ParseResult<()> {
        // Set the default prefix to be something that will never match if there is
        // no default region.
        let possible_country_idd_prefix = default_region_metadata
            .map(|metadata| metadata.international_prefix())
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or("NonMatch");

        let stripped = self.maybe_strip_international_prefix_and_normalize(
            national_number,
            possible_country_idd_prefix,
        )?;
        let country_code_source = stripped.source;
        let normalized_number = stripped.digits.into_owned();
        *national_number = normalized_number;

        if keep_raw_input {
            phone_number.set_country_code_source(country_code_source);
        }
        if country_code_source != CountryCodeSource::FromDefaultCountry {
            if national_number.len() <= MIN_LENGTH_FOR_NSN {
                trace!(
                    "Phone number had an IDD, but after this was not long enough to be a \
                     viable phone number."
                );
                return Err(ParseError::TooShortAfterIdd.into());
            }
            let potential_country_code = self.extract_country_code(national_number);
            if potential_country_code != 0 {
                phone_number.set_country_code(potential_country_code);
                return Ok(());
            }
            // If this fails, they must be using a strange country calling code
            // that we don't recognize, or that doesn't exist.
            return Err(ParseError::InvalidCountryCode.into());
        } else if let Some(metadata) = default_region_metadata {
            // Check to see if the number starts with the country calling code for
            // the default region. If so, we remove the country calling code, and do
            // some checks on the validity of the number before and after.
            let default_country_code = metadata.country_code();
            let mut buf = itoa::Buffer::new();
            let default_country_code_str = buf.format(default_country_code);
            if let Some(potential_national_number) =
                national_number.strip_prefix(default_country_code_str)
            {
                let general_num_desc = &metadata.general_desc;
                let potential_national_number = self
                    .maybe_strip_national_prefix(metadata, potential_national_number)?
                    .unwrap_or(potential_national_number);
                // If the number was not valid before but is valid now, or if it was
                // too long before, we consider the number with the country calling
                // code stripped to be a better result and keep that instead.
                if (!self.matcher_api.match_national_number(
                    national_number.as_str(),
                    general_num_desc,
                    false,
                ) && self.matcher_api.match_national_number(
                    potential_national_number,
                    general_num_desc,
                    false,
                )) || test_number_length_with_unknown_type(potential_national_number, metadata)
                    == Err(ValidationError::TooLong)
                {
                    let potential_national_number = potential_national_number.to_owned();
                    *national_number = potential_national_number;
                    if keep_raw_input {
                        phone_number
                            .set_country_code_source(CountryCodeSource::FromNumberWithoutPlusSign);
                    }
                    phone_number.set_country_code(default_country_code);
                    return Ok(());
                }
            }
        }
        // No country calling code present.
        phone_number.set_country_code(0);
        Ok(())
    }

    /// Strips any international prefix (such as +, 00, 011) present in the
    /// number provided, normalizes the resulting number, and indicates if an
    /// international prefix was present.
    fn maybe_strip_international_prefix_and_normalize<'a>(
        &self,
        phone_number: &'a str,
        possible_idd_prefix: &str,
    ) -> RegexResult<IddStrippedNumber<'a>> {
        if phone_number.is_empty() {
            return Ok(IddStrippedNumber::new(
                Cow::Borrowed(phone_number),
                CountryCodeSource::FromDefaultCountry,
            ));
        }
        // Check to see if the number begins with one or more plus signs.
        if let Some(rest) = self.reg_exps.plus_chars_pattern.consume_start(phone_number) {
            // Can now normalize the rest of the number since we've consumed the
            // "+" sign at the start.
            return Ok(IddStrippedNumber::new(
                Cow::Owned(self.normalize(rest)),
                CountryCodeSource::FromNumberWithPlusSign,
            ));
        }
        // Attempt to parse the first digits as an international prefix.
        let idd_pattern = self
            .reg_exps
            .regexp_cache
            .get_prefix_regex(possible_idd_prefix)?;
        let normalized_number = self.normalize(phone_number);
        if let Some(rest) = Self::parse_prefix_as_idd(&idd_pattern, &normalized_number) {
            return Ok(IddStrippedNumber::new(
                Cow::Owned(rest.to_owned()),
                CountryCodeSource::FromNumberWithIdd,
            ));
        }
        Ok(IddStrippedNumber::new(
            Cow::Owned(normalized_number),
            CountryCodeSource::FromDefaultCountry,
        ))
    }

    /// Strips the IDD from the start of the number if present. Helper function
    /// used by maybe_strip_international_prefix_and_normalize.
    fn parse_prefix_as_idd<'a>(idd_pattern: &Regex, phone_number: &'a str) -> Option<&'a str> {
        let rest = idd_pattern.consume_start(phone_number)?;
        // Only strip this if the first digit after the match is not a 0, since
        // country calling codes cannot begin with 0.
        if rest.starts_with('0') {
            return None;
        }
        Some(rest)
    }

    /// Extracts country calling code from `national_number`, and returns it. It
    /// assumes that the leading plus sign or IDD has already been removed.
    /// Returns 0 if `national_number` doesn't start with a valid country calling
    /// code, and leaves `national_number` unmodified.
    fn extract_country_code(&self, national_number: &mut String) -> i32 {
        if national_number.is_empty() || national_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return 0;
        }
        for i in 1..=MAX_LENGTH_COUNTRY_CODE.min(national_number.len()) {
            let Ok(potential_country_code) = national_number[..i].parse::<i32>() else {
                return 0;
            };
            if self.has_valid_country_calling_code(potential_country_code) {
                national_number.drain(..i);
                return potential_country_code;
            }
        }
        0
    }

    /// Strips any national prefix present in the number provided. Returns the
    /// remaining number, or `None` when nothing was stripped.
    fn maybe_strip_national_prefix<'a>(
        &self,
        metadata: &PhoneMetadata,
        phone_number: &'a str,
    ) -> RegexResult<Option<&'a str>> {
        let possible_national_prefix = metadata.national_prefix_for_parsing();
        if phone_number.is_empty() || possible_national_prefix.is_empty() {
            // Early return for numbers of zero length or with no national prefix
            // possible.
            return Ok(None);
        }
        let general_desc = &metadata.general_desc;
        // Check if the original number is viable.
        let is_viable_original_number =
            self.matcher_api
                .match_national_number(phone_number, general_desc, false);
        let possible_national_prefix_pattern = self
            .reg_exps
            .regexp_cache
            .get_prefix_regex(possible_national_prefix)?;
        let Some(stripped_number) = possible_national_prefix_pattern.consume_start(phone_number)
        else {
            trace!("The first digits did not match the national prefix.");
            return Ok(None);
        };
        // If the original number was viable, and the resultant number is not, we
        // return.
        if is_viable_original_number
            && !self
                .matcher_api
                .match_national_number(stripped_number, general_desc, false)
        {
            return Ok(None);
        }
        Ok(Some(stripped_number))
    }

    /// A helper function to set the values related to leading zeros in a
    /// PhoneNumber.
    fn set_italian_leading_zeros_for_phone_number(
        national_number: &str,
        phone_number: &mut PhoneNumber,
    ) {
        let digits = national_number.as_bytes();
        if digits.len() > 1 && digits[0] == b'0' {
            phone_number.set_italian_leading_zero(true);
            let mut number_of_leading_zeros = 1;
            // Note that if the national number is all "0"s, the last "0" is not
            // counted as a leading zero.
            while number_of_leading_zeros < digits.len() - 1
                && digits[number_of_leading_zeros] == b'0'
            {
                number_of_leading_zeros += 1;
            }
            if number_of_leading_zeros != 1 {
                phone_number.set_number_of_leading_zeros(number_of_leading_zeros as i32);
            }
        }
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
