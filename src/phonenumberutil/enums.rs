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

use strum::{Display, EnumIter, IntoStaticStr};

/// Text renderings of a parsed number.
///
/// For the Atlanta number `+1 404-384-1384`:
/// - `E164`: `+14043841384`
/// - `International`: `+1 404-384-1384`
/// - `National`: `(404) 384-1384`
/// - `RFC3966`: `tel:+1-404-384-1384`
///
/// National and international groupings come from the region's metadata, so
/// separators differ between regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// Plus sign, calling code and national significant number, digits only.
    /// Extensions are dropped.
    E164,
    /// Calling code followed by the grouped national number.
    International,
    /// As dialled inside the region, with the national prefix where the
    /// region uses one.
    National,
    /// `tel:` URI with dashes between groups and `;ext=` for extensions.
    RFC3966,
}

/// Line type of a number as classified against its region's patterns.
///
/// `Display` renders the snake_case name, e.g. `fixed_line_or_mobile`.
#[derive(Debug, EnumIter, Display, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum PhoneNumberType {
    FixedLine,
    Mobile,
    /// The region's fixed-line and mobile ranges overlap (as in NANPA), so
    /// the two cannot be told apart.
    FixedLineOrMobile,
    /// Free for the caller.
    TollFree,
    PremiumRate,
    /// Call cost is split between caller and callee.
    SharedCost,
    #[strum(serialize = "voip")]
    VoIP,
    /// Follows a person rather than a line; routed wherever its owner chooses.
    PersonalNumber,
    Pager,
    /// Universal access number, one number routed to several sites of an
    /// organisation.
    #[strum(serialize = "uan")]
    UAN,
    #[strum(serialize = "voicemail")]
    VoiceMail,
    /// No pattern of the region matched.
    Unknown,
}

/// Successful outcome of a length check; failures are [`crate::ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// Long enough to be dialled from anywhere in the region.
    IsPossible,
    /// Only dialable locally, e.g. a NANPA number without its area code.
    IsPossibleLocalOnly,
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberType;

    #[test]
    fn type_names_are_snake_case() {
        assert_eq!(PhoneNumberType::FixedLineOrMobile.to_string(), "fixed_line_or_mobile");
        assert_eq!(PhoneNumberType::VoIP.to_string(), "voip");
        assert_eq!(PhoneNumberType::UAN.to_string(), "uan");
        assert_eq!(PhoneNumberType::VoiceMail.to_string(), "voicemail");
        let name: &'static str = PhoneNumberType::TollFree.into();
        assert_eq!(name, "toll_free");
    }
}
