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

use std::borrow::Cow;

use crate::{config, i18n::RegionCode, macros::raw_input_from_integers};

/// Caller supplied phone number before parsing.
///
/// Text is parsed as written, integers are rendered in decimal first, and
/// `Absent` produces an empty handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput<'a> {
    Text(Cow<'a, str>),
    Integer(i128),
    Absent,
}

impl<'a> RawInput<'a> {
    /// Canonical text of the input, `None` for [`RawInput::Absent`].
    pub fn into_text(self) -> Option<Cow<'a, str>> {
        match self {
            RawInput::Text(text) => Some(text),
            RawInput::Integer(value) => {
                let mut buf = itoa::Buffer::new();
                Some(Cow::Owned(buf.format(value).to_owned()))
            }
            RawInput::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawInput::Absent)
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(value: &'a str) -> Self {
        RawInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(value: &'a String) -> Self {
        RawInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for RawInput<'_> {
    fn from(value: String) -> Self {
        RawInput::Text(Cow::Owned(value))
    }
}

impl<'a, T: Into<RawInput<'a>>> From<Option<T>> for RawInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Absent, Into::into)
    }
}

raw_input_from_integers!(i8, i16, i32, i64, i128, u8, u16, u32, u64, isize, usize);

/// Resolves the region a number is parsed against: the explicit region if
/// one was given and is not blank, else the process-wide default.
pub fn resolve_region(explicit: Option<&str>) -> RegionCode {
    match explicit.map(str::trim).filter(|region| !region.is_empty()) {
        Some(region) => RegionCode::parse(region),
        None => config::default_region(),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::RawInput;

    #[test]
    fn integers_become_decimal_text() {
        assert_eq!(RawInput::from(4043841384u64).into_text(), Some(Cow::Borrowed("4043841384")));
        assert_eq!(RawInput::from(-12i32).into_text(), Some(Cow::Borrowed("-12")));
    }

    #[test]
    fn none_is_absent() {
        assert!(RawInput::from(None::<&str>).is_absent());
        assert_eq!(RawInput::from(Some("+1")).into_text(), Some(Cow::Borrowed("+1")));
        assert_eq!(RawInput::Absent.into_text(), None);
    }
}
