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

use std::fmt;

/// A territory identifier: an uppercase CLDR two-letter code, the `001`
/// code used for non-geographical entities, or the unknown sentinel `ZZ`.
///
/// The value is three bytes wide and `Copy`, so it can be stored inline in
/// handles and packed into a single atomic word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCode([u8; 3]);

impl RegionCode {
    /// Region code representing the "unknown" region.
    pub const UNKNOWN: RegionCode = RegionCode(*b"ZZ\0");

    /// Region code used for non-geographical entities such as `+800`.
    pub const NON_GEO_ENTITY: RegionCode = RegionCode(*b"001");

    /// Returns a region code representing the "unknown" region.
    pub fn get_unknown() -> RegionCode {
        Self::UNKNOWN
    }

    /// Normalizes free-form text into a region code.
    ///
    /// Surrounding whitespace is ignored and letters are upper-cased. Anything
    /// that is neither two ASCII letters nor `001` maps to [`RegionCode::UNKNOWN`].
    pub fn parse(text: &str) -> RegionCode {
        let text = text.trim();
        match text.as_bytes() {
            b"001" => Self::NON_GEO_ENTITY,
            &[a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                RegionCode([a.to_ascii_uppercase(), b.to_ascii_uppercase(), 0])
            }
            _ => Self::UNKNOWN,
        }
    }

    pub fn as_str(&self) -> &str {
        let len = if self.0[2] == 0 { 2 } else { 3 };
        // only ASCII bytes are ever stored
        std::str::from_utf8(&self.0[..len]).unwrap_or("ZZ")
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    pub fn is_non_geo_entity(&self) -> bool {
        *self == Self::NON_GEO_ENTITY
    }

    /// Packs the code into the low three bytes of an `u32`.
    pub const fn to_bits(self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], 0])
    }

    /// Inverse of [`RegionCode::to_bits`].
    pub const fn from_bits(bits: u32) -> RegionCode {
        let [a, b, c, _] = bits.to_le_bytes();
        RegionCode([a, b, c])
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<&str> for RegionCode {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for RegionCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RegionCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionCode({})", self.as_str())
    }
}
