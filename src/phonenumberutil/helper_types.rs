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

use std::borrow::Cow;

use crate::phonenumber::CountryCodeSource;

/// Normalized digits left after removing a leading `+` or IDD, together with
/// which of the two (if any) was found.
#[derive(Debug)]
pub struct IddStrippedNumber<'a> {
    pub digits: Cow<'a, str>,
    pub source: CountryCodeSource,
}

impl<'a> IddStrippedNumber<'a> {
    pub fn new(digits: Cow<'a, str>, source: CountryCodeSource) -> Self {
        Self { digits, source }
    }
}
