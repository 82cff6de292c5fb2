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

//! Compiled-in numbering plans.
//!
//! Regions that share a country calling code are listed with the main region
//! first; NANPA formatting rules live in the US entry only.

mod nanpa;
mod europe;
mod oceania;
mod non_geo;

use crate::phonemetadata::PhoneMetadata;

pub static METADATA: &[PhoneMetadata] = &[
    nanpa::US,
    nanpa::CA,
    nanpa::BS,
    europe::GB,
    europe::IT,
    oceania::NZ,
    oceania::AU,
    non_geo::INTERNATIONAL_FREEPHONE,
];
