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

//! Process-wide default region.

use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

use crate::i18n::RegionCode;

// A region code fits in one word, so reads can never observe a torn value.
static DEFAULT_REGION: AtomicU32 = AtomicU32::new(RegionCode::UNKNOWN.to_bits());

/// Region used by handles and free functions when no region is given.
/// Starts out as [`RegionCode::UNKNOWN`].
pub fn default_region() -> RegionCode {
    RegionCode::from_bits(DEFAULT_REGION.load(Ordering::Acquire))
}

/// Replaces the default region. `None`, blank or unrecognised text resets it
/// to [`RegionCode::UNKNOWN`].
pub fn set_default_region(region: Option<&str>) {
    let region = region.map_or(RegionCode::UNKNOWN, RegionCode::parse);
    debug!("Default region set to {}", region);
    DEFAULT_REGION.store(region.to_bits(), Ordering::Release);
}
