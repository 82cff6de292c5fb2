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

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

pub type RegexResult<T> = std::result::Result<T, InvalidRegexError>;

/// Unwraps the result of an operation that only fails on broken metadata.
///
/// Shipped metadata is compiled by the test suite, so reaching the panic means
/// a bug in the library itself.
pub(crate) fn or_library_bug<T>(result: RegexResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!(
            "A valid regex is expected in metadata; this indicates a library bug! {}",
            err
        ),
    }
}

/// Thread-safe cache of compiled patterns.
///
/// Metadata patterns are compiled on first use. Besides the plain form, every
/// pattern can be requested anchored at both ends (for full matches) or at
/// the start only (for prefix consumption); each form lives in its own map so
/// the keys stay the raw metadata strings.
pub struct RegexCache {
    plain: DashMap<String, Arc<regex::Regex>>,
    full: DashMap<String, Arc<regex::Regex>>,
    prefix: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            plain: DashMap::with_capacity(capacity),
            full: DashMap::with_capacity(capacity),
            prefix: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> RegexResult<Arc<regex::Regex>> {
        Self::get_or_compile(&self.plain, pattern, |p| p.to_owned())
    }

    /// Returns the pattern anchored as `^(?:pattern)$`.
    pub fn get_full_match_regex(&self, pattern: &str) -> RegexResult<Arc<regex::Regex>> {
        Self::get_or_compile(&self.full, pattern, |p| fast_cat::concat_str!("^(?:", p, ")$"))
    }

    /// Returns the pattern anchored as `^(?:pattern)`.
    pub fn get_prefix_regex(&self, pattern: &str) -> RegexResult<Arc<regex::Regex>> {
        Self::get_or_compile(&self.prefix, pattern, |p| fast_cat::concat_str!("^(?:", p, ")"))
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.full.len() + self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_or_compile(
        map: &DashMap<String, Arc<regex::Regex>>,
        pattern: &str,
        build: impl FnOnce(&str) -> String,
    ) -> RegexResult<Arc<regex::Regex>> {
        if let Some(regex) = map.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = map
            .entry(pattern.to_string())
            .or_try_insert_with(|| regex::Regex::new(&build(pattern)).map(Arc::new))?;
        Ok(entry.value().clone())
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RegexCache;

    #[test]
    fn anchored_variants_do_not_share_entries() {
        let cache = RegexCache::new();
        let full = cache.get_full_match_regex(r"\d{3}|\d{5}").unwrap();
        let prefix = cache.get_prefix_regex(r"\d{3}|\d{5}").unwrap();

        assert!(full.is_match("12345"));
        assert!(!full.is_match("1234"));
        assert!(prefix.is_match("1234"));
        assert!(!prefix.is_match("a123"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cached_regex_is_reused() {
        let cache = RegexCache::new();
        let first = cache.get_regex("[2-9]").unwrap();
        let second = cache.get_regex("[2-9]").unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let cache = RegexCache::new();
        assert!(cache.get_full_match_regex("(unclosed").is_err());
        assert!(cache.is_empty());
    }
}
