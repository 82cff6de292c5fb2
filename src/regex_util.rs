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

use regex::{Match, Regex};

/// Matching helpers for patterns that must start at the beginning of the
/// input. Full matches go through the anchored variants of the regex cache
/// instead, since leftmost-first alternation makes `find` unreliable there.
pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    /// Returns the rest of `s` after a match at position 0.
    fn consume_start<'a>(&self, s: &'a str) -> Option<&'a str> {
        self.find_start(s).map(|found| &s[found.end()..])
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None;
        }
        Some(found)
    }
}

/// Collects the first capture group of every non-overlapping match.
pub fn find_all_first_groups<'a>(regex: &Regex, s: &'a str) -> Vec<&'a str> {
    regex
        .captures_iter(s)
        .filter_map(|captures| captures.get(1))
        .map(|group| group.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{RegexConsume, find_all_first_groups};

    #[test]
    fn consume_start_requires_match_at_zero() {
        let regex = Regex::new("[+]+").unwrap();
        assert_eq!(regex.consume_start("++44"), Some("44"));
        assert_eq!(regex.consume_start("44+"), None);
        assert!(regex.matches_start("+1"));
        assert!(!regex.matches_start("1+"));
    }

    #[test]
    fn digit_groups_are_collected_in_order() {
        let regex = Regex::new(r"(\d+)").unwrap();
        assert_eq!(
            find_all_first_groups(&regex, "+1 404-384-1384"),
            vec!["1", "404", "384", "1384"]
        );
    }
}
