//! Name matching
//!
//! This module decides whether an entry name matches the search pattern.
//! Patterns are literal text: `*`, `?` and `[` carry no special meaning.

use std::borrow::Cow;

use super::options::SearchConfig;

/// Trait for name filters
pub trait NameFilter {
    /// Check if the base name matches the filter
    fn matches(&self, name: &str) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Matcher built once per search from a [`SearchConfig`]
///
/// In case-insensitive mode the pattern is lower-cased up front, so each
/// candidate only pays for lower-casing its own name.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    pattern: String,
    ignore_case: bool,
    exact: bool,
}

impl NameMatcher {
    pub fn new(pattern: &str, ignore_case: bool, exact: bool) -> Self {
        let pattern = if ignore_case {
            pattern.to_lowercase()
        } else {
            pattern.to_string()
        };

        Self {
            pattern,
            ignore_case,
            exact,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(&config.pattern, config.case_insensitive, config.exact_match)
    }
}

impl NameFilter for NameMatcher {
    fn matches(&self, name: &str) -> bool {
        let name: Cow<'_, str> = if self.ignore_case {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        };

        if self.exact {
            name.as_ref() == self.pattern.as_str()
        } else {
            // An empty pattern is contained in every name.
            name.contains(self.pattern.as_str())
        }
    }

    fn description(&self) -> String {
        let mode = if self.exact { "equals" } else { "contains" };
        if self.ignore_case {
            format!("name (ignore case) {} '{}'", mode, self.pattern)
        } else {
            format!("name {} '{}'", mode, self.pattern)
        }
    }
}

/// Check a single name against the configuration's pattern settings
pub fn matches(config: &SearchConfig, name: &str) -> bool {
    NameMatcher::from_config(config).matches(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pattern: &str) -> SearchConfig {
        SearchConfig::new(pattern, ".")
    }

    #[test]
    fn test_substring_match() {
        let config = config("conf");
        assert!(matches(&config, "config.json"));
        assert!(matches(&config, "webpack.conf.js"));
        assert!(!matches(&config, "Config.json"));
        assert!(!matches(&config, "readme.md"));
    }

    #[test]
    fn test_exact_match() {
        let config = config("main.rs").with_exact_match(true);
        assert!(matches(&config, "main.rs"));
        assert!(!matches(&config, "main.rs.bak"));
        assert!(!matches(&config, "MAIN.rs"));
    }

    #[test]
    fn test_ignore_case() {
        let config = config("ReadMe").with_case_insensitive(true);
        assert!(matches(&config, "README.md"));
        assert!(matches(&config, "readme"));

        let exact = config.with_exact_match(true);
        assert!(matches(&exact, "README"));
        assert!(!matches(&exact, "README.md"));
    }

    #[test]
    fn test_pattern_is_literal() {
        let config = config("*.txt");
        assert!(!matches(&config, "notes.txt"));
        assert!(matches(&config, "weird*.txt"));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let config = config("");
        assert!(matches(&config, "anything"));
        assert!(matches(&config, ".hidden"));

        let exact = config.with_exact_match(true);
        assert!(!matches(&exact, "anything"));
    }

    #[test]
    fn test_exact_implies_substring() {
        let names = ["a", "a.txt", "ba", "A", "abc"];
        for pattern in ["a", "A", "a.txt"] {
            for ignore_case in [false, true] {
                let exact = NameMatcher::new(pattern, ignore_case, true);
                let substring = NameMatcher::new(pattern, ignore_case, false);
                for name in names {
                    if exact.matches(name) {
                        assert!(substring.matches(name), "{} / {}", pattern, name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_description() {
        let matcher = NameMatcher::new("Foo", true, false);
        assert_eq!(matcher.description(), "name (ignore case) contains 'foo'");
        let matcher = NameMatcher::new("foo", false, true);
        assert_eq!(matcher.description(), "name equals 'foo'");
    }
}
