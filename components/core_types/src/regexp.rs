//! RegExp data
//!
//! Patterns are compiled with the `regex` crate when the value is created,
//! so a RegExp object always holds a usable matcher.

use regex::{Regex, RegexBuilder};

use crate::error::ValueError;

/// Canonical flag order, as `RegExp.prototype.flags` reports it
const FLAG_ORDER: &str = "dgimsuvy";

/// Internal slots of a RegExp object
#[derive(Debug, Clone)]
pub struct RegExpData {
    source: String,
    flags: String,
    regex: Regex,
}

impl RegExpData {
    /// Compile `pattern` with JavaScript `flags`.
    ///
    /// Unknown or duplicated flags, and `u` combined with `v`, are rejected
    /// with [`ValueError::InvalidFlags`].
    pub fn new(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        let mut seen = Vec::with_capacity(flags.len());
        for flag in flags.chars() {
            if !FLAG_ORDER.contains(flag) || seen.contains(&flag) {
                return Err(ValueError::InvalidFlags(flags.to_string()));
            }
            seen.push(flag);
        }
        if seen.contains(&'u') && seen.contains(&'v') {
            return Err(ValueError::InvalidFlags(flags.to_string()));
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(seen.contains(&'i'))
            .multi_line(seen.contains(&'m'))
            .dot_matches_new_line(seen.contains(&'s'))
            .build()
            .map_err(|e| ValueError::InvalidRegExp {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(RegExpData {
            source: pattern.to_string(),
            flags: FLAG_ORDER.chars().filter(|c| seen.contains(c)).collect(),
            regex,
        })
    }

    /// `RegExp.prototype.source`
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `RegExp.prototype.flags`, in canonical order
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// `RegExp.prototype.test`
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
