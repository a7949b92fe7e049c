//! Matcher - Named-group field extraction
//!
//! Compiles an extraction pattern once and applies it per event body.
//! Patterns arrive in the Java/.NET named-group convention `(?<name>...)`
//! carried over from upstream shipper configurations; they are normalized
//! to the native `(?P<name>...)` form before compilation.

use std::collections::HashMap;

use regex::Regex;

use crate::error::PatternError;

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;

/// A compiled field-extraction pattern
///
/// Immutable after compilation; safe to share read-only across concurrent
/// invocations of the owning component.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile an extraction pattern
    ///
    /// Java-style named groups `(?<name>...)` are accepted and normalized.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::InvalidPattern` on malformed syntax. This is a
    /// startup error: callers surface it from component init, never per event.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let normalized = normalize_named_groups(pattern);
        let regex = Regex::new(&normalized)
            .map_err(|err| PatternError::invalid(pattern, err.to_string()))?;
        Ok(Self { regex })
    }

    /// Extract all named groups matched against the input text
    ///
    /// Applies the compiled pattern once. Returns an empty mapping when the
    /// pattern does not match - a normal, frequent outcome for heterogeneous
    /// log streams, not a failure.
    pub fn extract(&self, text: &str) -> HashMap<String, String> {
        let mut fields = HashMap::new();

        if let Some(captures) = self.regex.captures(text) {
            for name in self.regex.capture_names().flatten() {
                if let Some(matched) = captures.name(name) {
                    fields.insert(name.to_string(), matched.as_str().to_string());
                }
            }
        }

        fields
    }

    /// The normalized pattern this matcher was compiled from
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Rewrite Java-style named groups `(?<name>` to the native `(?P<name>` form
///
/// Lookbehind assertions (`(?<=`, `(?<!`) are left untouched; they are not
/// named groups even though they share the `(?<` prefix.
fn normalize_named_groups(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(pos) = rest.find("(?<") {
        let after = &rest[pos + 3..];
        if after.starts_with('=') || after.starts_with('!') {
            out.push_str(&rest[..pos + 3]);
        } else {
            out.push_str(&rest[..pos]);
            out.push_str("(?P<");
        }
        rest = after;
    }

    out.push_str(rest);
    out
}
