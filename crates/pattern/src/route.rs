//! RoutePattern - Destination templates with field references
//!
//! A destination pattern such as `logs-{app}` is parsed once at init time
//! into a sequence of tagged segments, then evaluated once per event by
//! concatenating segments - never by runtime string templating.

use std::collections::HashMap;

use crate::error::PatternError;

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

/// One parsed segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim text
    Literal(String),

    /// Reference to a field in the per-event mapping
    Field(String),
}

/// A compiled destination-routing pattern
///
/// Immutable after compilation; shared read-only across concurrent
/// dispatches.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a destination pattern
    ///
    /// Field references use single-brace syntax: `logs-{app}`.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::InvalidPattern` for an empty pattern, an
    /// unterminated `{`, or an empty field name. Fatal at init time.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::invalid(pattern, "pattern must not be empty"));
        }

        let mut segments = Vec::new();
        let mut rest = pattern;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| PatternError::invalid(pattern, "unterminated '{'"))?;
            let name = &after[..close];
            if name.is_empty() {
                return Err(PatternError::invalid(pattern, "empty field reference"));
            }
            segments.push(Segment::Field(name.to_string()));
            rest = &after[close + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
        })
    }

    /// Resolve the destination for one event
    ///
    /// Substitutes each field reference with the corresponding value from the
    /// supplied mapping.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::UnresolvedField` if a referenced field is
    /// absent. Callers treat this as a per-event dispatch failure.
    pub fn resolve(&self, fields: &HashMap<String, String>) -> Result<String, PatternError> {
        let mut destination = String::with_capacity(self.pattern.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => destination.push_str(text),
                Segment::Field(name) => match fields.get(name) {
                    Some(value) => destination.push_str(value),
                    None => return Err(PatternError::unresolved(name.clone())),
                },
            }
        }

        Ok(destination)
    }

    /// Whether this pattern contains no field references
    ///
    /// Static patterns resolve to the same destination for every event,
    /// regardless of the field mapping supplied.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// The source pattern this was compiled from
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The parsed segments, in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
