//! Media type (MIME type) parsing and serialization.
//!
//! [`MediaType`] wraps [`data_url::mime::Mime`], which implements the WHATWG
//! MIME Sniffing "parse a MIME type" and "serialize a MIME type" algorithms.
//! Type, subtype, and parameter names are lowercased; parameter values keep
//! their case. Invalid parameters are dropped rather than failing the whole
//! parse, and the first occurrence of a repeated parameter name wins.

use std::fmt;
use std::str::FromStr;

use data_url::mime::Mime;

use crate::codec::trim_ascii_whitespace;

/// Reasons a string is not a valid media type.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaTypeError {
    /// The input is empty after trimming whitespace.
    #[error("media type is empty")]
    Empty,
    /// No `/` separates type and subtype.
    #[error("missing '/' between type and subtype")]
    MissingSubtype,
    /// The type or subtype is empty or contains non-token characters.
    #[error("invalid media type {0:?}")]
    Invalid(String),
}

/// A parsed media type such as `text/plain;charset=utf-8`.
///
/// The [`Display`](fmt::Display) form is the canonical serialization.
#[derive(Debug, PartialEq, Eq)]
pub struct MediaType(Mime);

impl MediaType {
    /// The top-level type, lowercased (e.g. `text`).
    pub fn type_(&self) -> &str {
        &self.0.type_
    }

    /// The subtype, lowercased (e.g. `plain`).
    pub fn subtype(&self) -> &str {
        &self.0.subtype
    }

    /// `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.0.type_, self.0.subtype)
    }

    /// Parameters in source order as `(name, value)` pairs.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.0.parameters
    }

    /// Look up a parameter value by name (ASCII case-insensitive).
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.0.get_parameter(name.to_ascii_lowercase().as_str())
    }

    /// The underlying [`Mime`].
    pub fn as_mime(&self) -> &Mime {
        &self.0
    }
}

impl Clone for MediaType {
    fn clone(&self) -> Self {
        MediaType(Mime {
            type_: self.0.type_.clone(),
            subtype: self.0.subtype.clone(),
            parameters: self.0.parameters.clone(),
        })
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut mime: Mime = input.parse().map_err(|_| classify(input))?;

        // Names arrive lowercased, but repeats are only filtered by exact
        // spelling.
        let mut parameters: Vec<(String, String)> = Vec::with_capacity(mime.parameters.len());
        for (name, value) in mime.parameters.drain(..) {
            if !parameters.iter().any(|(n, _)| *n == name) {
                parameters.push((name, value));
            }
        }
        mime.parameters = parameters;

        Ok(MediaType(mime))
    }
}

/// Pick the error for input the MIME parser rejected.
fn classify(input: &str) -> MediaTypeError {
    let trimmed = trim_ascii_whitespace(input);
    if trimmed.is_empty() {
        MediaTypeError::Empty
    } else if !trimmed.contains('/') {
        MediaTypeError::MissingSubtype
    } else {
        MediaTypeError::Invalid(trimmed.to_string())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
