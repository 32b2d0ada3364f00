//! Typed error type for data URL processing and resource construction.

use crate::media_type::MediaTypeError;

/// Failures of the data URL processor and of direct [`Resource`] construction.
///
/// A malformed *declared* media type is not an error: parsing recovers to
/// `text/plain;charset=US-ASCII` instead.
///
/// [`Resource`]: crate::Resource
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DataUrlError {
    // -- Parsing --
    /// The URL does not use the `data` scheme.
    #[error("URL scheme is not \"data\" (found \"{scheme}\")")]
    InvalidScheme {
        /// The scheme that was found instead.
        scheme: String,
    },

    /// The URL body has no `,` separating the media type from the payload.
    #[error("U+002C (',') not found in data URL body")]
    MissingComma,

    /// The input string could not be parsed as a URL at all.
    #[error("input does not represent a URL: {input:?}")]
    NotAUrl {
        /// The rejected input.
        input: String,
        /// The underlying URL parser error.
        #[source]
        source: url::ParseError,
    },

    /// The payload is declared base64 but is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64Decode(#[from] data_url::forgiving_base64::InvalidBase64),

    // -- Direct construction --
    /// The media type argument is not a valid media type.
    #[error("invalid media type {value:?}: {source}")]
    InvalidType {
        /// The rejected media type string.
        value: String,
        /// Why it was rejected.
        #[source]
        source: MediaTypeError,
    },

    /// A buffer view does not fit inside its underlying buffer.
    #[error("invalid data: view {offset}..{offset}+{len} is outside a buffer of {buffer_len} bytes")]
    InvalidData {
        /// Start of the view within the buffer.
        offset: usize,
        /// Length of the view.
        len: usize,
        /// Length of the underlying buffer.
        buffer_len: usize,
    },
}

impl DataUrlError {
    /// A stable, machine-readable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            DataUrlError::InvalidScheme { .. } => "invalid_scheme",
            DataUrlError::MissingComma => "missing_comma",
            DataUrlError::NotAUrl { .. } => "not_a_url",
            DataUrlError::Base64Decode(_) => "base64_decode",
            DataUrlError::InvalidType { .. } => "invalid_type",
            DataUrlError::InvalidData { .. } => "invalid_data",
        }
    }
}
