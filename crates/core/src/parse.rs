//! The data URL processor: turns a `data:` URL into a [`Resource`].
//!
//! Follows the Fetch standard's "data: URL processor" step by step. The
//! order matters: the fragment is dropped before the body is read, the body
//! is split at the *first* comma with no regard for quoting, the base64
//! indicator is detected on the trimmed header, and only then is the header
//! normalized as a media type. A header that is not a valid media type is
//! replaced by [`FALLBACK_MEDIA_TYPE`] instead of failing the parse.

use std::borrow::Cow;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::codec::{base64_decode, isomorphic_decode, percent_decode, trim_ascii_whitespace};
use crate::error::DataUrlError;
use crate::media_type::MediaType;
use crate::resource::Resource;

/// Media type used when the declared one is missing or malformed.
pub const FALLBACK_MEDIA_TYPE: &str = "text/plain;charset=US-ASCII";

/// Input accepted by [`Resource::from_input`] and [`inspect`]: an already
/// parsed URL or a string still to be parsed.
#[derive(Debug, Clone, Copy)]
pub enum DataUrlInput<'a> {
    /// A parsed URL.
    Url(&'a Url),
    /// A string that must first be parsed as a URL.
    Str(&'a str),
}

impl<'a> From<&'a Url> for DataUrlInput<'a> {
    fn from(url: &'a Url) -> Self {
        DataUrlInput::Url(url)
    }
}

impl<'a> From<&'a str> for DataUrlInput<'a> {
    fn from(s: &'a str) -> Self {
        DataUrlInput::Str(s)
    }
}

impl<'a> From<&'a String> for DataUrlInput<'a> {
    fn from(s: &'a String) -> Self {
        DataUrlInput::Str(s)
    }
}

/// Everything the processor learned while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// The decoded resource.
    pub resource: Resource,
    /// Whether the header carried a `;base64` indicator.
    pub base64: bool,
    /// The header text that failed media type parsing, when the resource's
    /// type is [`FALLBACK_MEDIA_TYPE`] because of it.
    pub recovered_media_type: Option<String>,
}

/// Run the data URL processor on a parsed URL.
///
/// # Errors
///
/// [`DataUrlError::InvalidScheme`], [`DataUrlError::MissingComma`], or
/// [`DataUrlError::Base64Decode`] for a base64 body that does not decode.
pub fn process(url: &Url) -> Result<ParseReport, DataUrlError> {
    if url.scheme() != "data" {
        return Err(DataUrlError::InvalidScheme {
            scheme: url.scheme().to_string(),
        });
    }

    // Fragments are not part of the payload.
    let mut url = url.clone();
    url.set_fragment(None);

    // Query, if any, stays in the body.
    let serialized = url.as_str();
    let body = &serialized["data:".len()..];

    let (raw_media_type, encoded_body) =
        body.split_once(',').ok_or(DataUrlError::MissingComma)?;

    let mut media_type = trim_ascii_whitespace(raw_media_type);
    let mut data = percent_decode(encoded_body);

    let base64 = match strip_base64_indicator(media_type) {
        Some(stripped) => {
            data = base64_decode(&isomorphic_decode(&data))?;
            media_type = stripped;
            true
        }
        None => false,
    };

    let media_type: Cow<'_, str> = if media_type.starts_with(';') {
        Cow::Owned(format!("text/plain{media_type}"))
    } else {
        Cow::Borrowed(media_type)
    };

    let (media_type, recovered_media_type) = match media_type.parse::<MediaType>() {
        Ok(parsed) => (parsed.to_string(), None),
        Err(_) => (
            FALLBACK_MEDIA_TYPE.to_string(),
            Some(media_type.into_owned()),
        ),
    };

    Ok(ParseReport {
        resource: Resource::from_parts(media_type, data),
        base64,
        recovered_media_type,
    })
}

/// Parse a URL or string and return the full [`ParseReport`].
///
/// # Errors
///
/// Everything [`process`] returns, plus [`DataUrlError::NotAUrl`] for a
/// string that is not a URL.
pub fn inspect<'a>(input: impl Into<DataUrlInput<'a>>) -> Result<ParseReport, DataUrlError> {
    match input.into() {
        DataUrlInput::Url(url) => process(url),
        DataUrlInput::Str(s) => process(&parse_url(s)?),
    }
}

pub(crate) fn parse_url(s: &str) -> Result<Url, DataUrlError> {
    Url::parse(s).map_err(|source| DataUrlError::NotAUrl {
        input: s.to_string(),
        source,
    })
}

/// Match `;[ ]*base64` (ASCII case-insensitive) at the end of `media_type`
/// and return what precedes the `;`.
fn strip_base64_indicator(media_type: &str) -> Option<&str> {
    const INDICATOR: &[u8] = b"base64";
    let bytes = media_type.as_bytes();
    let head_len = bytes.len().checked_sub(INDICATOR.len())?;
    if !bytes[head_len..].eq_ignore_ascii_case(INDICATOR) {
        return None;
    }
    media_type[..head_len].trim_end_matches(' ').strip_suffix(';')
}

// ── Named entry points ──────────────────────────────────────────────────

impl Resource {
    /// Parse a data URL that has already been parsed as a URL.
    ///
    /// # Errors
    ///
    /// See [`process`].
    pub fn from_url(url: &Url) -> Result<Self, DataUrlError> {
        process(url).map(|report| report.resource)
    }

    /// Parse a data URL string.
    ///
    /// # Errors
    ///
    /// [`DataUrlError::NotAUrl`] if `s` is not a URL, otherwise see
    /// [`process`].
    pub fn from_string(s: &str) -> Result<Self, DataUrlError> {
        Resource::from_url(&parse_url(s)?)
    }

    /// Parse either a URL or a string.
    ///
    /// # Errors
    ///
    /// See [`Resource::from_url`] and [`Resource::from_string`].
    pub fn from_input<'a>(input: impl Into<DataUrlInput<'a>>) -> Result<Self, DataUrlError> {
        match input.into() {
            DataUrlInput::Url(url) => Resource::from_url(url),
            DataUrlInput::Str(s) => Resource::from_string(s),
        }
    }
}

impl FromStr for Resource {
    type Err = DataUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::from_string(s)
    }
}
