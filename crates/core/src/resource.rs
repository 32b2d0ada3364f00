//! The immutable [`Resource`] value and its direct construction path.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::codec::base64_encode;
use crate::error::DataUrlError;
use crate::media_type::MediaType;

/// A decoded data URL: a normalized media type plus the payload bytes.
///
/// Resources are values. There are no mutators; the media type is always a
/// canonical, parseable media type string and the bytes are exactly the
/// decoded payload. Build one with [`Resource::new`], by parsing
/// ([`Resource::from_string`], [`Resource::from_url`],
/// [`Resource::from_input`]), or from a [`Blob`](crate::Blob).
///
/// Serializes (serde) as `{"type": "...", "data": "<base64>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    media_type: String,
    #[serde(serialize_with = "serialize_base64")]
    data: Vec<u8>,
}

/// Media type argument for [`Resource::new`]: a string to be parsed, or an
/// already parsed [`MediaType`].
#[derive(Debug, Clone)]
pub enum MediaTypeArg<'a> {
    /// A media type string; rejected with [`DataUrlError::InvalidType`] if
    /// it does not parse.
    Str(&'a str),
    /// A media type that is already valid.
    Parsed(MediaType),
}

impl<'a> From<&'a str> for MediaTypeArg<'a> {
    fn from(s: &'a str) -> Self {
        MediaTypeArg::Str(s)
    }
}

impl<'a> From<&'a String> for MediaTypeArg<'a> {
    fn from(s: &'a String) -> Self {
        MediaTypeArg::Str(s)
    }
}

impl From<MediaType> for MediaTypeArg<'_> {
    fn from(m: MediaType) -> Self {
        MediaTypeArg::Parsed(m)
    }
}

impl From<&MediaType> for MediaTypeArg<'_> {
    fn from(m: &MediaType) -> Self {
        MediaTypeArg::Parsed(m.clone())
    }
}

/// Binary content for [`Resource::new`]: an owned buffer, or a window over a
/// shared buffer.
#[derive(Debug, Clone)]
pub enum BufferSource {
    /// The whole buffer is the content.
    Buffer(Vec<u8>),
    /// `len` bytes of `buffer` starting at `offset`.
    View {
        /// The underlying buffer.
        buffer: Arc<[u8]>,
        /// Start of the window.
        offset: usize,
        /// Length of the window.
        len: usize,
    },
}

impl BufferSource {
    /// A view of `len` bytes of `buffer` starting at `offset`.
    ///
    /// The range is checked when the view is consumed by [`Resource::new`].
    pub fn view(buffer: impl Into<Arc<[u8]>>, offset: usize, len: usize) -> Self {
        BufferSource::View {
            buffer: buffer.into(),
            offset,
            len,
        }
    }

    fn into_bytes(self) -> Result<Vec<u8>, DataUrlError> {
        match self {
            BufferSource::Buffer(bytes) => Ok(bytes),
            BufferSource::View {
                buffer,
                offset,
                len,
            } => offset
                .checked_add(len)
                .and_then(|end| buffer.get(offset..end))
                .map(<[u8]>::to_vec)
                .ok_or(DataUrlError::InvalidData {
                    offset,
                    len,
                    buffer_len: buffer.len(),
                }),
        }
    }
}

impl From<Vec<u8>> for BufferSource {
    fn from(bytes: Vec<u8>) -> Self {
        BufferSource::Buffer(bytes)
    }
}

impl From<&[u8]> for BufferSource {
    fn from(bytes: &[u8]) -> Self {
        BufferSource::Buffer(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for BufferSource {
    fn from(bytes: &[u8; N]) -> Self {
        BufferSource::Buffer(bytes.to_vec())
    }
}

impl From<Arc<[u8]>> for BufferSource {
    fn from(buffer: Arc<[u8]>) -> Self {
        let len = buffer.len();
        BufferSource::View {
            buffer,
            offset: 0,
            len,
        }
    }
}

impl Resource {
    /// Build a resource from an explicit media type and binary content.
    ///
    /// The media type is stored in its canonical serialized form.
    ///
    /// # Errors
    ///
    /// [`DataUrlError::InvalidType`] when a media type string does not
    /// parse; [`DataUrlError::InvalidData`] when a buffer view falls outside
    /// its buffer.
    pub fn new<'a>(
        media_type: impl Into<MediaTypeArg<'a>>,
        data: impl Into<BufferSource>,
    ) -> Result<Self, DataUrlError> {
        let media_type = match media_type.into() {
            MediaTypeArg::Parsed(m) => m,
            MediaTypeArg::Str(s) => s
                .parse::<MediaType>()
                .map_err(|source| DataUrlError::InvalidType {
                    value: s.to_string(),
                    source,
                })?,
        };
        let data = data.into().into_bytes()?;
        Ok(Resource::from_parts(media_type.to_string(), data))
    }

    /// Assemble a resource from an already-normalized media type string.
    pub(crate) fn from_parts(media_type: String, data: Vec<u8>) -> Self {
        debug_assert!(!media_type.is_empty());
        Resource { media_type, data }
    }

    /// The normalized media type, e.g. `text/plain;charset=US-ASCII`.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The decoded payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the resource, returning the payload.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn serialize_base64<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64_encode(data))
}
