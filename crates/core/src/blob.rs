//! In-memory binary object with a media type, and its conversions to and
//! from [`Resource`].

use std::io::{self, Read};

use crate::error::DataUrlError;
use crate::resource::Resource;

/// A byte buffer tagged with a media type string.
///
/// The media type is kept as given; it is only validated when the blob is
/// turned into a [`Resource`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob {
    media_type: String,
    bytes: Vec<u8>,
}

impl Blob {
    /// Create a blob from a media type and its bytes.
    pub fn new(media_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Blob {
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Drain `reader` into a new blob.
    ///
    /// # Errors
    ///
    /// Any I/O error from the reader.
    pub fn read_from<R: Read>(mut reader: R, media_type: impl Into<String>) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Blob::new(media_type, bytes))
    }

    /// The media type as given.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` when there is no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Resource {
    /// Build a resource from a blob's media type and bytes.
    ///
    /// # Errors
    ///
    /// [`DataUrlError::InvalidType`] when the blob's media type is empty or
    /// does not parse.
    pub fn from_blob(blob: &Blob) -> Result<Self, DataUrlError> {
        Resource::new(blob.media_type(), blob.bytes())
    }

    /// A blob carrying this resource's media type and a copy of its bytes.
    pub fn to_blob(&self) -> Blob {
        Blob::new(self.media_type(), self.data())
    }
}
