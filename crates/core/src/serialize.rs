//! Canonical string form of a [`Resource`].
//!
//! The body is always base64-encoded, whether or not the payload is text.

use std::fmt;

use url::Url;

use crate::codec::base64_encode;
use crate::error::DataUrlError;
use crate::parse::parse_url;
use crate::resource::Resource;

/// Serialize a resource as `data:<type>;base64,<payload>`.
pub fn to_data_url_string(resource: &Resource) -> String {
    format!(
        "data:{};base64,{}",
        resource.media_type(),
        base64_encode(resource.data())
    )
}

impl Resource {
    /// The canonical data URL, parsed as a [`Url`].
    ///
    /// # Errors
    ///
    /// [`DataUrlError::NotAUrl`] if the serialized form is rejected by the
    /// URL parser.
    pub fn to_url(&self) -> Result<Url, DataUrlError> {
        parse_url(&to_data_url_string(self))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_data_url_string(self))
    }
}
