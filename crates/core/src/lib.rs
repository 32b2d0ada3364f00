//! dataurl-kit core library.
//!
//! Parses `data:` URLs into a [`Resource`] (normalized media type plus
//! decoded bytes) following the Fetch standard's data URL processor, and
//! serializes resources back into canonical, always-base64 data URLs. The
//! main entry points are [`Resource::from_string`] / [`Resource::from_url`]
//! for parsing, [`Resource::new`] for direct construction, and
//! [`Resource::to_string`](ToString::to_string) for serialization.
//!
//! ```
//! use dataurl_kit_core::Resource;
//!
//! let r = Resource::from_string("data:text/plain;base64,QQABfw==").unwrap();
//! assert_eq!(r.media_type(), "text/plain");
//! assert_eq!(r.data(), &[65, 0, 1, 127]);
//! assert_eq!(r.to_string(), "data:text/plain;base64,QQABfw==");
//! ```

#![warn(missing_docs)]

/// Blob adapter: byte buffers tagged with a media type.
pub mod blob;
/// Whitespace, isomorphic, percent, and base64 codecs.
pub mod codec;
/// Error taxonomy.
pub mod error;
/// Media type parsing and serialization.
pub mod media_type;
/// The data URL processor.
pub mod parse;
/// The resource value type and direct construction.
pub mod resource;
/// Canonical serialization.
pub mod serialize;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use blob::Blob;
pub use error::DataUrlError;
pub use media_type::{MediaType, MediaTypeError};
pub use parse::{DataUrlInput, FALLBACK_MEDIA_TYPE, ParseReport, inspect, process};
pub use resource::{BufferSource, MediaTypeArg, Resource};
pub use serialize::to_data_url_string;

// Re-exported so callers can build `DataUrlInput::Url` without a direct
// dependency on `url`.
pub use url::Url;
