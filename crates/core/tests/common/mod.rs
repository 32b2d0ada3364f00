//! Shared test helpers for `dataurl_kit_core` integration tests.

#![allow(unreachable_pub)]

use dataurl_kit_core::Resource;

/// Parse `input`, panicking with the input in the message on failure.
pub fn parse(input: &str) -> Resource {
    Resource::from_string(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// Assert the parsed media type and payload of `input`.
#[allow(dead_code)]
pub fn assert_parses_to(input: &str, media_type: &str, data: &[u8]) {
    let r = parse(input);
    assert_eq!(r.media_type(), media_type, "media type of {input:?}");
    assert_eq!(r.data(), data, "payload of {input:?}");
}

/// A selection of data URLs exercising the processor's edge cases.
#[allow(dead_code)]
pub const CORPUS: &[&str] = &[
    "data:,",
    "data:text/plain,",
    "data:text/plain;base64,",
    "data: ,",
    "data: ; ,",
    "data: ; x=y ,",
    "data:text/plain,a1",
    "data:application/octet-stream;base64,AwIBAP/+/fw=",
    "data:text/plain; p1=a,a1",
    "data:text/plain; p1=a;p2=\"b,c\",a1",
    "data:text/plain,%FF%",
    "data:text/plain,%fff",
    "data:text/plain,a?a=2",
    "data:text/html;charset=utf-8,%3Ch1%3EHi%3C%2Fh1%3E",
    "data:image/svg+xml;utf8,<svg></svg>",
    "data:;charset=utf-8;BASE64,SGVsbG8=",
    "data:text/plain;a=\"q\\\"uote\";base64,AAEC",
    "data:garbage,payload#with-fragment",
    "DATA:TEXT/PLAIN,upper",
];
