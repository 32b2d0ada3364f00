//! Pretty error rendering using ariadne, and JSON envelopes for pipes.
//!
//! Processor failures are shown against the offending URL with the relevant
//! part underlined. Everything human-facing goes to stderr so stdout stays
//! clean for the command's actual output.

use std::io::{self, IsTerminal};
use std::ops::Range;

use ariadne::{Color, Config, Fmt, IndexType, Label, Report, ReportKind, Source};
use dataurl_kit_core::{DataUrlError, FALLBACK_MEDIA_TYPE};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, human-oriented output (ariadne).
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve an explicit `--output` value, or detect from whether stdout
    /// is a TTY.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Data URL errors ─────────────────────────────────────────────────────

/// Render a processor or construction error for `source` (the URL, or the
/// media type string for construction errors).
pub(crate) fn render_data_url_error(source: &str, name: &str, err: &DataUrlError, format: Format) {
    match format {
        Format::Json => print_envelope(err.code(), &err.to_string()),
        Format::Pretty => render_pretty(source, name, err),
    }
}

fn render_pretty(source: &str, name: &str, err: &DataUrlError) {
    let span = error_span(source, err);
    let config = Config::default()
        .with_compact(false)
        .with_index_type(IndexType::Byte);
    let mut cache = (name, Source::from(source));

    let mut builder = Report::build(ReportKind::Error, (name, span.clone()))
        .with_code(err.code())
        .with_message(err.to_string())
        .with_config(config)
        .with_label(
            Label::new((name, span))
                .with_message(label_message(err))
                .with_color(Color::Red),
        );
    if let Some(help) = help_message(err) {
        builder = builder.with_help(help);
    }
    builder.finish().eprint(&mut cache).ok();
}

/// Byte range of `source` that the error is about.
fn error_span(source: &str, err: &DataUrlError) -> Range<usize> {
    let len = source.len();
    let colon = source.find(':');
    match err {
        DataUrlError::InvalidScheme { .. } => 0..colon.unwrap_or(len),
        DataUrlError::MissingComma => colon.map_or(0, |c| c + 1)..len,
        DataUrlError::Base64Decode(_) => {
            let end = source.find('#').unwrap_or(len);
            let start = source[..end].find(',').map_or(0, |c| c + 1);
            start..end
        }
        _ => 0..len,
    }
}

fn label_message(err: &DataUrlError) -> &'static str {
    match err {
        DataUrlError::InvalidScheme { .. } => "expected `data`",
        DataUrlError::MissingComma => "no `,` in this body",
        DataUrlError::Base64Decode(_) => "declared base64, but this is not valid base64",
        DataUrlError::NotAUrl { .. } => "not a URL",
        DataUrlError::InvalidType { .. } => "not a media type",
        _ => "here",
    }
}

fn help_message(err: &DataUrlError) -> Option<&'static str> {
    match err {
        DataUrlError::MissingComma => {
            Some("a data URL has the form data:[<media type>][;base64],<data>")
        }
        DataUrlError::NotAUrl { .. } => Some("data URLs start with `data:`"),
        DataUrlError::InvalidType { .. } => Some("media types look like type/subtype[;name=value]"),
        _ => None,
    }
}

// ── Other failures ──────────────────────────────────────────────────────

/// Render a command failure that is not a processor error (I/O and the like).
pub(crate) fn render_failure(err: &anyhow::Error, format: Format) {
    match format {
        Format::Json => print_envelope("command_failed", &format!("{err:#}")),
        Format::Pretty => eprintln!("{}: {err:#}", "error".fg(Color::Red)),
    }
}

fn print_envelope(code: &str, message: &str) {
    let out = serde_json::json!({
        "success": false,
        "error": code,
        "message": message,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).expect("error envelope serialization cannot fail")
    );
}

// ── Notes ───────────────────────────────────────────────────────────────

/// Tell the user (pretty mode only) that the declared media type was
/// replaced by the fallback type.
pub(crate) fn note_recovery(recovered: Option<&str>, format: Format) {
    if format != Format::Pretty {
        return;
    }
    if let Some(declared) = recovered {
        eprintln!(
            "{}: declared media type {declared:?} is malformed; using {FALLBACK_MEDIA_TYPE}",
            "note".fg(Color::Blue)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_span_covers_scheme() {
        let err = DataUrlError::InvalidScheme {
            scheme: "http".into(),
        };
        assert_eq!(error_span("http://x", &err), 0..4);
    }

    #[test]
    fn missing_comma_span_covers_body() {
        assert_eq!(
            error_span("data:text/plain", &DataUrlError::MissingComma),
            5..15
        );
        assert_eq!(error_span("data:", &DataUrlError::MissingComma), 5..5);
    }

    #[test]
    fn base64_span_covers_payload_without_fragment() {
        let err = dataurl_kit_core::Resource::from_string("data:;base64,*")
            .map(|_| ())
            .expect_err("invalid base64");
        assert_eq!(err.code(), "base64_decode");
        assert_eq!(error_span("data:;base64,QQ*#x", &err), 13..16);
    }
}
