//! `dataurl` — parse, decode, encode, and normalize `data:` URLs.

mod render;

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dataurl_kit_core::codec::base64_encode;
use dataurl_kit_core::{Blob, ParseReport, Resource, inspect};

use crate::render::{Format, note_recovery, render_data_url_error, render_failure};

/// Argument value that means "read from stdin".
const STDIN: &str = "-";

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "dataurl",
    version,
    about = "dataurl — parse, decode, encode, and normalize data: URLs"
)]
struct Cli {
    /// Output mode: "pretty" for human-readable output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse a data URL and describe the resource it holds.
    #[command(visible_alias = "inspect")]
    Parse {
        /// The data URL, or `-` to read it from stdin.
        url: String,
    },

    /// Decode a data URL and write its payload bytes.
    Decode {
        /// The data URL, or `-` to read it from stdin.
        url: String,
        /// Write the payload to this file instead of stdout.
        #[arg(long, short)]
        out: Option<String>,
    },

    /// Encode a file as a data URL.
    Encode {
        /// The file to encode, or `-` to read stdin.
        file: String,
        /// Media type of the content.
        #[arg(long = "type", short = 't', default_value = "application/octet-stream")]
        media_type: String,
    },

    /// Re-serialize a data URL in canonical (base64) form.
    Normalize {
        /// The data URL, or `-` to read it from stdin.
        url: String,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    let result = match cli.cmd {
        Cmd::Parse { url } => cmd_parse(&url, format),
        Cmd::Decode { url, out } => cmd_decode(&url, out.as_deref(), format),
        Cmd::Encode { file, media_type } => cmd_encode(&file, &media_type, format),
        Cmd::Normalize { url } => cmd_normalize(&url, format),
    };

    if let Err(err) = result {
        render_failure(&err, format);
        process::exit(1);
    }
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_parse(url_arg: &str, format: Format) -> Result<()> {
    let input = read_url_arg(url_arg)?;
    let report = parse_or_exit(&input, format);
    let resource = &report.resource;

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "success": true,
                "type": resource.media_type(),
                "size": resource.len(),
                "base64": report.base64,
                "recovered_media_type": report.recovered_media_type,
                "data": base64_encode(resource.data()),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            println!("type:     {}", resource.media_type());
            println!("size:     {} bytes", resource.len());
            println!(
                "encoding: {}",
                if report.base64 { "base64" } else { "percent" }
            );
            note_recovery(report.recovered_media_type.as_deref(), format);
        }
    }
    Ok(())
}

fn cmd_decode(url_arg: &str, out: Option<&str>, format: Format) -> Result<()> {
    let input = read_url_arg(url_arg)?;
    let report = parse_or_exit(&input, format);
    note_recovery(report.recovered_media_type.as_deref(), format);
    let resource = report.resource;

    match out {
        Some(path) => {
            fs::write(path, resource.data())
                .with_context(|| format!("failed to write '{path}'"))?;
            match format {
                Format::Json => {
                    let out = serde_json::json!({
                        "success": true,
                        "type": resource.media_type(),
                        "size": resource.len(),
                        "file": path,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                Format::Pretty => {
                    eprintln!("wrote {} bytes ({}) to {path}", resource.len(), resource.media_type());
                }
            }
        }
        None => {
            // Payload bytes are the output, whatever the format.
            let mut stdout = io::stdout().lock();
            stdout.write_all(resource.data())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn cmd_encode(file: &str, media_type: &str, format: Format) -> Result<()> {
    let blob = if file == STDIN {
        Blob::read_from(io::stdin().lock(), media_type).context("failed to read stdin")?
    } else {
        let f = File::open(file).with_context(|| format!("failed to open '{file}'"))?;
        Blob::read_from(f, media_type).with_context(|| format!("failed to read '{file}'"))?
    };

    let resource = match Resource::from_blob(&blob) {
        Ok(r) => r,
        Err(err) => {
            render_data_url_error(media_type, "--type", &err, format);
            process::exit(1);
        }
    };

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "success": true,
                "type": resource.media_type(),
                "size": resource.len(),
                "url": resource.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => println!("{resource}"),
    }
    Ok(())
}

fn cmd_normalize(url_arg: &str, format: Format) -> Result<()> {
    let input = read_url_arg(url_arg)?;
    let report = parse_or_exit(&input, format);
    let canonical = report.resource.to_string();

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "success": true,
                "input": input,
                "url": canonical,
                "changed": canonical != input,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            println!("{canonical}");
            note_recovery(report.recovered_media_type.as_deref(), format);
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// The URL argument itself, or stdin's contents for `-` (without the
/// trailing line break).
fn read_url_arg(arg: &str) -> Result<String> {
    if arg != STDIN {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

/// Parse `input`, or render the failure and exit with code 1.
fn parse_or_exit(input: &str, format: Format) -> ParseReport {
    match inspect(input) {
        Ok(report) => report,
        Err(err) => {
            render_data_url_error(input, "<url>", &err, format);
            process::exit(1);
        }
    }
}
