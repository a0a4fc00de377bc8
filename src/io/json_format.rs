//! JSON format handling for requests and responses
//!
//! This module centralizes all JSON format concerns, providing:
//! - Request decoding from a single input line
//! - Response encoding in one of two output styles
//!
//! The spaced style puts a space after every `:` and `,` separator, e.g.
//! `{"account": {"active-card": true, "available-limit": 100}, "violations": []}`.
//! It is produced by a serializer formatter, so string contents are never
//! touched.

use crate::types::{AuthorizerError, Request, Response};
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter};
use std::io::{self, Write};

/// How responses are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Space after each separator
    #[default]
    Spaced,
    /// Plain compact JSON
    Compact,
}

/// Compact JSON with a space after every `:` and `,`
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Decode one input line into a request
pub fn decode_request(line: &str) -> Result<Request, serde_json::Error> {
    serde_json::from_str(line)
}

/// Write one response followed by a newline
pub fn write_response<W>(
    response: &Response,
    style: OutputStyle,
    output: &mut W,
) -> Result<(), AuthorizerError>
where
    W: ?Sized + Write,
{
    match style {
        OutputStyle::Spaced => {
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut *output, SpacedFormatter);
            response.serialize(&mut serializer)?;
        }
        OutputStyle::Compact => {
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut *output, CompactFormatter);
            response.serialize(&mut serializer)?;
        }
    }
    output.write_all(b"\n")?;
    Ok(())
}

/// Render a response as a string, without the trailing newline
pub fn render_response(
    response: &Response,
    style: OutputStyle,
) -> Result<String, AuthorizerError> {
    let mut buffer = Vec::new();
    write_response(response, style, &mut buffer)?;
    buffer.pop();
    String::from_utf8(buffer).map_err(|e| AuthorizerError::Encode {
        message: e.to_string(),
    })
}
