//! Response object handed back to the invoking platform.
//!
//! Shape (API Gateway proxy compatible):
//! `{"statusCode": 200, "headers": {...}, "body": "{\"count\": 42}"}`.
//!
//! Every path, success or failure, carries the same fixed CORS header set.
//! Bodies are JSON-encoded with `", "` / `": "` separators and non-ASCII
//! escaped as `\uXXXX`, so clients parsing either form see identical text.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::error::{CounterError, Result};

pub const STATUS_OK: u16 = 200;
pub const STATUS_ERROR: u16 = 500;

/// Returned when even the error body cannot be encoded.
const FALLBACK_ERROR_BODY: &str = r#"{"error": "Unexpected error: failed to encode response body"}"#;

/// Permissive cross-origin headers attached to every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsHeaders {
    #[serde(rename = "Access-Control-Allow-Origin")]
    allow_origin: String,
    #[serde(rename = "Access-Control-Allow-Methods")]
    allow_methods: String,
    #[serde(rename = "Access-Control-Allow-Headers")]
    allow_headers: String,
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: "*".into(),
            allow_methods: "GET".into(),
            allow_headers: "Content-Type".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterResponse {
    pub status_code: u16,
    pub headers: CorsHeaders,
    /// JSON-encoded payload.
    pub body: String,
}

#[derive(Serialize)]
struct CountBody {
    count: u64,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl CounterResponse {
    /// 200 with `{"count": N}`.
    pub fn ok(count: u64) -> Result<Self> {
        Ok(Self {
            status_code: STATUS_OK,
            headers: CorsHeaders::default(),
            body: encode_body(&CountBody { count })?,
        })
    }

    /// 500 with `{"error": "<tier prefix>: <cause>"}`.
    pub fn from_error(err: &CounterError) -> Self {
        let message = err.client_message();
        let body = encode_body(&ErrorBody { error: &message })
            .unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_string());
        Self {
            status_code: STATUS_ERROR,
            headers: CorsHeaders::default(),
            body,
        }
    }
}

/// Serialize a body value with spaced separators and ASCII-only output.
pub fn encode_body<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(32);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| CounterError::Internal(format!("body encode failed: {e}")))?;
    String::from_utf8(buf).map_err(|e| CounterError::Internal(format!("body not utf-8: {e}")))
}

/// Compact JSON with `", "` between members and `": "` after keys.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
