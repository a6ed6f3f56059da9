//! Request data decoding.

use std::io::{self, Read};

use thiserror::Error;
use tiny_http::{Method, Request};

/// Decode `a=1&b=2` pairs, keeping their order.
pub fn decode_pairs(input: &str) -> Vec<(String, String)> {
    decode_bytes(input.as_bytes())
}

fn decode_bytes(input: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(input)
        .into_owned()
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Query-string pairs of a raw request URL.
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    url.split_once('?')
        .map(|(_, query)| decode_pairs(query))
        .unwrap_or_default()
}

/// `Host` header value, if the client sent one.
pub fn host(request: &Request) -> Option<String> {
    header(request, "host").map(|h| h.trim().to_string()).filter(|h| !h.is_empty())
}

/// Why a form body was not accepted.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("form body exceeds {0} bytes")]
    TooLarge(u64),

    #[error("failed to read form body")]
    Read(#[source] io::Error),
}

impl FormError {
    /// Status the client is answered with.
    pub const fn status(&self) -> u16 {
        match self {
            Self::TooLarge(_) => 413,
            Self::Read(_) => 400,
        }
    }
}

/// Decoded form body of a urlencoded POST; empty for anything else.
pub fn form_pairs(request: &mut Request, limit: u64) -> Result<Vec<(String, String)>, FormError> {
    if request.method() != &Method::Post || !is_urlencoded(request) {
        return Ok(Vec::new());
    }
    read_form(request.as_reader(), limit)
}

/// Read and decode a urlencoded body of at most `limit` bytes.
///
/// Invalid UTF-8 in names or values is replaced, never rejected.
fn read_form(reader: impl Read, limit: u64) -> Result<Vec<(String, String)>, FormError> {
    let mut body = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(FormError::Read)?;
    if body.len() as u64 > limit {
        return Err(FormError::TooLarge(limit));
    }
    Ok(decode_bytes(&body))
}

fn is_urlencoded(request: &Request) -> bool {
    header(request, "content-type").is_some_and(|value| {
        value
            .split(';')
            .next()
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded"))
    })
}

fn header(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
        .map(|h| h.value.to_string())
}
