use crate::core::errors::Result;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Decoder
-------------------------------------------------------------------------------------------------*/

/// Reduces a raw response body to an ordered list of candidate address strings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Decoder {
    /// Newline-delimited text, one candidate per line (Cloudflare `/ips-v4/`, `/ips-v6/`).
    PlainText,

    /// A JSON object with an `addresses` array of strings (Fastly `/public-ip-list`).
    JsonAddresses,
}

impl Decoder {
    pub fn decode(&self, body: &[u8]) -> Result<Vec<String>> {
        match self {
            Decoder::PlainText => Ok(plain_text(body)),
            Decoder::JsonAddresses => json_addresses(body),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Plain Text
--------------------------------------------------------------------------------------*/

/// Split a body on `\n`. Lines are not trimmed; invalid UTF-8 is replaced rather than
/// rejected.
pub fn plain_text(body: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(body)
        .split('\n')
        .map(String::from)
        .collect()
}

/*--------------------------------------------------------------------------------------
  JSON Addresses
--------------------------------------------------------------------------------------*/

/// Parse a body as a JSON object and return its `addresses` array.
pub fn json_addresses(body: &[u8]) -> Result<Vec<String>> {
    let json: JsonAddressList = serde_json::from_slice(body)?;
    Ok(json.addresses)
}

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonAddressList {
    pub addresses: Vec<String>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
