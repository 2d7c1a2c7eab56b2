//! JWT codec.
//!
//! Handles splitting a raw JWT string into its three parts (header,
//! payload, signature), base64url-decoding the first two segments, and
//! parsing them as JSON objects. The reverse direction serializes the
//! header and payload back into compact, unpadded transport form.

use std::borrow::Cow;
use std::fmt;

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::{Engine, alphabet};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{ProbeError, Segment};

/// An ordered JSON object, as found in a JWT header or payload.
pub type Claims = Map<String, Value>;

/// Base64url decoder that tolerates non-zero bits in the final symbol.
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// The decoded parts of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of sensitive claim data.
#[derive(Clone, PartialEq)]
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Claims,
    /// The parsed JWT payload (claims).
    pub payload: Claims,
    /// The raw signature segment, never decoded.
    pub signature: String,
}

/// Custom `Debug` that redacts payload and signature to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

impl DecodedToken {
    /// Re-encode this token into transport form.
    pub fn encode(&self) -> Result<String, ProbeError> {
        encode_token(&self.header, &self.payload, &self.signature)
    }
}

/// Decode a raw JWT string into its constituent parts.
///
/// Splits the token on `.` separators, base64url-decodes the header
/// and payload segments, and parses them as JSON objects. Padded and
/// unpadded segments are both accepted. The signature is returned
/// exactly as it appeared.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts,
/// if base64url decoding fails, or if JSON parsing fails.
pub fn decode_token(token: &str) -> Result<DecodedToken, ProbeError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ProbeError::InvalidTokenFormat { parts: parts.len() });
    }

    let header = decode_segment(parts[0], Segment::Header)?;
    let payload = decode_segment(parts[1], Segment::Payload)?;
    let signature = parts[2].to_string();

    debug!(
        header_claims = header.len(),
        payload_claims = payload.len(),
        signature_len = signature.len(),
        "decoded token"
    );

    Ok(DecodedToken {
        header,
        payload,
        signature,
    })
}

/// Encode a header and payload into a compact JWT string.
///
/// Both objects are serialized as compact JSON in map order and
/// base64url-encoded without padding. The signature is appended verbatim.
///
/// # Errors
///
/// Returns an error if either object cannot be serialized.
pub fn encode_token(
    header: &Claims,
    payload: &Claims,
    signature: &str,
) -> Result<String, ProbeError> {
    let header_b64 = encode_segment(header, Segment::Header)?;
    let payload_b64 = encode_segment(payload, Segment::Payload)?;
    Ok(format!("{header_b64}.{payload_b64}.{signature}"))
}

/// Append `=` padding so the segment length is a multiple of four.
pub fn restore_padding(segment: &str) -> Cow<'_, str> {
    match segment.len() % 4 {
        0 => Cow::Borrowed(segment),
        rem => {
            let mut padded = String::with_capacity(segment.len() + 4 - rem);
            padded.push_str(segment);
            padded.extend(std::iter::repeat_n('=', 4 - rem));
            Cow::Owned(padded)
        }
    }
}

/// Base64url-decode a segment and parse it as a JSON object.
fn decode_segment(encoded: &str, segment: Segment) -> Result<Claims, ProbeError> {
    let padded = restore_padding(encoded);
    trace!(%segment, padded = padded.len() != encoded.len(), "decoding segment");

    let bytes = LENIENT_URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|_| ProbeError::Base64DecodeError { segment })?;

    serde_json::from_slice(&bytes).map_err(|e| ProbeError::JsonParseError {
        segment,
        reason: e.to_string(),
    })
}

/// Serialize a JSON object and base64url-encode it without padding.
fn encode_segment(claims: &Claims, segment: Segment) -> Result<String, ProbeError> {
    let json = serde_json::to_vec(claims).map_err(|e| ProbeError::EncodeError {
        segment,
        reason: e.to_string(),
    })?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}
