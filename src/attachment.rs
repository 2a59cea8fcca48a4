//! Transfer attachment decoding.

use serde::Serialize;
use tracing::trace;

/// Decodes the textual wire form of an attachment into text.
///
/// Decoding is all-or-nothing: a payload that cannot be decoded, or whose
/// bytes are not text, yields `None`.
pub trait AttachmentDecoder {
    fn decode(&self, encoded: &str) -> Option<String>;
}

/// Base58 encoded UTF-8 text, the node's attachment encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base58Text;

impl AttachmentDecoder for Base58Text {
    fn decode(&self, encoded: &str) -> Option<String> {
        let bytes = bs58::decode(encoded).into_vec().ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl<F> AttachmentDecoder for F
where
    F: Fn(&str) -> Option<String>,
{
    fn decode(&self, encoded: &str) -> Option<String> {
        self(encoded)
    }
}

/// Decoded attachment along with its original encoded form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Decoded text, absent when the payload is not text.
    #[serde(rename = "attachment")]
    pub text: Option<String>,
    /// Encoded form exactly as received.
    #[serde(rename = "rawAttachment")]
    pub raw: String,
}

impl Attachment {
    pub fn decode<D: AttachmentDecoder + ?Sized>(raw: &str, decoder: &D) -> Self {
        let text = decoder.decode(raw);
        if text.is_none() {
            trace!(raw, "attachment is not text");
        }
        Self {
            text,
            raw: raw.to_string(),
        }
    }
}
