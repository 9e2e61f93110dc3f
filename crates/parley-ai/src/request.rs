//! Request payload construction.

use serde::Serialize;

use crate::Message;

/// Body of a `generateContent` call: the full history, verbatim.
///
/// The API infers turn order from position, so `contents` keeps the
/// snapshot's message and part order untouched.
#[derive(Debug, Serialize)]
pub struct RequestPayload<'a> {
    contents: &'a [Message],
}

impl<'a> RequestPayload<'a> {
    pub fn contents(&self) -> &'a [Message] {
        self.contents
    }

    /// UTF-8 JSON encoding sent on the wire.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// Wrap a history snapshot as a request payload. No size cap is applied.
pub fn build(snapshot: &[Message]) -> RequestPayload<'_> {
    RequestPayload { contents: snapshot }
}
