//! Reply parsing.
//!
//! Only the first candidate and its first part are consumed; anything else
//! in the body (extra candidates, `usageMetadata`, `finishReason`, ...) is
//! ignored.

use serde::Deserialize;
use serde_json::error::Category;

use crate::{Message, ParseError, MODEL_ROLE};

/// Shape of a `generateContent` reply, with every level optional so that
/// missing pieces are reported as `ParseError`s rather than serde errors.
#[derive(Debug, Deserialize)]
pub struct ResponsePayload {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub role: Option<String>,
    pub parts: Option<Vec<PartBody>>,
}

#[derive(Debug, Deserialize)]
pub struct PartBody {
    pub text: Option<String>,
}

/// Extract the assistant turn from a raw reply body.
///
/// Trailing `\r`/`\n` are stripped from the text; other whitespace is kept.
/// A missing role is reported as `"model"`.
pub fn parse(raw: &str) -> Result<Message, ParseError> {
    let payload: Option<ResponsePayload> = serde_json::from_str(raw).map_err(|e| {
        let label = match e.classify() {
            Category::Data => "unexpected reply shape",
            _ => "invalid JSON",
        };
        ParseError::MalformedBody(format!("{label}: {e}"))
    })?;
    let payload = payload.ok_or_else(|| malformed("response body is null"))?;

    let candidates = payload
        .candidates
        .ok_or_else(|| malformed("no candidates in response"))?;
    let first = candidates
        .into_iter()
        .next()
        .ok_or(ParseError::EmptyCandidates)?;

    let content = first
        .content
        .ok_or_else(|| malformed("first candidate has no content"))?;
    let part = content
        .parts
        .and_then(|parts| parts.into_iter().next())
        .ok_or_else(|| malformed("first candidate has no parts"))?;
    let text = part
        .text
        .ok_or_else(|| malformed("first part has no text"))?;

    let role = content.role.unwrap_or_else(|| MODEL_ROLE.to_string());
    Ok(Message::new(role, text.trim_end_matches(&['\r', '\n'][..])))
}

fn malformed(detail: &str) -> ParseError {
    ParseError::MalformedBody(detail.to_string())
}
