//! Turn value types.

use serde::Serialize;

/// Role used for turns typed by the user.
pub const USER_ROLE: &str = "user";
/// Role the Gemini API reports for its own turns.
pub const MODEL_ROLE: &str = "model";

/// One text fragment of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    text: String,
}

impl Part {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single conversation turn. Always holds at least one part.
///
/// Serializes to the wire shape `{"role": ..., "parts": [{"text": ...}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: String,
    parts: Vec<Part>,
}

impl Message {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            parts: vec![Part::new(text)],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(USER_ROLE, text)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Text of the first part.
    pub fn text(&self) -> &str {
        self.parts.first().map_or("", Part::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_one_part() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role(), "user");
        assert_eq!(msg.parts().len(), 1);
        assert_eq!(msg.text(), "Hello");
    }

    #[test]
    fn serializes_to_wire_shape() {
        let msg = Message::new(MODEL_ROLE, "Hi there!");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "model", "parts": [{"text": "Hi there!"}]})
        );
    }
}
