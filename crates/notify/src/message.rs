//! Webhook payload types.

use serde::{Deserialize, Serialize};

/// The JSON body posted to a Slack-compatible incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub text: String,
}

impl NotificationMessage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_text_object() {
        let message = NotificationMessage::new("disk full\n");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "disk full\n" }));
    }
}
