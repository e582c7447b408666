//! Rendering of the chat message for a batch of new errors.

use std::fmt::Write as _;

use crate::model::ErrorEvent;

/// Render the alert text for `events`.
///
/// Callers only invoke this with a non-empty batch. The layout is a header
/// naming the integration, one line per error message, a blank line, and a
/// footer linking to the integration's settings page.
#[must_use]
pub fn compose(events: &[ErrorEvent], integration_id: i64, console_base_url: &str) -> String {
    let mut message = format!("Recent Errors found on integration: {integration_id}\n");
    for event in events {
        message.push_str(&event.message);
        message.push('\n');
    }
    let _ = write!(
        message,
        "\nYou can check the integration in the following link: {console_base_url}{integration_id}"
    );
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    const EU1_CONSOLE: &str = "https://eu1.app.sysdig.com/secure/#/settings/events-forwarding/";

    fn event(message: &str) -> ErrorEvent {
        ErrorEvent {
            message: message.to_string(),
            timestamp: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_single_error_message() {
        let text = compose(&[event("disk full")], 42, EU1_CONSOLE);

        assert_eq!(
            text,
            "Recent Errors found on integration: 42\n\
             disk full\n\
             \n\
             You can check the integration in the following link: \
             https://eu1.app.sysdig.com/secure/#/settings/events-forwarding/42"
        );
        assert!(text.ends_with("forwarding/42"));
    }

    #[test]
    fn test_lines_follow_event_order() {
        let text = compose(&[event("first"), event("second")], 7, "https://x/");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Recent Errors found on integration: 7",
                "first",
                "second",
                "",
                "You can check the integration in the following link: https://x/7",
            ]
        );
    }
}
