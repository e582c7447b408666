//! Slack-compatible incoming webhook channel.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::DeliverError;
use crate::message::NotificationMessage;
use crate::NotifyChannel;

/// Posts `{"text": ...}` payloads to a single webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookChannel {
    webhook_url: String,
    client: reqwest::Client,
}

impl WebhookChannel {
    /// Create a channel that posts to `webhook_url` using the given client.
    ///
    /// The client carries transport settings such as the request timeout.
    #[must_use]
    pub fn new(client: reqwest::Client, webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client,
        }
    }

    /// The URL this channel posts to.
    #[must_use]
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

#[async_trait]
impl NotifyChannel for WebhookChannel {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, message: &str) -> Result<(), DeliverError> {
        let payload = serde_json::to_vec(&NotificationMessage::new(message))?;

        debug!(channel = self.name(), bytes = payload.len(), "Sending notification");

        let response = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        // Only 200 counts; other 2xx codes are reported as failures.
        if response.status() == StatusCode::OK {
            debug!(channel = self.name(), "Notification sent successfully");
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        warn!(
            channel = self.name(),
            status = %status,
            body = %body,
            "Webhook request failed"
        );

        Err(DeliverError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn channel_for(server: &MockServer) -> WebhookChannel {
        WebhookChannel::new(
            reqwest::Client::new(),
            format!("{}/services/T000/B000/XXXX", server.uri()),
        )
    }

    #[tokio::test]
    async fn test_delivers_text_payload_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/T000/B000/XXXX"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "text": "disk full" })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let result = channel_for(&server).deliver("disk full").await;
        assert!(result.is_ok(), "unexpected error: {result:?}");
    }

    #[tokio::test]
    async fn test_not_found_captures_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no_service"))
            .expect(1)
            .mount(&server)
            .await;

        let err = channel_for(&server).deliver("disk full").await.unwrap_err();
        match err {
            DeliverError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no_service");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_success_codes_are_failures() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = channel_for(&server).deliver("disk full").await.unwrap_err();
        assert_eq!(err.status(), Some(204));
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_transport_error() {
        let channel = WebhookChannel::new(reqwest::Client::new(), "http://127.0.0.1:1/hook");

        let err = channel.deliver("disk full").await.unwrap_err();
        assert!(matches!(err, DeliverError::TransportError(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_channel_name() {
        let channel = WebhookChannel::new(reqwest::Client::new(), "http://localhost/hook");
        assert_eq!(channel.name(), "webhook");
        assert_eq!(channel.webhook_url(), "http://localhost/hook");
    }
}
