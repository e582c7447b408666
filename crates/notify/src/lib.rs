//! Chat webhook delivery for events-forwarding error alerts.
//!
//! This crate owns the outbound half of the alerting bridge: it takes an
//! already-rendered text message and delivers it to a Slack-compatible
//! incoming webhook as `{"text": "..."}`.
//!
//! # Usage
//!
//! ```no_run
//! use notify::{NotifyChannel, WebhookChannel};
//!
//! # async fn run() -> Result<(), notify::DeliverError> {
//! let channel = WebhookChannel::new(
//!     reqwest::Client::new(),
//!     "https://hooks.slack.com/services/T000/B000/XXXX",
//! );
//!
//! channel.deliver("Recent Errors found on integration: 42").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`NotifyChannel`] trait defines the delivery interface
//! - [`WebhookChannel`] implements it over HTTP
//! - [`DeliverError`] classifies why a delivery failed
//!
//! Delivery is a single attempt. Retry policy, if any, belongs to the caller.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod channels;
pub mod error;
pub mod message;

pub use channels::webhook::WebhookChannel;
pub use channels::NotifyChannel;
pub use error::DeliverError;
pub use message::NotificationMessage;
