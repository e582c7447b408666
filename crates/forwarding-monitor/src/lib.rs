//! Events-forwarding error monitor.
//!
//! Polls the Sysdig events-forwarding errors API for one integration, keeps
//! the errors that happened during the last minute, and posts a summary to a
//! chat webhook when there are any.
//!
//! - [`config`] loads the YAML settings file
//! - [`region`] maps region codes to API and console URLs
//! - [`client`] fetches the error report
//! - [`window`] selects the recent errors
//! - [`compose`] renders the alert text
//! - [`poller`] ties it together on a fixed cadence
//!
//! Delivery itself lives in the `notify` crate.

pub mod client;
pub mod compose;
pub mod config;
pub mod model;
pub mod poller;
pub mod region;
pub mod window;

pub use client::{EndpointClient, ErrorSource, FetchError};
pub use config::{ConfigError, Settings};
pub use model::{ErrorEvent, ErrorReport};
pub use poller::{CycleOutcome, Poller};
pub use region::{Region, RegionUrls};
pub use window::{select_recent, TimeWindow, WINDOW_SECS};
