//! Client for the spreadsheet-backed component record API.
//!
//! The API is a single HTTP endpoint: each call is a GET carrying an
//! `action` query parameter and its arguments, and the reply is a JSON
//! envelope with `success`, `error`, `data` and, for bulk inserts,
//! `addedCount`.
//!
//! # Example
//!
//! ```ignore
//! use atl_client::{ApiClient, ClientConfig, submit_batch};
//!
//! let client = ApiClient::new(ClientConfig::new("https://example.com/exec")?)?;
//! let outcome = submit_batch(&client, &batch)?;
//! println!("added {} of {}", outcome.added, outcome.submitted);
//! ```

mod client;
mod config;
mod error;
mod request;
mod sink;

pub use client::ApiClient;
pub use config::{API_URL_ENV, ClientConfig, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
pub use request::{ApiEnvelope, build_action_url, encode_param};
pub use sink::{BulkAddOutcome, ComponentSink, submit_batch};
