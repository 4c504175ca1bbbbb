//! Request encoding and the response envelope.
//!
//! Every call is a GET to the endpoint with an `action` query parameter plus
//! one query parameter per argument. Object and array arguments travel as
//! JSON text; scalars are sent as-is.

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Builds the request URL for `action` with `params`.
pub fn build_action_url(base: &Url, action: &str, params: &[(&str, Value)]) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("action", action);
        for (key, value) in params {
            query.append_pair(key, &encode_param(value));
        }
    }
    url
}

/// Encodes one parameter value for the query string.
pub fn encode_param(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Response envelope shared by every action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(rename = "addedCount", default)]
    pub added_count: Option<u64>,
}

impl ApiEnvelope {
    /// Fails when the endpoint reported an error message without success.
    pub fn into_result(self) -> Result<Self> {
        match (&self.error, self.success) {
            (Some(message), false) => Err(ClientError::Api(message.clone())),
            _ => Ok(self),
        }
    }

    /// Takes `data`, treating a missing or null payload as `Value::Null`.
    pub fn take_data(&mut self) -> Value {
        self.data.take().unwrap_or(Value::Null)
    }
}
