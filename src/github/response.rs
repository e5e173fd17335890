use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::github::rate_limit::RateLimitTracker;

/// A transport response reduced to the pieces the decoder needs.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub fn parse<T: DeserializeOwned>(raw: RawResponse, rate_limit: &RateLimitTracker) -> Result<T> {
    let value = classify(&raw, rate_limit)?;
    serde_json::from_value(value).map_err(|e| Error::MalformedResponse(e.to_string()))
}

// Rate-limit headers are recorded before the status check so the reading
// survives error responses.
fn classify(raw: &RawResponse, rate_limit: &RateLimitTracker) -> Result<Value> {
    let value: Value =
        serde_json::from_str(&raw.body).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    if !value.is_object() && !value.is_array() {
        return Err(Error::MalformedResponse(
            "expected a JSON object or array".to_string(),
        ));
    }

    rate_limit.record(&raw.headers);

    if raw.status != StatusCode::OK {
        let status = raw.status.as_u16();
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        return Err(match raw.status {
            StatusCode::GONE => Error::Gone { status, message },
            _ => Error::Remote { status, message },
        });
    }

    // Some API failures come back embedded in a 200 response.
    if let Some(error) = value.as_object().and_then(|body| body.get("error")) {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(Error::Remote {
            status: 400,
            message,
        });
    }

    Ok(value)
}
