use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value as JsonValue;

use super::model::{Ro5Request, Ro5Response};
use crate::config::AppConfig;
use crate::error::ServiceError;

/// Anything that can turn a submission into descriptor results.
///
/// Called from a worker thread, hence `Send + Sync`.
pub trait DescriptorService: Send + Sync {
    fn compute(&self, request: &Ro5Request) -> Result<Ro5Response, ServiceError>;
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// Blocking client for `POST {base_url}/ro5`.
pub struct Ro5Client {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Ro5Client {
    pub fn new(config: &AppConfig) -> Result<Self, ServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self) -> String {
        if self.base_url.ends_with('/') {
            format!("{}ro5", self.base_url)
        } else {
            format!("{}/ro5", self.base_url)
        }
    }
}

impl DescriptorService for Ro5Client {
    fn compute(&self, request: &Ro5Request) -> Result<Ro5Response, ServiceError> {
        if request.is_empty() {
            return Err(ServiceError::Empty);
        }

        let url = self.endpoint();
        log::info!("Submitting {} molecule(s) to {url}", request.len());

        let response = self.client.post(&url).json(request).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = error_message(status, &body);
            log::error!("Service returned {status}: {message}");
            return Err(if status == StatusCode::PAYLOAD_TOO_LARGE {
                ServiceError::TooLarge(message)
            } else {
                ServiceError::Api {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Error body → display string
// ---------------------------------------------------------------------------

/// Human-readable message for a failed response.
///
/// Priority: a string `error` / `detail` / `message` field of a JSON body, a
/// JSON string body, the raw text body, and finally the status reason.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<JsonValue>(body) {
        match &json {
            JsonValue::Object(obj) => {
                let field = ["error", "detail", "message"]
                    .iter()
                    .find_map(|k| obj.get(*k).and_then(JsonValue::as_str));
                if let Some(msg) = field {
                    return msg.to_string();
                }
            }
            JsonValue::String(s) if !s.trim().is_empty() => return s.clone(),
            _ => {}
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
