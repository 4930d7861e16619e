//! EmailJS REST client.

use devfolio_core::contact::{EmailSender, TemplateParams};
use devfolio_core::EmailConfig;
use gloo::net::http::Request;
use serde::Serialize;
use tracing::debug;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize, PartialEq)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl<'a> SendRequest<'a> {
    fn new(config: &'a EmailConfig, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        }
    }
}

/// Sends template emails through the EmailJS HTTP API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmailJsSender;

impl EmailSender for EmailJsSender {
    type Error = SendError;

    async fn send(&self, config: &EmailConfig, params: &TemplateParams) -> Result<(), SendError> {
        debug!(template = %config.template_id, "POST {EMAILJS_SEND_URL}");

        let response = Request::post(EMAILJS_SEND_URL)
            .json(&SendRequest::new(config, params))
            .map_err(|e| SendError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Status {
                status: response.status(),
                body,
            });
        }
        Ok(())
    }
}
