//! Contact form forwarding.
//!
//! The storefront has no order backend of its own: enquiries are POSTed as
//! JSON to a hosted form-submission endpoint. One attempt per submission;
//! the page offers WhatsApp as the alternate channel on failure.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::ContactConfig;
use crate::models::ContactSubmission;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid submission: {0}")]
    Invalid(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Form endpoint returned {code}: {body}")]
    Rejected { code: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(config: &ContactConfig) -> Result<Self, ContactError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Validate and forward one submission.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        submission.validate().map_err(ContactError::Invalid)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(code = status.as_u16(), body = %body, "Contact endpoint rejected submission");
            return Err(ContactError::Rejected {
                code: status.as_u16(),
                body,
            });
        }

        tracing::info!(service = %submission.service, "Contact submission forwarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ContactClient {
        ContactClient::new(&ContactConfig {
            endpoint: format!("{}/ajax/orders", server.uri()),
            timeout_seconds: 5,
        })
        .expect("Failed to create client")
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ram Bahadur".to_string(),
            email: "ram@example.com".to_string(),
            phone: "9800000002".to_string(),
            service: "Spotify Premium Individual".to_string(),
            message: "Please upgrade my account".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_posts_json_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ajax/orders"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "name": "Ram Bahadur",
                "email": "ram@example.com",
                "phone": "9800000002",
                "service": "Spotify Premium Individual",
                "message": "Please upgrade my account"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": "true"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).submit(&submission()).await;
        assert!(result.is_ok(), "Expected Ok, got: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_submit_non_success_is_rejected_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("down"))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).submit(&submission()).await;
        match result {
            Err(ContactError::Rejected { code, body }) => {
                assert_eq!(code, 500);
                assert_eq!(body, "down");
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_submission_never_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut bad = submission();
        bad.email = "not-an-email".to_string();
        let result = client_for(&server).submit(&bad).await;
        assert!(matches!(result, Err(ContactError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let client = ContactClient::new(&ContactConfig {
            endpoint: "http://127.0.0.1:1/ajax/orders".to_string(),
            timeout_seconds: 2,
        })
        .unwrap();
        let result = client.submit(&submission()).await;
        assert!(matches!(result, Err(ContactError::Http(_))));
    }
}
