//! HTTP implementation of the signup client
//!
//! POSTs the signup payload as JSON to the configured endpoint. No retries
//! and no timeout beyond the transport default; any transport error or
//! non-2xx status is folded into the failure outcome.

use super::{SignupApi, SignupRequest, SubmissionOutcome};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};

/// Signup client backed by reqwest
pub struct SignupClient {
    http: Client,
    endpoint: Url,
}

impl SignupClient {
    /// Create a client for the given endpoint URL.
    ///
    /// The URL is parsed here so a misconfigured endpoint fails at startup
    /// instead of being silently dropped at submit time.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid signup endpoint URL: {endpoint}"))?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl SignupApi for SignupClient {
    async fn submit(&self, request: SignupRequest) -> SubmissionOutcome {
        let response = match self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Signup request failed: {e}");
                return SubmissionOutcome::NetworkFailure(e.to_string());
            }
        };

        let status = response.status();
        if status.is_success() {
            tracing::info!("Signup accepted with status {status}");
            SubmissionOutcome::Success
        } else {
            tracing::warn!("Signup rejected with status {status}");
            SubmissionOutcome::ServerRejected(status.as_u16())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jane() -> SignupRequest {
        SignupRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "5551234".to_string(),
        }
    }

    #[test]
    fn test_new_rejects_malformed_url() {
        assert!(SignupClient::new("not a url").is_err());
    }

    #[test]
    fn test_new_accepts_https_url() {
        assert!(SignupClient::new("https://stunner.com/signup").is_ok());
    }

    #[tokio::test]
    async fn test_2xx_maps_to_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/signup")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::JsonString(
                r#"{"firstName":"Jane","lastName":"Doe","phoneNumber":"5551234"}"#.to_string(),
            ))
            .with_status(201)
            .create_async()
            .await;

        let client = SignupClient::new(&format!("{}/signup", server.url())).unwrap();
        let outcome = client.submit(jane()).await;

        assert_eq!(outcome, SubmissionOutcome::Success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_preserves_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/signup")
            .with_status(500)
            .create_async()
            .await;

        let client = SignupClient::new(&format!("{}/signup", server.url())).unwrap();
        let outcome = client.submit(jane()).await;

        assert_eq!(outcome, SubmissionOutcome::ServerRejected(500));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_client_error_is_rejected_not_network_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/signup")
            .with_status(422)
            .create_async()
            .await;

        let client = SignupClient::new(&format!("{}/signup", server.url())).unwrap();
        let outcome = client.submit(jane()).await;

        assert_eq!(outcome, SubmissionOutcome::ServerRejected(422));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        // Nothing listens on this port
        let client = SignupClient::new("http://127.0.0.1:9/signup").unwrap();
        let outcome = client.submit(jane()).await;

        assert!(matches!(outcome, SubmissionOutcome::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn test_exactly_one_request_per_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/signup")
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let client = SignupClient::new(&format!("{}/signup", server.url())).unwrap();
        client.submit(jane()).await;

        mock.assert_async().await;
    }
}
