use std::time::Duration;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::{
    ChatReply, ChatRequest, DashboardReport, FeedbackAck, FeedbackRequest, Rating, StatsSnapshot,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the support-chat backend.
///
/// The backend correlates chat turns through a session cookie, so the
/// underlying reqwest client runs with its cookie store enabled; this is
/// the browser's `credentials: 'include'` in client form. Clone shares the
/// cookie jar.
#[derive(Debug, Clone)]
pub struct SupportClient {
    client: ReqwestClient,
    base_url: Url,
    timeout: Duration,
}

impl SupportClient {
    /// Create a new client for the backend at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with a custom request timeout.
    pub fn with_options(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::url(
                format!("base URL cannot be a base: {base_url}"),
                None,
            ));
        }

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create and return default headers for backend requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Error::from)
    }

    /// Classify a reqwest transport failure into our error type.
    fn classify_request_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    /// Process backend error responses and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // The backend reports errors as {"error": "..."}.
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let error_message = serde_json::from_str::<ErrorBody>(&error_body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| error_body.clone());

        match status_code {
            400 => Error::bad_request(error_message, None),
            404 => Error::not_found(error_message, None),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_message),
        }
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        response.json::<T>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }

    /// Submit one user message to `POST /chat`.
    ///
    /// The message must be non-empty after trimming; empty input is
    /// rejected locally with a validation error before any network I/O.
    ///
    /// ```
    /// use liaison::SupportClient;
    ///
    /// # tokio_test::block_on(async {
    /// let client = SupportClient::new("http://localhost:5000/").unwrap();
    /// let err = client.chat("   ").await.unwrap_err();
    /// assert!(err.is_validation());
    /// # });
    /// ```
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        if message.trim().is_empty() {
            return Err(Error::validation(
                "message must not be empty",
                Some("message".to_string()),
            ));
        }

        let url = self.endpoint("chat")?;
        let body = ChatRequest::new(message);

        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .headers(self.default_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                self.classify_request_error(e)
            })?;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        Self::parse_response(response).await
    }

    /// Submit a rating for a conversation to `POST /feedback`.
    pub async fn feedback(&self, conversation_id: u64, rating: Rating) -> Result<FeedbackAck> {
        let url = self.endpoint("feedback")?;
        let body = FeedbackRequest::new(conversation_id, rating);

        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .headers(self.default_headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                self.classify_request_error(e)
            })?;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        Self::parse_response(response).await
    }

    /// Fetch the current aggregate usage counters from `GET /stats`.
    pub async fn stats(&self) -> Result<StatsSnapshot> {
        let url = self.endpoint("stats")?;

        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .headers(self.default_headers())
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                self.classify_request_error(e)
            })?;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        Self::parse_response(response).await
    }

    /// Fetch the full analytics report from `GET /dashboard`.
    pub async fn dashboard(&self) -> Result<DashboardReport> {
        let url = self.endpoint("dashboard")?;

        CLIENT_REQUESTS.click();
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .headers(self.default_headers())
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                self.classify_request_error(e)
            })?;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparsable_base_url() {
        assert!(SupportClient::new("not a url").is_err());
    }

    #[test]
    fn joins_endpoint_paths() {
        let client = SupportClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.endpoint("chat").unwrap().as_str(),
            "http://localhost:5000/chat"
        );
        assert_eq!(
            client.endpoint("stats").unwrap().as_str(),
            "http://localhost:5000/stats"
        );
    }

    #[tokio::test]
    async fn empty_message_is_rejected_locally() {
        let client = SupportClient::new("http://localhost:5000/").unwrap();
        let err = client.chat("   ").await.unwrap_err();
        assert!(err.is_validation());
    }
}
