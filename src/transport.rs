//! HTTP transport for finished query documents.
//!
//! The query is sent as `GET <uri>?query=<document>` and the response body is
//! decoded as JSON. GraphQL-level failures come back inside the body's
//! `errors` array and are exposed through [`QueryResponse::error_messages`];
//! they are not transport errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use igqloo::transport::QueryClient;
//!
//! let client = QueryClient::new("https://example.com/graphql");
//! let response = client.send("query{viewer{login}}").await?;
//! if response.has_errors() {
//!     for message in response.error_messages() {
//!         eprintln!("{message}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error type for sending a query.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or similar failure.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with something that is not JSON.
    #[error("response with status {status} is not valid JSON: {source}")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded response from the endpoint.
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub text: String,
    /// Response body decoded as JSON.
    pub body: serde_json::Value,
}

impl QueryResponse {
    /// True when the body carries a top-level `errors` key.
    pub fn has_errors(&self) -> bool {
        self.body.get("errors").is_some()
    }

    /// The `message` of every entry in the top-level `errors` array.
    ///
    /// Entries without a string `message` are rendered as JSON.
    pub fn error_messages(&self) -> Vec<String> {
        match self.body.get("errors") {
            Some(serde_json::Value::Array(errors)) => errors
                .iter()
                .map(|err| match err.get("message") {
                    Some(serde_json::Value::String(message)) => message.clone(),
                    _ => err.to_string(),
                })
                .collect(),
            Some(other) => vec![other.to_string()],
            None => Vec::new(),
        }
    }
}

/// Sends query documents to one GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: reqwest::Client,
    uri: String,
}

impl QueryClient {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        QueryClient {
            client: reqwest::Client::new(),
            uri: uri.into(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Performs `GET <uri>?query=<query>`.
    pub async fn send(&self, query: &str) -> Result<QueryResponse, TransportError> {
        tracing::debug!(uri = %self.uri, query, "sending query");

        let res = self
            .client
            .get(&self.uri)
            .query(&[("query", query)])
            .send()
            .await?;

        let status = res.status().as_u16();
        let text = res.text().await?;
        tracing::debug!(status, bytes = text.len(), "received response");

        let body = serde_json::from_str(&text)
            .map_err(|source| TransportError::InvalidJson { status, source })?;

        Ok(QueryResponse { status, text, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_passes_query_as_url_parameter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/graphql"))
            .and(query_param("query", r#"query{posts(first:"5")}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "posts": [] }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = QueryClient::new(format!("{}/graphql", mock_server.uri()));
        let response = client.send(r#"query{posts(first:"5")}"#).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(!response.has_errors());
        assert_eq!(response.body["data"]["posts"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_send_rejects_non_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let client = QueryClient::new(mock_server.uri());
        let result = client.send("query{a}").await;

        assert!(matches!(
            result,
            Err(TransportError::InvalidJson { status: 502, .. })
        ));
    }

    #[test]
    fn test_error_messages_fall_back_to_json() {
        let response = QueryResponse {
            status: 200,
            text: String::new(),
            body: serde_json::json!({
                "errors": [{ "message": "Cannot query field" }, { "code": 7 }]
            }),
        };

        assert_eq!(
            response.error_messages(),
            vec!["Cannot query field".to_string(), r#"{"code":7}"#.to_string()]
        );
    }
}
