//! Send a built query and sort out the response

use super::CliError;
use crate::transport::QueryClient;

/// Options for the fetch operation
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// URI of the GraphQL endpoint
    pub uri: String,
    /// Serialized query document
    pub query: String,
}

/// Result of a fetch operation
#[derive(Debug, PartialEq, Eq)]
pub enum FetchResult {
    /// Raw response text of an error-free response
    Data(String),
    /// Messages from the response's `errors` array
    Errors(Vec<String>),
}

/// Send the query and split the response into data or error messages
pub async fn execute_fetch(options: &FetchOptions) -> Result<FetchResult, CliError> {
    let client = QueryClient::new(options.uri.as_str());
    let response = client.send(&options.query).await?;

    if response.has_errors() {
        Ok(FetchResult::Errors(response.error_messages()))
    } else {
        Ok(FetchResult::Data(response.text))
    }
}
