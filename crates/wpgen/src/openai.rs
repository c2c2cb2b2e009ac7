use crate::prelude::*;
use std::future::Future;
use wpgen_core::completion::{
    completions_url, interpret_response, CompletionOutcome, CompletionRequest,
};
use wpgen_core::config::ApiKey;

/// Anything that can turn a completion request into an outcome.
pub trait Completer {
    fn complete(&self, request: &CompletionRequest) -> impl Future<Output = CompletionOutcome>;
}

/// Chat completions client for OpenAI and compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    url: String,
}

impl OpenAiClient {
    /// Create an HTTP client with the bearer token baked into its default headers
    pub fn new(base_url: &str, api_key: ApiKey) -> Result<Self> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let mut auth = HeaderValue::from_str(&f!("Bearer {}", api_key.expose()))
            .map_err(|e| eyre!("Invalid header value: {}", e))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("wpgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            url: completions_url(base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the request and return the raw body of a successful response
    async fn send(&self, request: &CompletionRequest) -> Result<String, String> {
        log::debug!("POST {} (model {})", self.url, request.model);

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| f!("Failed to reach {}: {}", self.url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| f!("Failed to read completion response: {}", e))?;

        log::debug!("{} returned {} ({} bytes)", self.url, status, body.len());

        if !status.is_success() {
            return Err(f!("API returned status {}: {}", status, body.trim()));
        }

        Ok(body)
    }
}

impl Completer for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        match self.send(request).await {
            Ok(body) => interpret_response(&body),
            Err(detail) => CompletionOutcome::TransportError(detail),
        }
    }
}
