//! `reqwest` transport for backend endpoints.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use access::api::{check_status, normalize_base_url};
use access::credentials::CONTENT_TYPE;
use access::{ApiError, AuthHeaders, Endpoint, JSON_CONTENT_TYPE, Method};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport)?;
        Ok(Self { http, base_url: normalize_base_url(base_url).to_owned() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assemble the request for `endpoint` without sending it.
    pub fn request(
        &self,
        endpoint: Endpoint,
        headers: Option<&AuthHeaders>,
        body: Option<String>,
    ) -> Result<reqwest::Request, ApiError> {
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut request = self.http.request(method, endpoint.url(&self.base_url));
        request = match headers {
            Some(headers) => headers
                .pairs()
                .into_iter()
                .fold(request, |request, (name, value)| request.header(name, value)),
            None => request.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
        };
        if let Some(body) = body {
            request = request.body(body);
        }
        request.build().map_err(transport)
    }

    /// Send and return the response body of a 2xx reply.
    pub async fn send(
        &self,
        endpoint: Endpoint,
        headers: Option<&AuthHeaders>,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let request = self.request(endpoint, headers, body)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.http.execute(request).await.map_err(transport)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport)?;
        check_status(endpoint, status, &text)?;
        Ok(text)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
