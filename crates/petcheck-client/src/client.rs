//! Blocking HTTP wrapper around `reqwest`
//!
//! One thin method per verb; every request is timed and appended to the
//! suite log when a logger is attached. Responses come back as the
//! transport-agnostic [`ApiResponse`] the validator consumes.

use std::time::Instant;

use indexmap::IndexMap;
use serde_json::Value;

use petcheck_core::{ApiResponse, Config};

use crate::logger::{LogEntry, RequestLogger};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking client bound to one Pet Store deployment.
pub struct ApiClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
    http: reqwest::blocking::Client,
    logger: Option<RequestLogger>,
}

impl ApiClient {
    /// Build a client from the harness config.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_headers: config
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            http,
            logger: None,
        })
    }

    /// Attach a per-suite request logger.
    #[must_use]
    pub fn with_logger(mut self, logger: RequestLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Full URL for an endpoint path.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Full URL with percent-encoded query parameters appended.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL and endpoint do not form a valid URL.
    pub fn url_with_query(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ClientError> {
        let url = reqwest::Url::parse_with_params(&self.url(endpoint), params)
            .map_err(|e| ClientError::Http(e.to_string()))?;
        Ok(url.into())
    }

    /// # Errors
    ///
    /// Returns error if the request cannot be sent.
    pub fn get(&self, endpoint: &str) -> Result<ApiResponse, ClientError> {
        self.execute(reqwest::Method::GET, endpoint, None, &[])
    }

    /// GET with query parameters, percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent.
    pub fn get_with_query(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url_with_query(endpoint, params)?;
        let start = Instant::now();
        let response = self
            .request_with_defaults(reqwest::Method::GET, &url, &[])
            .send()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        self.finish(endpoint, &url, "GET", None, &[], start, response)
    }

    /// # Errors
    ///
    /// Returns error if the request cannot be sent.
    pub fn delete(&self, endpoint: &str) -> Result<ApiResponse, ClientError> {
        self.execute(reqwest::Method::DELETE, endpoint, None, &[])
    }

    /// POST a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent.
    pub fn post(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
        headers: &[(String, String)],
    ) -> Result<ApiResponse, ClientError> {
        self.execute(reqwest::Method::POST, endpoint, payload, headers)
    }

    /// POST form-encoded fields (used by the form-based pet update).
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent.
    pub fn post_form(
        &self,
        endpoint: &str,
        fields: &[(String, String)],
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(endpoint);
        let start = Instant::now();
        let response = self
            .request_with_defaults(reqwest::Method::POST, &url, &[])
            .form(fields)
            .send()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        self.finish(endpoint, &url, "POST", None, &[], start, response)
    }

    /// # Errors
    ///
    /// Returns error if the request cannot be sent.
    pub fn put(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
        headers: &[(String, String)],
    ) -> Result<ApiResponse, ClientError> {
        self.execute(reqwest::Method::PUT, endpoint, payload, headers)
    }

    /// Every request goes through here so configured default headers are
    /// applied uniformly, form posts included.
    fn request_with_defaults(
        &self,
        method: reqwest::Method,
        url: &str,
        headers: &[(String, String)],
    ) -> reqwest::blocking::RequestBuilder {
        let mut request = self.http.request(method, url);
        for (name, value) in self.default_headers.iter().chain(headers) {
            request = request.header(name, value);
        }
        request
    }

    fn execute(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        payload: Option<&Value>,
        headers: &[(String, String)],
    ) -> Result<ApiResponse, ClientError> {
        let url = self.url(endpoint);
        let method_name = method.as_str().to_string();

        let mut request = self.request_with_defaults(method, &url, headers);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let start = Instant::now();
        let response = request.send().map_err(|e| ClientError::Http(e.to_string()))?;
        self.finish(endpoint, &url, &method_name, payload, headers, start, response)
    }

    #[allow(clippy::too_many_arguments)]
    fn finish(
        &self,
        endpoint: &str,
        url: &str,
        method: &str,
        payload: Option<&Value>,
        headers: &[(String, String)],
        start: Instant,
        response: reqwest::blocking::Response,
    ) -> Result<ApiResponse, ClientError> {
        let status = response.status().as_u16();
        let response_headers = convert_headers(response.headers());
        let body = response
            .text()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        let duration_ms = start.elapsed().as_millis();

        if let Some(logger) = &self.logger {
            let entry = LogEntry {
                endpoint,
                url,
                method,
                payload,
                headers,
                response_body: &body,
                duration_ms,
            };
            logger.log(&entry).map_err(ClientError::Log)?;
        }

        Ok(ApiResponse::new(status, body, response_headers))
    }
}

/// Header values that are not valid UTF-8 are skipped; the Pet Store never
/// sends any, and the schema database cannot express them anyway.
fn convert_headers(headers: &reqwest::header::HeaderMap) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            out.insert(name.as_str().to_string(), value.to_string());
        }
    }
    out
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Log write failed: {0}")]
    Log(std::io::Error),
}

/// `content-type: application/json` as a one-element header list.
#[must_use]
pub fn json_content_type() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}
