/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::AmplifrError;
use crate::v1::{ApiRequest, ClientConfig, HttpsTransport, QueryEncoding, Transport};
use log::debug;
use reqwest::Method;
use serde_json::Value;
use std::borrow::Cow;
use url::Url;

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient<T = HttpsTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<HttpsTransport> {
    /// Creates a new Amplifr client instance for the public API
    pub fn new(access_token: &str, project_id: &str) -> Self {
        Self::with_transport(
            ClientConfig::new(access_token, project_id),
            HttpsTransport::new(),
        )
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds a url under the projects endpoint.
    ///
    /// The access token is always appended as the last query parameter.
    pub fn build_url(
        &self,
        segments: &[&str],
        params: Option<&ApiParams<'_>>,
    ) -> Result<Url, AmplifrError> {
        let mut req_url = self.config.base_url.clone();
        for segment in segments {
            // Url::parse collapses dot segments, even percent-encoded ones
            if self.config.query_encoding == QueryEncoding::Encoded
                && matches!(*segment, "." | "..")
            {
                return Err(AmplifrError::DotPathSegment(segment.to_string()));
            }
            req_url.push('/');
            req_url.push_str(&self.encode(segment));
        }

        let token = [("access_token", self.config.access_token.as_str())];
        let mut separator = '?';
        for (key, value) in params.unwrap_or(&[]).iter().chain(token.iter()) {
            req_url.push(separator);
            req_url.push_str(key);
            req_url.push('=');
            req_url.push_str(&self.encode(value));
            separator = '&';
        }
        Ok(Url::parse(&req_url)?)
    }

    /// Same as [`Self::build_url`] but scoped to the configured project
    pub fn project_url(
        &self,
        segments: &[&str],
        params: Option<&ApiParams<'_>>,
    ) -> Result<Url, AmplifrError> {
        let mut scoped = Vec::with_capacity(segments.len() + 1);
        scoped.push(self.config.project_id.as_str());
        scoped.extend_from_slice(segments);
        self.build_url(&scoped, params)
    }

    /// Performs a get request to the Amplifr API
    pub async fn get(&self, url: Url) -> Result<Value, AmplifrError> {
        self.send(Method::GET, url, None).await
    }

    /// Performs a post request to the Amplifr API
    pub async fn post(&self, url: Url, body: Option<Value>) -> Result<Value, AmplifrError> {
        self.send(Method::POST, url, body).await
    }

    /// Performs a put request to the Amplifr API
    pub async fn put(&self, url: Url, body: Value) -> Result<Value, AmplifrError> {
        self.send(Method::PUT, url, Some(body)).await
    }

    /// Performs a delete request to the Amplifr API
    pub async fn delete(&self, url: Url, body: Value) -> Result<Value, AmplifrError> {
        self.send(Method::DELETE, url, Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<Value, AmplifrError> {
        // Only the path is logged, the query carries the access token
        debug!("{} {}", method, url.path());
        self.transport.send(ApiRequest { method, url, body }).await
    }

    fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self.config.query_encoding {
            QueryEncoding::Encoded => urlencoding::encode(value),
            QueryEncoding::Raw => Cow::Borrowed(value),
        }
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Extra query parameters an endpoint expects, in the order they are sent
pub type ApiParams<'a> = [(&'a str, &'a str)];
