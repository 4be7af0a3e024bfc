/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::AmplifrError;
use reqwest::Method;
use serde_json::Value;
use std::future::Future;
use url::Url;

/// A single fully built request to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

/// Sends requests to the API and hands back the decoded JSON body.
///
/// Timeouts, proxies and cancellation are the concern of the implementation.
/// Any failure to reach the service, a non-success status, or a body that is
/// not JSON is reported as an error.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest)
    -> impl Future<Output = Result<Value, AmplifrError>> + Send;
}

/// Default [`Transport`] backed by [`reqwest`].
#[derive(Debug, Default, Clone)]
pub struct HttpsTransport {
    https_client: reqwest::Client,
}

impl HttpsTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already configured reqwest client (timeouts, proxies, ...)
    pub fn with_client(https_client: reqwest::Client) -> Self {
        Self { https_client }
    }
}

impl Transport for HttpsTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<Value, AmplifrError>> + Send {
        let https_client = self.https_client.clone();
        async move {
            let mut req = https_client
                .request(request.method, request.url)
                .header("Accept", "application/json");
            if let Some(body) = request.body.as_ref() {
                req = req.json(body);
            }
            let resp = req.send().await?.error_for_status()?;
            let body = resp.bytes().await?;
            Ok(serde_json::from_slice::<Value>(&body)?)
        }
    }
}
