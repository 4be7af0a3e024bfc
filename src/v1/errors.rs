/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use serde_json::Value;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum AmplifrError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("Failed serializing to JSON: {0}")]
    Serialization(serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Path segment {0:?} would change the request path")]
    DotPathSegment(String),

    #[error("API Response was not ok: {0}")]
    ApiRejected(Value),

    #[error("Expected response field missing: {0}")]
    ResponseMissing(&'static str),
}
