/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Root Amplifr projects API
pub const API_ORIGIN: &str = "https://amplifr.com/api/v1/projects";

/// How values interpolated into request paths and query strings are treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Percent-encode every path segment and query value.
    #[default]
    Encoded,

    /// Insert values verbatim. Matches the behavior of the legacy Amplifr
    /// wrappers, where a `url` or `filename` containing `&` or `?` changes
    /// the meaning of the query string.
    Raw,
}

/// Settings shared by every request a [`crate::v1::Client`] makes.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) access_token: String,
    pub(crate) project_id: String,
    pub(crate) base_url: String,
    pub(crate) query_encoding: QueryEncoding,
}

impl ClientConfig {
    /// Configuration for the public Amplifr API with percent-encoded queries
    pub fn new(access_token: &str, project_id: &str) -> Self {
        Self {
            access_token: access_token.into(),
            project_id: project_id.into(),
            base_url: API_ORIGIN.into(),
            query_encoding: QueryEncoding::default(),
        }
    }

    /// Points the client at a different projects endpoint
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').into();
        self
    }

    pub fn with_query_encoding(mut self, query_encoding: QueryEncoding) -> Self {
        self.query_encoding = query_encoding;
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn query_encoding(&self) -> QueryEncoding {
        self.query_encoding
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"xxx")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .field("query_encoding", &self.query_encoding)
            .finish()
    }
}
