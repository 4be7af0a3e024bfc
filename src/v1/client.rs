/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::errors::AmplifrError;
use crate::v1::{
    ApiClient, ClientConfig, Envelope, HttpsTransport, ScheduledPostsQuery, Transport,
};
use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;

/// Handle to one Amplifr project.
///
/// Every method issues exactly one request and hands back the decoded body.
/// Cloning is cheap and clones share the same transport.
///
/// Example
/// ```rust,no_run
/// # async fn run() -> Result<(), amplifr::v1::AmplifrError> {
/// use amplifr::v1::Client;
/// let client = Client::new("access-token", "project-id");
/// let accounts = client.list_accounts().await?;
/// println!("{accounts}");
/// # Ok(())
/// # }
/// ```
pub struct Client<T = HttpsTransport> {
    api_client: Arc<ApiClient<T>>,
}

impl Client<HttpsTransport> {
    pub fn new(access_token: &str, project_id: &str) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(access_token, project_id)),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            api_client: Arc::new(ApiClient::with_transport(config, transport)),
        }
    }

    /// Lower level access for endpoints this client doesn't wrap
    pub fn api_client(&self) -> &ApiClient<T> {
        &self.api_client
    }

    /// Returns all projects the access token has access to, with their
    /// accounts and users bundled in.
    pub async fn list_projects(&self) -> Result<Value, AmplifrError> {
        let req_url = self.api_client.build_url(&[], None)?;
        self.api_client.get(req_url).await
    }

    /// Returns the social accounts of the project
    pub async fn list_accounts(&self) -> Result<Value, AmplifrError> {
        let req_url = self.api_client.project_url(&["accounts"], None)?;
        self.api_client.get(req_url).await
    }

    /// Returns the users of the project with their roles
    pub async fn list_users(&self) -> Result<Value, AmplifrError> {
        let req_url = self.api_client.project_url(&["users"], None)?;
        self.api_client.get(req_url).await
    }

    /// Returns one page of the project's scheduled posts
    pub async fn list_scheduled_posts(
        &self,
        query: &ScheduledPostsQuery,
    ) -> Result<Value, AmplifrError> {
        let owned = query.to_params();
        let params: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let req_url = self.api_client.project_url(&["posts"], Some(&params))?;
        self.api_client.get(req_url).await
    }

    /// Schedules a new post. `post_data` is sent as is.
    pub async fn create_post<D>(&self, post_data: &D) -> Result<Value, AmplifrError>
    where
        D: Serialize + ?Sized,
    {
        let body = to_body(post_data)?;
        let req_url = self.api_client.project_url(&["posts"], None)?;
        self.api_client.post(req_url, Some(body)).await
    }

    /// Returns detailed information about one post
    pub async fn get_post(&self, post_id: impl Display) -> Result<Value, AmplifrError> {
        let post_id = post_id.to_string();
        let req_url = self.api_client.project_url(&["posts", &post_id], None)?;
        self.api_client.get(req_url).await
    }

    /// Edits a scheduled post
    pub async fn update_post<D>(
        &self,
        post_id: impl Display,
        post_data: &D,
    ) -> Result<Value, AmplifrError>
    where
        D: Serialize + ?Sized,
    {
        let body = to_body(post_data)?;
        let post_id = post_id.to_string();
        let req_url = self.api_client.project_url(&["posts", &post_id], None)?;
        self.api_client.put(req_url, body).await
    }

    /// Deletes a post. The API accepts a body on this call as well.
    pub async fn delete_post<D>(
        &self,
        post_id: impl Display,
        post_data: &D,
    ) -> Result<Value, AmplifrError>
    where
        D: Serialize + ?Sized,
    {
        let body = to_body(post_data)?;
        let post_id = post_id.to_string();
        let req_url = self.api_client.project_url(&["posts", &post_id], None)?;
        self.api_client.delete(req_url, body).await
    }

    /// Returns the public url of an uploaded image.
    ///
    /// A response whose `ok` flag is not set is returned as
    /// [`AmplifrError::ApiRejected`].
    pub async fn image_url(&self, image_id: impl Display) -> Result<String, AmplifrError> {
        let image_id = image_id.to_string();
        let req_url = self.api_client.project_url(&["images", &image_id], None)?;
        let envelope = accepted(self.api_client.get(req_url).await?)?;
        envelope
            .result()
            .and_then(|r| r.get("url"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(AmplifrError::ResponseMissing("result.url"))
    }

    /// Returns where a file named `filename` can be uploaded to
    pub async fn server_image_url(&self, filename: &str) -> Result<Value, AmplifrError> {
        let params = vec![("filename", filename)];
        let req_url = self
            .api_client
            .project_url(&["images", "get_upload_url"], Some(&params))?;
        self.api_client.get(req_url).await
    }

    /// Has Amplifr fetch the image at `image_url` and returns the new image id.
    ///
    /// The image still needs to be committed with [`Self::commit_image`]
    /// before it can be used in a post.
    pub async fn upload_image(&self, image_url: &str) -> Result<u64, AmplifrError> {
        let params = vec![("url", image_url)];
        let req_url = self
            .api_client
            .project_url(&["images", "upload_from_url"], Some(&params))?;
        let envelope = accepted(self.api_client.post(req_url, None).await?)?;
        envelope
            .result()
            .and_then(|r| r.get("id"))
            .and_then(Value::as_u64)
            .ok_or(AmplifrError::ResponseMissing("result.id"))
    }

    /// Commits an uploaded image so it can be used for publication
    pub async fn commit_image(&self, image_id: impl Display) -> Result<Value, AmplifrError> {
        let image_id = image_id.to_string();
        let req_url = self
            .api_client
            .project_url(&["images", &image_id, "commit"], None)?;
        self.api_client.post(req_url, None).await
    }
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            api_client: self.api_client.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_client", &self.api_client)
            .finish()
    }
}

fn to_body<D: Serialize + ?Sized>(post_data: &D) -> Result<Value, AmplifrError> {
    serde_json::to_value(post_data).map_err(AmplifrError::Serialization)
}

// Passes through envelopes flagged ok
fn accepted(envelope: Value) -> Result<Value, AmplifrError> {
    if envelope.is_ok() {
        Ok(envelope)
    } else {
        warn!("Amplifr rejected the request: {}", envelope);
        Err(AmplifrError::ApiRejected(envelope))
    }
}
