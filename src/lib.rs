/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Amplifr
//!
//! This library was created for working with the Amplifr API v1 interface.
//!
//! For further details on the Rest API refer to the [Amplifr API Docs](http://docs.amplifr.apiary.io)
//!
//! ## Features
//!
//! - Projects, social accounts and users (Read only)
//! - Scheduled posts
//!     - List (one page at a time)
//!     - Create, read, update and delete
//! - Images
//!     - Upload from a URL and commit
//!     - Look up the URL of an uploaded image
//! - Pluggable [`v1::Transport`] so the HTTP layer can be swapped or mocked
//!
//! *The Amplifr API authenticates with an access token sent as a query parameter.
//! Getting the access token is left up to the consumer of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! amplifr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use amplifr::v1::{AmplifrError, Client, ScheduledPostsQuery};
//! use serde_json::json;
//!
//! async fn schedule_with_image(
//!     access_token: &str,
//!     project_id: &str,
//!     picture_url: &str,
//! ) -> Result<(), AmplifrError> {
//!     let client = Client::new(access_token, project_id);
//!
//!     // Upload the picture and make it available for publication
//!     let image_id = client.upload_image(picture_url).await?;
//!     client.commit_image(image_id).await?;
//!
//!     // Schedule a post that uses it
//!     client
//!         .create_post(&json!({
//!             "text": "Hello from Rust",
//!             "images": [image_id],
//!         }))
//!         .await?;
//!
//!     let posts = client
//!         .list_scheduled_posts(&ScheduledPostsQuery::default())
//!         .await?;
//!     println!("{posts}");
//!     Ok(())
//! }
//! ```
//!
pub mod v1;
