/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate amplifr;

use amplifr::v1::{Client, Envelope, ScheduledPostsQuery, SortOrder};
use anyhow::{Result, bail};
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The access token is issued from the Amplifr account settings
    let access_token = std::env::var("AMPLIFR_ACCESS_TOKEN")?;
    let project_id = std::env::var("AMPLIFR_PROJECT_ID")?;
    let client = Client::new(&access_token, &project_id);

    // Walks pages until the API hands back an empty one
    let mut query = ScheduledPostsQuery::default()
        .per_page(20)
        .today(false)
        .order(SortOrder::Asc);
    loop {
        let resp = client.list_scheduled_posts(&query).await?;
        if !resp.is_ok() {
            bail!("Amplifr refused to list posts: {}", resp);
        }

        let posts = resp
            .result()
            .and_then(|r| r.get("posts").or(Some(r)))
            .and_then(|p| p.as_array())
            .cloned()
            .unwrap_or_default();
        if posts.is_empty() {
            break;
        }
        for post in &posts {
            println!("{}", serde_json::to_string_pretty(post)?);
        }
        let next_page = query.page + 1;
        query = query.page(next_page);
    }
    Ok(())
}
