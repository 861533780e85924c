use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use super::{BoardStore, StoreError};
use crate::models::{NewPost, NewThread, Post, Thread};

/// HTTP client for the remote table service backing the board.
#[derive(Clone)]
pub struct RestStore {
    base_url: Url,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = sanitize_base_url(base_url.into())?;
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path.trim_start_matches('/'));
        url
    }
}

impl BoardStore for RestStore {
    fn list_threads(&self) -> Result<Vec<Thread>, StoreError> {
        let response = self.client.get(self.url("/threads")).send()?;
        Ok(checked(response)?.json()?)
    }

    fn create_thread(&self, title: &str) -> Result<Thread, StoreError> {
        let payload = NewThread {
            title: title.to_string(),
        };
        let response = self
            .client
            .post(self.url("/threads"))
            .json(&payload)
            .send()?;
        Ok(checked(response)?.json()?)
    }

    fn get_thread(&self, id: i64) -> Result<Option<Thread>, StoreError> {
        let response = self.client.get(self.url(&format!("/threads/{id}"))).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(checked(response)?.json()?))
    }

    fn list_posts(&self, thread_id: i64) -> Result<Vec<Post>, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/threads/{thread_id}/posts")))
            .send()?;
        Ok(checked(response)?.json()?)
    }

    fn create_post(&self, thread_id: i64, name: &str, content: &str) -> Result<Post, StoreError> {
        let payload = NewPost {
            name: name.to_string(),
            content: content.to_string(),
        };
        let response = self
            .client
            .post(self.url(&format!("/threads/{thread_id}/posts")))
            .json(&payload)
            .send()?;
        Ok(checked(response)?.json()?)
    }

    fn delete_expired_threads(&self) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.url("/rpc/delete_old_threads"))
            .send()?;
        checked(response)?;
        Ok(())
    }
}

/// Maps 4xx responses to `Rejected`, carrying the store's message when the
/// body is parseable, and everything else through `error_for_status`.
fn checked(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_client_error() {
        let message = response
            .json::<ErrorBody>()
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("store rejected the request ({status})"));
        return Err(StoreError::Rejected(message));
    }
    Ok(response.error_for_status()?)
}

fn sanitize_base_url(mut base: String) -> Result<Url> {
    if !base.starts_with("http://") && !base.starts_with("https://") {
        base = format!("http://{base}");
    }
    // Remove trailing slash for consistency
    while base.ends_with('/') {
        base.pop();
    }
    Url::parse(&base).context("invalid base URL")
}
