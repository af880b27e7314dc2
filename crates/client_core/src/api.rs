//! Injected HTTP capability and its reqwest-backed implementation.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Post, PostDraft},
    error::ClientError,
};

/// The public mock service every production build points at. Not
/// runtime-configurable; tests and the console binary may substitute a
/// different endpoint at construction time.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The three remote operations the client exercises.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET {base}/posts?_limit={limit}`
    async fn recent_posts(&self, limit: u32) -> Result<Vec<Post>, ClientError>;

    /// `POST {base}/posts` with a JSON body.
    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ClientError>;

    /// `DELETE {base}/posts/{post_id}`; the response body is ignored.
    async fn delete_post(&self, post_id: i64) -> Result<(), ClientError>;
}

pub struct HttpPostsApi {
    http: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpPostsApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn recent_posts(&self, limit: u32) -> Result<Vec<Post>, ClientError> {
        let response = self
            .http
            .get(format!("{}/posts", self.base_url))
            .query(&[("_limit", limit)])
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response)?;
        response.json().await.map_err(transport_error)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ClientError> {
        let response = self
            .http
            .post(format!("{}/posts", self.base_url))
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response)?;
        response.json().await.map_err(transport_error)
    }

    async fn delete_post(&self, post_id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/posts/{}", self.base_url, post_id))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response)?;
        Ok(())
    }
}

/// Non-2xx statuses become `RequestFailed` carrying the numeric status and
/// its reason phrase, so both survive into the rendered error block.
fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::request_failed(
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status"),
        ))
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::Parse(err.to_string())
    } else {
        ClientError::Network(err.to_string())
    }
}
