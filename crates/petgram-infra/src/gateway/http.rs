//! HTTP posts gateway over the remote feed API.

use async_trait::async_trait;

use petgram_core::error::GatewayError;
use petgram_core::ports::{PostRecord, PostsGateway};

/// Posts gateway backed by `GET {base_url}/posts`.
pub struct HttpPostsGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostsGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl PostsGateway for HttpPostsGateway {
    async fn fetch_posts(&self) -> Result<Vec<PostRecord>, GatewayError> {
        let url = format!("{}/posts", self.base_url);
        tracing::debug!(%url, "fetching posts");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        response
            .json::<Vec<PostRecord>>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let gateway = HttpPostsGateway::new("http://127.0.0.1:8000/api/");
        assert_eq!(gateway.base_url, "http://127.0.0.1:8000/api");

        let gateway = HttpPostsGateway::new("http://127.0.0.1:8000/api");
        assert_eq!(gateway.base_url, "http://127.0.0.1:8000/api");
    }
}
