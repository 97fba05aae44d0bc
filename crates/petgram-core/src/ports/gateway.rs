use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Wire record returned by the remote posts endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: u32,
    pub author: String,
    pub image_url: String,
    pub caption: String,
}

/// Remote posts source.
#[async_trait]
pub trait PostsGateway: Send + Sync {
    /// Fetch the current feed in server order.
    ///
    /// Any failure (network, malformed response) is opaque to the feed
    /// store: it does not distinguish between error kinds.
    async fn fetch_posts(&self) -> Result<Vec<PostRecord>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_camel_case_fields() {
        let json = r#"{"id":7,"author":"luna","imageUrl":"https://example.com/7.jpg","caption":"hi"}"#;
        let record: PostRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.author, "luna");
        assert_eq!(record.image_url, "https://example.com/7.jpg");
        assert_eq!(record.caption, "hi");
    }
}
