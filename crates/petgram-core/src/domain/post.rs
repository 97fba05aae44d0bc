use serde::Serialize;

/// Where a post's image comes from.
///
/// Fetched posts carry a remote URL; locally captured posts carry the raw
/// image bytes. The tag removes any need for runtime type inspection by the
/// rendering layer.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub enum Media {
    Remote(String),
    Local(Vec<u8>),
}

impl std::fmt::Debug for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => f.debug_tuple("Remote").field(url).finish(),
            // Image bytes stay out of logs.
            Self::Local(bytes) => write!(f, "Local({} bytes)", bytes.len()),
        }
    }
}

/// A single feed entry.
///
/// Ids are unique within one feed snapshot, assigned monotonically by the
/// feed store or taken verbatim from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: u32,
    pub author: String,
    pub media: Media,
    pub caption: String,
}
