//! Posts gateway implementations.

mod http;

pub use http::HttpPostsGateway;
