//! Query encoder implementations.

mod hash;
mod http;

pub use hash::HashEncoder;
pub use http::HttpEncoder;
