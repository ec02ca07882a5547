//! Upstream data access for the gnomon engine: the source traits, the
//! HTTP client implementing them, wire envelopes, and a TTL-caching
//! decorator.

pub mod cache;
pub mod error;
pub mod http;
pub mod source;
pub mod wire;
