//! HTTP transport module
//!
//! Thin wrapper over `reqwest` that owns base-URL joining, bearer-token and
//! default-header injection, and the mapping of non-2xx responses into
//! typed errors. Every call is one-shot: a failure aborts the operation and
//! propagates to the caller. Retry, signing, and credential acquisition are
//! the transport collaborator's concern, not this crate's.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
