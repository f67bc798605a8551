// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the Glasswing worker
//!
//! Request/response descriptors and a transparent client. The client
//! forwards a descriptor exactly as given: no cookie store, no default
//! headers, no user-agent of its own.

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use request::Request;
pub use response::Response;

/// Common HTTP headers
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
    pub const CONTENT_LENGTH: &str = "content-length";
    pub const LOCATION: &str = "location";
    pub const HOST: &str = "host";
}
