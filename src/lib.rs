// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Glasswing - Transparent Fetch Pass-Through Worker
//!
//! An in-process background worker that intercepts network requests made
//! within its scope and passes them straight through to the network.
//! No caching, no offline fallback, no header mutation: the requester
//! receives exactly what the network returns.
//!
//! ## Features
//!
//! - Explicit registration: an event-kind-to-handler table built once
//! - Two-state lifecycle: install fires exactly once, before any fetch
//! - Claim-or-decline interception with host default fetch
//! - Transparent forwarding: no cookie store, no injected headers
//! - Independent in-flight requests: concurrent dispatch, no shared state
//!
//! ## Example
//!
//! ```rust,no_run
//! use glasswing::{HandlerRegistry, InstallLogger, PassThrough, Request, Worker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = HandlerRegistry::new()
//!         .on_install(InstallLogger)
//!         .on_fetch(PassThrough::new()?);
//!
//!     let worker = Worker::new(registry)?;
//!     worker.install().await?;
//!
//!     let response = worker
//!         .dispatch_fetch(Request::get("https://example.com")?)
//!         .await?;
//!     println!("{}", response.status_code());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod forwarder;
pub mod http;
pub mod worker;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, Response};

// Worker host
pub use worker::{
    EventKind, FetchEvent, FetchHandler, FetchOutcome, HandlerRegistry, InstallEvent,
    InstallHandler, LifecyclePhase, Worker,
};

// Forwarding
pub use forwarder::{InstallLogger, PassThrough};

/// Glasswing version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
