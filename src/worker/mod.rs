// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Worker host: events, lifecycle, registration, dispatch
//!
//! Delivers the one-time install event and per-request fetch events to
//! registered handlers, and resolves each interception claim.

mod event;
mod host;
mod lifecycle;
mod registry;

pub use event::{EventKind, FetchEvent, FetchOutcome, InstallEvent};
pub use host::Worker;
pub use lifecycle::LifecyclePhase;
pub use registry::{FetchHandler, HandlerRegistry, InstallHandler};
