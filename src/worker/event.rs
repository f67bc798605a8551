// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Worker event types
//!
//! Two signals reach a worker: an installation signal with no payload,
//! and a fetch interception signal carrying the intercepted request.
//! Events are transient, owned by a single dispatch.

use crate::http::{Request, Response};

/// Event kinds a handler can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// One-time installation signal
    Install,
    /// Intercepted network request
    Fetch,
}

/// Installation lifecycle event
///
/// A phase-transition signal only; it carries no request payload.
#[derive(Debug, Clone)]
pub struct InstallEvent {
    /// Host-assigned event id, for log correlation
    pub id: u64,
}

impl InstallEvent {
    pub(crate) fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Intercepted fetch event
///
/// The request descriptor is opaque to the host: it is handed to the
/// handler unread and, for a pass-through claim, goes onto the wire
/// as it stands.
#[derive(Debug, Clone)]
pub struct FetchEvent {
    /// Host-assigned event id
    pub id: u64,
    /// The intercepted request
    pub request: Request,
}

impl FetchEvent {
    pub(crate) fn new(id: u64, request: Request) -> Self {
        Self { id, request }
    }

    /// The intercepted request descriptor
    pub fn request(&self) -> &Request {
        &self.request
    }
}

/// Resolution of an interception claim
#[derive(Debug)]
pub enum FetchOutcome {
    /// The handler declined the claim; the host performs its default fetch
    Unclaimed,
    /// The handler claimed the event and produced this response
    Response(Response),
}

impl FetchOutcome {
    /// Whether the handler claimed the event
    pub fn is_claimed(&self) -> bool {
        matches!(self, FetchOutcome::Response(_))
    }
}
