// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Handler registration
//!
//! A registration table built once at initialization, mapping event kind
//! to handler. The table is immutable after construction and keeps no
//! mutable state between dispatches.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::event::{EventKind, FetchEvent, FetchOutcome, InstallEvent};
use crate::error::Result;

/// Handler for the one-time installation event
///
/// Installation has no failure path: the handler runs to completion and
/// the phase transition stands regardless of what it observed.
#[async_trait]
pub trait InstallHandler: Send + Sync {
    /// Called once when the worker is installed
    async fn on_install(&self, event: &InstallEvent);
}

/// Handler for intercepted fetch events
#[async_trait]
pub trait FetchHandler: Send + Sync {
    /// Called once per intercepted request
    ///
    /// Returning [`FetchOutcome::Unclaimed`] leaves the request to the
    /// host's default fetch. An error is a claimed failure and reaches
    /// the requester unchanged.
    async fn on_fetch(&self, event: &FetchEvent) -> Result<FetchOutcome>;
}

enum RegisteredHandler {
    Install(Arc<dyn InstallHandler>),
    Fetch(Arc<dyn FetchHandler>),
}

/// Registration table mapping event kind to handler
///
/// At most one handler per event kind; registering a second replaces the
/// first. Kinds with no registration fall back to the host's default
/// handling.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, RegisteredHandler>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the install handler
    pub fn on_install<H: InstallHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers
            .insert(EventKind::Install, RegisteredHandler::Install(Arc::new(handler)));
        self
    }

    /// Register the fetch handler
    pub fn on_fetch<H: FetchHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers
            .insert(EventKind::Fetch, RegisteredHandler::Fetch(Arc::new(handler)));
        self
    }

    /// Whether a handler is registered for the given kind
    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub(crate) fn install_handler(&self) -> Option<Arc<dyn InstallHandler>> {
        match self.handlers.get(&EventKind::Install) {
            Some(RegisteredHandler::Install(handler)) => Some(handler.clone()),
            _ => None,
        }
    }

    pub(crate) fn fetch_handler(&self) -> Option<Arc<dyn FetchHandler>> {
        match self.handlers.get(&EventKind::Fetch) {
            Some(RegisteredHandler::Fetch(handler)) => Some(handler.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopInstall;

    #[async_trait]
    impl InstallHandler for NoopInstall {
        async fn on_install(&self, _event: &InstallEvent) {}
    }

    struct Decline;

    #[async_trait]
    impl FetchHandler for Decline {
        async fn on_fetch(&self, _event: &FetchEvent) -> Result<FetchOutcome> {
            Ok(FetchOutcome::Unclaimed)
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = HandlerRegistry::new();
        assert!(!registry.has_handler(EventKind::Install));
        assert!(!registry.has_handler(EventKind::Fetch));
    }

    #[test]
    fn test_registration() {
        let registry = HandlerRegistry::new()
            .on_install(NoopInstall)
            .on_fetch(Decline);
        assert!(registry.has_handler(EventKind::Install));
        assert!(registry.has_handler(EventKind::Fetch));
        assert!(registry.install_handler().is_some());
        assert!(registry.fetch_handler().is_some());
    }

    #[test]
    fn test_kinds_do_not_alias() {
        let registry = HandlerRegistry::new().on_install(NoopInstall);
        assert!(registry.fetch_handler().is_none());
    }
}
