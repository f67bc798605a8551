// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Worker host
//!
//! The in-process stand-in for a platform's event dispatch: delivers the
//! install event exactly once, then hands each intercepted request to the
//! registered fetch handler and resolves its claim. Dispatches are
//! independent futures; nothing is shared between in-flight requests
//! beyond the immutable registry and the client's connection pool.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::event::{FetchEvent, FetchOutcome, InstallEvent};
use super::lifecycle::LifecyclePhase;
use super::registry::HandlerRegistry;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, Request, Response};

/// Worker host owning the registration table and the forwarding client
pub struct Worker {
    registry: HandlerRegistry,
    client: HttpClient,
    phase: RwLock<LifecyclePhase>,
    event_counter: AtomicU64,
}

impl Worker {
    /// Create a worker with a default transparent client
    pub fn new(registry: HandlerRegistry) -> Result<Self> {
        Ok(Self::with_client(registry, HttpClient::new()?))
    }

    /// Create a worker with a custom client configuration
    pub fn with_config(registry: HandlerRegistry, config: HttpClientConfig) -> Result<Self> {
        Ok(Self::with_client(registry, HttpClient::with_config(config)?))
    }

    /// Create a worker around an existing client
    pub fn with_client(registry: HandlerRegistry, client: HttpClient) -> Self {
        Self {
            registry,
            client,
            phase: RwLock::new(LifecyclePhase::Uninstalled),
            event_counter: AtomicU64::new(0),
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> LifecyclePhase {
        *self.phase.read()
    }

    /// Whether the worker has been installed
    pub fn is_installed(&self) -> bool {
        self.phase().can_fetch()
    }

    /// Deliver the installation event
    ///
    /// Fires exactly once per worker; a second call is a lifecycle error.
    /// Nothing is persisted and no blocking work is scheduled.
    pub async fn install(&self) -> Result<()> {
        {
            let mut phase = self.phase.write();
            if !phase.is_uninstalled() {
                return Err(Error::lifecycle("worker is already installed"));
            }
            *phase = LifecyclePhase::Installed;
        }

        if let Some(handler) = self.registry.install_handler() {
            let event = InstallEvent::new(self.next_event_id());
            handler.on_install(&event).await;
        }

        Ok(())
    }

    /// Dispatch an intercepted request and resolve its claim
    ///
    /// A claimed response or failure returns as-is. An unclaimed request
    /// falls through to the host's default fetch, so it still reaches the
    /// network exactly once.
    pub async fn dispatch_fetch(&self, request: Request) -> Result<Response> {
        if !self.phase().can_fetch() {
            return Err(Error::lifecycle("fetch dispatched before install"));
        }

        let event = FetchEvent::new(self.next_event_id(), request);

        if let Some(handler) = self.registry.fetch_handler() {
            match handler.on_fetch(&event).await? {
                FetchOutcome::Response(response) => return Ok(response),
                FetchOutcome::Unclaimed => {}
            }
        }

        self.client.execute(event.request).await
    }

    /// Dispatch several independent requests concurrently
    ///
    /// Completion order follows the network. No ordering is guaranteed
    /// across requests and none share mutable state.
    pub async fn dispatch_all(&self, requests: Vec<Request>) -> Vec<Result<Response>> {
        let futures: Vec<_> = requests
            .into_iter()
            .map(|r| self.dispatch_fetch(r))
            .collect();
        futures::future::join_all(futures).await
    }

    /// Forwarding client used for default fetches
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    fn next_event_id(&self) -> u64 {
        self.event_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}
