//! Diagnostic hook bus.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use troupe_protocols::error::HookError;
use troupe_protocols::hooks::{HookEmitter, HookHandler};

/// Dispatches emitted events to subscribed handlers in subscription order.
///
/// The first handler error aborts the dispatch and surfaces to the emitter's
/// caller.
pub struct HookBus {
    handlers: RwLock<Vec<Arc<dyn HookHandler>>>,
}

impl HookBus {
    /// Create a new hook bus with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Subscribe a handler to all events.
    pub fn subscribe(&self, handler: Arc<dyn HookHandler>) {
        self.handlers.write().push(handler);
    }

    /// Number of subscribed handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl Default for HookBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HookEmitter for HookBus {
    async fn emit(&self, event: &str, payload: serde_json::Value) -> Result<(), HookError> {
        // Snapshot under the lock so handlers run without holding it.
        let handlers: Vec<_> = self.handlers.read().clone();
        trace!(event, handlers = handlers.len(), "dispatching hook event");
        for handler in handlers {
            handler.handle(event, &payload).await?;
        }
        Ok(())
    }
}
