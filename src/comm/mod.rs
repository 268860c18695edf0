//! Message channel between the host page and the preview iframe
//!
//! Messages are `{ type, payload }` objects. Anything else is dropped
//! without a trace, matching how browsers deliver unrelated `message`
//! events to every listener. Origins are not checked.

mod types;

pub use types::*;

use crate::error::{PlaygroundError, Result};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::UnboundedSender;

/// Destination window of `emit`
pub trait MessageTarget: Send + Sync {
    fn post_message(&self, message: Value) -> Result<()>;
}

impl MessageTarget for UnboundedSender<Value> {
    fn post_message(&self, message: Value) -> Result<()> {
        self.send(message)
            .map_err(|_| PlaygroundError::Other("message target is closed".to_string()))
    }
}

/// Handle returned by `on`/`once`, used to remove the listener again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Arc<dyn Fn(&ChannelEvent) + Send + Sync>;

struct Listener {
    id: ListenerId,
    once: bool,
    callback: Callback,
}

/// Typed listener registry over raw window messages
#[derive(Default)]
pub struct IframeChannel {
    listeners: Mutex<HashMap<ChannelEventKind, Vec<Listener>>>,
    next_id: AtomicU64,
}

impl IframeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(
        &self,
        kind: ChannelEventKind,
        once: bool,
        callback: impl Fn(&ChannelEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().entry(kind).or_default().push(Listener {
            id,
            once,
            callback: Arc::new(callback),
        });
        id
    }

    pub fn on(
        &self,
        kind: ChannelEventKind,
        callback: impl Fn(&ChannelEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.register(kind, false, callback)
    }

    /// Listener removed right before its first invocation
    pub fn once(
        &self,
        kind: ChannelEventKind,
        callback: impl Fn(&ChannelEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.register(kind, true, callback)
    }

    /// Remove a listener; unknown ids are ignored
    pub fn off(&self, kind: ChannelEventKind, id: ListenerId) {
        if let Some(listeners) = self.listeners.lock().get_mut(&kind) {
            listeners.retain(|l| l.id != id);
        }
    }

    pub fn listener_count(&self, kind: ChannelEventKind) -> usize {
        self.listeners.lock().get(&kind).map_or(0, Vec::len)
    }

    /// Post an event to another window
    pub fn emit(&self, event: &ChannelEvent, target: &dyn MessageTarget) -> Result<()> {
        let message = serde_json::to_value(event.to_message())?;
        target.post_message(message)
    }

    /// Entry point for incoming window messages. Returns whether the message
    /// was dispatched as a channel event.
    pub fn handle_message(&self, data: &Value) -> bool {
        let Some(message) = MessageData::from_value(data) else {
            return false;
        };
        let Some(event) = ChannelEvent::decode(&message) else {
            return false;
        };

        tracing::debug!("Channel event: {}", message.kind);

        let callbacks: Vec<Callback> = {
            let mut listeners = self.listeners.lock();
            let Some(entries) = listeners.get_mut(&event.kind()) else {
                return true;
            };
            let callbacks = entries.iter().map(|l| l.callback.clone()).collect();
            entries.retain(|l| !l.once);
            callbacks
        };

        for callback in callbacks {
            callback(&event);
        }
        true
    }
}
