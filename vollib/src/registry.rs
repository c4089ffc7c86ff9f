mod actor;
mod messages;

use self::actor::Actor;
use self::messages::RegistryMessage;

use std::time::Instant;
use tokio::sync::{mpsc, oneshot};

/// The registry of currently-running modules and their start times.
///
/// This struct is actually an actor handle, the real work is done in the actor
/// spawned by `RunRegistry::spawn`. The actor-handle abstraction allows this
/// struct to be cloned freely into every job task and the status monitor,
/// without requiring an `Arc<Mutex>` or any other means of synchronization.
#[derive(Clone)]
pub struct RunRegistry {
    sender: mpsc::UnboundedSender<RegistryMessage>,
}

impl RunRegistry {
    /// Spawn a new, empty registry.
    pub fn spawn() -> Self {
        let (sender, inbox) = mpsc::unbounded_channel();
        Actor::spawn(inbox);
        Self { sender }
    }

    /// Record that `module` began executing at `started`. A duplicate module
    /// name overwrites the earlier entry's start time.
    pub fn record(&self, module: String, started: Instant) {
        let _ = self.sender.send(RegistryMessage::Record { module, started });
    }

    /// Drop the entry for `module`. No-op if it was never recorded.
    pub fn forget(&self, module: &str) {
        let _ = self.sender.send(RegistryMessage::Forget {
            module: module.to_string(),
        });
    }

    /// A point-in-time copy of every in-flight (module, start time) pair.
    /// Iteration order is unspecified.
    pub async fn snapshot(&self) -> Vec<(String, Instant)> {
        let (tx, rx) = oneshot::channel();
        let _ = self.sender.send(RegistryMessage::Snapshot { response: tx });
        rx.await.expect("RunRegistry exited")
    }
}
