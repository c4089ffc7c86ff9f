use std::time::Instant;
use tokio::sync::oneshot;

pub enum RegistryMessage {
    Record {
        module: String,
        started: Instant,
    },
    Forget {
        module: String,
    },
    Snapshot {
        response: oneshot::Sender<Vec<(String, Instant)>>,
    },
}
