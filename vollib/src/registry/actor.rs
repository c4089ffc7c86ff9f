use super::messages::RegistryMessage;

use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::mpsc;

pub struct Actor {
    inbox: mpsc::UnboundedReceiver<RegistryMessage>,
    running: HashMap<String, Instant>,
}

impl Actor {
    pub fn spawn(inbox: mpsc::UnboundedReceiver<RegistryMessage>) {
        let actor = Self {
            inbox,
            running: HashMap::new(),
        };
        tokio::spawn(async move { actor.run().await });
    }

    // Messages are applied one at a time, so a snapshot can never observe a
    // half-applied record or forget.
    async fn run(mut self) {
        use RegistryMessage::*;
        while let Some(msg) = self.inbox.recv().await {
            match msg {
                Record { module, started } => {
                    self.running.insert(module, started);
                }
                Forget { module } => {
                    self.running.remove(&module);
                }
                Snapshot { response } => {
                    let entries = self
                        .running
                        .iter()
                        .map(|(module, started)| (module.clone(), *started))
                        .collect();
                    let _ = response.send(entries);
                }
            }
        }
    }
}
