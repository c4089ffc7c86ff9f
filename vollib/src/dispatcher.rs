use crate::executor;
use crate::registry::RunRegistry;
use crate::types::{BatchSpec, Module};

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// Runs every module of a batch, at most `limit` at a time.
pub struct Dispatcher {
    spec: Arc<BatchSpec>,
    registry: RunRegistry,
    permits: Arc<Semaphore>,
}

impl Dispatcher {
    pub fn new(spec: BatchSpec, limit: usize, registry: RunRegistry) -> Self {
        Self {
            spec: Arc::new(spec),
            registry,
            permits: Arc::new(Semaphore::new(limit)),
        }
    }

    /// Run every module to a terminal outcome and return once all have both
    /// started and terminated. Admission follows list order; completion order
    /// is unspecified. A failed module never stops its siblings.
    pub async fn run_all(&self, modules: Vec<Module>) {
        let mut jobs = Vec::with_capacity(modules.len());
        for module in modules {
            // acquire before spawning so admission respects list order
            let permit = Arc::clone(&self.permits)
                .acquire_owned()
                .await
                .expect("job semaphore closed");
            let spec = Arc::clone(&self.spec);
            let registry = self.registry.clone();
            jobs.push(tokio::spawn(async move {
                let _permit = permit;
                info!("running module: {}", module);
                match executor::run_module(&spec, &module, &registry).await {
                    Ok(elapsed) => {
                        info!(
                            "module {} completed in {:.2} seconds",
                            module,
                            elapsed.as_secs_f64()
                        );
                    }
                    Err(err) => {
                        error!("error running module {}: {}", module, err);
                    }
                }
            }));
        }
        join_all(jobs).await;
    }
}
