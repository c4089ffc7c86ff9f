mod dispatcher;
pub mod errors;
mod executor;
pub mod joblist;
mod monitor;
mod registry;
#[cfg(test)]
mod test_helpers;
pub mod types;

pub use dispatcher::Dispatcher;
pub use monitor::spawn_status_monitor;
pub use registry::RunRegistry;
