//! Server Services

pub mod queue;

pub use queue::{GuestWorkQueue, QueueStats, RoutingJob};
