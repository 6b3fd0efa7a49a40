//! Domain Entities

pub mod guest;
pub mod task;

pub use guest::{Guest, RoomAssignment};
pub use task::TaskRecord;
