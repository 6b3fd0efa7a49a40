//! Domain Layer
//!
//! Pure business entities, value objects and errors. No I/O here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{Guest, RoomAssignment, TaskRecord};
pub use errors::DomainError;
pub use value_objects::{Department, Intent};
