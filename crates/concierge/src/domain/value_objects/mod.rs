//! Value Objects

pub mod department;
pub mod intent;

pub use department::Department;
pub use intent::Intent;
