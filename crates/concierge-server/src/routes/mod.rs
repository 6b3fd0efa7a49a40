//! HTTP Routes

pub mod health;
pub mod queue;
pub mod swagger;
pub mod webhook;
