//! Concierge Domain Library
//!
//! Core domain types and message-routing logic for the hotel
//! guest-messaging concierge.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Guest, TaskRecord)
//!   - `value_objects/`: Immutable value types (Intent, Department)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (LLM, search agent,
//!     transcription)
//!   - guest directory and message delivery interfaces
//!
//! - **Routing** (`routing/`): The decision pipeline — intent
//!   classification, department dispatch, task assembly and the two-stage
//!   response synthesis that decides what the guest sees.
//!
//! # Usage
//!
//! ```rust,ignore
//! use concierge::domain::{Guest, TaskRecord};
//! use concierge::ports::{LlmProvider, SearchAgent};
//! use concierge::routing::Dispatcher;
//! ```

pub mod domain;
pub mod ports;
pub mod routing;

// Re-export commonly used types
pub use domain::{Department, DomainError, Guest, Intent, RoomAssignment, TaskRecord};
pub use ports::{
    ChatMessage, CompletionOptions, GuestDirectory, LlmProvider, MessageChannel, MessageRole,
    SearchAgent, TranscriptionService,
};
pub use routing::{
    classify, resolve_department, AckSynthesizer, Dispatcher, HoursTable, InfoResponder, Persona,
};
