//! Ports Layer
//!
//! Abstract interfaces for everything the routing core consumes but does
//! not own: generative model, search agent, voice transcription, guest
//! identity lookup and outbound message delivery. Infrastructure adapters
//! implement these in the server crate.

pub mod guest_directory;
pub mod message_channel;
pub mod services;

pub use guest_directory::GuestDirectory;
pub use message_channel::MessageChannel;
pub use services::{
    ChatMessage, CompletionOptions, LlmProvider, MessageRole, SearchAgent, TranscriptionService,
};
