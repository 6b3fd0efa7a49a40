//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports against external APIs.

pub mod directory;
pub mod openai;
pub mod search;
pub mod whatsapp;
pub mod whisper;

pub use directory::StaticGuestDirectory;
pub use openai::OpenAiProvider;
pub use search::GeminiSearchAgent;
pub use whatsapp::WhatsAppChannel;
pub use whisper::WhisperTranscriber;
