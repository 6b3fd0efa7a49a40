//! Message Routing Pipeline
//!
//! The decision core: classify an inbound guest message, branch into the
//! task path (department dispatch, task assembly, generated
//! acknowledgment) or the informational path (static hours table, then
//! search-augmented generation), and return the final guest-facing text.
//!
//! Every piece here is stateless and safe to call from concurrent tasks;
//! the only side effects are logging and the generative-model/agent
//! invocations behind the ports.

pub mod ack;
pub mod classifier;
pub mod department;
pub mod dispatcher;
pub mod hours;
pub mod persona;
pub mod responder;

pub use ack::AckSynthesizer;
pub use classifier::classify;
pub use department::resolve_department;
pub use dispatcher::Dispatcher;
pub use hours::{HoursEntry, HoursTable};
pub use persona::Persona;
pub use responder::InfoResponder;
