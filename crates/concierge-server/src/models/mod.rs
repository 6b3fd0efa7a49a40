//! Wire Models

pub mod webhook;

pub use webhook::{
    Audio, Change, ChangeValue, Entry, Image, InboundMessage, Payload, StatusResponse, TextBody,
};
