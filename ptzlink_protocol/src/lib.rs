#![doc = include_str!("../README.md")]

#[macro_use]
extern crate num_derive;

#[macro_use]
extern crate tracing;

mod error;
mod frame;
pub mod message;
pub mod structs;
mod util;

pub use crate::{
    error::Error,
    frame::{Frame, FrameBuffer, FRAME_TERMINATOR, MAX_PAYLOAD_LENGTH},
    message::{Message, MessageKind, MessageParameters},
};

/// Result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
