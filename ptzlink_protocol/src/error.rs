use crate::message::MessageKind;
use thiserror::Error;

/// Error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A frame terminator arrived with no header byte before it.
    ///
    /// The stream is corrupt; the caller should resynchronise (for example
    /// with [`FrameBuffer::resync`][crate::FrameBuffer::resync]).
    #[error("empty frame: terminator with no header byte")]
    EmptyFrame,

    /// A frame's payload exceeds [`MAX_PAYLOAD_LENGTH`][crate::MAX_PAYLOAD_LENGTH].
    ///
    /// The stream is corrupt; the caller should resynchronise.
    #[error("frame payload of {0} bytes exceeds the maximum")]
    PayloadTooLong(usize),

    /// The requested message kind has no encode entry in the signature table.
    #[error("no encoder for message kind {0:?}")]
    UnknownMessageKind(MessageKind),

    /// The supplied parameters variant does not fit the requested message
    /// kind.
    #[error("parameters do not match message kind {0:?}")]
    ParameterMismatch(MessageKind),

    /// A parameter value cannot be represented on the wire (for example, a
    /// device address above 7).
    #[error("parameter out of valid range")]
    ParameterOutOfRange,
}
