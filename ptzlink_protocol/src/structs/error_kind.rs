/// Error codes carried by an error reply frame (`x0 6y ee ff`).
///
/// These describe why the *camera* rejected a command; they are data, not
/// [`Error`][crate::Error] values of this library.
#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ErrorKind {
    /// Command was malformed or not supported.
    Syntax = 0x02,
    /// The camera's command buffers are all in use.
    BufferFull = 0x03,
    /// A command was cancelled on this socket.
    Cancelled = 0x04,
    /// Cancel was requested for a socket with no command executing.
    NoSocket = 0x05,
    /// The command cannot run in the camera's current state.
    NotExecutable = 0x41,
}
