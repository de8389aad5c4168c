//! Typed message parameters.
//!
//! One [`MessageParameters`] variant per parameter *shape*. Kinds that share
//! a shape share a variant: every whole-byte valued command and reply uses
//! [`MessageParameters::Byte`], every 4-nibble packed value uses
//! [`MessageParameters::Position`], and so on. Which shape a given
//! [`MessageKind`][super::MessageKind] takes is fixed by the signature table;
//! encoding with the wrong variant is rejected with
//! [`Error::ParameterMismatch`][crate::Error::ParameterMismatch].

use crate::structs::{ErrorKind, MemoryMode, PanDirection, TiltDirection};

/// Pan and tilt position, as carried by the position inquiry response.
///
/// Positions are signed 16-bit values; the usable range is camera-specific
/// and not checked here.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanTiltPosition {
    pub pan: i16,
    pub tilt: i16,
}

/// Absolute pan/tilt move: target position plus per-axis speed.
///
/// ## Wire format
///
/// `01 06 02 VV WW 0Y 0Y 0Y 0Y 0Z 0Z 0Z 0Z`
///
/// * `VV`: pan speed, `0x01` (slow) to `0x18` (fast)
/// * `WW`: tilt speed, `0x01` to `0x14`
/// * `YYYY` / `ZZZZ`: nibble-packed pan / tilt position
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsolutePanTilt {
    pub pan_speed: u8,
    pub tilt_speed: u8,
    pub pan: i16,
    pub tilt: i16,
}

/// Continuous pan/tilt drive: a direction and speed per axis.
///
/// ## Wire format
///
/// `01 06 01 VV WW PP TT`, where `PP` and `TT` are direction bytes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanTiltDrive {
    /// Pan speed, `0x01` (slow) to `0x18` (fast).
    pub pan_speed: u8,
    /// Tilt speed, `0x01` (slow) to `0x14` (fast).
    pub tilt_speed: u8,
    pub pan: PanDirection,
    pub tilt: TiltDirection,
}

/// An error reply: which command socket failed, and why.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorReply {
    pub socket: u8,
    pub error: ErrorKind,
}

/// A memory (preset) operation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySlot {
    pub mode: MemoryMode,
    /// Preset slot number, `0..=127`.
    pub slot: u8,
}

/// Parameters attached to a [`Message`][super::Message].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageParameters {
    /// The message carries no parameters beyond its signature.
    None,
    PanTiltPosition(PanTiltPosition),
    AbsolutePanTilt(AbsolutePanTilt),
    PanTiltDrive(PanTiltDrive),
    /// A command socket number (acks, completions, cancel).
    Socket(u8),
    Error(ErrorReply),
    Memory(MemorySlot),
    /// A single 8-bit value: mode bytes, speeds, nibble-pair values,
    /// one-byte replies.
    Byte(u8),
    /// A 4-nibble packed signed 16-bit value: positions and the PQRS reply.
    Position(i16),
}
