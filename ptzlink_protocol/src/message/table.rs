//! The message signature table.
//!
//! Each entry pairs a byte pattern with a bitmask marking which bits of each
//! signature byte are structural. A payload matches an entry when
//! `payload & mask == signature` over the signature length (trailing payload
//! bytes are ignored; payloads shorter than the signature never match).
//!
//! Entries are tried **in table order and the first match wins**, so the
//! ordering below is part of the protocol contract, not a detail:
//!
//! * the 9-byte pan/tilt position response must precede the PQRS, PQ, P,
//!   one-byte and completion reply entries, each of which would also match
//!   it under their shorter signatures;
//! * the 7-byte pan/tilt drive must precede the 4-byte preset recall speed,
//!   which shares its `01 06 01` prefix;
//! * the `P` reply (`50 0p`) must precede the whole-byte reply (`50 xx`).
//!
//! The `sanity` test checks the mechanical invariants.

use super::params::*;
use crate::{
    structs::{ErrorKind, MemoryMode, PanDirection, TiltDirection},
    util, Error, MessageKind, Result,
};
use num_traits::FromPrimitive;

/// How an entry's parameter bytes are packed into its payload.
///
/// Dispatch is by this enum rather than per-entry function pointers; each
/// variant is a pure transform between payload bytes and a
/// [`MessageParameters`] variant. Offsets are relative to the start of the
/// payload and always fall within the signature region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamCodec {
    /// The signature is the whole message.
    NoParams,
    /// Command socket in the low nibble of byte 0.
    Socket,
    /// Socket nibble at byte 0, error code byte at 1.
    ErrorStatus,
    /// Nibble-packed pan at bytes 1..5, tilt at 5..9.
    PanTiltPosition,
    /// Speeds at bytes 3 and 4, nibble-packed positions at 5..9 and 9..13.
    AbsolutePanTilt,
    /// Speeds at bytes 3 and 4, direction bytes at 5 and 6.
    PanTiltDrive,
    /// Mode byte at 3, slot byte at 4.
    Memory,
    /// A whole byte at the given offset.
    Byte(usize),
    /// The low nibble of the byte at the given offset.
    Nibble(usize),
    /// A `u8` split across the low nibbles of two bytes.
    NibblePair(usize),
    /// An `i16` split across the low nibbles of four bytes.
    Position(usize),
}

impl ParamCodec {
    /// Unpacks parameters from a payload that matched this entry.
    ///
    /// The payload is at least `required_len` bytes (guaranteed by signature
    /// matching). Returns [`None`] when a parameter byte holds a value with
    /// no typed representation, such as an undefined direction or error
    /// code.
    pub fn decode(&self, payload: &[u8]) -> Option<MessageParameters> {
        Some(match *self {
            Self::NoParams => MessageParameters::None,
            Self::Socket => MessageParameters::Socket(payload[0] & 0xf),
            Self::ErrorStatus => MessageParameters::Error(ErrorReply {
                socket: payload[0] & 0xf,
                error: ErrorKind::from_u8(payload[1])?,
            }),
            Self::PanTiltPosition => MessageParameters::PanTiltPosition(PanTiltPosition {
                pan: util::read_i16_nibbles(&payload[1..5]),
                tilt: util::read_i16_nibbles(&payload[5..9]),
            }),
            Self::AbsolutePanTilt => MessageParameters::AbsolutePanTilt(AbsolutePanTilt {
                pan_speed: payload[3],
                tilt_speed: payload[4],
                pan: util::read_i16_nibbles(&payload[5..9]),
                tilt: util::read_i16_nibbles(&payload[9..13]),
            }),
            Self::PanTiltDrive => MessageParameters::PanTiltDrive(PanTiltDrive {
                pan_speed: payload[3],
                tilt_speed: payload[4],
                pan: PanDirection::from_u8(payload[5])?,
                tilt: TiltDirection::from_u8(payload[6])?,
            }),
            Self::Memory => MessageParameters::Memory(MemorySlot {
                mode: MemoryMode::from_u8(payload[3])?,
                slot: payload[4],
            }),
            Self::Byte(i) => MessageParameters::Byte(payload[i]),
            Self::Nibble(i) => MessageParameters::Byte(payload[i] & 0xf),
            Self::NibblePair(i) => MessageParameters::Byte(util::read_u8_nibbles(&payload[i..])),
            Self::Position(i) => {
                MessageParameters::Position(util::read_i16_nibbles(&payload[i..]))
            }
        })
    }

    /// Packs parameters into a payload pre-initialised with the entry's
    /// signature bytes.
    ///
    /// Variable nibbles are OR-ed in under the mask; whole-byte fields land
    /// on bytes the mask leaves fully open. Signature bits are never
    /// overwritten.
    pub fn encode(
        &self,
        kind: MessageKind,
        parameters: &MessageParameters,
        payload: &mut [u8],
    ) -> Result {
        match (*self, parameters) {
            (Self::NoParams, MessageParameters::None) => {}
            (Self::Socket, MessageParameters::Socket(socket)) => {
                payload[0] |= socket & 0xf;
            }
            (Self::ErrorStatus, MessageParameters::Error(e)) => {
                payload[0] |= e.socket & 0xf;
                payload[1] = e.error as u8;
            }
            (Self::PanTiltPosition, MessageParameters::PanTiltPosition(p)) => {
                util::write_i16_nibbles(p.pan, &mut payload[1..5]);
                util::write_i16_nibbles(p.tilt, &mut payload[5..9]);
            }
            (Self::AbsolutePanTilt, MessageParameters::AbsolutePanTilt(p)) => {
                payload[3] = p.pan_speed;
                payload[4] = p.tilt_speed;
                util::write_i16_nibbles(p.pan, &mut payload[5..9]);
                util::write_i16_nibbles(p.tilt, &mut payload[9..13]);
            }
            (Self::PanTiltDrive, MessageParameters::PanTiltDrive(p)) => {
                payload[3] = p.pan_speed;
                payload[4] = p.tilt_speed;
                payload[5] = p.pan as u8;
                payload[6] = p.tilt as u8;
            }
            (Self::Memory, MessageParameters::Memory(m)) => {
                payload[3] = m.mode as u8;
                payload[4] = m.slot;
            }
            (Self::Byte(i), MessageParameters::Byte(v)) => {
                payload[i] = *v;
            }
            (Self::Nibble(i), MessageParameters::Byte(v)) => {
                payload[i] |= v & 0xf;
            }
            (Self::NibblePair(i), MessageParameters::Byte(v)) => {
                util::write_u8_nibbles(*v, &mut payload[i..]);
            }
            (Self::Position(i), MessageParameters::Position(v)) => {
                util::write_i16_nibbles(*v, &mut payload[i..]);
            }
            _ => return Err(Error::ParameterMismatch(kind)),
        }
        Ok(())
    }

    /// Shortest payload this codec can unpack. Every table entry's signature
    /// must be at least this long.
    fn required_len(&self) -> usize {
        match *self {
            Self::NoParams => 0,
            Self::Socket => 1,
            Self::ErrorStatus => 2,
            Self::PanTiltPosition => 9,
            Self::AbsolutePanTilt => 13,
            Self::PanTiltDrive => 7,
            Self::Memory => 5,
            Self::Byte(i) | Self::Nibble(i) => i + 1,
            Self::NibblePair(i) => i + 2,
            Self::Position(i) => i + 4,
        }
    }
}

/// One row of the signature table.
pub(crate) struct MessageDefinition {
    pub signature: &'static [u8],
    pub mask: &'static [u8],
    pub kind: MessageKind,
    pub codec: ParamCodec,
}

/// Finds the first entry whose masked signature matches `payload`.
pub(crate) fn lookup_payload(payload: &[u8]) -> Option<&'static MessageDefinition> {
    DEFINITIONS
        .iter()
        .find(|d| util::masked_eq(payload, d.signature, d.mask))
}

/// Finds the encode entry for `kind`.
pub(crate) fn lookup_kind(kind: MessageKind) -> Option<&'static MessageDefinition> {
    DEFINITIONS.iter().find(|d| d.kind == kind)
}

macro_rules! definition {
    ($kind:ident, [$($sig:literal)*], [$($mask:literal)*]) => {
        definition!($kind, [$($sig)*], [$($mask)*], NoParams)
    };
    ($kind:ident, [$($sig:literal)*], [$($mask:literal)*],
     $codec:ident $(( $($arg:expr),* ))?) => {
        MessageDefinition {
            signature: &[$($sig),*],
            mask: &[$($mask),*],
            kind: MessageKind::$kind,
            codec: ParamCodec::$codec $(( $($arg),* ))?,
        }
    };
}

/// The table itself. Built once into the binary; never mutated.
pub(crate) static DEFINITIONS: &[MessageDefinition] = &[
    definition!(PanTiltPositionInq, [0x09 0x06 0x12], [0xff 0xff 0xff]),
    definition!(
        PanTiltPositionInqResponse,
        [0x50 0x00 0x00 0x00 0x00 0x00 0x00 0x00 0x00],
        [0xff 0xf0 0xf0 0xf0 0xf0 0xf0 0xf0 0xf0 0xf0],
        PanTiltPosition
    ),
    definition!(ZoomPositionInq, [0x09 0x04 0x47], [0xff 0xff 0xff]),
    // Reply family. Longest first: every shorter `50` signature also
    // matches a longer reply's opening bytes.
    definition!(
        PqrsInqResponse,
        [0x50 0x00 0x00 0x00 0x00],
        [0xff 0xf0 0xf0 0xf0 0xf0],
        Position(1)
    ),
    definition!(PqInqResponse, [0x50 0x00 0x00], [0xff 0xf0 0xf0], NibblePair(1)),
    definition!(PResponse, [0x50 0x00], [0xff 0xf0], Nibble(1)),
    definition!(OneByteResponse, [0x50 0x00], [0xff 0x00], Byte(1)),
    definition!(Ack, [0x40], [0xf0], Socket),
    definition!(Completion, [0x50], [0xf0], Socket),
    definition!(ErrorReply, [0x60 0x00], [0xf0 0x00], ErrorStatus),
    definition!(Cancel, [0x20], [0xf0], Socket),
    // Zoom and focus.
    definition!(ZoomStop, [0x01 0x04 0x07 0x00], [0xff 0xff 0xff 0xff]),
    definition!(ZoomTeleStandard, [0x01 0x04 0x07 0x02], [0xff 0xff 0xff 0xff]),
    definition!(ZoomWideStandard, [0x01 0x04 0x07 0x03], [0xff 0xff 0xff 0xff]),
    definition!(ZoomTeleVariable, [0x01 0x04 0x07 0x20], [0xff 0xff 0xff 0xf0], Nibble(3)),
    definition!(ZoomWideVariable, [0x01 0x04 0x07 0x30], [0xff 0xff 0xff 0xf0], Nibble(3)),
    definition!(
        ZoomDirect,
        [0x01 0x04 0x47 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xf0 0xf0 0xf0 0xf0],
        Position(3)
    ),
    definition!(FocusAutomatic, [0x01 0x04 0x38 0x02], [0xff 0xff 0xff 0xff]),
    definition!(FocusManual, [0x01 0x04 0x38 0x03], [0xff 0xff 0xff 0xff]),
    definition!(
        FocusDirect,
        [0x01 0x04 0x48 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xf0 0xf0 0xf0 0xf0],
        Position(3)
    ),
    // Pan/tilt drive before preset recall speed: shared 01 06 01 prefix.
    definition!(
        PanTiltDrive,
        [0x01 0x06 0x01 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0x00 0x00 0x00 0x00],
        PanTiltDrive
    ),
    definition!(PresetRecallSpeed, [0x01 0x06 0x01 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    definition!(
        AbsolutePanTilt,
        [0x01 0x06 0x02 0x00 0x00 0x00 0x00 0x00 0x00 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0x00 0x00 0xf0 0xf0 0xf0 0xf0 0xf0 0xf0 0xf0 0xf0],
        AbsolutePanTilt
    ),
    definition!(Home, [0x01 0x06 0x04], [0xff 0xff 0xff]),
    definition!(Reset, [0x01 0x06 0x05], [0xff 0xff 0xff]),
    // Addressing and housekeeping.
    definition!(
        Memory,
        [0x01 0x04 0x3f 0x00 0x00],
        [0xff 0xff 0xff 0x00 0x00],
        Memory
    ),
    definition!(Clear, [0x01 0x00 0x01], [0xff 0xff 0xff]),
    definition!(CameraNumber, [0x30 0x00], [0xff 0x00], Byte(1)),
    // Camera image commands.
    definition!(
        BrightDirect,
        [0x01 0x04 0x4d 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xf0 0xf0],
        NibblePair(5)
    ),
    definition!(
        ColorTempDirect,
        [0x01 0x04 0x20 0x00 0x00],
        [0xff 0xff 0xff 0xf0 0xf0],
        NibblePair(3)
    ),
    definition!(FlickerMode, [0x01 0x04 0x23 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    definition!(GainLimit, [0x01 0x04 0x2c 0x00], [0xff 0xff 0xff 0xf0], Nibble(3)),
    definition!(WhiteBalanceMode, [0x01 0x04 0x35 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    definition!(AutoExposureMode, [0x01 0x04 0x39 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    definition!(
        ApertureValue,
        [0x01 0x04 0x42 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xf0 0xf0],
        NibblePair(5)
    ),
    definition!(
        RedGain,
        [0x01 0x04 0x43 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xf0 0xf0],
        NibblePair(5)
    ),
    definition!(
        BlueGain,
        [0x01 0x04 0x44 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xf0 0xf0],
        NibblePair(5)
    ),
    definition!(
        ColorGain,
        [0x01 0x04 0x49 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xff 0xf0],
        Nibble(6)
    ),
    definition!(
        ColorHue,
        [0x01 0x04 0x4f 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xff 0xf0],
        Nibble(6)
    ),
    definition!(LrReverse, [0x01 0x04 0x61 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    definition!(PictureEffect, [0x01 0x04 0x63 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    definition!(PictureFlip, [0x01 0x04 0x66 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    definition!(
        Brightness,
        [0x01 0x04 0xa1 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xf0 0xf0],
        NibblePair(5)
    ),
    definition!(
        Contrast,
        [0x01 0x04 0xa2 0x00 0x00 0x00 0x00],
        [0xff 0xff 0xff 0xff 0xff 0xf0 0xf0],
        NibblePair(5)
    ),
    definition!(AwbSens, [0x01 0x04 0xa9 0x00], [0xff 0xff 0xff 0x00], Byte(3)),
    // Camera image inquiries: all exact 3-byte signatures.
    definition!(FocusModeInq, [0x09 0x04 0x38], [0xff 0xff 0xff]),
    definition!(FocusValueInq, [0x09 0x04 0x48], [0xff 0xff 0xff]),
    definition!(BrightPosInq, [0x09 0x04 0x4d], [0xff 0xff 0xff]),
    definition!(ColorTempInq, [0x09 0x04 0x20], [0xff 0xff 0xff]),
    definition!(FlickerModeInq, [0x09 0x04 0x55], [0xff 0xff 0xff]),
    definition!(GainLimitInq, [0x09 0x04 0x2c], [0xff 0xff 0xff]),
    definition!(WhiteBalanceModeInq, [0x09 0x04 0x35], [0xff 0xff 0xff]),
    definition!(AutoExposureModeInq, [0x09 0x04 0x39], [0xff 0xff 0xff]),
    definition!(ApertureValueInq, [0x09 0x04 0x42], [0xff 0xff 0xff]),
    definition!(RedGainInq, [0x09 0x04 0x43], [0xff 0xff 0xff]),
    definition!(BlueGainInq, [0x09 0x04 0x44], [0xff 0xff 0xff]),
    definition!(ColorGainInq, [0x09 0x04 0x49], [0xff 0xff 0xff]),
    definition!(ColorHueInq, [0x09 0x04 0x4f], [0xff 0xff 0xff]),
    definition!(LrReverseInq, [0x09 0x04 0x61], [0xff 0xff 0xff]),
    definition!(PictureEffectInq, [0x09 0x04 0x63], [0xff 0xff 0xff]),
    definition!(PictureFlipInq, [0x09 0x04 0x66], [0xff 0xff 0xff]),
    definition!(BrightnessInq, [0x09 0x04 0xa1], [0xff 0xff 0xff]),
    definition!(ContrastInq, [0x09 0x04 0xa2], [0xff 0xff 0xff]),
    definition!(AwbSensInq, [0x09 0x04 0xa9], [0xff 0xff 0xff]),
];
