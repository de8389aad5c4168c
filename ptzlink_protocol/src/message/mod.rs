//! # VISCA messages
//!
//! A message is what a frame payload *means*: a command, an inquiry, or a
//! reply. Payloads are classified against an ordered table of
//! (signature, mask) byte patterns, and parameter fields are unpacked from
//! the payload bytes the signature leaves unconstrained.
//!
//! ## Wire conventions
//!
//! Commands sent to a camera open with `01`, inquiries with `09`. Replies
//! from a camera open with `4y` (ack), `5y` (completion and inquiry
//! responses) or `6y` (error), with the command socket in the low nibble.
//!
//! Inquiry responses come in a handful of shapes, named after the nibbles
//! that carry data:
//!
//! shape | payload | decoded as
//! ----- | ------- | ----------
//! one byte | `50 xx` | [`MessageKind::OneByteResponse`]
//! `P`      | `50 0p` | [`MessageKind::PResponse`]
//! `PQ`     | `50 0p 0q` | [`MessageKind::PqInqResponse`]
//! `PQRS`   | `50 0p 0q 0r 0s` | [`MessageKind::PqrsInqResponse`]
//!
//! `ZZZP`/`ZZPQ` shaped responses are `PQRS` with leading zero nibbles, and
//! decode as [`MessageKind::PqrsInqResponse`].
//!
//! Which response shape answers which inquiry is camera behaviour, not
//! protocol structure, so this layer reports the shape and leaves the
//! pairing to the application.

pub(crate) mod params;
pub(crate) mod table;

use crate::{Error, Frame, Result};

pub use self::params::{
    AbsolutePanTilt, ErrorReply, MemorySlot, MessageParameters, PanTiltDrive, PanTiltPosition,
};

/// Every message the signature table recognises.
///
/// Carries no data; parameters travel separately in [`MessageParameters`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    // Pan/tilt
    PanTiltPositionInq,
    PanTiltPositionInqResponse,
    PanTiltDrive,
    AbsolutePanTilt,
    PresetRecallSpeed,
    Home,
    Reset,

    // Zoom and focus
    ZoomStop,
    ZoomTeleStandard,
    ZoomWideStandard,
    ZoomTeleVariable,
    ZoomWideVariable,
    ZoomDirect,
    ZoomPositionInq,
    FocusAutomatic,
    FocusManual,
    FocusModeInq,
    FocusDirect,
    FocusValueInq,

    // Sockets and replies
    Ack,
    Completion,
    ErrorReply,
    Cancel,
    OneByteResponse,
    PResponse,
    PqInqResponse,
    PqrsInqResponse,

    // Addressing and housekeeping
    CameraNumber,
    Memory,
    Clear,

    // Camera image commands and inquiries
    BrightDirect,
    BrightPosInq,
    ColorTempDirect,
    ColorTempInq,
    FlickerMode,
    FlickerModeInq,
    GainLimit,
    GainLimitInq,
    WhiteBalanceMode,
    WhiteBalanceModeInq,
    AutoExposureMode,
    AutoExposureModeInq,
    ApertureValue,
    ApertureValueInq,
    RedGain,
    RedGainInq,
    BlueGain,
    BlueGainInq,
    ColorGain,
    ColorGainInq,
    ColorHue,
    ColorHueInq,
    LrReverse,
    LrReverseInq,
    PictureEffect,
    PictureEffectInq,
    PictureFlip,
    PictureFlipInq,
    Brightness,
    BrightnessInq,
    Contrast,
    ContrastInq,
    AwbSens,
    AwbSensInq,
}

/// A classified frame payload: the message kind plus its unpacked
/// parameters.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub kind: MessageKind,
    pub parameters: MessageParameters,
}

impl Message {
    pub fn new(kind: MessageKind, parameters: MessageParameters) -> Self {
        Self { kind, parameters }
    }

    /// Classifies a frame's payload.
    ///
    /// The payload is compared against each signature table entry in order,
    /// and the first match wins. Returns [`None`] for a structurally valid
    /// frame that matches no signature (or whose parameter bytes hold values
    /// this library cannot represent, such as an undefined direction byte) —
    /// that is "a message we don't know", never stream corruption.
    pub fn decode(frame: &Frame) -> Option<Self> {
        let definition = table::lookup_payload(&frame.payload)?;

        let Some(parameters) = definition.codec.decode(&frame.payload) else {
            warn!(
                "unrepresentable parameters for {:?} in {frame:?}",
                definition.kind
            );
            return None;
        };

        Some(Self {
            kind: definition.kind,
            parameters,
        })
    }

    /// Renders a message to frame payload bytes.
    ///
    /// The payload starts as the table entry's signature; parameter nibbles
    /// are OR-ed into the bytes the mask leaves open, so structural bits are
    /// never disturbed.
    ///
    /// Returns [`Error::UnknownMessageKind`] if `kind` has no table entry,
    /// and [`Error::ParameterMismatch`] if `parameters` is the wrong variant
    /// for `kind`. Neither failure produces any output.
    pub fn encode_payload(kind: MessageKind, parameters: &MessageParameters) -> Result<Vec<u8>> {
        let definition = table::lookup_kind(kind).ok_or(Error::UnknownMessageKind(kind))?;

        let mut payload = definition.signature.to_vec();
        definition.codec.encode(kind, parameters, &mut payload)?;
        Ok(payload)
    }

    /// Renders this message to payload bytes. See [`encode_payload`][Self::encode_payload].
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        Self::encode_payload(self.kind, &self.parameters)
    }

    /// Renders this message to complete wire bytes: address header, payload,
    /// terminator.
    pub fn to_wire(&self, sender: u8, receiver: u8) -> Result<Vec<u8>> {
        Frame::new(sender, receiver, self.to_payload()?).to_wire()
    }
}
