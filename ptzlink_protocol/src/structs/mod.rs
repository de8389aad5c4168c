//! Shared wire enumerations.
//!
//! Byte values used inside message payloads. These are the protocol's own
//! vocabulary, not any particular camera's: this crate never checks whether a
//! camera supports a given mode.
mod error_kind;
mod focus_mode;
mod memory_mode;
mod on_off;
mod pan_tilt;
mod picture_effect;

pub use self::{
    error_kind::ErrorKind,
    focus_mode::FocusMode,
    memory_mode::MemoryMode,
    on_off::OnOff,
    pan_tilt::{PanDirection, TiltDirection},
    picture_effect::PictureEffectMode,
};
