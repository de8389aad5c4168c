/// Picture effect value byte.
#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PictureEffectMode {
    Off = 0x00,
    BlackAndWhite = 0x04,
}
