/// Focus mode byte, as reported by the focus mode inquiry.
///
/// Setting the mode uses the dedicated
/// [`FocusAutomatic`][crate::MessageKind::FocusAutomatic] and
/// [`FocusManual`][crate::MessageKind::FocusManual] commands.
#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FocusMode {
    Auto = 0x02,
    Manual = 0x03,
}
