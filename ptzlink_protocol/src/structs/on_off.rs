/// The protocol's boolean: `0x02` is on, `0x03` is off.
///
/// Used as the value byte of toggle commands (LR reverse, picture flip, …)
/// and their inquiry responses.
#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OnOff {
    On = 0x02,
    Off = 0x03,
}

impl From<bool> for OnOff {
    fn from(v: bool) -> Self {
        if v {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl From<OnOff> for bool {
    fn from(v: OnOff) -> Self {
        v == OnOff::On
    }
}
