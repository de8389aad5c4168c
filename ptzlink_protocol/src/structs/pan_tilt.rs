/// Pan movement direction for the pan/tilt drive command.
#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PanDirection {
    Left = 0x01,
    Right = 0x02,
    /// No pan movement. The tilt axis may still be driven.
    Stop = 0x03,
}

/// Tilt movement direction for the pan/tilt drive command.
#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TiltDirection {
    Up = 0x01,
    Down = 0x02,
    /// No tilt movement. The pan axis may still be driven.
    Stop = 0x03,
}
