/// Operation selector for the memory (preset) command.
#[derive(Debug, FromPrimitive, ToPrimitive, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MemoryMode {
    /// Clear the preset slot.
    Reset = 0x00,
    /// Store the current position in the preset slot.
    Set = 0x01,
    /// Move to the position stored in the preset slot.
    Recall = 0x02,
}
