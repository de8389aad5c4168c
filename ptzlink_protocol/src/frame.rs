//! VISCA wire framing.
//!
//! ## Format
//!
//! ```text
//! +--------+=============+------+
//! | header |   payload   | 0xff |
//! +--------+=============+------+
//! ```
//!
//! * `u8`: address header. Sender address in bits 6..4, receiver address in
//!   bits 2..0. Bits 7 and 3 have no documented meaning; real devices have
//!   been seen setting them, so they are ignored on receipt and zero on send.
//! * 0 to [`MAX_PAYLOAD_LENGTH`] payload bytes. `0xff` never appears inside a
//!   payload.
//! * `0xff`: frame terminator.
//!
//! Serial and IP transports deliver bytes in arbitrary chunks, so extraction
//! is streaming-safe: a buffer holding less than one full frame is reported
//! as incomplete (not an error), and the caller retries once more bytes have
//! arrived. [`FrameBuffer`] wraps that accumulate-and-retry loop.

use crate::{Error, Result};
use bytes::{Buf, BytesMut};
use modular_bitfield::{bitfield, specifiers::B3};

/// Terminator byte marking the end of every frame.
pub const FRAME_TERMINATOR: u8 = 0xff;

/// Maximum payload length of a single frame.
///
/// The longest defined message (absolute pan/tilt position) is 13 payload
/// bytes; anything claiming more than this is treated as stream corruption.
pub const MAX_PAYLOAD_LENGTH: usize = 16;

/// The VISCA address header byte.
///
/// ## Format
///
/// Fields from LSB to MSB:
///
/// * `u3 0x07`: receiver address
/// * `bit 0x08`: unused
/// * `u3 0x70`: sender address
/// * `bit 0x80`: unused
///
/// The unused bits are preserved as "ignore on receipt, zero on send": the
/// getters never read them, and a freshly built header leaves them clear.
#[bitfield]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub(crate) struct FrameHeader {
    pub receiver: B3,
    #[skip]
    __: bool,
    pub sender: B3,
    #[skip]
    __: bool,
}

/// A single VISCA frame: who sent it, who it is for, and the raw payload
/// bytes between the header and the terminator.
///
/// The controller is conventionally address 0 and cameras are 1..=7, but this
/// layer carries whatever addresses appear on the wire.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Sender device address (0..=7).
    pub sender: u8,
    /// Receiver device address (0..=7).
    pub receiver: u8,
    /// Payload bytes, exclusive of the header and terminator.
    pub payload: Vec<u8>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("sender", &self.sender)
            .field("receiver", &self.receiver)
            .field("payload", &hex::encode(&self.payload))
            .finish()
    }
}

impl Frame {
    pub fn new(sender: u8, receiver: u8, payload: Vec<u8>) -> Self {
        Self {
            sender,
            receiver,
            payload,
        }
    }

    /// Extracts the first complete frame from `buf`.
    ///
    /// `buf` may be truncated or contain multiple frames.
    ///
    /// Returns:
    ///
    /// * `Ok(Some((frame, consumed)))` — a complete frame, and the number of
    ///   bytes it occupied (header + payload + terminator). The caller should
    ///   drop `consumed` bytes from the front of its buffer.
    /// * `Ok(None)` — no terminator yet: not an error, retry once more bytes
    ///   have arrived. Zero bytes are consumed.
    /// * `Err(_)` — stream corruption ([`Error::EmptyFrame`] or
    ///   [`Error::PayloadTooLong`]). Zero bytes are consumed; the caller
    ///   decides whether to resynchronise.
    pub fn extract(buf: &[u8]) -> Result<Option<(Self, usize)>> {
        let Some(terminator) = buf.iter().position(|b| *b == FRAME_TERMINATOR) else {
            return Ok(None);
        };

        if terminator == 0 {
            // Terminator with no header byte before it.
            return Err(Error::EmptyFrame);
        }

        let payload_length = terminator - 1;
        if payload_length > MAX_PAYLOAD_LENGTH {
            return Err(Error::PayloadTooLong(payload_length));
        }

        let header = FrameHeader::from_bytes([buf[0]]);
        Ok(Some((
            Self {
                sender: header.sender(),
                receiver: header.receiver(),
                payload: buf[1..terminator].to_vec(),
            },
            terminator + 1,
        )))
    }

    /// Serialises this frame to wire bytes: header, payload, terminator.
    ///
    /// Returns [`Error::ParameterOutOfRange`] if either address exceeds 7,
    /// and [`Error::PayloadTooLong`] if the payload exceeds
    /// [`MAX_PAYLOAD_LENGTH`].
    pub fn to_wire(&self) -> Result<Vec<u8>> {
        if self.payload.len() > MAX_PAYLOAD_LENGTH {
            return Err(Error::PayloadTooLong(self.payload.len()));
        }

        let header = FrameHeader::new()
            .with_sender_checked(self.sender)
            .and_then(|h| h.with_receiver_checked(self.receiver))
            .map_err(|_| Error::ParameterOutOfRange)?;

        let mut out = Vec::with_capacity(self.payload.len() + 2);
        out.extend_from_slice(&header.into_bytes());
        out.extend_from_slice(&self.payload);
        out.push(FRAME_TERMINATOR);
        Ok(out)
    }
}

/// Reassembly queue for frames arriving in arbitrary chunks.
///
/// Owned by the transport side of an application: append every read with
/// [`push`][Self::push], then drain complete frames with
/// [`next_frame`][Self::next_frame].
///
/// Corrupt input is never silently discarded — [`next_frame`][Self::next_frame]
/// reports it and leaves the buffer untouched, so the caller can log the bad
/// bytes and then call [`resync`][Self::resync].
#[derive(Default)]
pub struct FrameBuffer {
    buffer: BytesMut,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(64),
        }
    }

    /// Appends newly received bytes.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Takes the next complete frame off the queue.
    ///
    /// `Ok(None)` means the queue holds less than one full frame. Errors
    /// consume nothing; see [`resync`][Self::resync].
    pub fn next_frame(&mut self) -> Result<Option<Frame>> {
        match Frame::extract(&self.buffer)? {
            Some((frame, consumed)) => {
                self.buffer.advance(consumed);
                Ok(Some(frame))
            }
            None => Ok(None),
        }
    }

    /// Drops queued bytes up to and including the next frame terminator,
    /// returning how many were discarded.
    ///
    /// If no terminator is queued, nothing is discarded.
    pub fn resync(&mut self) -> usize {
        match self.buffer.iter().position(|b| *b == FRAME_TERMINATOR) {
            Some(i) => {
                debug!("resync: discarding {} bytes", i + 1);
                self.buffer.advance(i + 1);
                i + 1
            }
            None => 0,
        }
    }

    /// Number of bytes queued but not yet consumed.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn incomplete_consumes_nothing() -> Result {
        assert_eq!(None, Frame::extract(&[])?);
        assert_eq!(None, Frame::extract(&[0x81])?);
        assert_eq!(None, Frame::extract(&[0x81, 0x09, 0x06, 0x12])?);
        Ok(())
    }

    #[test]
    fn empty_frame_is_corrupt() {
        assert_eq!(Err(Error::EmptyFrame), Frame::extract(&[0xff]));
        assert_eq!(
            Err(Error::EmptyFrame),
            Frame::extract(&[0xff, 0x81, 0x09, 0xff])
        );
    }

    #[test]
    fn oversize_frame_is_corrupt() {
        let mut buf = vec![0x81];
        buf.extend_from_slice(&[0x00; MAX_PAYLOAD_LENGTH + 1]);
        buf.push(0xff);
        assert_eq!(
            Err(Error::PayloadTooLong(MAX_PAYLOAD_LENGTH + 1)),
            Frame::extract(&buf)
        );
    }

    #[test]
    fn extract_single_frame() -> Result {
        let (frame, consumed) = Frame::extract(&[0x90, 0x41, 0xff])?.unwrap();
        assert_eq!(3, consumed);
        assert_eq!(Frame::new(1, 0, vec![0x41]), frame);
        Ok(())
    }

    #[test]
    fn extract_leaves_following_frames() -> Result {
        let buf = hex::decode("81090612ff9041ff").unwrap();
        let (frame, consumed) = Frame::extract(&buf)?.unwrap();
        assert_eq!(5, consumed);
        assert_eq!(Frame::new(0, 1, vec![0x09, 0x06, 0x12]), frame);

        let (frame, consumed) = Frame::extract(&buf[5..])?.unwrap();
        assert_eq!(3, consumed);
        assert_eq!(Frame::new(1, 0, vec![0x41]), frame);
        Ok(())
    }

    #[test]
    fn header_reserved_bits_ignored() -> Result {
        // Bits 7 and 3 set: same addresses as 0x79.
        let (frame, _) = Frame::extract(&[0xf9, 0x00, 0xff])?.unwrap();
        assert_eq!(7, frame.sender);
        assert_eq!(1, frame.receiver);

        let (frame, _) = Frame::extract(&[0x88, 0x00, 0xff])?.unwrap();
        assert_eq!(0, frame.sender);
        assert_eq!(0, frame.receiver);
        Ok(())
    }

    #[test]
    fn wire_round_trip() -> Result {
        let frame = Frame::new(0, 1, vec![0x01, 0x06, 0x04]);
        let wire = frame.to_wire()?;
        assert_eq!(hex::decode("81010604ff").unwrap(), wire);

        let (decoded, consumed) = Frame::extract(&wire)?.unwrap();
        assert_eq!(wire.len(), consumed);
        assert_eq!(frame, decoded);
        Ok(())
    }

    #[test]
    fn wire_rejects_bad_address() {
        let frame = Frame::new(8, 0, vec![]);
        assert_eq!(Err(Error::ParameterOutOfRange), frame.to_wire());
    }

    #[test]
    fn wire_rejects_oversize_payload() {
        let frame = Frame::new(0, 1, vec![0; MAX_PAYLOAD_LENGTH + 1]);
        assert_eq!(
            Err(Error::PayloadTooLong(MAX_PAYLOAD_LENGTH + 1)),
            frame.to_wire()
        );
    }

    #[test]
    fn buffer_chunked_delivery() -> Result {
        let wire = hex::decode("81090612ff").unwrap();
        let mut buffer = FrameBuffer::new();

        // Delivery may split at any byte boundary.
        for split in 0..wire.len() {
            buffer.push(&wire[..split]);
            assert_eq!(None, buffer.next_frame()?);
            buffer.push(&wire[split..]);
            let frame = buffer.next_frame()?.unwrap();
            assert_eq!(Frame::new(0, 1, vec![0x09, 0x06, 0x12]), frame);
            assert!(buffer.is_empty());
        }
        Ok(())
    }

    #[test]
    fn buffer_multiple_frames() -> Result {
        let mut buffer = FrameBuffer::new();
        buffer.push(&hex::decode("9041ff9051ff").unwrap());
        assert_eq!(Some(Frame::new(1, 0, vec![0x41])), buffer.next_frame()?);
        assert_eq!(Some(Frame::new(1, 0, vec![0x51])), buffer.next_frame()?);
        assert_eq!(None, buffer.next_frame()?);
        Ok(())
    }

    #[test]
    fn buffer_resync_after_corruption() -> Result {
        let mut buffer = FrameBuffer::new();
        buffer.push(&hex::decode("ff9041ff").unwrap());

        assert_eq!(Err(Error::EmptyFrame), buffer.next_frame());
        // The error consumed nothing.
        assert_eq!(4, buffer.len());

        assert_eq!(1, buffer.resync());
        assert_eq!(Some(Frame::new(1, 0, vec![0x41])), buffer.next_frame()?);
        Ok(())
    }
}
