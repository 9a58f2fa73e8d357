//! Message padding
//!
//! # Format
//!
//! ```text
//! [MESSAGE (L bytes)] [0x80] [0x00 x P] [BIT LENGTH (8 bytes, big-endian)]
//! ```
//!
//! `P` is the smallest count with `(L + 1 + P) mod 64 == 56`, so the padded
//! length is always a positive multiple of 64.

use bytes::{BufMut, Bytes, BytesMut};

use super::blocks::Blocks;
use super::{BLOCK_SIZE, Error, LENGTH_FIELD_SIZE, Result};

/// First padding byte: a single `1` bit followed by seven `0` bits.
const PAD_MARKER: u8 = 0x80;

/// Padded message whose length is a multiple of [`BLOCK_SIZE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Bytes,
    message_len: usize,
}

impl PaddedMessage {
    /// Total padded length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: even the empty message pads to one block.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length of the original message in bytes.
    #[must_use]
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// Number of 64-byte blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_SIZE
    }

    /// Borrow as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Ordered view over the blocks. Each call starts from block 0.
    #[must_use]
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks::new(&self.bytes)
    }

    /// Consume into the underlying buffer.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Bit length of a message of `len` bytes.
///
/// Fails with [`Error::LengthOverflow`] when `len * 8` does not fit in 64 bits.
pub fn bit_length(len: usize) -> Result<u64> {
    let len = u64::try_from(len).unwrap_or(u64::MAX);
    len.checked_mul(8).ok_or(Error::LengthOverflow { len })
}

/// Padded length for a message of `len` bytes.
pub fn padded_len(len: usize) -> Result<usize> {
    bit_length(len)?;
    len.checked_add(1 + LENGTH_FIELD_SIZE)
        .and_then(|min| min.checked_next_multiple_of(BLOCK_SIZE))
        .ok_or(Error::LengthOverflow {
            len: u64::try_from(len).unwrap_or(u64::MAX),
        })
}

/// Pad a complete message.
///
/// # Errors
///
/// Returns [`Error::LengthOverflow`] before touching the message if its bit
/// length cannot be encoded.
pub fn pad(message: &[u8]) -> Result<PaddedMessage> {
    let bits = bit_length(message.len())?;
    let total = padded_len(message.len())?;

    let mut buf = BytesMut::with_capacity(total);
    write_padded(&mut buf, message, bits);
    debug_assert_eq!(buf.len(), total);

    Ok(PaddedMessage {
        bytes: buf.freeze(),
        message_len: message.len(),
    })
}

/// Pad the unconsumed tail of a longer message whose full bit length is
/// already known. Produces one block when `tail.len() <= 55`, two otherwise.
pub(crate) fn pad_tail(tail: &[u8], bits: u64) -> Bytes {
    debug_assert!(tail.len() < BLOCK_SIZE);
    let mut buf = BytesMut::with_capacity(2 * BLOCK_SIZE);
    write_padded(&mut buf, tail, bits);
    buf.freeze()
}

fn write_padded(buf: &mut BytesMut, data: &[u8], bits: u64) {
    let zeros = (2 * BLOCK_SIZE - data.len() % BLOCK_SIZE - 1 - LENGTH_FIELD_SIZE) % BLOCK_SIZE;

    buf.extend_from_slice(data);
    buf.put_u8(PAD_MARKER);
    buf.put_bytes(0, zeros);
    buf.put_u64(bits);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_pads_to_one_block() {
        let padded = pad(b"").unwrap();
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(padded.block_count(), 1);
        assert_eq!(padded.as_bytes()[0], 0x80);
        assert!(padded.as_bytes()[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn abc_layout() {
        let padded = pad(b"abc").unwrap();
        let bytes = padded.as_bytes();
        assert_eq!(&bytes[..4], &[0x61, 0x62, 0x63, 0x80]);
        assert!(bytes[4..56].iter().all(|&b| b == 0));
        assert_eq!(&bytes[56..], &24u64.to_be_bytes());
    }

    #[test]
    fn boundary_55_fits_one_block() {
        let padded = pad(&[0x55; 55]).unwrap();
        assert_eq!(padded.block_count(), 1);
        assert_eq!(padded.as_bytes()[55], 0x80);
        assert_eq!(&padded.as_bytes()[56..], &440u64.to_be_bytes());
    }

    #[test]
    fn boundary_56_spills_into_second_block() {
        let padded = pad(&[0x56; 56]).unwrap();
        assert_eq!(padded.block_count(), 2);
        assert_eq!(padded.as_bytes()[56], 0x80);
        assert!(padded.as_bytes()[57..120].iter().all(|&b| b == 0));
        assert_eq!(&padded.as_bytes()[120..], &448u64.to_be_bytes());
    }

    #[test]
    fn full_block_message_gets_a_padding_block() {
        assert_eq!(padded_len(64).unwrap(), 128);
        assert_eq!(padded_len(63).unwrap(), 128);
        assert_eq!(padded_len(119).unwrap(), 128);
        assert_eq!(padded_len(120).unwrap(), 192);
    }

    #[test]
    fn tail_padding_matches_whole_message_padding() {
        let message = [0xA5u8; 61];
        let whole = pad(&message).unwrap();
        let tail = pad_tail(&message, bit_length(message.len()).unwrap());
        assert_eq!(whole.as_bytes(), tail.as_ref());
    }

    #[test]
    fn tail_padding_uses_total_bit_length() {
        let tail = pad_tail(b"xy", 8 * 130);
        assert_eq!(tail.len(), BLOCK_SIZE);
        assert_eq!(&tail[56..], &1040u64.to_be_bytes());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn bit_length_overflow_is_rejected() {
        let limit = 1usize << 61;
        assert_eq!(bit_length(limit - 1).unwrap(), u64::MAX - 7);
        assert_eq!(
            bit_length(limit),
            Err(Error::LengthOverflow { len: 1u64 << 61 })
        );
        assert!(matches!(
            padded_len(usize::MAX),
            Err(Error::LengthOverflow { .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: padded length is the smallest multiple of 64 >= len + 9
            #[test]
            fn prop_padded_len_is_minimal(message in prop::collection::vec(any::<u8>(), 0..=1024)) {
                let padded = pad(&message).unwrap();
                prop_assert_eq!(padded.len() % BLOCK_SIZE, 0);
                prop_assert!(padded.len() >= message.len() + 9);
                prop_assert!(padded.len() - BLOCK_SIZE < message.len() + 9);
            }

            /// Property: the message is a prefix and the length field is the suffix
            #[test]
            fn prop_layout_preserved(message in prop::collection::vec(any::<u8>(), 0..=512)) {
                let padded = pad(&message).unwrap();
                let bytes = padded.as_bytes();
                prop_assert_eq!(&bytes[..message.len()], &message[..]);
                prop_assert_eq!(bytes[message.len()], 0x80);
                let tail_start = bytes.len() - LENGTH_FIELD_SIZE;
                prop_assert!(bytes[message.len() + 1..tail_start].iter().all(|&b| b == 0));
                prop_assert_eq!(&bytes[tail_start..], &(message.len() as u64 * 8).to_be_bytes());
            }
        }
    }
}
