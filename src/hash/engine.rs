//! One-shot and incremental SHA-256

use super::blocks::Blocks;
use super::padding::pad_tail;
use super::{BLOCK_SIZE, Block, Digest, Error, HashState, MessageSchedule, Result, pad};

/// Hash a complete message.
///
/// # Errors
///
/// Returns [`Error::LengthOverflow`] when the message bit length does not fit
/// in 64 bits.
pub fn sha256(message: &[u8]) -> Result<Digest> {
    let padded = pad(message)?;
    let state = padded.blocks().fold(HashState::initial(), absorb);
    Ok(Digest::from_state(&state))
}

/// Schedule and compress one block into `state`.
#[inline]
fn absorb(state: HashState, block: &Block) -> HashState {
    state.compress(&MessageSchedule::from_block(block))
}

/// Incremental hashing context.
///
/// Full blocks are compressed as soon as they are available; fewer than 64
/// bytes stay buffered until the next [`Sha256::update`] or
/// [`Sha256::finalize`].
#[derive(Clone, Debug)]
pub struct Sha256 {
    state: HashState,
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    message_len: u64,
}

impl Sha256 {
    /// Fresh context at the initial hash state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: HashState::initial(),
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            message_len: 0,
        }
    }

    /// Absorb `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthOverflow`] if the total bit length would no
    /// longer fit in 64 bits. The context is left untouched in that case.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let incoming = u64::try_from(data.len()).unwrap_or(u64::MAX);
        let total = self
            .message_len
            .checked_add(incoming)
            .filter(|len| len.checked_mul(8).is_some())
            .ok_or(Error::LengthOverflow {
                len: self.message_len.saturating_add(incoming),
            })?;

        let mut remaining = data;
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
            self.buffer_len += take;
            remaining = tail;

            if self.buffer_len == BLOCK_SIZE {
                self.state = absorb(self.state, &self.buffer);
                self.buffer_len = 0;
            }
        }

        let whole = remaining.len() - remaining.len() % BLOCK_SIZE;
        let (blocks, tail) = remaining.split_at(whole);
        self.state = Blocks::new(blocks).fold(self.state, absorb);

        if !tail.is_empty() {
            self.buffer[..tail.len()].copy_from_slice(tail);
            self.buffer_len = tail.len();
        }

        self.message_len = total;
        Ok(())
    }

    /// Pad the buffered remainder and produce the digest.
    #[must_use]
    pub fn finalize(self) -> Digest {
        let tail = pad_tail(&self.buffer[..self.buffer_len], self.message_len * 8);
        let state = Blocks::new(&tail).fold(self.state, absorb);
        Digest::from_state(&state)
    }

    /// Bytes absorbed so far.
    #[must_use]
    pub fn bytes_processed(&self) -> u64 {
        self.message_len
    }

    /// Bytes waiting for a full block.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer_len
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// One-shot convenience, equivalent to [`sha256`].
    pub fn digest(data: &[u8]) -> Result<Digest> {
        sha256(data)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}
