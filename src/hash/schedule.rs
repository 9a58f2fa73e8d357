//! Message schedule expansion

use bytes::Buf;

use super::{Block, SCHEDULE_WORDS};

/// Words copied directly from the block.
const BLOCK_WORDS: usize = 16;

/// The 64 schedule words derived from one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageSchedule([u32; SCHEDULE_WORDS]);

impl MessageSchedule {
    /// Expand a block: `w[0..16]` big-endian from the block, `w[16..64]` by
    /// the sigma recurrence with wrapping addition.
    #[must_use]
    pub fn from_block(block: &Block) -> Self {
        let mut w = [0u32; SCHEDULE_WORDS];

        let mut cursor = &block[..];
        for word in &mut w[..BLOCK_WORDS] {
            *word = cursor.get_u32();
        }

        for t in BLOCK_WORDS..SCHEDULE_WORDS {
            let s0 = small_sigma0(w[t - 15]);
            let s1 = small_sigma1(w[t - 2]);
            w[t] = w[t - 16]
                .wrapping_add(s0)
                .wrapping_add(w[t - 7])
                .wrapping_add(s1);
        }

        Self(w)
    }

    /// Borrow the schedule words.
    #[must_use]
    pub fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.0
    }

    /// Schedule word `t`. Panics when `t >= 64`.
    #[must_use]
    pub fn word(&self, t: usize) -> u32 {
        self.0[t]
    }
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
