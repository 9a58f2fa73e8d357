use core::iter::FusedIterator;
use core::slice::ChunksExact;

use super::BLOCK_SIZE;

/// One 512-bit block of a padded message.
pub type Block = [u8; BLOCK_SIZE];

/// Ordered, non-overlapping 64-byte windows over a padded buffer.
///
/// Borrowing view over the buffer. Cloning forks the cursor.
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Blocks<'a> {
    /// Split `bytes` into blocks. Trailing bytes short of a full block are
    /// not yielded; padded buffers never have any.
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        debug_assert_eq!(bytes.len() % BLOCK_SIZE, 0);
        Self {
            chunks: bytes.chunks_exact(BLOCK_SIZE),
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().and_then(|chunk| chunk.try_into().ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
