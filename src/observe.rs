//! Observation hooks around the hashing pipeline.
//!
//! The stages in [`crate::hash`] never log. [`hash_observed`] drives the same
//! stages one by one and hands every intermediate value to a
//! [`HashObserver`] between them, so diagnostics cannot change the digest.

use core::fmt::Write;

use tracing::{debug, instrument, trace};

use crate::hash::{
    BLOCK_SIZE, Block, Digest, HashState, MessageSchedule, PaddedMessage, Result, pad,
};

/// Bytes shown per row of [`render_block`].
const ROW_BYTES: usize = 8;

/// Inner width of a rendered block table.
const TABLE_WIDTH: usize = 77;

/// Receives intermediate values of a hash computation.
///
/// Every hook defaults to a no-op.
pub trait HashObserver {
    /// Padding finished.
    fn on_padded(&mut self, _padded: &PaddedMessage) {}

    /// Block `index` is about to be scheduled.
    fn on_block(&mut self, _index: usize, _block: &Block) {}

    /// Block `index` was expanded.
    fn on_schedule(&mut self, _index: usize, _schedule: &MessageSchedule) {}

    /// Block `index` was folded into the hash state.
    fn on_state(&mut self, _index: usize, _state: &HashState) {}
}

/// Hash `message`, reporting each stage to `observer`.
///
/// Produces the same digest as [`crate::sha256`].
#[instrument(level = "debug", skip_all, fields(len = message.len()), err)]
pub fn hash_observed<O>(message: &[u8], observer: &mut O) -> Result<Digest>
where
    O: HashObserver + ?Sized,
{
    let padded = pad(message)?;
    observer.on_padded(&padded);

    let mut state = HashState::initial();
    for (index, block) in padded.blocks().enumerate() {
        observer.on_block(index, block);
        let schedule = MessageSchedule::from_block(block);
        observer.on_schedule(index, &schedule);
        state = state.compress(&schedule);
        observer.on_state(index, &state);
    }

    Ok(Digest::from_state(&state))
}

/// Emits `tracing` events for every stage.
///
/// Block dumps and schedules are at `TRACE`, padding and state updates at
/// `DEBUG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl HashObserver for TracingObserver {
    fn on_padded(&mut self, padded: &PaddedMessage) {
        debug!(
            message_len = padded.message_len(),
            padded_len = padded.len(),
            blocks = padded.block_count(),
            "message padded"
        );
    }

    fn on_block(&mut self, index: usize, block: &Block) {
        trace!(index, offset = index * BLOCK_SIZE, "block\n{}", render_block(block));
    }

    fn on_schedule(&mut self, index: usize, schedule: &MessageSchedule) {
        trace!(index, words = ?schedule.words(), "message schedule");
    }

    fn on_state(&mut self, index: usize, state: &HashState) {
        debug!(index, ?state, "hash state updated");
    }
}

/// Keeps a copy of every intermediate value.
#[derive(Clone, Debug, Default)]
pub struct BlockRecorder {
    padded_len: usize,
    blocks: Vec<Block>,
    schedules: Vec<MessageSchedule>,
    states: Vec<HashState>,
}

impl BlockRecorder {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the last padded message seen.
    #[must_use]
    pub fn padded_len(&self) -> usize {
        self.padded_len
    }

    /// Blocks in processing order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Schedules in processing order.
    #[must_use]
    pub fn schedules(&self) -> &[MessageSchedule] {
        &self.schedules
    }

    /// Hash state after each block.
    #[must_use]
    pub fn states(&self) -> &[HashState] {
        &self.states
    }
}

impl HashObserver for BlockRecorder {
    fn on_padded(&mut self, padded: &PaddedMessage) {
        self.padded_len = padded.len();
    }

    fn on_block(&mut self, _index: usize, block: &Block) {
        self.blocks.push(*block);
    }

    fn on_schedule(&mut self, _index: usize, schedule: &MessageSchedule) {
        self.schedules.push(*schedule);
    }

    fn on_state(&mut self, _index: usize, state: &HashState) {
        self.states.push(*state);
    }
}

/// Render a block as a bit table, eight bytes per row.
///
/// ```text
/// |-----------------------------------------------------------------------------|
/// |    64 bytes                                                                 |
/// |-----------------------------------------------------------------------------|
/// |    0|     8|0110000101100010...                                             |
/// ```
#[must_use]
pub fn render_block(block: &Block) -> String {
    let border = format!("|{}|", "-".repeat(TABLE_WIDTH));
    let mut out = String::with_capacity((TABLE_WIDTH + 3) * (BLOCK_SIZE / ROW_BYTES + 4));

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{border}");
    let _ = writeln!(
        out,
        "|{:<width$}|",
        format!(" {:>5} bytes", block.len()),
        width = TABLE_WIDTH
    );
    let _ = writeln!(out, "{border}");

    for (row, bytes) in block.chunks_exact(ROW_BYTES).enumerate() {
        let from = row * ROW_BYTES;
        let _ = write!(out, "|{:>5}| {:>5}|", from, from + ROW_BYTES);
        for byte in bytes {
            let _ = write!(out, "{byte:08b}");
        }
        let _ = writeln!(out, "|");
    }

    let _ = write!(out, "{border}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;

    #[test]
    fn observed_digest_matches_plain_digest() {
        let message = b"The quick brown fox jumps over the lazy dog";
        let observed = hash_observed(message, &mut TracingObserver).unwrap();
        assert_eq!(observed, sha256(message).unwrap());
    }

    #[test]
    fn recorder_sees_every_block_in_order() {
        let message = [0x56u8; 56];
        let mut recorder = BlockRecorder::new();
        let digest = hash_observed(&message, &mut recorder).unwrap();

        assert_eq!(recorder.padded_len(), 2 * BLOCK_SIZE);
        assert_eq!(recorder.blocks().len(), 2);
        assert_eq!(recorder.schedules().len(), 2);
        assert_eq!(recorder.states().len(), 2);
        assert_eq!(recorder.blocks()[1][0], 0x00);
        assert_eq!(recorder.blocks()[0][56], 0x80);
        assert_eq!(Digest::from_state(&recorder.states()[1]), digest);
    }

    #[test]
    fn default_hooks_are_no_ops() {
        struct Silent;
        impl HashObserver for Silent {}

        let digest = hash_observed(b"abc", &mut Silent).unwrap();
        assert_eq!(digest, sha256(b"abc").unwrap());
    }

    #[test]
    fn dyn_observer_is_accepted() {
        let mut recorder = BlockRecorder::new();
        let observer: &mut dyn HashObserver = &mut recorder;
        hash_observed(b"", observer).unwrap();
        assert_eq!(recorder.blocks().len(), 1);
    }

    #[test]
    fn rendered_block_layout() {
        let padded = pad(b"abc").unwrap();
        let block = padded.blocks().next().unwrap();
        let rendered = render_block(block);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|line| line.len() == TABLE_WIDTH + 2));
        assert!(lines[1].starts_with("|    64 bytes"));
        assert_eq!(
            lines[3],
            format!(
                "|    0|     8|{}|",
                "01100001011000100110001110000000".to_owned() + &"0".repeat(32)
            )
        );
        assert!(lines[10].starts_with("|   56|    64|"));
        assert!(lines[10].ends_with("00011000|"));
    }
}
