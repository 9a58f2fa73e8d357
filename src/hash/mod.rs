//! SHA-256 core (FIPS 180-4)
//!
//! The pipeline is split into the stages the standard describes, each a pure
//! function over owned or borrowed values:
//!
//! ```text
//! message -> pad -> blocks -> (schedule -> compress) x N -> digest
//! ```
//!
//! [`sha256`] runs the whole pipeline in one call, [`Sha256`] does the same
//! incrementally with at most 63 bytes buffered between calls.

mod blocks;
mod compress;
mod constants;
mod digest;
mod engine;
mod error;
mod padding;
mod schedule;

pub use blocks::{Block, Blocks};
pub use compress::{HashState, WorkingRegisters};
pub use constants::{
    BLOCK_SIZE, DIGEST_SIZE, INITIAL_STATE, LENGTH_FIELD_SIZE, ROUND_CONSTANTS, SCHEDULE_WORDS,
    STATE_WORDS,
};
pub use digest::Digest;
pub use engine::{Sha256, sha256};
pub use error::{Error, Result};
pub use padding::{PaddedMessage, bit_length, pad, padded_len};
pub use schedule::MessageSchedule;
