//! From-scratch SHA-256 (FIPS 180-4)
//!
//! Compresses an arbitrary-length byte message into a 256-bit digest. The
//! algorithm is split into explicit stages (padding, block splitting,
//! message schedule, compression, digest encoding) that each own or borrow
//! their state, so independent messages can be hashed on any number of
//! threads without coordination.
//!
//! # Quick Start
//!
//! ```rust
//! use sha256_engine::{Sha256, sha256};
//!
//! // One shot
//! let digest = sha256(b"abc")?;
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // Incremental, any chunking
//! let mut hasher = Sha256::new();
//! hasher.update(b"a")?;
//! hasher.update(b"bc")?;
//! assert_eq!(hasher.finalize(), digest);
//! # Ok::<(), sha256_engine::Error>(())
//! ```
//!
//! # Observing intermediate values
//!
//! [`hash_observed`] runs the same stages and reports padded message, blocks,
//! schedules and hash states to a [`HashObserver`]. [`TracingObserver`] turns
//! them into `tracing` events; [`render_block`] draws a block as a bit table.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod hash;
pub mod observe;

pub use hash::{Digest, Error, HashState, MessageSchedule, PaddedMessage, Result, Sha256, sha256};
pub use observe::{BlockRecorder, HashObserver, TracingObserver, hash_observed, render_block};
