//! The SimpleHash256 digest core.
//!
//! Three layered stages feed the streaming engine:
//!
//! - [`padding`] turns the trailing bytes of a message into complete
//!   64-byte blocks per the Merkle-Damgard padding rules.
//! - [`schedule`] expands one 64-byte block into a 64-word message schedule.
//! - [`compress`] mixes one schedule into the running 8-word state over 64
//!   rounds.
//!
//! [`SimpleHash256`] orchestrates the pipeline and is the public-facing
//! component.

pub mod compress;
mod consts;
mod engine;
pub mod padding;
pub mod schedule;

pub use engine::{SimpleHash256, hash_bytes, hash_string};
pub use padding::PaddedTail;

/// Block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes (256 bits).
pub const DIGEST_SIZE: usize = 32;

/// Words in the running hash state.
pub const STATE_WORDS: usize = 8;

/// Words in one expanded message schedule (one per round).
pub const SCHEDULE_WORDS: usize = 64;
