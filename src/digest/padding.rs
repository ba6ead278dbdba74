//! Merkle-Damgard padding.
//!
//! A message is padded by appending a single `0x80` marker byte, then zero
//! bytes until the length is 56 mod 64, then the original message length in
//! bits as an 8-byte big-endian integer. The padded stream is always a
//! nonzero multiple of 64 bytes.

use super::BLOCK_SIZE;

/// Offset within the final block where the 8-byte length suffix starts.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// The padded form of a message's trailing bytes: one or two complete
/// 64-byte blocks, ready for compression.
///
/// Two blocks are emitted exactly when the `0x80` marker leaves fewer than
/// 8 bytes free in the current block, pushing the length suffix into a
/// block of its own.
pub struct PaddedTail {
    blocks: [[u8; BLOCK_SIZE]; 2],
    count: usize,
}

impl PaddedTail {
    /// Pads `tail` (the bytes buffered since the last full block, so always
    /// shorter than one block) against `bit_len`, the total length in bits
    /// of the whole message.
    #[must_use]
    pub fn new(tail: &[u8], bit_len: u64) -> Self {
        debug_assert!(tail.len() < BLOCK_SIZE);

        let mut blocks = [[0u8; BLOCK_SIZE]; 2];
        blocks[0][..tail.len()].copy_from_slice(tail);
        blocks[0][tail.len()] = 0x80;

        let count = if tail.len() + 1 > LENGTH_OFFSET { 2 } else { 1 };
        blocks[count - 1][LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());

        Self { blocks, count }
    }

    /// The emitted blocks, in processing order.
    #[must_use]
    pub fn blocks(&self) -> &[[u8; BLOCK_SIZE]] {
        &self.blocks[..self.count]
    }
}
