//! The streaming digest engine.

use tracing::trace;

use super::compress::compress;
use super::consts::INITIAL_STATE;
use super::padding::PaddedTail;
use super::schedule;
use super::{BLOCK_SIZE, DIGEST_SIZE, STATE_WORDS};

/// A SimpleHash256 hashing session.
///
/// Owns the running 8-word state, a partial-block buffer, and the total
/// message length. Each session is an independent value; nothing is shared
/// between instances except the read-only constant tables, so separate
/// sessions may run on separate threads freely.
///
/// Finalization is repeatable: [`digest`](Self::digest) and
/// [`hexdigest`](Self::hexdigest) run the final padding against a copy of
/// the state, so they may be called any number of times, and
/// [`update`](Self::update) may continue extending the message afterwards.
#[derive(Clone)]
pub struct SimpleHash256 {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    bit_len: u64,
}

impl SimpleHash256 {
    /// Creates a fresh session with the initial state and an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            bit_len: 0,
        }
    }

    /// Returns the session to its initial state, discarding all input fed
    /// so far.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of message bytes fed into this session so far.
    #[must_use]
    pub fn message_len(&self) -> u64 {
        self.bit_len / 8
    }

    /// Feeds message bytes into the session.
    ///
    /// Bytes accumulate in the partial-block buffer; each time a full
    /// 64-byte block completes it is expanded and compressed into the
    /// running state immediately. Accepts any byte content, including an
    /// empty slice, and never fails.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.bit_len = self.bit_len.wrapping_add((data.len() as u64) * 8);

        let mut blocks = 0u64;
        let mut remaining = data;
        while !remaining.is_empty() {
            let space = BLOCK_SIZE - self.buffer_len;
            let take = space.min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
            self.buffer_len += take;
            remaining = tail;

            if self.buffer_len == BLOCK_SIZE {
                compress(&mut self.state, &schedule::expand(&self.buffer));
                self.buffer_len = 0;
                blocks += 1;
            }
        }

        if blocks > 0 {
            trace!(blocks, buffered = self.buffer_len, "compressed full blocks");
        }
    }

    /// Produces the 32-byte digest of everything fed so far.
    ///
    /// The buffered tail is padded against the current total length and the
    /// resulting one or two blocks are compressed into a copy of the state,
    /// which is then serialized big-endian, word by word. The session
    /// itself is untouched. Identical byte sequences yield identical
    /// digests no matter how they were chunked across `update` calls.
    #[must_use]
    pub fn digest(&self) -> [u8; DIGEST_SIZE] {
        let mut state = self.state;
        let padded = PaddedTail::new(&self.buffer[..self.buffer_len], self.bit_len);
        for block in padded.blocks() {
            compress(&mut state, &schedule::expand(block));
        }

        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// The digest rendered as 64 lowercase hexadecimal characters.
    #[must_use]
    pub fn hexdigest(&self) -> String {
        self.digest().iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl Default for SimpleHash256 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimpleHash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleHash256")
            .field("message_len", &self.message_len())
            .field("buffered", &self.buffer_len)
            .finish_non_exhaustive()
    }
}

/// Hashes a byte slice in one call, returning the hex digest.
#[must_use]
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = SimpleHash256::new();
    hasher.update(data);
    hasher.hexdigest()
}

/// Hashes a string in one call, returning the hex digest.
///
/// The string is fed to the core as its UTF-8 bytes; callers holding other
/// encodings should convert to bytes themselves and use [`hash_bytes`].
#[must_use]
pub fn hash_string(message: &str) -> String {
    hash_bytes(message.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_empty() {
        let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(hash_bytes(b""), expected);
    }

    #[test]
    fn digest_abc() {
        let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
        assert_eq!(hash_bytes(b"abc"), expected);
    }

    #[test]
    fn digest_longer_message() {
        let message = b"The quick brown fox jumps over the lazy dog";
        let expected = "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592";
        assert_eq!(hash_bytes(message), expected);
    }

    #[test]
    fn incremental_vs_single_shot() {
        let mut hasher = SimpleHash256::new();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(hasher.hexdigest(), hash_bytes(b"hello world"));
    }

    #[test]
    fn digest_is_repeatable() {
        let mut hasher = SimpleHash256::new();
        hasher.update(b"finalize me twice");
        let first = hasher.digest();
        let second = hasher.digest();
        assert_eq!(first, second);
    }

    #[test]
    fn update_after_digest_continues_the_stream() {
        let mut hasher = SimpleHash256::new();
        hasher.update(b"part one, ");
        let _ = hasher.digest();
        hasher.update(b"part two");
        assert_eq!(hasher.hexdigest(), hash_bytes(b"part one, part two"));
    }

    #[test]
    fn reset_discards_previous_input() {
        let mut hasher = SimpleHash256::new();
        hasher.update(b"stale");
        hasher.reset();
        hasher.update(b"abc");
        assert_eq!(hasher.hexdigest(), hash_bytes(b"abc"));
        assert_eq!(hasher.message_len(), 3);
    }

    #[test]
    fn hash_string_uses_utf8_bytes() {
        assert_eq!(hash_string("abc"), hash_bytes(b"abc"));
        assert_eq!(hash_string("héllo"), hash_bytes("héllo".as_bytes()));
    }
}
