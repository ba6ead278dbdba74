//! SimpleHash256 - an educational 256-bit hash function built on the
//! Merkle-Damgard construction.
//!
//! This library demonstrates the internal mechanics of block-based
//! cryptographic hashing: state initialization, padding, message expansion,
//! round mixing, and finalization. It supports both one-shot and incremental
//! (streaming) use, and every stage of the pipeline is exposed so it can be
//! inspected and tested on its own.
//!
//! # Quick Start
//!
//! ```rust
//! use simplehash::{SimpleHash256, hash_string};
//!
//! // Streaming use
//! let mut hasher = SimpleHash256::new();
//! hasher.update(b"Hello, ");
//! hasher.update(b"World!");
//! let streamed = hasher.hexdigest();
//!
//! // One-shot use
//! assert_eq!(streamed, hash_string("Hello, World!"));
//! ```
//!
//! # Security
//!
//! **This is not a security-reviewed primitive.** The design mirrors
//! SHA-256's structural shape (8x32-bit state words, 512-bit blocks, 64
//! rounds) to demonstrate how such functions are built, without claiming its
//! security properties. Do not use it to protect anything.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod digest;
pub mod error;
pub mod io;

pub use digest::{BLOCK_SIZE, DIGEST_SIZE, SimpleHash256, hash_bytes, hash_string};
pub use error::{Error, Result};
pub use io::hash_file;
