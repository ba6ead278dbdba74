//! File-hashing collaborator.
//!
//! The digest core never touches the filesystem; this module reads a file's
//! raw bytes and feeds them to a fresh engine. Path problems surface as
//! [`Error::Io`](crate::Error::Io) on the offending call and leave no other
//! session affected.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::digest::SimpleHash256;
use crate::error::Result;

/// Read size used when streaming file content into the engine.
const READ_CHUNK: usize = 8192;

/// Hashes the full raw content of the file at `path`, returning the hex
/// digest.
///
/// The file is read in binary mode with no encoding transformation, in
/// 8 KiB chunks, so arbitrarily large files hash in constant memory.
pub fn hash_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut hasher = SimpleHash256::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }

    debug!(path = %path.display(), bytes = hasher.message_len(), "hashed file");
    Ok(hasher.hexdigest())
}
