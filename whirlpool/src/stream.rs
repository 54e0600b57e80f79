//! Hashing from [`std::io`] sources.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use digest::Digest;

use crate::{Error, Whirlpool, WhirlpoolHash};

/// Hashes everything `reader` yields, or at most `length_limit` bytes of it.
///
/// With `None` the reader is drained to end-of-stream. A limit larger than
/// the stream simply hashes the whole stream.
///
/// ```rust
/// use whirlpool::{hash_stream, WhirlpoolHash};
///
/// let data = b"The quick brown fox jumps over the lazy dog.";
/// let prefix = hash_stream(&data[..], Some(43)).unwrap();
/// assert_eq!(prefix, WhirlpoolHash::digest(&data[..43]));
/// ```
pub fn hash_stream<R: Read>(reader: R, length_limit: Option<u64>) -> Result<WhirlpoolHash, Error> {
    let mut hasher = Whirlpool::new();
    let mut reader = reader.take(length_limit.unwrap_or(u64::MAX));
    let n = io::copy(&mut reader, &mut hasher)?;
    log::trace!("hashed {} bytes from stream", n);
    Ok(hasher.into())
}

/// Hashes the contents of the file at `path`.
pub fn hash_file(path: impl AsRef<Path>) -> Result<WhirlpoolHash, Error> {
    let path = path.as_ref();
    log::debug!("hashing {}", path.display());
    let file = File::open(path)?;
    hash_stream(file, None)
}
