use std::io::{self, Cursor, Read, Write};

use hex_literal::hex;
use whirlpool::{hash_file, hash_stream, Error, WhirlpoolHash};

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog.";
const FOX_DIGEST: [u8; 64] = hex!(
    "87a7ff096082e3ffeb86db10feb91c5af36c2c71bc426fe310ce662e0338223e"
    "217def0eab0b02b80eecf875657802bc5965e48f5c0a05467756f0d3f396faba"
);

/// Hands out at most three bytes per read and interrupts every other call.
struct Trickle<'a> {
    data: &'a [u8],
    interrupt: bool,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let n = buf.len().min(3).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }
}

#[test]
fn unbounded_stream() {
    let hash = hash_stream(Cursor::new(FOX), None).unwrap();
    assert_eq!(hash.into_bytes(), FOX_DIGEST);
}

#[test]
fn limit_beyond_end_reads_everything() {
    let hash = hash_stream(Cursor::new(FOX), Some(1 << 40)).unwrap();
    assert_eq!(hash.into_bytes(), FOX_DIGEST);
}

#[test]
fn limit_truncates_stream() {
    let hash = hash_stream(Cursor::new(FOX), Some(FOX.len() as u64 - 1)).unwrap();
    assert_eq!(
        hash.to_string(),
        "b97de512e91e3828b40d2b0fdce9ceb3c4a71f9bea8d88e75c4fa854df36725f\
         d2b52eb6544edcacd6f8beddfea403cb55ae31f03ad62a5ef54e42ee82c3fb35"
    );
}

#[test]
fn zero_limit_is_empty_message() {
    let hash = hash_stream(Cursor::new(FOX), Some(0)).unwrap();
    assert_eq!(hash, WhirlpoolHash::digest(b""));
}

#[test]
fn short_and_interrupted_reads() {
    let reader = Trickle { data: FOX, interrupt: false };
    let hash = hash_stream(reader, None).unwrap();
    assert_eq!(hash.into_bytes(), FOX_DIGEST);
}

#[test]
fn read_errors_surface() {
    match hash_stream(Broken, None) {
        Err(Error::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::Other),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    // several blocks plus a tail
    for _ in 0..100 {
        file.write_all(FOX).unwrap();
    }
    file.flush().unwrap();

    let expected = WhirlpoolHash::digest(FOX.repeat(100));
    assert_eq!(hash_file(file.path()).unwrap(), expected);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = hash_file(dir.path().join("absent")).unwrap_err();
    match err {
        Error::Io(err) => assert_eq!(err.kind(), io::ErrorKind::NotFound),
        other => panic!("unexpected error: {}", other),
    }
}
