use core::{fmt, str::FromStr};

use digest::{Digest, Output};

use crate::{Error, Whirlpool};

/// A finished 512-bit Whirlpool digest.
///
/// Renders as 128 lowercase hex characters through [`Display`](fmt::Display)
/// and parses back with [`WhirlpoolHash::from_hex`] or [`str::parse`].
///
/// Comparison is not constant-time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WhirlpoolHash([u8; 64]);

impl WhirlpoolHash {
    /// Digest size in bytes.
    pub const LEN: usize = 64;

    /// Hashes `data` in one go.
    pub fn digest(data: impl AsRef<[u8]>) -> Self {
        Whirlpool::digest(data).into()
    }

    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Parses 128 hex characters, upper or lower case.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Consumes the value, returning the raw digest bytes.
    pub fn into_bytes(self) -> [u8; Self::LEN] {
        self.0
    }
}

impl From<Output<Whirlpool>> for WhirlpoolHash {
    fn from(out: Output<Whirlpool>) -> Self {
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(&out);
        Self(bytes)
    }
}

impl From<Whirlpool> for WhirlpoolHash {
    fn from(hasher: Whirlpool) -> Self {
        hasher.finalize().into()
    }
}

impl From<[u8; 64]> for WhirlpoolHash {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for WhirlpoolHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for WhirlpoolHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::LowerHex for WhirlpoolHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for WhirlpoolHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for WhirlpoolHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for WhirlpoolHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WhirlpoolHash({:x})", self)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use hex_literal::hex;
    use std::{format, string::ToString};

    const FOX: &str = "b97de512e91e3828b40d2b0fdce9ceb3c4a71f9bea8d88e75c4fa854df36725f\
                       d2b52eb6544edcacd6f8beddfea403cb55ae31f03ad62a5ef54e42ee82c3fb35";

    #[test]
    fn display_is_lowercase_hex() {
        let hash = WhirlpoolHash::digest("The quick brown fox jumps over the lazy dog");
        let text = hash.to_string();
        assert_eq!(text.len(), 128);
        assert_eq!(text, FOX);
        assert_eq!(format!("{:X}", hash), FOX.to_uppercase());
    }

    #[test]
    fn hex_round_trip() {
        let hash: WhirlpoolHash = FOX.parse().unwrap();
        assert_eq!(hash, WhirlpoolHash::from_hex(&FOX.to_uppercase()).unwrap());
        assert_eq!(hash.to_string(), FOX);
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!(
            WhirlpoolHash::from_hex(&FOX[..126]),
            Err(Error::InvalidHex(hex::FromHexError::InvalidStringLength))
        ));
        assert!(matches!(
            WhirlpoolHash::from_hex(&FOX.replace('b', "g")),
            Err(Error::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'g', .. }))
        ));
        assert!(WhirlpoolHash::from_hex("").is_err());
    }

    #[test]
    fn conversions_agree() {
        let mut hasher = Whirlpool::new();
        hasher.update(b"abc");
        let from_hasher = WhirlpoolHash::from(hasher.clone());
        let from_output = WhirlpoolHash::from(hasher.finalize());

        assert_eq!(from_hasher, from_output);
        assert_eq!(
            from_hasher.into_bytes(),
            hex!(
                "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c"
                "7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5"
            )
        );
        assert_eq!(from_output.as_ref(), &from_output.as_bytes()[..]);
    }

    #[test]
    fn debug_shows_hex() {
        let hash = WhirlpoolHash::from_bytes([0xab; 64]);
        assert!(format!("{:?}", hash).starts_with("WhirlpoolHash(abab"));
    }
}
