/// Errors returned by the digest parsing and I/O helpers.
///
/// Hashing bytes never fails; only turning text back into a digest or
/// reading the input from somewhere else can.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The text is not 128 hexadecimal characters.
    #[error("invalid hex digest: {0}")]
    InvalidHex(hex::FromHexError),

    /// Reading the message failed.
    #[cfg(feature = "std")]
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidHex(err)
    }
}
