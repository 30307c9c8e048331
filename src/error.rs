use thiserror::Error;

/// Alias for the result type of `skippack` operations.
pub type SkipPackResult<T> = Result<T, SkipPackError>;

/// Errors that can occur when using the `skippack` codecs.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SkipPackError {
    /// Not enough data in the input buffer
    #[error("Not enough data in the input buffer")]
    NotEnoughData,

    /// Output buffer too small
    #[error("Output buffer too small")]
    OutputBufferTooSmall,

    /// A block header claims more payload words than the buffer holds.
    /// The stream must be treated as untrustworthy from this point on.
    #[error("Corrupt block header: {claimed} words claimed, {available} available")]
    CorruptBlockHeader {
        /// Payload length read from the header word
        claimed: u32,
        /// Words actually remaining in the input buffer
        available: u32,
    },

    /// Invalid input length
    #[error("Invalid input length {0}")]
    InvalidInputLength(usize),
}
