#![doc = include_str!("../README.md")]

mod binary_packing;
mod bitpack;
mod codec;
mod composition;
mod cursor;
mod delta;
mod error;
mod helpers;
mod integer_codec;
mod just_copy;
mod skippable_codec;
mod variable_byte;

pub use binary_packing::{BinaryPacking, BLOCK_SIZE};
pub use bitpack::{pack32, unpack32};
pub use codec::Codec;
pub use composition::{skip_block, Composition};
pub use cursor::AdvanceCursor;
pub use delta::Delta;
pub use error::{SkipPackError, SkipPackResult};
pub use integer_codec::IntegerCodec;
pub use just_copy::JustCopy;
pub use skippable_codec::SkippableCodec;
pub use variable_byte::VariableByte;

/// Low-level compression interface using caller-provided buffers.
///
/// Codecs write into pre-allocated slices and return a sub-slice showing
/// exactly what was written, which allows buffer reuse across calls.
///
/// # Buffer Sizing
///
/// Caller must ensure output buffers are large enough. For compression,
/// `input.len() * 2 + 64` words is a safe estimate for the shipped codecs;
/// for decompression the caller knows the element count.
pub trait SliceCodec<In, Out = In> {
    /// Error type returned by compression/decompression operations.
    type Error;

    /// Compresses input into output buffer, returning slice of data written.
    fn compress_to_slice<'out>(
        &mut self,
        input: &[In],
        output: &'out mut [Out],
    ) -> Result<&'out [Out], Self::Error>;

    /// Decompresses input into output buffer, returning slice of data written.
    fn decompress_to_slice<'out>(
        &mut self,
        input: &[Out],
        output: &'out mut [In],
    ) -> Result<&'out [In], Self::Error>;
}
