use std::io::Cursor;

use crate::SkipPackResult;

/// Integer compression/decompression over caller-owned word buffers.
///
/// Both operations advance the passed cursors by exactly what they consumed
/// and produced, so repeated calls against the same buffers chain naturally.
/// Codecs hold no buffer-specific state between calls.
///
/// A codec with a minimum block size consumes only the greatest multiple of
/// that block size per call; when fewer elements are offered it consumes
/// zero and leaves them for a fallback codec (see
/// [`Composition`](crate::Composition)).
///
/// Positions or lengths that run past a buffer are caller errors and fault
/// immediately via slice indexing rather than truncating silently.
pub trait IntegerCodec {
    /// Compresses `input_length` integers read at `input_offset`, writing
    /// compressed words at `output_offset`.
    fn compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()>;

    /// Decompresses `input_length` words read at `input_offset`, writing
    /// the reconstructed integers at `output_offset`. Must reproduce the
    /// compressed integers bit-for-bit.
    fn uncompress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()>;
}
