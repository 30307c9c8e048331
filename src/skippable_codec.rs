use std::io::Cursor;

use crate::{IntegerCodec, SkipPackResult};

/// Headerless compression for seekable streams.
///
/// The headless variants write and read no length information of their own;
/// the caller tracks element counts externally. This is what lets an outer
/// layer (the [`Composition`](crate::Composition) header word) delimit
/// blocks so that a reader can jump over them without decoding.
pub trait SkippableCodec: IntegerCodec {
    /// Compresses integers without writing any length header.
    fn headless_compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()>;

    /// Decompresses knowing only the expected output element count `num`,
    /// not the original input length.
    ///
    /// `input_length` bounds how many compressed words may be read.
    fn headless_uncompress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
        num: u32,
    ) -> SkipPackResult<()>;
}
