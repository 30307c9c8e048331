use std::io::Cursor;

use crate::cursor::AdvanceCursor;
use crate::{IntegerCodec, SkipPackError, SkipPackResult, SkippableCodec};

/// Pass-through codec: output words are the input words, verbatim.
///
/// Useful as a baseline and as a degenerate composition half in tests.
#[derive(Debug)]
pub struct JustCopy;

impl JustCopy {
    /// Creates a new instance
    pub fn new() -> JustCopy {
        JustCopy
    }

    fn copy(
        input: &[u32],
        count: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        let in_start = input_offset.index();
        let out_start = output_offset.index();
        let count = count as usize;
        if out_start + count > output.len() {
            return Err(SkipPackError::OutputBufferTooSmall);
        }
        output[out_start..out_start + count].copy_from_slice(&input[in_start..in_start + count]);
        input_offset.add(count as u32);
        output_offset.add(count as u32);
        Ok(())
    }
}

impl Default for JustCopy {
    fn default() -> Self {
        JustCopy::new()
    }
}

impl SkippableCodec for JustCopy {
    fn headless_compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        Self::copy(input, input_length, input_offset, output, output_offset)
    }

    fn headless_uncompress(
        &mut self,
        input: &[u32],
        _input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
        num: u32,
    ) -> SkipPackResult<()> {
        Self::copy(input, num, input_offset, output, output_offset)
    }
}

impl IntegerCodec for JustCopy {
    fn compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        Self::copy(input, input_length, input_offset, output, output_offset)
    }

    fn uncompress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        Self::copy(input, input_length, input_offset, output, output_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_verbatim() {
        let data = vec![7u32, 8, 9, u32::MAX];
        let mut codec = JustCopy::new();
        let mut out = vec![0u32; 4];
        let mut input_offset = Cursor::new(0);
        let mut output_offset = Cursor::new(0);
        codec
            .compress(&data, 4, &mut input_offset, &mut out, &mut output_offset)
            .unwrap();
        assert_eq!(out, data);
        assert_eq!(input_offset.index(), 4);
        assert_eq!(output_offset.index(), 4);
    }

    #[test]
    fn rejects_short_output_buffer() {
        let data = vec![1u32; 8];
        let mut codec = JustCopy::new();
        let mut out = vec![0u32; 4];
        let mut input_offset = Cursor::new(0);
        let mut output_offset = Cursor::new(0);
        let result = codec.compress(&data, 8, &mut input_offset, &mut out, &mut output_offset);
        assert!(matches!(result, Err(SkipPackError::OutputBufferTooSmall)));
    }
}
