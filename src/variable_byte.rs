use std::io::Cursor;

use bytes::{Buf as _, BufMut as _, BytesMut};

use crate::cursor::AdvanceCursor;
use crate::{IntegerCodec, SkipPackError, SkipPackResult, SkippableCodec};

/// Variable-byte codec: 7 value bits per byte, high bit marks continuation.
///
/// Output is padded to a word boundary with 0xFF filler bytes, which decode
/// as an unterminated value and are dropped. Handles any input length, so
/// it is the usual tail half of a [`Composition`](crate::Composition).
#[derive(Debug)]
pub struct VariableByte;

impl VariableByte {
    /// Creates a new instance
    pub fn new() -> VariableByte {
        VariableByte
    }

    fn byte_at(input: &[u32], base: usize, offset: usize) -> u8 {
        (input[base + offset / 4] >> ((offset % 4) * 8)) as u8
    }
}

impl Default for VariableByte {
    fn default() -> Self {
        VariableByte::new()
    }
}

impl SkippableCodec for VariableByte {
    fn headless_compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        if input_length == 0 {
            // Return early if there is no data to compress
            return Ok(());
        }
        let mut buf = BytesMut::with_capacity(input_length as usize * 5);
        let start = input_offset.index();
        for &value in &input[start..start + input_length as usize] {
            let mut v = value;
            while v >= 0x80 {
                buf.put_u8((v & 0x7F) as u8 | 0x80);
                v >>= 7;
            }
            buf.put_u8(v as u8);
        }
        while buf.len() % 4 != 0 {
            buf.put_u8(0xFF);
        }
        let words = buf.len() / 4;
        let out_start = output_offset.index();
        if out_start + words > output.len() {
            return Err(SkipPackError::OutputBufferTooSmall);
        }
        for word in &mut output[out_start..out_start + words] {
            *word = buf.get_u32_le();
        }
        output_offset.add(words as u32);
        input_offset.add(input_length);
        Ok(())
    }

    fn headless_uncompress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
        num: u32,
    ) -> SkipPackResult<()> {
        if num == 0 {
            return Ok(());
        }
        let start = input_offset.index();
        let byte_budget = input_length as usize * 4;
        let mut byte_pos = 0;
        let mut tmp_outpos = output_offset.index();
        for _ in 0..num {
            let mut v = 0u32;
            let mut shift = 0;
            loop {
                if byte_pos >= byte_budget {
                    return Err(SkipPackError::NotEnoughData);
                }
                let c = Self::byte_at(input, start, byte_pos);
                byte_pos += 1;
                v |= u32::from(c & 0x7F) << shift;
                if c < 0x80 {
                    break;
                }
                shift += 7;
            }
            output[tmp_outpos] = v;
            tmp_outpos += 1;
        }
        // Padding rounds every call out to a whole word
        input_offset.add(byte_pos.div_ceil(4) as u32);
        output_offset.set_position(tmp_outpos as u64);
        Ok(())
    }
}

impl IntegerCodec for VariableByte {
    fn compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        self.headless_compress(input, input_length, input_offset, output, output_offset)
    }

    fn uncompress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        if input_length == 0 {
            return Ok(());
        }
        let start = input_offset.index();
        let byte_length = input_length as usize * 4;
        let mut byte_pos = 0;
        let mut tmp_outpos = output_offset.index();
        let mut v = 0u32;
        let mut shift = 0;
        // A value left unterminated at the end of the buffer is 0xFF
        // padding and is dropped
        while byte_pos < byte_length {
            let c = Self::byte_at(input, start, byte_pos);
            byte_pos += 1;
            v |= u32::from(c & 0x7F) << shift;
            if c < 0x80 {
                output[tmp_outpos] = v;
                tmp_outpos += 1;
                v = 0;
                shift = 0;
            } else {
                shift += 7;
            }
        }
        output_offset.set_position(tmp_outpos as u64);
        input_offset.add(input_length);
        Ok(())
    }
}
