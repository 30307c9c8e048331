use std::io::Cursor;

use crate::cursor::AdvanceCursor;
use crate::{bitpack, helpers, IntegerCodec, SkipPackResult, SkippableCodec};

/// Elements per `BinaryPacking` block: four 32-integer lanes.
pub const BLOCK_SIZE: u32 = 128;

/// Fixed-bit block packing codec.
///
/// Each 128-element block is stored as one descriptor word carrying the bit
/// widths of its four 32-integer lanes (one byte per lane, most significant
/// first), followed by the lanes packed at their own widths. Input below a
/// whole block is not consumed; pair with a tail codec through
/// [`Composition`](crate::Composition) for arbitrary lengths.
#[derive(Debug)]
pub struct BinaryPacking;

impl BinaryPacking {
    /// Creates a new instance
    pub fn new() -> BinaryPacking {
        BinaryPacking
    }
}

impl Default for BinaryPacking {
    fn default() -> Self {
        BinaryPacking::new()
    }
}

impl SkippableCodec for BinaryPacking {
    fn headless_compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        let inlength = helpers::greatest_multiple(input_length, BLOCK_SIZE);
        if inlength == 0 {
            // Below the minimum block, consume nothing
            return Ok(());
        }
        let mut tmp_outpos = output_offset.index();
        let mut s = input_offset.index();
        let final_inpos = s + inlength as usize;
        while s < final_inpos {
            let widths: [u8; 4] = std::array::from_fn(|lane| {
                helpers::max_bits(input, s + lane * 32, 32) as u8
            });
            output[tmp_outpos] = (u32::from(widths[0]) << 24)
                | (u32::from(widths[1]) << 16)
                | (u32::from(widths[2]) << 8)
                | u32::from(widths[3]);
            tmp_outpos += 1;
            for (lane, &width) in widths.iter().enumerate() {
                bitpack::pack32(input, s + lane * 32, output, tmp_outpos, width);
                tmp_outpos += width as usize;
            }
            s += BLOCK_SIZE as usize;
        }
        input_offset.add(inlength);
        output_offset.set_position(tmp_outpos as u64);
        Ok(())
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
        let outlength = helpers::greatest_multiple(num, BLOCK_SIZE);
        let mut tmp_inpos = input_offset.index();
        let mut s = output_offset.index();
        let final_outpos = s + outlength as usize;
        while s < final_outpos {
            let descriptor = input[tmp_inpos];
            tmp_inpos += 1;
            let widths = [
                (descriptor >> 24) as u8,
                (descriptor >> 16) as u8,
                (descriptor >> 8) as u8,
                descriptor as u8,
            ];
            for (lane, &width) in widths.iter().enumerate() {
                bitpack::unpack32(input, tmp_inpos, output, s + lane * 32, width);
                tmp_inpos += width as usize;
            }
            s += BLOCK_SIZE as usize;
        }
        input_offset.set_position(tmp_inpos as u64);
        output_offset.set_position(s as u64);
        Ok(())
    }
}

impl IntegerCodec for BinaryPacking {
    fn compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        let inlength = helpers::greatest_multiple(input_length, BLOCK_SIZE);
        if inlength == 0 {
            return Ok(());
        }
        output[output_offset.index()] = inlength;
        output_offset.increment();
        self.headless_compress(input, inlength, input_offset, output, output_offset)
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
        let outlength = input[input_offset.index()];
        input_offset.increment();
        self.headless_uncompress(
            input,
            input_length - 1,
            input_offset,
            output,
            output_offset,
            outlength,
        )
    }
}
