use std::io::Cursor;

use crate::{
    BinaryPacking, Composition, IntegerCodec, JustCopy, SkipPackResult, SkippableCodec,
    SliceCodec, VariableByte,
};

/// Type-erased wrapper for the shipped codecs.
///
/// Lets heterogeneous codecs live in one collection or config slot while
/// dispatching through the same capability traits.
pub enum Codec {
    /// [`BinaryPacking`] fixed-bit block codec
    BinaryPacking(BinaryPacking),
    /// [`VariableByte`] byte-aligned codec
    VariableByte(VariableByte),
    /// Pass-through codec (no compression)
    JustCopy(JustCopy),
    /// [`BinaryPacking`] blocks with a [`VariableByte`] tail, skippable
    Composed(Box<Composition<BinaryPacking, VariableByte>>),
}

impl IntegerCodec for Codec {
    fn compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        match self {
            Codec::BinaryPacking(bp) => {
                bp.compress(input, input_length, input_offset, output, output_offset)
            }
            Codec::VariableByte(vb) => {
                vb.compress(input, input_length, input_offset, output, output_offset)
            }
            Codec::JustCopy(jc) => {
                jc.compress(input, input_length, input_offset, output, output_offset)
            }
            Codec::Composed(c) => {
                c.compress(input, input_length, input_offset, output, output_offset)
            }
        }
    }

    fn uncompress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        match self {
            Codec::BinaryPacking(bp) => {
                bp.uncompress(input, input_length, input_offset, output, output_offset)
            }
            Codec::VariableByte(vb) => {
                vb.uncompress(input, input_length, input_offset, output, output_offset)
            }
            Codec::JustCopy(jc) => {
                jc.uncompress(input, input_length, input_offset, output, output_offset)
            }
            Codec::Composed(c) => {
                c.uncompress(input, input_length, input_offset, output, output_offset)
            }
        }
    }
}

impl SkippableCodec for Codec {
    fn headless_compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        match self {
            Codec::BinaryPacking(bp) => {
                bp.headless_compress(input, input_length, input_offset, output, output_offset)
            }
            Codec::VariableByte(vb) => {
                vb.headless_compress(input, input_length, input_offset, output, output_offset)
            }
            Codec::JustCopy(jc) => {
                jc.headless_compress(input, input_length, input_offset, output, output_offset)
            }
            Codec::Composed(c) => {
                c.headless_compress(input, input_length, input_offset, output, output_offset)
            }
        }
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
        match self {
            Codec::BinaryPacking(bp) => bp.headless_uncompress(
                input,
                input_length,
                input_offset,
                output,
                output_offset,
                num,
            ),
            Codec::VariableByte(vb) => vb.headless_uncompress(
                input,
                input_length,
                input_offset,
                output,
                output_offset,
                num,
            ),
            Codec::JustCopy(jc) => jc.headless_uncompress(
                input,
                input_length,
                input_offset,
                output,
                output_offset,
                num,
            ),
            Codec::Composed(c) => c.headless_uncompress(
                input,
                input_length,
                input_offset,
                output,
                output_offset,
                num,
            ),
        }
    }
}

impl SliceCodec<u32> for Codec {
    type Error = crate::SkipPackError;

    fn compress_to_slice<'out>(
        &mut self,
        input: &[u32],
        output: &'out mut [u32],
    ) -> Result<&'out [u32], Self::Error> {
        let mut output_offset = Cursor::new(0);
        let input_length = input
            .len()
            .try_into()
            .map_err(|_| Self::Error::InvalidInputLength(input.len()))?;

        self.compress(
            input,
            input_length,
            &mut Cursor::new(0),
            output,
            &mut output_offset,
        )?;

        let written = output_offset.position() as usize;
        Ok(&output[..written])
    }

    fn decompress_to_slice<'out>(
        &mut self,
        input: &[u32],
        output: &'out mut [u32],
    ) -> Result<&'out [u32], Self::Error> {
        let mut output_offset = Cursor::new(0);
        let input_length: u32 = input
            .len()
            .try_into()
            .map_err(|_| Self::Error::InvalidInputLength(input.len()))?;

        self.uncompress(
            input,
            input_length,
            &mut Cursor::new(0),
            output,
            &mut output_offset,
        )?;

        let written = output_offset.position() as usize;
        Ok(&output[..written])
    }
}

impl From<BinaryPacking> for Codec {
    fn from(bp: BinaryPacking) -> Self {
        Codec::BinaryPacking(bp)
    }
}

impl From<VariableByte> for Codec {
    fn from(vb: VariableByte) -> Self {
        Codec::VariableByte(vb)
    }
}

impl From<JustCopy> for Codec {
    fn from(jc: JustCopy) -> Self {
        Codec::JustCopy(jc)
    }
}

impl From<Composition<BinaryPacking, VariableByte>> for Codec {
    fn from(c: Composition<BinaryPacking, VariableByte>) -> Self {
        Codec::Composed(Box::new(c))
    }
}
