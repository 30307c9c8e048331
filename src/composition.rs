use std::io::Cursor;

use crate::cursor::AdvanceCursor;
use crate::{IntegerCodec, SkipPackError, SkipPackResult, SkippableCodec};

/// Skippable composition of a bulk primary codec and a tail codec.
///
/// Every `compress` call emits one block: a single header word holding the
/// exact number of words the primary codec produced, then the primary
/// payload, then (only when the primary's alignment left elements over)
/// the tail codec's output, headerless. Because the header always equals
/// the primary payload length, a reader can jump over the block with
/// [`skip_block`] and never run the primary decoder.
///
/// The header is written even when the payload is empty (input shorter than
/// the primary's minimum block, or no input at all), so arbitrarily short
/// trailing blocks stay skippable.
///
/// The stream carries no record of which codec pair produced it.
/// Decompressing with a different pairing silently yields wrong data; the
/// pairing is part of the caller's format contract.
#[derive(Debug)]
pub struct Composition<P, T> {
    primary: P,
    tail: T,
}

impl<P, T> Composition<P, T> {
    /// Composes `primary` (bulk, alignment-constrained) with `tail`
    /// (arbitrary-length fallback).
    pub fn new(primary: P, tail: T) -> Composition<P, T> {
        Composition { primary, tail }
    }
}

impl<P: IntegerCodec, T: IntegerCodec> IntegerCodec for Composition<P, T> {
    fn compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        let header_slot = output_offset.index();
        if header_slot >= output.len() {
            return Err(SkipPackError::OutputBufferTooSmall);
        }
        output_offset.increment();
        let init_inpos = input_offset.position();
        let init_outpos = output_offset.position();

        self.primary
            .compress(input, input_length, input_offset, output, output_offset)?;
        output[header_slot] = (output_offset.position() - init_outpos) as u32;

        let consumed = (input_offset.position() - init_inpos) as u32;
        let remaining = input_length - consumed;
        if remaining > 0 {
            self.tail
                .compress(input, remaining, input_offset, output, output_offset)?;
        }
        Ok(())
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
        let header_slot = input_offset.index();
        let words = input[header_slot];
        input_offset.increment();
        let available = input_length - 1;
        if words > available || header_slot + 1 + words as usize > input.len() {
            return Err(SkipPackError::CorruptBlockHeader {
                claimed: words,
                available,
            });
        }
        if words > 0 {
            self.primary
                .uncompress(input, words, input_offset, output, output_offset)?;
        }
        // The header is authoritative for where the tail begins
        input_offset.set_position((header_slot + 1 + words as usize) as u64);

        let tail_words = available - words;
        if tail_words > 0 {
            self.tail
                .uncompress(input, tail_words, input_offset, output, output_offset)?;
        }
        Ok(())
    }
}

impl<P: SkippableCodec, T: SkippableCodec> SkippableCodec for Composition<P, T> {
    fn headless_compress(
        &mut self,
        input: &[u32],
        input_length: u32,
        input_offset: &mut Cursor<u32>,
        output: &mut [u32],
        output_offset: &mut Cursor<u32>,
    ) -> SkipPackResult<()> {
        let init_inpos = input_offset.position();
        self.primary
            .headless_compress(input, input_length, input_offset, output, output_offset)?;
        let remaining = input_length - (input_offset.position() - init_inpos) as u32;
        if remaining > 0 {
            self.tail
                .headless_compress(input, remaining, input_offset, output, output_offset)?;
        }
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
        let init_inpos = input_offset.position();
        let init_outpos = output_offset.position();
        self.primary.headless_uncompress(
            input,
            input_length,
            input_offset,
            output,
            output_offset,
            num,
        )?;
        let words_read = (input_offset.position() - init_inpos) as u32;
        let produced = (output_offset.position() - init_outpos) as u32;
        let remaining = num - produced;
        if remaining > 0 {
            self.tail.headless_uncompress(
                input,
                input_length - words_read,
                input_offset,
                output,
                output_offset,
                remaining,
            )?;
        }
        Ok(())
    }
}

/// Advances `input_offset` past one composed block without decoding it.
///
/// Reads the header word, jumps over the primary payload, and returns the
/// payload length in words. Tail output trailing the final block is not
/// covered by the header; traversing past it needs the tail codec's own
/// skip or decode strategy.
pub fn skip_block(input: &[u32], input_offset: &mut Cursor<u32>) -> SkipPackResult<u32> {
    let header_slot = input_offset.index();
    if header_slot >= input.len() {
        return Err(SkipPackError::NotEnoughData);
    }
    let words = input[header_slot];
    let available = (input.len() - header_slot - 1) as u32;
    if words > available {
        return Err(SkipPackError::CorruptBlockHeader {
            claimed: words,
            available,
        });
    }
    input_offset.add(1 + words);
    Ok(words)
}
