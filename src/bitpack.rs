//! Fixed-width packing primitives operating on 32-integer lanes.
//!
//! A lane of 32 values at width `b` occupies exactly `b` consecutive output
//! words, values laid out little-endian within and across words. Width 0
//! emits nothing, width 32 is a plain copy.

/// Packs `input[inpos..inpos + 32]` at bit width `width` into
/// `output[outpos..outpos + width]`.
///
/// Values wider than `width` bits are truncated; callers are expected to
/// have chosen `width` from [`crate::helpers::max_bits`].
pub fn pack32(input: &[u32], inpos: usize, output: &mut [u32], outpos: usize, width: u8) {
    let b = u32::from(width);
    if b == 0 {
        return;
    }
    if b == 32 {
        output[outpos..outpos + 32].copy_from_slice(&input[inpos..inpos + 32]);
        return;
    }
    let mask = (1u32 << b) - 1;
    for word in &mut output[outpos..outpos + b as usize] {
        *word = 0;
    }
    for k in 0..32u32 {
        let value = input[inpos + k as usize] & mask;
        let bit = k * b;
        let word = outpos + (bit / 32) as usize;
        let shift = bit % 32;
        output[word] |= value << shift;
        if shift + b > 32 {
            output[word + 1] |= value >> (32 - shift);
        }
    }
}

/// Unpacks 32 values at bit width `width` from `input[inpos..]` into
/// `output[outpos..outpos + 32]`. Inverse of [`pack32`].
pub fn unpack32(input: &[u32], inpos: usize, output: &mut [u32], outpos: usize, width: u8) {
    let b = u32::from(width);
    if b == 0 {
        output[outpos..outpos + 32].fill(0);
        return;
    }
    if b == 32 {
        output[outpos..outpos + 32].copy_from_slice(&input[inpos..inpos + 32]);
        return;
    }
    let mask = (1u32 << b) - 1;
    for k in 0..32u32 {
        let bit = k * b;
        let word = inpos + (bit / 32) as usize;
        let shift = bit % 32;
        let mut value = input[word] >> shift;
        if shift + b > 32 {
            value |= input[word + 1] << (32 - shift);
        }
        output[outpos + k as usize] = value & mask;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip_at_width(width: u8) {
        let mask = if width == 32 {
            u32::MAX
        } else {
            (1u32 << width) - 1
        };
        let input: Vec<u32> = (0..32u32)
            .map(|i| (i.wrapping_mul(2654435761)) & mask)
            .collect();
        let mut packed = vec![0u32; 32];
        pack32(&input, 0, &mut packed, 0, width);

        let mut unpacked = vec![0u32; 32];
        unpack32(&packed, 0, &mut unpacked, 0, width);
        assert_eq!(input, unpacked, "width {width}");
    }

    #[test]
    fn roundtrip_all_widths() {
        for width in 0..=32 {
            roundtrip_at_width(width);
        }
    }

    #[test]
    fn width_zero_emits_nothing() {
        let input = [0u32; 32];
        let mut packed = vec![0xDEADBEEFu32; 4];
        pack32(&input, 0, &mut packed, 0, 0);
        assert!(packed.iter().all(|&w| w == 0xDEADBEEF));

        let mut unpacked = vec![1u32; 32];
        unpack32(&packed, 0, &mut unpacked, 0, 0);
        assert!(unpacked.iter().all(|&v| v == 0));
    }

    #[test]
    fn packs_at_offsets() {
        let mut input = vec![0u32; 64];
        for (i, v) in input.iter_mut().enumerate().skip(32) {
            *v = (i as u32) & 0x3F;
        }
        let mut packed = vec![0u32; 16];
        pack32(&input, 32, &mut packed, 2, 6);

        let mut unpacked = vec![0u32; 40];
        unpack32(&packed, 2, &mut unpacked, 8, 6);
        assert_eq!(&unpacked[8..40], &input[32..64]);
    }

    #[test]
    fn truncates_to_width() {
        let input = [u32::MAX; 32];
        let mut packed = vec![0u32; 5];
        pack32(&input, 0, &mut packed, 0, 5);
        let mut unpacked = vec![0u32; 32];
        unpack32(&packed, 0, &mut unpacked, 0, 5);
        assert!(unpacked.iter().all(|&v| v == 31));
    }
}
