/// Finds the greatest multiple of `factor` that is less than or equal to `value`.
pub fn greatest_multiple(value: u32, factor: u32) -> u32 {
    value - value % factor
}

/// Returns the number of bits needed to represent `i`.
/// Returns 0 for input 0.
pub fn bits(i: u32) -> u32 {
    32 - i.leading_zeros()
}

/// Returns the widest bit width needed by any of the `length` values
/// starting at `pos`.
pub fn max_bits(input: &[u32], pos: usize, length: usize) -> u32 {
    let mut accumulator = 0;
    for &value in &input[pos..pos + length] {
        accumulator |= value;
    }
    bits(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greatest_multiple_rounds_down() {
        assert_eq!(greatest_multiple(0, 128), 0);
        assert_eq!(greatest_multiple(127, 128), 0);
        assert_eq!(greatest_multiple(128, 128), 128);
        assert_eq!(greatest_multiple(300, 128), 256);
    }

    #[test]
    fn bits_counts_significant_bits() {
        assert_eq!(bits(0), 0);
        assert_eq!(bits(1), 1);
        assert_eq!(bits(127), 7);
        assert_eq!(bits(128), 8);
        assert_eq!(bits(u32::MAX), 32);
    }

    #[test]
    fn max_bits_over_a_range() {
        let data = [1, 2, 3, 255, 4];
        assert_eq!(max_bits(&data, 0, 3), 2);
        assert_eq!(max_bits(&data, 0, 4), 8);
        assert_eq!(max_bits(&data, 4, 1), 3);
    }
}
