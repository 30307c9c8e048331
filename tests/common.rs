use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

use skippack::{BinaryPacking, Codec, Composition, JustCopy, VariableByte};

pub fn get_codecs() -> Vec<(&'static str, Codec)> {
    vec![
        ("VariableByte", Codec::from(VariableByte::new())),
        ("JustCopy", Codec::from(JustCopy::new())),
        (
            "BinaryPacking + VariableByte",
            Codec::from(Composition::new(BinaryPacking::new(), VariableByte::new())),
        ),
    ]
}

pub fn test_input_sizes() -> Vec<usize> {
    // Block multiples and awkward remainders
    let mut sizes: Vec<usize> = (1..=6).map(|exp| (1usize << exp) * 128).collect();
    sizes.extend([1, 5, 127, 131, 1000]);
    sizes
}

pub fn get_test_cases(n: usize) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(14);

    vec![
        // Zeroes
        vec![0u32; n],
        // Same non-zero
        vec![14u32; n],
        // Ascending values
        (0..n).map(|i| i as u32).collect::<Vec<u32>>(),
        // Descending values
        (0..n).rev().map(|i| i as u32).collect::<Vec<u32>>(),
        // Bit-flipping pattern
        (0..n)
            .map(|i| ((i as u32) * 32) ^ ((i as u32) >> 1))
            .collect::<Vec<u32>>(),
        // Alternating large and small values
        (0..n)
            .map(|i| if i % 2 == 0 { 1 << 30 } else { 3 })
            .collect::<Vec<u32>>(),
        // Random u32 values
        (0..n)
            .map(|_| rng.random_range(0..u32::MAX))
            .collect::<Vec<u32>>(),
        // Spike in the middle
        (0..n)
            .map(|i| if i == n / 2 { u32::MAX } else { 1 })
            .collect::<Vec<u32>>(),
        // An empty vector
        Vec::new(),
    ]
}
