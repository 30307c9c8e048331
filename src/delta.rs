use std::ops::{Add, AddAssign, Sub};

/// Differential preprocessing for sorted sequences.
///
/// Sorted ID lists compress far better as gaps; these transforms are kept
/// separate from the codecs so any pairing can use them.
pub struct Delta;

impl Delta {
    /// Creates a new instance
    pub fn new() -> Delta {
        Delta
    }

    /// Replaces each element with its difference from the predecessor,
    /// in place. The first element is left untouched.
    pub fn delta<T>(data: &mut [T])
    where
        T: Copy + Sub<Output = T>,
    {
        for i in (1..data.len()).rev() {
            data[i] = data[i] - data[i - 1];
        }
    }

    /// Applies the inverse transform (a running prefix sum) in place,
    /// four elements per iteration.
    pub fn fast_inverse_delta<T>(data: &mut [T])
    where
        T: Copy + Add<Output = T> + AddAssign,
    {
        if data.is_empty() {
            return;
        }

        let sz0 = (data.len() / 4) * 4;
        let mut i = 1;

        if sz0 >= 4 {
            let mut a = data[0];
            while i < sz0 - 4 {
                a = {
                    data[i] += a;
                    data[i]
                };
                a = {
                    data[i + 1] += a;
                    data[i + 1]
                };
                a = {
                    data[i + 2] += a;
                    data[i + 2]
                };
                a = {
                    data[i + 3] += a;
                    data[i + 3]
                };
                i += 4;
            }
        }

        while i < data.len() {
            data[i] += data[i - 1];
            i += 1;
        }
    }
}

impl Default for Delta {
    fn default() -> Self {
        Delta::new()
    }
}
