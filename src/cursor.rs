use std::io::Cursor;

/// Extension trait for `Cursor<u32>` used as a shared position cursor.
///
/// A single cursor is threaded by `&mut` through chained codec calls so
/// that each call observes where the previous one stopped. Advancement is
/// monotonic: codecs only ever move a cursor forward.
pub trait AdvanceCursor {
    /// Increments the cursor position by 1.
    fn increment(&mut self);
    /// Adds `n` to the cursor position.
    fn add(&mut self, n: u32);
    /// Current position as a buffer index.
    fn index(&self) -> usize;
}

impl AdvanceCursor for Cursor<u32> {
    fn increment(&mut self) {
        self.set_position(self.position() + 1); // Position needs to be a u64
    }

    fn add(&mut self, n: u32) {
        self.set_position(self.position() + u64::from(n));
    }

    fn index(&self) -> usize {
        self.position() as usize
    }
}
