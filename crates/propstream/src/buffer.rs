use alloc::vec::Vec;

/// Fixed-capacity FIFO of unconsumed input bytes.
///
/// Consumption only advances `head`; the consumed prefix is compacted away
/// when an append would otherwise grow the backing `Vec` past `capacity`, so
/// the allocation made at construction is never exceeded.
#[derive(Debug)]
pub(crate) struct Window {
    bytes: Vec<u8>,
    head: usize,
    capacity: usize,
}

impl Window {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len() - self.head
    }

    pub(crate) fn room(&self) -> usize {
        self.capacity - self.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[self.head..]
    }

    /// Appends as much of `data` as fits and returns how many bytes were taken.
    pub(crate) fn extend(&mut self, data: &[u8]) -> usize {
        let take = data.len().min(self.room());
        if self.head > 0 && self.bytes.len() + take > self.capacity {
            self.bytes.drain(..self.head);
            self.head = 0;
        }
        self.bytes.extend_from_slice(&data[..take]);
        take
    }

    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.len());
        self.head += n;
        if self.head == self.bytes.len() {
            self.clear();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
        self.head = 0;
    }
}
