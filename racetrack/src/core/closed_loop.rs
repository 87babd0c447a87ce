use anyhow::Context;
use helpers::general::InputValueError;

/// LoopCursor centralizes the wrap-around indexing of a closed loop with `len` elements: the
/// successor of the last element is the first one and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopCursor {
    len: usize,
}

impl LoopCursor {
    pub fn new(len: usize) -> anyhow::Result<LoopCursor> {
        if len == 0 {
            return Err(InputValueError).context("A closed loop requires at least one element!");
        }

        Ok(LoopCursor { len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next_index(&self, idx: usize) -> usize {
        (idx + 1) % self.len
    }

    pub fn prev_index(&self, idx: usize) -> usize {
        (idx + self.len - 1) % self.len
    }

    /// neighbors yields (prev, idx, next) for every index of the loop in ascending order.
    pub fn neighbors(&self) -> impl Iterator<Item = (usize, usize, usize)> {
        let cursor = *self;
        (0..self.len).map(move |idx| (cursor.prev_index(idx), idx, cursor.next_index(idx)))
    }

    /// segments yields (start, end) for every segment of the loop in ascending order, including
    /// the closing segment (len - 1, 0).
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> {
        let cursor = *self;
        (0..self.len).map(move |idx| (idx, cursor.next_index(idx)))
    }
}
