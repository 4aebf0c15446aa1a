//! Bounded stack of full-canvas snapshots.
//!
//! New snapshots go on the back and are popped from the back; once the stack
//! exceeds its depth the oldest snapshot is dropped from the front.

use crate::types::FrameBuffer;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct UndoStack {
    snapshots: VecDeque<FrameBuffer>,
    max_depth: usize,
}

impl UndoStack {
    /// Create with a custom maximum depth (at least 1)
    pub fn with_depth(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            snapshots: VecDeque::with_capacity(max_depth + 1),
            max_depth,
        }
    }

    /// Push a snapshot, evicting the oldest when over depth.
    pub fn push(&mut self, snapshot: FrameBuffer) {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > self.max_depth {
            self.snapshots.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<FrameBuffer> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    fn frame(tag: u8) -> FrameBuffer {
        FrameBuffer::new(4, 4, Rgb(tag, 0, 0))
    }

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = UndoStack::with_depth(20);
        for tag in 0..20 {
            stack.push(frame(tag));
        }
        for tag in (0..20).rev() {
            assert_eq!(stack.pop(), Some(frame(tag)));
        }
        assert!(stack.pop().is_none());
    }

    #[test]
    fn overflow_discards_oldest() {
        let mut stack = UndoStack::with_depth(20);
        for tag in 0..25 {
            stack.push(frame(tag));
        }
        assert_eq!(stack.len(), 20);

        let mut popped = Vec::new();
        while let Some(f) = stack.pop() {
            popped.push(f.pixels[0]);
        }
        let expected: Vec<u32> = (5..25).rev().map(|t| frame(t).pixels[0]).collect();
        assert_eq!(popped, expected);
    }

    #[test]
    fn depth_is_at_least_one() {
        let mut stack = UndoStack::with_depth(0);
        stack.push(frame(1));
        stack.push(frame(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Some(frame(2)));
    }
}
