//! Fixed-capacity trail buffer
//!
//! Holds the most recent `capacity` points of a trajectory; pushing into a
//! full buffer drops the oldest point

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Trail<T> {
    points: VecDeque<T>,
    capacity: usize,
}

impl<T> Trail<T> {
    /// `capacity` must be at least 1
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: T) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&T> {
        self.points.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.points.iter()
    }
}
