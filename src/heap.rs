//! Array-backed binary heap with a configurable ordering direction.
//!
//! Elements are laid out as a complete binary tree: node `i` has children
//! at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`. Every node
//! compares no worse than its children under the heap's [`Direction`].
//!
//! Elements that compare equal have no defined relative order: popping a
//! heap is not a stable sort.

use crate::error::{Result, TaskheapError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Root holds the minimum.
    Ascending,
    /// Root holds the maximum.
    #[default]
    Descending,
}

impl Direction {
    /// Returns true when `a` must sit strictly above `b`.
    fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        match (self, a.cmp(b)) {
            (Direction::Ascending, Ordering::Less) => true,
            (Direction::Descending, Ordering::Greater) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for Direction {
    type Err = TaskheapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" | "min" => Ok(Direction::Ascending),
            "descending" | "desc" | "max" => Ok(Direction::Descending),
            _ => Err(TaskheapError::Config(format!("Invalid direction: {}", s))),
        }
    }
}

/// Whether a caller vouches for the heap order of a bulk input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The input must already satisfy the heap property; violations are errors.
    Trusted,
    /// The input may be in any order and is repaired with a linear heapify.
    Untrusted,
}

#[derive(Debug, Clone)]
pub struct PriorityHeap<T> {
    elements: Vec<T>,
    direction: Direction,
}

impl<T: Ord> PriorityHeap<T> {
    pub fn new(direction: Direction) -> Self {
        Self {
            elements: Vec::new(),
            direction,
        }
    }

    /// Builds a heap from an existing sequence.
    ///
    /// With [`Layout::Trusted`] the sequence is checked in O(n) and rejected
    /// with [`TaskheapError::HeapViolation`] if any parent/child pair is out
    /// of order. With [`Layout::Untrusted`] such a sequence is heapified
    /// instead. Either way the result holds exactly the input elements.
    pub fn from_sequence(items: Vec<T>, direction: Direction, layout: Layout) -> Result<Self> {
        match layout {
            Layout::Trusted => Self::from_trusted(items, direction),
            Layout::Untrusted => Ok(Self::from_untrusted(items, direction)),
        }
    }

    pub fn from_trusted(items: Vec<T>, direction: Direction) -> Result<Self> {
        let heap = Self {
            elements: items,
            direction,
        };
        match heap.first_violation() {
            Some((parent, child)) => Err(TaskheapError::HeapViolation { parent, child }),
            None => Ok(heap),
        }
    }

    pub fn from_untrusted(items: Vec<T>, direction: Direction) -> Self {
        let mut heap = Self {
            elements: items,
            direction,
        };
        if heap.first_violation().is_some() {
            tracing::debug!(len = heap.elements.len(), %direction, "Heapifying unordered input");
            heap.heapify();
        }
        heap
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn push(&mut self, item: T) {
        self.elements.push(item);
        self.up_heapify(self.elements.len() - 1);
    }

    /// Returns the best element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.elements.first().ok_or(TaskheapError::EmptyHeap)
    }

    /// Removes and returns the best element.
    pub fn pop(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(TaskheapError::EmptyHeap);
        }
        let top = self.elements.swap_remove(0);
        self.down_heapify(0);
        Ok(top)
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The backing array in heap order, not sorted order.
    pub fn snapshot(&self) -> &[T] {
        &self.elements
    }

    /// Drains the heap in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    pub fn is_valid(&self) -> bool {
        self.first_violation().is_none()
    }

    /// Finds the first `(parent, child)` index pair where the child should
    /// sit above its parent.
    pub fn first_violation(&self) -> Option<(usize, usize)> {
        (1..self.elements.len())
            .map(|child| ((child - 1) / 2, child))
            .find(|&(parent, child)| {
                self.direction
                    .prefers(&self.elements[child], &self.elements[parent])
            })
    }

    fn heapify(&mut self) {
        if self.elements.len() < 2 {
            return;
        }
        let last_parent = (self.elements.len() - 2) / 2;
        for i in (0..=last_parent).rev() {
            self.down_heapify(i);
        }
    }

    fn up_heapify(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self
                .direction
                .prefers(&self.elements[i], &self.elements[parent])
            {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn down_heapify(&mut self, mut i: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut target = i;

            if left < len
                && self
                    .direction
                    .prefers(&self.elements[left], &self.elements[target])
            {
                target = left;
            }
            if right < len
                && self
                    .direction
                    .prefers(&self.elements[right], &self.elements[target])
            {
                target = right;
            }
            if target == i {
                break;
            }
            self.elements.swap(i, target);
            i = target;
        }
    }
}

impl<T: Ord> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl<T: Ord> Extend<T> for PriorityHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
