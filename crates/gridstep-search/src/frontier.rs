//! Frontier containers: FIFO queue, LIFO stack and a stable priority queue.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// FIFO queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the oldest item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// LIFO stack.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the most recently pushed item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// PriorityQueue
// ---------------------------------------------------------------------------

/// Heap entry ordered by `(priority, seq)`, smallest first.
#[derive(Debug, Clone)]
struct Ranked<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority, and
        // the earliest insertion among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with stable insertion order on ties.
///
/// Entries are never updated in place: a better priority for an item is
/// expressed by pushing it again, and callers skip the stale copy on pop.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Ranked<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Ranked {
            priority,
            seq,
            item,
        });
    }

    /// Remove the minimum-priority item, oldest first among ties.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|r| r.item)
    }

    /// Number of entries, stale duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Which container a strategy expands from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrontierKind {
    Queue,
    Stack,
    Priority,
}

/// A frontier of one of the three kinds.
#[derive(Debug, Clone)]
pub(crate) enum Frontier<T> {
    Queue(Queue<T>),
    Stack(Stack<T>),
    Priority(PriorityQueue<T>),
}

impl<T> Frontier<T> {
    pub(crate) fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::Queue => Self::Queue(Queue::new()),
            FrontierKind::Stack => Self::Stack(Stack::new()),
            FrontierKind::Priority => Self::Priority(PriorityQueue::new()),
        }
    }

    /// Insert `item`. `priority` is ignored by the queue and the stack.
    #[inline]
    pub(crate) fn push(&mut self, item: T, priority: f64) {
        match self {
            Self::Queue(q) => q.push(item),
            Self::Stack(s) => s.push(item),
            Self::Priority(pq) => pq.push(item, priority),
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        match self {
            Self::Queue(q) => q.pop(),
            Self::Stack(s) => s.pop(),
            Self::Priority(pq) => pq.pop(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Queue(q) => q.len(),
            Self::Stack(s) => s.len(),
            Self::Priority(pq) => pq.len(),
        }
    }
}
