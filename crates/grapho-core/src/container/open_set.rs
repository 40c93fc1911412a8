use super::PriorityQueue;
use crate::graph::{SearchAlgorithm, Weight};
use std::collections::VecDeque;

/// Frontier of discovered-but-not-yet-expanded states.
///
/// The variant decides the expansion order; the traversal loop only sees
/// `push`/`pop`/`len`. `Queue` and `Stack` ignore the priority.
#[derive(Debug, Clone)]
pub enum OpenSet<T> {
    /// FIFO, drives breadth-first search
    Queue(VecDeque<T>),
    /// LIFO, drives depth-first search
    Stack(Vec<T>),
    /// Min-priority, drives Dijkstra and A*
    Heap(PriorityQueue<T>),
}

impl<T> OpenSet<T> {
    /// Build the container matching a search strategy
    pub fn for_algorithm(algorithm: SearchAlgorithm) -> Self {
        match algorithm {
            SearchAlgorithm::BreadthFirst => OpenSet::Queue(VecDeque::new()),
            SearchAlgorithm::DepthFirst => OpenSet::Stack(Vec::new()),
            SearchAlgorithm::Dijkstra | SearchAlgorithm::AStar => {
                OpenSet::Heap(PriorityQueue::new())
            }
        }
    }

    pub fn push(&mut self, item: T, priority: Weight) {
        match self {
            OpenSet::Queue(queue) => queue.push_back(item),
            OpenSet::Stack(stack) => stack.push(item),
            OpenSet::Heap(heap) => heap.push(item, priority),
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        match self {
            OpenSet::Queue(queue) => queue.pop_front(),
            OpenSet::Stack(stack) => stack.pop(),
            OpenSet::Heap(heap) => heap.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OpenSet::Queue(queue) => queue.len(),
            OpenSet::Stack(stack) => stack.len(),
            OpenSet::Heap(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
