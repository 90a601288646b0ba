/// Binary min-heap over `(item, priority)` pairs for Dijkstra and Prim.
///
/// There is no decrease-key: algorithms re-push an item whenever its priority
/// improves and skip stale entries after popping (lazy deletion), so every
/// consumer must check its own finalized set before acting on a popped item.
/// Ties pop in arbitrary heap order.
#[derive(Debug)]
pub struct MinHeap<T> {
    heap: Vec<(T, u64)>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, item: T, priority: u64) {
        self.heap.push((item, priority));
        self.sift_up(self.heap.len() - 1);
    }

    pub fn pop(&mut self) -> Option<(T, u64)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        min
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].1 >= self.heap[parent].1 {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut min_index = index;
            let left = 2 * index + 1;
            let right = 2 * index + 2;

            if left < self.heap.len() && self.heap[left].1 < self.heap[min_index].1 {
                min_index = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[min_index].1 {
                min_index = right;
            }
            if min_index == index {
                break;
            }

            self.heap.swap(index, min_index);
            index = min_index;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut heap = MinHeap::new();
        for (item, priority) in [("d", 40), ("a", 10), ("c", 30), ("b", 20), ("e", 50)] {
            heap.push(item, priority);
        }

        let mut popped = Vec::new();
        while let Some((item, priority)) = heap.pop() {
            popped.push((item, priority));
        }

        assert_eq!(
            popped,
            vec![("a", 10), ("b", 20), ("c", 30), ("d", 40), ("e", 50)]
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut heap = MinHeap::<u32>::new();
        assert!(heap.pop().is_none());

        heap.push(7, 1);
        assert_eq!(heap.pop(), Some((7, 1)));
        assert!(heap.pop().is_none());
    }

    #[test]
    fn duplicate_items_with_different_priorities_coexist() {
        // lazy-deletion usage pattern: same node pushed with an improved
        // priority, stale entry still present
        let mut heap = MinHeap::new();
        heap.push(1u32, 10);
        heap.push(2, 4);
        heap.push(1, 3);

        assert_eq!(heap.pop(), Some((1, 3)));
        assert_eq!(heap.pop(), Some((2, 4)));
        assert_eq!(heap.pop(), Some((1, 10)));
    }

    #[test]
    fn interleaved_push_pop_keeps_heap_property() {
        let mut heap = MinHeap::new();
        for priority in [9u64, 3, 7, 1] {
            heap.push(priority, priority);
        }

        assert_eq!(heap.pop(), Some((1, 1)));
        heap.push(2, 2);
        heap.push(0, 0);
        assert_eq!(heap.pop(), Some((0, 0)));
        assert_eq!(heap.pop(), Some((2, 2)));
        assert_eq!(heap.pop(), Some((3, 3)));
        assert_eq!(heap.pop(), Some((7, 7)));
        assert_eq!(heap.pop(), Some((9, 9)));
    }
}
