/// Disjoint-set forest with path compression and union by rank, used by
/// Kruskal's algorithm for cycle detection. Elements are dense indices
/// `0..n`; callers are responsible for keeping them in range.
#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // second pass: flatten the chain onto the root
        let mut current = x;
        while self.parent[current] != root {
            current = std::mem::replace(&mut self.parent[current], root);
        }

        root
    }

    /// Merges the sets containing `x` and `y`. Returns false when they were
    /// already in the same set, which signals that an edge between them would
    /// close a cycle.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn singletons_are_their_own_representative() {
        let mut ds = DisjointSet::new(4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn union_merges_and_second_union_signals_cycle() {
        let mut ds = DisjointSet::new(4);

        assert!(ds.union(0, 1));
        assert_eq!(ds.find(0), ds.find(1));

        // repeated union is a no-op and reports the would-be cycle
        assert!(!ds.union(0, 1));
        assert!(!ds.union(1, 0));

        assert!(ds.union(2, 3));
        assert!(ds.union(1, 2));
        assert!(!ds.union(3, 0));
        assert_eq!(ds.find(3), ds.find(0));
    }

    #[test]
    fn long_chain_compresses() {
        let mut ds = DisjointSet::new(64);
        for i in 1..64 {
            ds.union(i - 1, i);
        }

        let root = ds.find(0);
        for i in 0..64 {
            assert_eq!(ds.find(i), root);
        }
    }
}
