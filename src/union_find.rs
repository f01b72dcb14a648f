////////////////////////////////////////////////////////////////////////////////

/// Disjoint-set forest with union by size.
///
/// `union` compresses the paths it walks, so `find` stays a read-only root
/// walk and connectivity queries borrow the structure immutably. Weighted
/// linking keeps every walk logarithmic even between compressions.
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `len` singleton components, numbered `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the component containing `x`.
    ///
    /// # Panics
    ///
    /// If `x` is not a valid element index.
    pub fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the components containing `a` and `b`. Returns `false` if they
    /// already shared a component.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        let (small, large) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        self.parent[small] = large;
        self.size[large] += self.size[small];

        self.compress(a, large);
        self.compress(b, large);

        true
    }

    fn compress(&mut self, mut x: usize, root: usize) {
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
