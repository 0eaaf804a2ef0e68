/// Disjoint-set forest over arena indices, with union by rank and path
/// compression. Used to track equivalence of nodes and directed edges while
/// collecting graph automorphisms.
#[derive(Debug, Clone)]
pub struct Partition {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl Partition {
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
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    pub fn unite(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// The equivalence classes, ordered by their smallest member, with each
    /// class listed in ascending order.
    pub fn classes(&mut self) -> Vec<Vec<usize>> {
        let size = self.parent.len();
        let mut class_of_root = vec![usize::MAX; size];
        let mut classes: Vec<Vec<usize>> = Vec::new();
        for x in 0..size {
            let root = self.find(x);
            if class_of_root[root] == usize::MAX {
                class_of_root[root] = classes.len();
                classes.push(Vec::new());
            }
            classes[class_of_root[root]].push(x);
        }
        classes
    }
}
