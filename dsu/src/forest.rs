use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::DsuError;

/// Rule deciding which of two roots survives a union.
///
/// The rule only shapes the trees. Connectivity answers are identical under
/// every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnionPolicy {
    /// Lower rank attaches under higher rank; on a tie the left root survives
    /// and its rank grows by one. Tree height stays below log2(len).
    #[default]
    ByRank,
    /// Smaller component attaches under the larger one; ties keep the left root.
    BySize,
    /// The root with the smaller key survives, whatever the tree shapes.
    ///
    /// Without a comparison supplied through [`DisjointSets::union_by`] the key
    /// is the index itself. Only path compression bounds the cost here, so an
    /// adversarial sequence can build a linear chain before the first `find`
    /// flattens it.
    ByKey,
}

/// Disjoint-set forest over the indices `0..len` with full path compression.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u32>,
    /// Component size, valid at roots.
    size: Vec<usize>,
    components: usize,
    policy: UnionPolicy,
}

impl DisjointSets {
    /// Create a forest of `len` singletons using [`UnionPolicy::ByRank`].
    pub fn new(len: usize) -> Self {
        Self::with_policy(len, UnionPolicy::default())
    }

    /// Create a forest of `len` singletons using the given policy.
    pub fn with_policy(len: usize, policy: UnionPolicy) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            size: vec![1; len],
            components: len,
            policy,
        }
    }

    /// Create a forest from a signed length, rejecting negative values.
    pub fn try_with_len(len: i64, policy: UnionPolicy) -> Result<Self, DsuError> {
        let len = usize::try_from(len).map_err(|_| {
            DsuError::InvalidArgument(format!("forest length must be non-negative, got {len}"))
        })?;
        Ok(Self::with_policy(len, policy))
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    #[inline]
    pub fn policy(&self) -> UnionPolicy {
        self.policy
    }

    /// Number of disjoint components. O(1).
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    #[inline]
    fn check(&self, index: usize) -> Result<(), DsuError> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(DsuError::IndexOutOfRange {
                index,
                len: self.parent.len(),
            })
        }
    }

    /// Find the root of the component containing `x`.
    ///
    /// Every node on the path to the root is reparented directly onto it.
    pub fn find(&mut self, x: usize) -> Result<usize, DsuError> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    fn find_root(&mut self, mut id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: collapse the path
        while self.parent[id] != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }

        root
    }

    /// Merge the components containing `x` and `y`.
    ///
    /// Returns `false` when they were already connected; the forest is left
    /// unchanged in that case.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, DsuError> {
        self.union_by(x, y, |a, b| a.cmp(&b))
    }

    /// Merge the components containing `x` and `y`, ordering roots with `order`.
    ///
    /// `order` receives the two roots and is consulted only under
    /// [`UnionPolicy::ByKey`]: the root ordered `Less` (the left one on
    /// `Equal`) survives. The other policies ignore it.
    pub fn union_by<F>(&mut self, x: usize, y: usize, order: F) -> Result<bool, DsuError>
    where
        F: FnOnce(usize, usize) -> Ordering,
    {
        self.check(x)?;
        self.check(y)?;

        let rx = self.find_root(x);
        let ry = self.find_root(y);
        if rx == ry {
            return Ok(false);
        }

        let (root, child) = match self.policy {
            UnionPolicy::ByRank => match self.rank[rx].cmp(&self.rank[ry]) {
                Ordering::Less => (ry, rx),
                Ordering::Greater => (rx, ry),
                Ordering::Equal => {
                    self.rank[rx] += 1;
                    (rx, ry)
                }
            },
            UnionPolicy::BySize => {
                if self.size[rx] < self.size[ry] {
                    (ry, rx)
                } else {
                    (rx, ry)
                }
            }
            UnionPolicy::ByKey => match order(rx, ry) {
                Ordering::Greater => (ry, rx),
                _ => (rx, ry),
            },
        };

        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.components -= 1;
        Ok(true)
    }

    /// Whether `x` and `y` are in the same component.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool, DsuError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Number of elements in the component containing `x`.
    pub fn component_size(&mut self, x: usize) -> Result<usize, DsuError> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    /// All roots in ascending order.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .collect()
    }

    /// Members of every component.
    ///
    /// Groups are ordered by their smallest member and members ascend within
    /// each group.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.components);

        for i in 0..self.parent.len() {
            let root = self.find_root(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(i);
        }

        groups
    }

    /// Return every element to its own singleton component.
    pub fn reset(&mut self) {
        for (i, p) in self.parent.iter_mut().enumerate() {
            *p = i;
        }
        self.rank.fill(0);
        self.size.fill(1);
        self.components = self.parent.len();
    }
}
