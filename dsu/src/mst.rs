use num_traits::CheckedAdd;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::DsuError;
use crate::forest::DisjointSets;

/// A weighted undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Self { from, to, weight }
    }
}

/// Result of running Kruskal over a vertex set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MstOutcome<W> {
    /// Every vertex is connected by `edges`, which weigh `total` together.
    Spanning { total: W, edges: Vec<Edge<W>> },
    /// The edges ran out first; `total` is the weight of the spanning forest
    /// over `components` trees.
    Disconnected { total: W, components: usize },
}

impl<W: Copy> MstOutcome<W> {
    /// Total weight of the spanning tree, if there is one.
    pub fn spanning_total(&self) -> Option<W> {
        match self {
            MstOutcome::Spanning { total, .. } => Some(*total),
            MstOutcome::Disconnected { .. } => None,
        }
    }

    #[inline]
    pub fn is_spanning(&self) -> bool {
        matches!(self, MstOutcome::Spanning { .. })
    }
}

/// Build a minimum spanning tree over `n` vertices with Kruskal's algorithm.
///
/// Edges are taken in ascending weight order and kept when they join two
/// different components, stopping once `n - 1` edges are kept. Ties are
/// broken arbitrarily, which can change the tree but never its weight.
///
/// Fails with `InvalidArgument` if the running total overflows `W`.
pub fn kruskal<W>(n: usize, mut edges: Vec<Edge<W>>) -> Result<MstOutcome<W>, DsuError>
where
    W: Copy + Ord + CheckedAdd + Default,
{
    for edge in &edges {
        for endpoint in [edge.from, edge.to] {
            if endpoint >= n {
                return Err(DsuError::IndexOutOfRange {
                    index: endpoint,
                    len: n,
                });
            }
        }
    }

    edges.sort_unstable_by_key(|e| e.weight);

    let target = n.saturating_sub(1);
    let mut uf = DisjointSets::new(n);
    let mut total = W::default();
    let mut tree = Vec::with_capacity(target);

    for edge in edges {
        if tree.len() == target {
            break;
        }
        if uf.union(edge.from, edge.to)? {
            total = total.checked_add(&edge.weight).ok_or_else(|| {
                DsuError::InvalidArgument(format!(
                    "spanning tree weight overflows after {} edges",
                    tree.len()
                ))
            })?;
            tree.push(edge);
        }
    }

    if tree.len() == target {
        Ok(MstOutcome::Spanning { total, edges: tree })
    } else {
        log::debug!(
            "spanning forest over {n} vertices has {} trees",
            uf.component_count()
        );
        Ok(MstOutcome::Disconnected {
            total,
            components: uf.component_count(),
        })
    }
}

/// Manhattan distance; each axis fits in `u64`, so the sum fits in `u128`.
#[inline]
fn manhattan(a: [i64; 2], b: [i64; 2]) -> u128 {
    a[0].abs_diff(b[0]) as u128 + a[1].abs_diff(b[1]) as u128
}

/// Complete graph over `points` weighted by Manhattan distance.
///
/// Edges are listed as `(i, j)` with `i < j`, in lexicographic order.
pub fn manhattan_edges(points: &[[i64; 2]]) -> Vec<Edge<u128>> {
    let n = points.len();
    let row = move |i: usize| {
        (i + 1..n).map(move |j| Edge::new(i, j, manhattan(points[i], points[j])))
    };

    #[cfg(feature = "parallel")]
    let edges = (0..n).into_par_iter().flat_map_iter(row).collect();

    #[cfg(not(feature = "parallel"))]
    let edges = (0..n).flat_map(row).collect();

    edges
}

/// Minimum total Manhattan length of wiring that connects every point.
pub fn min_cost_connect_points(points: &[[i64; 2]]) -> Result<u128, DsuError> {
    match kruskal(points.len(), manhattan_edges(points))? {
        MstOutcome::Spanning { total, .. } => Ok(total),
        MstOutcome::Disconnected { components, .. } => Err(DsuError::InvalidArgument(format!(
            "complete graph over {} points left {components} components",
            points.len()
        ))),
    }
}
