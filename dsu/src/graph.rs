//! Connectivity questions over plain undirected edge lists.

use crate::error::DsuError;
use crate::forest::DisjointSets;

fn connect(n: usize, edges: &[(usize, usize)]) -> Result<DisjointSets, DsuError> {
    let mut uf = DisjointSets::new(n);
    for &(u, v) in edges {
        uf.union(u, v)?;
    }
    Ok(uf)
}

/// Number of connected components among `n` vertices.
pub fn count_components(n: usize, edges: &[(usize, usize)]) -> Result<usize, DsuError> {
    Ok(connect(n, edges)?.component_count())
}

/// First edge, in input order, that closes a cycle.
pub fn redundant_connection(
    n: usize,
    edges: &[(usize, usize)],
) -> Result<Option<(usize, usize)>, DsuError> {
    let mut uf = DisjointSets::new(n);
    for &(u, v) in edges {
        if !uf.union(u, v)? {
            return Ok(Some((u, v)));
        }
    }
    Ok(None)
}

/// Whether the edges form a single tree spanning all `n` vertices.
pub fn is_valid_tree(n: usize, edges: &[(usize, usize)]) -> Result<bool, DsuError> {
    if n == 0 || edges.len() != n - 1 {
        return Ok(false);
    }
    Ok(redundant_connection(n, edges)?.is_none())
}
