use crate::error::DsuError;
use crate::forest::DisjointSets;

/// Whether a set of pairwise constraints can all hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Satisfiability {
    Satisfiable,
    Unsatisfiable,
}

impl Satisfiability {
    #[inline]
    pub fn is_satisfiable(self) -> bool {
        self == Satisfiability::Satisfiable
    }
}

/// Equal/differ constraints over `n` elements, encoded in a forest of `2n`.
///
/// Element `x` has a twin `x + n` standing for "not x". A "must differ"
/// constraint joins each side with the other's twin, so a later constraint
/// finding two elements already connected has found a contradiction.
#[derive(Debug, Clone)]
pub struct ComplementSets {
    n: usize,
    forest: DisjointSets,
    conflict: bool,
}

impl ComplementSets {
    /// Create constraints over `n` elements with none recorded.
    pub fn new(n: usize) -> Result<Self, DsuError> {
        let doubled = n.checked_mul(2).ok_or_else(|| {
            DsuError::InvalidArgument(format!("{n} elements cannot be doubled"))
        })?;
        Ok(Self {
            n,
            forest: DisjointSets::new(doubled),
            conflict: false,
        })
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    fn check(&self, x: usize) -> Result<(), DsuError> {
        if x < self.n {
            Ok(())
        } else {
            Err(DsuError::IndexOutOfRange {
                index: x,
                len: self.n,
            })
        }
    }

    /// The complement index of `x`, or of a complement index back to `x`.
    pub fn twin(&self, x: usize) -> Result<usize, DsuError> {
        if x < self.n {
            Ok(x + self.n)
        } else if x < 2 * self.n {
            Ok(x - self.n)
        } else {
            Err(DsuError::IndexOutOfRange {
                index: x,
                len: 2 * self.n,
            })
        }
    }

    /// Record that `u` and `v` must be equal.
    ///
    /// Returns `false` if they are already forced apart; the conflict is
    /// remembered and nothing is merged.
    pub fn must_equal(&mut self, u: usize, v: usize) -> Result<bool, DsuError> {
        self.check(u)?;
        self.check(v)?;
        if self.forest.connected(u, v + self.n)? {
            log::debug!("constraint {u} == {v} contradicts earlier constraints");
            self.conflict = true;
            return Ok(false);
        }
        self.forest.union(u, v)?;
        self.forest.union(u + self.n, v + self.n)?;
        Ok(true)
    }

    /// Record that `u` and `v` must differ.
    ///
    /// Returns `false` if they are already forced equal; the conflict is
    /// remembered and nothing is merged.
    pub fn must_differ(&mut self, u: usize, v: usize) -> Result<bool, DsuError> {
        self.check(u)?;
        self.check(v)?;
        if self.forest.connected(u, v)? {
            log::debug!("constraint {u} != {v} contradicts earlier constraints");
            self.conflict = true;
            return Ok(false);
        }
        self.forest.union(u, v + self.n)?;
        self.forest.union(u + self.n, v)?;
        Ok(true)
    }

    /// Whether `u` and `v` are currently forced equal.
    pub fn forced_equal(&mut self, u: usize, v: usize) -> Result<bool, DsuError> {
        self.check(u)?;
        self.check(v)?;
        self.forest.connected(u, v)
    }

    /// Whether `u` and `v` are currently forced apart.
    pub fn forced_apart(&mut self, u: usize, v: usize) -> Result<bool, DsuError> {
        self.check(u)?;
        self.check(v)?;
        self.forest.connected(u, v + self.n)
    }

    /// Outcome over every constraint recorded so far.
    pub fn satisfiability(&self) -> Satisfiability {
        if self.conflict {
            Satisfiability::Unsatisfiable
        } else {
            Satisfiability::Satisfiable
        }
    }
}

/// Relation in an [`Equation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    NotEqual,
}

/// A constraint of the form `a==b` or `a!=b` over lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub lhs: u8,
    pub relation: Relation,
    pub rhs: u8,
}

impl Equation {
    /// Parse a four character equation such as `"a==b"` or `"x!=y"`.
    pub fn parse(s: &str) -> Result<Self, DsuError> {
        let invalid = || DsuError::InvalidArgument(format!("malformed equation {s:?}"));

        let &[lhs, op, eq, rhs] = s.as_bytes() else {
            return Err(invalid());
        };
        if !lhs.is_ascii_lowercase() || !rhs.is_ascii_lowercase() || eq != b'=' {
            return Err(invalid());
        }
        let relation = match op {
            b'=' => Relation::Equal,
            b'!' => Relation::NotEqual,
            _ => return Err(invalid()),
        };

        Ok(Self {
            lhs: lhs - b'a',
            relation,
            rhs: rhs - b'a',
        })
    }
}

/// Decide whether a list of letter equations can all hold.
///
/// Equalities are applied before any inequality is checked.
pub fn equations_possible(equations: &[&str]) -> Result<Satisfiability, DsuError> {
    let parsed = equations
        .iter()
        .map(|s| Equation::parse(s))
        .collect::<Result<Vec<_>, _>>()?;

    let mut sets = ComplementSets::new(26)?;
    for eq in parsed.iter().filter(|e| e.relation == Relation::Equal) {
        sets.must_equal(eq.lhs as usize, eq.rhs as usize)?;
    }
    for eq in parsed.iter().filter(|e| e.relation == Relation::NotEqual) {
        if !sets.must_differ(eq.lhs as usize, eq.rhs as usize)? {
            break;
        }
    }

    Ok(sets.satisfiability())
}

/// Whether an undirected graph given as adjacency lists is bipartite.
pub fn is_bipartite(adjacency: &[Vec<usize>]) -> Result<bool, DsuError> {
    let mut sets = ComplementSets::new(adjacency.len())?;
    for (u, neighbors) in adjacency.iter().enumerate() {
        for &v in neighbors {
            if !sets.must_differ(u, v)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Whether `n` people can be split into two groups so that no pair in
/// `dislikes` shares a group.
pub fn possible_bipartition(n: usize, dislikes: &[(usize, usize)]) -> Result<bool, DsuError> {
    let mut sets = ComplementSets::new(n)?;
    for &(u, v) in dislikes {
        if !sets.must_differ(u, v)? {
            return Ok(false);
        }
    }
    Ok(true)
}
