use serde::{Deserialize, Serialize};

use crate::encode::complement::{equations_possible, Satisfiability};
use crate::encode::grid::{count_islands, count_regions, max_island_area, Grid, SlashGrid};
use crate::error::DsuError;
use crate::graph::count_components;
use crate::mst::min_cost_connect_points;

/// Largest vertex count accepted for a `components` problem.
pub const MAX_VERTICES: usize = 1 << 24;

/// A connectivity problem described in TOML.
///
/// ```toml
/// type = "islands"
/// grid = ["110", "010", "001"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Problem {
    /// Count 4-connected islands in rows of `'1'`/`'0'`.
    Islands { grid: Vec<String> },
    /// Largest island area in rows of `'1'`/`'0'`.
    MaxArea { grid: Vec<String> },
    /// Count regions cut by `'/'` and `'\\'`.
    Regions { grid: Vec<String> },
    /// Letter equations such as `"a==b"` and `"b!=c"`.
    Equations { equations: Vec<String> },
    /// Cheapest Manhattan wiring of all points.
    ConnectPoints { points: Vec<[i64; 2]> },
    /// Components of an undirected graph.
    Components {
        vertices: usize,
        #[serde(default)]
        edges: Vec<[usize; 2]>,
    },
}

/// Answer to a [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Answer {
    Count(usize),
    Cost(u128),
    Satisfiability(Satisfiability),
}

impl Problem {
    /// Parse a problem from a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Problem, ProblemError> {
        toml::from_str(toml_str).map_err(|e| ProblemError::Config(e.to_string()))
    }

    /// Solve the problem.
    pub fn solve(&self) -> Result<Answer, DsuError> {
        match self {
            Problem::Islands { grid } => {
                let grid = Grid::parse(&as_strs(grid))?;
                Ok(Answer::Count(count_islands(&grid)?))
            }
            Problem::MaxArea { grid } => {
                let grid = Grid::parse(&as_strs(grid))?;
                Ok(Answer::Count(max_island_area(&grid)?))
            }
            Problem::Regions { grid } => {
                let grid = SlashGrid::parse(&as_strs(grid))?;
                Ok(Answer::Count(count_regions(&grid)?))
            }
            Problem::Equations { equations } => Ok(Answer::Satisfiability(equations_possible(
                &as_strs(equations),
            )?)),
            Problem::ConnectPoints { points } => Ok(Answer::Cost(min_cost_connect_points(points)?)),
            Problem::Components { vertices, edges } => {
                if *vertices > MAX_VERTICES {
                    return Err(DsuError::InvalidArgument(format!(
                        "{vertices} vertices exceeds the limit of {MAX_VERTICES}"
                    )));
                }
                let edges: Vec<(usize, usize)> = edges.iter().map(|&[u, v]| (u, v)).collect();
                Ok(Answer::Count(count_components(*vertices, &edges)?))
            }
        }
    }
}

fn as_strs(rows: &[String]) -> Vec<&str> {
    rows.iter().map(String::as_str).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("config error: {0}")]
    Config(String),
    #[error("solve error: {0}")]
    Solve(#[from] DsuError),
}

/// Parse and solve a TOML problem in one step.
pub fn solve_toml(toml_str: &str) -> Result<Answer, ProblemError> {
    Ok(Problem::from_toml_str(toml_str)?.solve()?)
}
