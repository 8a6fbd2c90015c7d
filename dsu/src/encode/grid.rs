use crate::error::DsuError;
use crate::forest::{DisjointSets, UnionPolicy};

/// Cell value marking land in a [`Grid`].
pub const LAND: u8 = 1;
/// Cell value marking water in a [`Grid`].
pub const WATER: u8 = 0;

/// Binary grid with row-major cell data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<u8>,
}

impl Grid {
    /// Create a grid filled with water.
    pub fn new(rows: usize, cols: usize) -> Result<Self, DsuError> {
        let len = GridShape::new(rows, cols).cell_count()?;
        Ok(Self {
            rows,
            cols,
            cells: vec![WATER; len],
        })
    }

    /// Create a grid from a list of equally long rows.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, DsuError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(DsuError::InvalidArgument(format!(
                    "row {r} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Parse rows of `'1'` (land) and `'0'` (water).
    pub fn parse(rows: &[&str]) -> Result<Self, DsuError> {
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.bytes()
                    .enumerate()
                    .map(|(c, b)| match b {
                        b'1' => Ok(LAND),
                        b'0' => Ok(WATER),
                        _ => Err(DsuError::InvalidArgument(format!(
                            "invalid cell '{}' at ({r}, {c})",
                            b as char
                        ))),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&parsed)
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        GridShape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Get the cell value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    /// Set the cell value at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: u8) {
        self.cells[row * self.cols + col] = val;
    }

    #[inline]
    pub fn is_land(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == LAND
    }
}

/// One of the four triangles a cell is split into by its two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriPart {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// Grid dimensions and the cell-to-index encodings derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells, failing if it does not fit in `usize`.
    pub fn cell_count(&self) -> Result<usize, DsuError> {
        self.rows.checked_mul(self.cols).ok_or_else(|| {
            DsuError::InvalidArgument(format!("grid {}x{} is too large", self.rows, self.cols))
        })
    }

    /// Number of triangle indices (four per cell).
    pub fn tri_count(&self) -> Result<usize, DsuError> {
        self.cell_count()?.checked_mul(4).ok_or_else(|| {
            DsuError::InvalidArgument(format!("grid {}x{} is too large", self.rows, self.cols))
        })
    }

    /// Index of the cell at (row, col): `row * cols + col`.
    pub fn index(&self, row: usize, col: usize) -> Result<usize, DsuError> {
        if row >= self.rows {
            return Err(DsuError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(DsuError::IndexOutOfRange {
                index: col,
                len: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Index of one triangle of the cell at (row, col): `4 * index + part`.
    pub fn tri(&self, row: usize, col: usize, part: TriPart) -> Result<usize, DsuError> {
        Ok(4 * self.index(row, col)? + part as usize)
    }
}

/// Build a forest where 4-adjacent land cells are connected.
///
/// Water cells are never unioned and stay singletons.
pub fn land_components(grid: &Grid, policy: UnionPolicy) -> Result<DisjointSets, DsuError> {
    let shape = grid.shape();
    let mut uf = DisjointSets::with_policy(shape.cell_count()?, policy);

    for r in 0..grid.rows {
        for c in 0..grid.cols {
            if !grid.is_land(r, c) {
                continue;
            }

            let id = shape.index(r, c)?;

            // Right neighbor
            if c + 1 < grid.cols && grid.is_land(r, c + 1) {
                uf.union(id, id + 1)?;
            }

            // Down neighbor
            if r + 1 < grid.rows && grid.is_land(r + 1, c) {
                uf.union(id, id + grid.cols)?;
            }
        }
    }

    Ok(uf)
}

/// Count 4-connected islands of land.
pub fn count_islands(grid: &Grid) -> Result<usize, DsuError> {
    let mut uf = land_components(grid, UnionPolicy::ByRank)?;

    // Only land roots count; water cells are their own roots.
    let mut islands = 0;
    for (id, &cell) in grid.cells.iter().enumerate() {
        if cell == LAND && uf.find(id)? == id {
            islands += 1;
        }
    }
    Ok(islands)
}

/// Area of the largest island, or 0 if there is no land.
pub fn max_island_area(grid: &Grid) -> Result<usize, DsuError> {
    let mut uf = land_components(grid, UnionPolicy::BySize)?;

    let mut best = 0;
    for (id, &cell) in grid.cells.iter().enumerate() {
        if cell == LAND {
            best = best.max(uf.component_size(id)?);
        }
    }
    Ok(best)
}

/// A cell of a [`SlashGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slash {
    /// `'/'`
    Forward,
    /// `'\\'`
    Back,
    /// `' '`
    Blank,
}

/// Grid of `'/'`, `'\\'` and `' '` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashGrid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Slash>,
}

impl SlashGrid {
    /// Parse equally long rows of slash characters.
    pub fn parse(rows: &[&str]) -> Result<Self, DsuError> {
        let cols = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            let before = cells.len();
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '/' => Slash::Forward,
                    '\\' => Slash::Back,
                    ' ' => Slash::Blank,
                    _ => {
                        return Err(DsuError::InvalidArgument(format!(
                            "invalid slash cell '{ch}' at ({r}, {c})"
                        )))
                    }
                };
                cells.push(cell);
            }
            if cells.len() - before != cols {
                return Err(DsuError::InvalidArgument(format!(
                    "row {r} has {} cells, expected {cols}",
                    cells.len() - before
                )));
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        GridShape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Slash {
        self.cells[row * self.cols + col]
    }
}

/// Count the regions a slash grid is cut into.
///
/// Each cell is split into four triangles by its diagonals. The slash in the
/// cell decides which triangles stay joined, and touching triangles of
/// neighbouring cells are always joined.
pub fn count_regions(grid: &SlashGrid) -> Result<usize, DsuError> {
    use TriPart::{Bottom, Left, Right, Top};

    let shape = grid.shape();
    let mut uf = DisjointSets::new(shape.tri_count()?);

    for r in 0..grid.rows {
        for c in 0..grid.cols {
            let top = shape.tri(r, c, Top)?;
            let right = shape.tri(r, c, Right)?;
            let bottom = shape.tri(r, c, Bottom)?;
            let left = shape.tri(r, c, Left)?;

            match grid.get(r, c) {
                Slash::Forward => {
                    uf.union(top, left)?;
                    uf.union(right, bottom)?;
                }
                Slash::Back => {
                    uf.union(top, right)?;
                    uf.union(bottom, left)?;
                }
                Slash::Blank => {
                    uf.union(top, right)?;
                    uf.union(right, bottom)?;
                    uf.union(bottom, left)?;
                }
            }

            if c + 1 < grid.cols {
                uf.union(right, shape.tri(r, c + 1, Left)?)?;
            }
            if r + 1 < grid.rows {
                uf.union(bottom, shape.tri(r + 1, c, Top)?)?;
            }
        }
    }

    Ok(uf.component_count())
}
