use crate::card::layout::{ConfigError, FaceLayout};
use crate::card::sampler::sample_row;
use crate::rng::CardRng;
use serde::Serialize;
use std::fmt;

/// Identifier assigned to a face at construction, displayed zero-padded to
/// eight digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FaceId(u64);

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// Monotonic face id counter, owned by whichever component creates faces
/// and passed in explicitly
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator { next: 0 }
    }

    /// Start the counter at an arbitrary value, so parallel batches can
    /// carve out disjoint id blocks
    pub fn starting_at(next: u64) -> Self {
        IdGenerator { next }
    }

    pub fn next_id(&mut self) -> FaceId {
        let id = FaceId(self.next);
        self.next += 1;
        id
    }
}

/// One card face: a grid of rows x columns numbers. Immutable once
/// constructed; regeneration builds a new face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Face {
    id: FaceId,
    columns: usize,
    grid: Vec<Vec<u32>>,
}

impl Face {
    /// Sample a face from a layout: each row independently draws `columns`
    /// distinct values from its own range, stored ascending. Rows may share
    /// values when their ranges overlap.
    pub fn sample(
        layout: &FaceLayout,
        ids: &mut IdGenerator,
        rng: &mut CardRng,
    ) -> Result<Face, ConfigError> {
        let mut grid = Vec::with_capacity(layout.rows());
        for range in layout.ranges() {
            grid.push(sample_row(*range, layout.columns(), rng)?);
        }
        Ok(Face {
            id: ids.next_id(),
            columns: layout.columns(),
            grid,
        })
    }

    /// Build a face from a caller-supplied flat list of exactly
    /// `rows * columns` values in row-major order. No range validation is
    /// performed. With `normalize` the rows are re-sorted ascending like
    /// sampled faces; without it the input is preserved verbatim.
    pub fn from_values(
        rows: usize,
        columns: usize,
        values: Vec<u32>,
        normalize: bool,
        ids: &mut IdGenerator,
    ) -> Result<Face, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::EmptyLayout);
        }
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        let expected = rows * columns;
        if values.len() != expected {
            return Err(ConfigError::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }

        let mut grid: Vec<Vec<u32>> = values.chunks(columns).map(|c| c.to_vec()).collect();
        if normalize {
            for row in &mut grid {
                row.sort_unstable();
            }
        }
        Ok(Face {
            id: ids.next_id(),
            columns,
            grid,
        })
    }

    pub fn id(&self) -> FaceId {
        self.id
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row(&self, index: usize) -> Option<&[u32]> {
        self.grid.get(index).map(|r| r.as_slice())
    }

    pub fn grid(&self) -> &[Vec<u32>] {
        &self.grid
    }

    /// Largest value anywhere on the face
    pub fn max_value(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Full grid view, every cell right-justified to width 5, one line per
    /// row, no trailing newline
    pub fn formatted_face(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{:>5}", v))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One row of the grid view
    pub fn formatted_row(&self, index: usize) -> Option<String> {
        self.grid
            .get(index)
            .map(|row| row.iter().map(|v| format!("{:>5}", v)).collect())
    }

    /// One row as comma-separated values
    pub fn csv_row(&self, index: usize) -> Option<String> {
        self.grid.get(index).map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}
