use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout has no rows")]
    EmptyLayout,
    #[error("column count must be at least 1")]
    ZeroColumns,
    #[error("range [{low},{high}] is inverted")]
    InvertedRange { low: u32, high: u32 },
    #[error("range [{low},{high}] cannot supply {needed} distinct values")]
    RangeTooNarrow { low: u32, high: u32, needed: usize },
    #[error("expected {expected} values, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },
}

/// Inclusive range a row's values are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub low: u32,
    pub high: u32,
}

impl RowRange {
    pub fn new(low: u32, high: u32) -> Self {
        RowRange { low, high }
    }

    /// Number of distinct values in the range (0 when inverted)
    pub fn span(&self) -> usize {
        if self.high < self.low {
            0
        } else {
            (self.high - self.low + 1) as usize
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Validated geometry for sampled card faces: one range per row plus a
/// shared column count. Construction rejects any configuration that could
/// not fill every row with distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceLayout {
    ranges: Vec<RowRange>,
    columns: usize,
}

impl FaceLayout {
    pub fn new(ranges: Vec<RowRange>, columns: usize) -> Result<Self, ConfigError> {
        if ranges.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        for range in &ranges {
            if range.high < range.low {
                return Err(ConfigError::InvertedRange {
                    low: range.low,
                    high: range.high,
                });
            }
            if range.span() < columns {
                return Err(ConfigError::RangeTooNarrow {
                    low: range.low,
                    high: range.high,
                    needed: columns,
                });
            }
        }
        Ok(FaceLayout { ranges, columns })
    }

    /// The canonical 5x3 bingo layout: rows drawn from
    /// [1,15], [16,30], [31,45], [46,60], [61,75]
    pub fn bingo() -> Self {
        FaceLayout {
            ranges: vec![
                RowRange::new(1, 15),
                RowRange::new(16, 30),
                RowRange::new(31, 45),
                RowRange::new(46, 60),
                RowRange::new(61, 75),
            ],
            columns: 3,
        }
    }

    /// Layout where every row covers the same number of values: row `i`
    /// spans [i*row_span + 1, (i+1)*row_span]
    pub fn uniform(rows: usize, columns: usize, row_span: usize) -> Result<Self, ConfigError> {
        let ranges = (0..rows)
            .map(|i| RowRange::new((i * row_span) as u32 + 1, ((i + 1) * row_span) as u32))
            .collect();
        FaceLayout::new(ranges, columns)
    }

    /// Load a layout from a JSON file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let parsed: FaceLayout = serde_json::from_str(&content)?;
        // revalidate: the file bypasses the checked constructor
        FaceLayout::new(parsed.ranges, parsed.columns)
    }

    pub fn rows(&self) -> usize {
        self.ranges.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn ranges(&self) -> &[RowRange] {
        &self.ranges
    }

    /// Largest value any row of this layout can hold
    pub fn max_value(&self) -> u32 {
        self.ranges.iter().map(|r| r.high).max().unwrap_or(0)
    }
}
