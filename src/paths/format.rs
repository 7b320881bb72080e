use crate::card::{Face, FaceLayout};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("value {value} does not fit in a {width}-digit path component")]
    ValueOutOfRange { value: u32, width: usize },
}

/// Canonical path encoding: each chosen value zero-padded to a fixed
/// decimal width, components joined by `-` in row order.
///
/// The width is never below 2, so the classic bingo encoding
/// (`"01-05-07-10-13"`) is stable, and it can be derived from the largest
/// value a face or layout can hold so values of 100 and up stay
/// unambiguous instead of colliding in a hard-coded two-digit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathFormat {
    width: usize,
}

impl PathFormat {
    pub const MIN_WIDTH: usize = 2;

    /// Pin an explicit component width (clamped up to the minimum of 2).
    /// Rendering fails for any value that needs more digits.
    pub fn with_width(width: usize) -> Self {
        PathFormat {
            width: width.max(Self::MIN_WIDTH),
        }
    }

    /// Width fitting every value actually on the face
    pub fn for_face(face: &Face) -> Self {
        Self::for_max_value(face.max_value())
    }

    /// Width fitting every value the layout could produce
    pub fn for_layout(layout: &FaceLayout) -> Self {
        Self::for_max_value(layout.max_value())
    }

    fn for_max_value(max: u32) -> Self {
        PathFormat {
            width: digits(max).max(Self::MIN_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render one selection (a value per row, in row order) as a canonical
    /// path string
    pub fn render(&self, values: &[u32]) -> Result<String, PathError> {
        let mut path = String::with_capacity(values.len() * (self.width + 1));
        for (i, &value) in values.iter().enumerate() {
            if digits(value) > self.width {
                return Err(PathError::ValueOutOfRange {
                    value,
                    width: self.width,
                });
            }
            if i > 0 {
                path.push('-');
            }
            path.push_str(&format!("{:0width$}", value, width = self.width));
        }
        Ok(path)
    }
}

fn digits(value: u32) -> usize {
    let mut n = 1;
    let mut rest = value / 10;
    while rest > 0 {
        n += 1;
        rest /= 10;
    }
    n
}
