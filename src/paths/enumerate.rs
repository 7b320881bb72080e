use crate::card::Face;
use crate::paths::format::{PathError, PathFormat};
use crate::paths::set::PathSet;

/// Enumerate every winning path of a face: the full Cartesian product of
/// its rows, one value per row in row order, rendered canonically with a
/// width derived from the face's own values.
pub fn enumerate(face: &Face) -> Result<PathSet, PathError> {
    enumerate_with(face, &PathFormat::for_face(face))
}

/// Enumerate with an explicit path format, for callers that pin the
/// component width across faces.
///
/// The walk is a single general odometer over any number of rows, the last
/// row varying fastest. Traversal order is invisible in the result; the
/// destination set deduplicates and sorts.
pub fn enumerate_with(face: &Face, format: &PathFormat) -> Result<PathSet, PathError> {
    let mut set = PathSet::new();
    let grid = face.grid();
    if grid.iter().any(|row| row.is_empty()) {
        // a row with no values admits no path
        return Ok(set);
    }

    let mut indices = vec![0usize; grid.len()];
    let mut chosen = vec![0u32; grid.len()];
    loop {
        for (row, &column) in indices.iter().enumerate() {
            chosen[row] = grid[row][column];
        }
        set.insert(format.render(&chosen)?);

        // advance, carrying from the bottom row upward
        let mut row = grid.len();
        loop {
            if row == 0 {
                return Ok(set);
            }
            row -= 1;
            indices[row] += 1;
            if indices[row] < grid[row].len() {
                break;
            }
            indices[row] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Face, FaceLayout, IdGenerator};
    use crate::rng::CardRng;

    fn explicit_face(rows: usize, columns: usize, values: Vec<u32>) -> Face {
        let mut ids = IdGenerator::new();
        Face::from_values(rows, columns, values, false, &mut ids).expect("valid face")
    }

    #[test]
    fn test_bingo_face_has_243_paths() {
        let layout = FaceLayout::bingo();
        let mut ids = IdGenerator::new();
        let mut rng = CardRng::new(Some(42));
        let face = Face::sample(&layout, &mut ids, &mut rng).expect("valid face");

        let paths = enumerate(&face).expect("enumerable face");
        assert_eq!(paths.len(), 243);
    }

    #[test]
    fn test_every_combination_present() {
        let face = explicit_face(2, 2, vec![1, 2, 16, 17]);
        let paths = enumerate(&face).expect("enumerable face");

        assert_eq!(paths.len(), 4);
        assert!(paths.contains("01-16"));
        assert!(paths.contains("01-17"));
        assert!(paths.contains("02-16"));
        assert!(paths.contains("02-17"));
    }

    #[test]
    fn test_single_row_face() {
        let face = explicit_face(1, 3, vec![5, 9, 12]);
        let paths = enumerate(&face).expect("enumerable face");

        assert_eq!(paths.len(), 3);
        assert!(paths.contains("05"));
        assert!(paths.contains("09"));
        assert!(paths.contains("12"));
    }

    #[test]
    fn test_single_column_face() {
        let face = explicit_face(3, 1, vec![1, 2, 3]);
        let paths = enumerate(&face).expect("enumerable face");

        assert_eq!(paths.len(), 1);
        assert!(paths.contains("01-02-03"));
    }

    #[test]
    fn test_duplicate_values_and_set_size() {
        // rows sharing values still give all 9 ordered pairs
        let face = explicit_face(2, 3, vec![5, 6, 7, 5, 6, 7]);
        let paths = enumerate(&face).expect("enumerable face");
        assert_eq!(paths.len(), 9);
        assert!(paths.contains("05-05"));

        // a value repeated inside one row collapses selections
        let dup_in_row = explicit_face(2, 3, vec![5, 5, 6, 8, 9, 10]);
        let dup_paths = enumerate(&dup_in_row).expect("enumerable face");
        assert_eq!(dup_paths.len(), 6);
    }

    #[test]
    fn test_enumeration_idempotent() {
        let layout = FaceLayout::bingo();
        let mut ids = IdGenerator::new();
        let mut rng = CardRng::new(Some(7));
        let face = Face::sample(&layout, &mut ids, &mut rng).expect("valid face");

        let first = enumerate(&face).expect("enumerable face");
        let second = enumerate(&face).expect("enumerable face");
        assert_eq!(first, second);
    }

    #[test]
    fn test_membership_law() {
        let mut ids = IdGenerator::new();
        let face = Face::from_values(
            5,
            3,
            vec![1, 5, 7, 18, 19, 20, 31, 33, 40, 47, 50, 59, 61, 70, 75],
            false,
            &mut ids,
        )
        .expect("valid face");
        let paths = enumerate(&face).expect("enumerable face");

        // first element of each row
        assert!(paths.contains("01-18-31-47-61"));
        // second element of the first row
        assert!(paths.contains("05-18-31-47-61"));
        assert!(!paths.contains("99-99-99-99-99"));
    }

    #[test]
    fn test_three_digit_values_use_wider_format() {
        let face = explicit_face(2, 2, vec![99, 100, 101, 225]);
        let paths = enumerate(&face).expect("enumerable face");

        assert_eq!(paths.len(), 4);
        assert!(paths.contains("099-101"));
        assert!(paths.contains("100-225"));
    }

    #[test]
    fn test_pinned_width_overflow_is_an_error() {
        let face = explicit_face(1, 2, vec![5, 100]);
        let result = enumerate_with(&face, &PathFormat::with_width(2));
        assert_eq!(
            result,
            Err(PathError::ValueOutOfRange { value: 100, width: 2 })
        );
    }

    #[test]
    fn test_enumeration_count_general_case() {
        // 3 rows x 2 columns of all-distinct values: 2^3 paths
        let face = explicit_face(3, 2, vec![1, 2, 10, 11, 20, 21]);
        let paths = enumerate(&face).expect("enumerable face");
        assert_eq!(paths.len(), 8);
    }
}
