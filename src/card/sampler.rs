use crate::card::layout::{ConfigError, RowRange};
use crate::rng::CardRng;

/// Draw `count` distinct values uniformly at random from `range`, without
/// replacement, returned in ascending order.
///
/// The whole candidate population is shuffled and the first `count` values
/// taken, so every size-`count` subset of the range is equally likely.
pub fn sample_row(
    range: RowRange,
    count: usize,
    rng: &mut CardRng,
) -> Result<Vec<u32>, ConfigError> {
    if count == 0 {
        return Err(ConfigError::ZeroColumns);
    }
    if range.high < range.low {
        return Err(ConfigError::InvertedRange {
            low: range.low,
            high: range.high,
        });
    }
    if range.span() < count {
        return Err(ConfigError::RangeTooNarrow {
            low: range.low,
            high: range.high,
            needed: count,
        });
    }

    let mut candidates: Vec<u32> = (range.low..=range.high).collect();
    rng.shuffle(&mut candidates);
    candidates.truncate(count);
    candidates.sort_unstable();
    Ok(candidates)
}
