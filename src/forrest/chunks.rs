use serde::{Deserialize, Serialize};

/// Index of the first element strictly greater than `value`, or of the last
/// element if there is none. `list` must be sorted.
pub fn closest_right_index(list: &[f64], value: f64) -> Option<usize> {
    if list.is_empty() {
        return None;
    }
    let position = list.partition_point(|&item| item <= value);
    Some(position.min(list.len() - 1))
}

/// Index of the last element strictly smaller than `value`, or of the first
/// element if there is none. `list` must be sorted.
pub fn closest_left_index(list: &[f64], value: f64) -> Option<usize> {
    if list.is_empty() {
        return None;
    }
    let position = list.partition_point(|&item| item < value);
    Some(position.saturating_sub(1))
}

pub fn take_closest_right(list: &[f64], value: f64) -> Option<f64> {
    closest_right_index(list, value).map(|index| list[index])
}

pub fn take_closest_left(list: &[f64], value: f64) -> Option<f64> {
    closest_left_index(list, value).map(|index| list[index])
}

/// Inclusive fixation index range of one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkBounds {
    pub start: usize,
    pub end: usize,
}

impl ChunkBounds {
    pub fn fixation_count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn range(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Fixation index ranges covering `window` seconds from each scene onset.
///
/// The start is the first fixation after the onset, the end the last fixation
/// before `onset + window`. When no fixation falls inside the window the end
/// is clamped to the start, so every chunk satisfies `start <= end`. Without
/// fixations there are no chunks.
pub fn create_chunks(onsets: &[f64], fixation_onsets: &[f64], window: f64) -> Vec<ChunkBounds> {
    onsets
        .iter()
        .filter_map(|&onset| {
            let start = closest_right_index(fixation_onsets, onset)?;
            let end = closest_left_index(fixation_onsets, onset + window)?;
            Some(ChunkBounds {
                start,
                end: end.max(start),
            })
        })
        .collect()
}
