use ndarray::Array2;

use crate::scanpath::ScanpathStructure;

/// Matrix of saccade vector differences between two scanpaths.
///
/// Cell `(i, j)` is the length of the difference between saccade `i` of
/// `path1` and saccade `j` of `path2`, so the shape is
/// `(saccades1, saccades2)`.
pub fn calc_vector_differences(path1: &ScanpathStructure, path2: &ScanpathStructure) -> Array2<f64> {
    let rows = path1.saccade_count();
    let cols = path2.saccade_count();

    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let dx = path1.saccade_lenx[i] - path2.saccade_lenx[j];
        let dy = path1.saccade_leny[i] - path2.saccade_leny[j];
        dx.hypot(dy)
    })
}
