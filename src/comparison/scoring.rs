use std::f64::consts::PI;

use crate::comparison::config::ScreenSize;
use crate::comparison::types::{Dissimilarity, Similarity};
use crate::error::{MultiMatchError, PathSide, Result};
use crate::scanpath::ScanpathStructure;
use crate::utils::stats::median;

/// Length of the saccade vector difference for every aligned pair.
pub fn calc_vector_difference_along_path(
    path1: &ScanpathStructure,
    path2: &ScanpathStructure,
    path: &[(usize, usize)],
) -> Vec<f64> {
    path.iter()
        .map(|&(i, j)| {
            let dx = path1.saccade_lenx[i] - path2.saccade_lenx[j];
            let dy = path1.saccade_leny[i] - path2.saccade_leny[j];
            dx.hypot(dy)
        })
        .collect()
}

/// Absolute angle between aligned saccade directions, in `[0, π]` radians.
pub fn calc_angular_difference(theta1: &[f64], theta2: &[f64], path: &[(usize, usize)]) -> Vec<f64> {
    path.iter()
        .map(|&(i, j)| {
            let difference = (full_turn(theta1[i]) - full_turn(theta2[j])).abs();
            if difference > PI {
                2.0 * PI - difference
            } else {
                difference
            }
        })
        .collect()
}

/// Absolute amplitude difference of aligned saccades.
pub fn calc_length_difference(rho1: &[f64], rho2: &[f64], path: &[(usize, usize)]) -> Vec<f64> {
    path.iter().map(|&(i, j)| (rho1[i] - rho2[j]).abs()).collect()
}

/// Distance between the fixations the aligned saccades leave from.
pub fn calc_position_difference(
    path1: &ScanpathStructure,
    path2: &ScanpathStructure,
    path: &[(usize, usize)],
) -> Vec<f64> {
    path.iter()
        .map(|&(i, j)| {
            let dx = path1.fixation_x[i] - path2.fixation_x[j];
            let dy = path1.fixation_y[i] - path2.fixation_y[j];
            dx.hypot(dy)
        })
        .collect()
}

/// Relative duration difference `|d1 - d2| / max(d1, d2)` of aligned fixations.
pub fn calc_duration_difference(dur1: &[f64], dur2: &[f64], path: &[(usize, usize)]) -> Vec<f64> {
    path.iter()
        .map(|&(i, j)| {
            let longest = dur1[i].abs().max(dur2[j].abs());
            if longest == 0.0 {
                0.0
            } else {
                (dur1[i] - dur2[j]).abs() / longest
            }
        })
        .collect()
}

/// Median dissimilarity per dimension along the alignment path.
pub fn get_unnormalised(
    path1: &ScanpathStructure,
    path2: &ScanpathStructure,
    path: &[(usize, usize)],
) -> Result<Dissimilarity> {
    let along = |values: Vec<f64>| -> Result<f64> {
        median(&values).ok_or_else(|| empty_path_error(path1, path2))
    };

    Ok(Dissimilarity {
        vector: along(calc_vector_difference_along_path(path1, path2, path))?,
        direction: along(calc_angular_difference(
            &path1.saccade_theta,
            &path2.saccade_theta,
            path,
        ))?,
        length: along(calc_length_difference(
            &path1.saccade_rho,
            &path2.saccade_rho,
            path,
        ))?,
        position: along(calc_position_difference(path1, path2, path))?,
        duration: along(calc_duration_difference(
            &path1.fixation_dur,
            &path2.fixation_dur,
            path,
        ))?,
    })
}

/// Scale raw dissimilarities into similarities.
///
/// Vector differences are bounded by twice the screen diagonal, amplitude and
/// position differences by the diagonal, directions by π.
pub fn normalise_results(unnormalised: &Dissimilarity, screen: &ScreenSize) -> Similarity {
    let diagonal = screen.diagonal();

    Similarity {
        vector: 1.0 - unnormalised.vector / (2.0 * diagonal),
        direction: 1.0 - unnormalised.direction / PI,
        length: 1.0 - unnormalised.length / diagonal,
        position: 1.0 - unnormalised.position / diagonal,
        duration: 1.0 - unnormalised.duration,
    }
}

/// Map an `atan2` angle into `[0, 2π)`.
fn full_turn(theta: f64) -> f64 {
    if theta < 0.0 {
        theta + 2.0 * PI
    } else {
        theta
    }
}

fn empty_path_error(path1: &ScanpathStructure, path2: &ScanpathStructure) -> MultiMatchError {
    let (path, fixations) = if path1.saccade_count() == 0 {
        (PathSide::First, path1.fixation_count())
    } else {
        (PathSide::Second, path2.fixation_count())
    };
    MultiMatchError::InsufficientData {
        path,
        fixations,
        required: 2,
    }
}
