use crate::comparison::alignment::find_alignment_path;
use crate::comparison::config::{ComparisonConfig, GroupingThresholds, ScreenSize};
use crate::comparison::matrix::calc_vector_differences;
use crate::comparison::scoring::{get_unnormalised, normalise_results};
use crate::comparison::types::Similarity;
use crate::error::{MultiMatchError, PathSide, Result};
use crate::scanpath::{gen_scanpath_structure, simplify_scanpath, Fixation, ScanpathStructure};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// A scanpath needs at least one saccade to be compared.
pub const MIN_FIXATIONS: usize = 2;

/// Main comparison function: five similarity scores for two fixation sequences.
pub fn compare_scanpaths(
    path1: &[Fixation],
    path2: &[Fixation],
    config: &ComparisonConfig,
) -> Result<Similarity> {
    config.validate()?;
    check_fixations(path1, &config.screen, PathSide::First)?;
    check_fixations(path2, &config.screen, PathSide::Second)?;

    // Step 1: Vector representation
    let mut structure1 = gen_scanpath_structure(path1);
    let mut structure2 = gen_scanpath_structure(path2);

    // Step 2: Optional simplification
    if config.grouping {
        structure1 = simplify_scanpath(&structure1, &config.thresholds);
        structure2 = simplify_scanpath(&structure2, &config.thresholds);
    }
    check_structure(&structure1, PathSide::First)?;
    check_structure(&structure2, PathSide::Second)?;

    // Step 3: Saccade distance matrix
    let distances = calc_vector_differences(&structure1, &structure2);

    // Step 4: Cheapest alignment through the matrix
    let alignment = find_alignment_path(&distances);
    log_debug!(
        "aligned {}x{} saccades along {} steps (cost {:.3})",
        distances.nrows(),
        distances.ncols(),
        alignment.path.len(),
        alignment.cost
    );

    // Step 5: Per-dimension medians, normalised by the screen
    let unnormalised = get_unnormalised(&structure1, &structure2, &alignment.path)?;
    Ok(normalise_results(&unnormalised, &config.screen))
}

/// Positional form of [`compare_scanpaths`]: screen size as `[width, height]`,
/// direction threshold in degrees, duration in seconds, amplitude in pixels.
pub fn do_comparison(
    path1: &[Fixation],
    path2: &[Fixation],
    screen_size: &[f64],
    grouping: bool,
    direction_threshold: f64,
    duration_threshold: f64,
    amplitude_threshold: f64,
) -> Result<Similarity> {
    let config = ComparisonConfig {
        screen: ScreenSize::from_slice(screen_size)?,
        grouping,
        thresholds: GroupingThresholds {
            direction_deg: direction_threshold,
            duration_secs: duration_threshold,
            amplitude_px: amplitude_threshold,
        },
    };
    compare_scanpaths(path1, path2, &config)
}

/// Every fixation must lie on the screen with a finite, non-negative duration.
fn check_fixations(fixations: &[Fixation], screen: &ScreenSize, path: PathSide) -> Result<()> {
    if fixations.len() < MIN_FIXATIONS {
        return Err(MultiMatchError::InsufficientData {
            path,
            fixations: fixations.len(),
            required: MIN_FIXATIONS,
        });
    }

    match fixations
        .iter()
        .position(|f| {
            !f.is_finite() || f.duration < 0.0 || !screen.contains(f.start_x, f.start_y)
        })
    {
        Some(index) => Err(MultiMatchError::InvalidFixation {
            path,
            index,
            fixation: fixations[index],
        }),
        None => Ok(()),
    }
}

fn check_structure(structure: &ScanpathStructure, path: PathSide) -> Result<()> {
    if structure.fixation_count() < MIN_FIXATIONS {
        return Err(MultiMatchError::InsufficientData {
            path,
            fixations: structure.fixation_count(),
            required: MIN_FIXATIONS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scanpath(points: &[(f64, f64, f64)]) -> Vec<Fixation> {
        points.iter().copied().map(Fixation::from).collect()
    }

    fn sample() -> Vec<Fixation> {
        scanpath(&[
            (640.0, 360.0, 0.31),
            (420.0, 250.0, 0.18),
            (455.0, 610.0, 0.44),
            (1010.0, 520.0, 0.27),
            (980.0, 120.0, 0.52),
            (300.0, 90.0, 0.21),
        ])
    }

    #[test]
    fn identical_scanpaths_are_fully_similar() {
        let path = sample();
        let similarity = do_comparison(&path, &path, &[1280.0, 720.0], false, 0.0, 0.0, 0.0).unwrap();

        for score in similarity.to_array() {
            assert_abs_diff_eq!(score, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn identical_scanpaths_stay_similar_after_grouping() {
        let path = sample();
        let similarity =
            do_comparison(&path, &path, &[1280.0, 720.0], true, 30.0, 0.05, 100.0).unwrap();

        assert_eq!(similarity.to_array(), [1.0; 5]);
    }

    #[test]
    fn hand_computed_comparison() {
        let path1 = scanpath(&[(0.0, 0.0, 0.2), (100.0, 0.0, 0.2), (100.0, 100.0, 0.4)]);
        let path2 = scanpath(&[(0.0, 0.0, 0.2), (100.0, 0.0, 0.4), (200.0, 0.0, 0.2)]);
        let similarity = do_comparison(&path1, &path2, &[1280.0, 720.0], false, 0.0, 0.0, 0.0).unwrap();

        // Path (0, 0) -> (1, 1); the second saccades differ by a right angle.
        assert_abs_diff_eq!(similarity.vector, 0.9759258995071455, epsilon = 1e-12);
        assert_abs_diff_eq!(similarity.direction, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(similarity.length, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(similarity.position, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(similarity.duration, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn screen_orientation_does_not_change_scores() {
        // Both paths fit inside 720x720 so either orientation holds them
        let path1: Vec<Fixation> = sample()
            .into_iter()
            .map(|f| Fixation::new(f.start_x * 0.6, f.start_y, f.duration))
            .collect();
        let path2: Vec<Fixation> = path1
            .iter()
            .rev()
            .map(|f| Fixation::new(f.start_x * 0.9, f.start_y + 15.0, f.duration * 1.3))
            .collect();

        let landscape = do_comparison(&path1, &path2, &[1280.0, 720.0], false, 0.0, 0.0, 0.0).unwrap();
        let portrait = do_comparison(&path1, &path2, &[720.0, 1280.0], false, 0.0, 0.0, 0.0).unwrap();

        for (a, b) in landscape.to_array().iter().zip(portrait.to_array()) {
            assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_fixation_is_insufficient_data() {
        let err = do_comparison(
            &sample(),
            &scanpath(&[(10.0, 10.0, 0.2)]),
            &[1280.0, 720.0],
            false,
            0.0,
            0.0,
            0.0,
        )
        .unwrap_err();

        assert_eq!(
            err,
            MultiMatchError::InsufficientData {
                path: PathSide::Second,
                fixations: 1,
                required: MIN_FIXATIONS,
            }
        );
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn malformed_configuration_is_rejected() {
        let path = sample();

        let bad_screen = do_comparison(&path, &path, &[1280.0], false, 0.0, 0.0, 0.0);
        assert!(matches!(bad_screen, Err(MultiMatchError::Configuration(_))));

        let negative = do_comparison(&path, &path, &[1280.0, 720.0], true, -45.0, 0.3, 146.8);
        assert!(matches!(negative, Err(MultiMatchError::Configuration(_))));
    }

    #[test]
    fn non_finite_fixation_is_rejected() {
        let mut path = sample();
        path[2].start_y = f64::NAN;

        let err = compare_scanpaths(&sample(), &path, &ComparisonConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            MultiMatchError::InvalidFixation {
                path: PathSide::Second,
                index: 2,
                ..
            }
        ));
    }

    #[test]
    fn off_screen_fixation_is_rejected() {
        let inside = sample();
        let mut outside = sample();
        outside[1].start_x = -5000.0;
        outside[3].start_x = 5000.0;

        let err = compare_scanpaths(&outside, &inside, &ComparisonConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            MultiMatchError::InvalidFixation {
                path: PathSide::First,
                index: 1,
                ..
            }
        ));

        // x = 1010 lies beyond a 720 px wide screen
        let portrait = ComparisonConfig {
            screen: ScreenSize::new(720.0, 1280.0),
            ..ComparisonConfig::default()
        };
        assert!(compare_scanpaths(&inside, &inside, &portrait).is_err());
    }

    #[test]
    fn comparison_is_repeatable() {
        let path1 = sample();
        let path2: Vec<Fixation> = sample().into_iter().skip(1).collect();
        let config = ComparisonConfig::with_grouping(
            ScreenSize::default(),
            GroupingThresholds {
                direction_deg: 45.0,
                duration_secs: 0.3,
                amplitude_px: 146.8,
            },
        );

        let first = compare_scanpaths(&path1, &path2, &config).unwrap();
        let second = compare_scanpaths(&path1, &path2, &config).unwrap();
        assert_eq!(first, second);
    }
}
