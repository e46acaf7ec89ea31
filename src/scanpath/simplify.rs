use crate::comparison::config::GroupingThresholds;
use crate::scanpath::structure::{cart2pol, gen_scanpath_structure, Fixation, ScanpathStructure};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// Simplify a scanpath by merging fixations that do not represent distinct
/// gaze behaviour.
///
/// A direction pass and an amplitude pass alternate until a full round merges
/// nothing, so the result is a fixed point: simplifying it again with the same
/// thresholds returns it unchanged. The first and last fixation are never
/// removed and the total fixation duration is preserved.
pub fn simplify_scanpath(
    structure: &ScanpathStructure,
    thresholds: &GroupingThresholds,
) -> ScanpathStructure {
    let original_count = structure.fixation_count();
    let mut fixations = structure.fixations();
    let mut rounds = 0usize;

    loop {
        let before = fixations.len();
        fixations = merge_by_direction(
            &fixations,
            thresholds.direction_deg,
            thresholds.duration_secs,
        );
        fixations = merge_by_amplitude(
            &fixations,
            thresholds.amplitude_px,
            thresholds.duration_secs,
        );
        rounds += 1;

        if fixations.len() == before {
            break;
        }
    }

    log_debug!(
        "simplified scanpath from {} to {} fixations in {} round(s)",
        original_count,
        fixations.len(),
        rounds
    );

    gen_scanpath_structure(&fixations)
}

/// Merge consecutive saccades whose direction changes by less than
/// `direction_deg` when the fixation between them is shorter than
/// `duration_secs`. The last saccade never starts a merge.
pub fn merge_by_direction(
    fixations: &[Fixation],
    direction_deg: f64,
    duration_secs: f64,
) -> Vec<Fixation> {
    let saccades = fixations.len().saturating_sub(1);
    if saccades < 2 {
        return fixations.to_vec();
    }

    let mut merged = Vec::with_capacity(fixations.len());
    let mut i = 0;
    while i < saccades {
        if i + 1 < saccades {
            let current = displacement(&fixations[i], &fixations[i + 1]);
            let next = displacement(&fixations[i + 1], &fixations[i + 2]);
            let small_turn = angle_between(current, next).is_some_and(|angle| angle < direction_deg);

            if small_turn && fixations[i + 1].duration < duration_secs {
                merged.push(absorb(fixations[i], &fixations[i + 1]));
                i += 2;
                continue;
            }
        }

        merged.push(fixations[i]);
        i += 1;
    }

    merged.push(fixations[saccades]);
    merged
}

/// Merge saccades shorter than `amplitude_px` when one of the fixations they
/// connect is shorter than `duration_secs`.
///
/// A short final saccade folds its starting fixation into the previously kept
/// fixation so that the last fixation position survives.
pub fn merge_by_amplitude(
    fixations: &[Fixation],
    amplitude_px: f64,
    duration_secs: f64,
) -> Vec<Fixation> {
    let saccades = fixations.len().saturating_sub(1);
    if saccades < 1 {
        return fixations.to_vec();
    }

    let mut merged: Vec<Fixation> = Vec::with_capacity(fixations.len());
    let mut i = 0;
    while i < saccades {
        let (rho, _) = cart2pol(
            fixations[i + 1].start_x - fixations[i].start_x,
            fixations[i + 1].start_y - fixations[i].start_y,
        );
        let short_saccade = rho < amplitude_px;
        let short_fixation =
            fixations[i].duration < duration_secs || fixations[i + 1].duration < duration_secs;

        if short_saccade && short_fixation {
            if i + 1 < saccades {
                merged.push(absorb(fixations[i], &fixations[i + 1]));
                i += 2;
                continue;
            }
            if let Some(previous) = merged.last_mut() {
                previous.duration += fixations[i].duration;
                i += 1;
                continue;
            }
        }

        merged.push(fixations[i]);
        i += 1;
    }

    merged.push(fixations[saccades]);
    merged
}

/// Angle in degrees between two saccade vectors, `None` if either has no length.
pub fn angle_between(a: (f64, f64), b: (f64, f64)) -> Option<f64> {
    let norms = a.0.hypot(a.1) * b.0.hypot(b.1);
    if norms == 0.0 {
        return None;
    }
    let cosine = ((a.0 * b.0 + a.1 * b.1) / norms).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}

fn displacement(from: &Fixation, to: &Fixation) -> (f64, f64) {
    (to.start_x - from.start_x, to.start_y - from.start_y)
}

/// Keep `kept`'s position and add the dropped fixation's duration to it.
fn absorb(mut kept: Fixation, dropped: &Fixation) -> Fixation {
    kept.duration += dropped.duration;
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn thresholds(direction_deg: f64, duration_secs: f64, amplitude_px: f64) -> GroupingThresholds {
        GroupingThresholds {
            direction_deg,
            duration_secs,
            amplitude_px,
        }
    }

    fn zigzag() -> Vec<Fixation> {
        vec![
            Fixation::new(100.0, 100.0, 0.25),
            Fixation::new(140.0, 110.0, 0.12),
            Fixation::new(180.0, 118.0, 0.40),
            Fixation::new(600.0, 500.0, 0.08),
            Fixation::new(620.0, 300.0, 0.31),
            Fixation::new(630.0, 290.0, 0.05),
            Fixation::new(900.0, 100.0, 0.22),
            Fixation::new(905.0, 102.0, 0.60),
        ]
    }

    #[test]
    fn zero_thresholds_leave_scanpath_untouched() {
        let structure = gen_scanpath_structure(&zigzag());
        let simplified = simplify_scanpath(&structure, &GroupingThresholds::default());

        assert_eq!(simplified, structure);
    }

    #[test]
    fn collinear_short_fixations_collapse_to_endpoints() {
        let fixations: Vec<Fixation> = (0..5)
            .map(|i| Fixation::new(10.0 * i as f64, 0.0, 0.1))
            .collect();
        let structure = gen_scanpath_structure(&fixations);
        let simplified = simplify_scanpath(&structure, &thresholds(45.0, 0.3, 100.0));

        assert_eq!(simplified.fixation_count(), 2);
        assert_eq!(simplified.fixation_x, vec![0.0, 40.0]);
        assert_abs_diff_eq!(simplified.fixation_dur[0], 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(simplified.fixation_dur[1], 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(simplified.saccade_lenx[0], 40.0);
    }

    #[test]
    fn simplification_is_idempotent() {
        let limits = thresholds(45.0, 0.3, 146.8);
        let structure = gen_scanpath_structure(&zigzag());
        let once = simplify_scanpath(&structure, &limits);
        let twice = simplify_scanpath(&once, &limits);

        assert!(once.fixation_count() < structure.fixation_count());
        assert_eq!(once, twice);
    }

    #[test]
    fn simplification_preserves_total_duration_and_endpoints() {
        let fixations = zigzag();
        let structure = gen_scanpath_structure(&fixations);
        let simplified = simplify_scanpath(&structure, &thresholds(60.0, 0.5, 300.0));

        assert_abs_diff_eq!(
            simplified.total_duration(),
            structure.total_duration(),
            epsilon = 1e-12
        );
        assert_eq!(simplified.fixation_x[0], fixations[0].start_x);
        assert_eq!(simplified.fixation_x.last(), fixations.last().map(|f| &f.start_x));
        assert!(simplified.fixation_count() >= 2);
    }

    #[test]
    fn long_saccades_and_sharp_turns_are_kept() {
        let fixations = vec![
            Fixation::new(0.0, 0.0, 0.1),
            Fixation::new(500.0, 0.0, 0.1),
            Fixation::new(500.0, 500.0, 0.1),
        ];
        let structure = gen_scanpath_structure(&fixations);
        let simplified = simplify_scanpath(&structure, &thresholds(45.0, 0.3, 100.0));

        assert_eq!(simplified, structure);
    }

    #[test]
    fn long_fixations_block_merging() {
        let fixations: Vec<Fixation> = (0..4)
            .map(|i| Fixation::new(10.0 * i as f64, 0.0, 1.0))
            .collect();
        let structure = gen_scanpath_structure(&fixations);
        let simplified = simplify_scanpath(&structure, &thresholds(45.0, 0.3, 100.0));

        assert_eq!(simplified.fixation_count(), 4);
    }

    #[test]
    fn short_final_saccade_folds_into_previous_fixation() {
        let fixations = vec![
            Fixation::new(0.0, 0.0, 1.0),
            Fixation::new(300.0, 0.0, 1.0),
            Fixation::new(310.0, 0.0, 0.1),
        ];
        let merged = merge_by_amplitude(&fixations, 50.0, 0.3);

        assert_eq!(
            merged,
            vec![Fixation::new(0.0, 0.0, 2.0), Fixation::new(310.0, 0.0, 0.1)]
        );
    }

    #[test]
    fn two_fixation_path_cannot_shrink() {
        let fixations = vec![Fixation::new(0.0, 0.0, 0.01), Fixation::new(1.0, 0.0, 0.01)];

        assert_eq!(merge_by_amplitude(&fixations, 100.0, 1.0), fixations);
        assert_eq!(merge_by_direction(&fixations, 180.0, 1.0), fixations);
    }

    #[test]
    fn direction_merge_can_absorb_final_saccade() {
        let fixations = vec![
            Fixation::new(0.0, 0.0, 0.4),
            Fixation::new(100.0, 0.0, 0.1),
            Fixation::new(200.0, 0.0, 0.4),
        ];
        let merged = merge_by_direction(&fixations, 10.0, 0.2);

        assert_eq!(merged, vec![Fixation::new(0.0, 0.0, 0.5), Fixation::new(200.0, 0.0, 0.4)]);
    }

    #[test]
    fn angle_between_handles_degenerate_vectors() {
        assert!(angle_between((0.0, 0.0), (1.0, 0.0)).is_none());
        assert_abs_diff_eq!(angle_between((1.0, 0.0), (0.0, 1.0)).unwrap(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle_between((1.0, 0.0), (-1.0, 0.0)).unwrap(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle_between((1.0, 0.0), (5.0, 0.0)).unwrap(), 0.0);
        // acos is ill-conditioned near a cosine of 1
        assert_abs_diff_eq!(angle_between((2.0, 2.0), (5.0, 5.0)).unwrap(), 0.0, epsilon = 1e-5);
    }
}
