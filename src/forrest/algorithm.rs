use serde::{Deserialize, Serialize};

use crate::comparison::{compare_scanpaths, Similarity};
use crate::error::Result;
use crate::forrest::chunks::{create_chunks, ChunkBounds};
use crate::forrest::config::ForrestConfig;
use crate::forrest::events::{preprocess, EyeEvent, TimedFixation};
use crate::forrest::shots::{create_onsets, longshot, Shot};
use crate::scanpath::Fixation;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Comparison result for one scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneComparison {
    pub onset: f64,
    pub duration: f64,

    /// `None` when either chunk holds too few fixations to compare
    pub similarity: Option<Similarity>,
}

/// Per-scene results of comparing two viewings of a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForrestComparison {
    pub scenes: Vec<SceneComparison>,
}

impl ForrestComparison {
    /// One row of five scores per scene, `None` for scenes that were skipped.
    pub fn similarity_matrix(&self) -> Vec<Option<[f64; 5]>> {
        self.scenes
            .iter()
            .map(|scene| scene.similarity.map(|s| s.to_array()))
            .collect()
    }

    pub fn onsets(&self) -> Vec<f64> {
        self.scenes.iter().map(|scene| scene.onset).collect()
    }

    pub fn durations(&self) -> Vec<f64> {
        self.scenes.iter().map(|scene| scene.duration).collect()
    }

    pub fn compared_count(&self) -> usize {
        self.scenes
            .iter()
            .filter(|scene| scene.similarity.is_some())
            .count()
    }
}

/// Compare two gaze recordings of the same movie scene by scene.
///
/// Shots are optionally merged into longer scenes, both event streams are
/// reduced to fixations, and a scanpath of `window_secs` from every long
/// enough scene onset is compared. Scenes whose chunks are too short carry no
/// similarity; any other error aborts the whole comparison.
pub fn do_comparison_forrest(
    shots: &[Shot],
    events1: &[EyeEvent],
    events2: &[EyeEvent],
    config: &ForrestConfig,
) -> Result<ForrestComparison> {
    config.validate()?;
    let scene_config = &config.scenes;

    // Step 1: Scenes and their onsets
    let scenes = longshot(shots, scene_config.group_shots, scene_config.min_shot_duration);
    let onsets = create_onsets(&scenes, scene_config.window_secs);

    // Step 2: Fixations of both recordings
    let screen = &config.comparison.screen;
    let fixations1 = preprocess(events1, screen, scene_config.pursuits_as_fixations);
    let fixations2 = preprocess(events2, screen, scene_config.pursuits_as_fixations);

    // Step 3: Fixation ranges per scene
    let chunks1 = create_chunks(&onsets, &fixation_onsets(&fixations1), scene_config.window_secs);
    let chunks2 = create_chunks(&onsets, &fixation_onsets(&fixations2), scene_config.window_secs);

    // Step 4: Compare scene by scene
    let mut results = Vec::with_capacity(onsets.len());
    for (index, &onset) in onsets.iter().enumerate() {
        let path1 = chunk_fixations(&fixations1, chunks1.get(index));
        let path2 = chunk_fixations(&fixations2, chunks2.get(index));

        let similarity = match compare_scanpaths(&path1, &path2, &config.comparison) {
            Ok(similarity) => Some(similarity),
            Err(err) if err.is_insufficient_data() => {
                log_warn!("skipping scene at {:.2}s: {}", onset, err);
                None
            }
            Err(err) => return Err(err),
        };

        results.push(SceneComparison {
            onset,
            duration: scene_config.window_secs,
            similarity,
        });
    }

    let comparison = ForrestComparison { scenes: results };
    log_info!(
        "compared {} of {} scenes ({} shots)",
        comparison.compared_count(),
        comparison.scenes.len(),
        shots.len()
    );

    Ok(comparison)
}

fn fixation_onsets(fixations: &[TimedFixation]) -> Vec<f64> {
    fixations.iter().map(|fixation| fixation.onset).collect()
}

fn chunk_fixations(fixations: &[TimedFixation], chunk: Option<&ChunkBounds>) -> Vec<Fixation> {
    match chunk {
        Some(bounds) => fixations[bounds.range()]
            .iter()
            .map(TimedFixation::fixation)
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forrest::config::SceneConfig;
    use crate::forrest::events::EventLabel;
    use approx::assert_abs_diff_eq;

    fn fixation_event(onset: f64, x: f64, y: f64) -> EyeEvent {
        EyeEvent {
            onset,
            duration: 0.2,
            label: EventLabel::Fixation,
            start_x: x,
            start_y: y,
            end_x: x,
            end_y: y,
        }
    }

    /// 121 fixations, one every 250 ms from 0 to 30 s.
    fn recording(offset: f64) -> Vec<EyeEvent> {
        (0..=120)
            .map(|i| {
                let x = 100.0 + ((i * 137) % 1000) as f64 + offset;
                let y = 80.0 + ((i * 89) % 500) as f64;
                fixation_event(i as f64 * 0.25, x, y)
            })
            .collect()
    }

    fn shots() -> Vec<Shot> {
        vec![
            Shot::new(0.0, 5.0),
            Shot::new(5.0, 3.0),
            Shot::new(8.0, 10.0),
            Shot::new(18.0, 12.0),
            Shot::new(40.0, 6.0),
        ]
    }

    #[test]
    fn identical_recordings_are_identical_in_every_scene() {
        let events = recording(0.0);
        let result = do_comparison_forrest(&shots(), &events, &events, &ForrestConfig::default()).unwrap();

        assert_eq!(result.onsets(), vec![0.0, 8.0, 18.0, 40.0]);
        assert_eq!(result.durations(), vec![4.92; 4]);
        for row in result.similarity_matrix().into_iter().take(3) {
            for score in row.unwrap() {
                assert_abs_diff_eq!(score, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn scene_beyond_recording_has_no_similarity() {
        let events = recording(0.0);
        let result = do_comparison_forrest(&shots(), &events, &events, &ForrestConfig::default()).unwrap();

        assert_eq!(result.compared_count(), 3);
        assert!(result.scenes[3].similarity.is_none());
    }

    #[test]
    fn grouped_shots_give_fewer_longer_scenes() {
        let events = recording(0.0);
        let config = ForrestConfig {
            scenes: SceneConfig {
                group_shots: true,
                min_shot_duration: 7.0,
                window_secs: 6.0,
                ..SceneConfig::default()
            },
            ..ForrestConfig::default()
        };
        let result = do_comparison_forrest(&shots(), &events, &events, &config).unwrap();

        // 0-5 and 5-8 merge; the short tail at 40 s joins the 18 s scene
        assert_eq!(result.onsets(), vec![0.0, 8.0, 18.0]);
    }

    #[test]
    fn shifted_recording_scores_below_one() {
        let result = do_comparison_forrest(
            &shots(),
            &recording(0.0),
            &recording(40.0),
            &ForrestConfig::default(),
        )
        .unwrap();

        let first = result.scenes[0].similarity.unwrap();
        assert!(first.position < 1.0);
        assert!(first.position > 0.9);
        assert_abs_diff_eq!(first.vector, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first.duration, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn invalid_window_is_rejected() {
        let events = recording(0.0);
        let config = ForrestConfig {
            scenes: SceneConfig {
                window_secs: 0.0,
                ..SceneConfig::default()
            },
            ..ForrestConfig::default()
        };

        assert!(do_comparison_forrest(&shots(), &events, &events, &config).is_err());
    }
}
