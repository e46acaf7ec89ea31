use serde::{Deserialize, Serialize};

/// A shot or a scene of merged shots, in seconds from movie start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub onset: f64,
    pub duration: f64,
}

impl Shot {
    pub fn new(onset: f64, duration: f64) -> Self {
        Self { onset, duration }
    }

    pub fn end(&self) -> f64 {
        self.onset + self.duration
    }

    /// Scene spanning from this shot's onset to the end of `later`.
    pub fn extended_to(&self, later: &Shot) -> Shot {
        Shot::new(self.onset, later.end() - self.onset)
    }
}

/// Group consecutive shots into scenes lasting at least `ldur` seconds.
///
/// A trailing remainder shorter than `ldur` joins the previous scene. Without
/// `group_shots` the shots are returned unchanged.
pub fn longshot(shots: &[Shot], group_shots: bool, ldur: f64) -> Vec<Shot> {
    if !group_shots {
        return shots.to_vec();
    }

    let mut scenes: Vec<Shot> = Vec::new();
    let mut current: Option<Shot> = None;

    for shot in shots {
        let scene = match current.take() {
            Some(open) => open.extended_to(shot),
            None => *shot,
        };

        if scene.duration >= ldur {
            scenes.push(scene);
        } else {
            current = Some(scene);
        }
    }

    // Fold a short tail into the last complete scene
    if let Some(rest) = current {
        match scenes.last_mut() {
            Some(previous) => *previous = previous.extended_to(&rest),
            None => scenes.push(rest),
        }
    }

    scenes
}

/// Onsets of all scenes lasting at least `min_duration` seconds.
pub fn create_onsets(scenes: &[Shot], min_duration: f64) -> Vec<f64> {
    scenes
        .iter()
        .filter(|scene| scene.duration >= min_duration)
        .map(|scene| scene.onset)
        .collect()
}
