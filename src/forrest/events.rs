use serde::{Deserialize, Serialize};

use crate::comparison::ScreenSize;
use crate::scanpath::Fixation;

/// Event classes of an event-detected gaze stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventLabel {
    #[serde(rename = "FIXA")]
    Fixation,
    #[serde(rename = "PURS")]
    Pursuit,
    #[serde(rename = "SACC")]
    Saccade,
    #[serde(rename = "ISAC")]
    IntervalSaccade,
    #[serde(rename = "HPSO")]
    HighVelocityPso,
    #[serde(rename = "IHPS")]
    IntervalHighVelocityPso,
    #[serde(rename = "LPSO")]
    LowVelocityPso,
    #[serde(rename = "ILPS")]
    IntervalLowVelocityPso,
    #[serde(other)]
    Other,
}

/// One classified eye-movement event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeEvent {
    pub onset: f64,
    pub duration: f64,
    pub label: EventLabel,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// A fixation that remembers when it started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedFixation {
    pub onset: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub duration: f64,
}

impl TimedFixation {
    pub fn fixation(&self) -> Fixation {
        Fixation::new(self.start_x, self.start_y, self.duration)
    }
}

/// Turn each pursuit into two fixations, one at its start and one at its end
/// point, each lasting half the pursuit.
pub fn pursuits_to_fixations(events: &[EyeEvent]) -> Vec<TimedFixation> {
    events
        .iter()
        .filter(|event| event.label == EventLabel::Pursuit)
        .flat_map(|pursuit| {
            let half = pursuit.duration / 2.0;
            [
                TimedFixation {
                    onset: pursuit.onset,
                    start_x: pursuit.start_x,
                    start_y: pursuit.start_y,
                    duration: half,
                },
                TimedFixation {
                    onset: pursuit.onset + half,
                    start_x: pursuit.end_x,
                    start_y: pursuit.end_y,
                    duration: half,
                },
            ]
        })
        .collect()
}

/// Reduce a classified gaze stream to on-screen fixations ordered by onset.
pub fn preprocess(
    events: &[EyeEvent],
    screen: &ScreenSize,
    pursuits_as_fixations: bool,
) -> Vec<TimedFixation> {
    let mut fixations: Vec<TimedFixation> = events
        .iter()
        .filter(|event| event.label == EventLabel::Fixation)
        .map(|event| TimedFixation {
            onset: event.onset,
            start_x: event.start_x,
            start_y: event.start_y,
            duration: event.duration,
        })
        .collect();

    if pursuits_as_fixations {
        fixations.extend(pursuits_to_fixations(events));
    }

    fixations.retain(|fixation| screen.contains(fixation.start_x, fixation.start_y));
    fixations.sort_by(|a, b| a.onset.total_cmp(&b.onset));
    fixations
}
