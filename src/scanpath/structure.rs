use serde::{Deserialize, Serialize};

/// A single gaze fixation: where it started and how long it lasted (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fixation {
    pub start_x: f64,
    pub start_y: f64,
    pub duration: f64,
}

impl Fixation {
    pub fn new(start_x: f64, start_y: f64, duration: f64) -> Self {
        Self {
            start_x,
            start_y,
            duration,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.start_x.is_finite() && self.start_y.is_finite() && self.duration.is_finite()
    }
}

impl From<(f64, f64, f64)> for Fixation {
    fn from((start_x, start_y, duration): (f64, f64, f64)) -> Self {
        Self::new(start_x, start_y, duration)
    }
}

impl From<[f64; 3]> for Fixation {
    fn from([start_x, start_y, duration]: [f64; 3]) -> Self {
        Self::new(start_x, start_y, duration)
    }
}

/// Vector representation of a scanpath as parallel arrays.
///
/// The three `fixation_*` arrays hold one entry per fixation. The six
/// `saccade_*` arrays hold one entry per saccade, i.e. one fewer. Saccade `i`
/// leaves fixation `i` (`saccade_x`/`saccade_y`) and lands on fixation `i + 1`
/// (`saccade_lenx`/`saccade_leny` is the displacement). `saccade_theta` is the
/// direction in radians as returned by `atan2`, `saccade_rho` the amplitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanpathStructure {
    pub fixation_x: Vec<f64>,
    pub fixation_y: Vec<f64>,
    pub fixation_dur: Vec<f64>,
    pub saccade_x: Vec<f64>,
    pub saccade_y: Vec<f64>,
    pub saccade_lenx: Vec<f64>,
    pub saccade_leny: Vec<f64>,
    pub saccade_theta: Vec<f64>,
    pub saccade_rho: Vec<f64>,
}

impl ScanpathStructure {
    pub fn fixation_count(&self) -> usize {
        self.fixation_dur.len()
    }

    pub fn saccade_count(&self) -> usize {
        self.saccade_rho.len()
    }

    /// Rebuild the fixation sequence the structure was generated from.
    pub fn fixations(&self) -> Vec<Fixation> {
        self.fixation_x
            .iter()
            .zip(&self.fixation_y)
            .zip(&self.fixation_dur)
            .map(|((&x, &y), &dur)| Fixation::new(x, y, dur))
            .collect()
    }

    pub fn total_duration(&self) -> f64 {
        self.fixation_dur.iter().sum()
    }
}

/// Cartesian to polar: `(rho, theta)` with `theta` in (-π, π].
pub fn cart2pol(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

/// Build the vector representation of a fixation sequence.
///
/// A single fixation (or none) yields empty saccade arrays.
pub fn gen_scanpath_structure(fixations: &[Fixation]) -> ScanpathStructure {
    let saccades = fixations.len().saturating_sub(1);
    let mut structure = ScanpathStructure {
        fixation_x: Vec::with_capacity(fixations.len()),
        fixation_y: Vec::with_capacity(fixations.len()),
        fixation_dur: Vec::with_capacity(fixations.len()),
        saccade_x: Vec::with_capacity(saccades),
        saccade_y: Vec::with_capacity(saccades),
        saccade_lenx: Vec::with_capacity(saccades),
        saccade_leny: Vec::with_capacity(saccades),
        saccade_theta: Vec::with_capacity(saccades),
        saccade_rho: Vec::with_capacity(saccades),
    };

    for fixation in fixations {
        structure.fixation_x.push(fixation.start_x);
        structure.fixation_y.push(fixation.start_y);
        structure.fixation_dur.push(fixation.duration);
    }

    for pair in fixations.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let lenx = to.start_x - from.start_x;
        let leny = to.start_y - from.start_y;
        let (rho, theta) = cart2pol(lenx, leny);

        structure.saccade_x.push(from.start_x);
        structure.saccade_y.push(from.start_y);
        structure.saccade_lenx.push(lenx);
        structure.saccade_leny.push(leny);
        structure.saccade_theta.push(theta);
        structure.saccade_rho.push(rho);
    }

    structure
}
