pub mod algorithm;
pub mod alignment;
pub mod config;
pub mod matrix;
pub mod scoring;
pub mod types;

pub use algorithm::{compare_scanpaths, do_comparison, MIN_FIXATIONS};
pub use config::{ComparisonConfig, GroupingThresholds, ScreenSize};
pub use types::{Alignment, Dissimilarity, Similarity};
