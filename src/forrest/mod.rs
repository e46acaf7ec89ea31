pub mod algorithm;
pub mod chunks;
pub mod config;
pub mod events;
pub mod shots;

pub use algorithm::{do_comparison_forrest, ForrestComparison, SceneComparison};
pub use chunks::{create_chunks, take_closest_left, take_closest_right, ChunkBounds};
pub use config::{ForrestConfig, SceneConfig};
pub use events::{preprocess, EventLabel, EyeEvent, TimedFixation};
pub use shots::{create_onsets, longshot, Shot};
