pub mod simplify;
pub mod structure;

pub use simplify::simplify_scanpath;
pub use structure::{cart2pol, gen_scanpath_structure, Fixation, ScanpathStructure};
