mod utils;

pub mod cli;
pub mod comparison;
pub mod error;
pub mod forrest;
pub mod io;
pub mod scanpath;
pub mod settings;

pub use comparison::{compare_scanpaths, do_comparison, ComparisonConfig, GroupingThresholds, ScreenSize, Similarity};
pub use error::{MultiMatchError, PathSide};
pub use forrest::{do_comparison_forrest, ForrestComparison, ForrestConfig, SceneConfig};
pub use scanpath::Fixation;
pub use settings::Settings;
pub use utils::stats::median;

pub fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse_args();

    // Initialize logging (reads RUST_LOG env var, --verbose lowers the floor to debug)
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    cli.execute()
}
