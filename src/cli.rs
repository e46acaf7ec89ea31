//! Command-line interface

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::comparison::{compare_scanpaths, ComparisonConfig, ScreenSize};
use crate::forrest::do_comparison_forrest;
use crate::io::{read_events, read_fixations, read_shots};
use crate::settings::Settings;

/// Compare gaze scanpaths along five similarity dimensions
#[derive(Parser, Debug)]
#[command(name = "multimatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (JSON); command-line flags override its values
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two fixation tables
    Compare {
        /// First scanpath (TSV with start_x, start_y, duration)
        path1: PathBuf,

        /// Second scanpath
        path2: PathBuf,

        #[command(flatten)]
        comparison: ComparisonArgs,
    },

    /// Compare two event-detected recordings of a movie scene by scene
    Forrest {
        /// Shot annotation (TSV with onset, duration)
        #[arg(short, long)]
        shots: PathBuf,

        /// First recording (TSV with onset, duration, label, start/end coordinates)
        path1: PathBuf,

        /// Second recording
        path2: PathBuf,

        #[command(flatten)]
        comparison: ComparisonArgs,

        /// Merge short shots into longer scenes
        #[arg(long)]
        group_shots: bool,

        /// Minimum scene length when grouping shots, seconds
        #[arg(long)]
        ldur: Option<f64>,

        /// Scanpath length taken from each scene onset, seconds
        #[arg(long)]
        window: Option<f64>,

        /// Drop smooth pursuits instead of counting them as fixations
        #[arg(long)]
        no_pursuits: bool,
    },

    /// Write a settings file with default values
    InitConfig {
        /// Where to write the settings
        #[arg(short, long, default_value = "multimatch.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Flags shared by both comparison commands
#[derive(Args, Debug, Default)]
pub struct ComparisonArgs {
    /// Screen extent in pixels
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub screen: Option<Vec<f64>>,

    /// Simplify scanpaths before comparing them
    #[arg(long)]
    pub grouping: bool,

    /// Direction threshold for grouping, degrees
    #[arg(long)]
    pub tdir: Option<f64>,

    /// Duration threshold for grouping, seconds
    #[arg(long)]
    pub tdur: Option<f64>,

    /// Amplitude threshold for grouping, pixels
    #[arg(long)]
    pub tamp: Option<f64>,
}

impl ComparisonArgs {
    /// Overlay the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut ComparisonConfig) -> Result<()> {
        if let Some(screen) = &self.screen {
            config.screen = ScreenSize::from_slice(screen)?;
        }
        if self.grouping {
            config.grouping = true;
        }
        if let Some(tdir) = self.tdir {
            config.thresholds.direction_deg = tdir;
        }
        if let Some(tdur) = self.tdur {
            config.thresholds.duration_secs = tdur;
        }
        if let Some(tamp) = self.tamp {
            config.thresholds.amplitude_px = tamp;
        }
        Ok(())
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn execute(self) -> Result<()> {
        let mut settings = Settings::load(self.config.as_deref())?;

        match self.command {
            Commands::Compare {
                path1,
                path2,
                comparison,
            } => {
                comparison.apply(&mut settings.comparison)?;

                let fixations1 = read_fixations(&path1)?;
                let fixations2 = read_fixations(&path2)?;
                let similarity = compare_scanpaths(&fixations1, &fixations2, &settings.comparison)
                    .with_context(|| {
                        format!("Failed to compare {} and {}", path1.display(), path2.display())
                    })?;

                println!("{}", serde_json::to_string_pretty(&similarity)?);
            }
            Commands::Forrest {
                shots,
                path1,
                path2,
                comparison,
                group_shots,
                ldur,
                window,
                no_pursuits,
            } => {
                comparison.apply(&mut settings.comparison)?;
                if group_shots {
                    settings.scenes.group_shots = true;
                }
                if let Some(ldur) = ldur {
                    settings.scenes.min_shot_duration = ldur;
                }
                if let Some(window) = window {
                    settings.scenes.window_secs = window;
                }
                if no_pursuits {
                    settings.scenes.pursuits_as_fixations = false;
                }

                let shots = read_shots(&shots)?;
                let events1 = read_events(&path1)?;
                let events2 = read_events(&path2)?;
                let result = do_comparison_forrest(&shots, &events1, &events2, &settings.forrest())?;

                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Commands::InitConfig { output, force } => {
                if output.exists() && !force {
                    anyhow::bail!("{} already exists, pass --force to overwrite", output.display());
                }
                settings.save(&output)?;
                log::info!("Wrote settings to {}", output.display());
            }
        }

        Ok(())
    }
}
