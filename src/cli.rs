use crate::classifier::CategoryPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-reclass")]
#[command(about = "Service job reclassification and category audit tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print per-job classification traces
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a jobs export and write detail + summary artifacts
    Analyze {
        /// Jobs JSON file (array of job records)
        #[arg(required = true)]
        input: PathBuf,

        /// Output directory (default: the input file's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Electrical category policy (work-type/urgency-aware)
        #[arg(short, long)]
        policy: Option<CategoryPolicy>,

        /// Number of combination rows in the summary
        #[arg(short, long)]
        top: Option<usize>,

        /// Description snippet length in characters (0 = full text)
        #[arg(long)]
        snippet: Option<usize>,

        /// Custom category map JSON file ({identifier: label})
        #[arg(long)]
        categories: Option<PathBuf>,
    },

    /// Rebuild and print the summary from an existing detail artifact
    Report {
        /// Detail JSON file from a previous analyze run
        #[arg(required = true)]
        input: PathBuf,

        /// Also write the summary JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of combination rows in the summary
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show or edit persisted defaults
    Config {
        /// Set the default electrical category policy
        #[arg(long)]
        set_policy: Option<CategoryPolicy>,

        /// Set the default combination row count
        #[arg(long)]
        set_top: Option<usize>,

        /// Set the default snippet length
        #[arg(long)]
        set_snippet: Option<usize>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}
