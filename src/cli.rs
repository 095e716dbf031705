use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ArchViz Estimator - price a 3D visualization project from the terminal
#[derive(Parser)]
#[command(name = "archviz")]
#[command(about = "Interactive price estimator for architectural 3D visualization")]
#[command(version)]
pub struct Cli {
    /// Settings file (layout rows, visibility band, animation, receipt directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive calculator
    Run {
        /// Directory receipts are written to (overrides the settings file)
        #[arg(long)]
        receipt_dir: Option<PathBuf>,
    },
    /// Price a selections file and print the breakdown
    Quote {
        /// Path to the selections JSON file
        selections: PathBuf,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the text receipt of a selections file
    Receipt {
        /// Path to the selections JSON file
        selections: PathBuf,

        /// Output file (default: investment-calculator-YYYY-MM-DD.txt in the receipt directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a selections file
    Validate {
        /// Path to the selections JSON file
        selections: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
