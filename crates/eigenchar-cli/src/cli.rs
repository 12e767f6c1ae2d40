use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eigenchar",
    about = "PCA + nearest-neighbour printed-character classifier"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Train a model from labelled pages and persist it.
    Train {
        /// Directory containing the page file trios.
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Output model path.
        #[arg(long, default_value = "model.json")]
        model: PathBuf,
        /// Training config file (JSON); defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Page stems, e.g. `train.0 train.1`.
        #[arg(required = true)]
        pages: Vec<String>,
    },
    /// Classify one page and print its labels.
    Classify {
        /// Trained model path.
        #[arg(long, default_value = "model.json")]
        model: PathBuf,
        /// Directory containing the page file trio.
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Page stem.
        #[arg(required = true)]
        page: String,
    },
    /// Classify labelled pages and report accuracy.
    Evaluate {
        /// Trained model path.
        #[arg(long, default_value = "model.json")]
        model: PathBuf,
        /// Directory containing the page file trios.
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Page stems.
        #[arg(required = true)]
        pages: Vec<String>,
    },
}
