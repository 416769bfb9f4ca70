use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "random_items",
        conflicts_with = "random_items"
    )]
    pub input_file: Option<PathBuf>,
    /// Lay out a randomly generated instance with this many items instead of reading one
    #[arg(short, long, value_name = "N")]
    pub random_items: Option<usize>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
