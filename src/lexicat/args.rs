use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lexicat")]
#[command(version)]
#[command(about = "Interactive vocabulary organizer for the terminal", long_about = None)]
pub struct Cli {
    /// Vocabulary file to load before the menu starts
    pub file: Option<PathBuf>,

    /// Words per line when printing a category (overrides the config file)
    #[arg(short, long)]
    pub words_per_line: Option<usize>,
}
