use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Analysis,
}

/// Socioeconomic dashboard for Indonesian provinces, rendered in the terminal.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The provincial dataset in CSV format.
    #[clap(short, long, value_parser, default_value = "test.csv")]
    pub input: String,

    /// (home or analysis) Render a single page and exit. Without this option
    /// the interactive menu is shown.
    #[clap(short, long, value_enum)]
    pub page: Option<Page>,

    /// (province name or All) Initial province selection.
    #[clap(long, value_parser, default_value = "All")]
    pub province: String,

    /// (directory) Where CSV and JSON exports are written.
    #[clap(short, long, value_parser, default_value = ".")]
    pub out_dir: String,

    /// Maximum number of rows shown in each console table.
    #[clap(long, value_parser, default_value_t = 10)]
    pub preview_rows: usize,

    /// If passed, nothing is written to disk.
    #[clap(long)]
    pub no_export: bool,

    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long)]
    pub verbose: bool,
}
