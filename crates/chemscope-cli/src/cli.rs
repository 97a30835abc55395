use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Mira Stanton",
    version,
    about = "ChemScope CLI - Explore chemical compound data from the PubChem database: properties, hazard summaries, similar compounds, and 3D structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explore one compound (optionally compared with a second) and write an HTML report.
    Explore(ExploreArgs),
    /// Print autocomplete suggestions for a partial compound name.
    Suggest(SuggestArgs),
}

/// Arguments for the `explore` subcommand.
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// The compound name to explore.
    #[arg(required = true, value_name = "NAME")]
    pub compound: String,

    /// A second compound name for side-by-side comparison.
    #[arg(long, value_name = "NAME")]
    pub compare: Option<String>,

    /// Use the Nth autocomplete suggestion (1-based) instead of the typed name.
    #[arg(long, value_name = "N")]
    pub select: Option<usize>,

    /// Use the Nth autocomplete suggestion (1-based) for the comparison compound.
    #[arg(long, value_name = "N", requires = "compare")]
    pub select_compare: Option<usize>,

    /// Path for the generated HTML report.
    #[arg(short, long, value_name = "PATH", default_value = "report.html")]
    pub output: PathBuf,

    /// Also export the charted property dataset as CSV.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Skip autocomplete lookups and use the typed names as-is.
    #[arg(long, conflicts_with_all = ["select", "select_compare"])]
    pub no_suggest: bool,
}

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// The partial compound name to complete.
    #[arg(required = true, value_name = "PREFIX")]
    pub query: String,
}
