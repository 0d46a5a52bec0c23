use std::path::PathBuf;

use turnoutmap::Year;

/// County voter turnout change maps
#[derive(clap::Parser, Debug)]
#[command(name = "turnoutmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Session config file (JSON); flags override its values
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Draw the turnout change map for two years (forbids stdout)
    Render(RenderArgs),

    /// Print the side-panel comparison for one county
    Detail(DetailArgs),
}

/// Where the data comes from and which years are compared.
#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Turnout statistics JSON (path or http(s) URL)
    #[arg(long)]
    pub stats: Option<String>,

    /// County boundaries GeoJSON (path or http(s) URL)
    #[arg(long)]
    pub counties: Option<String>,

    /// Current (later) election year
    #[arg(long)]
    pub current: Option<Year>,

    /// Previous (earlier) election year
    #[arg(long)]
    pub previous: Option<Year>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Geojson,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// County to highlight (FIPS code)
    #[arg(long)]
    pub select: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Output file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct DetailArgs {
    /// County FIPS code, e.g. 06001 or 6001
    pub county: String,

    #[command(flatten)]
    pub data: DataArgs,

    /// Print the panel markup instead of plain text
    #[arg(long)]
    pub html: bool,
}
