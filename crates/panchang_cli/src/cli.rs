use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Telugu panchangam calculator.
#[derive(Parser)]
#[command(name = "panchang", version, about = "Telugu panchangam calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Panchangam for one or more consecutive civil days.
    Day(DayArgs),
    /// Every boundary of one anga across a civil year.
    Scan(ScanArgs),
    /// Festivals observed on a civil day.
    Festivals(FestivalsArgs),
    /// Occurrences of one festival in a date range.
    FestivalDates(FestivalDatesArgs),
    /// Sidereal rashi chart of the nine grahas.
    Chart(ChartArgs),
    /// Ruler of the day (dina-adhipati).
    Ruler(RulerArgs),
    /// Sunrise, sunset and twilight times.
    Sunrise(SunriseArgs),
}

/// Observer location; unset fields fall back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Longitude in degrees, east positive.
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,
    /// UTC offset in hours (e.g. 5.5).
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,
}

#[derive(Args)]
pub struct DayArgs {
    /// Local civil date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    /// Number of consecutive days to print.
    #[arg(long, default_value = "1")]
    pub days: u32,
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Civil year.
    #[arg(long, allow_hyphen_values = true)]
    pub year: i32,
    /// Anga kind: tithi, nakshatra, yoga or karana.
    #[arg(long, default_value = "tithi")]
    pub kind: String,
    /// Print only the summary line.
    #[arg(long)]
    pub summary: bool,
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args)]
pub struct FestivalsArgs {
    /// Local civil date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,
    /// List every rule in the festival table instead.
    #[arg(long, conflicts_with = "date")]
    pub list: bool,
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args)]
pub struct FestivalDatesArgs {
    /// Festival id from the table (e.g. ugadi).
    #[arg(long)]
    pub id: String,
    /// First local civil date of the range (YYYY-MM-DD).
    #[arg(long)]
    pub from: String,
    /// Local civil date ending the range, exclusive (YYYY-MM-DD).
    #[arg(long)]
    pub to: String,
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Local civil date (YYYY-MM-DD); the chart is cast at sunrise.
    #[arg(long, required_unless_present = "at")]
    pub date: Option<String>,
    /// Explicit UTC instant (YYYY-MM-DDThh:mm:ssZ) instead of sunrise.
    #[arg(long)]
    pub at: Option<String>,
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args)]
pub struct RulerArgs {
    /// Local civil date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    /// Nakshatra index the count starts from (0-26); Ashwini when omitted.
    #[arg(long)]
    pub start: Option<u8>,
    /// Method: main, sulabha or mathantara.
    #[arg(long, default_value = "main")]
    pub method: String,
    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Args)]
pub struct SunriseArgs {
    /// Local civil date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    /// Also print civil, nautical and astronomical twilight.
    #[arg(long)]
    pub twilight: bool,
    #[command(flatten)]
    pub location: LocationArgs,
}
