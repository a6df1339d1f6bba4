//! CLI argument definitions for `intake`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use intake_model::ConstructionScheme;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Normalize OCR-entered insurance intake fields",
    long_about = "Normalize noisy values from insurance verification forms.\n\n\
                  Each subcommand applies one field rule and prints the canonical value.\n\
                  Values that cannot be normalized print as an empty line."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow insured names and addresses in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Century pivot for two-digit years (overrides the config file).
    #[arg(long = "year-pivot", value_name = "0-99", global = true)]
    pub year_pivot: Option<u8>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Expand a year built ("45" -> "1945").
    Year(ValueArg),

    /// Strip the "County" suffix from a county name.
    County(ValueArg),

    /// Normalize a protection class ("05" -> "5").
    ProtectionClass(ValueArg),

    /// Parse a whole-dollar amount ("$1,500" -> "1500").
    Amount(ValueArg),

    /// Round a story count up to a whole number.
    Stories(ValueArg),

    /// Sum the four total insured value components.
    Tiv(TivArgs),

    /// Extract a bracketed control number from an email subject.
    ControlNumber(ValueArg),

    /// Extract a submission ID from a batch name.
    SubmissionId(ValueArg),

    /// Classify a construction description.
    Construction(ConstructionArgs),

    /// Extract the building number from a street line.
    BuildingNumber(BuildingNumberArgs),

    /// Split an insured name/address block (prints JSON).
    SplitBlock(SplitBlockArgs),

    /// Decompose a free-text address through the geocoding provider (prints JSON).
    Geocode(GeocodeArgs),

    /// List the recognized construction labels and their codes.
    Labels(LabelsArgs),
}

#[derive(Args)]
pub struct ValueArg {
    /// Raw field value.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct TivArgs {
    #[arg(value_name = "BUILDING", allow_hyphen_values = true)]
    pub building_value: String,

    #[arg(value_name = "BPP", allow_hyphen_values = true)]
    pub business_personal_property: String,

    #[arg(value_name = "BI", allow_hyphen_values = true)]
    pub business_income: String,

    #[arg(value_name = "MISC", allow_hyphen_values = true)]
    pub misc_real_property: String,
}

#[derive(Args)]
pub struct ConstructionArgs {
    /// Construction description.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Coding scheme (defaults to the configured scheme).
    #[arg(long = "scheme", value_enum)]
    pub scheme: Option<SchemeArg>,
}

#[derive(Args)]
pub struct BuildingNumberArgs {
    /// Street line starting with the building number.
    #[arg(value_name = "STREET")]
    pub street: String,

    /// Keep a hyphenated range instead of only its first number.
    #[arg(long = "full-range")]
    pub full_range: bool,
}

#[derive(Args)]
pub struct SplitBlockArgs {
    /// File containing the block (reads stdin when omitted or "-").
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct GeocodeArgs {
    /// Free-text address.
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Geocoding endpoint (overrides the config file).
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file).
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Exit with an error instead of printing an empty location.
    #[arg(long = "fail-on-error")]
    pub fail_on_error: bool,
}

#[derive(Args)]
pub struct LabelsArgs {
    /// Show a single scheme.
    #[arg(long = "scheme", value_enum)]
    pub scheme: Option<SchemeArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    #[value(alias = "ims")]
    Internal,
    #[value(name = "iso-standard", alias = "iso")]
    IsoStandard,
}

impl From<SchemeArg> for ConstructionScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Internal => Self::Internal,
            SchemeArg::IsoStandard => Self::IsoStandard,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
