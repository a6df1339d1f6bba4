//! Intake field normalization CLI.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use intake_cli::commands::{
    Field, labels_table, run_building_number, run_construction, run_field, run_geocode,
    run_split_block, run_tiv, to_json,
};
use intake_cli::config::IntakeConfig;
use intake_cli::logging::{LogConfig, LogFormat, init_logging};
use intake_model::{TotalInsuredValue, YearPivot};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<String> {
    let mut config = IntakeConfig::load(cli.config.as_deref())?.with_process_env();
    if let Some(pivot) = cli.year_pivot {
        config.normalization.year_pivot =
            YearPivot::new(pivot).context("invalid --year-pivot")?;
    }
    let options = &config.normalization;

    let output = match cli.command {
        Command::Year(arg) => run_field(Field::YearBuilt, &arg.value, options),
        Command::County(arg) => run_field(Field::County, &arg.value, options),
        Command::ProtectionClass(arg) => run_field(Field::ProtectionClass, &arg.value, options),
        Command::Amount(arg) => run_field(Field::Amount, &arg.value, options),
        Command::Stories(arg) => run_field(Field::Stories, &arg.value, options),
        Command::ControlNumber(arg) => run_field(Field::ControlNumber, &arg.value, options),
        Command::SubmissionId(arg) => run_field(Field::SubmissionId, &arg.value, options),
        Command::Tiv(args) => run_tiv(&TotalInsuredValue::new(
            args.building_value,
            args.business_personal_property,
            args.business_income,
            args.misc_real_property,
        )),
        Command::Construction(args) => {
            let scheme = args
                .scheme
                .map_or(options.construction_scheme, Into::into);
            run_construction(&args.value, scheme)
        }
        Command::BuildingNumber(args) => run_building_number(&args.street, args.full_range),
        Command::SplitBlock(args) => {
            let block = match args.file.as_deref() {
                Some(path) if path != Path::new("-") => {
                    let file = File::open(path)
                        .with_context(|| format!("open {}", path.display()))?;
                    run_split_block(file)?
                }
                _ => run_split_block(io::stdin().lock())?,
            };
            to_json(&block)?
        }
        Command::Geocode(args) => {
            let mut settings = config.geocoder.clone();
            if let Some(endpoint) = args.endpoint {
                settings = settings.with_endpoint(endpoint);
            }
            if let Some(timeout_secs) = args.timeout_secs {
                settings = settings.with_timeout_secs(timeout_secs);
            }
            let location = run_geocode(settings, &args.address, args.fail_on_error)?;
            to_json(&location)?
        }
        Command::Labels(args) => labels_table(args.scheme.map(Into::into)).to_string(),
    };
    Ok(output)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
