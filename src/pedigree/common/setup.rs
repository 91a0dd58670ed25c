use clap::{builder::EnumValueParser, value_parser, Arg, ArgGroup, ArgMatches, Command, ValueEnum};
use env_logger::{Builder, Env};
use serde::Deserialize;
use std::io::Write;

use crate::pedigree::model::InferenceConfig;

/// How the posterior table is written out
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// Indented per-person listing with fixed decimals
    #[serde(rename = "text")]
    Text,

    /// One JSON object keyed by person
    #[serde(rename = "json")]
    Json,
}

/// These options define the inputs from the user.
/// Exactly one of `data_file` and `scenario_name` is set.
#[derive(Deserialize, Clone, Debug)]
pub struct CommandLineOptions {
    pub data_file: Option<String>,
    pub scenario_name: Option<String>,
    pub tables_file: Option<String>,
    pub output_format: OutputFormat,
    pub output_file: Option<String>,
    pub precision: usize,
    pub max_population: usize,
    pub colorize: bool,
}

impl CommandLineOptions {
    pub fn inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            max_population: self.max_population,
        }
    }
}

/// Installs the global logger, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .try_init();
}

pub fn build_command() -> Command {
    Command::new("HEREDITY")
        .version("1.0")
        .about("Exact posterior gene and trait probabilities across a family tree.")
        .arg(
            Arg::new("data_file")
                .long("data_file")
                .value_name("FILE")
                .help("CSV file with columns name,mother,father,trait"),
        )
        .arg(
            Arg::new("scenario_name")
                .long("scenario_name")
                .value_name("STRING")
                .help("Built-in family to run instead of a data file"),
        )
        .group(
            ArgGroup::new("family_source")
                .args(["data_file", "scenario_name"])
                .required(true)
                .multiple(false),
        )
        .arg(
            Arg::new("tables_file")
                .long("tables_file")
                .value_name("FILE")
                .help("JSON probability tables (optional, defaults to the built-in tables)"),
        )
        .arg(
            Arg::new("output_format")
                .long("output_format")
                .value_parser(EnumValueParser::<OutputFormat>::new())
                .help("Report format: 'text' or 'json'")
                .default_value("text"),
        )
        .arg(
            Arg::new("output_file")
                .long("output_file")
                .value_name("FILE")
                .help("Write the report to this file instead of stdout"),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .help("Decimal places in the text report")
                .default_value("4"),
        )
        .arg(
            Arg::new("max_population")
                .long("max_population")
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .help("Refuse families larger than this")
                .default_value("12"),
        )
        .arg(
            Arg::new("no_color")
                .long("no_color")
                .help("Disable coloured text output")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn options_from_matches(matches: &ArgMatches) -> CommandLineOptions {
    let defaults = InferenceConfig::default();
    CommandLineOptions {
        data_file: matches.get_one::<String>("data_file").cloned(),
        scenario_name: matches.get_one::<String>("scenario_name").cloned(),
        tables_file: matches.get_one::<String>("tables_file").cloned(),
        output_format: matches
            .get_one::<OutputFormat>("output_format")
            .copied()
            .unwrap_or(OutputFormat::Text),
        output_file: matches.get_one::<String>("output_file").cloned(),
        precision: matches.get_one::<usize>("precision").copied().unwrap_or(4),
        max_population: matches
            .get_one::<usize>("max_population")
            .copied()
            .unwrap_or(defaults.max_population),
        colorize: !matches.get_flag("no_color"),
    }
}

pub fn parse_configuration_options() -> CommandLineOptions {
    init_logging();
    let matches = build_command().get_matches();
    options_from_matches(&matches)
}
