//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use onboard_freeze::RequestType;
use std::path::PathBuf;

use crate::config::FormatChoice;

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (.json, .yaml, .yml or .toml)")
}

fn parse_format(raw: &str) -> Result<FormatChoice, String> {
    raw.parse::<FormatChoice>().map_err(|e| e.to_string())
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_parser(parse_format)
        .help("auto, timed-cue or plain-text (default: from config, else auto)")
}

fn format_config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file supplying the default format")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Moment to evaluate, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (default: now)")
}

fn parse_request(raw: &str) -> Result<RequestType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "onboarding" => Ok(RequestType::Onboarding),
        "offboarding" => Ok(RequestType::Offboarding),
        other => Err(format!("unknown request type '{other}'")),
    }
}

/// Build the `onboard` command
#[must_use]
pub fn command() -> Command {
    Command::new("onboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Meeting transcripts, change freezes and adoption metrics for onboarding admins")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a transcript into speaker blocks")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Transcript file"),
                )
                .arg(format_arg())
                .arg(format_config_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("search")
                .about("Find a phrase in a transcript")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Transcript file"),
                )
                .arg(Arg::new("query").required(true).help("Text to find, case-insensitive"))
                .arg(format_arg())
                .arg(format_config_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("freeze-check")
                .about("Report whether a freeze period is in force")
                .arg(config_arg())
                .arg(date_arg()),
        )
        .subcommand(
            Command::new("notice")
                .about("Route a provisioning request and print the resulting notice")
                .arg(config_arg())
                .arg(
                    Arg::new("person")
                        .long("person")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file describing the starter or leaver"),
                )
                .arg(date_arg())
                .arg(
                    Arg::new("request")
                        .long("request")
                        .default_value("onboarding")
                        .value_parser(parse_request)
                        .help("onboarding or offboarding"),
                ),
        )
        .subcommand(
            Command::new("usage")
                .about("Summarise meeting-notes telemetry")
                .arg(
                    Arg::new("events")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON export of usage events"),
                )
                .arg(
                    Arg::new("top")
                        .long("top")
                        .default_value("10")
                        .value_parser(value_parser!(usize))
                        .help("Rows in the top users table"),
                )
                .arg(json_flag()),
        )
}
