//! Subcommand implementations
//!
//! Each command returns its rendered output so callers decide where it goes.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ArgMatches;
use onboard_freeze::{format_date, route, Person, RequestType, Routing};
use onboard_transcript::{
    find_matches, highlight, read_transcript, ConversationBlock, TranscriptStats,
};
use onboard_usage::{load_events, UsageReport, DEFAULT_TOP_EVENT_TYPES};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::config::{FormatChoice, OnboardConfig};

fn required<'a, T>(args: &'a ArgMatches, name: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(name)
        .with_context(|| format!("missing argument '{name}'"))
}

/// `--format` if given, else the config file's default, else auto
fn transcript_format(args: &ArgMatches) -> Result<FormatChoice> {
    if let Some(choice) = args.get_one::<FormatChoice>("format") {
        return Ok(*choice);
    }
    Ok(match args.get_one::<PathBuf>("config") {
        Some(path) => OnboardConfig::load(path)?.transcript.format,
        None => FormatChoice::Auto,
    })
}

/// Run the subcommand selected on the command line
///
/// # Errors
/// Propagates any failure from the selected command
pub fn dispatch(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("parse", args)) => parse_transcript(
            required::<PathBuf>(args, "file")?,
            transcript_format(args)?,
            args.get_flag("json"),
        ),
        Some(("search", args)) => search_transcript(
            required::<PathBuf>(args, "file")?,
            required::<String>(args, "query")?,
            transcript_format(args)?,
            args.get_flag("json"),
        ),
        Some(("freeze-check", args)) => {
            let config = OnboardConfig::load(required::<PathBuf>(args, "config")?)?;
            let at = parse_when(args.get_one::<String>("date").map(String::as_str))?;
            freeze_check(&config, at)
        }
        Some(("notice", args)) => {
            let config = OnboardConfig::load(required::<PathBuf>(args, "config")?)?;
            let person = load_person(required::<PathBuf>(args, "person")?)?;
            let at = parse_when(args.get_one::<String>("date").map(String::as_str))?;
            let request = *required::<RequestType>(args, "request")?;
            notice(&config, &person, at, request)
        }
        Some(("usage", args)) => usage_report(
            required::<PathBuf>(args, "events")?,
            *required::<usize>(args, "top")?,
            args.get_flag("json"),
        ),
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("no command given"),
    }
}

/// Parse `--date`, defaulting to the local current time.
///
/// A bare date means the start of that day.
///
/// # Errors
/// Returns error if the value is neither a date nor a timestamp
pub fn parse_when(raw: Option<&str>) -> Result<NaiveDateTime> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(Local::now().naive_local());
    };
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::default()))
        })
        .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))
}

fn load_person(path: &Path) -> Result<Person> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading person file {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing person file {}", path.display()))
}

fn load_blocks(path: &Path, format: FormatChoice) -> Result<Vec<ConversationBlock>> {
    read_transcript(path, format.format())
        .with_context(|| format!("loading transcript {}", path.display()))
}

/// Render parsed blocks
///
/// # Errors
/// Returns error if the transcript cannot be read
pub fn parse_transcript(path: &Path, format: FormatChoice, json: bool) -> Result<String> {
    let blocks = load_blocks(path, format)?;
    if json {
        return Ok(serde_json::to_string_pretty(&blocks)?);
    }

    let stats = TranscriptStats::compute(&blocks);
    let mut out = format!(
        "{} blocks, {} speakers\n",
        stats.block_count,
        stats.speaker_count()
    );
    for speaker in &stats.speakers {
        writeln!(out, "  {}: {} blocks, {} words", speaker.speaker, speaker.blocks, speaker.words)?;
    }
    for block in &blocks {
        let prefix = if block.timestamp.is_empty() {
            String::new()
        } else {
            format!("[{}] ", block.timestamp)
        };
        writeln!(out, "\n{prefix}{}", block.speaker)?;
        for line in block.message.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(out.trim_end().to_string())
}

/// Render search hits with the matched text bracketed
///
/// # Errors
/// Returns error if the transcript cannot be read
pub fn search_transcript(
    path: &Path,
    query: &str,
    format: FormatChoice,
    json: bool,
) -> Result<String> {
    let blocks = load_blocks(path, format)?;
    let matches = find_matches(&blocks, query);
    if json {
        return Ok(serde_json::to_string_pretty(&matches)?);
    }
    if matches.is_empty() {
        return Ok(format!("No matches for '{query}'"));
    }

    let mut out = format!("{} matches for '{query}'\n", matches.len());
    let mut last_block = None;
    for m in &matches {
        if last_block == Some(m.block_index) {
            continue;
        }
        last_block = Some(m.block_index);
        let block = &blocks[m.block_index];
        let text: String = highlight(&block.message, m.block_index, &matches)
            .into_iter()
            .map(|seg| if seg.is_match() { format!("[{}]", seg.text) } else { seg.text })
            .collect();
        writeln!(out, "#{} {}: {}", m.block_index, block.speaker, text.replace('\n', " "))?;
    }
    Ok(out.trim_end().to_string())
}

/// Report the freeze in force at `at` and the next one coming
///
/// # Errors
/// Returns error if the configured periods are invalid
pub fn freeze_check(config: &OnboardConfig, at: NaiveDateTime) -> Result<String> {
    let calendar = config.calendar().context("invalid freeze calendar")?;
    if let Some(period) = calendar.active_at(at) {
        return Ok(format!(
            "Frozen: {} ({} to {}), requests go to {}",
            period.name,
            format_date(period.start_date),
            format_date(period.end_date),
            period.helix_email
        ));
    }

    let mut out = format!("No freeze in force on {}", format_date(at.date()));
    if let Some(next) = calendar.next_after(at.date()) {
        write!(out, "\nNext: {} starts {}", next.name, format_date(next.start_date))?;
    }
    Ok(out)
}

/// Route a request and render the decision as JSON
///
/// # Errors
/// Returns error if the configured periods are invalid
pub fn notice(
    config: &OnboardConfig,
    person: &Person,
    at: NaiveDateTime,
    request: RequestType,
) -> Result<String> {
    let calendar = config.calendar().context("invalid freeze calendar")?;
    let routing = route(at, calendar.periods(), person, request);
    if let Routing::ManualTicket(notice) = &routing {
        tracing::info!("Notice for {} addressed to {}", person.id, notice.to);
    }
    Ok(serde_json::to_string_pretty(&routing)?)
}

/// Summarise a telemetry export
///
/// # Errors
/// Returns error if the export cannot be read or parsed
pub fn usage_report(path: &Path, top: usize, json: bool) -> Result<String> {
    let events = load_events(path).with_context(|| format!("loading events {}", path.display()))?;
    let report = UsageReport::build_with(&events, top, DEFAULT_TOP_EVENT_TYPES);
    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let k = &report.kpis;
    let mut out = String::new();
    writeln!(out, "Total users:      {}", k.total_users)?;
    writeln!(out, "Notes generated:  {}", k.notes_generated)?;
    writeln!(out, "Total exports:    {}", k.total_exports)?;
    writeln!(out, "Tour completion:  {:.1}%", k.tour_completion_rate)?;

    writeln!(out, "\nTop users")?;
    for row in &report.top_users {
        writeln!(
            out,
            "  {:<24} {:>6} events {:>4} notes {:>4} exports",
            row.user, row.total_events, row.notes_generated, row.total_exports
        )?;
    }

    writeln!(out, "\nFunnel")?;
    for stage in &report.funnel {
        match stage.conversion {
            Some(pct) => writeln!(out, "  {:<16} {:>6} ({pct:.1}%)", stage.stage, stage.count)?,
            None => writeln!(out, "  {:<16} {:>6}", stage.stage, stage.count)?,
        }
    }

    if !report.exports.is_empty() {
        writeln!(out, "\nExports")?;
        for share in &report.exports {
            writeln!(out, "  {:<16} {:>6} ({:.1}%)", share.label, share.count, share.percent)?;
        }
    }
    Ok(out.trim_end().to_string())
}
