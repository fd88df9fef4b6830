//! Command execution logic for the tidal processor
//!
//! Orchestrates the full pipeline: discover gauge files, parse each one,
//! merge into a single deduplicated record, then derive the longest
//! contiguous window, the sea-level trend and the harmonic constituents.

use crate::app::models::{HarmonicResult, ObservationTable, Segment, TrendResult};
use crate::app::services::analysis::{sea_level_trend, tidal_harmonics};
use crate::app::services::gauge_parser;
use crate::app::services::merger::merge;
use crate::app::services::segmenter::longest_segment;
use crate::constants::SECONDS_PER_HOUR;
use crate::{Config, Error, Result};
use chrono::{DateTime, Duration, Utc};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info};

use super::args::Args;

/// Summary of one full analysis run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Gauge files parsed, in iteration order
    pub files_processed: usize,

    /// Observations surviving merge and deduplication
    pub observations: usize,

    /// Duplicate timestamps resolved (first occurrence kept)
    pub duplicates_removed: usize,

    /// Readings whose sea level carried a quality flag
    pub missing_sea_levels: usize,

    /// Longest contiguous window of valid, evenly-spaced observations
    pub longest_segment: Option<Segment>,

    /// Linear sea-level trend
    pub trend: TrendResult,

    /// Fitted tidal constituents
    pub harmonics: HarmonicResult,

    /// Epoch against which harmonic phases are reported
    pub reference_time: DateTime<Utc>,
}

/// Run the analysis pipeline for the given CLI arguments
pub fn run(args: Args) -> Result<AnalysisReport> {
    setup_logging(&args);

    let config = build_config(&args)?;
    let report = analyze_directory(&config, args.epoch, args.show_progress())?;

    print_human_report(&report);
    Ok(report)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tidal_processor={}", log_level)));

    // try_init so repeated calls (e.g. from tests) are harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Build the effective configuration from defaults plus CLI overrides
fn build_config(args: &Args) -> Result<Config> {
    let mut config = Config::default();

    config.processing.input_dir = args.directory.clone();
    config.processing.max_gap_hours = args.max_gap_hours();
    config.logging.level = args.get_log_level().to_string();
    if let Some(list) = &args.constituents {
        config.processing.constituents = list.constituents.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Discover, parse, merge and analyze every gauge file in the directory
pub fn analyze_directory(
    config: &Config,
    epoch: Option<DateTime<Utc>>,
    show_progress: bool,
) -> Result<AnalysisReport> {
    let files = discover_files(config)?;
    info!("Found {} gauge files to process", files.len());

    let progress = if show_progress {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .expect("progress template is valid"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    // Merge in filename iteration order so first-occurrence-wins
    // deduplication is deterministic
    let mut merged = ObservationTable::new();
    let mut missing_sea_levels = 0;
    for path in &files {
        progress.set_message(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        let parsed = gauge_parser::parse_file(path)?;
        missing_sea_levels += parsed.stats.missing_sea_levels;
        merged = merge(&merged, &parsed.table);

        progress.inc(1);
    }
    progress.finish_with_message("Parsing complete");

    let duplicates_removed = merged.dedup_by_timestamp();
    info!(
        "Merged record: {} observations, {} duplicates removed",
        merged.len(),
        duplicates_removed
    );

    let max_gap = Duration::seconds((config.processing.max_gap_hours * SECONDS_PER_HOUR) as i64);
    let segment = longest_segment(&merged, max_gap);

    let trend = sea_level_trend(&merged)?;

    // Harmonic phases are relative to the requested epoch, or the record
    // start when none was given
    let reference_time = epoch
        .or_else(|| merged.first().map(|obs| obs.timestamp))
        .unwrap_or(DateTime::UNIX_EPOCH);
    let harmonics = tidal_harmonics(&merged, &config.processing.constituents, reference_time)?;

    Ok(AnalysisReport {
        files_processed: files.len(),
        observations: merged.len(),
        duplicates_removed,
        missing_sea_levels,
        longest_segment: segment,
        trend,
        harmonics,
        reference_time,
    })
}

/// Find gauge files matching the configured pattern, in sorted filename
/// order
fn discover_files(config: &Config) -> Result<Vec<PathBuf>> {
    let pattern = config
        .processing
        .input_dir
        .join(&config.processing.file_pattern);
    let pattern_str = pattern.to_string_lossy();

    let mut files = glob::glob(&pattern_str)?.collect::<std::result::Result<Vec<_>, _>>()?;
    files.sort();

    if files.is_empty() {
        return Err(Error::no_input_files(
            config.processing.file_pattern.clone(),
            config.processing.input_dir.display().to_string(),
        ));
    }

    debug!(?files, "discovered gauge files");
    Ok(files)
}

/// Print the human-readable analysis report
fn print_human_report(report: &AnalysisReport) {
    println!("\n{}", "Tidal Analysis Complete".bold().green());
    println!("{}", "=".repeat(50));

    println!("{}", "Input:".bold());
    println!("   Files processed:       {}", report.files_processed);
    println!("   Observations:          {}", report.observations);
    println!("   Duplicates removed:    {}", report.duplicates_removed);
    println!("   Flagged sea levels:    {}", report.missing_sea_levels);

    println!("{}", "Longest contiguous window:".bold());
    match &report.longest_segment {
        Some(segment) => {
            println!(
                "   {} to {}  ({} observations, {:.1} h)",
                segment.start.format("%Y-%m-%d %H:%M"),
                segment.end.format("%Y-%m-%d %H:%M"),
                segment.count,
                segment.duration_hours()
            );
        }
        None => println!("   {}", "no valid window found".yellow()),
    }

    println!("{}", "Sea-level rise:".bold());
    println!(
        "   {:.6e} m/day  ({:+.3} mm/yr), p = {:.3e}",
        report.trend.slope,
        report.trend.slope_mm_per_year(),
        report.trend.p_value
    );

    println!(
        "{} (epoch {})",
        "Constituent amplitudes:".bold(),
        report.reference_time.format("%Y-%m-%d %H:%M:%S")
    );
    for fit in report.harmonics.iter() {
        println!(
            "   {:<4} {:.4} m  (phase {:+.3} rad)",
            fit.name, fit.amplitude, fit.phase
        );
    }
}
