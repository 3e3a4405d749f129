#![warn(missing_docs)]
//! Benchview CLI Library
//!
//! Command-line front end that renders benchmark result documents (as served
//! by the benchmark-results API and saved to disk) into terminal, JSON,
//! Markdown or CSV reports.
//!
//! # Example
//!
//! ```text
//! benchview search results.json --git-ref 0123abc --filter '^oltp'
//! benchview compare compare.json --old v17.0.0 --new 0123abc --format markdown
//! curl -s $API/status | benchview status -
//! ```

mod config;
mod input;
mod planner;
mod render;

pub use config::*;
pub use input::{STDIN_PATH, load_json, source_label};
pub use planner::{RenderPlan, build_plan};
pub use render::{CardOutcome, build_report_meta, format_human_output, render_cards};

use anyhow::Context;
use benchview_core::{CompareData, MacroData, PullRequest, ReleaseRef, SearchData, StatusEntry};
use benchview_report::{
    ComparisonReport, MacroReport, OutputFormat, PullRequestLine, ReleaseLine, Report,
    StatusLine, generate_csv_report, generate_json_report, generate_markdown_summary,
};
use clap::{Parser, Subcommand};
use rayon::ThreadPoolBuilder;
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Benchview CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchview")]
#[command(author, version, about = "Benchview - render database-proxy benchmark results")]
pub struct Cli {
    /// What to render
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: human, json, markdown, csv (defaults to config, then human)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (discovered from the current directory if not specified)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Repository URL for commit and PR links (overrides config)
    #[arg(long, global = true)]
    pub repository: Option<String>,

    /// Number of threads for parallel card rendering
    /// 0 = use all available cores
    #[arg(long, short = 'j', global = true)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render macro benchmark cards from a search result
    Search {
        /// Search result JSON (`-` for stdin)
        input: PathBuf,
        /// Git ref the results belong to
        #[arg(long, default_value = "")]
        git_ref: String,
        /// Only render macro benchmarks whose name matches this regex
        #[arg(long)]
        filter: Option<String>,
    },
    /// Render a single macro benchmark card
    Macro {
        /// Macro benchmark JSON (`-` for stdin)
        input: PathBuf,
        /// Macro benchmark name
        #[arg(long)]
        name: String,
        /// Git ref the results belong to
        #[arg(long, default_value = "")]
        git_ref: String,
    },
    /// Render an old-vs-new comparison
    Compare {
        /// Comparison JSON (`-` for stdin)
        input: PathBuf,
        /// Baseline ref
        #[arg(long)]
        old: String,
        /// Candidate ref
        #[arg(long)]
        new: String,
    },
    /// Render the benchmark run status table
    Status {
        /// Status list JSON (`-` for stdin)
        input: PathBuf,
    },
    /// Render the pull request list
    Prs {
        /// Pull request list JSON (`-` for stdin)
        input: PathBuf,
    },
    /// Render the release list
    Refs {
        /// Release list JSON (`-` for stdin)
        input: PathBuf,
    },
    /// Print a default benchview.toml
    Init,
}

/// Run the Benchview CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Benchview CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // init only prints the template; an existing broken config must not block it
    if matches!(cli.command, Commands::Init) {
        print!("{}", BenchviewConfig::default_toml());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => BenchviewConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BenchviewConfig::discover()?.unwrap_or_default(),
    };

    init_logging(&cli, &config);

    let format_name = cli.format.as_deref().unwrap_or(&config.output.format);
    let format: OutputFormat = format_name.parse().map_err(anyhow::Error::msg)?;

    let repository_url = cli.repository.as_deref().unwrap_or(&config.repository.url);

    let threads = cli.threads.unwrap_or(config.render.threads);
    if threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }

    let report = build(&cli.command, repository_url)?;
    tracing::debug!(
        macros = report.macros.len(),
        comparisons = report.comparisons.len(),
        "report built"
    );

    let output = render(&report, format)?;
    write_output(cli.output.as_deref(), &output)
}

// stderr keeps stdout clean for piping reports
fn init_logging(cli: &Cli, config: &BenchviewConfig) {
    let filter = if cli.verbose {
        "benchview=debug"
    } else {
        config.logging.filter.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Build the report for a subcommand
fn build(command: &Commands, repository_url: &str) -> anyhow::Result<Report> {
    match command {
        Commands::Search {
            input,
            git_ref,
            filter,
        } => search(input, git_ref, filter.as_deref(), repository_url),
        Commands::Macro {
            input,
            name,
            git_ref,
        } => {
            let data: MacroData = load_json(input)?;
            let mut report = new_report(repository_url, input);
            let card = MacroReport::build(name, &data, git_ref, repository_url)
                .with_context(|| format!("failed to render macro benchmark {}", name))?;
            report.macros.push(card);
            Ok(report)
        }
        Commands::Compare { input, old, new } => {
            let data: CompareData = load_json(input)?;
            let mut report = new_report(repository_url, input);
            let comparison = ComparisonReport::build(&data, old, new, repository_url)
                .with_context(|| format!("failed to render {} comparison", data.kind))?;
            report.comparisons.push(comparison);
            Ok(report)
        }
        Commands::Status { input } => {
            let entries: Vec<StatusEntry> = load_json(input)?;
            let mut report = new_report(repository_url, input);
            report.status = entries.iter().map(StatusLine::from_entry).collect();
            Ok(report)
        }
        Commands::Prs { input } => {
            let prs: Vec<PullRequest> = load_json(input)?;
            let mut report = new_report(repository_url, input);
            report.pull_requests = prs
                .iter()
                .map(|pr| PullRequestLine::from_pr(pr, repository_url))
                .collect();
            Ok(report)
        }
        Commands::Refs { input } => {
            let refs: Vec<ReleaseRef> = load_json(input)?;
            let mut report = new_report(repository_url, input);
            report.releases = refs
                .iter()
                .map(|r| ReleaseLine::from_ref(r, repository_url))
                .collect();
            Ok(report)
        }
        Commands::Init => Ok(Report::new(build_report_meta(repository_url, None))),
    }
}

fn new_report(repository_url: &str, input: &Path) -> Report {
    Report::new(build_report_meta(repository_url, Some(source_label(input))))
}

/// Render every macro card of a search result.
///
/// Cards that fail to format are logged and left out; the rest still render.
fn search(
    input: &Path,
    git_ref: &str,
    filter: Option<&str>,
    repository_url: &str,
) -> anyhow::Result<Report> {
    let filter_re = filter
        .map(Regex::new)
        .transpose()
        .context("invalid --filter pattern")?;

    let data: SearchData = load_json(input)?;
    let plan = build_plan(&data, filter_re.as_ref());

    if plan.macros.is_empty() {
        tracing::warn!(
            available = data.macros.len(),
            "no macro benchmarks matched the selection"
        );
    }

    let mut report = new_report(repository_url, input);
    for outcome in render_cards(&plan, git_ref, repository_url) {
        match outcome.card {
            Ok(card) => report.macros.push(card),
            Err(e) => tracing::warn!(name = %outcome.name, error = %e, "skipping macro benchmark"),
        }
    }
    Ok(report)
}

/// Serialize a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Human => format_human_output(report),
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Markdown => generate_markdown_summary(report),
        OutputFormat::Csv => generate_csv_report(report)?,
    })
}

fn write_output(path: Option<&Path>, output: &str) -> anyhow::Result<()> {
    if let Some(path) = path {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        tracing::info!(path = %path.display(), "report written");
    } else {
        print!("{}", output);
    }
    Ok(())
}
