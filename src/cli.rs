//! CLI definition and dispatch; the pipeline orchestration lives here.

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};

use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::eastmoney_adapter::EastmoneyAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::fixed_streak_adapter::FixedStreakAdapter;
use crate::adapters::os_open;
use crate::domain::filter::filter_quotes;
use crate::domain::rank::rank;
use crate::domain::score::score_quotes;
use crate::domain::settings::{self, Settings};
use crate::logging;
use crate::ports::quote_port::QuotePort;
use crate::ports::report_port::ReportPort;
use crate::ports::streak_port::StreakPort;

/// Per-run log file, overwritten at every start.
const LOG_FILE: &str = "zt_selector.log";

#[derive(Parser, Debug)]
#[command(name = "zt-selector", about = "Daily A-share limit-up stock screener")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch today's snapshot, screen it, and write the ranked picks
    Select {
        #[arg(short, long, default_value = "config.ini")]
        config: PathBuf,
        /// Override the configured output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Skip the auto-open step even when configured on
        #[arg(long)]
        no_open: bool,
    },
    /// Resolve and print the effective settings without fetching anything
    Validate {
        #[arg(short, long, default_value = "config.ini")]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Select {
            config,
            output_dir,
            no_open,
        } => run_select(&config, output_dir, no_open),
        Command::Validate { config } => run_validate(&config),
    }
}

fn run_select(config_path: &Path, output_dir: Option<PathBuf>, no_open: bool) -> ExitCode {
    logging::init(Path::new(LOG_FILE));
    info!("starting limit-up selection");

    let mut settings = load_settings(config_path);
    if let Some(dir) = output_dir {
        settings.output.output_dir = dir.display().to_string();
    }
    let auto_open = settings.output.auto_open && !no_open;

    let quotes = match EastmoneyAdapter::new() {
        Ok(adapter) => adapter,
        Err(e) => {
            error!("{e}");
            return (&e).into();
        }
    };
    let report = CsvReportAdapter::new(PathBuf::from(&settings.output.output_dir));

    run_select_pipeline(&quotes, &FixedStreakAdapter, &report, &settings, auto_open)
}

/// fetch → filter → guard-empty → score → rank → emit → optional open.
///
/// Every side effect is independently guarded; an empty candidate set is a
/// clean, successful run with no output file.
pub fn run_select_pipeline(
    quotes: &dyn QuotePort,
    streaks: &dyn StreakPort,
    report: &dyn ReportPort,
    settings: &Settings,
    auto_open: bool,
) -> ExitCode {
    let snapshot = match quotes.fetch_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("{e}");
            return (&e).into();
        }
    };
    info!("snapshot contains {} securities", snapshot.len());

    let outcome = filter_quotes(&snapshot, &settings.filter);
    if !outcome.skipped.is_empty() {
        warn!(
            "{} records skipped for unparsable fields",
            outcome.skipped.len()
        );
    }
    if outcome.candidates.is_empty() {
        warn!("no limit-up stocks today");
        return ExitCode::SUCCESS;
    }

    let scored = score_quotes(&outcome.candidates, &settings.score, streaks);
    let picks = rank(scored, settings.output.top_count);

    info!("today's picks (top {}):", picks.len());
    for (idx, pick) in picks.iter().enumerate() {
        info!(
            "{}. {}({}): score {:.2}, turnover {:.2}%, rationale: {}",
            idx + 1,
            pick.quote.name,
            pick.quote.symbol,
            pick.score,
            pick.quote.turnover_rate,
            pick.rationale,
        );
    }

    let run_date = Local::now().date_naive();
    let path = match report.write(&picks, run_date) {
        Ok(path) => path,
        Err(e) => {
            error!("{e}");
            return (&e).into();
        }
    };
    info!("report written to {}", path.display());

    if auto_open {
        match os_open::open_in_default_app(&path) {
            Ok(()) => info!("opened report with the system default application"),
            Err(e) => warn!("could not auto-open {}: {}", path.display(), e),
        }
    }

    ExitCode::SUCCESS
}

fn load_settings(config_path: &Path) -> Settings {
    let adapter = match FileConfigAdapter::from_file(config_path) {
        Ok(adapter) => adapter,
        Err(e) => {
            warn!(
                "config {} unreadable ({}); using defaults",
                config_path.display(),
                e
            );
            FileConfigAdapter::empty()
        }
    };

    let (settings, warnings) = settings::resolve(&adapter);
    for w in &warnings {
        warn!("config [{}] {}: {}", w.section, w.key, w.reason);
    }
    settings
}

fn run_validate(config_path: &Path) -> ExitCode {
    let adapter = match FileConfigAdapter::from_file(config_path) {
        Ok(adapter) => adapter,
        Err(e) => {
            eprintln!(
                "warning: config {} unreadable ({e}); showing defaults",
                config_path.display()
            );
            FileConfigAdapter::empty()
        }
    };

    let (settings, warnings) = settings::resolve(&adapter);
    for w in &warnings {
        eprintln!("warning: [{}] {}: {}", w.section, w.key, w.reason);
    }

    println!("[filter]");
    println!("  max_price = {}", settings.filter.max_price);
    println!(
        "  min_limit_up_percent = {}",
        settings.filter.min_limit_up_percent
    );
    println!("  exclude_st = {}", settings.filter.exclude_st);
    println!(
        "  exclude_sci_tech_board = {}",
        settings.filter.exclude_sci_tech_board
    );
    println!("  stock_prefix = {}", settings.filter.stock_prefix.join(","));
    println!("[score]");
    println!("  base_score = {}", settings.score.base_score);
    println!(
        "  volume_ratio_weight = {}",
        settings.score.volume_ratio_weight
    );
    println!(
        "  turnover_rate_weight = {}",
        settings.score.turnover_rate_weight
    );
    println!(
        "  continuous_limit_up_weight = {}",
        settings.score.continuous_limit_up_weight
    );
    println!("  amount_weight = {}", settings.score.amount_weight);
    println!("  amount_max_score = {}", settings.score.amount_max_score);
    println!("[output]");
    println!("  top_count = {}", settings.output.top_count);
    println!("  output_dir = {}", settings.output.output_dir);
    println!("  auto_open = {}", settings.output.auto_open);

    ExitCode::SUCCESS
}
