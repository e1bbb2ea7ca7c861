use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use payouts_core::NormalizedPayout;
use payouts_core::time::{self, parse_payout_date};
use payouts_finance::{PayoutSummary, upcoming_groups};
use payouts_ingest::{process, read_csv_file, validate};
use std::path::{Path, PathBuf};

mod config;
mod format;
mod state;
mod view;

#[derive(Parser, Debug)]
#[command(name = "payouts", version, about = "Summarize a payouts CSV export")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a payouts CSV against the required columns and row formats
    Validate {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Metric cards: upcoming total, next payout, reserved funds, chargebacks,
    /// refunds and card brand distribution
    Summary {
        #[arg(long)]
        csv: PathBuf,

        /// Treat this date as today (default: local date)
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<NaiveDate>,

        /// Which upcoming payout to show as "Next Payout" (1 = nearest).
        /// JSON output always carries the nearest one plus the full upcoming list.
        #[arg(long, default_value_t = 1, conflicts_with = "json")]
        index: usize,

        #[arg(long)]
        json: bool,
    },

    /// Paged list of payout dates with their net totals
    List {
        #[arg(long)]
        csv: PathBuf,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, value_parser = parse_date_arg)]
        today: Option<NaiveDate>,

        /// Add an upcoming date to the selection (repeatable)
        #[arg(long = "select", value_parser = parse_date_arg)]
        select: Vec<NaiveDate>,

        /// Select every upcoming date
        #[arg(long)]
        select_all: bool,

        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.payouts/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_payout_date(s).ok_or_else(|| format!("expected YYYY-MM-DD, got {s:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (cfg, cfg_err) = config::load_config_or_default();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cfg.log.level))
        .init();
    if let Some(e) = cfg_err {
        log::warn!("Using default config: {:#}", e);
    }

    match cli.command {
        Command::Validate { csv } => {
            let rows = read_csv_file(&csv).with_context(|| format!("reading {}", csv.display()))?;
            if let Err(e) = validate(&rows) {
                bail!("{}: {}", csv.display(), e);
            }
            println!("OK ({} rows)", rows.len());
        }

        Command::Summary {
            csv,
            today,
            index,
            json,
        } => {
            let payouts = load_payouts(&csv)?;
            let today = today.unwrap_or_else(time::today);
            let summary = PayoutSummary::build(&payouts, today);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!(
                    "{}",
                    view::render_summary(&summary, index, &cfg.display.currency_symbol)?
                );
            }
        }

        Command::List {
            csv,
            page,
            today,
            select,
            select_all,
            json,
        } => {
            let payouts = load_payouts(&csv)?;
            let today = today.unwrap_or_else(time::today);

            let selected = if select_all {
                upcoming_groups(&payouts, today)
                    .into_iter()
                    .map(|g| g.date)
                    .collect()
            } else {
                select
            };

            let listing =
                view::build_listing(&payouts, today, &selected, page, cfg.display.page_size)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print!(
                    "{}",
                    view::render_listing(&listing, &cfg.display.currency_symbol)
                );
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config(&cfg)?,
        },
    }

    Ok(())
}

/// Read, validate and normalize one export. Nothing is returned unless the
/// whole file is valid.
fn load_payouts(path: &Path) -> Result<Vec<NormalizedPayout>> {
    let rows = read_csv_file(path).with_context(|| format!("reading {}", path.display()))?;
    let payouts = process(&rows).with_context(|| format!("processing {}", path.display()))?;
    log::info!("Loaded {} payouts from {}", payouts.len(), path.display());
    Ok(payouts)
}
