// ==========================================
// 司机派车消息生成 - 命令行主入口
// ==========================================
// 用法:
//   driver-messages loads --schedule plan.tsv
//   driver-messages generate --fuel pins.xlsx --schedule plan.tsv --load 3
// ==========================================

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use driver_messages::{logging, DriverMessageApi, MessageProfile};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "driver-messages")]
#[command(version)]
#[command(about = "Generate driver instruction messages from fuel pins and collection plans")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON message profile (defaults to DRIVER_MESSAGES_PROFILE or the user config dir)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List load numbers found in a collection plan
    Loads {
        /// Tab-delimited collection plan (first row = headers)
        #[arg(long, short = 's')]
        schedule: PathBuf,
    },

    /// Generate the message for one load
    Generate {
        /// Fuel pin workbook (.xlsx/.xls/.csv)
        #[arg(long, short = 'f')]
        fuel: PathBuf,

        /// Tab-delimited collection plan (first row = headers)
        #[arg(long, short = 's')]
        schedule: PathBuf,

        /// Load number
        #[arg(long, short = 'l')]
        load: String,

        /// Tomorrow's date (YYYY-MM-DD), defaults to the day after today
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let profile = match &cli.profile {
        Some(path) => MessageProfile::load(path)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => MessageProfile::load_or_default().map_err(|e| anyhow!("{}", e))?,
    };

    let mut api = DriverMessageApi::new(profile);

    match cli.command {
        Commands::Loads { schedule } => {
            let count = api
                .load_schedule_file(&schedule)
                .with_context(|| format!("failed to read {}", schedule.display()))?;
            tracing::info!("共 {} 条集货记录", count);

            for load in api.available_loads() {
                println!("{}", load);
            }
        }
        Commands::Generate {
            fuel,
            schedule,
            load,
            date,
        } => {
            api.load_fuel_reference_file(&fuel)
                .with_context(|| format!("failed to read {}", fuel.display()))?;
            api.load_schedule_file(&schedule)
                .with_context(|| format!("failed to read {}", schedule.display()))?;

            let reference_date = match date {
                Some(d) => d,
                None => default_reference_date()?,
            };

            let message = api.generate(&load, reference_date)?;
            println!("{}", message);
        }
    }

    Ok(())
}

/// 默认参考日期: 本地日期 + 1 天
fn default_reference_date() -> Result<NaiveDate> {
    Local::now()
        .date_naive()
        .succ_opt()
        .ok_or_else(|| anyhow!("cannot compute tomorrow's date"))
}
