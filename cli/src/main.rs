mod format;
mod logging;
mod message;
mod report;
mod tui;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use lifecount_core::model::settings::{DEFAULT_SLEEP_HOURS, DEFAULT_WORK_HOURS};
use lifecount_core::service::settings_service::SETUP_LIFESPAN_YEARS;
use lifecount_core::{
    evaluate, parse_instant, FileSettingsRepository, SettingsService, SetupRequest,
};

use crate::report::SETUP_HINT;

#[derive(Parser)]
#[command(name = "lifecount", version)]
#[command(about = "How much of your life is left, in numbers", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding the settings file (default: ~/.lifecount)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Store your birth date and daily habits (usage: setup 1990-06-14 --sleep 7 --work 8)
    Setup {
        /// Birth date as YYYY-MM-DD
        birth_date: String,
        /// Hours of sleep per day
        #[arg(long, default_value_t = DEFAULT_SLEEP_HOURS)]
        sleep: f64,
        /// Hours of work per day
        #[arg(long, default_value_t = DEFAULT_WORK_HOURS)]
        work: f64,
        /// Assumed total lifespan in years
        #[arg(long, default_value_t = SETUP_LIFESPAN_YEARS)]
        lifespan: i32,
    },
    /// Print the statistics once
    Show {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Compute for a fixed instant (YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS") instead of now
        #[arg(long)]
        at: Option<String>,
    },
    /// Change the assumed lifespan (0-110 years)
    Lifespan {
        #[arg(allow_negative_numbers = true)]
        years: i32,
    },
    /// Discard the stored settings
    Reset,
    /// Open the live dashboard
    Dashboard,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let repo = FileSettingsRepository::new(cli.data_dir)
        .context("Failed to open the settings store")?;
    let service = SettingsService::new(repo);

    match cli.command {
        Some(Commands::Setup {
            birth_date,
            sleep,
            work,
            lifespan,
        }) => {
            let mut request = SetupRequest::from_date_str(&birth_date)?;
            request.daily_sleep_hours = sleep;
            request.daily_work_hours = work;
            request.lifespan_years = lifespan;

            let settings = service.setup(request, Local::now().date_naive())?;
            println!("Settings saved.");
            println!("  Birth date: {}", settings.birth_date);
            println!("  Lifespan:   {} years", settings.lifespan_years);
            println!(
                "  Daily:      {}h sleep, {}h work",
                format::rate(settings.daily_sleep_hours),
                format::rate(settings.daily_work_hours)
            );
        }
        Some(Commands::Show { json, at }) => {
            let settings = service.current()?;
            let now = match at {
                Some(at) => parse_instant(&at)?,
                None => Local::now().naive_local(),
            };
            let result = evaluate(now, &settings);

            if json {
                println!("{}", serde_json::to_string_pretty(&report::to_json(&result))?);
            } else if !settings.is_configured() {
                println!("{SETUP_HINT}");
            } else {
                report::print_report(&settings, &result);
            }
        }
        Some(Commands::Lifespan { years }) => {
            let settings = service.update_lifespan(years)?;
            println!("Lifespan set to {} years.", settings.lifespan_years);
            println!("{}", message::pick());
        }
        Some(Commands::Reset) => {
            service.reset()?;
            println!("Settings discarded.");
        }
        Some(Commands::Dashboard) | None => {
            let settings = service.current()?;
            let result = evaluate(Local::now().naive_local(), &settings);
            if let Some(blocker) = report::dashboard_blocker(&result) {
                println!("{blocker}");
                return Ok(());
            }
            if tui::run(service)? {
                println!("Settings discarded.");
            }
        }
    }
    Ok(())
}
