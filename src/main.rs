use chrono::{Local, NaiveDate};
use clap::Parser;
use payday::application::{
    manage_config::{parse_pay_day, CONFIG_KEYS},
    ConfigService, InitService, ScheduleService, ShowCalendarService,
};
use payday::cli::{format_calendar, format_period, format_upcoming, Cli, Commands};
use payday::domain::{DateReference, Direction, PayDayMode, PayDaySetting};
use payday::error::PaydayError;
use payday::infrastructure::{Config, FileSystemRepository, SettingsRepository};
use payday::logging::init_logging;
use std::str::FromStr;

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PaydayError> {
    let direction = cli
        .direction
        .as_deref()
        .map(Direction::from_str)
        .transpose()
        .map_err(PaydayError::Config)?;

    match cli.command {
        Some(Commands::Init { path, mode, day }) => {
            // The global --pay-day works as --day here
            let day = match (day, cli.pay_day) {
                (Some(_), Some(_)) => {
                    return Err(PaydayError::Config(
                        "Use either --day or --pay-day with init, not both".to_string(),
                    ))
                }
                (day, pay_day) => day.or_else(|| pay_day.map(|d| d.to_string())),
            };
            let setting = init_setting(mode.as_deref(), day.as_deref())?;
            let config = InitService::execute(&path, setting, direction.unwrap_or_default())?;

            println!("Initialized payday settings at {}", path.display());
            println!("Pay day: {} ({})", config.pay_day, config.mode);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("mode = {}", config.mode);
                println!("pay_day = {}", config.setting().pay_day());
                println!("direction = {}", config.direction);
                println!("today_tag = {}", config.today_tag);
                println!("pay_day_tag = {}", config.pay_day_tag);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: payday config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
        Some(Commands::Upcoming { count, from }) => {
            let config = effective_config(cli.pay_day, direction)?;
            let from = resolve_date(from.as_deref())?;

            let dates = ScheduleService::new(&config).upcoming(from, count as usize);
            print!("{}", format_upcoming(&dates, from));
            Ok(())
        }
        Some(Commands::Period { date }) => {
            let config = effective_config(cli.pay_day, direction)?;
            let date = resolve_date(date.as_deref())?;

            let period = ScheduleService::new(&config).period(date);
            print!("{}", format_period(&period, date));
            Ok(())
        }
        None => {
            let config = effective_config(cli.pay_day, direction)?;
            let today = resolve_date(cli.date.as_deref())?;

            let view = ShowCalendarService::new(&config).execute(today);
            print!("{}", format_calendar(&view, cli.plain));
            Ok(())
        }
    }
}

/// Stored settings with command-line overrides applied.
///
/// With `--pay-day` given, a missing settings directory is not an error.
fn effective_config(
    pay_day: Option<u32>,
    direction: Option<Direction>,
) -> Result<Config, PaydayError> {
    let loaded = FileSystemRepository::discover().and_then(|repo| repo.load_config());

    let mut config = match loaded {
        Ok(config) => config,
        Err(PaydayError::NotPaydayDirectory(_)) if pay_day.is_some() => Config::default(),
        Err(e) => return Err(e),
    };

    if let Some(day) = pay_day {
        config.set_pay_day(day);
    }
    if let Some(direction) = direction {
        config.direction = direction;
    }

    Ok(config)
}

fn init_setting(mode: Option<&str>, day: Option<&str>) -> Result<PayDaySetting, PaydayError> {
    let mode = mode
        .map(PayDayMode::from_str)
        .transpose()
        .map_err(PaydayError::Config)?;

    match (mode, day) {
        (None, None) => Ok(PayDaySetting::default()),
        (None, Some(day)) | (Some(PayDayMode::Specific), Some(day)) => {
            Ok(PayDaySetting::specific(parse_pay_day(day)?))
        }
        (Some(PayDayMode::Specific), None) => Err(PaydayError::Config(
            "--mode specific needs a day, e.g. --day 25".to_string(),
        )),
        (Some(mode), Some(_)) => Err(PaydayError::Config(format!(
            "--day only applies to --mode specific, not '{}'",
            mode
        ))),
        (Some(mode), None) => Ok(PayDaySetting::new(mode, mode.fixed_day().unwrap_or_default())),
    }
}

fn resolve_date(input: Option<&str>) -> Result<NaiveDate, PaydayError> {
    let today = Local::now().date_naive();
    match input {
        Some(value) => Ok(DateReference::parse(value)?.resolve(today)),
        None => Ok(today),
    }
}
