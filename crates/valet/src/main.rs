//! `valetctl` - CLI for valet
//!
//! Builds a store from configuration and reports on it. Nothing is persisted;
//! every run starts from a freshly seeded store.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;

use valet::cli::{Cli, Command, ConfigCommand, ShiftCommand};
use valet::{init_logging, Config, Store};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let mut config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    if let Some(seed) = cli.seed {
        config.demo.seed = Some(seed);
    }

    match cli.command {
        Command::Shift(cmd) => handle_shift(&config, &cmd),
        Command::Stats(cmd) => handle_stats(&config, cmd.json),
        Command::Validate => handle_validate(&config),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn build_store(config: &Config) -> anyhow::Result<Store> {
    Store::from_config(config).context("building store")
}

fn format_time(at: DateTime<Utc>, config: &Config) -> String {
    at.format(&config.display.time_format).to_string()
}

fn handle_shift(config: &Config, cmd: &ShiftCommand) -> anyhow::Result<()> {
    let store = build_store(config)?.listing(cmd.active);

    if cmd.json {
        println!("{}", store.to_json()?);
        return Ok(());
    }

    if store.shifts().is_empty() {
        println!("No shifts. Enable demo data with [demo] enabled = true.");
        return Ok(());
    }

    for shift in store.shifts() {
        println!("{} - {}", shift.customer_name, shift.address);
        let end = shift
            .end_time
            .map_or_else(|| "open".to_string(), |end| format_time(end, config));
        println!(
            "  {} ({}) to {}",
            shift.start_time.format("%Y-%m-%d"),
            format_time(shift.start_time, config),
            end
        );
        let staff: Vec<&str> = shift
            .employees
            .iter()
            .map(|id| store.employee_name(*id))
            .collect();
        println!("  Staff: {}", staff.join(", "));
        println!();
        println!(
            "  {:<8} {:<28} {:<18} {:<7} {:<7} {}",
            "Plate", "Car", "Location", "In", "Out", "Parked by"
        );

        for car in &shift.cars {
            let out = car
                .departure_time()
                .map_or_else(|| "-".to_string(), |at| format_time(at, config));
            println!(
                "  {:<8} {:<28} {:<18} {:<7} {:<7} {}",
                car.license_plate,
                car.description(),
                car.location_parked,
                format_time(car.arrival_time, config),
                out,
                store.employee_name(car.parked_by)
            );
        }
        println!();
    }
    Ok(())
}

fn handle_stats(config: &Config, json: bool) -> anyhow::Result<()> {
    let stats = build_store(config)?.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("valetctl stats");
        println!("--------------");
        println!("Employees:     {}", stats.employees);
        println!("Shifts:        {}", stats.shifts);
        println!("Cars:          {}", stats.total_cars);
        println!("  Returned:    {}", stats.returned_cars);
        println!("  Active:      {}", stats.active_cars);
        if !stats.cars_per_employee.is_empty() {
            println!();
            println!("Cars parked per employee:");
            for load in &stats.cars_per_employee {
                println!("  {:<20} {}", load.name, load.cars);
            }
        }
    }
    Ok(())
}

fn handle_validate(config: &Config) -> anyhow::Result<()> {
    let store = build_store(config)?;
    store.validate()?;
    println!(
        "OK: {} shift(s), every car parked by a rostered employee.",
        store.shifts().len()
    );
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Demo]");
                println!("  Enabled:            {}", config.demo.enabled);
                match config.demo.seed {
                    Some(seed) => println!("  Seed:               {seed}"),
                    None => println!("  Seed:               (random)"),
                }
                println!();
                println!("[Store]");
                println!(
                    "  Strict assignments: {}",
                    config.store.strict_assignments
                );
                println!();
                println!("[Display]");
                println!("  Time format:        {}", config.display.time_format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
