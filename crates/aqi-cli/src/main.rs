mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aqi",
    version,
    about = "Air Quality Index calculator and terminal monitor"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the individual AQI for one pollutant concentration
    Calc {
        /// Pollutant: PM2.5, PM10, CO, SO2, NO2 or O3
        pollutant: String,

        /// Concentration (µg/m³; CO in mg/m³, O3 in ppm)
        concentration: f64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Evaluate a set of readings and report the dominant pollutant
    Evaluate {
        /// JSON file mapping pollutant name to concentration
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// PM2.5 concentration (µg/m³)
        #[arg(long)]
        pm25: Option<f64>,

        /// PM10 concentration (µg/m³)
        #[arg(long)]
        pm10: Option<f64>,

        /// CO concentration (mg/m³)
        #[arg(long)]
        co: Option<f64>,

        /// SO2 concentration (µg/m³)
        #[arg(long)]
        so2: Option<f64>,

        /// NO2 concentration (µg/m³)
        #[arg(long)]
        no2: Option<f64>,

        /// O3 concentration (ppm)
        #[arg(long)]
        o3: Option<f64>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show per-pollutant reasoning
        #[arg(long)]
        verbose: bool,
    },
    /// Run the simulated real-time monitor
    Monitor {
        /// Seconds to wait between cycles
        #[arg(short, long, default_value_t = 3)]
        interval: u64,

        /// Stop after this many cycles (default: run until interrupted)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        cycles: Option<u64>,

        /// Seed for the simulated sensor
        #[arg(long)]
        seed: Option<u64>,

        /// Do not clear the terminal between cycles
        #[arg(long)]
        no_clear: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the breakpoint tables
    Breakpoints {
        #[command(subcommand)]
        action: BreakpointsAction,
    },
}

#[derive(Subcommand)]
enum BreakpointsAction {
    /// List supported pollutants and their table ranges
    List,
    /// Print the breakpoint table for one pollutant
    Explain {
        /// Pollutant name (e.g., "PM2.5")
        pollutant: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calc {
            pollutant,
            concentration,
            output,
        } => commands::calc::run(&pollutant, concentration, &output),
        Commands::Evaluate {
            file,
            pm25,
            pm10,
            co,
            so2,
            no2,
            o3,
            output,
            verbose,
        } => {
            let flags = commands::evaluate::ReadingFlags {
                pm25,
                pm10,
                co,
                so2,
                no2,
                o3,
            };
            commands::evaluate::run(file, flags, &output, verbose)
        }
        Commands::Monitor {
            interval,
            cycles,
            seed,
            no_clear,
            output,
        } => {
            let config = commands::monitor::MonitorConfig {
                interval_secs: interval,
                cycles,
                seed,
                clear: !no_clear,
                output,
            };
            commands::monitor::run(&config)
        }
        Commands::Breakpoints { action } => match action {
            BreakpointsAction::List => commands::breakpoints::list(),
            BreakpointsAction::Explain { pollutant } => commands::breakpoints::explain(&pollutant),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
