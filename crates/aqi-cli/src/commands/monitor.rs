use aqi_core::error::AqiError;
use aqi_core::source::{SimulatedSensor, DEFAULT_SEED};
use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::output;

/// ANSI: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub interval_secs: u64,
    /// `None` runs until the process is interrupted.
    pub cycles: Option<u64>,
    pub seed: Option<u64>,
    pub clear: bool,
    pub output: String,
}

pub fn run(config: &MonitorConfig) -> Result<(), AqiError> {
    let seed = config.seed.unwrap_or(DEFAULT_SEED);
    let mut sensor = SimulatedSensor::new(seed);
    let interval = Duration::from_secs(config.interval_secs);
    log::info!(
        "starting monitor: seed {}, interval {}s, cycles {:?}",
        seed,
        config.interval_secs,
        config.cycles
    );

    let mut cycle = 0u64;
    while !limit_reached(config, cycle) {
        cycle += 1;

        if config.clear {
            print!("{CLEAR_SCREEN}");
        }

        let report = aqi_core::run_cycle(&mut sensor, cycle)?;
        match config.output.as_str() {
            "json" => output::json::print(&report)?,
            _ => print!("{}", output::table::format_dashboard(&report)),
        }
        std::io::stdout().flush()?;

        if limit_reached(config, cycle) {
            break;
        }
        thread::sleep(interval);
    }

    Ok(())
}

fn limit_reached(config: &MonitorConfig, completed: u64) -> bool {
    config.cycles.is_some_and(|limit| completed >= limit)
}
