use cleanse_core::*;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cleanse")]
#[command(about = "Cleansing exercise and water exposure calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minutes per cycle at a given speed
    CycleTime {
        /// Speed in km/h
        #[arg(long)]
        speed: f64,
    },

    /// Speed needed for a cycle time, or for a cycle count in a total time
    Speed {
        /// Minutes per cycle
        #[arg(long, conflicts_with_all = ["cycles", "total"])]
        cycle_time: Option<f64>,

        /// Number of cycles
        #[arg(long, requires = "total")]
        cycles: Option<u32>,

        /// Total minutes
        #[arg(long, requires = "cycles")]
        total: Option<f64>,
    },

    /// Total minutes for a number of cycles at a given speed
    TotalTime {
        #[arg(long)]
        speed: f64,
        #[arg(long)]
        cycles: u32,
    },

    /// Cycle progress and practice recommendation for a session
    Cycles {
        #[arg(long)]
        speed: f64,
        /// Minutes exercised
        #[arg(long)]
        total: f64,
    },

    /// Static exercise minutes for a layer count
    StaticDuration {
        #[arg(long)]
        layers: f64,
    },

    /// Static exercise layers reached after some minutes
    StaticLayers {
        #[arg(long)]
        duration: f64,
    },

    /// Layers cleansed by a water exposure
    WaterLayers {
        /// Water temperature in °C
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
        /// Exposure minutes
        #[arg(long)]
        time: f64,
    },

    /// Exposure minutes for a layer count at a temperature, with a safety check
    WaterTime {
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
        #[arg(long)]
        layers: f64,
    },

    /// Water temperature needed to cleanse a layer count in a given time
    WaterTemperature {
        #[arg(long)]
        layers: f64,
        #[arg(long)]
        time: f64,
    },

    /// Classify a water exposure against the temperature band limits
    Safety {
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
        #[arg(long)]
        duration: f64,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

/// Single named number, used for JSON output of scalar results
#[derive(Serialize)]
struct Scalar<T: Serialize> {
    name: &'static str,
    value: T,
}

fn main() -> Result<()> {
    // Initialize logging
    cleanse_core::logging::init("warn");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Effective config: {:?}", config);
    let engine = Engine::from_config(&config)?;

    match cli.command {
        Commands::CycleTime { speed } => print_scalar(
            cli.json,
            "cycle_time_minutes",
            engine.dynamic.cycle_time_minutes(speed)?,
        ),
        Commands::Speed {
            cycle_time,
            cycles,
            total,
        } => {
            let speed = match (cycle_time, cycles, total) {
                (Some(cycle_time), _, _) => engine.dynamic.speed_from_cycle_time(cycle_time)?,
                (None, Some(cycles), Some(total)) => {
                    engine.dynamic.speed_from_cycles_and_time(cycles, total)?
                }
                _ => {
                    return Err(Error::InvalidArgument(
                        "pass either --cycle-time or both --cycles and --total".into(),
                    ))
                }
            };
            print_scalar(cli.json, "speed_kmh", speed)
        }
        Commands::TotalTime { speed, cycles } => print_scalar(
            cli.json,
            "total_time_minutes",
            engine.dynamic.total_time(speed, cycles)?,
        ),
        Commands::Cycles { speed, total } => {
            let detail = engine.dynamic.cleansing_cycles_detail(speed, total)?;
            display_cycles(cli.json, &detail, config.dynamic.target_cycles)
        }
        Commands::StaticDuration { layers } => print_scalar(
            cli.json,
            "duration_minutes",
            engine.static_exercise.duration_from_layers(layers)?,
        ),
        Commands::StaticLayers { duration } => print_scalar(
            cli.json,
            "mental_layers",
            engine.static_exercise.layers_from_duration(duration)?,
        ),
        Commands::WaterLayers { temperature, time } => print_scalar(
            cli.json,
            "mental_layers",
            engine.water.mental_layers_cleansed(temperature, time)?,
        ),
        Commands::WaterTime {
            temperature,
            layers,
        } => {
            let plan = engine.plan_water_exposure(temperature, layers)?;
            display_plan(cli.json, &plan)
        }
        Commands::WaterTemperature { layers, time } => print_scalar(
            cli.json,
            "temperature_celsius",
            engine.water.required_temperature(layers, time)?,
        ),
        Commands::Safety {
            temperature,
            duration,
        } => {
            let assessment = engine.safety.classify(temperature, duration)?;
            display_safety(cli.json, &assessment)
        }
        Commands::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_scalar<T: Serialize + std::fmt::Display>(
    json: bool,
    name: &'static str,
    value: T,
) -> Result<()> {
    if json {
        print_json(&Scalar { name, value })
    } else {
        println!("{}", value);
        Ok(())
    }
}

fn display_cycles(json: bool, detail: &CleansingCycleResult, target_cycles: u32) -> Result<()> {
    if json {
        return print_json(detail);
    }

    println!("Cycle time:            {} min", detail.cycle_time);
    println!("Completed cycles:      {}", detail.completed_cycles);
    println!("Until next cycle:      {} min", detail.minutes_until_next_cycle);
    println!(
        "Progress:              {}% of {} cycles",
        cleanse_core::cleansing::progress_percent(detail, target_cycles),
        target_cycles
    );
    if detail.is_overextended() {
        // A fractional overrun keeps the elapsed time in the record, so cap it here
        println!(
            "Past the target, recommended session: {} min",
            target_cycles as f64 * detail.cycle_time
        );
    } else {
        println!("Until target:          {} min", detail.minutes_to_target_cycles);
    }
    println!("Repeat every:          {} days", detail.recommended_frequency_days);
    Ok(())
}

fn display_plan(json: bool, plan: &WaterExposurePlan) -> Result<()> {
    if json {
        return print_json(plan);
    }

    println!("Exposure time:         {} min", plan.exposure_time);
    display_safety(false, &plan.safety)
}

fn display_safety(json: bool, assessment: &SafetyAssessment) -> Result<()> {
    if json {
        return print_json(assessment);
    }

    println!("Band:                  {:?}", assessment.band);
    println!("Max safe duration:     {} min", assessment.max_safe_duration);
    if assessment.is_dangerous {
        println!("⚠ Exposure exceeds the safe limit");
    } else {
        println!("✓ Within the safe limit");
    }
    Ok(())
}
