use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use tourscout::analytics::{analyze_services, derive_insights};
use tourscout::api::geocode_place;
use tourscout::config::{FileConfig, NominatimConfig, OverpassConfig};
use tourscout::domain::{Coordinate, TimeBudget};
use tourscout::planner::build_plan;
use tourscout::report::{bar_chart, insight_lines, plan_table, tally_table};

/// Plan tourist visits and analyze nearby service availability using
/// OpenStreetMap data
///
/// Examples:
///   # Nearest-first visit order for a half day around the default place
///   tourscout plan
///
///   # One-day plan around another place with a wider search radius
///   tourscout plan -p "Chittoor" -t one-day -r 5000
///
///   # Service availability summary with counts, chart and insights
///   tourscout services -p "Tirupati"
///
///   # Use a config file to pin endpoints and defaults
///   tourscout --config my-settings.toml services
#[derive(Parser, Debug)]
#[command(name = "tourscout")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches tourscout.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest a nearest-first visit order for tourist attractions
    Plan {
        /// Place name to plan around
        #[arg(short = 'p', long)]
        place: Option<String>,

        /// Available time for the visit
        #[arg(short = 't', long)]
        time: Option<TimeBudget>,

        /// Search radius in meters
        #[arg(short = 'r', long)]
        radius: Option<u32>,
    },
    /// Summarize nearby service availability with counts and insights
    Services {
        /// Place name to analyze
        #[arg(short = 'p', long)]
        place: Option<String>,

        /// Search radius in meters
        #[arg(short = 'r', long)]
        radius: Option<u32>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            Some(FileConfig::from_path(config_path)?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let nominatim = file_config
        .as_ref()
        .and_then(|c| c.nominatim.clone())
        .unwrap_or_default();
    let overpass = file_config
        .as_ref()
        .and_then(|c| c.overpass.clone())
        .unwrap_or_default();

    println!("tourscout - Tourist Planner & Service Analytics");
    println!("===============================================");
    println!();

    match args.command {
        Command::Plan {
            place,
            time,
            radius,
        } => {
            let place = place
                .or_else(|| file_config.as_ref().and_then(|c| c.place.clone()))
                .unwrap_or_else(|| "Tirupati".to_string());
            let time = time
                .or_else(|| file_config.as_ref().and_then(|c| c.time))
                .unwrap_or(TimeBudget::HalfDay);
            let radius = radius
                .or_else(|| file_config.as_ref().map(|c| c.radius))
                .unwrap_or(3000);

            if verbose {
                print_config(&place, radius, Some(time), &nominatim, &overpass);
            }

            run_plan(&place, time, radius, &nominatim, &overpass)?;
        }
        Command::Services { place, radius } => {
            let place = place
                .or_else(|| file_config.as_ref().and_then(|c| c.place.clone()))
                .unwrap_or_else(|| "Tirupati".to_string());
            let radius = radius
                .or_else(|| file_config.as_ref().map(|c| c.radius))
                .unwrap_or(3000);

            if verbose {
                print_config(&place, radius, None, &nominatim, &overpass);
            }

            run_services(&place, radius, &nominatim, &overpass)?;
        }
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn print_config(
    place: &str,
    radius: u32,
    time: Option<TimeBudget>,
    nominatim: &NominatimConfig,
    overpass: &OverpassConfig,
) {
    println!("Configuration:");
    println!("  Place: {}", place);
    println!("  Radius: {}m", radius);
    if let Some(t) = time {
        println!("  Time budget: {:?}", t);
    }
    println!("  Geocoding endpoint: {}", nominatim.url);
    println!("  Feature-query endpoint: {}", overpass.url);
    println!();
}

fn resolve_origin(place: &str, nominatim: &NominatimConfig) -> Result<Coordinate> {
    let spinner = create_spinner("Geocoding place...");
    let start = Instant::now();
    let coords = geocode_place(place, nominatim).context("Failed to geocode place")?;

    let Some(origin) = coords else {
        spinner.finish_and_clear();
        bail!("Location not found: {}", place);
    };

    spinner.finish_with_message(format!(
        "Geocoded: {} -> ({:.4}, {:.4}) [{:.1}s]",
        place,
        origin.lat,
        origin.lon,
        start.elapsed().as_secs_f32()
    ));
    Ok(origin)
}

fn run_plan(
    place: &str,
    time: TimeBudget,
    radius: u32,
    nominatim: &NominatimConfig,
    overpass: &OverpassConfig,
) -> Result<()> {
    let origin = resolve_origin(place, nominatim)?;

    let spinner = create_spinner("Fetching tourist attractions...");
    let start = Instant::now();
    let plan = build_plan(origin, time, radius, overpass);

    if plan.is_empty() {
        spinner.finish_and_clear();
        println!("Warning: No attractions found near {}", place);
        return Ok(());
    }

    spinner.finish_with_message(format!(
        "Planned {} stops [{:.1}s]",
        plan.len(),
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!("Suggested Visit Order (Nearest First)");
    println!("-------------------------------------");
    print!("{}", plan_table(&plan));

    Ok(())
}

fn run_services(
    place: &str,
    radius: u32,
    nominatim: &NominatimConfig,
    overpass: &OverpassConfig,
) -> Result<()> {
    let origin = resolve_origin(place, nominatim)?;

    let spinner = create_spinner("Analyzing service availability...");
    let start = Instant::now();
    let tallies = analyze_services(origin, radius, overpass);
    let total: usize = tallies.iter().map(|t| t.count).sum();
    spinner.finish_with_message(format!(
        "Counted {} services across {} categories [{:.1}s]",
        total,
        tallies.len(),
        start.elapsed().as_secs_f32()
    ));

    if total == 0 {
        println!("Warning: No services found near {}", place);
    }

    println!();
    println!("Service Availability Summary");
    println!("----------------------------");
    print!("{}", tally_table(&tallies));

    println!();
    println!("Service Distribution Chart");
    println!("--------------------------");
    print!("{}", bar_chart(&tallies));

    println!();
    println!("Key Insights");
    println!("------------");
    print!("{}", insight_lines(&derive_insights(&tallies)));

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
