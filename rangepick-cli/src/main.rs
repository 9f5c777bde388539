//! Rangepick CLI — drive the range selector without a UI.
//!
//! Commands:
//! - `simulate` — replay drags from a scenario file or inline flags
//! - `convert` — map a value to a track position or back
//! - `trips` — filter and sort the sample trip catalog by price band

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, Level};

use rangepick_core::{
    filter_trips, sample_trips, DragOp, RangeConfig, Scenario, ScenarioReport, SortKey,
    TrackGeometry, TripQuery,
};

#[derive(Parser)]
#[command(
    name = "rangepick",
    about = "Rangepick CLI — dual-handle range selector toolkit"
)]
struct Cli {
    /// Log selector decisions to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Range geometry shared by `simulate` and `convert`.
#[derive(Args, Debug, Clone)]
struct RangeArgs {
    /// TOML file with a range config. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Domain minimum.
    #[arg(long, allow_hyphen_values = true)]
    min: Option<f64>,

    /// Domain maximum.
    #[arg(long, allow_hyphen_values = true)]
    max: Option<f64>,

    /// Value granularity.
    #[arg(long)]
    step: Option<f64>,

    /// Handle diameter in track units.
    #[arg(long)]
    diameter: Option<f64>,

    /// Measured track width. Without it the fallback width applies.
    #[arg(long)]
    width: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a sequence of drags and report every emitted change.
    Simulate {
        /// Scenario TOML file. Mutually exclusive with inline flags.
        #[arg(
            long,
            conflicts_with_all = ["config", "min", "max", "step", "diameter", "low", "high", "drag"]
        )]
        scenario: Option<PathBuf>,

        #[command(flatten)]
        range: RangeArgs,

        /// Initial low value. Defaults to the domain minimum.
        #[arg(long, allow_hyphen_values = true)]
        low: Option<f64>,

        /// Initial high value. Defaults to the domain maximum.
        #[arg(long, allow_hyphen_values = true)]
        high: Option<f64>,

        /// Drag op, e.g. `low:+270` or `high:-40~` (trailing ~ keeps the
        /// pointer down). Repeatable.
        #[arg(long, allow_hyphen_values = true)]
        drag: Vec<String>,

        /// Print the report as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Convert between values and track positions.
    Convert {
        #[command(flatten)]
        range: RangeArgs,

        /// Value to place on the track.
        #[arg(
            long,
            allow_hyphen_values = true,
            conflicts_with = "position",
            required_unless_present = "position"
        )]
        value: Option<f64>,

        /// Track position to read back as a value.
        #[arg(long, allow_hyphen_values = true)]
        position: Option<f64>,
    },
    /// Filter the sample trip catalog.
    Trips {
        /// Cheapest price to include.
        #[arg(long)]
        min_price: Option<f64>,

        /// Priciest price to include.
        #[arg(long)]
        max_price: Option<f64>,

        /// Case-insensitive text to match in title or destination.
        #[arg(long, default_value = "")]
        search: String,

        /// Sort order: price, price-desc, rating, departure.
        #[arg(long, default_value = "price")]
        sort: SortKey,

        /// Print trips as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Simulate {
            scenario,
            range,
            low,
            high,
            drag,
            json,
        } => run_simulate(scenario, &range, low, high, &drag, json),
        Commands::Convert {
            range,
            value,
            position,
        } => run_convert(&range, value, position),
        Commands::Trips {
            min_price,
            max_price,
            search,
            sort,
            json,
        } => run_trips(min_price, max_price, search, sort, json),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

impl RangeArgs {
    fn to_config(&self) -> Result<RangeConfig> {
        let mut config = match &self.config {
            Some(path) => RangeConfig::from_file(path)?,
            None => RangeConfig::default(),
        };
        if let Some(min) = self.min {
            config.domain_min = min;
        }
        if let Some(max) = self.max {
            config.domain_max = max;
        }
        if let Some(step) = self.step {
            config.step = step;
        }
        if let Some(diameter) = self.diameter {
            config.handle_diameter = diameter;
        }
        config.validate()?;
        Ok(config)
    }

    fn to_geometry(&self) -> Result<TrackGeometry> {
        let mut geometry = TrackGeometry::new(&self.to_config()?)?;
        if let Some(width) = self.width {
            if !geometry.measure(width) {
                bail!("track width must be a finite, non-negative number, got {width}");
            }
        }
        Ok(geometry)
    }
}

fn build_scenario(
    range: &RangeArgs,
    low: Option<f64>,
    high: Option<f64>,
    drags: &[String],
) -> Result<Scenario> {
    let config = range.to_config()?;
    let low = low.unwrap_or(config.domain_min);
    let high = high.unwrap_or(config.domain_max);
    config.validate_selection(low, high)?;

    let mut scenario = Scenario::new(config, low, high);
    scenario.track_width = range.width;
    for op in drags {
        let op: DragOp = op.parse()?;
        scenario.drags.push(op);
    }
    Ok(scenario)
}

/// Scenario from a file or inline flags. `--width` fills in a file that
/// does not pin its own track width.
fn load_scenario(
    scenario_path: Option<PathBuf>,
    range: &RangeArgs,
    low: Option<f64>,
    high: Option<f64>,
    drags: &[String],
) -> Result<Scenario> {
    let mut scenario = match scenario_path {
        Some(path) => Scenario::from_file(&path)
            .with_context(|| format!("load scenario {}", path.display()))?,
        None => build_scenario(range, low, high, drags)?,
    };
    if scenario.track_width.is_none() {
        scenario.track_width = range.width;
    }
    Ok(scenario)
}

fn run_simulate(
    scenario_path: Option<PathBuf>,
    range: &RangeArgs,
    low: Option<f64>,
    high: Option<f64>,
    drags: &[String],
    json: bool,
) -> Result<()> {
    let scenario = load_scenario(scenario_path, range, low, high, drags)?;
    debug!(ops = scenario.drags.len(), "running scenario");

    let report = scenario.run()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ScenarioReport) {
    println!(
        "Track width: {} ({})",
        report.track_width,
        if report.interactive {
            "interactive"
        } else {
            "too narrow, drags ignored"
        }
    );
    println!();
    println!(
        "{:>4} {:<6} {:>10} {:>12} {:>12} {:>12}",
        "#", "Handle", "dx", "Emitted", "Low", "High"
    );
    println!("{}", "-".repeat(61));
    for step in &report.steps {
        let emitted = step
            .emitted
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".into());
        println!(
            "{:>4} {:<6} {:>10} {:>12} {:>12} {:>12}",
            step.index + 1,
            step.handle,
            format!("{:+}", step.dx),
            emitted,
            step.low,
            step.high
        );
    }
    println!();
    println!(
        "Final: [{}, {}] after {} change(s)",
        report.low,
        report.high,
        report.changes.len()
    );
}

fn run_convert(range: &RangeArgs, value: Option<f64>, position: Option<f64>) -> Result<()> {
    println!("{}", convert(range, value, position)?);
    Ok(())
}

fn convert(range: &RangeArgs, value: Option<f64>, position: Option<f64>) -> Result<String> {
    let geometry = range.to_geometry()?;
    let Some(usable) = geometry.usable_width() else {
        bail!(
            "track width {} leaves no room for a {} handle",
            geometry.track_width(),
            geometry.handle_diameter()
        );
    };

    match (value, position) {
        (Some(value), _) => {
            if !value.is_finite() {
                bail!("value {value} is not a number");
            }
            let snapped = geometry.snap(value);
            let pos = geometry.value_to_position(snapped);
            Ok(format!("value {value} snaps to {snapped}, position {pos:.2} of {usable}"))
        }
        (None, Some(position)) => match geometry.position_to_value(position) {
            Some(value) => Ok(format!("position {position} maps to value {value}")),
            None => bail!("position {position} is not a number"),
        },
        (None, None) => bail!("one of --value or --position is required"),
    }
}

fn trip_query(
    min_price: Option<f64>,
    max_price: Option<f64>,
    search: String,
    sort: SortKey,
) -> Result<TripQuery> {
    let price = match (min_price, max_price) {
        (None, None) => None,
        (lo, hi) => {
            let lo = lo.unwrap_or(0.0);
            let hi = hi.unwrap_or(f64::INFINITY);
            if lo > hi {
                bail!("--min-price {lo} is above --max-price {hi}");
            }
            Some((lo, hi))
        }
    };
    Ok(TripQuery {
        price,
        text: search,
        sort,
    })
}

fn run_trips(
    min_price: Option<f64>,
    max_price: Option<f64>,
    search: String,
    sort: SortKey,
    json: bool,
) -> Result<()> {
    let query = trip_query(min_price, max_price, search, sort)?;
    let trips = sample_trips();
    let matched = filter_trips(&trips, &query);
    debug!(matched = matched.len(), total = trips.len(), "filtered trips");

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }
    if matched.is_empty() {
        println!("No trips match.");
        return Ok(());
    }

    println!(
        "{:>3} {:<18} {:<24} {:>8} {:>6} {:>6} {:<10}",
        "ID", "Trip", "Destination", "Price", "Nights", "Rating", "Departs"
    );
    println!("{}", "-".repeat(83));
    for t in &matched {
        println!(
            "{:>3} {:<18} {:<24} {:>8} {:>6} {:>6.1} {:<10}",
            t.id,
            t.title,
            t.destination,
            format!("${:.0}", t.price),
            t.nights,
            t.rating,
            t.departs
        );
    }
    println!();
    println!("{} of {} trips, sorted by {}", matched.len(), trips.len(), query.sort.label());
    Ok(())
}
