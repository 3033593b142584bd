use clap::Parser;
use log::warn;
use serde::Serialize;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;

use waypoint::Layout;
use waypoint::core::config::{self, CliOverrides, ResolvedConfig};
use waypoint::core::resources::ResourceProvider;
use waypoint::core::route_matcher::selection;

#[derive(Parser)]
#[command(name = "waypoint", about = "Bottom bar and side rail navigation for the terminal")]
struct Args {
    /// Navigation surface to show
    #[arg(short, long, value_enum)]
    layout: Option<Layout>,

    /// Initial location, e.g. "library/playlist/42"
    #[arg(long)]
    location: Option<String>,

    /// Pure black container
    #[arg(long)]
    high_contrast: bool,

    /// Icon-only bar
    #[arg(long)]
    compact_labels: bool,

    /// Print the selection for the initial location as JSON and exit
    #[arg(long)]
    print_selection: bool,
}

#[derive(Serialize)]
struct SelectionReport<'a> {
    location: Option<&'a str>,
    destinations: Vec<DestinationReport<'a>>,
}

#[derive(Serialize)]
struct DestinationReport<'a> {
    route: &'a str,
    title: String,
    selected: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("waypoint.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        Default::default()
    });
    let cli = CliOverrides {
        layout: args.layout,
        location: args.location,
        high_contrast: args.high_contrast,
        compact_labels: args.compact_labels,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Waypoint starting: layout={:?} location={:?}",
        resolved.layout,
        resolved.start_location
    );

    if args.print_selection {
        return print_selection(&resolved);
    }

    waypoint::tui::run(resolved)
}

fn print_selection(config: &ResolvedConfig) -> io::Result<()> {
    let location = config.start_location.as_deref();
    let report = SelectionReport {
        location,
        destinations: config
            .destinations
            .iter()
            .zip(selection(location, &config.destinations))
            .map(|(dest, selected)| DestinationReport {
                route: &dest.route,
                title: config.resources.string(&dest.title_key),
                selected,
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}
