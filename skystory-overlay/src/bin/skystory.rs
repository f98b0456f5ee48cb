use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use skystory_catalog::{CatalogQuery, StarCatalog, StarCatalogEntry};
use skystory_coords::HorizontalPosition;
use skystory_core::ObserverLocation;
use skystory_overlay::{build_frame, DeviceAttitude, OverlayConfig, OverlayFrame, Viewport};
use skystory_time::{Gmst, Lst, UtcInstant};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "skystory")]
#[command(about = "Star positions and camera overlay frames for SkyStory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print Greenwich and local sidereal time
    Lst {
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// UTC time as ISO 8601 (defaults to now)
        #[arg(long)]
        time: Option<String>,
    },
    /// Horizontal position of one star
    Locate {
        /// Star name (case-insensitive)
        star: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long)]
        time: Option<String>,
    },
    /// List catalog stars above the horizon, highest first
    Sky {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long)]
        time: Option<String>,
        /// Include stars below the horizon
        #[arg(long)]
        all: bool,
    },
    /// Build one overlay frame
    Frame {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Compass heading of the camera in degrees
        #[arg(long, allow_hyphen_values = true)]
        heading: f64,
        /// Camera elevation above the horizon in degrees
        #[arg(long, allow_hyphen_values = true)]
        pitch: f64,
        #[arg(long, default_value = "1080")]
        width: f64,
        #[arg(long, default_value = "1920")]
        height: f64,
        #[arg(long)]
        time: Option<String>,
        /// Overlay config as JSON
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// List catalog entries, brightest first
    Catalog {
        /// IAU constellation code, e.g. Ori
        #[arg(long)]
        constellation: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        max_mag: Option<f64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = StarCatalog::builtin();

    match cli.command {
        Commands::Lst { lon, time } => {
            let instant = parse_time(time.as_deref())?;
            let gmst = Gmst::at(&instant);
            let lst = Lst::from_longitude(lon, &instant);
            println!("UTC:  {}", instant);
            println!("{}", gmst);
            println!("{}", lst);
            println!("LST hours: {:.6}", lst.hours());
        }
        Commands::Locate {
            star,
            lat,
            lon,
            time,
        } => {
            let location = parse_location(lat, lon)?;
            let instant = parse_time(time.as_deref())?;
            let entry = catalog.require(&star)?;
            let lst = Lst::at(&location, &instant);
            let pos = entry.horizontal(&location, &lst);
            println!("{}", entry);
            println!("Observer: {} at {}", location, instant);
            println!("{}", lst);
            println!("Hour angle: {:+.4}h", lst.hour_angle_to_target(entry.ra_hours()));
            println!("{}", pos);
            if !pos.is_above_horizon() {
                println!("Below the horizon.");
            }
        }
        Commands::Sky {
            lat,
            lon,
            time,
            all,
        } => {
            let location = parse_location(lat, lon)?;
            let instant = parse_time(time.as_deref())?;
            let lst = Lst::at(&location, &instant);
            let mut rows: Vec<(&StarCatalogEntry, HorizontalPosition)> = catalog
                .stars()
                .iter()
                .map(|s| (s, s.horizontal(&location, &lst)))
                .filter(|(_, pos)| all || pos.is_above_horizon())
                .collect();
            rows.sort_by(|a, b| b.1.altitude_degrees().total_cmp(&a.1.altitude_degrees()));
            print_sky(&rows);
        }
        Commands::Frame {
            lat,
            lon,
            heading,
            pitch,
            width,
            height,
            time,
            config,
            format,
        } => {
            let location = parse_location(lat, lon)?;
            let instant = parse_time(time.as_deref())?;
            let viewport = Viewport::new(width, height)?;
            let config = match config {
                Some(path) => OverlayConfig::load(&path)
                    .with_context(|| format!("Cannot load config {}", path.display()))?,
                None => OverlayConfig::default(),
            };
            let attitude = DeviceAttitude::new(heading, pitch);
            let frame = build_frame(&catalog, &location, &attitude, &instant, &viewport, &config);

            match format {
                OutputFormat::Table => print_frame_table(&frame),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&frame)?),
                OutputFormat::Csv => print_frame_csv(&frame),
            }
        }
        Commands::Catalog {
            constellation,
            max_mag,
        } => {
            let query = CatalogQuery {
                constellation,
                max_mag,
                max_results: None,
            };
            let results = catalog.search(&query);
            for (i, entry) in results.iter().enumerate() {
                println!("{:4}: {}", i + 1, entry);
            }
            if results.is_empty() {
                println!("No stars found matching the search criteria.");
            } else {
                println!("\nTotal results: {}", results.len());
            }
        }
    }

    Ok(())
}

fn parse_time(time: Option<&str>) -> Result<UtcInstant> {
    match time {
        Some(s) => s
            .parse::<UtcInstant>()
            .with_context(|| format!("Cannot parse time '{}'", s)),
        None => Ok(UtcInstant::now()),
    }
}

fn parse_location(lat: f64, lon: f64) -> Result<ObserverLocation> {
    ObserverLocation::from_degrees(lat, lon)
        .with_context(|| format!("Invalid observer location lat={} lon={}", lat, lon))
}

fn print_sky(rows: &[(&StarCatalogEntry, HorizontalPosition)]) {
    for (i, (entry, pos)) in rows.iter().enumerate() {
        println!(
            "{:4}: {:>16} Az={:7.2}° {:<2} Alt={:+6.2}° Mag={:5.2}",
            i + 1,
            entry.name(),
            pos.azimuth_degrees(),
            pos.cardinal_direction(),
            pos.altitude_degrees(),
            entry.magnitude()
        );
    }
    if rows.is_empty() {
        println!("No stars above the horizon.");
    } else {
        println!("\nTotal stars: {}", rows.len());
    }
}

fn print_frame_table(frame: &OverlayFrame) {
    println!(
        "{}  LST {:.4}h  view Az={:.2}° Alt={:+.2}°  {}x{}",
        frame.time_utc,
        frame.lst_hours,
        frame.center.azimuth_deg,
        frame.center.altitude_deg,
        frame.viewport.width(),
        frame.viewport.height()
    );
    for (i, m) in frame.markers.iter().enumerate() {
        println!(
            "{:4}: {:>16} x={:8.1} y={:8.1} r={:.2} a={:.2} Mag={:5.2}",
            i + 1,
            m.name,
            m.x,
            m.y,
            m.radius,
            m.opacity,
            m.magnitude
        );
    }
    for s in &frame.segments {
        println!(
            "      {} - {}: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            s.from, s.to, s.x1, s.y1, s.x2, s.y2
        );
    }
    if frame.is_empty() {
        println!("Nothing in view.");
    } else {
        println!(
            "\nMarkers: {}  Segments: {}",
            frame.markers.len(),
            frame.segments.len()
        );
    }
}

fn print_frame_csv(frame: &OverlayFrame) {
    println!("kind,name,x,y,x2,y2,radius,opacity,magnitude");
    for m in &frame.markers {
        println!(
            "star,{},{},{},,,{},{},{}",
            m.name, m.x, m.y, m.radius, m.opacity, m.magnitude
        );
    }
    for s in &frame.segments {
        println!("segment,{}-{},{},{},{},{},,,", s.from, s.to, s.x1, s.y1, s.x2, s.y2);
    }
}
