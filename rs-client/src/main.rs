use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rs_place::{
    CollectingSink, PasteSettings, PlacementReport, SchematicPlacement, Severity,
    SubRegionPlacement, place_to_world, place_to_world_within_chunk,
};
use rs_utils::{Mirror, Position, Rotation};
use rs_world::MemoryWorld;
use tracing::{Level, error, info, warn};

mod sample;

#[derive(Parser)]
#[command(name = "rs-client", about = "Paste a sample schematic into an in-memory world")]
struct Cli {
    /// Paste settings TOML file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Placement TOML file; replaces the origin and orientation flags
    #[arg(long)]
    placement: Option<PathBuf>,
    /// Placement origin (X Y Z)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_hyphen_values = true)]
    origin: Option<Vec<i32>>,
    /// Clockwise rotation in degrees, a multiple of 90
    #[arg(long, default_value = "0", value_parser = parse_rotation, allow_hyphen_values = true)]
    rotation: Rotation,
    /// none, left_right or front_back
    #[arg(long, default_value = "none", value_parser = parse_mirror)]
    mirror: Mirror,
    /// Paste one chunk column per call instead of the whole structure at once
    #[arg(long)]
    chunked: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn parse_rotation(arg: &str) -> Result<Rotation, String> {
    let degrees: i32 = arg.parse().map_err(|_| format!("not a number: {arg}"))?;
    Rotation::from_degrees(degrees).ok_or_else(|| format!("{degrees} is not a multiple of 90"))
}

fn parse_mirror(arg: &str) -> Result<Mirror, String> {
    Mirror::ALL
        .into_iter()
        .find(|mirror| mirror.as_string() == arg)
        .ok_or_else(|| format!("unknown mirror: {arg}"))
}

fn load_placement(path: &Path) -> Result<SchematicPlacement, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    toml::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))
}

fn build_placement(cli: &Cli) -> Result<SchematicPlacement, String> {
    if let Some(path) = &cli.placement {
        return load_placement(path);
    }
    let origin = match cli.origin.as_deref() {
        Some([x, y, z]) => Position::new(*x, *y, *z),
        Some(other) => return Err(format!("origin needs three values, got {}", other.len())),
        None => Position::new(0, 64, 0),
    };
    Ok(SchematicPlacement::new(origin)
        .rotated(cli.rotation)
        .mirrored(cli.mirror)
        .with_region("house", SubRegionPlacement::default())
        .with_region("yard", SubRegionPlacement::new(sample::YARD_OFFSET)))
}

fn run(cli: &Cli) -> Result<(), String> {
    let settings = match &cli.settings {
        Some(path) => PasteSettings::load(path).map_err(|e| e.to_string())?,
        None => PasteSettings::default(),
    };
    let placement = build_placement(cli)?;
    let schematic = sample::cottage();
    info!(
        "pasting '{}' at {} (rotation {}, mirror {}, replace {})",
        schematic.name(),
        placement.origin,
        placement.rotation,
        placement.mirror,
        settings.replace_behavior
    );

    let mut world = MemoryWorld::new();
    let sink = CollectingSink::new();
    let report = if cli.chunked {
        let mut total = PlacementReport::default();
        for chunk in placement.touched_chunks(&schematic) {
            total.merge(place_to_world_within_chunk(
                &schematic, &mut world, chunk, &placement, &settings, &sink,
            ));
        }
        total
    } else {
        place_to_world(&schematic, &mut world, &placement, &settings, &sink)
    };

    for diagnostic in sink.diagnostics() {
        match diagnostic.severity {
            Severity::Warning => warn!("{diagnostic}"),
            Severity::Error => error!("{diagnostic}"),
        }
    }
    info!("{report:?}");
    info!(
        "world now holds {} blocks, {} block entities, {} entities",
        world.blocks_snapshot().len(),
        world.block_entities().len(),
        world.entity_count()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
