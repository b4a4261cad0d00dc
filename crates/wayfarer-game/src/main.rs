//! Headless wayfarer explorer: walks the traveler through a seeded world
//! and prints the chunk it ends up in.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use wayfarer_config::{CliArgs, Config, WorldConfig};
use wayfarer_player::{Direction, Session, TravelerPosition};
use wayfarer_terrain::{GeneratorParams, WorldCache};
use wayfarer_tiles::{Chunk, ChunkCoord, Palette};

/// Wayfarer command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "wayfarer", about = "Explore an endless procedurally generated world")]
struct GameArgs {
    #[command(flatten)]
    cli: CliArgs,

    /// Chunk column to display instead of the traveler's chunk.
    #[arg(long, allow_hyphen_values = true, requires = "chunk_y")]
    chunk_x: Option<i64>,

    /// Chunk row to display instead of the traveler's chunk.
    #[arg(long, allow_hyphen_values = true, requires = "chunk_x")]
    chunk_y: Option<i64>,

    /// Moves to make before printing, e.g. `NNEESW`.
    #[arg(long, default_value = "")]
    walk: String,

    /// Print the map of visited chunks instead of a chunk.
    #[arg(long)]
    map: bool,
}

/// Widest overview window, in chunks.
const OVERVIEW_COLS: i128 = 19;

/// Tallest overview window, in chunks.
const OVERVIEW_ROWS: i128 = 10;

fn generator_params(world: &WorldConfig) -> GeneratorParams {
    GeneratorParams {
        seed: world.seed.unwrap_or_default(),
        terrain_scale: world.terrain_scale,
        terrain_octaves: world.terrain_octaves,
        feature_octaves: world.feature_octaves,
        biome_scale: world.biome_scale,
        placement_scale: world.placement_scale,
        placement_threshold: world.placement_threshold,
        water_level: world.water_level,
        rock_level: world.rock_level,
        bush_level: world.bush_level,
    }
}

/// Parses a walk string, returning the first character that is not a direction.
fn parse_walk(walk: &str) -> Result<Vec<Direction>, char> {
    walk.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::from_char(c).ok_or(c))
        .collect()
}

/// Renders `chunk` with the traveler drawn on top when it stands inside.
fn render_view(
    palette: &Palette,
    chunk: &Chunk,
    shown: ChunkCoord,
    traveler: TravelerPosition,
) -> Vec<String> {
    let mut rows = palette.render_chunk(chunk);
    if shown == traveler.chunk
        && let Some(row) = rows.get_mut(traveler.y)
    {
        *row = row
            .chars()
            .enumerate()
            .map(|(x, c)| if x == traveler.x { palette.traveler } else { c })
            .collect();
    }
    rows
}

/// Narrows `min..=max` to at most `limit` chunks, keeping `centre` in view
/// when it lies inside the range.
fn overview_span(min: i64, max: i64, centre: i64, limit: i128) -> (i128, i128) {
    let (min, max, centre) = (i128::from(min), i128::from(max), i128::from(centre));
    if max - min < limit {
        return (min, max);
    }
    let lo = (centre - limit / 2).clamp(min, max - limit + 1);
    (lo, lo + limit - 1)
}

/// Draws the visited chunks as a grid of `[ ]` cells.
///
/// The origin is marked `S` and `current` is marked `X`. Visited east and
/// south neighbours are joined by `-` and `|`.
fn render_overview(world: &WorldCache, current: ChunkCoord) -> Vec<String> {
    let Some((min, max)) = world.visited_bounds() else {
        return vec!["Nothing explored yet.".to_string()];
    };
    let visited = world.all_visited();
    let (x0, x1) = overview_span(min.x, max.x, current.x, OVERVIEW_COLS);
    let (y0, y1) = overview_span(min.y, max.y, current.y, OVERVIEW_ROWS);
    let width = ((x1 - x0 + 1) * 4) as usize;
    let is_visited = |x: i128, y: i128| visited.contains(&ChunkCoord::new(x as i64, y as i64));

    let mut lines = Vec::new();
    for cy in y0..=y1 {
        let mut cells = vec![' '; width];
        let mut links = vec![' '; width];
        for cx in x0..=x1 {
            if !is_visited(cx, cy) {
                continue;
            }
            let col = ((cx - x0) * 4) as usize;
            let coord = ChunkCoord::new(cx as i64, cy as i64);
            let marker = if coord == current {
                'X'
            } else if coord == ChunkCoord::ORIGIN {
                'S'
            } else {
                ' '
            };
            cells[col..col + 3].copy_from_slice(&['[', marker, ']']);
            if cx < x1 && is_visited(cx + 1, cy) {
                cells[col + 3] = '-';
            }
            if cy < y1 && is_visited(cx, cy + 1) {
                links[col + 1] = '|';
            }
        }
        lines.push(cells.into_iter().collect::<String>().trim_end().to_string());
        if cy < y1 {
            lines.push(links.into_iter().collect::<String>().trim_end().to_string());
        }
    }
    lines
}

fn status_line(traveler: TravelerPosition) -> String {
    format!(
        "Coords: ({}, {}) | Chunk: ({}, {})",
        traveler.x, traveler.y, traveler.chunk.x, traveler.chunk.y
    )
}

fn main() -> ExitCode {
    let args = GameArgs::parse();

    let config_dir = args
        .cli
        .config
        .clone()
        .or_else(Config::default_dir)
        .unwrap_or_else(|| PathBuf::from(".wayfarer"));

    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args.cli);

    let log_dir = config_dir.join("logs");
    wayfarer_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Some(e) = load_error {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let walk = match parse_walk(&args.walk) {
        Ok(walk) => walk,
        Err(c) => {
            error!("invalid direction {c:?} in --walk (expected N, S, E or W)");
            return ExitCode::from(2);
        }
    };

    let catalog = config.world.structures.clone().unwrap_or_default();
    let params = generator_params(&config.world);
    let mut session = match Session::with_catalog(config.world.seed, params, catalog) {
        Ok(session) => session,
        Err(e) => {
            error!("unusable structure catalog in config: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(seed = session.world().seed(), steps = walk.len(), "session started");

    for direction in walk {
        session.step(direction);
    }

    let traveler = session.traveler().position();
    if args.map {
        session.current_chunk();
        for line in render_overview(session.world(), traveler.chunk) {
            println!("{line}");
        }
        println!("'S' = start, 'X' = current");
    } else {
        let shown = match (args.chunk_x, args.chunk_y) {
            (Some(x), Some(y)) => ChunkCoord::new(x, y),
            _ => traveler.chunk,
        };
        let view = render_view(&config.palette, session.chunk_at(shown), shown, traveler);
        for row in view {
            println!("{row}");
        }
    }
    println!("{}", status_line(traveler));
    println!("Visited chunks: {}", session.world().visited_count());

    ExitCode::SUCCESS
}
