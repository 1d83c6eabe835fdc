#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Interactive command-line adapter for the Tile Matrix engine.
//!
//! All I/O lives here: the session loop reads prompt commands, calls into
//! the pure classification and resolution systems, and prints the results.
//! The core crates never touch stdin or stdout.

mod commands;
mod render;

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{parse_coordinate, PromptCommand, MENU};
use tile_matrix_core::{GridConfig, Span, WorldCoord};
use tile_matrix_system_classify as classify;
use tile_matrix_system_labels as labels;
use tile_matrix_system_resolve as resolve;
use tile_matrix_world::{query, Grid};

/// Interactive explorer for the cartesian tile matrix.
#[derive(Debug, Parser)]
#[command(name = "tile-matrix")]
struct Cli {
    /// Tiles per quadrant along one axis.
    #[arg(long, default_value_t = 3)]
    span: u32,

    /// Real-world edge length of one tile in meters.
    #[arg(long, default_value_t = 5.0)]
    meters_per_tile: f32,

    /// Seed for the random coordinate sampler.
    #[arg(long, default_value_t = 0x7115_3a7e)]
    seed: u64,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Print an A1-style label sheet instead of starting a session.
    Labels {
        /// Number of columns in the sheet.
        #[arg(long, default_value_t = 8)]
        width: u32,

        /// Number of rows in the sheet.
        #[arg(long, default_value_t = 8)]
        height: u32,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(Mode::Labels { width, height }) = cli.mode {
        return print_labels(width, height);
    }

    let span = Span::new(cli.span).context("invalid --span")?;
    let config =
        GridConfig::new(span, cli.meters_per_tile).context("invalid --meters-per-tile")?;
    let grid = Grid::build(config.span());
    info!(
        span = config.span().get(),
        meters_per_tile = config.meters_per_tile(),
        dimension = grid.dimension(),
        "session configured"
    );

    print!("{}", render::render_grid(&grid));
    let mut session = Session::new(config, grid, ChaCha8Rng::seed_from_u64(cli.seed));
    session.run()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_labels(width: u32, height: u32) -> anyhow::Result<()> {
    let cells = labels::generate_labels(width, height).context("invalid label sheet dimensions")?;
    info!(width, height, cells = cells.len(), "label sheet generated");
    println!("{}", cells.keys().cloned().collect::<Vec<_>>().join(" "));
    Ok(())
}

/// Reads a single line after printing a prompt label.
///
/// Returns `None` at end of input so the session can wind down cleanly.
fn prompt_line(label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("flush prompt")?;
    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("read prompt input")?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Interactive session state: immutable configuration plus the sampler RNG.
struct Session {
    config: GridConfig,
    grid: Grid,
    rng: ChaCha8Rng,
}

impl Session {
    fn new(config: GridConfig, grid: Grid, rng: ChaCha8Rng) -> Self {
        Self { config, grid, rng }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        loop {
            println!("\n{MENU}");
            let Some(line) = prompt_line("Input: ")? else {
                return Ok(());
            };
            match PromptCommand::parse(&line) {
                None => println!("Unrecognized option: {}", line.trim()),
                Some(PromptCommand::Exit) => return Ok(()),
                Some(PromptCommand::ShowRect) => {
                    print!("{}", render::render_rect(&self.config.world_rect()));
                }
                Some(PromptCommand::ShowGrid) => print!("{}", render::render_grid(&self.grid)),
                Some(PromptCommand::RandomValid) => {
                    let coordinate = self.sample_coordinate();
                    self.probe(coordinate);
                }
                Some(PromptCommand::InputXy) => {
                    let Some(x_line) = prompt_line("Cartesian Coordinate X: ")? else {
                        return Ok(());
                    };
                    let Some(y_line) = prompt_line("Cartesian Coordinate Y: ")? else {
                        return Ok(());
                    };
                    match parse_coordinate(&x_line, &y_line) {
                        Ok(coordinate) => self.probe(coordinate),
                        Err(error) => println!("Error: {error}"),
                    }
                }
            }
        }
    }

    /// Samples a uniform coordinate inside the world boundary at millimeter
    /// precision.
    fn sample_coordinate(&mut self) -> WorldCoord {
        let half = self.config.half_span_in_meters();
        let x = (self.rng.gen_range(-half..half) * 1000.0).round() / 1000.0;
        let y = (self.rng.gen_range(-half..half) * 1000.0).round() / 1000.0;
        WorldCoord::new(x, y)
    }

    /// Classifies a coordinate, resolves the owning cell and prints the
    /// whole chain. The index is inferred, not searched, so the output is
    /// identical no matter how large the grid is.
    fn probe(&self, coordinate: WorldCoord) {
        println!(
            "\n>>> world_xy {} @ {} meters per tile",
            render::signed_coord(coordinate),
            self.config.meters_per_tile()
        );

        let outcome = classify::classify(
            &self.config.world_rect(),
            self.config.meters_per_tile(),
            coordinate,
        );
        println!(
            "tile_xy {}",
            render::signed_pair(outcome.bounds().x(), outcome.bounds().y())
        );

        if !outcome.within_world() {
            println!("coordinate lies outside the world boundary");
            return;
        }
        if outcome.bounds().touches_axis() {
            println!("no tile: the theoretical origin belongs to no quadrant");
            return;
        }

        let index = resolve::resolve(self.grid.dimension(), outcome.bounds());
        println!("= index(y{},x{})", index.row(), index.column());
        if let Some(tile) = query::tile_at(&self.grid, index) {
            println!(
                "grid[y{}][x{}] = tile {}",
                index.row(),
                index.column(),
                render::signed_pair(tile.x(), tile.y())
            );
        }
    }
}
