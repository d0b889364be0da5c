use std::{fs::File, io::BufWriter, path::PathBuf, str::FromStr};

use anyhow::{Context, bail, ensure};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mazegen::{
    generators::random_seed,
    maze::{CellShape, Maze, NodeIndex},
    paper::PaperSize,
    render::{DrawParams, svg::SvgPainter},
};

/// Generates a printable maze as an SVG file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "output.svg")]
    output: PathBuf,

    /// Shape of the maze cells
    #[arg(short = 'C', long, value_enum, default_value_t = CellShape::Hex)]
    cell_shape: CellShape,

    /// Paper size the maze must fit on, e.g. A4, A5l, A3landscape
    #[arg(short = 's', long, default_value = "A4")]
    paper_size: PaperSize,

    /// Wall thickness in pixels
    #[arg(long, default_value_t = 4)]
    stroke_width: i32,

    /// Cell width in pixels
    #[arg(long, default_value_t = 40)]
    cell_width: i32,

    /// Cell height in pixels, ignored for hexagonal cells
    #[arg(long, default_value_t = 40)]
    cell_height: i32,

    /// Random seed, drawn at random if not given
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the empty grid only
    #[arg(long)]
    no_maze: bool,

    /// Keep the maze closed on all sides
    #[arg(long)]
    no_exits: bool,

    /// Region to cut out of the grid, as ROW,COL,ROW,COL (top-left, bottom-right)
    #[arg(long, value_name = "ROW,COL,ROW,COL")]
    hole: Vec<Hole>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
struct Hole {
    top_left: NodeIndex,
    bottom_right: NodeIndex,
}

impl FromStr for Hole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid hole {s:?}: {e}"))?;
        match values[..] {
            [top, left, bottom, right] => Ok(Hole {
                top_left: NodeIndex::new(top, left),
                bottom_right: NodeIndex::new(bottom, right),
            }),
            _ => Err(format!("invalid hole {s:?}: expected ROW,COL,ROW,COL")),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let writer = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };
    let (writer, _guard) = writer;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(args)
}

fn run(args: Args) -> anyhow::Result<()> {
    ensure!(args.cell_width > 0, "cell width must be positive");
    ensure!(args.cell_height > 0, "cell height must be positive");
    ensure!(args.stroke_width > 0, "stroke width must be positive");
    let params = DrawParams {
        cell_width: args.cell_width,
        cell_height: args.cell_height,
        stroke_width: args.stroke_width,
    };

    let (width, height) = args.paper_size.area_size();
    let (rows, cols) = Maze::grid_size(args.cell_shape, width, height, &params);
    if rows <= 0 || cols <= 0 {
        bail!(
            "{} cells of {}x{} px do not fit on {}",
            args.cell_shape,
            args.cell_width,
            args.cell_height,
            args.paper_size
        );
    }
    let rows = u16::try_from(rows).context("too many rows")?;
    let cols = u16::try_from(cols).context("too many columns")?;
    tracing::info!(
        "{} grid of {rows}x{cols} cells on {}",
        args.cell_shape,
        args.paper_size
    );

    let mut maze = Maze::new(args.cell_shape, rows, cols);
    for hole in &args.hole {
        let Hole {
            top_left,
            bottom_right,
        } = *hole;
        ensure!(
            top_left.row <= bottom_right.row && top_left.col <= bottom_right.col,
            "hole {top_left}..{bottom_right} is inverted"
        );
        ensure!(
            top_left.row >= 0
                && top_left.col >= 0
                && bottom_right.row < rows as i32
                && bottom_right.col < cols as i32,
            "hole {top_left}..{bottom_right} is outside the {rows}x{cols} grid"
        );
        maze.invalidate_region(top_left, bottom_right);
    }
    ensure!(
        maze.is_connected(),
        "the holes split the grid into disconnected parts"
    );

    if !args.no_exits {
        maze.add_exits();
    }

    if !args.no_maze {
        let seed = args.seed.unwrap_or_else(random_seed);
        tracing::info!("generating maze with seed {seed}");
        if let Err(err) = maze.create_maze(seed) {
            tracing::warn!("maze generation failed: {err}");
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut painter = SvgPainter::new(BufWriter::new(file), params.stroke_width);
    maze.draw(&mut painter, &params)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!("maze written to {}", args.output.display());
    Ok(())
}
