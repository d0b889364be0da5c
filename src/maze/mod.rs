pub mod brick;
pub mod cell;
pub mod grid;
pub mod hex;
pub mod shape;
pub mod square;

use std::{fmt, io};

pub use brick::Brick;
pub use cell::{EdgeIndex, EdgeStatus, NodeIndex, NodeStatus};
pub use grid::{Grid, GridEvent};
pub use hex::Hex;
pub use shape::{Region, Shape};
pub use square::Square;

use crate::{
    error::CreateMazeError,
    generators::Wilson,
    render::{DrawParams, Painter, draw, geometry::Geometry},
};

pub type SquareGrid = Grid<Square>;
pub type HexGrid = Grid<Hex>;
pub type BrickGrid = Grid<Brick>;

/// The capabilities a maze generator needs from a grid, independent of its cell shape.
pub trait MazeGrid {
    type Node: Copy + Eq + fmt::Debug;

    fn node(&self, node: Self::Node) -> NodeStatus;
    fn set_node(&mut self, node: Self::Node, status: NodeStatus);

    /// Fills `edges` with the edges of `node` a walk may take (open or on the current
    /// path), in ascending order. The buffer is cleared first.
    fn open_edges_into(&self, node: Self::Node, edges: &mut Vec<EdgeIndex>);

    fn open_edges(&self, node: Self::Node) -> Vec<EdgeIndex> {
        let mut edges = Vec::new();
        self.open_edges_into(node, &mut edges);
        edges
    }

    fn edge(&self, node: Self::Node, edge: EdgeIndex) -> EdgeStatus;
    fn set_edge(&mut self, node: Self::Node, edge: EdgeIndex, status: EdgeStatus);

    /// Some cell that is still open, chosen deterministically, or `None` once every cell
    /// is part of the maze.
    fn open_node(&self) -> Option<Self::Node>;

    fn next_node(&self, node: Self::Node, edge: EdgeIndex) -> Self::Node;
}

/// Cell shapes selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CellShape {
    #[value(alias = "sqr")]
    Square,
    #[value(alias = "hexagonal")]
    Hex,
    Brick,
}

impl fmt::Display for CellShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellShape::Square => write!(f, "Square"),
            CellShape::Hex => write!(f, "Hexagonal"),
            CellShape::Brick => write!(f, "Brick"),
        }
    }
}

/// A grid whose shape is only known at runtime.
pub enum Maze {
    Square(SquareGrid),
    Hex(HexGrid),
    Brick(BrickGrid),
}

macro_rules! with_grid {
    ($maze:expr, $grid:ident => $body:expr) => {
        match $maze {
            Maze::Square($grid) => $body,
            Maze::Hex($grid) => $body,
            Maze::Brick($grid) => $body,
        }
    };
}

impl Maze {
    pub fn new(shape: CellShape, rows: u16, cols: u16) -> Self {
        match shape {
            CellShape::Square => Maze::Square(Grid::new(rows, cols)),
            CellShape::Hex => Maze::Hex(Grid::new(rows, cols)),
            CellShape::Brick => Maze::Brick(Grid::new(rows, cols)),
        }
    }

    /// Number of (rows, cols) of `shape` cells that fit into a `width x height` pixel area.
    /// Either value may be zero or negative if the area is too small.
    pub fn grid_size(shape: CellShape, width: i32, height: i32, params: &DrawParams) -> (i32, i32) {
        match shape {
            CellShape::Square => Square::grid_size(width, height, params),
            CellShape::Hex => Hex::grid_size(width, height, params),
            CellShape::Brick => Brick::grid_size(width, height, params),
        }
    }

    pub fn shape(&self) -> CellShape {
        match self {
            Maze::Square(_) => CellShape::Square,
            Maze::Hex(_) => CellShape::Hex,
            Maze::Brick(_) => CellShape::Brick,
        }
    }

    pub fn rows(&self) -> u16 {
        with_grid!(self, grid => grid.rows())
    }

    pub fn cols(&self) -> u16 {
        with_grid!(self, grid => grid.cols())
    }

    pub fn invalidate_region(&mut self, top_left: NodeIndex, bottom_right: NodeIndex) {
        with_grid!(self, grid => grid.invalidate_region(top_left, bottom_right))
    }

    pub fn add_exits(&mut self) {
        with_grid!(self, grid => grid.add_exits())
    }

    pub fn is_connected(&self) -> bool {
        with_grid!(self, grid => grid.is_connected())
    }

    /// Carves a maze into the grid with a generator seeded by `seed`.
    pub fn create_maze(&mut self, seed: u64) -> Result<(), CreateMazeError> {
        with_grid!(self, grid => Wilson::new(seed).create_maze(grid))
    }

    pub fn count_edges(&self, status: EdgeStatus) -> usize {
        with_grid!(self, grid => grid.count_edges(status))
    }

    pub fn draw<P: Painter>(&self, painter: &mut P, params: &DrawParams) -> io::Result<()> {
        with_grid!(self, grid => draw(grid, painter, params))
    }
}
