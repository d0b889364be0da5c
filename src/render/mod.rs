pub mod geometry;
pub mod svg;

use std::io;

use crate::maze::{EdgeStatus, Grid, MazeGrid, NodeIndex, NodeStatus, Shape};
use geometry::Geometry;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
}

/// What a painted element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    /// Cell not in the maze
    OpenCell,
    /// Cell in the maze
    VisitedCell,
    /// Cell on an unfinished random walk
    OnPathCell,
    /// Cell removed from the grid
    ExcludedCell,
    /// Wall that could have been carved
    Wall,
    /// Wall on a grid or region boundary
    WallBlocked,
}

/// Pixel dimensions used to lay out a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawParams {
    pub cell_width: i32,
    pub cell_height: i32,
    pub stroke_width: i32,
}

impl Default for DrawParams {
    fn default() -> Self {
        DrawParams {
            cell_width: 40,
            cell_height: 40,
            stroke_width: 4,
        }
    }
}

/// Drawing backend.
pub trait Painter {
    fn begin_draw(&mut self, width: f64, height: f64) -> io::Result<()>;
    fn end_draw(&mut self) -> io::Result<()>;
    fn draw_line(&mut self, from: Point2D, to: Point2D, style: PaintStyle) -> io::Result<()>;
    fn draw_poly(&mut self, vertices: &[Point2D], style: PaintStyle) -> io::Result<()>;
}

fn cell_style(status: NodeStatus) -> PaintStyle {
    match status {
        NodeStatus::Open => PaintStyle::OpenCell,
        NodeStatus::Visited => PaintStyle::VisitedCell,
        NodeStatus::OnPath => PaintStyle::OnPathCell,
        NodeStatus::Excluded => PaintStyle::ExcludedCell,
    }
}

fn is_active<S: Shape>(grid: &Grid<S>, node: NodeIndex) -> bool {
    grid.contains(node) && grid.node(node) != NodeStatus::Excluded
}

/// Paints the cells of `grid`, then every wall once.
///
/// Open and invalid edges are walls; visited and on-path edges are passages. Walls
/// between two excluded cells, or between an excluded cell and the outside, are skipped
/// so removed regions show up as holes.
pub fn draw<S, P>(grid: &Grid<S>, painter: &mut P, params: &DrawParams) -> io::Result<()>
where
    S: Geometry,
    P: Painter,
{
    let (width, height) = S::canvas_size(grid.rows(), grid.cols(), params);
    painter.begin_draw(width, height)?;

    for (node, status) in grid.nodes() {
        painter.draw_poly(&S::cell_vertices(node, params), cell_style(status))?;
    }

    for (node, edge, status) in grid.connections() {
        if !status.is_wall()
            || (!is_active(grid, node) && !is_active(grid, S::next_node(node, edge)))
        {
            continue;
        }
        let style = if status == EdgeStatus::Invalid {
            PaintStyle::WallBlocked
        } else {
            PaintStyle::Wall
        };
        let (from, to) = S::wall(node, edge, params);
        painter.draw_line(from, to, style)?;
    }

    painter.end_draw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::Wilson,
        maze::{Brick, Hex, Square},
    };

    #[derive(Default)]
    struct RecordingPainter {
        size: Option<(f64, f64)>,
        lines: Vec<(Point2D, Point2D, PaintStyle)>,
        polys: Vec<(Vec<Point2D>, PaintStyle)>,
        finished: bool,
    }

    impl Painter for RecordingPainter {
        fn begin_draw(&mut self, width: f64, height: f64) -> io::Result<()> {
            self.size = Some((width, height));
            Ok(())
        }

        fn end_draw(&mut self) -> io::Result<()> {
            self.finished = true;
            Ok(())
        }

        fn draw_line(&mut self, from: Point2D, to: Point2D, style: PaintStyle) -> io::Result<()> {
            self.lines.push((from, to, style));
            Ok(())
        }

        fn draw_poly(&mut self, vertices: &[Point2D], style: PaintStyle) -> io::Result<()> {
            self.polys.push((vertices.to_vec(), style));
            Ok(())
        }
    }

    fn count_style(painter: &RecordingPainter, style: PaintStyle) -> usize {
        painter.lines.iter().filter(|(_, _, s)| *s == style).count()
    }

    #[test]
    fn test_draw_fresh_square_grid() {
        let grid = Grid::<Square>::new(2, 2);
        let mut painter = RecordingPainter::default();
        draw(&grid, &mut painter, &DrawParams::default()).unwrap();

        assert_eq!(painter.size, Some((84.0, 84.0)));
        assert!(painter.finished);
        assert_eq!(painter.polys.len(), 4);
        assert!(painter.polys.iter().all(|(_, s)| *s == PaintStyle::OpenCell));
        assert_eq!(count_style(&painter, PaintStyle::Wall), 4);
        assert_eq!(count_style(&painter, PaintStyle::WallBlocked), 8);
    }

    #[test]
    fn test_draw_skips_passages() {
        let mut grid = Grid::<Square>::new(2, 2);
        grid.add_exits();
        Wilson::new(0).create_maze(&mut grid).unwrap();
        let mut painter = RecordingPainter::default();
        draw(&grid, &mut painter, &DrawParams::default()).unwrap();

        assert!(painter.polys.iter().all(|(_, s)| *s == PaintStyle::VisitedCell));
        // 4 interior walls minus 3 passages, 8 boundary walls minus 2 exits
        assert_eq!(count_style(&painter, PaintStyle::Wall), 1);
        assert_eq!(count_style(&painter, PaintStyle::WallBlocked), 6);
    }

    #[test]
    fn test_draw_hides_walls_of_holes() {
        let mut grid = Grid::<Square>::new(1, 3);
        grid.invalidate_region(NodeIndex::new(0, 1), NodeIndex::new(0, 1));
        let mut painter = RecordingPainter::default();
        draw(&grid, &mut painter, &DrawParams::default()).unwrap();

        assert_eq!(painter.polys[1].1, PaintStyle::ExcludedCell);
        // 10 connections, minus the hole's top and bottom
        assert_eq!(painter.lines.len(), 8);
    }

    #[test]
    fn test_draw_hex_canvas() {
        let grid = Grid::<Hex>::new(2, 3);
        let mut painter = RecordingPainter::default();
        draw(&grid, &mut painter, &DrawParams::default()).unwrap();

        let (width, height) = painter.size.unwrap();
        let h = 3f64.sqrt() * 20.0;
        assert!((width - 104.0).abs() < 1e-9);
        assert!((height - (h / 2.0 + 2.0 * h + 4.0)).abs() < 1e-9);
        assert!(painter.polys.iter().all(|(vertices, _)| vertices.len() == 6));
    }

    #[test]
    fn test_draw_brick_wall_count() {
        let grid = Grid::<Brick>::new(2, 2);
        let mut painter = RecordingPainter::default();
        draw(&grid, &mut painter, &DrawParams::default()).unwrap();
        assert_eq!(painter.lines.len(), grid.connections().count());
    }
}
