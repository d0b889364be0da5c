//! Pixel layout of each cell shape.
//!
//! Cell vertices are listed so that edge `k` runs from the `k`-th vertex to the next one,
//! wrapping around at the end.

use super::{DrawParams, Point2D};
use crate::maze::{Brick, EdgeIndex, Hex, NodeIndex, Shape, Square};

pub trait Geometry: Shape {
    /// Size of the grid drawing, excluding stroke padding.
    fn extent(rows: u16, cols: u16, params: &DrawParams) -> (f64, f64);

    /// Center of a cell, excluding stroke padding.
    fn center(node: NodeIndex, params: &DrawParams) -> Point2D;

    /// Vertices of the cell around `center`, ordered by edge number.
    fn vertices(center: Point2D, params: &DrawParams) -> Vec<Point2D>;

    /// Number of (rows, cols) that fit into a `width x height` pixel area, strokes included.
    fn grid_size(width: i32, height: i32, params: &DrawParams) -> (i32, i32);

    /// Full canvas size: the grid plus half a stroke on every side.
    fn canvas_size(rows: u16, cols: u16, params: &DrawParams) -> (f64, f64) {
        let (width, height) = Self::extent(rows, cols, params);
        let stroke = params.stroke_width as f64;
        (width + stroke, height + stroke)
    }

    /// Vertices of a cell on the canvas.
    fn cell_vertices(node: NodeIndex, params: &DrawParams) -> Vec<Point2D> {
        let padding = params.stroke_width as f64 / 2.0;
        let center = Self::center(node, params);
        Self::vertices(Point2D::new(center.x + padding, center.y + padding), params)
    }

    /// End points of the wall drawn for `edge` of `node`.
    fn wall(node: NodeIndex, edge: EdgeIndex, params: &DrawParams) -> (Point2D, Point2D) {
        let vertices = Self::cell_vertices(node, params);
        let from = edge as usize - 1;
        (vertices[from], vertices[(from + 1) % vertices.len()])
    }
}

fn floor_div(numerator: f64, denominator: f64) -> i32 {
    (numerator / denominator).floor() as i32
}

impl Geometry for Square {
    fn extent(rows: u16, cols: u16, params: &DrawParams) -> (f64, f64) {
        (
            (params.cell_width * cols as i32) as f64,
            (params.cell_height * rows as i32) as f64,
        )
    }

    fn center(node: NodeIndex, params: &DrawParams) -> Point2D {
        let (w, h) = (params.cell_width as f64, params.cell_height as f64);
        Point2D::new(w / 2.0 + w * node.col as f64, h / 2.0 + h * node.row as f64)
    }

    fn vertices(c: Point2D, params: &DrawParams) -> Vec<Point2D> {
        let (dx, dy) = (
            params.cell_width as f64 / 2.0,
            params.cell_height as f64 / 2.0,
        );
        vec![
            Point2D::new(c.x - dx, c.y + dy),
            Point2D::new(c.x + dx, c.y + dy),
            Point2D::new(c.x + dx, c.y - dy),
            Point2D::new(c.x - dx, c.y - dy),
        ]
    }

    fn grid_size(width: i32, height: i32, params: &DrawParams) -> (i32, i32) {
        let stroke = params.stroke_width as f64;
        (
            floor_div(height as f64 - stroke, params.cell_height as f64),
            floor_div(width as f64 - stroke, params.cell_width as f64),
        )
    }
}

/// Radius and height of a hexagon whose corner-to-corner width is the cell width.
fn hex_dimensions(params: &DrawParams) -> (f64, f64) {
    let rad = params.cell_width as f64 / 2.0;
    (rad, 3f64.sqrt() * rad)
}

impl Geometry for Hex {
    fn extent(rows: u16, cols: u16, params: &DrawParams) -> (f64, f64) {
        let (rad, h) = hex_dimensions(params);
        (
            rad / 2.0 + 1.5 * rad * cols as f64,
            h / 2.0 + h * rows as f64,
        )
    }

    fn center(node: NodeIndex, params: &DrawParams) -> Point2D {
        let (rad, h) = hex_dimensions(params);
        let y_offset = if node.col % 2 == 0 { h / 2.0 } else { h };
        Point2D::new(
            rad + 1.5 * rad * node.col as f64,
            y_offset + h * node.row as f64,
        )
    }

    fn vertices(c: Point2D, params: &DrawParams) -> Vec<Point2D> {
        let (rad, h) = hex_dimensions(params);
        vec![
            Point2D::new(c.x - rad, c.y),
            Point2D::new(c.x - rad / 2.0, c.y + h / 2.0),
            Point2D::new(c.x + rad / 2.0, c.y + h / 2.0),
            Point2D::new(c.x + rad, c.y),
            Point2D::new(c.x + rad / 2.0, c.y - h / 2.0),
            Point2D::new(c.x - rad / 2.0, c.y - h / 2.0),
        ]
    }

    fn grid_size(width: i32, height: i32, params: &DrawParams) -> (i32, i32) {
        let (rad, h) = hex_dimensions(params);
        let stroke = params.stroke_width as f64;
        (
            floor_div(height as f64 - h / 2.0 - stroke, h),
            floor_div(width as f64 - rad / 2.0 - stroke, 1.5 * rad),
        )
    }
}

impl Geometry for Brick {
    fn extent(rows: u16, cols: u16, params: &DrawParams) -> (f64, f64) {
        let (w, h) = (params.cell_width as f64, params.cell_height as f64);
        (w / 2.0 + w * cols as f64, h * rows as f64)
    }

    fn center(node: NodeIndex, params: &DrawParams) -> Point2D {
        let (w, h) = (params.cell_width as f64, params.cell_height as f64);
        let x_offset = if node.row % 2 == 0 { w / 2.0 } else { w };
        Point2D::new(x_offset + w * node.col as f64, h / 2.0 + h * node.row as f64)
    }

    fn vertices(c: Point2D, params: &DrawParams) -> Vec<Point2D> {
        let (dx, dy) = (
            params.cell_width as f64 / 2.0,
            params.cell_height as f64 / 2.0,
        );
        vec![
            Point2D::new(c.x - dx, c.y + dy),
            Point2D::new(c.x, c.y + dy),
            Point2D::new(c.x + dx, c.y + dy),
            Point2D::new(c.x + dx, c.y - dy),
            Point2D::new(c.x, c.y - dy),
            Point2D::new(c.x - dx, c.y - dy),
        ]
    }

    fn grid_size(width: i32, height: i32, params: &DrawParams) -> (i32, i32) {
        let (w, h) = (params.cell_width as f64, params.cell_height as f64);
        let stroke = params.stroke_width as f64;
        (
            floor_div(height as f64 - stroke, h),
            floor_div(width as f64 - w / 2.0 - stroke, w),
        )
    }
}
