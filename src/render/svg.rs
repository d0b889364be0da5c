use std::io::{self, Write};

use super::{PaintStyle, Painter, Point2D};

/// Writes a drawing as an SVG document.
pub struct SvgPainter<W: Write> {
    out: W,
    stroke_width: i32,
}

impl<W: Write> SvgPainter<W> {
    pub fn new(out: W, stroke_width: i32) -> Self {
        SvgPainter { out, stroke_width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn style(&self, style: PaintStyle) -> String {
        match style {
            PaintStyle::OpenCell => "fill:darkgray;stroke:none".to_string(),
            PaintStyle::VisitedCell | PaintStyle::ExcludedCell => {
                "fill:white;stroke:none".to_string()
            }
            PaintStyle::OnPathCell => "fill:lightgray;stroke:none".to_string(),
            PaintStyle::Wall | PaintStyle::WallBlocked => format!(
                "stroke:black;stroke-width:{};stroke-linecap:round",
                self.stroke_width
            ),
        }
    }
}

/// Formats with at most two decimals and no trailing zeros.
fn number(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

impl<W: Write> Painter for SvgPainter<W> {
    fn begin_draw(&mut self, width: f64, height: f64) -> io::Result<()> {
        writeln!(self.out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            self.out,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" style="background-color:white">"#,
            number(width),
            number(height)
        )
    }

    fn end_draw(&mut self) -> io::Result<()> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, style: PaintStyle) -> io::Result<()> {
        let style = self.style(style);
        writeln!(
            self.out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" style="{style}"/>"#,
            number(from.x),
            number(from.y),
            number(to.x),
            number(to.y)
        )
    }

    fn draw_poly(&mut self, vertices: &[Point2D], style: PaintStyle) -> io::Result<()> {
        let points = vertices
            .iter()
            .map(|p| format!("{},{}", number(p.x), number(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        let style = self.style(style);
        writeln!(
            self.out,
            r#"  <polygon points="{points}" style="{style}"/>"#
        )
    }
}
