use std::{fmt, str::FromStr};

use crate::error::PaperSizeError;

/// Margin kept free on every side of the page, in inches (about 1cm).
const MARGIN: f64 = 0.39;
/// Pixels per inch of the SVG output.
const PPI: f64 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperFormat {
    A3,
    A4,
    A5,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// A printable page, e.g. `A4` or `A5landscape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperSize {
    pub format: PaperFormat,
    pub orientation: Orientation,
}

impl PaperSize {
    /// Page size in inches, (width, height).
    pub fn inches(&self) -> (f64, f64) {
        let (width, height) = match self.format {
            PaperFormat::A3 => (11.7, 16.5),
            PaperFormat::A4 => (8.3, 11.7),
            PaperFormat::A5 => (5.8, 8.3),
        };
        match self.orientation {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }

    /// Pixel area available for drawing once the margins are taken off, (width, height).
    pub fn area_size(&self) -> (i32, i32) {
        let (width, height) = self.inches();
        (
            ((width - 2.0 * MARGIN) * PPI).floor() as i32,
            ((height - 2.0 * MARGIN) * PPI).floor() as i32,
        )
    }
}

impl FromStr for PaperSize {
    type Err = PaperSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (format, orientation) = match s.char_indices().nth(2) {
            Some((idx, _)) => s.split_at(idx),
            None => (s, ""),
        };
        let format = match format.to_ascii_uppercase().as_str() {
            "A3" => PaperFormat::A3,
            "A4" => PaperFormat::A4,
            "A5" => PaperFormat::A5,
            _ => return Err(PaperSizeError::UnknownFormat(format.to_string())),
        };
        let orientation = match orientation.to_ascii_lowercase().as_str() {
            "" | "p" | "portrait" => Orientation::Portrait,
            "l" | "landscape" => Orientation::Landscape,
            _ => return Err(PaperSizeError::UnknownOrientation(orientation.to_string())),
        };
        Ok(PaperSize {
            format,
            orientation,
        })
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orientation = match self.orientation {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        };
        write!(f, "{:?} {orientation}", self.format)
    }
}
