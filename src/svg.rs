//! Minimal SVG document writer for wall segments.

use std::fmt::{self, Write};

use glam::IVec2;

use crate::constants::WALL_STYLE;

/// Accumulates an SVG document made of line segments.
///
/// Every element is written on its own line.
#[derive(Debug, Default)]
pub struct SvgWriter {
    out: String,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the document with the given canvas size.
    pub fn head(&mut self, width: i32, height: i32) -> fmt::Result {
        writeln!(
            self.out,
            r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
        )
    }

    /// A single wall segment.
    pub fn line(&mut self, from: IVec2, to: IVec2) -> fmt::Result {
        writeln!(
            self.out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" style="{WALL_STYLE}" />"#,
            from.x, from.y, to.x, to.y
        )
    }

    /// Two wall segments meeting at `turn`.
    pub fn corner(&mut self, start: IVec2, turn: IVec2, end: IVec2) -> fmt::Result {
        self.line(start, turn)?;
        self.line(turn, end)
    }

    /// Closes the document.
    pub fn end(&mut self) -> fmt::Result {
        writeln!(self.out, "</svg>")
    }

    /// Returns the markup written so far.
    pub fn finish(self) -> String {
        self.out
    }
}
