//! Line-drawing boundary. The host renderer implements [`LineSink`]; the
//! engine only ever hands it finished screen-space segments.

use wire_geom::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub alpha: f32,
}

pub trait LineSink {
    fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint, style: LineStyle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnLine {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
    pub style: LineStyle,
}

/// Sink that records every line, for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct LineList {
    lines: Vec<DrawnLine>,
}

impl LineList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DrawnLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl LineSink for LineList {
    fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint, style: LineStyle) {
        self.lines.push(DrawnLine { start, end, style });
    }
}
