use crate::sink::LineStyle;
use serde::{Deserialize, Serialize};
use wire_core::color;
use wire_geom::Viewport;

/// Vector display style, chosen by the host and passed to every renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorMode {
    Monochrome,
    #[default]
    Color,
}

impl VectorMode {
    pub fn tint(self, color: u32) -> u32 {
        match self {
            VectorMode::Monochrome => color::PHOSPHOR,
            VectorMode::Color => color,
        }
    }
}

/// Per-frame values every renderer needs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderContext {
    pub viewport: Viewport,
    pub mode: VectorMode,
}

impl RenderContext {
    pub fn new(viewport: Viewport, mode: VectorMode) -> Self {
        Self { viewport, mode }
    }

    pub(crate) fn style(&self, width: f32, color: u32, alpha: f32) -> LineStyle {
        LineStyle {
            width,
            color: self.mode.tint(color),
            alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monochrome_overrides_color() {
        assert_eq!(VectorMode::Monochrome.tint(color::ENEMY), color::PHOSPHOR);
        assert_eq!(VectorMode::Color.tint(color::ENEMY), color::ENEMY);
        assert_eq!(VectorMode::default(), VectorMode::Color);
    }

    #[test]
    fn mode_parses_from_config_names() {
        let mode: VectorMode = serde_json::from_str("\"monochrome\"").unwrap();
        assert_eq!(mode, VectorMode::Monochrome);
    }
}
