//! Static wireframe geometry: vertices, edges between them, and colors.
//!
//! A model is built once and shared by every entity that draws it; only the
//! per-instance transform varies at render time.

use crate::vector::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MODEL_COLOR: u32 = 0x00ff00;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("edge {edge} references vertex {index}, model has {vertex_count} vertices")]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    Body,
    Accent,
    Highlight,
}

/// Per-edge color override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeColor {
    Rgb(u32),
    Slot(ColorSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<EdgeColor>,
}

/// Named color slots for multi-color models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default)]
    pub body: Option<u32>,
    #[serde(default)]
    pub accent: Option<u32>,
    #[serde(default)]
    pub highlight: Option<u32>,
}

impl ColorConfig {
    pub fn slot(&self, slot: ColorSlot) -> Option<u32> {
        match slot {
            ColorSlot::Body => self.body,
            ColorSlot::Accent => self.accent,
            ColorSlot::Highlight => self.highlight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeModel {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<Edge>,
    #[serde(default = "default_model_color")]
    pub color: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorConfig>,
}

fn default_model_color() -> u32 {
    DEFAULT_MODEL_COLOR
}

impl WireframeModel {
    pub fn new(vertices: Vec<Vec3>, edges: Vec<Edge>, color: u32) -> Result<Self, ModelError> {
        let model = Self {
            vertices,
            edges,
            color,
            color_mode: None,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn with_color_mode(mut self, color_mode: ColorConfig) -> Self {
        self.color_mode = Some(color_mode);
        self
    }

    /// Checks that every edge indexes an existing vertex and that all
    /// vertices are finite. Models deserialized from external data should be
    /// validated before use.
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(idx) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::NonFiniteVertex(idx));
        }
        let vertex_count = self.vertices.len();
        for (edge_idx, edge) in self.edges.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index >= vertex_count {
                    return Err(ModelError::EdgeOutOfRange {
                        edge: edge_idx,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Effective color of an edge: its literal override, else the referenced
    /// slot, else the model's base color.
    pub fn edge_color(&self, edge: &Edge) -> u32 {
        match edge.color {
            Some(EdgeColor::Rgb(rgb)) => rgb,
            Some(EdgeColor::Slot(slot)) => self
                .color_mode
                .and_then(|mode| mode.slot(slot))
                .unwrap_or(self.color),
            None => self.color,
        }
    }

    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(Vec3, Vec3)> {
        let start = *self.vertices.get(edge.start)?;
        let end = *self.vertices.get(edge.end)?;
        Some((start, end))
    }

    /// Largest distance from the model origin to any vertex.
    pub fn bounds_radius(&self) -> f32 {
        self.vertices.iter().map(|v| v.length()).fold(0.0, f32::max)
    }
}

pub fn create_edges(pairs: &[[usize; 2]], color: Option<EdgeColor>) -> Vec<Edge> {
    pairs
        .iter()
        .map(|&[start, end]| Edge { start, end, color })
        .collect()
}

pub fn create_model(
    vertices: Vec<Vec3>,
    edge_pairs: &[[usize; 2]],
    color: Option<u32>,
) -> Result<WireframeModel, ModelError> {
    WireframeModel::new(
        vertices,
        create_edges(edge_pairs, None),
        color.unwrap_or(DEFAULT_MODEL_COLOR),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
        ]
    }

    #[test]
    fn create_edges_applies_uniform_override() {
        let red = Some(EdgeColor::Rgb(0xff0000));
        let edges = create_edges(&[[0, 1], [1, 2]], red);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1].start, 1);
        assert_eq!(edges[1].end, 2);
        assert!(edges.iter().all(|e| e.color == red));

        let plain = create_edges(&[[2, 0]], None);
        assert_eq!(plain[0].color, None);
    }

    #[test]
    fn create_model_defaults_to_green() {
        let model = create_model(triangle(), &[[0, 1], [1, 2], [2, 0]], None).unwrap();
        assert_eq!(model.color, DEFAULT_MODEL_COLOR);
        assert_eq!(model.edges.len(), 3);
        assert!(model.color_mode.is_none());
    }

    #[test]
    fn create_model_rejects_dangling_edge() {
        let err = create_model(triangle(), &[[0, 1], [1, 3]], Some(0xffffff)).unwrap_err();
        assert_eq!(
            err,
            ModelError::EdgeOutOfRange {
                edge: 1,
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        let mut vertices = triangle();
        vertices[2].y = f32::NAN;
        let err = create_model(vertices, &[[0, 1]], None).unwrap_err();
        assert_eq!(err, ModelError::NonFiniteVertex(2));
    }

    #[test]
    fn edge_color_resolution_order() {
        let mut model = create_model(triangle(), &[[0, 1], [1, 2], [2, 0]], Some(0x112233))
            .unwrap()
            .with_color_mode(ColorConfig {
                body: Some(0xaa0000),
                accent: None,
                highlight: Some(0x0000aa),
            });
        model.edges[0].color = Some(EdgeColor::Rgb(0x00ff00));
        model.edges[1].color = Some(EdgeColor::Slot(ColorSlot::Highlight));
        model.edges[2].color = Some(EdgeColor::Slot(ColorSlot::Accent));

        assert_eq!(model.edge_color(&model.edges[0]), 0x00ff00);
        assert_eq!(model.edge_color(&model.edges[1]), 0x0000aa);
        // Unset slot falls back to the base color.
        assert_eq!(model.edge_color(&model.edges[2]), 0x112233);

        let plain = Edge {
            start: 0,
            end: 1,
            color: None,
        };
        assert_eq!(model.edge_color(&plain), 0x112233);
    }

    #[test]
    fn bounds_radius_is_farthest_vertex() {
        let model = create_model(
            vec![Vec3::new(3.0, 4.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)],
            &[[0, 1]],
            None,
        )
        .unwrap();
        assert_eq!(model.bounds_radius(), 5.0);
    }

    #[test]
    fn deserialized_model_is_checked_by_validate() {
        let json = r#"{
            "vertices": [{"x": 0, "y": 0, "z": 0}, {"x": 0, "y": 5, "z": 0}],
            "edges": [
                {"start": 0, "end": 1, "color": {"slot": "accent"}},
                {"start": 1, "end": 2}
            ]
        }"#;
        let model: WireframeModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.color, DEFAULT_MODEL_COLOR);
        assert_eq!(
            model.edges[0].color,
            Some(EdgeColor::Slot(ColorSlot::Accent))
        );
        assert!(matches!(
            model.validate(),
            Err(ModelError::EdgeOutOfRange {
                edge: 1,
                index: 2,
                ..
            })
        ));
    }
}
