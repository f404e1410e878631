//! Draw-time types: the context handed to artists, the commands they emit,
//! and the frame an axes renders to.

use crate::canvas::{Aspect, AxesKind};
use crate::color::Color;
use crate::projection::Projection;
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Everything an artist needs to place itself on screen for one draw.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    projection: Option<Projection>,
}

impl RenderContext {
    /// Context for a planar axes; coordinates pass through untouched.
    pub fn planar() -> Self {
        Self { projection: None }
    }

    pub fn spatial(projection: Projection) -> Self {
        Self {
            projection: Some(projection),
        }
    }

    /// Maps a 3D point to screen `(x, y)` plus depth.
    /// A planar context drops `z` and reports it as depth.
    pub fn project(&self, point: &Point3<f64>) -> (f64, f64, f64) {
        match &self.projection {
            Some(projection) => projection.project(point),
            None => (point.x, point.y, point.z),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowHead {
    /// `-|>`
    FilledTriangle,
    /// `->`
    Open,
    /// `-`
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowStyle {
    /// Head size in points.
    pub mutation_scale: f64,
    pub line_width: f64,
    pub head: ArrowHead,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            mutation_scale: 20.0,
            line_width: 1.0,
            head: ArrowHead::FilledTriangle,
        }
    }
}

/// Endpoints of an arrow in its native dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowEndpoints {
    Planar([Point2<f64>; 2]),
    Spatial([Point3<f64>; 2]),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Arrow {
        start: [f64; 2],
        end: [f64; 2],
        color: Color,
        style: ArrowStyle,
    },
    Polyline {
        points: Vec<[f64; 2]>,
        color: Color,
    },
    Polygon {
        points: Vec<[f64; 2]>,
        color: Color,
        alpha: f64,
    },
}

/// One rendered axes: resolved limits plus the commands to paint, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub kind: AxesKind,
    pub aspect: Aspect,
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub zlim: Option<(f64, f64)>,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn arrows(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Arrow { .. }))
    }
}
