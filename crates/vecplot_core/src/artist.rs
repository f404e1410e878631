//! Artifacts owned by an axes.

use crate::color::Color;
use crate::render::{ArrowEndpoints, ArrowStyle, DrawCommand, RenderContext};
use crate::traits::Renderable;
use nalgebra::{Point2, Point3};
use std::cmp::Ordering;

/// Maximum number of surface patches drawn along each grid direction.
const SURFACE_PATCH_COUNT: usize = 50;

/// An arrow living in the plane of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow2D {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
    pub color: Color,
    pub style: ArrowStyle,
}

impl Renderable for Arrow2D {
    fn render(&self, _ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Arrow {
            start: [self.start.x, self.start.y],
            end: [self.end.x, self.end.y],
            color: self.color,
            style: self.style,
        });
    }

    fn arrow_endpoints(&self) -> Option<ArrowEndpoints> {
        Some(ArrowEndpoints::Planar([self.start, self.end]))
    }
}

/// An arrow with 3D endpoints, projected onto the canvas at every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow3D {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    pub color: Color,
    pub style: ArrowStyle,
}

impl Renderable for Arrow3D {
    fn render(&self, ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        let (x0, y0, _) = ctx.project(&self.start);
        let (x1, y1, _) = ctx.project(&self.end);
        out.push(DrawCommand::Arrow {
            start: [x0, y0],
            end: [x1, y1],
            color: self.color,
            style: self.style,
        });
    }

    fn arrow_endpoints(&self) -> Option<ArrowEndpoints> {
        Some(ArrowEndpoints::Spatial([self.start, self.end]))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    Planar(Vec<Point2<f64>>),
    Spatial(Vec<Point3<f64>>),
}

/// A sampled polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub path: Path,
    pub color: Color,
}

impl Renderable for Line {
    fn render(&self, ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        let points = match &self.path {
            Path::Planar(points) => points.iter().map(|p| [p.x, p.y]).collect(),
            Path::Spatial(points) => points
                .iter()
                .map(|p| {
                    let (x, y, _) = ctx.project(p);
                    [x, y]
                })
                .collect(),
        };
        out.push(DrawCommand::Polyline {
            points,
            color: self.color,
        });
    }
}

/// A translucent surface sampled on a row-major `rows x cols` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub rows: usize,
    pub cols: usize,
    pub points: Vec<Point3<f64>>,
    pub color: Color,
    pub alpha: f64,
}

impl Surface {
    pub fn at(&self, row: usize, col: usize) -> &Point3<f64> {
        &self.points[row * self.cols + col]
    }

    fn patch_indices(count: usize) -> Vec<usize> {
        if count < 2 {
            return Vec::new();
        }
        let stride = count.div_ceil(SURFACE_PATCH_COUNT).max(1);
        let mut indices: Vec<usize> = (0..count - 1).step_by(stride).collect();
        indices.push(count - 1);
        indices
    }
}

impl Renderable for Surface {
    fn render(&self, ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        let row_indices = Self::patch_indices(self.rows);
        let col_indices = Self::patch_indices(self.cols);

        let mut patches: Vec<(f64, Vec<[f64; 2]>)> = Vec::new();
        for rows in row_indices.windows(2) {
            for cols in col_indices.windows(2) {
                let corners = [
                    self.at(rows[0], cols[0]),
                    self.at(rows[0], cols[1]),
                    self.at(rows[1], cols[1]),
                    self.at(rows[1], cols[0]),
                ];
                let mut depth = 0.0;
                let mut points = Vec::with_capacity(corners.len());
                for corner in corners {
                    let (x, y, z) = ctx.project(corner);
                    depth += z;
                    points.push([x, y]);
                }
                patches.push((depth / corners.len() as f64, points));
            }
        }

        // Painter's order: farthest first.
        patches.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        out.extend(patches.into_iter().map(|(_, points)| DrawCommand::Polygon {
            points,
            color: self.color,
            alpha: self.alpha,
        }));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Arrow2D(Arrow2D),
    Arrow3D(Arrow3D),
    Line(Line),
    Surface(Surface),
}

impl Renderable for Artist {
    fn render(&self, ctx: &RenderContext, out: &mut Vec<DrawCommand>) {
        match self {
            Artist::Arrow2D(arrow) => arrow.render(ctx, out),
            Artist::Arrow3D(arrow) => arrow.render(ctx, out),
            Artist::Line(line) => line.render(ctx, out),
            Artist::Surface(surface) => surface.render(ctx, out),
        }
    }

    fn arrow_endpoints(&self) -> Option<ArrowEndpoints> {
        match self {
            Artist::Arrow2D(arrow) => arrow.arrow_endpoints(),
            Artist::Arrow3D(arrow) => arrow.arrow_endpoints(),
            Artist::Line(line) => line.arrow_endpoints(),
            Artist::Surface(surface) => surface.arrow_endpoints(),
        }
    }
}

impl From<Arrow2D> for Artist {
    fn from(value: Arrow2D) -> Self {
        Artist::Arrow2D(value)
    }
}

impl From<Arrow3D> for Artist {
    fn from(value: Arrow3D) -> Self {
        Artist::Arrow3D(value)
    }
}
