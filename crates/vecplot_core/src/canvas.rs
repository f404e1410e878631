//! Retained-mode canvas: a figure holding axes, each axes holding artists.
//!
//! Nothing here is synchronized. A `Figure` is meant to be driven from a
//! single call sequence.

use crate::artist::{Artist, Line, Path, Surface};
use crate::color::{Color, ColorCycler, LINE_PALETTE};
use crate::projection::{Limits3, Projection, ViewAngles};
use crate::render::{Frame, RenderContext};
use crate::traits::Renderable;
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

const NONSINGULAR_EXPANDER: f64 = 0.05;
const NONSINGULAR_TINY: f64 = 1e-15;
const DEFAULT_LIMITS: (f64, f64) = (0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxesKind {
    Planar,
    Spatial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    #[default]
    Auto,
    Equal,
}

/// Running min/max over the coordinates of plotted data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct DataLimits {
    x: Option<(f64, f64)>,
    y: Option<(f64, f64)>,
    z: Option<(f64, f64)>,
}

fn extend(range: &mut Option<(f64, f64)>, value: f64) {
    if !value.is_finite() {
        return;
    }
    *range = Some(match *range {
        Some((lo, hi)) => (lo.min(value), hi.max(value)),
        None => (value, value),
    });
}

/// Widens zero-width intervals so a projection over them stays finite.
pub fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
    let max_abs = lo.abs().max(hi.abs());
    if max_abs < NONSINGULAR_TINY {
        return (-NONSINGULAR_EXPANDER, NONSINGULAR_EXPANDER);
    }
    if hi - lo <= max_abs * NONSINGULAR_TINY {
        if lo == 0.0 && hi == 0.0 {
            return (-NONSINGULAR_EXPANDER, NONSINGULAR_EXPANDER);
        }
        return (
            lo - NONSINGULAR_EXPANDER * lo.abs(),
            hi + NONSINGULAR_EXPANDER * hi.abs(),
        );
    }
    (lo, hi)
}

#[derive(Debug, Clone)]
pub struct Axes {
    kind: AxesKind,
    aspect: Aspect,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
    zlim: Option<(f64, f64)>,
    data_limits: DataLimits,
    view: ViewAngles,
    artists: Vec<Artist>,
    line_colors: ColorCycler,
}

impl Axes {
    pub fn new(kind: AxesKind) -> Self {
        Self {
            kind,
            aspect: Aspect::Auto,
            xlim: None,
            ylim: None,
            zlim: None,
            data_limits: DataLimits::default(),
            view: ViewAngles::default(),
            artists: Vec::new(),
            line_colors: ColorCycler::new(&LINE_PALETTE),
        }
    }

    pub fn kind(&self) -> AxesKind {
        self.kind
    }

    pub fn is_spatial(&self) -> bool {
        self.kind == AxesKind::Spatial
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    pub fn view(&self) -> ViewAngles {
        self.view
    }

    pub fn view_init(&mut self, elevation: f64, azimuth: f64) {
        self.view = ViewAngles {
            elevation,
            azimuth,
        };
    }

    pub fn set_xlim(&mut self, lo: f64, hi: f64) {
        self.xlim = Some(nonsingular(lo, hi));
    }

    pub fn set_ylim(&mut self, lo: f64, hi: f64) {
        self.ylim = Some(nonsingular(lo, hi));
    }

    /// Ignored on planar axes.
    pub fn set_zlim(&mut self, lo: f64, hi: f64) {
        if self.is_spatial() {
            self.zlim = Some(nonsingular(lo, hi));
        }
    }

    /// Explicit limits if set, otherwise the data extent, otherwise `(0, 1)`.
    pub fn xlim(&self) -> (f64, f64) {
        resolve_limits(self.xlim, self.data_limits.x)
    }

    pub fn ylim(&self) -> (f64, f64) {
        resolve_limits(self.ylim, self.data_limits.y)
    }

    pub fn zlim(&self) -> Option<(f64, f64)> {
        self.is_spatial()
            .then(|| resolve_limits(self.zlim, self.data_limits.z))
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Appends an artist without touching the data limits.
    pub fn add_artist(&mut self, artist: impl Into<Artist>) {
        self.artists.push(artist.into());
    }

    /// Appends a polyline and grows the data limits to cover it.
    /// Without a color, the next entry of the axes' line cycle is used.
    pub fn plot(&mut self, path: Path, color: Option<Color>) {
        match &path {
            Path::Planar(points) => {
                for p in points {
                    extend(&mut self.data_limits.x, p.x);
                    extend(&mut self.data_limits.y, p.y);
                }
            }
            Path::Spatial(points) => self.extend_spatial(points),
        }
        let color = color.unwrap_or_else(|| self.line_colors.next_color());
        self.artists.push(Artist::Line(Line { path, color }));
    }

    pub fn plot_surface(&mut self, surface: Surface) {
        self.extend_spatial(&surface.points);
        self.artists.push(Artist::Surface(surface));
    }

    fn extend_spatial(&mut self, points: &[Point3<f64>]) {
        for p in points {
            extend(&mut self.data_limits.x, p.x);
            extend(&mut self.data_limits.y, p.y);
            extend(&mut self.data_limits.z, p.z);
        }
    }

    /// Context for drawing with the current limits and view.
    pub fn render_context(&self) -> RenderContext {
        match self.zlim() {
            Some(z) => {
                let limits = Limits3 {
                    x: self.xlim(),
                    y: self.ylim(),
                    z,
                };
                RenderContext::spatial(Projection::new(&limits, self.view))
            }
            None => RenderContext::planar(),
        }
    }

    /// Renders every artist in insertion order.
    pub fn draw(&self) -> Frame {
        let ctx = self.render_context();
        let mut commands = Vec::new();
        for artist in &self.artists {
            artist.render(&ctx, &mut commands);
        }
        Frame {
            kind: self.kind,
            aspect: self.aspect,
            xlim: self.xlim(),
            ylim: self.ylim(),
            zlim: self.zlim(),
            commands,
        }
    }
}

fn resolve_limits(explicit: Option<(f64, f64)>, data: Option<(f64, f64)>) -> (f64, f64) {
    match (explicit, data) {
        (Some(limits), _) => limits,
        (None, Some((lo, hi))) => nonsingular(lo, hi),
        (None, None) => DEFAULT_LIMITS,
    }
}

/// A collection of axes with one of them current.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    axes: Vec<Axes>,
    current: Option<usize>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current axes, creating a planar one if the figure is empty.
    pub fn gca(&mut self) -> &mut Axes {
        match self.current {
            Some(index) => &mut self.axes[index],
            None => self.push_axes(AxesKind::Planar),
        }
    }

    /// The current axes if it is spatial; otherwise a new spatial axes
    /// that becomes current.
    pub fn gca_3d(&mut self) -> &mut Axes {
        match self.current {
            Some(index) if self.axes[index].is_spatial() => &mut self.axes[index],
            _ => self.push_axes(AxesKind::Spatial),
        }
    }

    fn push_axes(&mut self, kind: AxesKind) -> &mut Axes {
        log::debug!("creating {kind:?} axes");
        self.axes.push(Axes::new(kind));
        let index = self.axes.len() - 1;
        self.current = Some(index);
        &mut self.axes[index]
    }

    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn current_axes(&self) -> Option<&Axes> {
        self.current.map(|index| &self.axes[index])
    }

    /// Drops every axes and the artists they own.
    pub fn clear(&mut self) {
        self.axes.clear();
        self.current = None;
    }

    pub fn draw(&self) -> Vec<Frame> {
        self.axes.iter().map(Axes::draw).collect()
    }
}

/// Convenience for building planar paths from coordinate columns.
pub fn planar_path(xs: &[f64], ys: &[f64]) -> Path {
    Path::Planar(
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| Point2::new(x, y))
            .collect(),
    )
}

/// Convenience for building spatial paths from coordinate columns.
pub fn spatial_path(xs: &[f64], ys: &[f64], zs: &[f64]) -> Path {
    Path::Spatial(
        xs.iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
            .collect(),
    )
}
