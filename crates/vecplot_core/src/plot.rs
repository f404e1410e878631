//! Vector, line and plane renderers.
//!
//! Every renderer converts its inputs, validates them, and only then picks
//! the 2D or 3D axes and draws. On error the figure is left untouched.

use crate::artist::{Arrow2D, Arrow3D, Surface};
use crate::canvas::{planar_path, spatial_path, Aspect, Figure};
use crate::color::{palette_color, Color, ColorCycler, VECTOR_PALETTE};
use crate::error::{PlotError, PlotResult};
use crate::render::ArrowStyle;
use crate::traits::IntoVector;
use crate::vector::{linspace, Vector};
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

const DEFAULT_SAMPLES: usize = 100;
const DEFAULT_PLANE_ALPHA: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, name: &str) -> PlotResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PlotError::InvalidSettings(format!(
                "{name} bounds must be finite"
            )));
        }
        Ok(())
    }

    pub fn samples(&self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(-5.0, 5.0)
    }
}

fn validate_alpha(alpha: f64) -> PlotResult<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(PlotError::InvalidSettings(format!(
            "alpha must lie in [0, 1], got {alpha}"
        )));
    }
    Ok(())
}

fn validate_samples(samples: usize) -> PlotResult<()> {
    if samples < 2 {
        return Err(PlotError::InvalidSettings(
            "at least 2 samples are required".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VecSettings {
    /// Tail of the arrow; the zero vector when unset.
    pub origin: Option<Vector>,
    pub color: Color,
    pub style: ArrowStyle,
}

impl Default for VecSettings {
    fn default() -> Self {
        Self {
            origin: None,
            color: Color::Black,
            style: ArrowStyle::default(),
        }
    }
}

impl VecSettings {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSettings {
    pub color: Option<Color>,
    /// Range swept by the x coordinate.
    pub x_range: AxisRange,
    pub samples: usize,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            color: None,
            x_range: AxisRange::default(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneSettings {
    pub color: Option<Color>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub samples: usize,
    pub alpha: f64,
}

impl Default for PlaneSettings {
    fn default() -> Self {
        Self {
            color: None,
            x_range: AxisRange::default(),
            y_range: AxisRange::default(),
            samples: DEFAULT_SAMPLES,
            alpha: DEFAULT_PLANE_ALPHA,
        }
    }
}

/// Draws an arrow from the origin in `settings` to the point `vector`.
///
/// The head sits at `vector` itself, not at `origin + vector`.
pub fn plot_vec(figure: &mut Figure, vector: impl IntoVector, settings: &VecSettings) -> PlotResult<()> {
    let vector = vector.into_vector()?;
    let origin = match settings.origin {
        Some(origin) => {
            let origin = origin.into_vector()?;
            vector.ensure_same_dim(&origin)?;
            origin
        }
        None => Vector::zero(vector.dim())?,
    };

    match (origin, vector) {
        (Vector::Spatial(start), Vector::Spatial(end)) => {
            let axes = figure.gca_3d();
            axes.set_aspect(Aspect::Equal);
            axes.add_artist(Arrow3D {
                start: Point3::from(start),
                end: Point3::from(end),
                color: settings.color,
                style: settings.style,
            });
        }
        (Vector::Planar(start), Vector::Planar(end)) => {
            let axes = figure.gca();
            axes.set_aspect(Aspect::Equal);
            axes.add_artist(Arrow2D {
                start: Point2::from(start),
                end: Point2::from(end),
                color: settings.color,
                style: settings.style,
            });
        }
        _ => unreachable!("dimensions checked above"),
    }
    log::debug!(
        "plot_vec: {:?} -> {:?} ({})",
        origin.to_vec(),
        vector.to_vec(),
        settings.color
    );
    Ok(())
}

/// Plots each vector from the zero origin, coloring by position in
/// `VECTOR_PALETTE`. All inputs are converted before anything is drawn.
pub fn plot_vecs<V: IntoVector>(figure: &mut Figure, vectors: impl IntoIterator<Item = V>) -> PlotResult<()> {
    let vectors = vectors
        .into_iter()
        .map(IntoVector::into_vector)
        .collect::<PlotResult<Vec<_>>>()?;
    for (index, vector) in vectors.into_iter().enumerate() {
        let settings = VecSettings::with_color(palette_color(&VECTOR_PALETTE, index));
        plot_vec(figure, vector, &settings)?;
    }
    Ok(())
}

/// Plots the line `point + s * direction`, sampled so that its x coordinate
/// sweeps `settings.x_range`.
///
/// The direction's x component must be nonzero.
pub fn plot_line(
    figure: &mut Figure,
    direction: impl IntoVector,
    point: impl IntoVector,
    settings: &LineSettings,
) -> PlotResult<()> {
    let direction = direction.into_vector()?;
    let point = point.into_vector()?;
    direction.ensure_same_dim(&point)?;
    settings.x_range.validate("x_range")?;
    validate_samples(settings.samples)?;
    if direction.x() == 0.0 {
        return Err(PlotError::DegenerateInput {
            what: "x component of the line direction",
        });
    }

    let params: Vec<f64> = settings
        .x_range
        .samples(settings.samples)
        .into_iter()
        .map(|x| (x - point.x()) / direction.x())
        .collect();
    let xs: Vec<f64> = params.iter().map(|s| point.x() + direction.x() * s).collect();
    let ys: Vec<f64> = params.iter().map(|s| point.y() + direction.y() * s).collect();

    match (direction, point) {
        (Vector::Spatial(dir), Vector::Spatial(at)) => {
            let zs: Vec<f64> = params.iter().map(|s| at.z + dir.z * s).collect();
            let axes = figure.gca_3d();
            axes.set_aspect(Aspect::Equal);
            axes.plot(spatial_path(&xs, &ys, &zs), settings.color);
        }
        (Vector::Planar(_), Vector::Planar(_)) => {
            let axes = figure.gca();
            axes.set_aspect(Aspect::Equal);
            axes.plot(planar_path(&xs, &ys), settings.color);
        }
        _ => unreachable!("dimensions checked above"),
    }
    log::debug!(
        "plot_line: direction {:?} through {:?}",
        direction.to_vec(),
        point.to_vec()
    );
    Ok(())
}

/// Plots `normal . (x, y, z) = offset` as a translucent surface, or
/// `normal . (x, y) = offset` as a line when `normal` is 2D.
///
/// A 3D plane without a color takes the next color from `colors`; the
/// cycler is untouched for 2D normals and for rejected input.
pub fn plot_plane(
    figure: &mut Figure,
    colors: &mut ColorCycler,
    normal: impl IntoVector,
    offset: f64,
    settings: &PlaneSettings,
) -> PlotResult<()> {
    let normal = normal.into_vector()?;
    if !offset.is_finite() {
        return Err(PlotError::InvalidSettings(format!(
            "plane offset must be finite, got {offset}"
        )));
    }
    settings.x_range.validate("x_range")?;
    validate_samples(settings.samples)?;
    if normal.last() == 0.0 {
        return Err(PlotError::DegenerateInput {
            what: "last component of the plane normal",
        });
    }

    let xs = settings.x_range.samples(settings.samples);
    match normal {
        Vector::Spatial(n) => {
            settings.y_range.validate("y_range")?;
            validate_alpha(settings.alpha)?;
            let ys = settings.y_range.samples(settings.samples);
            let color = settings.color.unwrap_or_else(|| colors.next_color());
            let points = ys
                .iter()
                .flat_map(|&y| {
                    xs.iter()
                        .map(move |&x| Point3::new(x, y, (offset - n.x * x - n.y * y) / n.z))
                })
                .collect();
            let axes = figure.gca_3d();
            axes.set_aspect(Aspect::Equal);
            axes.plot_surface(Surface {
                rows: ys.len(),
                cols: xs.len(),
                points,
                color,
                alpha: settings.alpha,
            });
            log::debug!("plot_plane: normal {:?}, offset {offset}, color {color}", normal.to_vec());
        }
        Vector::Planar(n) => {
            let ys: Vec<f64> = xs.iter().map(|x| (offset - n.x * x) / n.y).collect();
            let axes = figure.gca();
            axes.set_aspect(Aspect::Equal);
            axes.plot(planar_path(&xs, &ys), settings.color);
            log::debug!("plot_plane: 2D normal {:?}, offset {offset}", normal.to_vec());
        }
    }
    Ok(())
}
