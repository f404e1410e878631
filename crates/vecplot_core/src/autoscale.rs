//! Fits axes limits around the arrows drawn on them.
//!
//! Arrows do not contribute to data limits, so after plotting vectors the
//! view usually needs to be fitted explicitly.

use crate::canvas::Axes;
use crate::error::{PlotError, PlotResult};
use crate::render::ArrowEndpoints;
use crate::traits::Renderable;
use nalgebra::{Point2, Point3};

/// Sets cubic (3D arrows) or square (2D arrows) limits that contain every
/// arrow endpoint on `axes`.
///
/// Each axis starts at its minimum endpoint coordinate and spans the
/// largest extent over all axes, so smaller extents are padded on the high
/// side only. Axes without arrows are left unchanged. Mixed 2D and 3D
/// arrows are refused without changing anything.
pub fn autoscale_arrows(axes: &mut Axes) -> PlotResult<()> {
    let mut planar: Vec<Point2<f64>> = Vec::new();
    let mut spatial: Vec<Point3<f64>> = Vec::new();
    for artist in axes.artists() {
        match artist.arrow_endpoints() {
            Some(ArrowEndpoints::Planar(ends)) => planar.extend(ends),
            Some(ArrowEndpoints::Spatial(ends)) => spatial.extend(ends),
            None => {}
        }
    }

    if !planar.is_empty() && !spatial.is_empty() {
        log::warn!("autoscale_arrows: mixing 2D and 3D arrows is not supported");
        return Err(PlotError::MixedArrowDimensions);
    }

    if !spatial.is_empty() {
        let (min_x, max_x) = bounds(spatial.iter().map(|p| p.x));
        let (min_y, max_y) = bounds(spatial.iter().map(|p| p.y));
        let (min_z, max_z) = bounds(spatial.iter().map(|p| p.z));
        let side = (max_x - min_x).max(max_y - min_y).max(max_z - min_z);
        axes.set_xlim(min_x, min_x + side);
        axes.set_ylim(min_y, min_y + side);
        axes.set_zlim(min_z, min_z + side);
        log::debug!("autoscale_arrows: {} 3D endpoints, cube side {side}", spatial.len());
    } else if !planar.is_empty() {
        let (min_x, max_x) = bounds(planar.iter().map(|p| p.x));
        let (min_y, max_y) = bounds(planar.iter().map(|p| p.y));
        let side = (max_x - min_x).max(max_y - min_y);
        axes.set_xlim(min_x, min_x + side);
        axes.set_ylim(min_y, min_y + side);
        log::debug!("autoscale_arrows: {} 2D endpoints, square side {side}", planar.len());
    }
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{planar_path, Figure};
    use crate::color::Color;
    use crate::plot::{plot_vec, VecSettings};
    use crate::vector::Vector;

    #[test]
    fn single_3d_arrow_yields_cube_anchored_at_minimum() {
        let mut figure = Figure::new();
        plot_vec(&mut figure, [2.0, 4.0, 6.0], &VecSettings::default()).expect("vector");
        let axes = figure.gca();
        autoscale_arrows(axes).expect("autoscale should succeed");

        assert_eq!(axes.xlim(), (0.0, 6.0));
        assert_eq!(axes.ylim(), (0.0, 6.0));
        assert_eq!(axes.zlim(), Some((0.0, 6.0)));
    }

    #[test]
    fn planar_arrows_yield_square() {
        let mut figure = Figure::new();
        plot_vec(&mut figure, [3.0, 1.0], &VecSettings::default()).expect("first vector");
        let settings = VecSettings {
            origin: Some(Vector::planar(-1.0, 2.0)),
            color: Color::Blue,
            ..VecSettings::default()
        };
        plot_vec(&mut figure, [0.0, 0.0], &settings).expect("second vector");
        let axes = figure.gca();
        autoscale_arrows(axes).expect("autoscale should succeed");

        assert_eq!(axes.xlim(), (-1.0, 3.0));
        assert_eq!(axes.ylim(), (0.0, 4.0));
        assert_eq!(axes.zlim(), None);
    }

    #[test]
    fn mixed_arrows_are_refused_without_changes() {
        let mut figure = Figure::new();
        plot_vec(&mut figure, [1.0, 1.0, 1.0], &VecSettings::default()).expect("3D vector");
        // The current axes is spatial, so the 2D arrow lands on it too.
        plot_vec(&mut figure, [5.0, 5.0], &VecSettings::default()).expect("2D vector");
        let axes = figure.gca();
        axes.set_xlim(-1.0, 1.0);

        let err = autoscale_arrows(axes).expect_err("mixed arrows should fail");
        assert_eq!(err, PlotError::MixedArrowDimensions);
        assert_eq!(axes.xlim(), (-1.0, 1.0));
        assert_eq!(axes.zlim(), Some((0.0, 1.0)));
    }

    #[test]
    fn axes_without_arrows_are_untouched() {
        let mut figure = Figure::new();
        let axes = figure.gca();
        axes.plot(planar_path(&[-3.0, 2.0], &[0.0, 7.0]), None);
        autoscale_arrows(axes).expect("no arrows is not an error");
        assert_eq!(axes.xlim(), (-3.0, 2.0));
        assert_eq!(axes.ylim(), (0.0, 7.0));
    }

    #[test]
    fn degenerate_arrow_gets_nonsingular_limits() {
        let mut figure = Figure::new();
        plot_vec(&mut figure, [0.0, 0.0, 0.0], &VecSettings::default()).expect("zero vector");
        let axes = figure.gca();
        autoscale_arrows(axes).expect("autoscale should succeed");
        assert_eq!(axes.xlim(), (-0.05, 0.05));
        assert_eq!(axes.zlim(), Some((-0.05, 0.05)));
    }
}
