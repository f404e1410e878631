//! 3D-to-2D projection for spatial axes.
//!
//! The matrix maps data coordinates to normalized screen coordinates in
//! three steps: the axes' limits box is scaled onto the unit cube, the cube
//! is viewed from an eye orbiting its centre, and a perspective divide
//! collapses depth.

use nalgebra::{Matrix4, Point3, Vector3, Vector4};
use serde::{Deserialize, Serialize};

const EYE_DISTANCE: f64 = 10.0;

/// Viewing angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    pub elevation: f64,
    pub azimuth: f64,
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self {
            elevation: 30.0,
            azimuth: -60.0,
        }
    }
}

/// Axis-aligned limits of a spatial axes, as `(min, max)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits3 {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    matrix: Matrix4<f64>,
}

impl Projection {
    pub fn new(limits: &Limits3, view: ViewAngles) -> Self {
        let world = world_transformation(limits);
        let elevation = view.elevation.to_radians();
        let azimuth = view.azimuth.to_radians();

        let center = Point3::new(0.5, 0.5, 0.5);
        let eye = center
            + Vector3::new(
                azimuth.cos() * elevation.cos(),
                azimuth.sin() * elevation.cos(),
                elevation.sin(),
            ) * EYE_DISTANCE;
        let up = if elevation.abs() > std::f64::consts::FRAC_PI_2 {
            Vector3::new(0.0, 0.0, -1.0)
        } else {
            Vector3::new(0.0, 0.0, 1.0)
        };

        let view_matrix = view_transformation(&eye, &center, &up);
        let perspective = perspective_transformation(-EYE_DISTANCE, EYE_DISTANCE);
        Self {
            matrix: perspective * view_matrix * world,
        }
    }

    /// Projects a data point; returns screen `(x, y)` and a depth value.
    pub fn project(&self, point: &Point3<f64>) -> (f64, f64, f64) {
        let v = self.matrix * Vector4::new(point.x, point.y, point.z, 1.0);
        let w = v.w;
        (v.x / w, v.y / w, v.z / w)
    }
}

fn world_transformation(limits: &Limits3) -> Matrix4<f64> {
    let (xmin, xmax) = limits.x;
    let (ymin, ymax) = limits.y;
    let (zmin, zmax) = limits.z;
    let dx = xmax - xmin;
    let dy = ymax - ymin;
    let dz = zmax - zmin;
    #[rustfmt::skip]
    let m = Matrix4::new(
        1.0 / dx, 0.0, 0.0, -xmin / dx,
        0.0, 1.0 / dy, 0.0, -ymin / dy,
        0.0, 0.0, 1.0 / dz, -zmin / dz,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

fn view_transformation(eye: &Point3<f64>, center: &Point3<f64>, up: &Vector3<f64>) -> Matrix4<f64> {
    let n = (eye - center).normalize();
    let u = up.cross(&n).normalize();
    let v = n.cross(&u);
    #[rustfmt::skip]
    let rotation = Matrix4::new(
        u.x, u.y, u.z, 0.0,
        v.x, v.y, v.z, 0.0,
        n.x, n.y, n.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    let translation = Matrix4::new_translation(&-eye.coords);
    rotation * translation
}

fn perspective_transformation(z_front: f64, z_back: f64) -> Matrix4<f64> {
    let a = (z_front + z_back) / (z_front - z_back);
    let b = -2.0 * (z_front * z_back) / (z_front - z_back);
    #[rustfmt::skip]
    let m = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, a, b,
        0.0, 0.0, -1.0, 0.0,
    );
    m
}
