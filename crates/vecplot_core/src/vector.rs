//! Vector inputs accepted by the renderers.
//!
//! Inputs are converted to `Vector` once at the call boundary; past that
//! point every code path knows statically whether it is working in 2D or 3D.

use crate::error::{PlotError, PlotResult};
use crate::traits::IntoVector;
use nalgebra::{Vector2, Vector3};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dim", content = "coords", rename_all = "snake_case")]
pub enum Vector {
    Planar(Vector2<f64>),
    Spatial(Vector3<f64>),
}

impl Vector {
    pub fn planar(x: f64, y: f64) -> Self {
        Vector::Planar(Vector2::new(x, y))
    }

    pub fn spatial(x: f64, y: f64, z: f64) -> Self {
        Vector::Spatial(Vector3::new(x, y, z))
    }

    /// The zero vector with `dim` components.
    pub fn zero(dim: usize) -> PlotResult<Self> {
        match dim {
            2 => Ok(Vector::Planar(Vector2::zeros())),
            3 => Ok(Vector::Spatial(Vector3::zeros())),
            len => Err(PlotError::UnsupportedDimension { len }),
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            Vector::Planar(_) => 2,
            Vector::Spatial(_) => 3,
        }
    }

    pub fn x(&self) -> f64 {
        match self {
            Vector::Planar(v) => v.x,
            Vector::Spatial(v) => v.x,
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Vector::Planar(v) => v.y,
            Vector::Spatial(v) => v.y,
        }
    }

    pub fn z(&self) -> Option<f64> {
        match self {
            Vector::Planar(_) => None,
            Vector::Spatial(v) => Some(v.z),
        }
    }

    /// The component that closes a linear equation (y in 2D, z in 3D).
    pub fn last(&self) -> f64 {
        match self {
            Vector::Planar(v) => v.y,
            Vector::Spatial(v) => v.z,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Vector::Planar(v) => vec![v.x, v.y],
            Vector::Spatial(v) => vec![v.x, v.y, v.z],
        }
    }

    /// Fails on the first NaN or infinite component.
    pub fn ensure_finite(&self) -> PlotResult<()> {
        match self.to_vec().iter().position(|value| !value.is_finite()) {
            Some(index) => Err(PlotError::NonFiniteComponent { index }),
            None => Ok(()),
        }
    }

    /// Fails unless `other` has the same dimension as `self`.
    pub fn ensure_same_dim(&self, other: &Vector) -> PlotResult<()> {
        if self.dim() == other.dim() {
            Ok(())
        } else {
            Err(PlotError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            })
        }
    }
}

impl IntoVector for Vector {
    fn into_vector(self) -> PlotResult<Vector> {
        self.ensure_finite()?;
        Ok(self)
    }
}

impl IntoVector for &Vector {
    fn into_vector(self) -> PlotResult<Vector> {
        (*self).into_vector()
    }
}

impl IntoVector for Vector2<f64> {
    fn into_vector(self) -> PlotResult<Vector> {
        Vector::Planar(self).into_vector()
    }
}

impl IntoVector for Vector3<f64> {
    fn into_vector(self) -> PlotResult<Vector> {
        Vector::Spatial(self).into_vector()
    }
}

impl<T: ToPrimitive> IntoVector for &[T] {
    fn into_vector(self) -> PlotResult<Vector> {
        if self.len() != 2 && self.len() != 3 {
            return Err(PlotError::UnsupportedDimension { len: self.len() });
        }
        let mut coords = [0.0; 3];
        for (index, value) in self.iter().enumerate() {
            let value = value
                .to_f64()
                .ok_or(PlotError::NonNumericComponent { index })?;
            if !value.is_finite() {
                return Err(PlotError::NonFiniteComponent { index });
            }
            coords[index] = value;
        }
        if self.len() == 2 {
            Ok(Vector::planar(coords[0], coords[1]))
        } else {
            Ok(Vector::spatial(coords[0], coords[1], coords[2]))
        }
    }
}

impl<T: ToPrimitive, const N: usize> IntoVector for [T; N] {
    fn into_vector(self) -> PlotResult<Vector> {
        self.as_slice().into_vector()
    }
}

impl<T: ToPrimitive> IntoVector for Vec<T> {
    fn into_vector(self) -> PlotResult<Vector> {
        self.as_slice().into_vector()
    }
}

impl<T: ToPrimitive> IntoVector for &Vec<T> {
    fn into_vector(self) -> PlotResult<Vector> {
        self.as_slice().into_vector()
    }
}

/// `count` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_convert_by_length() {
        let planar = [1, 2].into_vector().expect("2D input should convert");
        assert_eq!(planar, Vector::planar(1.0, 2.0));

        let spatial = vec![1.5f32, -2.0, 3.0]
            .into_vector()
            .expect("3D input should convert");
        assert_eq!(spatial, Vector::spatial(1.5, -2.0, 3.0));
    }

    #[test]
    fn unsupported_lengths_are_rejected() {
        let err = [1.0, 2.0, 3.0, 4.0]
            .into_vector()
            .expect_err("4D input should fail");
        assert_eq!(err, PlotError::UnsupportedDimension { len: 4 });

        let empty: Vec<f64> = Vec::new();
        let err = empty.into_vector().expect_err("empty input should fail");
        assert_eq!(err, PlotError::UnsupportedDimension { len: 0 });
    }

    #[test]
    fn non_finite_components_are_rejected() {
        let err = [1.0, f64::INFINITY, 0.0]
            .into_vector()
            .expect_err("infinite input should fail");
        assert_eq!(err, PlotError::NonFiniteComponent { index: 1 });

        let err = vec![f64::NAN, 1.0]
            .into_vector()
            .expect_err("NaN input should fail");
        assert_eq!(err, PlotError::NonFiniteComponent { index: 0 });

        let err = Vector::spatial(0.0, 0.0, f64::NEG_INFINITY)
            .into_vector()
            .expect_err("prebuilt vectors are checked too");
        assert_eq!(err, PlotError::NonFiniteComponent { index: 2 });

        let err = Vector2::new(1.0, f64::NAN)
            .into_vector()
            .expect_err("nalgebra input should be checked");
        assert_eq!(err, PlotError::NonFiniteComponent { index: 1 });
    }

    #[test]
    fn last_component_follows_dimension() {
        assert_eq!(Vector::planar(1.0, 7.0).last(), 7.0);
        assert_eq!(Vector::spatial(1.0, 2.0, 9.0).last(), 9.0);
        assert_eq!(Vector::planar(1.0, 7.0).z(), None);
    }

    #[test]
    fn dimension_mismatch_reports_both_sizes() {
        let err = Vector::spatial(1.0, 0.0, 0.0)
            .ensure_same_dim(&Vector::planar(0.0, 0.0))
            .expect_err("mismatch should fail");
        assert_eq!(
            err,
            PlotError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn linspace_includes_both_ends() {
        let samples = linspace(-5.0, 5.0, 100);
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], -5.0);
        assert_eq!(samples[99], 5.0);
        let step = samples[1] - samples[0];
        assert!((step - 10.0 / 99.0).abs() < 1e-12);
    }
}
