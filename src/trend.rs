//! Linear trend injection.
//!
//! A trend adds one coordinate to every point: the point's coordinates
//! weighted by a direction vector, summed, and multiplied by a scalar
//! strength. Points are immutable values, so injection always builds new
//! points and leaves its input untouched.

use std::ops::Index;
use std::sync::Arc;

use log::debug;

use crate::error::{Result, SynthError};

#[derive(Debug, Clone, PartialEq)]
pub struct Point(Arc<[f64]>);

impl Point {
    pub fn new(coords: &[f64]) -> Self {
        Point(coords.into())
    }

    pub fn dims(&self) -> usize {
        self.0.len()
    }

    pub fn coords(&self) -> &[f64] {
        &self.0
    }

    /// Returns a new point with `value` added as the last coordinate.
    pub fn with_appended(&self, value: f64) -> Point {
        let mut coords = Vec::with_capacity(self.dims() + 1);
        coords.extend_from_slice(&self.0);
        coords.push(value);
        Point(coords.into())
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Point(coords.into())
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Point::new(&coords)
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Direction and strength of a linear trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendDirection {
    weights: Vec<f64>,
    scalar: f64,
}

impl TrendDirection {
    pub fn new(weights: Vec<f64>, scalar: f64) -> Self {
        TrendDirection { weights, scalar }
    }

    pub fn dims(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    /// Trend value for a single point. The point must have [`Self::dims`]
    /// coordinates; extra coordinates on either side are ignored.
    pub fn trend_value(&self, point: &Point) -> f64 {
        let weighted: f64 = self.weights.iter()
            .zip(point.coords())
            .map(|(w, x)| w * x)
            .sum();
        weighted * self.scalar
    }

    /// Appends the trend value to every point, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::NoPoints`] for an empty slice and
    /// [`SynthError::DimensionMismatch`] for the first point whose
    /// dimensionality differs from the direction's.
    pub fn apply(&self, points: &[Point]) -> Result<Vec<Point>> {
        self.validate(points)?;

        debug!(
            "injecting trend into {} points of dimension {} (scalar {})",
            points.len(), self.dims(), self.scalar
        );
        Ok(points.iter()
            .map(|p| p.with_appended(self.trend_value(p)))
            .collect())
    }

    fn validate(&self, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            return Err(SynthError::NoPoints);
        }

        if let Some((index, point)) = points.iter()
            .enumerate()
            .find(|(_, p)| p.dims() != self.dims())
        {
            return Err(SynthError::DimensionMismatch {
                index,
                expected: self.dims(),
                found: point.dims(),
            });
        }

        Ok(())
    }
}

/// Returns `points` with a linear trend of strength `scalar` along
/// `direction` appended as a new last coordinate.
pub fn inject(points: &[Point], direction: &[f64], scalar: f64) -> Result<Vec<Point>> {
    TrendDirection::new(direction.to_vec(), scalar).apply(points)
}
