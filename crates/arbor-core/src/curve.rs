//! Hermite cubic interpolation.
//!
//! Tree diagrams connect a parent to each child with a smooth curve rather
//! than a straight segment. Because a laid-out tree grows strictly along +X
//! (one column per depth level), every link can be expressed as a function
//! `y(x)` over the span between the two endpoints, which is exactly what a
//! cubic Hermite segment provides.
//!
//! [`Hermite`] holds the tension coefficient and fits [`HermiteCurve`]
//! segments; a fitted segment evaluates anywhere on its span.

use thiserror::Error;

use crate::geometry::Point;

/// Errors produced when fitting a curve.
#[derive(Debug, Error)]
pub enum CurveError {
    /// The x-positions of the two endpoints must be strictly increasing.
    #[error("curve span must satisfy x1 < x2 (got x1 = {x1}, x2 = {x2})")]
    NonIncreasingSpan { x1: f32, x2: f32 },
}

/// Hermite cubic interpolation with a configurable tension coefficient.
///
/// The tension scales the end slopes; `0.5` (the default) gives the
/// classic Catmull-Rom feel.
///
/// # Examples
///
/// ```
/// # use arbor_core::curve::Hermite;
/// let curve = Hermite::new()
///     .fit(0.5, 1.5, 1.5, 0.5, 0.0, 0.0)
///     .expect("span is increasing");
///
/// // The curve passes through both endpoints.
/// assert!((curve.y(0.5) - 1.5).abs() < 1e-4);
/// assert!((curve.y(1.5) - 0.5).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hermite {
    tension: f32,
}

impl Default for Hermite {
    fn default() -> Self {
        Self { tension: 0.5 }
    }
}

impl Hermite {
    /// Creates an interpolator with the default tension of `0.5`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tension coefficient.
    pub fn with_tension(mut self, tension: f32) -> Self {
        self.tension = tension;
        self
    }

    /// Fits a cubic segment through `(x1, y1)` and `(x2, y2)` with end
    /// slopes `s1` and `s2`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonIncreasingSpan`] unless `x1 < x2`.
    pub fn fit(
        &self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        s1: f32,
        s2: f32,
    ) -> Result<HermiteCurve, CurveError> {
        if x1 >= x2 {
            return Err(CurveError::NonIncreasingSpan { x1, x2 });
        }

        let span = x2 - x1;
        let p3 = self.tension * s1;
        let p4 = self.tension * s2;

        // The polynomial is solved once on the unit domain; evaluation maps
        // back to [x1, x2]. The y-values scale by the span so the solved
        // coefficients stay span-independent.
        let y1 = y1 / span;
        let y2 = y2 / span;
        let coefficients = [
            2.0 * y1 - 2.0 * y2 + p3 + p4,
            3.0 * y2 - 3.0 * y1 - 2.0 * p3 - p4,
            p3,
            y1,
        ];

        Ok(HermiteCurve {
            start: x1,
            end: x2,
            coefficients,
        })
    }
}

/// A fitted Hermite segment, evaluable over its `[start, end]` span.
#[derive(Debug, Clone, Copy)]
pub struct HermiteCurve {
    start: f32,
    end: f32,
    coefficients: [f32; 4],
}

impl HermiteCurve {
    /// Returns the x-position the span starts at.
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Returns the x-position the span ends at.
    pub fn end(&self) -> f32 {
        self.end
    }

    /// Evaluates the curve at `x`.
    ///
    /// Inputs outside `[start, end]` extrapolate the cubic.
    pub fn y(&self, x: f32) -> f32 {
        let span = self.end - self.start;
        let sx = (x - self.start) / span;
        let sx2 = sx * sx;
        let sx3 = sx * sx2;
        let [a, b, c, d] = self.coefficients;
        (a * sx3 + b * sx2 + c * sx + d) * span
    }

    /// Samples `count` evenly spaced points over the span, endpoints
    /// included. `count` is clamped to at least 2.
    pub fn sample(&self, count: usize) -> Vec<Point> {
        let count = count.max(2);
        let step = (self.end - self.start) / (count - 1) as f32;
        (0..count)
            .map(|i| {
                let x = self.start + step * i as f32;
                Point::new(x, self.y(x))
            })
            .collect()
    }
}
