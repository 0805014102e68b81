// MIT License
//
// Copyright (c) 2024 Erik Holum
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Planar configurations for the planner.
//! Coordinates are stored as [OrderedFloat] so points can be hashed and
//! used as [Tree](crate::tree::Tree) values.

use crate::tree::Distance;
use ordered_float::OrderedFloat;
use std::fmt;

/// A point in the 2D planning domain.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Point2D(OrderedFloat<f64>, OrderedFloat<f64>);

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D(OrderedFloat(x), OrderedFloat(y))
    }

    pub fn x(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.1.into_inner()
    }

    /// Returns the point `delta` along the line from `self` towards `toward`.
    ///
    /// The returned point is always exactly `delta` away from `self`,
    /// even when `toward` is closer than `delta` (the step overshoots the
    /// target in that case). Callers must not pass `toward == self` since
    /// the direction is undefined; the planner discards such samples
    /// before steering.
    pub fn step_towards(&self, toward: &Self, delta: f64) -> Self {
        let direction = (toward.x() - self.x(), toward.y() - self.y());
        let length = (direction.0.powi(2) + direction.1.powi(2)).sqrt();
        let norm_direction = (direction.0 / length, direction.1 / length);
        Point2D::new(
            self.x() + norm_direction.0 * delta,
            self.y() + norm_direction.1 * delta,
        )
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

// Norm distance function for 2D points
impl Distance for Point2D {
    fn distance(&self, other: &Point2D) -> f64 {
        let (dx, dy) = (self.x() - other.x(), self.y() - other.y());
        (dx * dx + dy * dy).sqrt()
    }
}

// Handy for debugging and error messages
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x(), self.y())
    }
}

//
// Unit tests
//
