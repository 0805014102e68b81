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

//! Square 2D worlds with circular obstacles.
//!
//! The [World] owns the geometric side of planning: uniform sampling of the
//! domain and the collision predicates the planner consults before
//! accepting a vertex or an edge. All predicates are pure functions over
//! the immutable obstacle set.

use crate::point::Point2D;
use crate::tree::Distance;
use rand::Rng;

/// A circular obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Whether the point lies inside or on the circle.
    pub fn contains(&self, p: &Point2D) -> bool {
        p.distance(&self.center) <= self.radius
    }

    /// Whether the segment from `a` to `b` passes through the circle.
    ///
    /// Projects the center onto the line through `a` and `b` and clamps the
    /// projection parameter to `[0, 1]` so only the segment's extent
    /// counts. The boundary counts as an intersection.
    pub fn intersects_segment(&self, a: &Point2D, b: &Point2D) -> bool {
        let (x_delta, y_delta) = (b.x() - a.x(), b.y() - a.y());
        let length_squared = x_delta * x_delta + y_delta * y_delta;
        if length_squared == 0.0 {
            // Degenerate segment, fall back to the point test
            return self.contains(a);
        }

        let u = ((self.center.x() - a.x()) * x_delta + (self.center.y() - a.y()) * y_delta)
            / length_squared;
        let u = u.clamp(0.0, 1.0);

        let closest = Point2D::new(a.x() + u * x_delta, a.y() + u * y_delta);
        closest.distance(&self.center) <= self.radius
    }
}

/// Simple representation of a square 2D world.
///
/// Limits are from 0 to `domain` on both axes.
/// Obstacles are circles with inaccessible interiors and boundaries.
#[derive(Debug, Clone)]
pub struct World {
    domain: f64,
    obstacles: Vec<Circle>,
}

impl World {
    /// Constructs a new world with the specified obstacles.
    pub fn new(domain: f64, obstacles: Vec<Circle>) -> Self {
        World { domain, obstacles }
    }

    /// Constructs a world populated with `count` randomly placed circles.
    ///
    /// Centers are drawn uniformly over the domain, radii from 1 up to a
    /// tenth of the domain bound. Convenient for demos, not required by
    /// the planner.
    pub fn with_random_obstacles<R: Rng>(domain: f64, count: usize, rng: &mut R) -> Self {
        let obstacles = (0..count)
            .map(|_| {
                let center = Point2D::new(rng.gen_range(0.0..domain), rng.gen_range(0.0..domain));
                let radius = rng.gen_range(1.0..=domain / 10.0);
                Circle::new(center, radius)
            })
            .collect();
        World { domain, obstacles }
    }

    pub fn domain(&self) -> f64 {
        self.domain
    }

    pub fn obstacles(&self) -> &[Circle] {
        &self.obstacles
    }

    /// Draws a configuration uniformly from `[0, domain) x [0, domain)`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point2D {
        Point2D::new(
            rng.gen_range(0.0..self.domain),
            rng.gen_range(0.0..self.domain),
        )
    }

    /// Draws configurations until one lands outside every obstacle.
    ///
    /// Used to place starts and goals for randomly generated worlds. Loops
    /// forever if the obstacles cover the entire domain.
    pub fn sample_free<R: Rng>(&self, rng: &mut R) -> Point2D {
        loop {
            let p = self.sample(rng);
            if !self.is_vertex_blocked(&p) {
                return p;
            }
        }
    }

    /// Whether the point lies within the world bounds.
    pub fn contains(&self, p: &Point2D) -> bool {
        p.x() >= 0.0 && p.x() <= self.domain && p.y() >= 0.0 && p.y() <= self.domain
    }

    /// Whether any obstacle contains the vertex.
    pub fn is_vertex_blocked(&self, v: &Point2D) -> bool {
        self.obstacles.iter().any(|circle| circle.contains(v))
    }

    /// Whether any obstacle intersects the segment from `a` to `b`.
    pub fn is_edge_blocked(&self, a: &Point2D, b: &Point2D) -> bool {
        self.obstacles
            .iter()
            .any(|circle| circle.intersects_segment(a, b))
    }

    /// Whether a candidate vertex and its connecting edge are both clear.
    pub fn is_vertex_accepted(&self, near: &Point2D, new: &Point2D) -> bool {
        !self.is_vertex_blocked(new) && !self.is_edge_blocked(near, new)
    }
}

//
// Unit tests
//
