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

//! Single-query RRT planning over a [World].

use crate::point::Point2D;
use crate::tree::{Distance, Tree};
use crate::world::World;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors for malformed [PlanningQuery] inputs.
///
/// A rejected query never runs a single iteration. Contrast with
/// [PlanStatus::Failed], an attempted query that exhausted its budget.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("domain bound must be positive and finite, got {0}")]
    InvalidDomain(f64),

    #[error("step size must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("iteration budget must be positive")]
    InvalidBudget,

    #[error("obstacle radius must be positive and finite, got {0}")]
    InvalidObstacle(f64),

    #[error("{name} configuration {point} lies outside the domain")]
    OutOfDomain { name: &'static str, point: Point2D },

    #[error("{name} configuration {point} lies inside an obstacle")]
    InsideObstacle { name: &'static str, point: Point2D },
}

/// Terminal state of a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// A collision-free edge to the goal was found.
    Done,

    /// The iteration budget ran out while still growing. The query as
    /// attempted found no path; a larger budget or another seed may.
    Failed,
}

/// A single planning problem.
///
/// Constructed once per run and never mutated by the planner.
#[derive(Debug, Clone)]
pub struct PlanningQuery {
    pub start: Point2D,
    pub goal: Point2D,
    pub world: World,

    /// Fixed steering step length.
    pub delta: f64,

    /// Maximum number of random samples to attempt before the search fails.
    pub max_iterations: u64,
}

impl PlanningQuery {
    pub fn new(
        start: Point2D,
        goal: Point2D,
        world: World,
        delta: f64,
        max_iterations: u64,
    ) -> Self {
        PlanningQuery {
            start,
            goal,
            world,
            delta,
            max_iterations,
        }
    }

    /// Rejects malformed queries before any planning iteration runs.
    ///
    /// # Errors
    ///
    /// If the domain bound, step size, iteration budget, or an obstacle
    /// radius is non-positive or non-finite, or if the start or goal lies
    /// outside the domain or inside an obstacle.
    pub fn validate(&self) -> Result<(), QueryError> {
        let domain = self.world.domain();
        if !domain.is_finite() || domain <= 0.0 {
            return Err(QueryError::InvalidDomain(domain));
        }
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(QueryError::InvalidStep(self.delta));
        }
        if self.max_iterations == 0 {
            return Err(QueryError::InvalidBudget);
        }
        for obstacle in self.world.obstacles() {
            if !obstacle.radius.is_finite() || obstacle.radius <= 0.0 {
                return Err(QueryError::InvalidObstacle(obstacle.radius));
            }
        }
        for (name, point) in [("start", &self.start), ("goal", &self.goal)] {
            if !point.is_finite() || !self.world.contains(point) {
                return Err(QueryError::OutOfDomain {
                    name,
                    point: *point,
                });
            }
            if self.world.is_vertex_blocked(point) {
                return Err(QueryError::InsideObstacle {
                    name,
                    point: *point,
                });
            }
        }
        Ok(())
    }
}

/// Result of a planning run.
///
/// The tree holds every accepted vertex with its parent, for callers that
/// want to inspect or draw the explored space; the path is the goal-first
/// backtrack through parent links, empty when the run failed. Renderers
/// must treat both as read-only.
#[derive(Debug)]
pub struct PlanningResult {
    pub status: PlanStatus,
    pub tree: Tree<Point2D>,
    pub path: Vec<Point2D>,
}

impl PlanningResult {
    /// Total Euclidean length of the solution path, 0 when failed.
    pub fn path_length(&self) -> f64 {
        self.path
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}

/// Implementation of single-query RRT planning.
///
/// Grows a tree from `query.start` by repeatedly sampling the world,
/// steering a fixed `query.delta` from the nearest vertex towards the
/// sample, and keeping the candidate when neither it nor its connecting
/// edge crosses an obstacle. After each accepted vertex the straight edge
/// from that vertex to `query.goal` is tested; the first clear edge ends
/// the search.
///
/// # Parameters
///
/// - `query`: The planning problem, see [PlanningQuery]
/// - `rng`: Random source for sampling. Seed it for reproducible runs;
///   identical queries with identical seeds grow identical trees.
///
/// # Returns
/// Returns a `Result` containing either:
/// - `Ok(PlanningResult)`: the status ([PlanStatus::Done] or
///   [PlanStatus::Failed]), the full tree, and the goal-first path
///   (empty on failure).
/// - `Err(QueryError)`: the query was malformed and no iteration ran.
///
/// # Example
///
/// Refer to the world demo or integration tests.
pub fn plan<R: Rng>(query: &PlanningQuery, rng: &mut R) -> Result<PlanningResult, QueryError> {
    query.validate()?;

    let world = &query.world;
    let mut tree = Tree::new(query.start);

    for iteration in 0..query.max_iterations {
        // Sample, grab the nearest vertex, and steer in that direction.
        let q_rand = world.sample(rng);
        let q_near = *tree.nearest_neighbor(&q_rand);

        // A sample coinciding with its nearest vertex has no steering
        // direction. Discard it and draw again.
        if q_rand == q_near {
            continue;
        }

        let q_new = q_near.step_towards(&q_rand, query.delta);

        // A colliding candidate consumes the iteration without growing
        // the tree.
        if !world.is_vertex_accepted(&q_near, &q_new) {
            continue;
        }

        // So does a candidate that re-derives an existing vertex.
        if tree.add_child(&q_near, q_new).is_err() {
            continue;
        }
        trace!(iteration, vertex = %q_new, "vertex accepted");

        // Only the newest vertex is tested against the goal.
        if !world.is_edge_blocked(&q_new, &query.goal) {
            if query.goal != q_new {
                // Growth stops at the first clear goal edge, so the goal
                // cannot already be in the tree.
                tree.add_child(&q_new, query.goal)
                    .expect("goal vertex is inserted exactly once");
            }
            let path = tree
                .path(&query.goal)
                .expect("goal vertex was just inserted");
            debug!(iteration, vertices = tree.size(), "goal connected");
            return Ok(PlanningResult {
                status: PlanStatus::Done,
                tree,
                path,
            });
        }
    }

    debug!(
        iterations = query.max_iterations,
        vertices = tree.size(),
        "budget exhausted before reaching the goal"
    );
    Ok(PlanningResult {
        status: PlanStatus::Failed,
        tree,
        path: Vec::new(),
    })
}

//
// Unit tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Circle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn open_query() -> PlanningQuery {
        PlanningQuery::new(
            Point2D::new(10.0, 10.0),
            Point2D::new(90.0, 90.0),
            World::new(100.0, Vec::new()),
            1.0,
            1000,
        )
    }

    #[test]
    fn test_validate_accepts_well_formed_query() {
        assert!(open_query().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let mut query = open_query();
        query.world = World::new(-1.0, Vec::new());
        assert_eq!(query.validate(), Err(QueryError::InvalidDomain(-1.0)));

        let mut query = open_query();
        query.delta = 0.0;
        assert_eq!(query.validate(), Err(QueryError::InvalidStep(0.0)));

        let mut query = open_query();
        query.delta = f64::NAN;
        assert!(matches!(query.validate(), Err(QueryError::InvalidStep(_))));

        let mut query = open_query();
        query.max_iterations = 0;
        assert_eq!(query.validate(), Err(QueryError::InvalidBudget));

        let mut query = open_query();
        query.world = World::new(100.0, vec![Circle::new(Point2D::new(50.0, 50.0), 0.0)]);
        assert_eq!(query.validate(), Err(QueryError::InvalidObstacle(0.0)));
    }

    #[test]
    fn test_validate_rejects_out_of_domain_endpoints() {
        let mut query = open_query();
        query.start = Point2D::new(-1.0, 10.0);
        assert!(matches!(
            query.validate(),
            Err(QueryError::OutOfDomain { name: "start", .. })
        ));

        let mut query = open_query();
        query.goal = Point2D::new(10.0, 101.0);
        assert!(matches!(
            query.validate(),
            Err(QueryError::OutOfDomain { name: "goal", .. })
        ));

        let mut query = open_query();
        query.start = Point2D::new(f64::NAN, 10.0);
        assert!(matches!(
            query.validate(),
            Err(QueryError::OutOfDomain { name: "start", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blocked_endpoints() {
        let mut query = open_query();
        query.world = World::new(100.0, vec![Circle::new(Point2D::new(10.0, 10.0), 2.0)]);
        assert!(matches!(
            query.validate(),
            Err(QueryError::InsideObstacle { name: "start", .. })
        ));

        let mut query = open_query();
        query.world = World::new(100.0, vec![Circle::new(Point2D::new(90.0, 90.0), 2.0)]);
        assert!(matches!(
            query.validate(),
            Err(QueryError::InsideObstacle { name: "goal", .. })
        ));
    }

    #[test]
    fn test_plan_rejects_invalid_query() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut query = open_query();
        query.max_iterations = 0;
        assert!(plan(&query, &mut rng).is_err());
    }

    #[test]
    fn test_plan_open_world_connects() {
        // With no obstacles the first accepted vertex always sees the goal
        let mut rng = StdRng::seed_from_u64(1);
        let result = plan(&open_query(), &mut rng).unwrap();
        assert_eq!(result.status, PlanStatus::Done);
        assert_eq!(result.path.first(), Some(&Point2D::new(90.0, 90.0)));
        assert_eq!(result.path.last(), Some(&Point2D::new(10.0, 10.0)));
    }
}
