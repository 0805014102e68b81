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

//! Single-query RRT planning over bounded 2D worlds with circular
//! obstacles.
//!
//! A [World](world::World) describes the square planning domain and its
//! obstacle set; [plan](planning::plan) grows a
//! [Tree](tree::Tree) of collision-free configurations from the start
//! until a clear straight edge to the goal exists, then backtracks parent
//! links into the solution path.
//!
//! # Example
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rrtplan::{plan, Circle, PlanStatus, PlanningQuery, Point2D, World};
//!
//! # fn main() -> Result<(), rrtplan::QueryError> {
//! let world = World::new(100.0, vec![Circle::new(Point2D::new(50.0, 50.0), 5.0)]);
//! let query = PlanningQuery::new(
//!     Point2D::new(10.0, 10.0),
//!     Point2D::new(90.0, 90.0),
//!     world,
//!     1.0,
//!     10_000,
//! );
//!
//! // Seed the generator for reproducible runs
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = plan(&query, &mut rng)?;
//! if result.status == PlanStatus::Done {
//!     println!("path with {} waypoints", result.path.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod planning;
pub mod point;
pub mod tree;
pub mod world;

// Re-exports
pub use planning::{plan, PlanStatus, PlanningQuery, PlanningResult, QueryError};
pub use point::Point2D;
pub use tree::{Distance, Tree, TreeError};
pub use world::{Circle, World};
