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

use plotly::common::{Fill, Line, Mode};
use plotly::{Layout, Plot, Scatter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rrtplan::{plan, PlanStatus, PlanningQuery, Point2D, Tree, World};
use std::env;
use std::f64::consts::PI;

/// Visualize a planning run
fn visualize_plan(world: &World, path: &[Point2D], tree: &Tree<Point2D>) {
    let mut plot = Plot::new();

    // Plot obstacles as filled circle outlines
    for obstacle in world.obstacles() {
        let (x, y): (Vec<_>, Vec<_>) = (0..=60)
            .map(|i| {
                let angle = 2.0 * PI * f64::from(i) / 60.0;
                (
                    obstacle.center.x() + obstacle.radius * angle.cos(),
                    obstacle.center.y() + obstacle.radius * angle.sin(),
                )
            })
            .unzip();
        let trace = Scatter::new(x, y)
            .fill(Fill::ToSelf)
            .fill_color("black")
            .line(Line::new().color("black"))
            .opacity(1.0);
        plot.add_trace(trace);
    }

    // Plot tree
    for vertex in tree.iter_depth_first() {
        if let Some(parent) = tree.get_parent(vertex) {
            let trace = Scatter::new(
                vec![vertex.x(), parent.x()],
                vec![vertex.y(), parent.y()],
            )
            .mode(Mode::Lines)
            .line(Line::new().color("blue"));
            plot.add_trace(trace);
        }
    }

    // Plot path
    let path_x: Vec<_> = path.iter().map(Point2D::x).collect();
    let path_y: Vec<_> = path.iter().map(Point2D::y).collect();
    let path_trace = Scatter::new(path_x, path_y)
        .mode(Mode::Lines)
        .line(Line::new().color("red").width(4.0));
    plot.add_trace(path_trace);

    // Plot start and end; the path runs goal-first
    if let (Some(goal), Some(start)) = (path.first(), path.last()) {
        let start_trace = Scatter::new(vec![start.x()], vec![start.y()])
            .mode(Mode::Markers)
            .marker(plotly::common::Marker::new().color("green").size(16));
        let goal_trace = Scatter::new(vec![goal.x()], vec![goal.y()])
            .mode(Mode::Markers)
            .marker(plotly::common::Marker::new().color("yellow").size(16));
        plot.add_trace(start_trace);
        plot.add_trace(goal_trace);
    }

    let layout = Layout::new()
        .title("RRT Path Finding Result".into())
        .show_legend(false)
        .width(750)
        .height(750)
        .x_axis(plotly::layout::Axis::new().title("X".into()))
        .y_axis(plotly::layout::Axis::new().title("Y".into()));

    plot.set_layout(layout);
    plot.show();
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: program num_obstacles seed");
        return;
    }

    let num_obstacles: usize = args[1].parse().expect("Invalid num_obstacles");
    let seed: u64 = args[2].parse().expect("Invalid seed");

    // Constants for this particular run
    let domain = 100.0; // Square world bound.
    let delta = 1.0; // Distance between existing nodes and new vertices.
    let max_iterations = 100_000; // Samples to draw before giving up.

    // Scatter random circles over the world, then pick a start and a goal
    // in the remaining free space
    let mut rng = StdRng::seed_from_u64(seed);
    let world = World::with_random_obstacles(domain, num_obstacles, &mut rng);
    let start = world.sample_free(&mut rng);
    let goal = world.sample_free(&mut rng);

    println!("Start pose: ({}, {})", start.x(), start.y());
    println!("Goal pose: ({}, {})", goal.x(), goal.y());

    let query = PlanningQuery::new(start, goal, world, delta, max_iterations);
    match plan(&query, &mut rng) {
        Ok(result) => {
            if result.status == PlanStatus::Done {
                println!(
                    "Path found with {} waypoints, length {:.2}",
                    result.path.len(),
                    result.path_length()
                );
            } else {
                println!("No path found within {max_iterations} iterations");
            }
            visualize_plan(&query.world, &result.path, &result.tree);
        }
        Err(e) => {
            println!("Planning rejected the query: {}", e);
        }
    }
}
