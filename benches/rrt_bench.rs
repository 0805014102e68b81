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

use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rrtplan::{plan, Circle, PlanStatus, PlanningQuery, Point2D, World};

// Seed each run so the benches measure identical planning work
fn run_plan(query: &PlanningQuery, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let result = plan(query, &mut rng);
    assert!(result.is_ok(), "Expected Ok result, got Err");
    assert_eq!(result.unwrap().status, PlanStatus::Done);
}

fn bench_open_world(c: &mut Criterion) {
    let query = PlanningQuery::new(
        Point2D::new(1.0, 1.0),
        Point2D::new(50.0, 50.0),
        World::new(50.0, Vec::new()),
        1.0,
        100_000,
    );
    c.bench_function("rrt_open_world", |b| b.iter(|| run_plan(&query, 1)));
}

fn bench_obstacle_field(c: &mut Criterion) {
    let world = World::new(
        100.0,
        vec![
            Circle::new(Point2D::new(30.0, 30.0), 8.0),
            Circle::new(Point2D::new(50.0, 60.0), 10.0),
            Circle::new(Point2D::new(70.0, 40.0), 8.0),
            Circle::new(Point2D::new(60.0, 80.0), 6.0),
            Circle::new(Point2D::new(20.0, 70.0), 7.0),
        ],
    );
    let query = PlanningQuery::new(
        Point2D::new(5.0, 5.0),
        Point2D::new(95.0, 95.0),
        world,
        1.0,
        100_000,
    );
    c.bench_function("rrt_obstacle_field", |b| b.iter(|| run_plan(&query, 1)));
}

criterion_group!(benches, bench_open_world, bench_obstacle_field);
criterion_main!(benches);
