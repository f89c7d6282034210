//! Measure a full solve of a grid with walls and expensive terrain scattered
//! across it, requiring the wavefront to route around obstacles
//!
//! Grid is 500 by 500 cells
//!

use bevy_flowfield_grid_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Create a grid where roughly a quarter of the cells are walls and some are swamp
fn prepare_grid(width: usize, height: usize) -> FlowFieldGrid {
	let mut rng = StdRng::seed_from_u64(7);
	let costs: Vec<i32> = (0..width * height)
		.map(|_| match rng.random_range(0..20) {
			0..=4 => 0,
			5 => 6,
			_ => 1,
		})
		.collect();
	let mut grid = FlowFieldGrid::load(&costs, width, height).unwrap();
	// keep the corner clear for the target
	grid.set_cost(1, FieldCell::new(0, 0));
	grid
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(20);
	let grid = prepare_grid(500, 500);
	group.bench_function("calc_flow_maze", |b| {
		b.iter(|| {
			let mut grid = grid.clone();
			grid.set_target(black_box(FieldCell::new(0, 0))).unwrap()
		})
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
