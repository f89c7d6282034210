//! Measure initialising a large CostField from a flattened array
//!

use bevy_flowfield_grid_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Copy the costs into a new grid
fn init_cost_field(costs: &[i32], width: usize, height: usize) {
	let _grid = FlowFieldGrid::load(costs, width, height).unwrap();
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("data_initialisation");
	group.significance_level(0.05).sample_size(100);
	let costs = vec![DEFAULT_COST; 1000 * 1000];
	group.bench_function("init_cost_field", |b| {
		b.iter(|| init_cost_field(black_box(&costs), black_box(1000), black_box(1000)))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
