//! Measure building an IntegrationField across a uniform grid (hence open - open space)
//!
//! Grid is 1000 by 1000 cells with the target in the centre
//!

use bevy_flowfield_grid_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Grow the wavefront from the centre of the grid
fn integration_open(cost_field: &CostField, integration_field: &mut IntegrationField) -> usize {
	let (width, height) = cost_field.get_dimensions();
	let target = FieldCell::new(width as i32 / 2, height as i32 / 2);
	integration_field.calculate_field(target, cost_field)
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(20);
	let cost_field = CostField::new(1000, 1000).unwrap();
	let mut integration_field = IntegrationField::new(1000, 1000);
	group.bench_function("calc_integration_open", |b| {
		b.iter(|| integration_open(black_box(&cost_field), &mut integration_field))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
