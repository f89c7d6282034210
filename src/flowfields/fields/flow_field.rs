//! A [FlowField] is a 2D array of direction vectors. Every cell which has been
//! reached by the [IntegrationField] wavefront (apart from the target itself)
//! holds a unit vector pointing downhill towards the target, all other cells
//! hold [Vec2::ZERO]. A steering pipeline/character controller should read
//! and interpret a [FlowField] to provide movement.
//!
//! A direction is calculated in two passes:
//!
//! 1. The base direction of a cell is the [Ordinal] of its 8-connected
//! neighbour with strictly the lowest integration cost (impassable and
//! unvisited neighbours are ignored, ties go to the first neighbour clockwise
//! from North)
//! 2. The base direction is then smoothed with the base directions of its
//! neighbours, each weighted by `1 / (distance + 0.1)`, averaged and
//! normalised
//!
//! The target has a base direction like any other reached cell, pointing at
//! its cheapest neighbour, so it takes part in the smoothing of the cells
//! around it. Its own final direction is always [Vec2::ZERO].
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |  ↘  |  ↘  |  ↓  |  ↙  |  ↙  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  ↘  |  ↘  |  ↓  |  ↙  |  ↙  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  →  |  →  |  T  |  ←  |  ←  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  ↗  |  ↗  |  ↑  |  ↖  |  ↖  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  ↗  |  ↗  |  ↑  |  ↖  |  ↖  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Pure steepest descent produces blocky movement across diagonal cell
//! boundaries, the smoothing pass blends it out without a global pass.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Per-cell unit direction of travel towards the target
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Row-major directions
	directions: Vec<Vec2>,
}

impl Field<Vec2> for FlowField {
	fn get_dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// Get a reference to the field array
	fn get(&self) -> &[Vec2] {
		&self.directions
	}
	/// Retrieve a field cell value, outside of the field this is [Vec2::ZERO]
	fn get_field_cell_value(&self, field_cell: FieldCell) -> Vec2 {
		match field_cell.to_index(self.width, self.height) {
			Some(i) => self.directions[i],
			None => Vec2::ZERO,
		}
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: Vec2, field_cell: FieldCell) {
		if let Some(i) = field_cell.to_index(self.width, self.height) {
			self.directions[i] = value;
		}
	}
}

impl FlowField {
	/// Create a new [FlowField] where every cell has no direction
	pub fn new(width: usize, height: usize) -> Self {
		FlowField {
			width,
			height,
			directions: vec![Vec2::ZERO; width * height],
		}
	}
	/// Clear every direction back to [Vec2::ZERO]
	pub fn reset(&mut self) {
		self.directions.fill(Vec2::ZERO);
	}
	/// Calculate the [FlowField] from an [IntegrationField]. Returns the number of cells which were given a direction
	pub fn calculate(&mut self, integration_field: &IntegrationField, cost_field: &CostField) -> usize {
		self.reset();
		// every base direction is needed by the neighbours so find them all up front
		let base_directions: Vec<Ordinal> = (0..self.directions.len())
			.map(|i| {
				let field_cell = FieldCell::from_index(i, self.width);
				get_base_direction(field_cell, integration_field, cost_field)
			})
			.collect();
		let mut directed = 0;
		for (i, base) in base_directions.iter().enumerate() {
			// only the target has an integration cost of 0
			if *base == Ordinal::Zero || integration_field.get()[i] == 0.0 {
				continue;
			}
			let field_cell = FieldCell::from_index(i, self.width);
			let mut smoothed = base.as_vec2();
			let mut valid_neighbours = 0;
			for (ord, n) in Ordinal::get_all_cell_neighbours(field_cell, self.width, self.height) {
				if cost_field.is_impassable(n) || !integration_field.is_visited(n) {
					continue;
				}
				let Some(n_index) = n.to_index(self.width, self.height) else {
					continue;
				};
				let neighbour_base = base_directions[n_index];
				if neighbour_base != Ordinal::Zero {
					smoothed += neighbour_base.as_vec2() * ord.smoothing_weight();
					valid_neighbours += 1;
				}
			}
			if valid_neighbours > 0 {
				smoothed /= (valid_neighbours + 1) as f32;
			}
			let direction = smoothed.normalize_or_zero();
			if direction != Vec2::ZERO {
				directed += 1;
			}
			self.directions[i] = direction;
		}
		directed
	}
}

/// Find the unsmoothed [Ordinal] pointing from `field_cell` to its cheapest
/// neighbour. Impassable and unvisited cells, or a reached cell with no
/// reached neighbours, produce [Ordinal::Zero]
pub fn get_base_direction(
	field_cell: FieldCell,
	integration_field: &IntegrationField,
	cost_field: &CostField,
) -> Ordinal {
	let (width, height) = integration_field.get_dimensions();
	if !field_cell.is_within(width, height) || cost_field.is_impassable(field_cell) {
		return Ordinal::Zero;
	}
	if !integration_field.is_visited(field_cell) {
		return Ordinal::Zero;
	}
	let mut cheapest_value = IMPASSABLE;
	let mut cheapest_ord = Ordinal::Zero;
	for (ord, n) in Ordinal::get_all_cell_neighbours(field_cell, width, height) {
		if cost_field.is_impassable(n) {
			continue;
		}
		let neighbour_cost = integration_field.get_field_cell_value(n);
		if neighbour_cost == UNVISITED {
			continue;
		}
		if neighbour_cost < cheapest_value {
			cheapest_value = neighbour_cost;
			cheapest_ord = ord;
		}
	}
	cheapest_ord
}
