//! The IntegrationField contains a 2D array of `f32` values and it uses a [CostField] to
//! produce a cumulative cost of reaching the target.
//!
//! When a new target is set the field is reset to [UNVISITED] and the grid cell containing the target is set to `0`. The field is then grown from the target as an expanding wavefront, always settling the cheapest cell of the frontier next (Dijkstra's algorithm where moving into a cell costs the [CostField] value of that cell):
//!
//! 1. Pop the cell with the lowest integration cost from the frontier, ignoring it if it has already been settled
//! 2. The valid orthogonal neighbours of the cell are determined (North, East, South, West, when not against a boundary and not impassable)
//! 3. For each neighbour add its `CostField` value to the integration cost of the current cell
//! 4. If the neighbour hasn't been reached yet or the new value is cheaper then store it and push the neighbour onto the frontier
//! 5. Repeat until the frontier is empty
//!
//! This produces a nice diamond-like pattern as the wave expands (the underlying `CostField` are set to `1` here):
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |  4  |  3  |  2  |  3  |  4  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  3  |  2  |  1  |  2  |  3  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  0  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  3  |  2  |  1  |  2  |  3  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  4  |  3  |  2  |  3  |  4  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Impassable cells are never entered so the wave flows around them, cells that the wave cannot reach stay [UNVISITED].
//!

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::prelude::*;

/// Marks a cell which has not been reached from the target
pub const UNVISITED: f32 = -1.0;
/// Returned when asking for the integration cost of a cell outside of the field, never stored
pub const IMPASSABLE: f32 = f32::MAX;

/// Cumulative cost of travelling from each cell to the target
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationField {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Row-major integration costs
	values: Vec<f32>,
	/// Largest reached integration cost, kept in step with `values`
	max_integration: Option<f32>,
}

impl Field<f32> for IntegrationField {
	fn get_dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// Get a reference to the field array
	fn get(&self) -> &[f32] {
		&self.values
	}
	/// Retrieve a grid cell value, outside of the field this is [IMPASSABLE]
	fn get_field_cell_value(&self, field_cell: FieldCell) -> f32 {
		match field_cell.to_index(self.width, self.height) {
			Some(i) => self.values[i],
			None => IMPASSABLE,
		}
	}
	/// Set a grid cell to a value
	fn set_field_cell_value(&mut self, value: f32, field_cell: FieldCell) {
		if let Some(i) = field_cell.to_index(self.width, self.height) {
			let previous = self.values[i];
			self.values[i] = value;
			if value != UNVISITED && self.max_integration.is_none_or(|max| value >= max) {
				self.max_integration = Some(value);
			} else if Some(previous) == self.max_integration {
				// the old maximum was lowered or removed
				self.max_integration = self.scan_max_integration();
			}
		}
	}
}

/// An entry of the wavefront. Ordered so that a [BinaryHeap] pops the
/// cheapest entry first and entries of equal cost in the order they were pushed
#[derive(Clone, Copy, Debug)]
struct Frontier {
	/// Integration cost the cell had when it was pushed
	integration: f32,
	/// Push counter
	sequence: u64,
	/// Row-major index of the cell
	index: usize,
}

impl Ord for Frontier {
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.integration
			.total_cmp(&self.integration)
			.then_with(|| other.sequence.cmp(&self.sequence))
	}
}

impl PartialOrd for Frontier {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Frontier {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Frontier {}

impl IntegrationField {
	/// Creates a new [IntegrationField] where all cells are [UNVISITED]
	pub fn new(width: usize, height: usize) -> Self {
		IntegrationField {
			width,
			height,
			values: vec![UNVISITED; width * height],
			max_integration: None,
		}
	}
	/// Reset all the cells of the [IntegrationField] to [UNVISITED]
	pub fn reset(&mut self) {
		self.values.fill(UNVISITED);
		self.max_integration = None;
	}
	/// Has the cell been reached by the wavefront
	pub fn is_visited(&self, field_cell: FieldCell) -> bool {
		match field_cell.to_index(self.width, self.height) {
			Some(i) => self.values[i] != UNVISITED,
			None => false,
		}
	}
	/// The largest integration cost of any reached cell, [None] if no cell has been reached
	pub fn get_max_integration(&self) -> Option<f32> {
		self.max_integration
	}
	/// Find the largest reached integration cost by walking every cell
	fn scan_max_integration(&self) -> Option<f32> {
		self.values
			.iter()
			.filter(|v| **v != UNVISITED)
			.copied()
			.reduce(f32::max)
	}
	/// From the `target` grow a wavefront over successive neighbouring cells
	/// and calculate the field values from the `cost_field`. Returns the
	/// number of cells that were settled.
	///
	/// The `target` is expected to be a passable cell within the field
	pub fn calculate_field(&mut self, target: FieldCell, cost_field: &CostField) -> usize {
		self.reset();
		let Some(target_index) = target.to_index(self.width, self.height) else {
			return 0;
		};
		let mut settled = vec![false; self.values.len()];
		let mut frontier = BinaryHeap::new();
		let mut sequence = 0;
		self.values[target_index] = 0.0;
		frontier.push(Frontier {
			integration: 0.0,
			sequence,
			index: target_index,
		});
		let mut processed = 0;
		while let Some(Frontier {
			integration, index, ..
		}) = frontier.pop()
		{
			// a cell is settled by its cheapest entry, later entries are stale
			if settled[index] || integration > self.values[index] {
				continue;
			}
			settled[index] = true;
			processed += 1;
			// cells settle in order of cost so the latest is the most expensive
			self.max_integration = Some(integration);
			let cell = FieldCell::from_index(index, self.width);
			for n in cost_field.get_passable_orthogonal_neighbours(cell) {
				let Some(n_index) = n.to_index(self.width, self.height) else {
					continue;
				};
				if settled[n_index] {
					continue;
				}
				let candidate = integration + cost_field.get_field_cell_value(n) as f32;
				let existing = self.values[n_index];
				if existing == UNVISITED || candidate < existing {
					self.values[n_index] = candidate;
					sequence += 1;
					frontier.push(Frontier {
						integration: candidate,
						sequence,
						index: n_index,
					});
				}
			}
		}
		processed
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Calculate integration field from a uniform cost field with a source in the centre
	#[test]
	fn basic_field() {
		let cost_field = CostField::new(5, 5).unwrap();
		let mut integration_field = IntegrationField::new(5, 5);
		let processed = integration_field.calculate_field(FieldCell::new(2, 2), &cost_field);
		let result = integration_field.get();

		let actual: [f32; 25] = [
			4.0, 3.0, 2.0, 3.0, 4.0,
			3.0, 2.0, 1.0, 2.0, 3.0,
			2.0, 1.0, 0.0, 1.0, 2.0,
			3.0, 2.0, 1.0, 2.0, 3.0,
			4.0, 3.0, 2.0, 3.0, 4.0,
		];
		assert_eq!(actual.as_slice(), result);
		assert_eq!(25, processed);
	}
	/// Calculate integration field where a wall forces the wave around it
	#[test]
	fn field_around_wall() {
		let costs = [
			1, 1, 0, 1, 1,
			1, 1, 0, 1, 1,
			1, 1, 1, 1, 1,
		];
		let cost_field = CostField::from_costs(&costs, 5, 3).unwrap();
		let mut integration_field = IntegrationField::new(5, 3);
		let processed = integration_field.calculate_field(FieldCell::new(0, 0), &cost_field);
		let result = integration_field.get();

		let actual: [f32; 15] = [
			0.0, 1.0, UNVISITED, 7.0, 8.0,
			1.0, 2.0, UNVISITED, 6.0, 7.0,
			2.0, 3.0, 4.0, 5.0, 6.0,
		];
		assert_eq!(actual.as_slice(), result);
		assert_eq!(13, processed);
	}
	/// An expensive cell is cheaper to walk around than through
	#[test]
	fn field_around_expensive_cell() {
		let costs = [
			1, 9, 1,
			1, 1, 1,
		];
		let cost_field = CostField::from_costs(&costs, 3, 2).unwrap();
		let mut integration_field = IntegrationField::new(3, 2);
		integration_field.calculate_field(FieldCell::new(0, 0), &cost_field);
		let result = integration_field.get();

		let actual: [f32; 6] = [
			0.0, 9.0, 4.0,
			1.0, 2.0, 3.0,
		];
		assert_eq!(actual.as_slice(), result);
	}
	/// Cells sealed off from the target keep their sentinel
	#[test]
	fn unreachable_island() {
		let costs = [
			1, 0, 1,
			0, 0, 1,
			1, 1, 1,
		];
		let cost_field = CostField::from_costs(&costs, 3, 3).unwrap();
		let mut integration_field = IntegrationField::new(3, 3);
		integration_field.calculate_field(FieldCell::new(2, 2), &cost_field);
		assert_eq!(UNVISITED, integration_field.get_field_cell_value(FieldCell::new(0, 0)));
		assert!(!integration_field.is_visited(FieldCell::new(0, 0)));
		assert_eq!(2.0, integration_field.get_field_cell_value(FieldCell::new(2, 0)));
		assert_eq!(Some(2.0), integration_field.get_max_integration());
	}
	#[test]
	fn max_follows_edits() {
		let cost_field = CostField::new(4, 1).unwrap();
		let mut integration_field = IntegrationField::new(4, 1);
		integration_field.calculate_field(FieldCell::new(0, 0), &cost_field);
		assert_eq!(Some(3.0), integration_field.get_max_integration());
		integration_field.set_field_cell_value(9.0, FieldCell::new(1, 0));
		assert_eq!(Some(9.0), integration_field.get_max_integration());
		integration_field.set_field_cell_value(UNVISITED, FieldCell::new(1, 0));
		assert_eq!(Some(3.0), integration_field.get_max_integration());
		integration_field.set_field_cell_value(0.5, FieldCell::new(3, 0));
		assert_eq!(Some(2.0), integration_field.get_max_integration());
		integration_field.set_field_cell_value(7.0, FieldCell::new(8, 0));
		assert_eq!(Some(2.0), integration_field.get_max_integration());
	}
	#[test]
	fn max_matches_full_scan() {
		let costs = [
			1, 3, 1, 1, 1,
			1, 0, 0, 7, 1,
			2, 1, 1, 0, 1,
			1, 0, 4, 1, 1,
		];
		let cost_field = CostField::from_costs(&costs, 5, 4).unwrap();
		let mut integration_field = IntegrationField::new(5, 4);
		integration_field.calculate_field(FieldCell::new(4, 0), &cost_field);
		assert_eq!(integration_field.scan_max_integration(), integration_field.get_max_integration());
	}
	#[test]
	fn out_of_bounds_is_impassable_sentinel() {
		let integration_field = IntegrationField::new(2, 2);
		assert_eq!(IMPASSABLE, integration_field.get_field_cell_value(FieldCell::new(2, 0)));
		assert_eq!(IMPASSABLE, integration_field.get_field_cell_value(FieldCell::new(0, -1)));
	}
	#[test]
	fn reset_field() {
		let cost_field = CostField::new(3, 3).unwrap();
		let mut integration_field = IntegrationField::new(3, 3);
		integration_field.calculate_field(FieldCell::new(1, 1), &cost_field);
		integration_field.reset();
		assert!(integration_field.get().iter().all(|v| *v == UNVISITED));
		assert_eq!(None, integration_field.get_max_integration());
	}
	#[test]
	fn frontier_pops_cheapest_then_oldest() {
		let mut heap = BinaryHeap::new();
		heap.push(Frontier { integration: 3.0, sequence: 0, index: 0 });
		heap.push(Frontier { integration: 1.0, sequence: 1, index: 1 });
		heap.push(Frontier { integration: 1.0, sequence: 2, index: 2 });
		heap.push(Frontier { integration: 2.0, sequence: 3, index: 3 });
		let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|f| f.index).collect();
		assert_eq!(vec![1, 2, 3, 0], order);
	}
}
