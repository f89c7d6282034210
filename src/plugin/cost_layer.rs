//! Logic for handling changes to the [CostField] of each [FlowFieldGrid] and
//! recalculating the fields of any grid which has a target
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Used to update the cost of a cell
#[derive(Event, Clone, Copy, Debug)]
pub struct EventUpdateCostCell {
	/// FieldCell to update
	cell: FieldCell,
	/// The value the field cell should be assigned
	cost: i32,
}

impl EventUpdateCostCell {
	/// Create a new instance of [EventUpdateCostCell]
	#[cfg(not(tarpaulin_include))]
	pub fn new(cell: FieldCell, cost: i32) -> Self {
		EventUpdateCostCell { cell, cost }
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_cell(&self) -> FieldCell {
		self.cell
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_cost_value(&self) -> i32 {
		self.cost
	}
}

/// Read [EventUpdateCostCell], update the costs of every grid and then solve
/// each grid with a target once
#[cfg(not(tarpaulin_include))]
pub fn process_cost_updates(
	mut events: EventReader<EventUpdateCostCell>,
	mut query: Query<&mut FlowFieldGrid>,
	mut event_rejected: EventWriter<EventTargetRejected>,
) {
	// coalesce edits so a grid is only solved once per tick
	let edits: Vec<EventUpdateCostCell> = events.read().copied().collect();
	if edits.is_empty() {
		return;
	}
	for mut grid in query.iter_mut() {
		for edit in edits.iter() {
			trace!(
				"Cost of {:?} set to {}",
				edit.get_cell().get_column_row(),
				edit.get_cost_value()
			);
			grid.set_cost(edit.get_cost_value(), edit.get_cell());
		}
		let target = grid.get_target();
		if let (Err(reason), Some(target)) = (grid.refresh(), target) {
			warn!(
				"Cost edits invalidated target {:?}: {}",
				target.get_column_row(),
				reason
			);
			event_rejected.write(EventTargetRejected::new(target, reason));
		}
	}
}
