//! Logic for pointing every [FlowFieldGrid] at a new target or clearing it
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Request that every grid solves for a new target
#[derive(Event, Clone, Copy, Debug)]
pub struct EventSetTarget(FieldCell);

impl EventSetTarget {
	/// Create a new instance of [EventSetTarget]
	#[cfg(not(tarpaulin_include))]
	pub fn new(target: FieldCell) -> Self {
		EventSetTarget(target)
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_target(&self) -> FieldCell {
		self.0
	}
}

/// Request that every grid forgets its target
#[derive(Event, Clone, Copy, Debug)]
pub struct EventClearTarget;

/// Emitted when a grid refuses a target, either when it is requested or when a
/// cost edit makes the current target impassable
#[derive(Event, Clone, Debug)]
pub struct EventTargetRejected {
	/// The refused target
	cell: FieldCell,
	/// Why it was refused
	reason: FlowFieldError,
}

impl EventTargetRejected {
	/// Create a new instance of [EventTargetRejected]
	#[cfg(not(tarpaulin_include))]
	pub fn new(cell: FieldCell, reason: FlowFieldError) -> Self {
		EventTargetRejected { cell, reason }
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_cell(&self) -> FieldCell {
		self.cell
	}
	#[cfg(not(tarpaulin_include))]
	pub fn get_reason(&self) -> &FlowFieldError {
		&self.reason
	}
}

/// Read [EventClearTarget] and reset every grid
#[cfg(not(tarpaulin_include))]
pub fn process_clear_requests(
	mut events: EventReader<EventClearTarget>,
	mut query: Query<&mut FlowFieldGrid>,
) {
	if events.read().count() == 0 {
		return;
	}
	for mut grid in query.iter_mut() {
		grid.clear_target();
	}
}

/// Read [EventSetTarget] and solve every grid for the newest target
#[cfg(not(tarpaulin_include))]
pub fn process_target_requests(
	mut events: EventReader<EventSetTarget>,
	mut query: Query<&mut FlowFieldGrid>,
	mut event_rejected: EventWriter<EventTargetRejected>,
) {
	// each request replaces the last so only the newest needs solving
	let Some(event) = events.read().last() else {
		return;
	};
	let target = event.get_target();
	trace!("Target requested at {:?}", target.get_column_row());
	for mut grid in query.iter_mut() {
		match grid.set_target(target) {
			Ok(report) => {
				trace!("Target solved over {} cells", report.get_processed_cells());
			}
			Err(reason) => {
				warn!("Rejected target {:?}: {}", target.get_column_row(), reason);
				event_rejected.write(EventTargetRejected::new(target, reason));
			}
		}
	}
}
