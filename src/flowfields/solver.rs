//! Orchestrates the generation of a [FlowFieldGrid]s fields whenever the
//! target changes.
//!
//! A grid begins in [SolverState::NoTarget] where every cell is [UNVISITED]
//! with no direction. A successful [FlowFieldGrid::set_target] fully
//! recalculates both the [IntegrationField] and [FlowField] from scratch and
//! moves it to [SolverState::TargetSet], [FlowFieldGrid::clear_target] returns
//! it to [SolverState::NoTarget]. A target which is outside of the grid or
//! impassable is rejected and leaves the grid as it was.
//!

use std::time::{Duration, Instant};

use crate::prelude::*;
use bevy::prelude::*;

/// Whether a grid currently has fields leading somewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
	/// Fields are unvisited/zero
	NoTarget,
	/// Fields lead to the target cell
	TargetSet(FieldCell),
}

/// Statistics of recalculating the fields for a target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolveReport {
	/// Number of cells reached by the wavefront
	processed_cells: usize,
	/// Number of cells given a direction
	directed_cells: usize,
	/// Time spent building the [IntegrationField]
	integration_time: Duration,
	/// Time spent building the [FlowField]
	direction_time: Duration,
}

impl SolveReport {
	/// Number of cells reached by the wavefront, including the target
	pub fn get_processed_cells(&self) -> usize {
		self.processed_cells
	}
	/// Number of cells given a direction
	pub fn get_directed_cells(&self) -> usize {
		self.directed_cells
	}
	/// Time spent building the [IntegrationField]
	pub fn get_integration_time(&self) -> Duration {
		self.integration_time
	}
	/// Time spent building the [FlowField]
	pub fn get_direction_time(&self) -> Duration {
		self.direction_time
	}
}

impl FlowFieldGrid {
	/// Current state of the solver
	pub fn get_state(&self) -> SolverState {
		match self.target {
			Some(target) => SolverState::TargetSet(target),
			None => SolverState::NoTarget,
		}
	}
	/// The cell the fields lead to, [None] when no target is set
	pub fn get_target(&self) -> Option<FieldCell> {
		self.target
	}
	/// Check that a cell could be used as a target
	pub fn validate_target(&self, target: FieldCell) -> Result<(), FlowFieldError> {
		if !self.is_valid_position(target) {
			return Err(FlowFieldError::TargetOutOfBounds {
				column: target.get_column(),
				row: target.get_row(),
			});
		}
		if self.is_impassable(target) {
			return Err(FlowFieldError::TargetImpassable {
				column: target.get_column(),
				row: target.get_row(),
			});
		}
		Ok(())
	}
	/// Point the grid at a new target and recalculate both fields. A rejected
	/// target leaves the existing fields untouched
	pub fn set_target(&mut self, target: FieldCell) -> Result<SolveReport, FlowFieldError> {
		self.validate_target(target)?;
		self.target = Some(target);
		Ok(self.solve(target))
	}
	/// Forget the target and reset both fields
	pub fn clear_target(&mut self) {
		self.target = None;
		self.reset_integration();
		self.reset_direction();
		debug!("Cleared flowfield target");
	}
	/// Recalculate the fields for the current target, used after costs have
	/// been edited. Returns `Ok(None)` when there is no target. If the edits
	/// have made the target impassable the target is cleared and the reason
	/// returned
	pub fn refresh(&mut self) -> Result<Option<SolveReport>, FlowFieldError> {
		let Some(target) = self.target else {
			return Ok(None);
		};
		if let Err(e) = self.validate_target(target) {
			self.clear_target();
			return Err(e);
		}
		Ok(Some(self.solve(target)))
	}
	/// Run both generation passes for a validated target
	fn solve(&mut self, target: FieldCell) -> SolveReport {
		let start = Instant::now();
		let processed_cells = self.generate_integration_field(target);
		let integration_time = start.elapsed();
		let start = Instant::now();
		let directed_cells = self.generate_direction_field();
		let direction_time = start.elapsed();
		debug!(
			"Integration field to {:?} reached {} cells in {:?}, directed {} cells in {:?}",
			target.get_column_row(),
			processed_cells,
			integration_time,
			directed_cells,
			direction_time
		);
		SolveReport {
			processed_cells,
			directed_cells,
			integration_time,
			direction_time,
		}
	}
}
