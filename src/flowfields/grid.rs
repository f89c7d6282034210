//! A [FlowFieldGrid] owns a copy of a [CostField] along with the
//! [IntegrationField] and [FlowField] derived from it for the current target.
//!
//! Every accessor takes signed coordinates, reading a cell outside of the grid
//! returns the sentinel value of the field (`i32::MAX` for costs, [IMPASSABLE]
//! for integration and [Vec2::ZERO] for directions) and writing a cell
//! outside of the grid does nothing.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The cost, integration and direction fields of a grid plus its current target
#[derive(Component, Clone, Debug)]
pub struct FlowFieldGrid {
	/// Traversal costs copied from the map
	pub(super) cost_field: CostField,
	/// Cumulative cost to the target
	pub(super) integration_field: IntegrationField,
	/// Direction of travel towards the target
	pub(super) flow_field: FlowField,
	/// The cell the fields lead to, [None] until a target is set
	pub(super) target: Option<FieldCell>,
}

impl FlowFieldGrid {
	/// Create a grid of `width` by `height` cells which all have the [DEFAULT_COST]
	pub fn new(width: usize, height: usize) -> Result<Self, FlowFieldError> {
		Ok(FlowFieldGrid::from_cost_field(CostField::new(width, height)?))
	}
	/// Create a grid from a copy of a flattened row-major array of costs, the
	/// length of `costs` must be `width * height`
	pub fn load(costs: &[i32], width: usize, height: usize) -> Result<Self, FlowFieldError> {
		let cost_field = CostField::from_costs(costs, width, height)?;
		debug!("Loaded cost data of {}x{}", width, height);
		Ok(FlowFieldGrid::from_cost_field(cost_field))
	}
	/// Create a grid around an existing [CostField]
	pub fn from_cost_field(cost_field: CostField) -> Self {
		let (width, height) = cost_field.get_dimensions();
		FlowFieldGrid {
			cost_field,
			integration_field: IntegrationField::new(width, height),
			flow_field: FlowField::new(width, height),
			target: None,
		}
	}
	/// Replace the costs of the grid with a fresh copy from the map, the
	/// dimensions may change. Any target is cleared. When the new data is
	/// invalid the grid is left untouched
	pub fn reload_costs(
		&mut self,
		costs: &[i32],
		width: usize,
		height: usize,
	) -> Result<(), FlowFieldError> {
		*self = FlowFieldGrid::load(costs, width, height)?;
		Ok(())
	}
	/// Number of columns
	pub fn get_width(&self) -> usize {
		self.cost_field.get_width()
	}
	/// Number of rows
	pub fn get_height(&self) -> usize {
		self.cost_field.get_height()
	}
	/// Get a reference to the [CostField]
	pub fn get_cost_field(&self) -> &CostField {
		&self.cost_field
	}
	/// Get a reference to the [IntegrationField]
	pub fn get_integration_field(&self) -> &IntegrationField {
		&self.integration_field
	}
	/// Get a reference to the [FlowField]
	pub fn get_flow_field(&self) -> &FlowField {
		&self.flow_field
	}
	/// Cost of a cell, `i32::MAX` outside of the grid
	pub fn get_cost(&self, field_cell: FieldCell) -> i32 {
		self.cost_field.get_field_cell_value(field_cell)
	}
	/// Change the cost of a cell. The derived fields are not recalculated, see [FlowFieldGrid::refresh]
	pub fn set_cost(&mut self, cost: i32, field_cell: FieldCell) {
		self.cost_field.set_field_cell_value(cost, field_cell);
	}
	/// Integration cost of a cell, [UNVISITED] if it hasn't been reached and [IMPASSABLE] outside of the grid
	pub fn get_integration(&self, field_cell: FieldCell) -> f32 {
		self.integration_field.get_field_cell_value(field_cell)
	}
	/// Overwrite the integration cost of a cell
	pub fn set_integration(&mut self, integration: f32, field_cell: FieldCell) {
		self.integration_field
			.set_field_cell_value(integration, field_cell);
	}
	/// Direction of a cell, [Vec2::ZERO] when it has none or is outside of the grid
	pub fn get_direction(&self, field_cell: FieldCell) -> Vec2 {
		self.flow_field.get_field_cell_value(field_cell)
	}
	/// Overwrite the direction of a cell
	pub fn set_direction(&mut self, direction: Vec2, field_cell: FieldCell) {
		self.flow_field.set_field_cell_value(direction, field_cell);
	}
	/// Is the cell inside of the grid
	pub fn is_valid_position(&self, field_cell: FieldCell) -> bool {
		self.cost_field.is_valid_position(field_cell)
	}
	/// Does the cell have a cost of `0` or less. Cells outside of the grid are
	/// not impassable, check [FlowFieldGrid::is_valid_position] first
	pub fn is_impassable(&self, field_cell: FieldCell) -> bool {
		self.cost_field.is_impassable(field_cell)
	}
	/// The North, East, South and West neighbours of a cell which are inside of the grid and passable
	pub fn get_neighbours(&self, field_cell: FieldCell) -> Vec<FieldCell> {
		self.cost_field.get_passable_orthogonal_neighbours(field_cell)
	}
	/// Mark every cell as [UNVISITED]
	pub fn reset_integration(&mut self) {
		self.integration_field.reset();
	}
	/// Clear every direction to [Vec2::ZERO]
	pub fn reset_direction(&mut self) {
		self.flow_field.reset();
	}
	/// Grow the [IntegrationField] out from `target`, which should be a
	/// passable cell of the grid. Returns the number of cells reached
	pub fn generate_integration_field(&mut self, target: FieldCell) -> usize {
		self.integration_field
			.calculate_field(target, &self.cost_field)
	}
	/// Derive the [FlowField] from the current [IntegrationField]. Returns the
	/// number of cells given a direction
	pub fn generate_direction_field(&mut self) -> usize {
		self.flow_field
			.calculate(&self.integration_field, &self.cost_field)
	}
	/// Integration cost of a cell scaled into `[0, 1]` by the most expensive
	/// reached cell, useful for heatmaps. [None] for cells which haven't been
	/// reached or lie outside of the grid
	pub fn get_normalised_integration(&self, field_cell: FieldCell) -> Option<f32> {
		if !self.integration_field.is_visited(field_cell) {
			return None;
		}
		let value = self.get_integration(field_cell);
		match self.integration_field.get_max_integration() {
			Some(max) if max > 0.0 => Some((value / max).clamp(0.0, 1.0)),
			_ => Some(0.0),
		}
	}
	/// A read-only view for sampling directions at fractional grid coordinates
	pub fn get_sampler(&self) -> FlowSampler<'_> {
		FlowSampler::new(&self.flow_field)
	}
	/// Bilinearly interpolated direction at fractional grid coordinates, see [FlowSampler]
	pub fn sample_direction(&self, x: f32, y: f32) -> Vec2 {
		self.get_sampler().sample_direction(x, y)
	}
}
