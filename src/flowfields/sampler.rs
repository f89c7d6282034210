//! Agents rarely sit exactly on a cell so a [FlowSampler] reads the
//! [FlowField] at fractional grid coordinates, blending the directions of the
//! four cells surrounding the position.
//!
//! ```text
//!   (x0, y1) ________ (x1, y1)
//!           |        |
//!           |   *    |   * = (x, y)
//!           |________|
//!   (x0, y0)          (x1, y0)
//! ```
//!
//! Corners outside of the grid count as [Vec2::ZERO], so positions near or
//! beyond an edge produce a weaker blend which is normalised again anyway, or
//! zero when nothing around the position has a direction. Sampling only reads
//! the field so any number of agents may sample concurrently.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Read-only view of a [FlowField] for continuous position queries
#[derive(Clone, Copy, Debug)]
pub struct FlowSampler<'a> {
	/// Field being sampled
	flow_field: &'a FlowField,
}

impl<'a> FlowSampler<'a> {
	/// Create a new instance of [FlowSampler]
	pub fn new(flow_field: &'a FlowField) -> Self {
		FlowSampler { flow_field }
	}
	/// Bilinearly interpolate the directions of the four cells around the
	/// fractional grid coordinates `(x, y)` and normalise the result. Returns
	/// [Vec2::ZERO] when there is no direction to follow
	pub fn sample_direction(&self, x: f32, y: f32) -> Vec2 {
		let x0 = x.floor() as i32;
		let y0 = y.floor() as i32;
		// huge or infinite input saturates to the edge of i32, which is off any grid
		let x1 = x0.saturating_add(1);
		let y1 = y0.saturating_add(1);
		let fx = x - x0 as f32;
		let fy = y - y0 as f32;

		let dir_00 = self.corner(x0, y0);
		let dir_10 = self.corner(x1, y0);
		let dir_01 = self.corner(x0, y1);
		let dir_11 = self.corner(x1, y1);

		let bottom = dir_00.lerp(dir_10, fx);
		let top = dir_01.lerp(dir_11, fx);
		bottom.lerp(top, fy).normalize_or_zero()
	}
	/// Sample at a fractional grid position, see [FlowSampler::sample_direction]
	pub fn sample(&self, grid_position: Vec2) -> Vec2 {
		self.sample_direction(grid_position.x, grid_position.y)
	}
	/// Sample at a position in world space which is converted into grid space with `dimensions`
	pub fn sample_world(&self, world_position: Vec2, dimensions: &MapDimensions) -> Vec2 {
		self.sample(dimensions.world_to_grid(world_position))
	}
	/// Direction of a corner cell
	fn corner(&self, column: i32, row: i32) -> Vec2 {
		self.flow_field
			.get_field_cell_value(FieldCell::new(column, row))
	}
}
