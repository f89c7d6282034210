//! Bundles the components which describe a pathable map: the
//! [FlowFieldGrid] and the [MapDimensions] relating it to world space
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The number of columns and rows of the map along with the world space size
/// of a single cell. Cell `(0, 0)` has its origin at the world origin with
/// columns extending along `+x` and rows along `+y`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapDimensions {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Length of the side of a cell in world units
	cell_size: f32,
}

impl MapDimensions {
	/// Create a new instance of [MapDimensions]. The grid needs at least one
	/// cell and `cell_size` must be positive and finite
	pub fn new(width: usize, height: usize, cell_size: f32) -> Result<Self, FlowFieldError> {
		if width == 0 || height == 0 {
			return Err(FlowFieldError::InvalidDimensions { width, height });
		}
		if !cell_size.is_finite() || cell_size <= 0.0 {
			return Err(FlowFieldError::InvalidCellSize(cell_size));
		}
		Ok(MapDimensions {
			width,
			height,
			cell_size,
		})
	}
	/// Number of columns
	pub fn get_width(&self) -> usize {
		self.width
	}
	/// Number of rows
	pub fn get_height(&self) -> usize {
		self.height
	}
	/// Length of the side of a cell in world units
	pub fn get_cell_size(&self) -> f32 {
		self.cell_size
	}
	/// Convert a world position into fractional grid coordinates
	pub fn world_to_grid(&self, world_position: Vec2) -> Vec2 {
		world_position / self.cell_size
	}
	/// Find the [FieldCell] containing a world position, [None] when it lies outside of the map
	pub fn get_field_cell_from_world(&self, world_position: Vec2) -> Option<FieldCell> {
		let grid = self.world_to_grid(world_position).floor();
		let field_cell = FieldCell::new(grid.x as i32, grid.y as i32);
		if field_cell.is_within(self.width, self.height) {
			Some(field_cell)
		} else {
			None
		}
	}
	/// World position of the origin of a cell
	pub fn grid_to_world(&self, field_cell: FieldCell) -> Vec2 {
		Vec2::new(
			field_cell.get_column() as f32,
			field_cell.get_row() as f32,
		) * self.cell_size
	}
}

/// Everything needed to pathfind across a map
#[derive(Bundle)]
pub struct FlowFieldGridBundle {
	/// The fields
	grid: FlowFieldGrid,
	/// World space relationship
	map_dimensions: MapDimensions,
}

impl FlowFieldGridBundle {
	/// Create a new instance of [FlowFieldGridBundle] where every cell has the [DEFAULT_COST]
	pub fn new(width: usize, height: usize, cell_size: f32) -> Result<Self, FlowFieldError> {
		let map_dimensions = MapDimensions::new(width, height, cell_size)?;
		let grid = FlowFieldGrid::new(width, height)?;
		Ok(FlowFieldGridBundle {
			grid,
			map_dimensions,
		})
	}
	/// Create a new instance of [FlowFieldGridBundle] from a flattened row-major array of costs
	pub fn from_costs(
		costs: &[i32],
		width: usize,
		height: usize,
		cell_size: f32,
	) -> Result<Self, FlowFieldError> {
		let map_dimensions = MapDimensions::new(width, height, cell_size)?;
		let grid = FlowFieldGrid::load(costs, width, height)?;
		Ok(FlowFieldGridBundle {
			grid,
			map_dimensions,
		})
	}
	/// Create a new instance of [FlowFieldGridBundle] where the [CostField] is read from a `ron` file
	#[cfg(feature = "ron")]
	pub fn new_from_disk(path: &str, cell_size: f32) -> Result<Self, FlowFieldError> {
		let cost_field = CostField::from_ron(path)?;
		let (width, height) = cost_field.get_dimensions();
		let map_dimensions = MapDimensions::new(width, height, cell_size)?;
		Ok(FlowFieldGridBundle {
			grid: FlowFieldGrid::from_cost_field(cost_field),
			map_dimensions,
		})
	}
	/// Get a reference to the grid
	pub fn get_grid(&self) -> &FlowFieldGrid {
		&self.grid
	}
	/// Get the map dimensions
	pub fn get_map_dimensions(&self) -> MapDimensions {
		self.map_dimensions
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn valid_map_dimensions() {
		let result = MapDimensions::new(10, 4, 0.5);
		assert!(result.is_ok());
	}
	#[test]
	fn invalid_map_dimensions() {
		let result = MapDimensions::new(0, 3, 1.0);
		assert_eq!(
			Err(FlowFieldError::InvalidDimensions {
				width: 0,
				height: 3
			}),
			result
		);
	}
	#[test]
	fn invalid_cell_size() {
		assert!(MapDimensions::new(3, 3, 0.0).is_err());
		assert!(MapDimensions::new(3, 3, -1.0).is_err());
		assert!(MapDimensions::new(3, 3, f32::INFINITY).is_err());
		assert!(MapDimensions::new(3, 3, f32::NAN).is_err());
	}
	#[test]
	fn world_conversions() {
		let dimensions = MapDimensions::new(10, 10, 2.0).unwrap();
		assert_eq!(Vec2::new(1.5, 3.0), dimensions.world_to_grid(Vec2::new(3.0, 6.0)));
		assert_eq!(
			Vec2::new(8.0, 2.0),
			dimensions.grid_to_world(FieldCell::new(4, 1))
		);
		assert_eq!(
			Some(FieldCell::new(1, 3)),
			dimensions.get_field_cell_from_world(Vec2::new(3.0, 6.0))
		);
		assert_eq!(
			None,
			dimensions.get_field_cell_from_world(Vec2::new(-0.1, 6.0))
		);
		assert_eq!(
			None,
			dimensions.get_field_cell_from_world(Vec2::new(20.0, 6.0))
		);
	}
	#[test]
	fn new_bundle() {
		let bundle = FlowFieldGridBundle::new(30, 20, 1.0).unwrap();
		assert_eq!((30, 20), bundle.get_grid().get_cost_field().get_dimensions());
		assert_eq!(20, bundle.get_map_dimensions().get_height());
	}
	#[test]
	fn bundle_from_costs() {
		let bundle = FlowFieldGridBundle::from_costs(&[1, 0, 1, 1], 2, 2, 1.0).unwrap();
		assert!(bundle.get_grid().is_impassable(FieldCell::new(1, 0)));
		let result = FlowFieldGridBundle::from_costs(&[1, 0, 1], 2, 2, 1.0);
		assert!(result.is_err());
	}
	#[test]
	#[cfg(feature = "ron")]
	fn bundle_from_disk() {
		let path = env!("CARGO_MANIFEST_DIR").to_string() + "/assets/cost_field.ron";
		let bundle = FlowFieldGridBundle::new_from_disk(&path, 1.0).unwrap();
		assert_eq!(6, bundle.get_map_dimensions().get_width());
		assert_eq!(4, bundle.get_map_dimensions().get_height());
	}
}
