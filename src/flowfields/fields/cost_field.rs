//! The CostField contains a 2D array of integer values. The values correspond to the cost of
//! traversing that cell. A value of 1 is the default, any value of `0` or less is a special case
//! that indicates the cell is strictly forbidden from being used in a pathing calculation
//! (effectively saying there is a wall or cliff/impassable terrain there). Any larger value
//! indicates a harder cost of movement which could be from a slope or marshland or others.
//!
//! An example cost field may look:
//!
//! ```text
//!  _______________________________
//! |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  0  |  0  |  0  |  1  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  1  |  1  |  5  |  1  |  1  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! The grid owns a copy of the costs, edits to whatever authored the costs
//! need to be loaded again to have an effect.
//!

use crate::prelude::*;

/// Cost of a cell when nothing else has been specified
pub const DEFAULT_COST: i32 = 1;

/// Per-cell traversal costs
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CostField {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Row-major costs
	costs: Vec<i32>,
}

impl Field<i32> for CostField {
	fn get_dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// Get a reference to the field array
	fn get(&self) -> &[i32] {
		&self.costs
	}
	/// Retrieve a field cell value, outside of the field this is `i32::MAX`
	fn get_field_cell_value(&self, field_cell: FieldCell) -> i32 {
		match field_cell.to_index(self.width, self.height) {
			Some(i) => self.costs[i],
			None => i32::MAX,
		}
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: i32, field_cell: FieldCell) {
		if let Some(i) = field_cell.to_index(self.width, self.height) {
			self.costs[i] = value;
		}
	}
}

impl CostField {
	/// Create a new [CostField] where every cell has the [DEFAULT_COST]
	pub fn new(width: usize, height: usize) -> Result<Self, FlowFieldError> {
		CostField::with_default_cost(width, height, DEFAULT_COST)
	}
	/// Create a new [CostField] where every cell has the cost `cost`
	pub fn with_default_cost(width: usize, height: usize, cost: i32) -> Result<Self, FlowFieldError> {
		let cells = validate_dimensions(width, height)?;
		Ok(CostField {
			width,
			height,
			costs: vec![cost; cells],
		})
	}
	/// Create a [CostField] from a copy of a flattened row-major array of costs
	pub fn from_costs(costs: &[i32], width: usize, height: usize) -> Result<Self, FlowFieldError> {
		let cells = validate_dimensions(width, height)?;
		if costs.len() != cells {
			return Err(FlowFieldError::CostLengthMismatch {
				expected: cells,
				actual: costs.len(),
			});
		}
		Ok(CostField {
			width,
			height,
			costs: costs.to_vec(),
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
	/// A cell with a cost of `0` or less cannot be traversed. Cells outside of
	/// the field report the `i32::MAX` sentinel cost and so are not impassable,
	/// callers must check bounds first
	pub fn is_impassable(&self, field_cell: FieldCell) -> bool {
		self.get_field_cell_value(field_cell) <= 0
	}
	/// The in-bounds orthogonal neighbours of a cell which can be traversed, in the order North, East, South, West
	pub fn get_passable_orthogonal_neighbours(&self, field_cell: FieldCell) -> Vec<FieldCell> {
		let mut neighbours =
			Ordinal::get_orthogonal_cell_neighbours(field_cell, self.width, self.height);
		neighbours.retain(|n| !self.is_impassable(*n));
		neighbours
	}
	/// Iterate over every cell that can be traversed
	pub fn passable_cells(&self) -> impl Iterator<Item = FieldCell> + '_ {
		self.costs
			.iter()
			.enumerate()
			.filter(|(_, cost)| **cost > 0)
			.map(|(i, _)| FieldCell::from_index(i, self.width))
	}
	/// From a `ron` file generate the [CostField]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, FlowFieldError> {
		let file = std::fs::File::open(path)?;
		let field: CostField = ron::de::from_reader(file)?;
		// serde doesn't know about the length invariant
		CostField::from_costs(&field.costs, field.width, field.height)
	}
	/// From a `csv` file generate the [CostField], each record is a row of the
	/// grid with the first record being row `0`
	#[cfg(feature = "csv")]
	pub fn from_csv(path: &str) -> Result<Self, FlowFieldError> {
		let mut reader = csv::ReaderBuilder::new()
			.has_headers(false)
			.trim(csv::Trim::All)
			.from_path(path)?;
		let mut costs = Vec::new();
		let mut width = 0;
		let mut height = 0;
		for (row, record) in reader.deserialize::<Vec<i32>>().enumerate() {
			let record = record?;
			if row == 0 {
				width = record.len();
			} else if record.len() != width {
				return Err(FlowFieldError::RaggedCsvRow {
					row,
					expected: width,
					actual: record.len(),
				});
			}
			costs.extend(record);
			height += 1;
		}
		CostField::from_costs(&costs, width, height)
	}
}

/// A grid needs at least one cell and no more than can be counted, returns the number of cells
fn validate_dimensions(width: usize, height: usize) -> Result<usize, FlowFieldError> {
	match width.checked_mul(height) {
		Some(cells) if cells > 0 => Ok(cells),
		_ => Err(FlowFieldError::InvalidDimensions { width, height }),
	}
}
