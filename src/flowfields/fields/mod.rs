//! The kinds of fields used by the algorithm
//!
//! Each field is a flat row-major array of `width * height` values indexed by
//! `row * width + column`. Reads of cells outside of a field return a sentinel
//! value chosen by the field and writes outside of a field are ignored, this
//! lets neighbour and interpolation arithmetic run without guarding the edges
//!

pub mod cost_field;
pub mod flow_field;
pub mod integration_field;

/// Defines required access to field arrays
pub trait Field<T: Copy> {
	/// Number of `(columns, rows)` in the field
	fn get_dimensions(&self) -> (usize, usize);
	/// Get a reference to the field array
	fn get(&self) -> &[T];
	/// Retrieve a field cell value, cells outside of the field produce a sentinel
	fn get_field_cell_value(&self, field_cell: FieldCell) -> T;
	/// Set a field cell to a value, cells outside of the field are ignored
	fn set_field_cell_value(&mut self, value: T, field_cell: FieldCell);
	/// Is the cell inside of the field
	fn is_valid_position(&self, field_cell: FieldCell) -> bool {
		let (width, height) = self.get_dimensions();
		field_cell.is_within(width, height)
	}
}

/// ID of a cell within a field, `(column, row)` which is equivalent to `(x, y)`.
///
/// Coordinates are signed so that neighbour offsets and interpolation corners
/// can step off the edge of a field and simply be treated as out of bounds
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct FieldCell((i32, i32));

impl FieldCell {
	/// Create a new instance of [FieldCell]
	pub fn new(column: i32, row: i32) -> Self {
		FieldCell((column, row))
	}
	/// Get the `(column, row)` tuple
	pub fn get_column_row(&self) -> (i32, i32) {
		self.0
	}
	/// Get the column
	pub fn get_column(&self) -> i32 {
		self.0 .0
	}
	/// Get the row
	pub fn get_row(&self) -> i32 {
		self.0 .1
	}
	/// Is the cell inside of a `width` by `height` grid
	pub fn is_within(&self, width: usize, height: usize) -> bool {
		self.get_column() >= 0
			&& self.get_row() >= 0
			&& (self.get_column() as usize) < width
			&& (self.get_row() as usize) < height
	}
	/// Position of the cell within a row-major array, [None] when outside of the grid
	pub fn to_index(&self, width: usize, height: usize) -> Option<usize> {
		if self.is_within(width, height) {
			Some(self.get_row() as usize * width + self.get_column() as usize)
		} else {
			None
		}
	}
	/// Convert a row-major array index back into a [FieldCell]
	pub fn from_index(index: usize, width: usize) -> Self {
		FieldCell::new((index % width) as i32, (index / width) as i32)
	}
}

impl From<(i32, i32)> for FieldCell {
	fn from(value: (i32, i32)) -> Self {
		FieldCell(value)
	}
}
