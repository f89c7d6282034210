//! Failures which can be reported back to a caller of the grid. Out of bounds
//! reads and writes of individual cells are not errors, they resolve to
//! sentinel values and no-ops instead
//!

use thiserror::Error;

/// Reasons a grid operation was refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowFieldError {
	/// A grid must be at least one cell wide and one cell high
	#[error("grid dimensions must be positive, got {width}x{height}")]
	InvalidDimensions {
		/// Requested number of columns
		width: usize,
		/// Requested number of rows
		height: usize,
	},
	/// The flattened cost array doesn't describe a `width * height` grid
	#[error("cost array holds {actual} values, expected {expected}")]
	CostLengthMismatch {
		/// `width * height`
		expected: usize,
		/// Length of the supplied array
		actual: usize,
	},
	/// The size of a grid cell in world space must be positive and finite
	#[error("cell size must be positive and finite, got {0}")]
	InvalidCellSize(f32),
	/// A target was requested outside of the grid
	#[error("target ({column}, {row}) lies outside of the grid")]
	TargetOutOfBounds {
		/// Column of the target
		column: i32,
		/// Row of the target
		row: i32,
	},
	/// A target was requested on a cell with a cost of `0` or less
	#[error("target ({column}, {row}) is impassable")]
	TargetImpassable {
		/// Column of the target
		column: i32,
		/// Row of the target
		row: i32,
	},
	/// A row of a csv cost file has a different number of columns to the first row
	#[error("csv row {row} has {actual} columns, expected {expected}")]
	RaggedCsvRow {
		/// Index of the offending row
		row: usize,
		/// Number of columns of the first row
		expected: usize,
		/// Number of columns found
		actual: usize,
	},
	/// A cost file could not be opened
	#[error("failed reading cost file: {0}")]
	Io(String),
	/// A `ron` cost file could not be deserialised
	#[cfg(feature = "ron")]
	#[error("failed deserialising CostField: {0}")]
	Ron(String),
	/// A `csv` cost file could not be deserialised
	#[cfg(feature = "csv")]
	#[error("failed deserialising csv CostField: {0}")]
	Csv(String),
}

impl From<std::io::Error> for FlowFieldError {
	fn from(e: std::io::Error) -> Self {
		FlowFieldError::Io(e.to_string())
	}
}

#[cfg(feature = "ron")]
impl From<ron::error::SpannedError> for FlowFieldError {
	fn from(e: ron::error::SpannedError) -> Self {
		FlowFieldError::Ron(e.to_string())
	}
}

#[cfg(feature = "csv")]
impl From<csv::Error> for FlowFieldError {
	fn from(e: csv::Error) -> Self {
		FlowFieldError::Csv(e.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn readable_messages() {
		let e = FlowFieldError::CostLengthMismatch {
			expected: 25,
			actual: 24,
		};
		assert_eq!("cost array holds 24 values, expected 25", e.to_string());
		let e = FlowFieldError::TargetImpassable { column: 3, row: -1 };
		assert_eq!("target (3, -1) is impassable", e.to_string());
	}
}
