//! Useful structures and tools used by the fields
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Weighting bias applied to the distance of a neighbour when smoothing a
/// [crate::prelude::FlowField] direction, `1 / (distance + bias)`
pub const SMOOTHING_DISTANCE_BIAS: f32 = 0.1;

/// Convenience way of accessing the 4 sides of a grid cell used by the [crate::prelude::IntegrationField] and the 8 directions
/// of movement in [crate::prelude::FlowField]
///
/// Rows grow towards the North, columns grow towards the East
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Ordinal {
	North,
	NorthEast,
	East,
	SouthEast,
	South,
	SouthWest,
	West,
	NorthWest,
	/// Special case, used to indicate a cell without a direction
	Zero,
}

impl Ordinal {
	/// The orthogonal directions in the order neighbours are visited by the wavefront
	pub const ORTHOGONAL: [Ordinal; 4] = [Ordinal::North, Ordinal::East, Ordinal::South, Ordinal::West];
	/// All 8 directions of movement, clockwise from North. This order decides
	/// which neighbour wins when several share the cheapest integration cost
	pub const ALL: [Ordinal; 8] = [
		Ordinal::North,
		Ordinal::NorthEast,
		Ordinal::East,
		Ordinal::SouthEast,
		Ordinal::South,
		Ordinal::SouthWest,
		Ordinal::West,
		Ordinal::NorthWest,
	];
	/// The `(column, row)` step taken when moving one cell in this direction
	pub fn offset(&self) -> (i32, i32) {
		match self {
			Ordinal::North => (0, 1),
			Ordinal::NorthEast => (1, 1),
			Ordinal::East => (1, 0),
			Ordinal::SouthEast => (1, -1),
			Ordinal::South => (0, -1),
			Ordinal::SouthWest => (-1, -1),
			Ordinal::West => (-1, 0),
			Ordinal::NorthWest => (-1, 1),
			Ordinal::Zero => (0, 0),
		}
	}
	/// The offset as a vector, diagonals are not normalised
	pub fn as_vec2(&self) -> Vec2 {
		let (x, y) = self.offset();
		Vec2::new(x as f32, y as f32)
	}
	/// Euclidean length of the offset, `1` for orthogonals and `√2` for diagonals
	pub fn distance(&self) -> f32 {
		self.as_vec2().length()
	}
	/// Weight of a neighbour in this direction when smoothing directions
	pub fn smoothing_weight(&self) -> f32 {
		1.0 / (self.distance() + SMOOTHING_DISTANCE_BIAS)
	}
	/// Step from `field_cell` in this direction, the result may lie outside of a grid
	pub fn step(&self, field_cell: FieldCell) -> FieldCell {
		let (x, y) = self.offset();
		FieldCell::new(field_cell.get_column() + x, field_cell.get_row() + y)
	}
	/// Based on a grid cells `(column, row)` position find its in-bounds orthogonal neighbours (up to 4)
	pub fn get_orthogonal_cell_neighbours(
		field_cell: FieldCell,
		width: usize,
		height: usize,
	) -> Vec<FieldCell> {
		Ordinal::ORTHOGONAL
			.iter()
			.map(|ord| ord.step(field_cell))
			.filter(|n| n.is_within(width, height))
			.collect()
	}
	/// Based on a grid cells `(column, row)` position find all in-bounds neighbours including diagonal directions, paired with the [Ordinal] leading to them
	pub fn get_all_cell_neighbours(
		field_cell: FieldCell,
		width: usize,
		height: usize,
	) -> Vec<(Ordinal, FieldCell)> {
		Ordinal::ALL
			.iter()
			.map(|ord| (*ord, ord.step(field_cell)))
			.filter(|(_, n)| n.is_within(width, height))
			.collect()
	}
	/// For two cells next to each other it can be useful to find the [Ordinal] pointing from the `source` to the `target`. Returns [None] if they are not adjacent
	pub fn cell_to_cell_direction(target: FieldCell, source: FieldCell) -> Option<Self> {
		let direction = (
			target.get_column() - source.get_column(),
			target.get_row() - source.get_row(),
		);
		Ordinal::ALL
			.iter()
			.find(|ord| ord.offset() == direction)
			.copied()
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn ordinal_grid_cell_neighbours() {
		let cell = FieldCell::new(0, 0);
		let result = Ordinal::get_orthogonal_cell_neighbours(cell, 10, 10);
		let actual = vec![FieldCell::new(0, 1), FieldCell::new(1, 0)];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_grid_cell_neighbours2() {
		let cell = FieldCell::new(9, 9);
		let result = Ordinal::get_orthogonal_cell_neighbours(cell, 10, 10);
		let actual = vec![FieldCell::new(9, 8), FieldCell::new(8, 9)];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_grid_cell_neighbours3() {
		let cell = FieldCell::new(4, 4);
		let result = Ordinal::get_orthogonal_cell_neighbours(cell, 10, 10);
		let actual = vec![
			FieldCell::new(4, 5),
			FieldCell::new(5, 4),
			FieldCell::new(4, 3),
			FieldCell::new(3, 4),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_grid_cell_neighbours_outside() {
		let cell = FieldCell::new(-1, 0);
		let result = Ordinal::get_orthogonal_cell_neighbours(cell, 3, 3);
		let actual = vec![FieldCell::new(0, 0)];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_all_neighbours_corner() {
		let cell = FieldCell::new(0, 0);
		let result = Ordinal::get_all_cell_neighbours(cell, 4, 3);
		let actual = vec![
			(Ordinal::North, FieldCell::new(0, 1)),
			(Ordinal::NorthEast, FieldCell::new(1, 1)),
			(Ordinal::East, FieldCell::new(1, 0)),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn ordinal_all_neighbours_centre() {
		let cell = FieldCell::new(1, 1);
		let result = Ordinal::get_all_cell_neighbours(cell, 3, 3);
		assert_eq!(8, result.len());
	}
	#[test]
	fn smoothing_weights() {
		let orthogonal = Ordinal::East.smoothing_weight();
		let diagonal = Ordinal::SouthWest.smoothing_weight();
		assert!((orthogonal - 1.0 / 1.1).abs() < f32::EPSILON);
		assert!((diagonal - 1.0 / (2.0_f32.sqrt() + 0.1)).abs() < f32::EPSILON);
		assert!(orthogonal > diagonal);
	}
	#[test]
	fn cell_to_cell_north() {
		let target = FieldCell::new(6, 3);
		let source = FieldCell::new(6, 2);
		let result = Ordinal::cell_to_cell_direction(target, source);
		assert_eq!(Some(Ordinal::North), result);
	}
	#[test]
	fn cell_to_cell_north_east() {
		let target = FieldCell::new(7, 4);
		let source = FieldCell::new(6, 3);
		let result = Ordinal::cell_to_cell_direction(target, source);
		assert_eq!(Some(Ordinal::NorthEast), result);
	}
	#[test]
	fn cell_to_cell_south_west() {
		let target = FieldCell::new(6, 7);
		let source = FieldCell::new(7, 8);
		let result = Ordinal::cell_to_cell_direction(target, source);
		assert_eq!(Some(Ordinal::SouthWest), result);
	}
	#[test]
	fn cell_to_cell_west() {
		let target = FieldCell::new(5, 7);
		let source = FieldCell::new(6, 7);
		let result = Ordinal::cell_to_cell_direction(target, source);
		assert_eq!(Some(Ordinal::West), result);
	}
	#[test]
	fn cell_to_cell_not_adjacent() {
		let target = FieldCell::new(0, 0);
		let source = FieldCell::new(2, 0);
		let result = Ordinal::cell_to_cell_direction(target, source);
		assert_eq!(None, result);
	}
}
