//! A rectangular group of tiles at one pyramid zoom.
//!
//! [`TileBBox`] is the window of a range query: bounds are half-open (`x_min <= x < x_max`,
//! same for y), which maps directly onto the store's `>= min AND < max` filtering and makes
//! adjacent boxes tile the plane without overlap.

use crate::TileCoord;
use std::fmt::{self, Debug};

/// A half-open box of tiles at a single zoom level.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileBBox {
	pub z: i32,
	pub x_min: i32,
	pub y_min: i32,
	pub x_max: i32,
	pub y_max: i32,
}

impl TileBBox {
	/// Creates a new box; `x_max`/`y_max` are exclusive.
	#[must_use]
	pub fn new(z: i32, x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> TileBBox {
		TileBBox {
			z,
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// Number of tile columns covered.
	#[must_use]
	pub fn width(&self) -> i32 {
		self.x_max - self.x_min
	}

	/// Number of tile rows covered.
	#[must_use]
	pub fn height(&self) -> i32 {
		self.y_max - self.y_min
	}

	/// Number of tiles covered.
	#[must_use]
	pub fn count(&self) -> i64 {
		i64::from(self.width()) * i64::from(self.height())
	}

	/// Returns `true` if `coord` lies inside this box (same zoom, within bounds).
	#[must_use]
	pub fn contains(&self, coord: &TileCoord) -> bool {
		coord.z == self.z
			&& coord.x >= self.x_min
			&& coord.x < self.x_max
			&& coord.y >= self.y_min
			&& coord.y < self.y_max
	}
}

/// Custom `Debug` format as `TileBBox(z, [x_min,y_min..x_max,y_max))`.
impl Debug for TileBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!(
			"TileBBox({}, [{},{}..{},{}))",
			&self.z, &self.x_min, &self.y_min, &self.x_max, &self.y_max
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dimensions() {
		let bbox = TileBBox::new(13, 2166, 1346, 2168, 1348);
		assert_eq!(bbox.width(), 2);
		assert_eq!(bbox.height(), 2);
		assert_eq!(bbox.count(), 4);
	}

	#[test]
	fn contains_is_half_open() {
		let bbox = TileBBox::new(5, 4, 6, 8, 10);
		assert!(bbox.contains(&TileCoord::new(4, 6, 5)));
		assert!(bbox.contains(&TileCoord::new(7, 9, 5)));
		assert!(!bbox.contains(&TileCoord::new(8, 6, 5)));
		assert!(!bbox.contains(&TileCoord::new(4, 10, 5)));
		assert!(!bbox.contains(&TileCoord::new(3, 6, 5)));
	}

	#[test]
	fn contains_requires_matching_zoom() {
		let bbox = TileBBox::new(5, 0, 0, 32, 32);
		assert!(!bbox.contains(&TileCoord::new(1, 1, 4)));
		assert!(!bbox.contains(&TileCoord::new(1, 1, 6)));
	}

	#[test]
	fn debug_format() {
		let bbox = TileBBox::new(3, 0, 1, 2, 3);
		assert_eq!(format!("{bbox:?}"), "TileBBox(3, [0,1..2,3))");
	}
}
