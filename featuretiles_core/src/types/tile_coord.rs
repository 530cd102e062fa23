//! Tile coordinates in a quadtree tile pyramid.
//!
//! This module provides the [`TileCoord`] type addressing one tile at pyramid zoom `z`,
//! plus the level-shifting helpers the coverage scan is built on: projecting a tile to
//! a coarser ancestor zoom and spanning its descendants at a finer zoom.
//!
//! Coordinates are plain `i32` values. A well-formed coordinate satisfies `0 <= z` and
//! `0 <= x, y < 2^z`, but this is deliberately not enforced: out-of-range input shifts
//! into queries that match nothing in the store.
//!
//! # Examples
//!
//! ```rust
//! use featuretiles_core::TileCoord;
//!
//! let coord = TileCoord::new(1083, 673, 12);
//! assert_eq!(coord.at_ancestor_zoom(10), TileCoord::new(270, 168, 10));
//!
//! let descendants = coord.descendant_bbox(14);
//! assert_eq!(descendants.x_min, 4332);
//! assert_eq!(descendants.x_max, 4336);
//! ```

use crate::TileBBox;
use std::fmt::{self, Debug};

/// One tile in a quadtree pyramid, addressed by column `x`, row `y`, and zoom `z`.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	pub x: i32,
	pub y: i32,
	pub z: i32,
}

impl TileCoord {
	/// Creates a new `TileCoord` without validating the pyramid invariants.
	#[must_use]
	pub fn new(x: i32, y: i32, z: i32) -> TileCoord {
		TileCoord { x, y, z }
	}

	/// Projects this tile to its ancestor at the coarser `zoom`.
	///
	/// Callers must pass `zoom <= self.z`; the ancestor's footprint contains this
	/// tile's footprint.
	#[must_use]
	pub fn at_ancestor_zoom(&self, zoom: i32) -> TileCoord {
		let shift = self.z - zoom;
		TileCoord {
			x: self.x >> shift,
			y: self.y >> shift,
			z: zoom,
		}
	}

	/// Spans this tile's descendants at the finer `zoom` as a half-open box.
	///
	/// Callers must pass `zoom > self.z`; the box covers `2^(zoom - self.z)` tiles
	/// per axis, exactly the finer tiles whose footprints lie inside this tile.
	#[must_use]
	pub fn descendant_bbox(&self, zoom: i32) -> TileBBox {
		let shift = zoom - self.z;
		let x_min = self.x << shift;
		let y_min = self.y << shift;
		let span = 1 << shift;
		TileBBox {
			z: zoom,
			x_min,
			y_min,
			x_max: x_min + span,
			y_max: y_min + span,
		}
	}
}

/// Custom `Debug` format as `TileCoord(z, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileCoord({}, [{}, {}])", &self.z, &self.x, &self.y))
	}
}
