//! This module defines the [`GeometryType`] enum, the closed set of feature geometry
//! classes a tile store indexes by.
//!
//! The store's `object_type` column holds the capitalized variant name (`"Points"`,
//! `"Lines"`, `"Polygons"`), so [`as_str`](GeometryType::as_str) returns exactly that
//! form. Textual input is parsed case-insensitively and unrecognized text yields `None`
//! rather than an error.
//!
//! # Examples
//!
//! ```rust
//! use featuretiles_core::GeometryType;
//!
//! assert_eq!(GeometryType::Points.as_str(), "Points");
//! assert_eq!(GeometryType::from_str_opt("poLYgons"), Some(GeometryType::Polygons));
//! assert_eq!(GeometryType::from_str_opt("circle"), None);
//! ```

use std::fmt::{Display, Formatter};

/// The geometry class of a feature selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Points,
	Lines,
	#[default]
	Polygons,
}

impl GeometryType {
	/// Returns the canonical storage text, as held in the store's `object_type` column.
	pub fn as_str(&self) -> &str {
		match self {
			GeometryType::Points => "Points",
			GeometryType::Lines => "Lines",
			GeometryType::Polygons => "Polygons",
		}
	}

	/// Parses a geometry type from text, ignoring case.
	///
	/// Returns `None` for unrecognized text; callers at the request boundary decide
	/// how to report that.
	pub fn from_str_opt(value: &str) -> Option<GeometryType> {
		match value.to_lowercase().as_str() {
			"points" => Some(GeometryType::Points),
			"lines" => Some(GeometryType::Lines),
			"polygons" => Some(GeometryType::Polygons),
			_ => None,
		}
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
