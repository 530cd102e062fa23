//! Feature selectors: the (key, value, geometry) triple a request addresses.
//!
//! A handful of umbrella selectors (`land`, `terrain`, `blue_marble`, `elevation`,
//! `bathymetry`, `depth`) are stored under the single land-cover key `locr`,
//! differentiated by value. [`FeatureSelector::normalized`] rewrites those into the
//! triple the store actually indexes by; every other selector passes through
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use featuretiles_core::{FeatureSelector, GeometryType};
//!
//! let selector = FeatureSelector::new("land").normalized();
//! assert_eq!(selector.key, "locr");
//! assert_eq!(selector.value, "land");
//! assert_eq!(selector.geometry, GeometryType::Polygons);
//!
//! let selector = FeatureSelector::new("place")
//! 	.with_value("city")
//! 	.with_geometry(GeometryType::Points);
//! assert_eq!(selector.normalized().key, "place");
//! ```

use crate::GeometryType;

/// A semantic feature address: key/value pair plus geometry class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureSelector {
	pub key: String,
	pub value: String,
	pub geometry: GeometryType,
}

impl FeatureSelector {
	/// Creates a selector for `key` with an empty value and polygon geometry.
	pub fn new(key: impl Into<String>) -> FeatureSelector {
		FeatureSelector {
			key: key.into(),
			value: String::new(),
			geometry: GeometryType::Polygons,
		}
	}

	/// Sets the value component.
	#[must_use]
	pub fn with_value(mut self, value: impl Into<String>) -> FeatureSelector {
		self.value = value.into();
		self
	}

	/// Sets the geometry class.
	#[must_use]
	pub fn with_geometry(mut self, geometry: GeometryType) -> FeatureSelector {
		self.geometry = geometry;
		self
	}

	/// Canonicalizes umbrella land-cover selectors into store form.
	///
	/// The rewrite discards any caller-supplied value and geometry; it is a pure
	/// total function and a no-op on already-normalized selectors.
	#[must_use]
	pub fn normalized(self) -> FeatureSelector {
		if matches!(
			self.key.as_str(),
			"land" | "terrain" | "blue_marble" | "elevation" | "bathymetry" | "depth"
		) {
			FeatureSelector {
				value: self.key,
				key: String::from("locr"),
				geometry: GeometryType::Polygons,
			}
		} else {
			self
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("land")]
	#[case("terrain")]
	#[case("blue_marble")]
	#[case("elevation")]
	#[case("bathymetry")]
	#[case("depth")]
	fn umbrella_keys_are_rewritten(#[case] key: &str) {
		let selector = FeatureSelector::new(key)
			.with_value("ignored")
			.with_geometry(GeometryType::Lines)
			.normalized();
		assert_eq!(selector.key, "locr");
		assert_eq!(selector.value, key);
		assert_eq!(selector.geometry, GeometryType::Polygons);
	}

	#[test]
	fn other_keys_pass_through() {
		let selector = FeatureSelector::new("building")
			.with_value("*")
			.with_geometry(GeometryType::Polygons);
		assert_eq!(selector.clone().normalized(), selector);

		let selector = FeatureSelector::new("place")
			.with_value("city")
			.with_geometry(GeometryType::Points);
		assert_eq!(selector.clone().normalized(), selector);
	}

	#[test]
	fn normalization_is_idempotent() {
		let once = FeatureSelector::new("land").normalized();
		let twice = once.clone().normalized();
		assert_eq!(once, twice);
	}

	#[test]
	fn locr_itself_is_not_an_umbrella_key() {
		let selector = FeatureSelector::new("locr").with_value("land").normalized();
		assert_eq!(selector.key, "locr");
		assert_eq!(selector.value, "land");
	}
}
