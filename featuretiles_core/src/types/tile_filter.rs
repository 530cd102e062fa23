//! The fixed per-request store filter.
//!
//! A [`TileFilter`] combines the resolved detail zoom with the normalized selector
//! triple. It is computed once per request and reused unchanged for every query the
//! coverage scan issues, regardless of candidate pyramid zoom.

use crate::{FeatureSelector, GeometryType};

/// Filter columns applied to every store query of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileFilter {
	pub detail_zoom: i32,
	pub geometry: GeometryType,
	pub key: String,
	pub value: String,
}

impl TileFilter {
	/// Builds the filter from a resolved detail zoom and a normalized selector.
	#[must_use]
	pub fn new(detail_zoom: i32, selector: &FeatureSelector) -> TileFilter {
		TileFilter {
			detail_zoom,
			geometry: selector.geometry,
			key: selector.key.clone(),
			value: selector.value.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn carries_selector_triple() {
		let selector = FeatureSelector::new("land").normalized();
		let filter = TileFilter::new(12, &selector);
		assert_eq!(filter.detail_zoom, 12);
		assert_eq!(filter.key, "locr");
		assert_eq!(filter.value, "land");
		assert_eq!(filter.geometry, GeometryType::Polygons);
	}
}
