//! Assembles one composite tile payload from a sparse multi-zoom pyramid.
//!
//! The store holds feature data only at certain pyramid zooms and only where features
//! exist, so a requested tile frequently has no exact match. The composer scans
//! candidate zooms from coarsest (0) to [`MAX_TILE_ZOOM`], querying the requested
//! tile's ancestor at coarser zooms and its descendant box at finer zooms, and keeps
//! everything it finds.
//!
//! Each candidate zoom that yields rows contributes an area weight of
//! `4^(MAX_TILE_ZOOM - candidate_zoom)` — the number of zoom-16 tiles an ancestor at
//! that zoom stands in for, and equally the total a complete descendant set at that
//! zoom would sum to. The scan stops as soon as the accumulated weight reaches one
//! full requested-tile's worth, so coarse data that already covers the tile spares
//! querying every finer level. Overlapping coverage across zooms is intentionally
//! kept; downstream renderers prioritize by resolution.

use crate::{pack_records, resolve_detail_zoom};
use anyhow::Result;
use featuretiles_core::{Blob, FeatureSelector, FeatureSource, MAX_TILE_ZOOM, TileCoord, TileFilter, TileRecord};
use std::sync::Arc;

/// Area weight of one tile at `zoom`, measured in zoom-16 tile units.
fn tile_weight(zoom: i32) -> u64 {
	// Exponent clamped: negative when the requested zoom lies beyond the pyramid
	// (any hit then satisfies the threshold), and 4^31 already exceeds every
	// accumulable weight.
	4u64.pow((MAX_TILE_ZOOM - zoom).clamp(0, 31) as u32)
}

/// Drives a [`FeatureSource`] to answer composite tile requests.
pub struct TileComposer {
	source: Arc<dyn FeatureSource>,
}

impl TileComposer {
	#[must_use]
	pub fn new(source: Arc<dyn FeatureSource>) -> TileComposer {
		TileComposer { source }
	}

	/// Builds the composite payload for tile `(x, y, z)` and `selector`.
	///
	/// Normalizes the selector, resolves the detail zoom once for the whole
	/// request, collects coverage, and packs the records into the wire layout.
	///
	/// # Errors
	/// Any store query failure aborts the scan and is returned unchanged; no
	/// partial payload is produced.
	pub async fn get_composite_tile(&self, x: i32, y: i32, z: i32, selector: FeatureSelector) -> Result<Blob> {
		log::debug!("composite tile ({x}, {y}, {z}) for {selector:?} from '{}'", self.source.source_name());

		let selector = selector.normalized();
		let detail_zoom = resolve_detail_zoom(z, &selector.value, selector.geometry);
		let filter = TileFilter::new(detail_zoom, &selector);
		let records = self.collect_coverage(&filter, &TileCoord::new(x, y, z)).await?;

		log::trace!("collected {} records", records.len());

		pack_records(&records, detail_zoom)
	}

	/// Scans candidate zooms coarse to fine until the requested tile's area is
	/// accounted for.
	///
	/// Candidate zooms at or below `coord.z` are queried as exact ancestor lookups;
	/// finer zooms as range queries over the descendant box. The weight is added
	/// once per candidate zoom with hits, independent of the row count, and rows
	/// are appended in discovery order.
	async fn collect_coverage(&self, filter: &TileFilter, coord: &TileCoord) -> Result<Vec<TileRecord>> {
		let mut records = Vec::new();
		let mut coverage_weight = 0u64;
		let full_weight = tile_weight(coord.z);

		for candidate_zoom in 0..=MAX_TILE_ZOOM {
			let rows = if candidate_zoom <= coord.z {
				self
					.source
					.query_tile(filter, &coord.at_ancestor_zoom(candidate_zoom))
					.await?
			} else {
				self
					.source
					.query_range(filter, &coord.descendant_bbox(candidate_zoom))
					.await?
			};

			if !rows.is_empty() {
				coverage_weight += tile_weight(candidate_zoom);
				records.extend(rows);
			}

			if coverage_weight >= full_weight {
				break;
			}
		}

		Ok(records)
	}
}

impl std::fmt::Debug for TileComposer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TileComposer")
			.field("source", &self.source.source_name())
			.finish()
	}
}
