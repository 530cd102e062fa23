//! The object-safe trait implemented by every feature tile store.
//!
//! A [`FeatureSource`] is a read-only keyed store indexed by pyramid coordinate plus
//! the filter columns in [`TileFilter`]. The composer drives it with exactly two
//! operations: an exact-match lookup at one coordinate and a range query over a
//! half-open box at one zoom. Both return zero or more rows in store-defined order;
//! that order is part of the composite response contract and must be preserved.
//!
//! Query failures propagate unchanged. Implementations perform no retries and no
//! caching; each request borrows the store handle read-only for its duration.

use crate::{TileBBox, TileCoord, TileFilter, TileRecord};
use anyhow::Result;
use async_trait::async_trait;

/// A read-only store of feature tiles, queryable by coordinate or by box.
#[async_trait]
pub trait FeatureSource: Send + Sync {
	/// An identifying name for logging and error messages.
	fn source_name(&self) -> &str;

	/// Returns all rows matching `filter` at exactly `coord`.
	async fn query_tile(&self, filter: &TileFilter, coord: &TileCoord) -> Result<Vec<TileRecord>>;

	/// Returns all rows matching `filter` inside the half-open `bbox` at its zoom.
	async fn query_range(&self, filter: &TileFilter, bbox: &TileBBox) -> Result<Vec<TileRecord>>;
}
