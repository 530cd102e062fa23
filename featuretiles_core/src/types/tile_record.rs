//! One row returned by a tile store: a coordinate and its opaque payload.

use crate::{Blob, TileCoord};

/// A single stored tile as returned by a [`FeatureSource`](crate::FeatureSource) query.
///
/// `data` may be empty; the store keeps rows for tiles that exist but carry no
/// feature bytes, and the composite layout represents them with a zero length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileRecord {
	pub coord: TileCoord,
	pub data: Blob,
}

impl TileRecord {
	#[must_use]
	pub fn new(coord: TileCoord, data: Blob) -> TileRecord {
		TileRecord { coord, data }
	}
}
