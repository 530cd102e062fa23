//! Pyramid constants shared by detail-zoom resolution and the coverage scan.

/// Finest pyramid zoom the coverage scan ever consults.
///
/// Coverage weights are expressed in zoom-16 tile units: one tile at zoom `z`
/// counts as `4^(MAX_TILE_ZOOM - z)` units.
pub const MAX_TILE_ZOOM: i32 = 16;

/// Fixed detail zoom for point features, independent of pyramid zoom.
pub const POINTS_DETAIL_ZOOM: i32 = 14;
