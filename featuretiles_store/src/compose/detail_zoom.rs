//! Maps a requested pyramid zoom to the detail zoom to filter by.
//!
//! The store holds each feature in several pre-simplified variants, one per "detail
//! zoom". Which variant a request reads depends on the requested pyramid zoom and on
//! the selector: most features step up in detail every second pyramid zoom, terrain
//! and depth data stops at 12, and the raster-derived land-cover sets (bathymetry,
//! blue marble, elevation) stop at 10. Point features only exist at detail zoom 14.
//!
//! The resolved value is fixed for the whole request; the coverage scan never varies
//! it per candidate pyramid zoom.

use featuretiles_core::{GeometryType, POINTS_DETAIL_ZOOM};

const DETAIL_ZOOMS_DEFAULT: [i32; 15] = [0, 0, 2, 2, 4, 4, 6, 6, 8, 8, 10, 10, 12, 12, 14];
const DETAIL_ZOOMS_TERRAIN: [i32; 15] = [0, 0, 2, 2, 4, 4, 6, 6, 8, 8, 10, 10, 12, 12, 12];
const DETAIL_ZOOMS_BATHYMETRY: [i32; 15] = [0, 0, 2, 2, 4, 4, 6, 6, 8, 8, 10, 10, 10, 10, 10];

/// Resolves the detail zoom for a request.
///
/// Points resolve to [`POINTS_DETAIL_ZOOM`] unconditionally. Otherwise the table is
/// selected by exact match on the normalized selector `value` and indexed by `z`
/// clamped to the table bounds, so every `z >= 14` reads the last entry.
#[must_use]
pub fn resolve_detail_zoom(z: i32, value: &str, geometry: GeometryType) -> i32 {
	if geometry == GeometryType::Points {
		return POINTS_DETAIL_ZOOM;
	}

	let table = match value {
		"terrain" | "depth" => &DETAIL_ZOOMS_TERRAIN,
		"bathymetry" | "blue_marble" | "elevation" => &DETAIL_ZOOMS_BATHYMETRY,
		_ => &DETAIL_ZOOMS_DEFAULT,
	};

	table[z.clamp(0, table.len() as i32 - 1) as usize]
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 0)]
	#[case(1, 0)]
	#[case(2, 2)]
	#[case(5, 4)]
	#[case(12, 12)]
	#[case(13, 12)]
	#[case(14, 14)]
	fn default_table(#[case] z: i32, #[case] expected: i32) {
		assert_eq!(resolve_detail_zoom(z, "land", GeometryType::Polygons), expected);
	}

	#[rstest]
	#[case("terrain", 14, 12)]
	#[case("depth", 14, 12)]
	#[case("terrain", 13, 12)]
	#[case("terrain", 11, 10)]
	fn terrain_table(#[case] value: &str, #[case] z: i32, #[case] expected: i32) {
		assert_eq!(resolve_detail_zoom(z, value, GeometryType::Polygons), expected);
	}

	#[rstest]
	#[case("bathymetry", 12, 10)]
	#[case("blue_marble", 13, 10)]
	#[case("elevation", 14, 10)]
	#[case("bathymetry", 11, 10)]
	#[case("bathymetry", 9, 8)]
	fn bathymetry_table(#[case] value: &str, #[case] z: i32, #[case] expected: i32) {
		assert_eq!(resolve_detail_zoom(z, value, GeometryType::Polygons), expected);
	}

	#[rstest]
	#[case(0)]
	#[case(7)]
	#[case(14)]
	#[case(20)]
	fn points_override_any_zoom(#[case] z: i32) {
		assert_eq!(resolve_detail_zoom(z, "land", GeometryType::Points), 14);
		assert_eq!(resolve_detail_zoom(z, "city", GeometryType::Points), 14);
	}

	#[test]
	fn zoom_is_clamped_at_both_ends() {
		for value in ["land", "terrain", "bathymetry"] {
			assert_eq!(
				resolve_detail_zoom(-3, value, GeometryType::Polygons),
				resolve_detail_zoom(0, value, GeometryType::Polygons)
			);
			assert_eq!(
				resolve_detail_zoom(25, value, GeometryType::Polygons),
				resolve_detail_zoom(14, value, GeometryType::Polygons)
			);
		}
	}

	#[test]
	fn lines_use_the_tables() {
		assert_eq!(resolve_detail_zoom(14, "land", GeometryType::Lines), 14);
		assert_eq!(resolve_detail_zoom(14, "terrain", GeometryType::Lines), 12);
	}
}
