//! Read feature tiles from a SQLite database.
//!
//! The `SqliteStore` serves the `tiles` table of a pre-rendered feature tile store.
//! Each row holds one tile at a pyramid coordinate together with the filter columns
//! this store is indexed by:
//!
//! | column | meaning |
//! |---|---|
//! | `detail_zoom` | pre-simplification level of the stored geometry |
//! | `object_type` | geometry class text (`Points`, `Lines`, `Polygons`) |
//! | `osm_key`, `osm_value` | semantic feature address |
//! | `x`, `y`, `z` | pyramid coordinate |
//! | `data` | opaque tile payload, possibly empty |
//!
//! The database is opened read-only through an r2d2 connection pool; the pool is the
//! scoped read handle for concurrent requests and is released when the store is
//! dropped. A missing file is reported as [`StoreNotFound`] with code 404.
//!
//! ## Usage
//! ```rust,no_run
//! use featuretiles_core::{FeatureSelector, FeatureSource, TileCoord, TileFilter};
//! use featuretiles_store::SqliteStore;
//! use anyhow::Result;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//! 	let store = SqliteStore::open_path(Path::new("/data/features.sqlite"))?;
//! 	let selector = FeatureSelector::new("land").normalized();
//! 	let filter = TileFilter::new(12, &selector);
//! 	let rows = store.query_tile(&filter, &TileCoord::new(1083, 673, 12)).await?;
//! 	println!("{} rows", rows.len());
//! 	Ok(())
//! }
//! ```

use crate::StoreNotFound;
use anyhow::{Context, Result};
use async_trait::async_trait;
use featuretiles_core::{Blob, FeatureSource, TileBBox, TileCoord, TileFilter, TileRecord};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use r2d2_sqlite::rusqlite::{OpenFlags, Row, params};
use std::path::Path;

/// Read-only SQLite-backed feature tile store.
pub struct SqliteStore {
	name: String,
	pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
	/// Opens the SQLite database at `path` read-only and initializes the
	/// connection pool.
	///
	/// # Errors
	/// Returns [`StoreNotFound`] (code 404) if the file does not exist, or an
	/// error if the pool cannot be established.
	pub fn open_path(path: &Path) -> Result<SqliteStore> {
		log::debug!("open {path:?}");

		if !path.is_file() {
			return Err(StoreNotFound::new(path, 404).into());
		}

		let manager = SqliteConnectionManager::file(path)
			.with_flags(OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX);
		let pool = Pool::builder()
			.max_size(10)
			.build(manager)
			.with_context(|| format!("opening feature store at {path:?}"))?;

		Ok(SqliteStore {
			name: path.to_string_lossy().into_owned(),
			pool,
		})
	}

	fn record_from_row(row: &Row) -> r2d2_sqlite::rusqlite::Result<TileRecord> {
		Ok(TileRecord::new(
			TileCoord::new(row.get(0)?, row.get(1)?, row.get(2)?),
			Blob::from(row.get::<_, Vec<u8>>(3)?),
		))
	}
}

#[async_trait]
impl FeatureSource for SqliteStore {
	fn source_name(&self) -> &str {
		&self.name
	}

	/// Fetches all rows at exactly `coord` matching the filter columns.
	///
	/// Row order is whatever SQLite returns; it is preserved into the composite
	/// response.
	async fn query_tile(&self, filter: &TileFilter, coord: &TileCoord) -> Result<Vec<TileRecord>> {
		log::trace!("query tile {coord:?} from '{}'", self.name);

		let conn = self.pool.get()?;
		let mut stmt = conn.prepare(
			"SELECT x, y, z, data FROM tiles
			 WHERE detail_zoom = ? AND object_type = ? AND osm_key = ? AND osm_value = ?
			   AND x = ? AND y = ? AND z = ?",
		)?;

		let records = stmt
			.query_map(
				params![
					filter.detail_zoom,
					filter.geometry.as_str(),
					filter.key,
					filter.value,
					coord.x,
					coord.y,
					coord.z
				],
				Self::record_from_row,
			)?
			.collect::<r2d2_sqlite::rusqlite::Result<Vec<TileRecord>>>()
			.with_context(|| format!("querying tile {coord:?} from '{}'", self.name))?;

		Ok(records)
	}

	/// Fetches all rows inside the half-open `bbox` matching the filter columns.
	async fn query_range(&self, filter: &TileFilter, bbox: &TileBBox) -> Result<Vec<TileRecord>> {
		log::trace!("query range {bbox:?} from '{}'", self.name);

		let conn = self.pool.get()?;
		let mut stmt = conn.prepare(
			"SELECT x, y, z, data FROM tiles
			 WHERE detail_zoom = ? AND object_type = ? AND osm_key = ? AND osm_value = ?
			   AND x >= ? AND x < ? AND y >= ? AND y < ? AND z = ?",
		)?;

		let records = stmt
			.query_map(
				params![
					filter.detail_zoom,
					filter.geometry.as_str(),
					filter.key,
					filter.value,
					bbox.x_min,
					bbox.x_max,
					bbox.y_min,
					bbox.y_max,
					bbox.z
				],
				Self::record_from_row,
			)?
			.collect::<r2d2_sqlite::rusqlite::Result<Vec<TileRecord>>>()
			.with_context(|| format!("querying range {bbox:?} from '{}'", self.name))?;

		Ok(records)
	}
}

impl std::fmt::Debug for SqliteStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SqliteStore").field("name", &self.name).finish()
	}
}
