//! Mock implementation of a feature tile store for testing.
//!
//! `MockStore` answers queries from an in-memory row set and records every query it
//! receives, so tests can assert not only what the composer returns but which
//! candidate zooms it actually consulted — the early-termination contract is about
//! queries that are *never issued*.
//!
//! The mock treats the filter as opaque, like a store holding a single dataset; a
//! query failure can be injected at a chosen pyramid zoom to exercise abort paths.

use anyhow::{Result, bail};
use async_trait::async_trait;
use featuretiles_core::{FeatureSource, TileBBox, TileCoord, TileFilter, TileRecord};
use parking_lot::Mutex;

/// One query received by the mock, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssuedQuery {
	Tile(TileCoord),
	Range(TileBBox),
}

impl IssuedQuery {
	/// The pyramid zoom this query targeted.
	#[must_use]
	pub fn zoom(&self) -> i32 {
		match self {
			IssuedQuery::Tile(coord) => coord.z,
			IssuedQuery::Range(bbox) => bbox.z,
		}
	}
}

/// In-memory feature store with a query log.
pub struct MockStore {
	rows: Vec<TileRecord>,
	fail_at_zoom: Option<i32>,
	log: Mutex<Vec<IssuedQuery>>,
}

impl MockStore {
	/// Creates a mock store holding `rows`.
	#[must_use]
	pub fn new(rows: Vec<TileRecord>) -> MockStore {
		MockStore {
			rows,
			fail_at_zoom: None,
			log: Mutex::new(Vec::new()),
		}
	}

	/// Makes every query at pyramid zoom `zoom` fail.
	#[must_use]
	pub fn with_failure_at(mut self, zoom: i32) -> MockStore {
		self.fail_at_zoom = Some(zoom);
		self
	}

	/// Returns a snapshot of all queries issued so far, in order.
	pub fn issued_queries(&self) -> Vec<IssuedQuery> {
		self.log.lock().clone()
	}

	fn check_failure(&self, zoom: i32) -> Result<()> {
		if self.fail_at_zoom == Some(zoom) {
			bail!("injected query failure at zoom {zoom}");
		}
		Ok(())
	}
}

#[async_trait]
impl FeatureSource for MockStore {
	fn source_name(&self) -> &str {
		"mock"
	}

	async fn query_tile(&self, _filter: &TileFilter, coord: &TileCoord) -> Result<Vec<TileRecord>> {
		self.log.lock().push(IssuedQuery::Tile(*coord));
		self.check_failure(coord.z)?;
		Ok(
			self
				.rows
				.iter()
				.filter(|record| record.coord == *coord)
				.cloned()
				.collect(),
		)
	}

	async fn query_range(&self, _filter: &TileFilter, bbox: &TileBBox) -> Result<Vec<TileRecord>> {
		self.log.lock().push(IssuedQuery::Range(*bbox));
		self.check_failure(bbox.z)?;
		Ok(
			self
				.rows
				.iter()
				.filter(|record| bbox.contains(&record.coord))
				.cloned()
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use featuretiles_core::{Blob, FeatureSelector};

	fn filter() -> TileFilter {
		TileFilter::new(0, &FeatureSelector::new("land").normalized())
	}

	#[tokio::test]
	async fn answers_by_coordinate() -> Result<()> {
		let coord = TileCoord::new(2, 3, 4);
		let store = MockStore::new(vec![
			TileRecord::new(coord, Blob::from(vec![1])),
			TileRecord::new(TileCoord::new(9, 9, 4), Blob::from(vec![2])),
		]);

		let hits = store.query_tile(&filter(), &coord).await?;
		assert_eq!(hits.len(), 1);

		let hits = store.query_range(&filter(), &TileBBox::new(4, 0, 0, 4, 4)).await?;
		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].coord, coord);
		Ok(())
	}

	#[tokio::test]
	async fn records_queries_in_order() -> Result<()> {
		let store = MockStore::new(vec![]);
		store.query_tile(&filter(), &TileCoord::new(0, 0, 0)).await?;
		store.query_range(&filter(), &TileBBox::new(1, 0, 0, 2, 2)).await?;

		let log = store.issued_queries();
		assert_eq!(
			log,
			vec![
				IssuedQuery::Tile(TileCoord::new(0, 0, 0)),
				IssuedQuery::Range(TileBBox::new(1, 0, 0, 2, 2)),
			]
		);
		assert_eq!(log[0].zoom(), 0);
		assert_eq!(log[1].zoom(), 1);
		Ok(())
	}

	#[tokio::test]
	async fn injected_failure() {
		let store = MockStore::new(vec![]).with_failure_at(3);
		assert!(store.query_tile(&filter(), &TileCoord::new(0, 0, 3)).await.is_err());
		assert!(store.query_tile(&filter(), &TileCoord::new(0, 0, 2)).await.is_ok());
	}
}
