//! Feature tile stores and the composite tile assembler.
//!
//! This crate turns a sparse multi-zoom tile pyramid into single composite payloads:
//! - [`SqliteStore`]: a read-only SQLite-backed [`FeatureSource`](featuretiles_core::FeatureSource)
//!   over the `tiles` table,
//! - [`TileComposer`]: the coverage scan that walks candidate pyramid zooms coarse to
//!   fine, queries ancestors and descendants, and stops once the requested tile's
//!   area is covered,
//! - the packer emitting the fixed little-endian response layout.
//!
//! # Quick start
//! ```rust,no_run
//! use featuretiles_core::FeatureSelector;
//! use featuretiles_store::{SqliteStore, TileComposer};
//! use std::{path::Path, sync::Arc};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//! 	let store = SqliteStore::open_path(Path::new("/data/features.sqlite"))?;
//! 	let composer = TileComposer::new(Arc::new(store));
//! 	let payload = composer
//! 		.get_composite_tile(1083, 673, 12, FeatureSelector::new("land"))
//! 		.await?;
//! 	println!("{} bytes", payload.len());
//! 	Ok(())
//! }
//! ```

mod compose;
pub use compose::*;

mod store;
pub use store::*;
