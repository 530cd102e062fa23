//! Core value types and byte-level IO for assembling composite feature tiles.
//!
//! This crate contains the vocabulary shared by every feature-tile store and
//! composer:
//! - tile pyramid types ([`TileCoord`], [`TileBBox`]),
//! - feature addressing ([`GeometryType`], [`FeatureSelector`], [`TileFilter`]),
//! - store rows and payloads ([`TileRecord`], [`Blob`]),
//! - the object-safe [`FeatureSource`] trait implemented by tile stores,
//! - little-endian value writers used to emit the composite wire format.

pub mod io;

pub mod types;

pub use types::*;
