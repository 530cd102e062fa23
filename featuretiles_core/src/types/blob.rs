//! This module provides the [`Blob`] struct, a thin wrapper around [`Vec<u8>`] used for
//! tile payloads and packed composite responses.
//!
//! # Overview
//!
//! Tile data is treated as opaque bytes everywhere in this workspace: the store returns
//! blobs, the composer concatenates them, and the packed response is itself a blob. The
//! [`Blob`] struct carries those bytes and provides the few accessors the rest of the
//! code needs.
//!
//! # Examples
//!
//! ```rust
//! use featuretiles_core::Blob;
//!
//! let blob = Blob::from(vec![0, 1, 2, 3]);
//! assert_eq!(blob.len(), 4);
//! assert_eq!(blob.range(1..3), &[1, 2]);
//! assert_eq!(blob.into_vec(), vec![0, 1, 2, 3]);
//! ```

use std::fmt::Debug;
use std::ops::Range;

/// A byte buffer holding an opaque tile payload or a packed composite response.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Returns a byte slice for the specified `range`.
	///
	/// # Panics
	/// Panics if the range is out of bounds.
	#[must_use]
	pub fn range(&self, range: Range<usize>) -> &[u8] {
		&self.0[range]
	}

	/// Returns the underlying bytes as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Consumes the `Blob` and returns the underlying vector.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the length in bytes.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	/// Returns `true` if the `Blob` contains no bytes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Blob {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Blob {
		Blob(item.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(item: &str) -> Blob {
		Blob(item.as_bytes().to_vec())
	}
}

/// Shows the length and a short prefix of the content.
impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let preview_len = self.0.len().min(16);
		f.write_fmt(format_args!(
			"Blob({} bytes, {:?}…)",
			self.0.len(),
			&self.0[0..preview_len]
		))
	}
}
