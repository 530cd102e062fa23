//! The typed "store not found" condition reported when a store cannot be opened.

use std::error::Error;
use std::fmt::{self, Display};
use std::path::Path;

/// Raised when the backing store file does not exist.
///
/// Carries the identifying store name and a numeric code so callers can map the
/// condition onto their own reporting (the delivery layer uses the code as an HTTP
/// status). Travels inside [`anyhow::Error`]; recover it with `downcast_ref`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreNotFound {
	pub store: String,
	pub code: i32,
}

impl StoreNotFound {
	#[must_use]
	pub fn new(path: &Path, code: i32) -> StoreNotFound {
		StoreNotFound {
			store: path.to_string_lossy().into_owned(),
			code,
		}
	}
}

impl Display for StoreNotFound {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "feature store '{}' not found (code {})", self.store, self.code)
	}
}

impl Error for StoreNotFound {}
