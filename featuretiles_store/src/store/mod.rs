//! Store implementations: the SQLite-backed reader and an in-memory mock.

mod error;
pub use error::*;

mod mock;
pub use mock::*;

mod sqlite;
pub use sqlite::*;
