//! Contains types like tile coordinates, bounding boxes, selectors, and store rows.

mod blob;
pub use blob::*;

mod constants;
pub use constants::*;

mod feature_selector;
pub use feature_selector::*;

mod feature_source;
pub use feature_source::*;

mod geometry_type;
pub use geometry_type::*;

mod tile_bbox;
pub use tile_bbox::*;

mod tile_coord;
pub use tile_coord::*;

mod tile_filter;
pub use tile_filter::*;

mod tile_record;
pub use tile_record::*;
