//! Composite tile assembly: detail-zoom resolution, the coverage scan, and response packing.

mod composer;
pub use composer::*;

mod detail_zoom;
pub use detail_zoom::*;

mod packer;
pub use packer::*;
