//! Serializes collected tile records into the composite wire format.
//!
//! The layout is a de facto contract with downstream renderers and must be
//! reproduced bit for bit. All integers are little-endian 32-bit two's complement:
//!
//! ```text
//! i32 record_count
//! repeated record_count times:
//! 	i32 x
//! 	i32 y
//! 	i32 z
//! 	i32 detail_zoom      // same value for every record of one response
//! 	i32 data_length      // may be 0
//! 	u8[data_length] data // omitted entirely when data_length == 0
//! ```
//!
//! Records are buffered by the caller, so the count is known before the header is
//! written and a single pass suffices.

use anyhow::Result;
use featuretiles_core::{
	Blob, TileRecord,
	io::{ValueWriter, ValueWriterBlob},
};

/// Packs `records` into the composite response layout.
pub fn pack_records(records: &[TileRecord], detail_zoom: i32) -> Result<Blob> {
	let mut writer = ValueWriterBlob::new_le();
	writer.write_i32(records.len() as i32)?;

	for record in records {
		writer.write_i32(record.coord.x)?;
		writer.write_i32(record.coord.y)?;
		writer.write_i32(record.coord.z)?;
		writer.write_i32(detail_zoom)?;
		writer.write_i32(record.data.len() as i32)?;
		if !record.data.is_empty() {
			writer.write_blob(&record.data)?;
		}
	}

	Ok(writer.into_blob())
}

#[cfg(test)]
mod tests {
	use super::*;
	use featuretiles_core::TileCoord;
	use pretty_assertions::assert_eq;

	#[test]
	fn empty_response_is_four_zero_bytes() -> Result<()> {
		let blob = pack_records(&[], 12)?;
		assert_eq!(blob.into_vec(), vec![0, 0, 0, 0]);
		Ok(())
	}

	#[test]
	fn single_record_layout() -> Result<()> {
		let records = vec![TileRecord::new(TileCoord::new(1, 2, 3), Blob::from(vec![0xAA, 0xBB]))];
		let blob = pack_records(&records, 4)?;
		assert_eq!(
			blob.into_vec(),
			vec![
				1, 0, 0, 0, // record_count
				1, 0, 0, 0, // x
				2, 0, 0, 0, // y
				3, 0, 0, 0, // z
				4, 0, 0, 0, // detail_zoom
				2, 0, 0, 0, // data_length
				0xAA, 0xBB, // data
			]
		);
		Ok(())
	}

	#[test]
	fn empty_payload_record_has_no_data_bytes() -> Result<()> {
		let records = vec![TileRecord::new(TileCoord::new(7, 8, 9), Blob::new_empty())];
		let blob = pack_records(&records, 0)?;
		assert_eq!(
			blob.into_vec(),
			vec![
				1, 0, 0, 0, //
				7, 0, 0, 0, //
				8, 0, 0, 0, //
				9, 0, 0, 0, //
				0, 0, 0, 0, //
				0, 0, 0, 0, // data_length == 0, nothing follows
			]
		);
		Ok(())
	}

	#[test]
	fn count_and_total_length_are_consistent() -> Result<()> {
		let records = vec![
			TileRecord::new(TileCoord::new(0, 0, 0), Blob::from(vec![1; 5])),
			TileRecord::new(TileCoord::new(1, 0, 1), Blob::new_empty()),
			TileRecord::new(TileCoord::new(2, 3, 2), Blob::from(vec![2; 11])),
		];
		let blob = pack_records(&records, 6)?;

		let payload_bytes: u64 = records.iter().map(|record| record.data.len()).sum();
		assert_eq!(blob.len(), 4 + records.len() as u64 * 20 + payload_bytes);
		assert_eq!(blob.range(0..4), &[3, 0, 0, 0]);
		Ok(())
	}

	#[test]
	fn record_order_is_preserved() -> Result<()> {
		let records = vec![
			TileRecord::new(TileCoord::new(9, 9, 9), Blob::new_empty()),
			TileRecord::new(TileCoord::new(1, 1, 1), Blob::new_empty()),
		];
		let blob = pack_records(&records, 0)?;
		// first record's x
		assert_eq!(blob.range(4..8), &[9, 0, 0, 0]);
		// second record's x starts after the first 20-byte record
		assert_eq!(blob.range(24..28), &[1, 0, 0, 0]);
		Ok(())
	}
}
