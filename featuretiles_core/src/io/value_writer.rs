//! This module defines the [`ValueWriter`] trait for writing primitive values to a
//! byte destination with a fixed byte order.
//!
//! # Overview
//!
//! The composite tile response is a sequence of little-endian 32-bit integers
//! interleaved with raw payload bytes. `ValueWriter` abstracts over the destination
//! so the packer can stay independent of where the bytes end up; the byte order is a
//! type parameter, fixed at the use site.

use crate::Blob;
use anyhow::Result;
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// A trait for writing values to a byte destination with a fixed byte order.
pub trait ValueWriter<E: ByteOrder> {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position.
	fn position(&mut self) -> Result<u64>;

	/// Returns `true` if nothing has been written yet.
	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an 8-bit unsigned integer.
	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	/// Writes a 32-bit signed integer using the specified byte order.
	fn write_i32(&mut self, value: i32) -> Result<()> {
		Ok(self.get_writer().write_i32::<E>(value)?)
	}

	/// Writes a 32-bit unsigned integer using the specified byte order.
	fn write_u32(&mut self, value: u32) -> Result<()> {
		Ok(self.get_writer().write_u32::<E>(value)?)
	}

	/// Writes the contents of a [`Blob`].
	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.get_writer().write_all(blob.as_slice())?;
		Ok(())
	}

	/// Writes a slice of bytes.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}
}
