//! # Config
//! Settings shared by transform builders and factories

use crate::errors::{FactoryError, FactoryResult};

/// how the length of text carried by inserts and deletes is counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
	/// utf-8 bytes, what most wire formats and rope libraries index by
	#[default]
	Bytes,
	/// unicode scalar values
	Chars,
}

impl LengthUnit {
	/// length of given text in this unit
	pub fn measure(&self, txt: &str) -> usize {
		match self {
			LengthUnit::Bytes => txt.len(),
			LengthUnit::Chars => txt.chars().count(),
		}
	}

	/// convert a position expressed in this unit into a byte offset inside given text
	///
	/// the position right after the last character is valid and maps to `txt.len()`
	pub fn offset(&self, txt: &str, pos: usize) -> FactoryResult<usize> {
		match self {
			LengthUnit::Bytes => {
				if pos > txt.len() {
					return Err(FactoryError::OutOfBounds { pos, len: txt.len() });
				}
				if !txt.is_char_boundary(pos) {
					return Err(FactoryError::NotCharBoundary { pos });
				}
				Ok(pos)
			},
			LengthUnit::Chars => txt
				.char_indices()
				.map(|(i, _)| i)
				.chain(std::iter::once(txt.len()))
				.nth(pos)
				.ok_or(FactoryError::OutOfBounds { pos, len: self.measure(txt) }),
		}
	}
}

/// Configuration struct for transform builders
#[derive(Debug, Clone, Default)]
pub struct Config {
	/// unit used to measure inserted and deleted text, default bytes
	pub unit: Option<LengthUnit>,
}

impl Config {
	#[inline]
	pub fn unit(&self) -> LengthUnit {
		self.unit.unwrap_or_default()
	}
}
