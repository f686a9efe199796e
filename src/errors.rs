//! ### Errors
//!
//! building a [crate::Transform] never fails: out of domain inputs are no-ops.
//! producing one from a [crate::factory::TransformFactory] can still be asked to address text
//! which isn't there, and that is reported here.

pub type FactoryResult<T> = std::result::Result<T, FactoryError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
	#[error("position {pos} is out of bounds for content of length {len}")]
	OutOfBounds { pos: usize, len: usize },

	#[error("byte position {pos} does not fall on a character boundary")]
	NotCharBoundary { pos: usize },

	#[error("range start {start} is past its end {end}")]
	InvertedRange { start: usize, end: usize },

	#[error("range of {count} characters from position {pos} overflows")]
	Overflow { pos: usize, count: usize },

	#[error("cannot delete {count} characters backwards from position {pos}")]
	Underflow { pos: usize, count: usize },
}

#[cfg(test)]
mod tests {
	use super::FactoryError;

	#[test]
	fn errors_render_their_positions() {
		let err = FactoryError::OutOfBounds { pos: 12, len: 4 };
		assert_eq!(err.to_string(), "position 12 is out of bounds for content of length 4");
		let err = FactoryError::InvertedRange { start: 5, end: 2 };
		assert_eq!(err.to_string(), "range start 5 is past its end 2");
	}
}
