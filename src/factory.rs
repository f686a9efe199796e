//! ### factory
//!
//! a helper trait that any string container can implement, which generates transforms
//!
//! a [TransformFactory] implementation is provided for [String], but editor
//! integrations should implement their own factory interfacing directly with the editor
//! buffer when possible.

use std::ops::Range;

use similar::{ChangeTag, TextDiff};

use crate::config::LengthUnit;
use crate::errors::{FactoryError, FactoryResult};
use crate::operation::Operation;
use crate::transform::Transform;

/// calculate leading no-ops in given operation sequence
pub fn leading_noop(seq: &[Operation]) -> usize { count_noop(seq.first()) }

/// calculate tailing no-ops in given operation sequence
pub fn tailing_noop(seq: &[Operation]) -> usize { count_noop(seq.last()) }

fn count_noop(op: Option<&Operation>) -> usize {
	match op {
		Some(Operation::Retain(n)) => *n,
		_ => 0,
	}
}

/// return the range of the base text on which the transform is actually applying its changes
///
/// a transform which changes nothing yields an empty range
pub fn effective_range(op: &Transform) -> Range<usize> {
	match op.operations() {
		[] => 0..0,
		[Operation::Retain(n)] => *n..*n,
		seq => leading_noop(seq)..op.base_len() - tailing_noop(seq),
	}
}

/// a helper trait that any string container can implement, which generates transforms
///
/// all transforms are built against the current state, obtainable with
/// [TransformFactory::content]. generating a transform has no effect on internal state.
/// positions and counts are measured in [TransformFactory::unit].
///
/// ### examples
///
/// use [TransformFactory::ins] to add new characters at a specific index
///
/// ```rust
/// use codemp_ot::{Operation, TransformFactory};
///
/// let change = String::from("asd").ins(" dsa", 3)?;
/// assert_eq!(
///   change.operations(),
///   &[Operation::Retain(3), Operation::Insert(" dsa".into())]
/// );
/// # Ok::<(), codemp_ot::FactoryError>(())
/// ```
///
/// use [TransformFactory::diff] to arbitrarily change text at any position
///
/// ```rust
/// # use codemp_ot::TransformFactory;
/// let change = String::from("asd dsa")
///   .diff(2, " xxx ", 5)?
///   .expect("replaced region is equal to origin");
/// assert_eq!(change.base_len(), 7);
/// assert_eq!(change.target_len(), 9);
/// # Ok::<(), codemp_ot::FactoryError>(())
/// ```
///
/// use [TransformFactory::del] to remove characters from given index
///
/// ```rust
/// # use codemp_ot::{Operation, TransformFactory};
/// let change = String::from("as xxx sa").del(2, 5)?;
/// assert_eq!(
///   change.operations(),
///   &[Operation::Retain(2), Operation::Delete(" xxx ".into()), Operation::Retain(2)]
/// );
/// # Ok::<(), codemp_ot::FactoryError>(())
/// ```
pub trait TransformFactory {
	/// the current content of the buffer
	fn content(&self) -> String;

	/// unit in which positions, counts and resulting lengths are expressed
	fn unit(&self) -> LengthUnit {
		LengthUnit::default()
	}

	/// completely replace the buffer with given text
	fn replace(&self, txt: &str) -> Option<Transform> {
		framed_diff(self.unit(), 0, &self.content(), txt, 0)
	}

	/// transform buffer in range [start..end] with given text
	///
	/// returns `None` if the range already holds given text
	fn diff(&self, start: usize, txt: &str, end: usize) -> FactoryResult<Option<Transform>> {
		if start > end {
			tracing::debug!("refusing inverted diff range {start}..{end}");
			return Err(FactoryError::InvertedRange { start, end });
		}
		let unit = self.unit();
		let content = self.content();
		let from = unit.offset(&content, start)?;
		let to = unit.offset(&content, end)?;
		let tail = unit.measure(&content[to..]);
		Ok(framed_diff(unit, start, &content[from..to], txt, tail))
	}

	/// insert given chars at target position
	fn ins(&self, txt: &str, pos: usize) -> FactoryResult<Transform> {
		let unit = self.unit();
		let content = self.content();
		let total = unit.measure(&content);
		unit.offset(&content, pos)?;
		let mut out = Transform::with_unit(unit);
		out.retain_len(pos)
			.insert(txt)
			.retain_len(total - pos);
		Ok(out)
	}

	/// delete n characters forward at given position
	fn del(&self, pos: usize, count: usize) -> FactoryResult<Transform> {
		let unit = self.unit();
		let content = self.content();
		let total = unit.measure(&content);
		let end = pos.checked_add(count)
			.ok_or(FactoryError::Overflow { pos, count })?;
		let from = unit.offset(&content, pos)?;
		let to = unit.offset(&content, end)?;
		let mut out = Transform::with_unit(unit);
		out.retain_len(pos)
			.delete(&content[from..to])
			.retain_len(total - end);
		Ok(out)
	}

	/// delete n characters backwards at given position
	fn canc(&self, pos: usize, count: usize) -> FactoryResult<Transform> {
		let start = pos.checked_sub(count)
			.ok_or(FactoryError::Underflow { pos, count })?;
		self.del(start, count)
	}
}

fn framed_diff(unit: LengthUnit, head: usize, before: &str, after: &str, tail: usize) -> Option<Transform> {
	if before == after {
		tracing::debug!("diff produced no change");
		return None;
	}

	let mut out = Transform::with_unit(unit);
	out.retain_len(head);

	let diff = TextDiff::from_chars(before, after);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Equal => out.retain_len(unit.measure(change.value())),
			ChangeTag::Delete => out.delete(change.value()),
			ChangeTag::Insert => out.insert(change.value()),
		};
	}

	out.retain_len(tail);

	Some(out)
}

impl TransformFactory for String {
	fn content(&self) -> String {
		self.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::{effective_range, leading_noop, tailing_noop, TransformFactory};
	use crate::config::LengthUnit;
	use crate::errors::FactoryError;
	use crate::operation::Operation;
	use crate::transform::Transform;

	struct CharBuffer(String);

	impl TransformFactory for CharBuffer {
		fn content(&self) -> String {
			self.0.clone()
		}

		fn unit(&self) -> LengthUnit {
			LengthUnit::Chars
		}
	}

	#[test]
	fn ins_frames_insert_with_retains() {
		let change = String::from("hello world!").ins(" cruel", 5).expect("position in range");
		assert_eq!(
			change.operations(),
			&[Operation::Retain(5), Operation::Insert(" cruel".into()), Operation::Retain(7)]
		);
		assert_eq!(change.base_len(), 12);
		assert_eq!(change.target_len(), 18);
	}

	#[test]
	fn ins_at_end_has_no_trailing_retain() {
		let change = String::from("abc").ins("d", 3).expect("end position is valid");
		assert_eq!(change.operations(), &[Operation::Retain(3), Operation::Insert("d".into())]);
	}

	#[test]
	fn ins_past_end_is_rejected() {
		assert_eq!(String::from("abc").ins("d", 4), Err(FactoryError::OutOfBounds { pos: 4, len: 3 }));
	}

	#[test]
	fn del_carries_deleted_text() {
		let change = String::from("hello cruel world!").del(5, 6).expect("range in bounds");
		assert_eq!(
			change.operations(),
			&[Operation::Retain(5), Operation::Delete(" cruel".into()), Operation::Retain(7)]
		);
		assert_eq!(change.base_len(), 18);
		assert_eq!(change.target_len(), 12);
	}

	#[test]
	fn del_past_end_is_rejected() {
		assert_eq!(String::from("abc").del(2, 5), Err(FactoryError::OutOfBounds { pos: 7, len: 3 }));
	}

	#[test]
	fn del_reports_overflowing_range_with_caller_position() {
		assert_eq!(
			String::from("abc").del(usize::MAX, 2),
			Err(FactoryError::Overflow { pos: usize::MAX, count: 2 })
		);
	}

	#[test]
	fn canc_deletes_backwards() {
		let change = String::from("from scratch").canc(12, 8).expect("range in bounds");
		assert_eq!(
			change.operations(),
			&[Operation::Retain(4), Operation::Delete(" scratch".into())]
		);
		assert_eq!(String::from("abc").canc(1, 2), Err(FactoryError::Underflow { pos: 1, count: 2 }));
	}

	#[test]
	fn diff_of_equal_slice_is_none() {
		assert_eq!(String::from("same \n\n text").diff(0, "same", 4), Ok(None));
		assert_eq!(String::from("same \n\n text").replace("same \n\n text"), None);
	}

	#[test]
	fn diff_is_framed_by_retains() {
		let change = String::from("sphinx of black quartz, judge my vow")
.diff(10, "", 16)
			.expect("range in bounds")
			.expect("range is not empty");
		assert_eq!(
			change.operations(),
			&[Operation::Retain(10), Operation::Delete("black ".into()), Operation::Retain(20)]
		);
	}

	#[test]
	fn diff_replacements_put_inserts_first() {
		let change = String::from("abc").replace("axc").expect("content differs");
		assert_eq!(
			change.operations(),
			&[
				Operation::Retain(1),
				Operation::Insert("x".into()),
				Operation::Delete("b".into()),
				Operation::Retain(1),
			]
		);
		assert_eq!(change, Transform::new().retain(1).delete("b").insert("x").retain(1).clone());
	}

	#[test]
	fn diff_rejects_bad_ranges() {
		assert_eq!(String::from("abc").diff(2, "x", 1), Err(FactoryError::InvertedRange { start: 2, end: 1 }));
		assert_eq!(String::from("héllo").diff(2, "x", 3), Err(FactoryError::NotCharBoundary { pos: 2 }));
	}

	#[test]
	fn char_factories_count_scalar_values() {
		let buffer = CharBuffer("héllo".into());
		let change = buffer.del(1, 1).expect("range in bounds");
		assert_eq!(
			change.operations(),
			&[Operation::Retain(1), Operation::Delete("é".into()), Operation::Retain(3)]
		);
		assert_eq!(change.base_len(), 5);
		assert_eq!(change.unit(), LengthUnit::Chars);

		let change = buffer.replace("hallo").expect("content differs");
		assert_eq!(change.base_len(), 5);
		assert_eq!(change.target_len(), 5);
	}

	#[test]
	fn effective_range_skips_surrounding_retains() {
		let change = String::from("hello cruel world!").del(5, 6).expect("range in bounds");
		assert_eq!(leading_noop(change.operations()), 5);
		assert_eq!(tailing_noop(change.operations()), 7);
		assert_eq!(effective_range(&change), 5..11);
		assert_eq!(effective_range(&Transform::new()), 0..0);
		assert_eq!(effective_range(Transform::new().retain(4)), 4..4);
		assert_eq!(effective_range(Transform::new().insert("a")), 0..0);
	}
}
