//! ### Operation
//! A single primitive edit step.

use crate::config::LengthUnit;

/// one primitive edit, part of a [crate::Transform]
///
/// operations carry the text they insert or delete, so that a sequence can be inspected and
/// compared without access to the buffer it was built against.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// skip over this many unchanged units, in both base and target
	Retain(usize),
	/// add this text to the target, consuming nothing from the base
	Insert(String),
	/// remove this text from the base, producing nothing in the target
	Delete(String),
}

impl Operation {
	/// how much of the base text this operation consumes
	pub fn base_len(&self, unit: LengthUnit) -> usize {
		match self {
			Operation::Retain(n) => *n,
			Operation::Insert(_) => 0,
			Operation::Delete(txt) => unit.measure(txt),
		}
	}

	/// how much of the target text this operation produces
	pub fn target_len(&self, unit: LengthUnit) -> usize {
		match self {
			Operation::Retain(n) => *n,
			Operation::Insert(txt) => unit.measure(txt),
			Operation::Delete(_) => 0,
		}
	}

	pub fn is_retain(&self) -> bool {
		matches!(self, Operation::Retain(_))
	}

	pub fn is_insert(&self) -> bool {
		matches!(self, Operation::Insert(_))
	}

	pub fn is_delete(&self) -> bool {
		matches!(self, Operation::Delete(_))
	}
}

impl std::fmt::Display for Operation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Operation::Retain(n) => write!(f, "retain({n})"),
			Operation::Insert(txt) => write!(f, "insert({txt:?})"),
			Operation::Delete(txt) => write!(f, "delete({txt:?})"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Operation;
	use crate::config::LengthUnit;

	#[test]
	fn operations_of_different_kinds_never_match() {
		assert_ne!(Operation::Insert("Foo".into()), Operation::Delete("Foo".into()));
		assert_ne!(Operation::Retain(3), Operation::Insert("Foo".into()));
		assert_eq!(Operation::Delete("Foo".into()), Operation::Delete("Foo".into()));
		assert_ne!(Operation::Retain(5), Operation::Retain(9));
	}

	#[test]
	fn lengths_follow_the_side_each_kind_touches() {
		let unit = LengthUnit::Bytes;
		assert_eq!(Operation::Retain(4).base_len(unit), 4);
		assert_eq!(Operation::Retain(4).target_len(unit), 4);
		assert_eq!(Operation::Insert("Fizz".into()).base_len(unit), 0);
		assert_eq!(Operation::Insert("Fizz".into()).target_len(unit), 4);
		assert_eq!(Operation::Delete("Foo".into()).base_len(unit), 3);
		assert_eq!(Operation::Delete("Foo".into()).target_len(unit), 0);
		assert_eq!(Operation::Delete("çà".into()).base_len(LengthUnit::Chars), 2);
	}

	#[test]
	fn operations_display_as_calls() {
		assert_eq!(Operation::Retain(4).to_string(), "retain(4)");
		assert_eq!(Operation::Insert("Bar".into()).to_string(), "insert(\"Bar\")");
		assert_eq!(Operation::Delete("Foo".into()).to_string(), "delete(\"Foo\")");
	}
}
