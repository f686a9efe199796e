//! ### Transform
//! A normalizing builder for operation sequences.
//!
//! every [Transform] describes how to turn a base text into a target text. construction calls
//! always leave the sequence in canonical form, so two transforms describing the same edit
//! compare equal:
//! * adjacent operations of the same kind are merged
//! * inserts are kept before deletes at the same position
//! * empty retains, inserts and deletes are dropped

use crate::config::{Config, LengthUnit};
use crate::operation::Operation;

/// an ordered, normalized sequence of [Operation]s, with base and target lengths
///
/// mutators work in place and return the same builder, so calls can be chained:
///
/// ```rust
/// use codemp_ot::{Operation, Transform};
///
/// let mut change = Transform::new();
/// change.retain(4).delete("Foo").insert("Bar");
/// assert_eq!(
///   change.operations(),
///   &[
///     Operation::Retain(4),
///     Operation::Insert("Bar".into()),
///     Operation::Delete("Foo".into()),
///   ]
/// );
/// assert_eq!(change.base_len(), 7);
/// assert_eq!(change.target_len(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transform {
	operations: Vec<Operation>,
	base_len: usize,
	target_len: usize,
	unit: LengthUnit,
}

impl Transform {
	/// an empty transform, measuring text in bytes
	pub fn new() -> Self {
		Self::default()
	}

	/// an empty transform, measuring text in given unit
	pub fn with_unit(unit: LengthUnit) -> Self {
		Transform { unit, ..Default::default() }
	}

	pub fn with_config(config: &Config) -> Self {
		Self::with_unit(config.unit())
	}

	/// current operation sequence, empty for a fresh transform
	pub fn operations(&self) -> &[Operation] {
		&self.operations
	}

	pub fn into_operations(self) -> Vec<Operation> {
		self.operations
	}

	/// length of the text this transform applies to
	pub fn base_len(&self) -> usize {
		self.base_len
	}

	/// length of the text this transform produces
	pub fn target_len(&self) -> usize {
		self.target_len
	}

	pub fn unit(&self) -> LengthUnit {
		self.unit
	}

	/// number of operations in the sequence
	pub fn len(&self) -> usize {
		self.operations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.operations.is_empty()
	}

	/// true if applying this transform would leave the text unchanged
	pub fn is_noop(&self) -> bool {
		matches!(self.operations.as_slice(), [] | [Operation::Retain(_)])
	}

	pub(crate) fn last(&self) -> Option<&Operation> {
		self.operations.last()
	}

	pub(crate) fn penultimate(&self) -> Option<&Operation> {
		let index = self.operations.len().checked_sub(2)?;
		self.operations.get(index)
	}

	/// skip over `length` unchanged units; values below 1 are ignored
	pub fn retain(&mut self, length: isize) -> &mut Self {
		if length < 1 {
			tracing::trace!("dropping retain of length {length}");
			return self;
		}
		self.retain_len(length.unsigned_abs())
	}

	pub(crate) fn retain_len(&mut self, length: usize) -> &mut Self {
		if length == 0 {
			return self;
		}

		self.base_len = self.base_len.saturating_add(length);
		self.target_len = self.target_len.saturating_add(length);

		match self.operations.last_mut() {
			Some(Operation::Retain(n)) => *n = n.saturating_add(length),
			_ => self.operations.push(Operation::Retain(length)),
		}

		self
	}

	/// add `content` to the target; empty content is ignored
	///
	/// an insert following a delete is placed before it, merging into a preceding insert if
	/// there is one: `delete(x).insert(y)` and `insert(y).delete(x)` build the same sequence
	pub fn insert(&mut self, content: &str) -> &mut Self {
		if content.is_empty() {
			tracing::trace!("dropping empty insert");
			return self;
		}

		self.target_len = self.target_len.saturating_add(self.unit.measure(content));

		let len = self.operations.len();
		match (self.penultimate(), self.last()) {
			(_, Some(Operation::Insert(_))) => self.extend_at(len - 1, content),
			(Some(Operation::Insert(_)), Some(Operation::Delete(_))) => {
				tracing::trace!("merging insert into the one preceding trailing delete");
				self.extend_at(len - 2, content);
			},
			(_, Some(Operation::Delete(_))) => {
				tracing::trace!("moving insert before trailing delete");
				self.operations.insert(len - 1, Operation::Insert(content.to_string()));
			},
			_ => self.operations.push(Operation::Insert(content.to_string())),
		}

		self
	}

	/// remove `content` from the base; empty content is ignored
	pub fn delete(&mut self, content: &str) -> &mut Self {
		if content.is_empty() {
			tracing::trace!("dropping empty delete");
			return self;
		}

		self.base_len = self.base_len.saturating_add(self.unit.measure(content));

		match self.operations.last_mut() {
			Some(Operation::Delete(txt)) => txt.push_str(content),
			_ => self.operations.push(Operation::Delete(content.to_string())),
		}

		self
	}

	/// append an arbitrary operation, normalizing it like the matching mutator would
	pub fn push(&mut self, op: Operation) -> &mut Self {
		match op {
			Operation::Retain(n) => self.retain_len(n),
			Operation::Insert(txt) => self.insert(&txt),
			Operation::Delete(txt) => self.delete(&txt),
		}
	}

	fn extend_at(&mut self, index: usize, content: &str) {
		if let Some(Operation::Insert(txt) | Operation::Delete(txt)) = self.operations.get_mut(index) {
			txt.push_str(content);
		}
	}
}

impl PartialEq for Transform {
	fn eq(&self, other: &Self) -> bool {
		self.base_len == other.base_len
			&& self.target_len == other.target_len
			&& self.operations.len() == other.operations.len()
			&& self.operations.iter().zip(other.operations.iter()).all(|(a, b)| a == b)
	}
}

impl Eq for Transform {}

impl Extend<Operation> for Transform {
	fn extend<T: IntoIterator<Item = Operation>>(&mut self, iter: T) {
		for op in iter {
			self.push(op);
		}
	}
}

impl FromIterator<Operation> for Transform {
	fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
		let mut out = Transform::new();
		out.extend(iter);
		out
	}
}

impl std::fmt::Display for Transform {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[")?;
		for (i, op) in self.operations.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{op}")?;
		}
		write!(f, "] ({} -> {})", self.base_len, self.target_len)
	}
}
