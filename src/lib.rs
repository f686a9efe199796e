//! # codemp-ot
//!
//! canonical operation sequences for collaborative text editing.
//!
//! a [Transform] accumulates [Operation]s (retain, insert, delete) describing how to turn a base
//! text of known length into a target text of known length. sequences are normalized while they
//! are built, so that the same edit always yields the same representation and can be compared
//! structurally.
//!
//! ```rust
//! use codemp_ot::{Operation, Transform};
//!
//! let mut change = Transform::new();
//! change.insert("Fizz").delete("Foo").insert("Bar");
//! assert_eq!(
//!   change.operations(),
//!   &[Operation::Insert("FizzBar".into()), Operation::Delete("Foo".into())]
//! );
//! ```
//!
//! transforms can also be generated against some text with a [TransformFactory].
//!
//! applying, composing, transforming or inverting sequences is left to the engine consuming them.

/// settings for builders and factories
pub mod config;

/// error types for fallible construction helpers
pub mod errors;

/// the primitive edit steps
pub mod operation;

/// the normalizing sequence builder
pub mod transform;

/// generate transforms from text containers
pub mod factory;

/// all-in-one renamed imports with `use codemp_ot::prelude::*`
pub mod prelude;

pub use config::{Config, LengthUnit};
pub use errors::{FactoryError, FactoryResult};
pub use factory::TransformFactory;
pub use operation::Operation;
pub use transform::Transform;
