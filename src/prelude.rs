//! ### Prelude
//!
//! all-in-one renamed imports with `use codemp_ot::prelude::*`

pub use crate::{
	FactoryError as CodempFactoryError,
	FactoryResult as CodempFactoryResult,
};

pub use crate::{
	Config as CodempOtConfig,
	LengthUnit as CodempLengthUnit,
	Operation as CodempOperation,
	Transform as CodempTransform,
	TransformFactory as CodempTransformFactory,
};
