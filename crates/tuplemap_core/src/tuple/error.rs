use thiserror::Error;

use crate::tuple::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MapError>;

/// Failure raised by a registered initializer.
pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while materializing a target type from a source row.
#[derive(Debug, Error)]
pub enum MapError {
	/// No initializer accepts the marked field kinds in declaration order.
	#[error("no constructor on {type_name} matches ({})", join_kinds(.params))]
	NoMatchingConstructor {
		/// Target type name.
		type_name: String,
		/// Collected parameter kinds.
		params: Vec<ValueKind>,
	},
	/// Target type registered no no-argument initializer.
	#[error("{type_name} has no no-argument constructor")]
	NoDefaultConstructor {
		/// Target type name.
		type_name: String,
	},
	/// Matching initializer exists but is not public.
	#[error("constructor of {type_name} is not accessible")]
	AccessDenied {
		/// Target type name.
		type_name: String,
	},
	/// Target type is declared abstract and cannot be instantiated.
	#[error("{type_name} cannot be instantiated")]
	Instantiation {
		/// Target type name.
		type_name: String,
	},
	/// Marked position is past the end of the source row.
	#[error("{type_name}.{field}: position {position} out of bounds for row of length {len}")]
	PositionOutOfBounds {
		/// Target type name.
		type_name: String,
		/// Marked field name.
		field: String,
		/// Marked position.
		position: usize,
		/// Source row length.
		len: usize,
	},
	/// Non-null argument does not have the parameter's kind.
	#[error("{type_name}: argument {index} expected {expected}, got {got}")]
	ArgumentMismatch {
		/// Target type name.
		type_name: String,
		/// Zero-based argument index.
		index: usize,
		/// Declared parameter kind.
		expected: ValueKind,
		/// Runtime kind of the supplied value.
		got: ValueKind,
	},
	/// The initializer itself failed.
	#[error("constructor of {type_name} failed: {source}")]
	Invocation {
		/// Target type name.
		type_name: String,
		/// Original failure.
		#[source]
		source: InitError,
	},
}

/// Coarse grouping of [`MapError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
	/// Type definition does not fit the engine; fix the type.
	Configuration,
	/// Row is shorter than the marked positions; fix the input.
	Bounds,
	/// Type's own construction logic failed.
	Invocation,
}

impl MapError {
	/// Classify the error.
	pub fn category(&self) -> ErrorCategory {
		match self {
			Self::PositionOutOfBounds { .. } => ErrorCategory::Bounds,
			Self::Invocation { .. } => ErrorCategory::Invocation,
			Self::NoMatchingConstructor { .. }
			| Self::NoDefaultConstructor { .. }
			| Self::AccessDenied { .. }
			| Self::Instantiation { .. }
			| Self::ArgumentMismatch { .. } => ErrorCategory::Configuration,
		}
	}
}

fn join_kinds(kinds: &[ValueKind]) -> String {
	kinds.iter().map(|kind| kind.name()).collect::<Vec<_>>().join(", ")
}
