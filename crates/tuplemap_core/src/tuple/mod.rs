mod coerce;
mod column;
mod descriptor;
mod error;
mod field;
mod map;
#[cfg(test)]
mod test_support;
mod value;

/// Ordered coercion rules applied on the field-assignment path.
pub use coerce::{Coercion, CoercionRule, CoercionTable};
/// Positional field marker.
pub use column::Column;
/// Registered type metadata standing in for runtime reflection.
pub use descriptor::{Arguments, DescriptorBuilder, FieldDescriptor, Initializer, TypeDescriptor, Visibility};
/// Error and result aliases.
pub use error::{ErrorCategory, InitError, MapError, Result};
/// Rust types that can be stored in a mapped field.
pub use field::{Calendar, FieldType, SqlDate, SqlTime, Timestamp};
/// Mapping entry points and options.
pub use map::{MapOptions, Mapped, map_to_object, map_to_object_with, map_to_value_type};
/// Dynamically typed source cells.
pub use value::{Value, ValueKind};
