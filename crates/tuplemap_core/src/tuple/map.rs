use tracing::debug;

use crate::tuple::{Coercion, CoercionTable, MapError, Result, TypeDescriptor, Value, Visibility};

/// Behavior switches for the field-assignment path.
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
	/// Rules tried when a value's kind differs from the field's kind.
	pub coercions: CoercionTable,
}

impl MapOptions {
	/// Preset that assigns exact kind matches only.
	pub fn exact_only() -> Self {
		Self {
			coercions: CoercionTable::none(),
		}
	}
}

/// Types that carry their own registered descriptor.
///
/// Implementations build the descriptor once and hand out the same
/// reference on every call, typically from a `static`
/// [`LazyLock`](std::sync::LazyLock):
///
/// ```
/// use std::sync::LazyLock;
///
/// use tuplemap::tuple::{Mapped, TypeDescriptor, Value};
///
/// #[derive(Debug, Default)]
/// struct Sensor {
/// 	reading: Option<i32>,
/// }
///
/// impl Mapped for Sensor {
/// 	fn descriptor() -> &'static TypeDescriptor<Self> {
/// 		static DESCRIPTOR: LazyLock<TypeDescriptor<Sensor>> = LazyLock::new(|| {
/// 			TypeDescriptor::builder("Sensor")
/// 				.column("reading", 0, |t: &mut Sensor, v: i32| t.reading = Some(v))
/// 				.with_default()
/// 				.build()
/// 		});
/// 		&DESCRIPTOR
/// 	}
/// }
///
/// let sensor = Sensor::assign_from(&[Value::I32(7)]).expect("maps");
/// assert_eq!(sensor.reading, Some(7));
/// ```
pub trait Mapped: Sized + 'static {
	/// Shared descriptor for `Self`.
	fn descriptor() -> &'static TypeDescriptor<Self>;

	/// Construct through the initializer matching the marked fields.
	fn from_values(values: &[Value]) -> Result<Self> {
		map_to_value_type(values, Self::descriptor())
	}

	/// Default-construct, then assign marked fields with temporal coercion.
	fn assign_from(values: &[Value]) -> Result<Self> {
		map_to_object(values, Self::descriptor())
	}
}

/// Build `T` by calling the initializer whose parameter kinds equal the
/// marked fields' kinds in declaration order.
///
/// Every marked position must lie inside `values`. Unmarked fields are not
/// part of the signature.
pub fn map_to_value_type<T>(values: &[Value], ty: &TypeDescriptor<T>) -> Result<T> {
	let mut params = Vec::new();
	let mut args = Vec::new();
	for (field, column) in ty.marked_fields() {
		let position = column.position();
		let value = values.get(position).ok_or_else(|| MapError::PositionOutOfBounds {
			type_name: ty.name().to_owned(),
			field: field.name().to_owned(),
			position,
			len: values.len(),
		})?;
		params.push(field.kind());
		args.push(value.clone());
	}

	let init = ty.initializer(&params).ok_or_else(|| MapError::NoMatchingConstructor {
		type_name: ty.name().to_owned(),
		params: params.clone(),
	})?;
	if init.visibility() != Visibility::Public {
		return Err(MapError::AccessDenied {
			type_name: ty.name().to_owned(),
		});
	}
	if ty.is_abstract() {
		return Err(MapError::Instantiation {
			type_name: ty.name().to_owned(),
		});
	}

	for (index, (value, expected)) in args.iter().zip(&params).enumerate() {
		let Some(got) = value.kind() else {
			continue;
		};
		if got != *expected {
			return Err(MapError::ArgumentMismatch {
				type_name: ty.name().to_owned(),
				index,
				expected: *expected,
				got,
			});
		}
	}

	init.invoke(args).map_err(|source| MapError::Invocation {
		type_name: ty.name().to_owned(),
		source,
	})
}

/// Default-construct `T`, then assign each marked field with the default
/// temporal coercions.
///
/// Out-of-range positions, nulls, and values no rule can fit leave the
/// field at its default. Only the no-argument initializer can fail.
pub fn map_to_object<T>(values: &[Value], ty: &TypeDescriptor<T>) -> Result<T> {
	map_to_object_with(values, ty, &MapOptions::default())
}

/// [`map_to_object`] with explicit options.
pub fn map_to_object_with<T>(values: &[Value], ty: &TypeDescriptor<T>, opt: &MapOptions) -> Result<T> {
	let mut target = instantiate(ty)?;

	for (field, column) in ty.marked_fields() {
		let position = column.position();
		let Some(value) = values.get(position) else {
			debug!(type_name = ty.name(), field = field.name(), position, len = values.len(), "position out of range, field skipped");
			continue;
		};
		if value.is_null() {
			debug!(type_name = ty.name(), field = field.name(), position, "null value, field skipped");
			continue;
		}

		match opt.coercions.coerce(value.clone(), field.kind()) {
			Coercion::Exact(value) | Coercion::Converted(value) => {
				field.assign(&mut target, value);
			}
			Coercion::Unchanged => {
				debug!(
					type_name = ty.name(),
					field = field.name(),
					position,
					expected = %field.kind(),
					got = ?value.kind(),
					"no coercion applies, field skipped"
				);
			}
		}
	}

	Ok(target)
}

fn instantiate<T>(ty: &TypeDescriptor<T>) -> Result<T> {
	let init = ty.default_initializer().ok_or_else(|| MapError::NoDefaultConstructor {
		type_name: ty.name().to_owned(),
	})?;
	if init.visibility() != Visibility::Public {
		return Err(MapError::AccessDenied {
			type_name: ty.name().to_owned(),
		});
	}
	if ty.is_abstract() {
		return Err(MapError::Instantiation {
			type_name: ty.name().to_owned(),
		});
	}
	init.invoke(Vec::new()).map_err(|source| MapError::Invocation {
		type_name: ty.name().to_owned(),
		source,
	})
}
