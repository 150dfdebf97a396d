use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::tuple::{Value, ValueKind};

/// Rust type that a mapped field or initializer parameter holds.
///
/// Every [`ValueKind`] has exactly one implementing type, so a field's
/// declared kind follows from its Rust type.
pub trait FieldType: Sized {
	/// Declared kind of fields of this type.
	const KIND: ValueKind;

	/// Extract the payload when `value` has exactly [`Self::KIND`].
	fn from_value(value: Value) -> Option<Self>;

	/// Wrap into a [`Value`] of kind [`Self::KIND`].
	fn into_value(self) -> Value;
}

/// Generic calendar value: a date with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Calendar(pub NaiveDateTime);

/// Driver date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlDate(pub NaiveDate);

/// Driver timestamp value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

/// Driver time-of-day value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlTime(pub NaiveTime);

macro_rules! field_type {
	($ty:ty, $kind:ident, |$v:ident| $wrap:expr, |$p:ident| $unwrap:expr) => {
		impl FieldType for $ty {
			const KIND: ValueKind = ValueKind::$kind;

			fn from_value(value: Value) -> Option<Self> {
				match value {
					Value::$kind($p) => Some($unwrap),
					_ => None,
				}
			}

			fn into_value(self) -> Value {
				let $v = self;
				Value::$kind($wrap)
			}
		}

		impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				value.into_value()
			}
		}

		impl From<Option<$ty>> for Value {
			fn from(value: Option<$ty>) -> Self {
				value.map_or(Value::Null, FieldType::into_value)
			}
		}
	};
	($ty:ty, $kind:ident) => {
		field_type!($ty, $kind, |v| v, |p| p);
	};
}

field_type!(bool, Bool);
field_type!(i16, I16);
field_type!(i32, I32);
field_type!(i64, I64);
field_type!(f32, F32);
field_type!(f64, F64);
field_type!(Decimal, Decimal);
field_type!(String, String);
field_type!(Vec<u8>, Bytes);
field_type!(NaiveDate, Date);
field_type!(NaiveDateTime, DateTime);
field_type!(NaiveTime, Time);
field_type!(Calendar, Calendar, |v| v.0, |p| Calendar(p));
field_type!(SqlDate, SqlDate, |v| v.0, |p| SqlDate(p));
field_type!(Timestamp, Timestamp, |v| v.0, |p| Timestamp(p));
field_type!(SqlTime, SqlTime, |v| v.0, |p| SqlTime(p));
