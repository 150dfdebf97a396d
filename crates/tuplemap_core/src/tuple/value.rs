use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// One cell of a source row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Value {
	/// Explicit absence.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// 16-bit signed integer.
	I16(i16),
	/// 32-bit signed integer.
	I32(i32),
	/// 64-bit signed integer.
	I64(i64),
	/// 32-bit float.
	F32(f32),
	/// 64-bit float.
	F64(f64),
	/// Exact fixed-point number.
	Decimal(Decimal),
	/// UTF-8 text.
	String(String),
	/// Opaque byte payload.
	Bytes(Vec<u8>),
	/// Generic calendar value carrying a date and a time of day.
	Calendar(NaiveDateTime),
	/// Driver date: a calendar value whose time of day is always midnight.
	SqlDate(NaiveDate),
	/// Driver timestamp: date plus time of day.
	Timestamp(NaiveDateTime),
	/// Driver time-of-day.
	SqlTime(NaiveTime),
	/// Calendar date without time.
	Date(NaiveDate),
	/// Combined date and time.
	DateTime(NaiveDateTime),
	/// Time of day without date.
	Time(NaiveTime),
}

/// Runtime kind of a [`Value`], also used as the declared kind of fields and
/// initializer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum ValueKind {
	/// [`Value::Bool`].
	Bool,
	/// [`Value::I16`].
	I16,
	/// [`Value::I32`].
	I32,
	/// [`Value::I64`].
	I64,
	/// [`Value::F32`].
	F32,
	/// [`Value::F64`].
	F64,
	/// [`Value::Decimal`].
	Decimal,
	/// [`Value::String`].
	String,
	/// [`Value::Bytes`].
	Bytes,
	/// [`Value::Calendar`].
	Calendar,
	/// [`Value::SqlDate`].
	SqlDate,
	/// [`Value::Timestamp`].
	Timestamp,
	/// [`Value::SqlTime`].
	SqlTime,
	/// [`Value::Date`].
	Date,
	/// [`Value::DateTime`].
	DateTime,
	/// [`Value::Time`].
	Time,
}

impl Value {
	/// Runtime kind, or `None` for [`Value::Null`].
	pub fn kind(&self) -> Option<ValueKind> {
		let kind = match self {
			Self::Null => return None,
			Self::Bool(_) => ValueKind::Bool,
			Self::I16(_) => ValueKind::I16,
			Self::I32(_) => ValueKind::I32,
			Self::I64(_) => ValueKind::I64,
			Self::F32(_) => ValueKind::F32,
			Self::F64(_) => ValueKind::F64,
			Self::Decimal(_) => ValueKind::Decimal,
			Self::String(_) => ValueKind::String,
			Self::Bytes(_) => ValueKind::Bytes,
			Self::Calendar(_) => ValueKind::Calendar,
			Self::SqlDate(_) => ValueKind::SqlDate,
			Self::Timestamp(_) => ValueKind::Timestamp,
			Self::SqlTime(_) => ValueKind::SqlTime,
			Self::Date(_) => ValueKind::Date,
			Self::DateTime(_) => ValueKind::DateTime,
			Self::Time(_) => ValueKind::Time,
		};
		Some(kind)
	}

	/// Whether this is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl ValueKind {
	/// Stable lowercase label.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::Decimal => "decimal",
			Self::String => "string",
			Self::Bytes => "bytes",
			Self::Calendar => "calendar",
			Self::SqlDate => "sql_date",
			Self::Timestamp => "timestamp",
			Self::SqlTime => "sql_time",
			Self::Date => "date",
			Self::DateTime => "date_time",
			Self::Time => "time",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}
