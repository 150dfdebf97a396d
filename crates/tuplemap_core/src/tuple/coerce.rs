use chrono::NaiveTime;
use tracing::trace;

use crate::tuple::{Value, ValueKind};

/// One typed conversion from a set of source kinds to a target kind.
#[derive(Debug, Clone, Copy)]
pub struct CoercionRule {
	/// Short label used in trace output.
	pub name: &'static str,
	/// Source kinds this rule accepts.
	pub from: &'static [ValueKind],
	/// Target kind this rule produces.
	pub to: ValueKind,
	/// Converter; `None` when the value is not actually convertible.
	pub convert: fn(Value) -> Option<Value>,
}

/// Result of [`CoercionTable::coerce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
	/// Value already had the target kind.
	Exact(Value),
	/// A rule converted the value.
	Converted(Value),
	/// No rule applies; the value is dropped.
	Unchanged,
}

/// Ordered list of coercion rules. The first applicable rule wins.
#[derive(Debug, Clone)]
pub struct CoercionTable {
	rules: Vec<CoercionRule>,
}

const TEMPORAL_RULES: &[CoercionRule] = &[
	CoercionRule {
		name: "sql_date_to_date",
		from: &[ValueKind::SqlDate],
		to: ValueKind::Date,
		convert: sql_date_to_date,
	},
	CoercionRule {
		name: "calendar_to_date",
		from: &[ValueKind::Calendar, ValueKind::Timestamp],
		to: ValueKind::Date,
		convert: calendar_to_date,
	},
	CoercionRule {
		name: "calendar_to_date_time",
		from: &[ValueKind::Calendar, ValueKind::Timestamp],
		to: ValueKind::DateTime,
		convert: calendar_to_date_time,
	},
	CoercionRule {
		name: "sql_date_to_date_time",
		from: &[ValueKind::SqlDate],
		to: ValueKind::DateTime,
		convert: sql_date_to_date_time,
	},
	CoercionRule {
		name: "sql_time_to_time",
		from: &[ValueKind::SqlTime],
		to: ValueKind::Time,
		convert: sql_time_to_time,
	},
	CoercionRule {
		name: "timestamp_to_time",
		from: &[ValueKind::Timestamp],
		to: ValueKind::Time,
		convert: timestamp_to_time,
	},
];

impl Default for CoercionTable {
	fn default() -> Self {
		Self::temporal()
	}
}

impl CoercionTable {
	/// Date/time conversions between driver values and calendar values.
	pub fn temporal() -> Self {
		Self {
			rules: TEMPORAL_RULES.to_vec(),
		}
	}

	/// Exact kind matches only.
	pub fn none() -> Self {
		Self { rules: Vec::new() }
	}

	/// Append a rule after the existing ones.
	pub fn with_rule(mut self, rule: CoercionRule) -> Self {
		self.rules.push(rule);
		self
	}

	/// Rules in evaluation order.
	pub fn rules(&self) -> &[CoercionRule] {
		&self.rules
	}

	/// Fit `value` to `target`. Null and unmatched values yield
	/// [`Coercion::Unchanged`].
	pub fn coerce(&self, value: Value, target: ValueKind) -> Coercion {
		let Some(kind) = value.kind() else {
			return Coercion::Unchanged;
		};
		if kind == target {
			return Coercion::Exact(value);
		}

		let Some(rule) = self.rules.iter().find(|rule| rule.to == target && rule.from.contains(&kind)) else {
			return Coercion::Unchanged;
		};
		match (rule.convert)(value) {
			Some(converted) if converted.kind() == Some(target) => {
				trace!(rule = rule.name, from = %kind, to = %target, "coerced value");
				Coercion::Converted(converted)
			}
			_ => Coercion::Unchanged,
		}
	}
}

fn sql_date_to_date(value: Value) -> Option<Value> {
	match value {
		Value::SqlDate(date) => Some(Value::Date(date)),
		_ => None,
	}
}

fn calendar_to_date(value: Value) -> Option<Value> {
	match value {
		Value::Calendar(at) | Value::Timestamp(at) => Some(Value::Date(at.date())),
		_ => None,
	}
}

fn calendar_to_date_time(value: Value) -> Option<Value> {
	match value {
		Value::Calendar(at) | Value::Timestamp(at) => Some(Value::DateTime(at)),
		_ => None,
	}
}

fn sql_date_to_date_time(value: Value) -> Option<Value> {
	match value {
		Value::SqlDate(date) => Some(Value::DateTime(date.and_time(NaiveTime::MIN))),
		_ => None,
	}
}

fn sql_time_to_time(value: Value) -> Option<Value> {
	match value {
		Value::SqlTime(time) => Some(Value::Time(time)),
		_ => None,
	}
}

fn timestamp_to_time(value: Value) -> Option<Value> {
	match value {
		Value::Timestamp(at) => Some(Value::Time(at.time())),
		_ => None,
	}
}
