//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tuplemap::tuple::{Mapped, SqlDate, TypeDescriptor, Value, ValueKind, Visibility};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Load a JSON fixture under `<workspace>/fixtures/rows` as source rows.
///
/// Panics when the file is missing or malformed.
pub fn load_rows(name: &str) -> Vec<Vec<Value>> {
	let path = fixture_path("rows").join(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("parse {}: {err}", path.display()))
}

/// Immutable order record built through its four-argument constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
	/// Order number.
	pub id: i64,
	/// Stock keeping unit, absent for free-form orders.
	pub sku: Option<String>,
	/// Driver date the order was placed.
	pub placed_on: SqlDate,
	/// Order total; never negative.
	pub total: Decimal,
}

static ORDER: LazyLock<TypeDescriptor<Order>> = LazyLock::new(|| {
	TypeDescriptor::builder("Order")
		.column("id", 0, |t: &mut Order, v: i64| t.id = v)
		.column("sku", 1, |t: &mut Order, v: String| t.sku = Some(v))
		.column("placed_on", 2, |t: &mut Order, v: SqlDate| t.placed_on = v)
		.column("total", 3, |t: &mut Order, v: Decimal| t.total = v)
		.constructor(
			vec![ValueKind::I64, ValueKind::String, ValueKind::SqlDate, ValueKind::Decimal],
			Visibility::Public,
			|args| {
				let id: i64 = args.required()?;
				let sku = args.optional()?;
				let placed_on: SqlDate = args.required()?;
				let total: Decimal = args.required()?;
				if total < Decimal::ZERO {
					return Err(format!("order {id} has negative total {total}").into());
				}
				Ok(Order { id, sku, placed_on, total })
			},
		)
		.build()
});

impl Mapped for Order {
	fn descriptor() -> &'static TypeDescriptor<Self> {
		&ORDER
	}
}

/// Mutable shipment populated field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shipment {
	/// Tracking code.
	pub id: Option<String>,
	/// Day the parcel was picked.
	pub picked_on: Option<NaiveDate>,
	/// Dispatch moment.
	pub dispatched_at: Option<NaiveDateTime>,
	/// Daily cutoff time.
	pub cutoff: Option<NaiveTime>,
	/// Fragile handling flag.
	pub fragile: bool,
	/// Carrier name, never mapped.
	pub carrier: Option<String>,
}

static SHIPMENT: LazyLock<TypeDescriptor<Shipment>> = LazyLock::new(|| {
	TypeDescriptor::builder("Shipment")
		.column("id", 0, |t: &mut Shipment, v: String| t.id = Some(v))
		.column("picked_on", 1, |t: &mut Shipment, v: NaiveDate| t.picked_on = Some(v))
		.column("dispatched_at", 2, |t: &mut Shipment, v: NaiveDateTime| t.dispatched_at = Some(v))
		.column("cutoff", 3, |t: &mut Shipment, v: NaiveTime| t.cutoff = Some(v))
		.column("fragile", 4, |t: &mut Shipment, v: bool| t.fragile = v)
		.field::<String>("carrier")
		.with_default()
		.build()
});

impl Mapped for Shipment {
	fn descriptor() -> &'static TypeDescriptor<Self> {
		&SHIPMENT
	}
}
