use crate::tuple::{Column, TypeDescriptor, Value, ValueKind, Visibility};

#[derive(Debug, Default)]
struct Pair {
	left: Option<i32>,
	right: Option<String>,
}

fn pair_descriptor() -> TypeDescriptor<Pair> {
	TypeDescriptor::builder("Pair")
		.column("left", 1, |t: &mut Pair, v: i32| t.left = Some(v))
		.field::<bool>("flag")
		.column("right", 0, |t: &mut Pair, v: String| t.right = Some(v))
		.with_default()
		.constructor(vec![ValueKind::I32, ValueKind::String], Visibility::Public, |args| {
			Ok(Pair {
				left: args.optional()?,
				right: args.optional()?,
			})
		})
		.build()
}

#[test]
fn fields_keep_declaration_order() {
	let ty = pair_descriptor();
	let names: Vec<&str> = ty.fields().iter().map(|field| field.name()).collect();
	assert_eq!(names, ["left", "flag", "right"]);
	assert_eq!(ty.fields()[1].kind(), ValueKind::Bool);
	assert_eq!(ty.fields()[1].column(), None);
}

#[test]
fn marked_fields_skip_unmarked() {
	let ty = pair_descriptor();
	let marked: Vec<(&str, usize)> = ty.marked_fields().map(|(field, column)| (field.name(), column.position())).collect();
	assert_eq!(marked, [("left", 1), ("right", 0)]);
}

#[test]
fn column_position_is_queryable() {
	assert_eq!(Column::new(7).position(), 7);
	let ty = pair_descriptor();
	assert_eq!(ty.fields()[2].column(), Some(Column::new(0)));
}

#[test]
fn initializer_lookup_is_by_exact_signature() {
	let ty = pair_descriptor();
	assert!(ty.initializer(&[ValueKind::I32, ValueKind::String]).is_some());
	assert!(ty.initializer(&[ValueKind::String, ValueKind::I32]).is_none());
	assert!(ty.initializer(&[ValueKind::I32]).is_none());
	assert!(ty.default_initializer().is_some());
	assert_eq!(ty.initializers().len(), 2);
}

#[test]
fn same_signature_replaces_previous_initializer() {
	let ty = TypeDescriptor::<Pair>::builder("Pair")
		.default_constructor(Visibility::Private, || Ok(Pair::default()))
		.with_default()
		.build();
	assert_eq!(ty.initializers().len(), 1);
	assert_eq!(ty.default_initializer().map(|init| init.visibility()), Some(Visibility::Public));
}

#[test]
fn setter_rejects_other_kinds() {
	let ty = pair_descriptor();
	let mut pair = Pair::default();
	ty.fields()[0].assign(&mut pair, Value::I64(3));
	assert_eq!(pair.left, None, "i64 does not fit an i32 field");
	ty.fields()[0].assign(&mut pair, Value::I32(3));
	ty.fields()[1].assign(&mut pair, Value::Bool(true));
	ty.fields()[2].assign(&mut pair, Value::I32(4));
	assert_eq!(pair.left, Some(3));
	assert_eq!(pair.right, None);
}

#[test]
fn arguments_report_null_and_wrong_kind() {
	let ty = TypeDescriptor::<i32>::builder("Wrapped")
		.constructor(vec![ValueKind::I32], Visibility::Public, |args| args.required())
		.build();
	let init = ty.initializer(&[ValueKind::I32]).expect("initializer registered");

	assert_eq!(init.invoke(vec![Value::I32(5)]).expect("constructs"), 5);

	let err = init.invoke(vec![Value::Null]).expect_err("null is rejected");
	assert_eq!(err.to_string(), "argument 0 is null");

	let err = init.invoke(vec![Value::Bool(true)]).expect_err("wrong kind is rejected");
	assert_eq!(err.to_string(), "argument 0 is not i32");

	let err = init.invoke(Vec::new()).expect_err("missing argument is rejected");
	assert_eq!(err.to_string(), "argument 0 is missing");
}

#[test]
fn abstract_flag_is_recorded() {
	let ty = TypeDescriptor::<Pair>::builder("Shape").abstract_type().with_default().build();
	assert!(ty.is_abstract());
	assert_eq!(ty.name(), "Shape");
}
