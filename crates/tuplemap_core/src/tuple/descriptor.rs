use std::fmt;

use crate::tuple::{Column, FieldType, InitError, Value, ValueKind};

type Setter<T> = Box<dyn Fn(&mut T, Value) + Send + Sync>;
type Construct<T> = Box<dyn Fn(&mut Arguments) -> std::result::Result<T, InitError> + Send + Sync>;

/// Whether the mapping engine may call an initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	/// Callable by the engine.
	Public,
	/// Registered but not callable; the engine reports access denied.
	Private,
}

/// Registered metadata for one target type.
///
/// Fields and initializers are kept in registration order, which stands in
/// for declaration order.
pub struct TypeDescriptor<T> {
	name: Box<str>,
	is_abstract: bool,
	fields: Vec<FieldDescriptor<T>>,
	initializers: Vec<Initializer<T>>,
}

/// One declared field.
pub struct FieldDescriptor<T> {
	name: Box<str>,
	kind: ValueKind,
	column: Option<Column>,
	setter: Option<Setter<T>>,
}

/// One registered initializer.
pub struct Initializer<T> {
	params: Vec<ValueKind>,
	visibility: Visibility,
	construct: Construct<T>,
}

/// Builder returned by [`TypeDescriptor::builder`].
pub struct DescriptorBuilder<T> {
	inner: TypeDescriptor<T>,
}

/// Positional arguments handed to an initializer.
#[derive(Debug)]
pub struct Arguments {
	values: std::vec::IntoIter<Value>,
	index: usize,
}

impl<T> TypeDescriptor<T> {
	/// Start registering a type called `name`.
	pub fn builder(name: impl Into<String>) -> DescriptorBuilder<T> {
		DescriptorBuilder {
			inner: Self {
				name: name.into().into_boxed_str(),
				is_abstract: false,
				fields: Vec::new(),
				initializers: Vec::new(),
			},
		}
	}

	/// Registered type name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Whether the type was registered as abstract.
	pub fn is_abstract(&self) -> bool {
		self.is_abstract
	}

	/// All declared fields, marked or not.
	pub fn fields(&self) -> &[FieldDescriptor<T>] {
		&self.fields
	}

	/// Fields carrying a [`Column`] marker, in declaration order.
	pub fn marked_fields(&self) -> impl Iterator<Item = (&FieldDescriptor<T>, Column)> {
		self.fields.iter().filter_map(|field| field.column.map(|column| (field, column)))
	}

	/// All registered initializers.
	pub fn initializers(&self) -> &[Initializer<T>] {
		&self.initializers
	}

	/// Initializer whose parameter kinds equal `params` exactly.
	pub fn initializer(&self, params: &[ValueKind]) -> Option<&Initializer<T>> {
		self.initializers.iter().find(|item| item.params == params)
	}

	/// The no-argument initializer, if registered.
	pub fn default_initializer(&self) -> Option<&Initializer<T>> {
		self.initializer(&[])
	}
}

impl<T> fmt::Debug for TypeDescriptor<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("name", &self.name)
			.field("is_abstract", &self.is_abstract)
			.field("fields", &self.fields)
			.field("initializers", &self.initializers)
			.finish()
	}
}

impl<T> FieldDescriptor<T> {
	/// Field name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared kind.
	pub fn kind(&self) -> ValueKind {
		self.kind
	}

	/// Attached marker, if any.
	pub fn column(&self) -> Option<Column> {
		self.column
	}

	/// Store `value` into `target`. Unmarked fields and values of another
	/// kind leave `target` untouched.
	pub(crate) fn assign(&self, target: &mut T, value: Value) {
		if let Some(setter) = &self.setter {
			setter(target, value);
		}
	}
}

impl<T> fmt::Debug for FieldDescriptor<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldDescriptor")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("column", &self.column)
			.finish_non_exhaustive()
	}
}

impl<T> Initializer<T> {
	/// Parameter kinds in order.
	pub fn params(&self) -> &[ValueKind] {
		&self.params
	}

	/// Registered visibility.
	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	pub(crate) fn invoke(&self, values: Vec<Value>) -> std::result::Result<T, InitError> {
		let mut args = Arguments::new(values);
		(self.construct)(&mut args)
	}
}

impl<T> fmt::Debug for Initializer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Initializer")
			.field("params", &self.params)
			.field("visibility", &self.visibility)
			.finish_non_exhaustive()
	}
}

impl<T: 'static> DescriptorBuilder<T> {
	/// Declare a field marked with `Column::new(position)`.
	pub fn column<V, F>(mut self, name: impl Into<String>, position: usize, set: F) -> Self
	where
		V: FieldType + 'static,
		F: Fn(&mut T, V) + Send + Sync + 'static,
	{
		let setter: Setter<T> = Box::new(move |target: &mut T, value: Value| {
			if let Some(value) = V::from_value(value) {
				set(target, value);
			}
		});
		self.inner.fields.push(FieldDescriptor {
			name: name.into().into_boxed_str(),
			kind: V::KIND,
			column: Some(Column::new(position)),
			setter: Some(setter),
		});
		self
	}

	/// Declare a field without a marker. The engine never touches it.
	pub fn field<V: FieldType>(mut self, name: impl Into<String>) -> Self {
		self.inner.fields.push(FieldDescriptor {
			name: name.into().into_boxed_str(),
			kind: V::KIND,
			column: None,
			setter: None,
		});
		self
	}

	/// Register an initializer taking `params` in order.
	///
	/// A later registration with the same parameter kinds replaces the
	/// earlier one.
	pub fn constructor<F>(mut self, params: impl Into<Vec<ValueKind>>, visibility: Visibility, construct: F) -> Self
	where
		F: Fn(&mut Arguments) -> std::result::Result<T, InitError> + Send + Sync + 'static,
	{
		let params = params.into();
		self.inner.initializers.retain(|item| item.params != params);
		self.inner.initializers.push(Initializer {
			params,
			visibility,
			construct: Box::new(construct),
		});
		self
	}

	/// Register the no-argument initializer.
	pub fn default_constructor<F>(self, visibility: Visibility, construct: F) -> Self
	where
		F: Fn() -> std::result::Result<T, InitError> + Send + Sync + 'static,
	{
		self.constructor(Vec::new(), visibility, move |_| construct())
	}

	/// Register `T::default` as the public no-argument initializer.
	pub fn with_default(self) -> Self
	where
		T: Default,
	{
		self.default_constructor(Visibility::Public, || Ok(T::default()))
	}

	/// Mark the type as abstract so instantiation fails.
	pub fn abstract_type(mut self) -> Self {
		self.inner.is_abstract = true;
		self
	}

	/// Finish registration.
	pub fn build(self) -> TypeDescriptor<T> {
		self.inner
	}
}

impl Arguments {
	fn new(values: Vec<Value>) -> Self {
		Self {
			values: values.into_iter(),
			index: 0,
		}
	}

	/// Arguments not yet consumed.
	pub fn remaining(&self) -> usize {
		self.values.len()
	}

	/// Next argument, failing on null, on exhaustion, or on a kind other
	/// than `V::KIND`.
	pub fn required<V: FieldType>(&mut self) -> std::result::Result<V, InitError> {
		let index = self.index;
		self.optional::<V>()?.ok_or_else(|| format!("argument {index} is null").into())
	}

	/// Next argument, `None` when it is null.
	pub fn optional<V: FieldType>(&mut self) -> std::result::Result<Option<V>, InitError> {
		let index = self.index;
		let value = self.values.next().ok_or_else(|| format!("argument {index} is missing"))?;
		self.index += 1;
		match value {
			Value::Null => Ok(None),
			other => match V::from_value(other) {
				Some(value) => Ok(Some(value)),
				None => Err(format!("argument {index} is not {}", V::KIND).into()),
			},
		}
	}
}

#[cfg(test)]
mod tests;
