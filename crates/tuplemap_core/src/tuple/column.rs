/// Marker tying a field to one position of the source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
	position: usize,
}

impl Column {
	/// Mark the value at `position`.
	pub const fn new(position: usize) -> Self {
		Self { position }
	}

	/// Index into the source row that belongs to the marked field.
	pub const fn position(self) -> usize {
		self.position
	}
}
