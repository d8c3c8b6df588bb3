//! Row model for paginated tables

/// Trait for items the paginator can show and hide
///
/// The paginator never inspects presentation state to decide whether a row
/// takes part in pagination; it reads [`is_filtered`](PageableRow::is_filtered)
/// and writes the visibility flag through
/// [`set_visible`](PageableRow::set_visible).
pub trait PageableRow {
	/// Returns whether the host excluded this row from pagination
	fn is_filtered(&self) -> bool;

	/// Shows or hides the row
	fn set_visible(&mut self, visible: bool);

	/// Returns whether the row is currently shown
	fn is_visible(&self) -> bool;
}

/// A table row carrying a payload and its pagination flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T> {
	item: T,
	filtered: bool,
	visible: bool,
}

impl<T> Row<T> {
	/// Creates a visible, non-filtered row
	pub fn new(item: T) -> Self {
		Self {
			item,
			filtered: false,
			visible: true,
		}
	}

	/// Sets the filtered designation while building a row
	pub fn filtered(mut self, filtered: bool) -> Self {
		self.filtered = filtered;
		self
	}

	/// Returns the row payload
	pub fn item(&self) -> &T {
		&self.item
	}

	/// Returns the row payload mutably
	pub fn item_mut(&mut self) -> &mut T {
		&mut self.item
	}

	/// Consumes the row and returns its payload
	pub fn into_item(self) -> T {
		self.item
	}

	/// Changes the filtered designation
	///
	/// Visibility is left untouched; the next setup recomputes it.
	pub fn set_filtered(&mut self, filtered: bool) {
		self.filtered = filtered;
	}
}

impl<T> PageableRow for Row<T> {
	fn is_filtered(&self) -> bool {
		self.filtered
	}

	fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	fn is_visible(&self) -> bool {
		self.visible
	}
}

impl<T> From<T> for Row<T> {
	fn from(item: T) -> Self {
		Self::new(item)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_new_row_is_visible_and_not_filtered() {
		let row = Row::new("msgid");
		assert!(row.is_visible());
		assert!(!row.is_filtered());
		assert_eq!(*row.item(), "msgid");
	}

	#[rstest]
	fn test_filtered_builder_keeps_visibility() {
		let row = Row::new(1).filtered(true);
		assert!(row.is_filtered());
		assert!(row.is_visible());
	}

	#[rstest]
	fn test_set_visible() {
		let mut row = Row::from(7);
		row.set_visible(false);
		assert!(!row.is_visible());
		assert_eq!(row.into_item(), 7);
	}
}
