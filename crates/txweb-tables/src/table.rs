//! Paginated table host
//!
//! [`PaginatedTable`] owns the rows of one table together with its
//! [`Paginator`], and reacts to [`TableEvent`]s the way a page reacts to DOM
//! events: a changed row set re-runs setup, a page click selects a page.

use crate::error::{Result, TableError};
use crate::filtering::Filterable;
use crate::pagination::{PageControl, Paginator};
use crate::row::{PageableRow, Row};
use crate::settings::TablesSettings;

/// Events consumed by a paginated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
	/// Rows were added, removed or re-filtered
	RowSetChanged,
	/// A page control was selected (0-indexed)
	PageSelected(usize),
}

/// A table whose rows are shown one page at a time
///
/// # Examples
///
/// ```
/// use txweb_tables::{PaginatedTable, TableEvent};
///
/// let mut table = PaginatedTable::with_page_size(0..45, 20).unwrap();
/// assert_eq!(table.paginator().page_count(), 3);
///
/// table.dispatch(TableEvent::PageSelected(2));
/// let shown: Vec<_> = table.visible_items().copied().collect();
/// assert_eq!(shown, (40..45).collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone)]
pub struct PaginatedTable<T> {
	rows: Vec<Row<T>>,
	paginator: Paginator,
}

impl<T> PaginatedTable<T> {
	/// Creates a table using the configured page size and sets up pagination
	pub fn new(items: impl IntoIterator<Item = T>, settings: &TablesSettings) -> Result<Self> {
		Self::from_parts(items, Paginator::from_settings(settings)?)
	}

	/// Creates a table with an explicit page size and sets up pagination
	pub fn with_page_size(items: impl IntoIterator<Item = T>, page_size: usize) -> Result<Self> {
		Self::from_parts(items, Paginator::new(page_size)?)
	}

	/// Creates a table from rows that may already carry filter designations
	pub fn from_rows(rows: Vec<Row<T>>, page_size: usize) -> Result<Self> {
		let mut table = Self {
			rows,
			paginator: Paginator::new(page_size)?,
		};
		table.dispatch(TableEvent::RowSetChanged);
		Ok(table)
	}

	fn from_parts(items: impl IntoIterator<Item = T>, paginator: Paginator) -> Result<Self> {
		let mut table = Self {
			rows: items.into_iter().map(Row::new).collect(),
			paginator,
		};
		table.dispatch(TableEvent::RowSetChanged);
		Ok(table)
	}

	/// Handles a table event
	pub fn dispatch(&mut self, event: TableEvent) {
		match event {
			TableEvent::RowSetChanged => self.paginator.setup(&mut self.rows),
			TableEvent::PageSelected(page) => self.paginator.select_page(page, &mut self.rows),
		}
	}

	/// Handles a click on one of this table's page controls
	pub fn click(&mut self, control: &PageControl) {
		self.dispatch(TableEvent::PageSelected(control.page()));
	}

	/// Shows the next page, returning false on the last page
	pub fn next_page(&mut self) -> bool {
		self.paginator.next_page(&mut self.rows)
	}

	/// Shows the previous page, returning false on the first page
	pub fn previous_page(&mut self) -> bool {
		self.paginator.previous_page(&mut self.rows)
	}

	/// Replaces every row and re-runs setup
	pub fn replace_rows(&mut self, items: impl IntoIterator<Item = T>) {
		self.rows = items.into_iter().map(Row::new).collect();
		self.dispatch(TableEvent::RowSetChanged);
	}

	/// Appends a row and re-runs setup
	pub fn push_row(&mut self, item: T) {
		self.rows.push(Row::new(item));
		self.dispatch(TableEvent::RowSetChanged);
	}

	/// Returns all rows in table order, including hidden ones
	pub fn rows(&self) -> &[Row<T>] {
		&self.rows
	}

	/// Returns the payloads of the rows currently shown
	pub fn visible_items(&self) -> impl Iterator<Item = &T> {
		self.rows
			.iter()
			.filter(|row| row.is_visible())
			.map(Row::item)
	}

	/// Returns the pagination state
	pub fn paginator(&self) -> &Paginator {
		&self.paginator
	}

	/// Returns the number of rows, including filtered ones
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns true if the table has no rows
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

impl<T> Filterable for PaginatedTable<T> {
	type Item = T;

	fn set_filtered(&mut self, index: usize, filtered: bool) -> Result<()> {
		let len = self.rows.len();
		let row = self
			.rows
			.get_mut(index)
			.ok_or(TableError::RowIndexOutOfRange { index, len })?;
		row.set_filtered(filtered);
		self.dispatch(TableEvent::RowSetChanged);
		Ok(())
	}

	fn filter_by<F>(&mut self, mut predicate: F)
	where
		F: FnMut(&Self::Item) -> bool,
	{
		for row in &mut self.rows {
			let filtered = predicate(row.item());
			row.set_filtered(filtered);
		}
		self.dispatch(TableEvent::RowSetChanged);
	}

	fn clear_filters(&mut self) {
		for row in &mut self.rows {
			row.set_filtered(false);
		}
		self.dispatch(TableEvent::RowSetChanged);
	}

	fn filtered_count(&self) -> usize {
		self.rows.iter().filter(|row| row.is_filtered()).count()
	}
}
