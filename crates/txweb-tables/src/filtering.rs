//! Filtering functionality for tables
//!
//! Filtering designates rows as excluded from pagination. Filtered rows stay
//! in the table in their original order but are hidden and never counted
//! toward page positions.

use crate::error::Result;

/// Trait for tables whose rows can be excluded from pagination
///
/// Every change to the filtered set alters the paginated row set, so
/// implementations re-run pagination setup after applying it.
pub trait Filterable {
	/// The row payload type
	type Item;

	/// Marks or unmarks a single row as filtered
	fn set_filtered(&mut self, index: usize, filtered: bool) -> Result<()>;

	/// Marks every row for which `predicate` returns true as filtered and
	/// every other row as not filtered
	fn filter_by<F>(&mut self, predicate: F)
	where
		F: FnMut(&Self::Item) -> bool;

	/// Clears all filters
	fn clear_filters(&mut self);

	/// Returns the number of filtered rows
	fn filtered_count(&self) -> usize;
}
