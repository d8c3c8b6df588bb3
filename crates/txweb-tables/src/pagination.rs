//! Pagination functionality for tables
//!
//! A [`Paginator`] holds the page state of one table. Rows stay owned by the
//! host and are passed in by mutable slice; the paginator only writes their
//! visibility flags.
//!
//! Rows marked as filtered never count toward page positions and are always
//! hidden.

pub mod pager;

use crate::error::{Result, TableError};
use crate::row::PageableRow;
use crate::settings::TablesSettings;

pub use pager::{PageControl, PagerPanel};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Pagination state for one table
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Ready: setup(rows)
///     Ready --> Ready: select_page(n)
///     Ready --> Ready: setup(rows)
///     note right of Ready
///         current_page reset to 0 on setup
///     end note
/// ```
#[derive(Debug, Clone)]
pub struct Paginator {
	page_size: usize,
	current_page: usize,
	/// Non-filtered rows counted at the last setup
	total_rows: usize,
	pager: PagerPanel,
}

impl Paginator {
	/// Creates a paginator showing `page_size` rows per page
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidPageSize`] when `page_size` is zero.
	///
	/// # Examples
	///
	/// ```
	/// use txweb_tables::Paginator;
	///
	/// let paginator = Paginator::new(20).unwrap();
	/// assert_eq!(paginator.page_size(), 20);
	/// assert_eq!(paginator.page_count(), 0);
	///
	/// assert!(Paginator::new(0).is_err());
	/// ```
	pub fn new(page_size: usize) -> Result<Self> {
		if page_size == 0 {
			return Err(TableError::InvalidPageSize(page_size));
		}
		Ok(Self {
			page_size,
			current_page: 0,
			total_rows: 0,
			pager: PagerPanel::default(),
		})
	}

	/// Creates a paginator using the configured page size
	pub fn from_settings(settings: &TablesSettings) -> Result<Self> {
		Self::new(settings.page_size)
	}

	/// Returns the number of rows per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Returns the current page (0-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Returns the total number of pages
	pub fn page_count(&self) -> usize {
		self.total_rows.div_ceil(self.page_size)
	}

	/// Returns the number of non-filtered rows seen at the last setup
	pub fn total_rows(&self) -> usize {
		self.total_rows
	}

	/// Returns the page-selector controls
	pub fn pager(&self) -> &PagerPanel {
		&self.pager
	}

	/// Returns the inclusive range of non-filtered positions on the current page
	///
	/// `None` when there are no pages. The upper bound is not clamped to the
	/// number of rows, matching how [`repaginate`](Self::repaginate) tests it.
	pub fn window(&self) -> Option<(usize, usize)> {
		if self.page_count() == 0 {
			return None;
		}
		let first = self.current_page * self.page_size;
		Some((first, first + self.page_size - 1))
	}

	/// Re-scans `rows`, rebuilds the controls and shows the first page
	///
	/// # Examples
	///
	/// ```
	/// use txweb_tables::{PageableRow, Paginator, Row};
	///
	/// let mut rows: Vec<Row<u32>> = (0..45).map(Row::new).collect();
	/// let mut paginator = Paginator::new(20).unwrap();
	/// paginator.setup(&mut rows);
	///
	/// assert_eq!(paginator.page_count(), 3);
	/// assert_eq!(paginator.pager().active(), Some(0));
	/// assert_eq!(rows.iter().filter(|row| row.is_visible()).count(), 20);
	/// ```
	pub fn setup<R: PageableRow>(&mut self, rows: &mut [R]) {
		self.total_rows = rows.iter().filter(|row| !row.is_filtered()).count();
		self.current_page = 0;
		self.pager = PagerPanel::build(self.page_count());

		tracing::debug!(
			rows = rows.len(),
			paginated = self.total_rows,
			pages = self.page_count(),
			"pagination set up"
		);

		self.repaginate(rows);
	}

	/// Selects a page (0-indexed) and updates row visibility
	///
	/// Indices past the last page are clamped to it. With no pages the call
	/// does nothing.
	pub fn select_page<R: PageableRow>(&mut self, page: usize, rows: &mut [R]) {
		let page_count = self.page_count();
		if page_count == 0 {
			tracing::warn!(page, "page selected on a table without pages");
			return;
		}

		let target = if page >= page_count {
			tracing::warn!(page, page_count, "page index clamped to last page");
			page_count - 1
		} else {
			page
		};

		tracing::debug!(from = self.current_page, to = target, "page selected");
		self.current_page = target;
		self.pager.activate(target);
		self.repaginate(rows);
	}

	/// Moves to the next page if available
	pub fn next_page<R: PageableRow>(&mut self, rows: &mut [R]) -> bool {
		if self.current_page + 1 < self.page_count() {
			self.select_page(self.current_page + 1, rows);
			true
		} else {
			false
		}
	}

	/// Moves to the previous page if available
	pub fn previous_page<R: PageableRow>(&mut self, rows: &mut [R]) -> bool {
		if self.current_page > 0 && self.page_count() > 0 {
			self.select_page(self.current_page - 1, rows);
			true
		} else {
			false
		}
	}

	/// Writes the visibility flag of every row from the current page
	pub fn repaginate<R: PageableRow>(&self, rows: &mut [R]) {
		let first = self.current_page * self.page_size;
		let last = first + self.page_size - 1;
		let mut count = 0;

		for row in rows.iter_mut() {
			if row.is_filtered() {
				row.set_visible(false);
				continue;
			}
			row.set_visible(first <= count && count <= last);
			count += 1;
		}

		tracing::trace!(first, last, paginated = count, "repaginated");
	}
}

impl Default for Paginator {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			current_page: 0,
			total_rows: 0,
			pager: PagerPanel::default(),
		}
	}
}
