//! # txweb
//!
//! Web UI components for translation-management pages.
//!
//! ## Feature Flags
//!
//! - `tables` (default) - Client-side table pagination with filtering and a
//!   page-selector panel
//!
//! ## Quick Example
//!
//! ```rust
//! use txweb::tables::{PaginatedTable, TableEvent, TablesSettings};
//!
//! let mut table = PaginatedTable::new(0..45, &TablesSettings::default()).unwrap();
//! table.dispatch(TableEvent::PageSelected(2));
//! assert_eq!(table.visible_items().count(), 5);
//! ```

#[cfg(feature = "tables")]
pub mod tables;

/// Commonly used types
#[cfg(feature = "tables")]
pub mod prelude {
	pub use crate::tables::{
		Filterable, PageableRow, PaginatedTable, Paginator, Row, TableEvent, TablesSettings,
	};
}
