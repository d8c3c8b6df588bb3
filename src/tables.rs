//! Table pagination
//!
//! This module provides access to txweb-tables: paging of long tables such
//! as translation forms and statistics listings.
//!
//! ## Architecture
//!
//! - **Paginator**: page index, page count and the page-selector panel
//! - **PaginatedTable**: owns the rows and reacts to table events
//! - **Rendering**: HTML output for the table body and pager
//!
//! ## Example
//!
//! ```rust
//! use txweb::tables::{Filterable, PaginatedTable};
//!
//! let mut table = PaginatedTable::with_page_size(0..10, 20).unwrap();
//! table.set_filtered(3, true).unwrap();
//! table.set_filtered(7, true).unwrap();
//!
//! assert_eq!(table.paginator().page_count(), 1);
//! assert_eq!(table.visible_items().count(), 8);
//! ```

pub use txweb_tables::*;
