//! Client-side table pagination for txweb
//!
//! Long tables on translation pages (entries of a translation form,
//! per-language statistics) are shown one page at a time. This crate holds
//! the pagination state machine and the host table that drives it.
//!
//! # Features
//!
//! - **Paginator**: explicit page state with ceiling-division page counts
//! - **Filtering**: rows marked as filtered are hidden and never counted
//! - **Pager panel**: one 1-based control per page, exactly one active
//! - **Events**: `RowSetChanged` re-runs setup, `PageSelected` switches pages
//! - **Rendering**: HTML for the table body and its pager panel
//! - **Settings**: TOML and environment-based configuration
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[PaginatedTable] --> B[Rows]
//!     A --> C[Paginator]
//!     C --> D[PagerPanel]
//!     D --> E[PageControl]
//!     F[TableEvent] --> A
//!     G[TablesSettings] --> C
//! ```
//!
//! # Example
//!
//! ```rust
//! use txweb_tables::{Filterable, PaginatedTable, TableEvent, TablesSettings};
//!
//! let settings = TablesSettings::default();
//! let mut table = PaginatedTable::new(1..=30, &settings).unwrap();
//! assert_eq!(table.paginator().page_count(), 2);
//!
//! // Hide odd entries; the pager is rebuilt and the first page shown
//! table.filter_by(|n| n % 2 == 1);
//! assert_eq!(table.paginator().page_count(), 1);
//! assert_eq!(table.visible_items().count(), 15);
//!
//! table.dispatch(TableEvent::PageSelected(0));
//! assert_eq!(table.paginator().current_page(), 0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod filtering;
pub mod pagination;
pub mod render;
pub mod row;
pub mod settings;
pub mod table;

// Re-exports for convenience
pub use error::{Result, TableError};
pub use filtering::Filterable;
pub use pagination::{PageControl, PagerPanel, Paginator};
pub use row::{PageableRow, Row};
pub use settings::TablesSettings;
pub use table::{PaginatedTable, TableEvent};
