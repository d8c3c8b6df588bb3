//! Error types for the tables crate.

use thiserror::Error;

/// Errors that can occur while configuring or driving a paginated table.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TableError {
	/// Page size must be at least one row.
	#[error("Invalid page size: {0} (must be at least 1)")]
	InvalidPageSize(usize),

	/// A row index supplied by the host does not exist.
	#[error("Row index {index} out of range for table with {len} rows")]
	RowIndexOutOfRange {
		/// Requested row index.
		index: usize,
		/// Number of rows in the table.
		len: usize,
	},

	/// A configuration value was rejected.
	#[error("Settings error: {0}")]
	Settings(String),

	/// Settings file could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_page_size_message() {
		let error = TableError::InvalidPageSize(0);
		assert_eq!(
			error.to_string(),
			"Invalid page size: 0 (must be at least 1)"
		);
	}

	#[rstest]
	fn test_row_index_out_of_range_message() {
		let error = TableError::RowIndexOutOfRange { index: 12, len: 10 };
		assert_eq!(
			error.to_string(),
			"Row index 12 out of range for table with 10 rows"
		);
	}

	#[rstest]
	fn test_toml_error_from() {
		let toml_error = toml::from_str::<toml::Table>("page_size = ").unwrap_err();
		let error: TableError = toml_error.into();
		assert!(matches!(error, TableError::Toml(_)));
	}

	#[rstest]
	fn test_io_error_from() {
		let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
		let error: TableError = io_error.into();
		assert!(matches!(error, TableError::Io(_)));
	}
}
