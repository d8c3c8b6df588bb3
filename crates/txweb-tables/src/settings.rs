//! Table settings
//!
//! Settings are layered in priority order: environment variables > settings
//! file > defaults. Environment variables use the [`ENV_PREFIX`] prefix
//! followed by the upper-cased field name, e.g. `TXWEB_TABLES_PAGE_SIZE=50`.

use crate::error::{Result, TableError};
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Prefix of environment variables read by [`TablesSettings::apply_env`]
pub const ENV_PREFIX: &str = "TXWEB_TABLES_";

/// Pagination and rendering settings for tables
///
/// # Examples
///
/// ```
/// use txweb_tables::TablesSettings;
///
/// let settings = TablesSettings::from_toml_str("page_size = 50").unwrap();
/// assert_eq!(settings.page_size, 50);
/// assert_eq!(settings.pager_class, "pager");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TablesSettings {
	/// Rows shown per page
	pub page_size: usize,
	/// CSS class of the pager panel
	pub pager_class: String,
	/// CSS class of each page control
	pub control_class: String,
	/// CSS class marking controls as clickable
	pub clickable_class: String,
	/// CSS class of the active control
	pub active_class: String,
	/// CSS class of rows excluded from pagination
	pub filtered_class: String,
}

impl Default for TablesSettings {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			pager_class: "pager".to_string(),
			control_class: "page-number".to_string(),
			clickable_class: "clickable".to_string(),
			active_class: "active".to_string(),
			filtered_class: "filtered".to_string(),
		}
	}
}

impl TablesSettings {
	/// Parses settings from TOML, filling missing keys with defaults
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading table settings");
		Self::from_toml_str(&source)
	}

	/// Loads defaults, then an optional file, then process environment overrides
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		settings.apply_env(std::env::vars())
	}

	/// Builds settings from defaults and the process environment
	pub fn from_env() -> Result<Self> {
		Self::default().apply_env(std::env::vars())
	}

	/// Applies `TXWEB_TABLES_*` overrides from the given variables
	///
	/// Variables without the prefix and unknown keys are ignored.
	pub fn apply_env<I, K, V>(mut self, vars: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		for (key, value) in vars {
			let Some(field) = key.as_ref().strip_prefix(ENV_PREFIX) else {
				continue;
			};
			let value: String = value.into();

			match field.to_lowercase().as_str() {
				"page_size" => {
					self.page_size = value.trim().parse().map_err(|_| {
						TableError::Settings(format!(
							"{}PAGE_SIZE must be a positive integer, got {:?}",
							ENV_PREFIX, value
						))
					})?;
				}
				"pager_class" => self.pager_class = value,
				"control_class" => self.control_class = value,
				"clickable_class" => self.clickable_class = value,
				"active_class" => self.active_class = value,
				"filtered_class" => self.filtered_class = value,
				other => {
					tracing::debug!(key = other, "ignoring unknown table setting");
				}
			}
		}

		self.validate()?;
		Ok(self)
	}

	/// Checks that the page size is positive and no class name is empty
	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(TableError::InvalidPageSize(self.page_size));
		}

		let classes = [
			("pager_class", &self.pager_class),
			("control_class", &self.control_class),
			("clickable_class", &self.clickable_class),
			("active_class", &self.active_class),
			("filtered_class", &self.filtered_class),
		];
		for (name, value) in classes {
			if value.trim().is_empty() {
				return Err(TableError::Settings(format!("{} must not be empty", name)));
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = TablesSettings::default();
		assert_eq!(settings.page_size, 20);
		assert_eq!(settings.control_class, "page-number");
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings = TablesSettings::from_toml_str("active_class = \"current\"").unwrap();
		assert_eq!(settings.active_class, "current");
		assert_eq!(settings.page_size, 20);
	}

	#[rstest]
	fn test_zero_page_size_in_toml_rejected() {
		let result = TablesSettings::from_toml_str("page_size = 0");
		assert!(matches!(result, Err(TableError::InvalidPageSize(0))));
	}

	#[rstest]
	fn test_malformed_toml_rejected() {
		let result = TablesSettings::from_toml_str("page_size = \"many\"");
		assert!(matches!(result, Err(TableError::Toml(_))));
	}

	#[rstest]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "page_size = 5\npager_class = \"paginator\"").unwrap();

		let settings = TablesSettings::from_file(file.path()).unwrap();

		assert_eq!(settings.page_size, 5);
		assert_eq!(settings.pager_class, "paginator");
	}

	#[rstest]
	fn test_missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = TablesSettings::from_file(dir.path().join("tables.toml"));
		assert!(matches!(result, Err(TableError::Io(_))));
	}

	#[rstest]
	fn test_env_overrides() {
		let vars = vec![
			("TXWEB_TABLES_PAGE_SIZE", " 40 "),
			("TXWEB_TABLES_ACTIVE_CLASS", "selected"),
			("TXWEB_TABLES_UNKNOWN", "ignored"),
			("PAGE_SIZE", "1"),
		];

		let settings = TablesSettings::default().apply_env(vars).unwrap();

		assert_eq!(settings.page_size, 40);
		assert_eq!(settings.active_class, "selected");
	}

	#[rstest]
	#[case("abc")]
	#[case("-3")]
	fn test_env_invalid_page_size(#[case] value: &str) {
		let result = TablesSettings::default().apply_env([("TXWEB_TABLES_PAGE_SIZE", value)]);
		assert!(matches!(result, Err(TableError::Settings(_))));
	}

	#[rstest]
	fn test_env_empty_class_rejected() {
		let result = TablesSettings::default().apply_env([("TXWEB_TABLES_PAGER_CLASS", "  ")]);
		assert!(matches!(result, Err(TableError::Settings(_))));
	}
}
