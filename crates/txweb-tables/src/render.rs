//! HTML rendering for paginated tables
//!
//! The pager panel is rendered as a sibling placed after the table body,
//! with one `span` per page:
//!
//! ```html
//! <div class="pager"><span class="page-number clickable active" data-page="0">1</span></div>
//! ```
//!
//! Hidden rows keep their markup and carry `style="display: none"`.

use crate::pagination::PagerPanel;
use crate::row::PageableRow;
use crate::settings::TablesSettings;
use crate::table::PaginatedTable;
use std::borrow::Cow;

/// Renders the page-selector panel
///
/// # Examples
///
/// ```
/// use txweb_tables::{PagerPanel, TablesSettings};
/// use txweb_tables::render::render_pager;
///
/// let html = render_pager(&PagerPanel::build(2), &TablesSettings::default());
/// assert_eq!(
///     html,
///     "<div class=\"pager\">\
///      <span class=\"page-number clickable active\" data-page=\"0\">1</span>\
///      <span class=\"page-number clickable\" data-page=\"1\">2</span>\
///      </div>"
/// );
/// ```
pub fn render_pager(panel: &PagerPanel, settings: &TablesSettings) -> String {
	let mut output = String::new();
	render_pager_into(panel, settings, &mut output);
	output
}

fn render_pager_into(panel: &PagerPanel, settings: &TablesSettings, output: &mut String) {
	output.push_str("<div class=\"");
	output.push_str(&html_escape(&settings.pager_class));
	output.push_str("\">");

	for control in panel.controls() {
		let mut classes = format!("{} {}", settings.control_class, settings.clickable_class);
		if panel.is_active(control.page()) {
			classes.push(' ');
			classes.push_str(&settings.active_class);
		}

		output.push_str("<span class=\"");
		output.push_str(&html_escape(&classes));
		output.push_str("\" data-page=\"");
		output.push_str(&control.page().to_string());
		output.push_str("\">");
		output.push_str(&html_escape(control.label()));
		output.push_str("</span>");
	}

	output.push_str("</div>");
}

/// Renders the table body followed by its pager panel
///
/// `cells` returns the text of each cell of a row; it is escaped on output.
pub fn render_table<T, F>(table: &PaginatedTable<T>, settings: &TablesSettings, cells: F) -> String
where
	F: Fn(&T) -> Vec<String>,
{
	let mut output = String::from("<table><tbody>");

	for row in table.rows() {
		output.push_str("<tr");
		if row.is_filtered() {
			output.push_str(" class=\"");
			output.push_str(&html_escape(&settings.filtered_class));
			output.push('"');
		}
		if !row.is_visible() {
			output.push_str(" style=\"display: none\"");
		}
		output.push('>');

		for cell in cells(row.item()) {
			output.push_str("<td>");
			output.push_str(&html_escape(&cell));
			output.push_str("</td>");
		}

		output.push_str("</tr>");
	}

	output.push_str("</tbody></table>");
	render_pager_into(table.paginator().pager(), settings, &mut output);
	output
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::filtering::Filterable;
	use rstest::rstest;

	#[rstest]
	fn test_empty_panel_renders_empty_div() {
		let html = render_pager(&PagerPanel::build(0), &TablesSettings::default());
		assert_eq!(html, "<div class=\"pager\"></div>");
	}

	#[rstest]
	fn test_active_marker_follows_selection() {
		let mut panel = PagerPanel::build(3);
		panel.activate(1);

		let html = render_pager(&panel, &TablesSettings::default());

		assert_eq!(html.matches("active").count(), 1);
		assert!(html.contains("<span class=\"page-number clickable active\" data-page=\"1\">2</span>"));
	}

	#[rstest]
	fn test_custom_classes_are_escaped() {
		let settings = TablesSettings {
			pager_class: "pager\"><script>".to_string(),
			..TablesSettings::default()
		};
		let html = render_pager(&PagerPanel::build(1), &settings);
		assert!(html.starts_with("<div class=\"pager&quot;&gt;&lt;script&gt;\">"));
	}

	#[rstest]
	fn test_render_table_marks_hidden_and_filtered_rows() {
		let mut table = PaginatedTable::with_page_size(vec!["a", "<b>", "c"], 1).unwrap();
		table.set_filtered(0, true).unwrap();

		let html = render_table(&table, &TablesSettings::default(), |item| {
			vec![item.to_string()]
		});

		assert_eq!(
			html,
			"<table><tbody>\
			 <tr class=\"filtered\" style=\"display: none\"><td>a</td></tr>\
			 <tr><td>&lt;b&gt;</td></tr>\
			 <tr style=\"display: none\"><td>c</td></tr>\
			 </tbody></table>\
			 <div class=\"pager\">\
			 <span class=\"page-number clickable active\" data-page=\"0\">1</span>\
			 <span class=\"page-number clickable\" data-page=\"1\">2</span>\
			 </div>"
		);
	}
}
