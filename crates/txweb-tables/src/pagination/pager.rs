//! Page-selector control panel

/// One selectable page control
///
/// The zero-based page index travels with the control, so a click handler
/// only needs the control itself to know which page to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
	page: usize,
	label: String,
}

impl PageControl {
	/// Creates the control for a zero-based page index, labelled 1-based
	pub fn new(page: usize) -> Self {
		Self {
			page,
			label: (page + 1).to_string(),
		}
	}

	/// Returns the zero-based page index this control selects
	pub fn page(&self) -> usize {
		self.page
	}

	/// Returns the 1-based label shown to the user
	pub fn label(&self) -> &str {
		&self.label
	}
}

/// The set of page controls rendered next to a table
///
/// The active control is tracked as an index; the "active" marker of each
/// control is derived from it. At most one control is active, and exactly
/// one whenever the panel has any controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerPanel {
	controls: Vec<PageControl>,
	active: Option<usize>,
}

impl PagerPanel {
	/// Builds one control per page with the first one active
	pub fn build(page_count: usize) -> Self {
		let controls: Vec<_> = (0..page_count).map(PageControl::new).collect();
		let active = if controls.is_empty() { None } else { Some(0) };
		Self { controls, active }
	}

	/// Returns the controls in page order
	pub fn controls(&self) -> &[PageControl] {
		&self.controls
	}

	/// Returns the number of controls
	pub fn len(&self) -> usize {
		self.controls.len()
	}

	/// Returns true if the panel has no controls
	pub fn is_empty(&self) -> bool {
		self.controls.is_empty()
	}

	/// Returns the index of the active control
	pub fn active(&self) -> Option<usize> {
		self.active
	}

	/// Returns the active control
	pub fn active_control(&self) -> Option<&PageControl> {
		self.active.and_then(|page| self.controls.get(page))
	}

	/// Returns whether the control for `page` carries the active marker
	pub fn is_active(&self, page: usize) -> bool {
		self.active == Some(page)
	}

	/// Moves the active marker to `page`
	///
	/// Ignored when `page` has no control.
	pub fn activate(&mut self, page: usize) {
		if page < self.controls.len() {
			self.active = Some(page);
		}
	}
}
