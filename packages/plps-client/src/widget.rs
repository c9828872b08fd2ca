//! Query client state for one mounted widget.
//!
//! [`Widget`] is a plain state machine: it never sleeps, spawns or performs I/O. The async driver
//! in [`crate::driver`] feeds it input, timer and response events and publishes its snapshots.

use crate::{Result, ResultItem, WidgetConfig};

pub const STATUS_SEARCHING: &str = "Searching…";
pub const STATUS_FAILED: &str = "Search failed.";
pub const NO_RESULTS: &str = "No results found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Debouncing,
	Loading,
	Displaying,
	Empty,
	Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Escape,
	ArrowDown,
	ArrowUp,
	Enter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
	Ignored,
	Handled,
	/// Navigate to the highlighted item.
	Activate(String),
}

/// A request the driver should send once the debounce interval has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
	pub seq: u64,
	pub term: String,
	pub limit: u32,
}

#[derive(Debug, Clone)]
pub struct Widget {
	limit: u32,
	min_chars: u32,
	phase: Phase,
	term: String,
	status: String,
	/// `Some(vec![])` renders the no-results notice; `None` means nothing is rendered.
	rendered: Option<Vec<ResultItem>>,
	panel_open: bool,
	cursor: isize,
	latest_seq: u64,
}
impl Widget {
	pub fn new(config: &WidgetConfig) -> Self {
		Self {
			limit: config.effective_limit(),
			min_chars: config.effective_min_chars(),
			phase: Phase::Idle,
			term: String::new(),
			status: String::new(),
			rendered: None,
			panel_open: false,
			cursor: -1,
			latest_seq: 0,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn status(&self) -> &str {
		&self.status
	}

	pub fn term(&self) -> &str {
		&self.term
	}

	pub fn panel_open(&self) -> bool {
		self.panel_open
	}

	pub fn items(&self) -> &[ResultItem] {
		self.rendered.as_deref().unwrap_or_default()
	}

	/// The panel shows [`NO_RESULTS`] instead of items.
	pub fn shows_no_results(&self) -> bool {
		self.rendered.as_ref().is_some_and(Vec::is_empty)
	}

	pub fn cursor(&self) -> Option<usize> {
		usize::try_from(self.cursor).ok()
	}

	pub fn latest_seq(&self) -> u64 {
		self.latest_seq
	}

	/// Records new input. The widget enters [`Phase::Debouncing`] only when the trimmed term is
	/// long enough to search; otherwise it goes idle with a hint and a cleared panel.
	pub fn on_input(&mut self, raw: &str) {
		let term = raw.trim();
		let len = term.chars().count();

		self.term = term.to_string();

		if len < self.min_chars as usize {
			self.status = if len == 0 {
				String::new()
			} else {
				format!("Type {} more character(s)…", self.min_chars as usize - len)
			};
			self.phase = Phase::Idle;

			self.clear_panel();

			return;
		}

		self.phase = Phase::Debouncing;
	}

	pub fn on_debounce_elapsed(&mut self) -> Option<SearchTicket> {
		if self.phase != Phase::Debouncing {
			return None;
		}

		self.latest_seq += 1;
		self.phase = Phase::Loading;
		self.status = STATUS_SEARCHING.to_string();

		Some(SearchTicket { seq: self.latest_seq, term: self.term.clone(), limit: self.limit })
	}

	/// Applies a response only if it answers the latest request and the widget is still waiting
	/// for it. Returns whether the response was applied.
	pub fn on_response(&mut self, seq: u64, result: Result<Vec<ResultItem>>) -> bool {
		if seq != self.latest_seq || self.phase != Phase::Loading {
			tracing::debug!(seq, latest_seq = self.latest_seq, "Discarded stale search response.");

			return false;
		}

		match result {
			Ok(items) => {
				self.status = format!("{} result(s).", items.len());
				self.phase = if items.is_empty() { Phase::Empty } else { Phase::Displaying };
				self.rendered = Some(items);
				self.panel_open = true;
				self.cursor = -1;
			},
			Err(err) => {
				tracing::warn!(seq, error = %err, "Search failed.");

				self.status = STATUS_FAILED.to_string();
				self.phase = Phase::Failed;

				self.clear_panel();
			},
		}

		true
	}

	/// Escape always closes the panel and settles the widget in [`Phase::Idle`], which also drops
	/// a search still waiting on its debounce timer.
	pub fn on_key(&mut self, key: Key) -> KeyOutcome {
		if key == Key::Escape {
			self.phase = Phase::Idle;

			self.hide_panel();

			return KeyOutcome::Handled;
		}

		let count = self.items().len();

		if !self.panel_open || count == 0 {
			return KeyOutcome::Ignored;
		}

		let last = count as isize - 1;

		match key {
			Key::ArrowDown => self.cursor = (self.cursor + 1).min(last),
			Key::ArrowUp => self.cursor = (self.cursor - 1).max(-1),
			Key::Enter => {
				return match self.cursor().and_then(|index| self.items().get(index)) {
					Some(item) => KeyOutcome::Activate(item.url.clone()),
					None => KeyOutcome::Ignored,
				};
			},
			Key::Escape => {},
		}

		KeyOutcome::Handled
	}

	/// Reopens a hidden panel that still has something rendered.
	pub fn on_focus(&mut self) {
		if !self.panel_open && self.rendered.is_some() {
			self.panel_open = true;
		}
	}

	pub fn on_click_outside(&mut self) {
		self.hide_panel();
	}

	fn hide_panel(&mut self) {
		self.panel_open = false;
		self.cursor = -1;
	}

	fn clear_panel(&mut self) {
		self.hide_panel();

		self.rendered = None;
	}
}
