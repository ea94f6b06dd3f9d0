//! The page context every behavior attaches against.

use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::REDUCED_MOTION_QUERY;
use crate::dom;
use crate::error::{PageError, Result};

/// Handles to the page globals plus the motion preference captured once at
/// startup.
#[derive(Clone, Debug)]
pub struct PageContext {
	/// The browser window.
	pub window: Window,
	/// The window's document.
	pub document: Document,
	/// The document body, target of the scroll lock.
	pub body: HtmlElement,
	/// Read once; a preference change later in the page's life is ignored.
	pub reduced_motion: bool,
}

impl PageContext {
	/// Builds the context from the global `window`.
	pub fn from_window() -> Result<Self> {
		let window = web_sys::window().ok_or(PageError::NoWindow)?;
		let reduced_motion = prefers_reduced_motion(&window);
		Self::new(window, reduced_motion)
	}

	/// Builds the context with an explicit motion preference.
	pub fn new(window: Window, reduced_motion: bool) -> Result<Self> {
		let document = window.document().ok_or(PageError::NoDocument)?;
		let body = document.body().ok_or(PageError::NoBody)?;
		Ok(Self {
			window,
			document,
			body,
			reduced_motion,
		})
	}

	/// Element with id `id`.
	pub fn by_id(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}

	/// Every element matching `selector`.
	pub fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
		dom::query_all(&self.document, selector)
	}

	/// Resolves a same-page hash href (`#id`) to its element.
	///
	/// Hrefs that are not valid selectors resolve to nothing, as a bare `#`
	/// does.
	pub fn resolve_hash(&self, href: &str) -> Option<Element> {
		if !href.starts_with('#') {
			return None;
		}
		self.document.query_selector(href).ok().flatten()
	}

	/// Current vertical scroll offset in CSS pixels.
	pub fn scroll_y(&self) -> f64 {
		self.window.scroll_y().unwrap_or(0.0)
	}
}

fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media(REDUCED_MOTION_QUERY)
		.ok()
		.flatten()
		.is_some_and(|query| query.matches())
}
