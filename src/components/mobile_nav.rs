//! Hamburger-driven mobile navigation overlay with body scroll lock.

use log::warn;
use web_sys::{Element, HtmlElement};

use super::Behavior;
use crate::config::{ACTIVE_CLASS, HAMBURGER_ID, MOBILE_NAV_ID, NAV_OPEN_CLASS};
use crate::context::PageContext;
use crate::dom::{self, EventListener};
use crate::error::Result;

/// Whether the mobile overlay is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
	/// Overlay hidden, page scrolls.
	#[default]
	Closed,
	/// Overlay shown, body scroll locked.
	Open,
}

impl NavState {
	/// The state a hamburger click moves to.
	pub fn toggled(self) -> Self {
		match self {
			Self::Closed => Self::Open,
			Self::Open => Self::Closed,
		}
	}
}

/// The elements a nav state is written to. The overlay's `open` class is the
/// source of truth, so any holder of these handles sees the same state.
#[derive(Clone, Debug)]
pub struct NavElements {
	hamburger: Element,
	overlay: Element,
	body: HtmlElement,
}

impl NavElements {
	/// The nav elements, if the page has a mobile nav.
	pub fn find(ctx: &PageContext) -> Option<Self> {
		Some(Self {
			hamburger: ctx.by_id(HAMBURGER_ID)?,
			overlay: ctx.by_id(MOBILE_NAV_ID)?,
			body: ctx.body.clone(),
		})
	}

	/// State read back from the overlay.
	pub fn state(&self) -> NavState {
		if dom::has_class(&self.overlay, NAV_OPEN_CLASS) {
			NavState::Open
		} else {
			NavState::Closed
		}
	}

	/// Writes `state` to the button, overlay and body.
	pub fn apply(&self, state: NavState) -> Result<()> {
		let open = state == NavState::Open;
		dom::set_class(&self.hamburger, ACTIVE_CLASS, open)?;
		dom::set_class(&self.overlay, NAV_OPEN_CLASS, open)?;
		let overflow = if open { "hidden" } else { "" };
		self.body.style().set_property("overflow", overflow)?;
		Ok(())
	}

	/// Closes the overlay if open.
	pub fn close(&self) -> Result<()> {
		self.apply(NavState::Closed)
	}
}

/// Hamburger click handler.
pub struct MobileNav {
	click: Option<EventListener>,
}

impl Behavior for MobileNav {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		let Some(elements) = NavElements::find(ctx) else {
			return Ok(None);
		};
		let target = elements.hamburger.clone();
		let click = EventListener::new(&target, "click", move |_| {
			let next = elements.state().toggled();
			if let Err(e) = elements.apply(next) {
				warn!("mobile nav: {e}");
			}
		})?;
		Ok(Some(Self { click: Some(click) }))
	}

	fn detach(&mut self) {
		self.click = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_closed() {
		assert_eq!(NavState::default(), NavState::Closed);
	}

	#[test]
	fn click_always_flips() {
		let mut state = NavState::Closed;
		for _ in 0..5 {
			let next = state.toggled();
			assert_ne!(next, state);
			state = next;
		}
		assert_eq!(state, NavState::Open);
	}
}
