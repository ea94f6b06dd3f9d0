//! Sticky header "scrolled" state.

use log::warn;
use web_sys::Element;

use super::Behavior;
use crate::config::{SCROLLED_CLASS, SCROLLED_THRESHOLD_PX, TOPBAR_ID};
use crate::context::PageContext;
use crate::dom::{self, EventListener};
use crate::error::Result;

/// Whether the header shows its scrolled style at `scroll_y`.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_THRESHOLD_PX
}

/// Toggles `scrolled` on the top bar from a passive window scroll listener.
pub struct ScrollHeader {
	listener: Option<EventListener>,
}

impl Behavior for ScrollHeader {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		let Some(topbar) = ctx.by_id(TOPBAR_ID) else {
			return Ok(None);
		};
		sync(ctx, &topbar)?;

		let ctx = ctx.clone();
		let window = ctx.window.clone();
		let listener = EventListener::passive(&window, "scroll", move |_| {
			if let Err(e) = sync(&ctx, &topbar) {
				warn!("scroll header: {e}");
			}
		})?;
		Ok(Some(Self {
			listener: Some(listener),
		}))
	}

	fn detach(&mut self) {
		self.listener = None;
	}
}

fn sync(ctx: &PageContext, topbar: &Element) -> Result<()> {
	dom::set_class(topbar, SCROLLED_CLASS, is_scrolled(ctx.scroll_y()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn threshold_is_exclusive() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
	}

	proptest! {
		#[test]
		fn scrolled_iff_past_threshold(y in -1000.0f64..10_000.0) {
			prop_assert_eq!(is_scrolled(y), y > 50.0);
		}
	}
}
