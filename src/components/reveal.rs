//! One-shot reveal of `.reveal` elements as they scroll into view.

use log::{debug, warn};

use super::Behavior;
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
use crate::context::PageContext;
use crate::dom::{self, Observer};
use crate::error::Result;

/// Watches `.reveal` elements until each has been shown once.
pub struct Reveal {
	observer: Option<Observer>,
}

impl Behavior for Reveal {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		let elements = ctx.query_all(REVEAL_SELECTOR)?;
		if elements.is_empty() {
			return Ok(None);
		}

		if ctx.reduced_motion {
			for el in &elements {
				dom::set_class(el, REVEAL_VISIBLE_CLASS, true)?;
			}
			debug!("reveal: reduced motion, {} elements shown", elements.len());
			return Ok(Some(Self { observer: None }));
		}

		let observer = Observer::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, |entries, observer| {
			for entry in entries.iter().filter(|e| e.is_intersecting()) {
				let target = entry.target();
				if let Err(e) = dom::set_class(&target, REVEAL_VISIBLE_CLASS, true) {
					warn!("reveal: {e}");
				}
				observer.unobserve(&target);
			}
		})?;
		for el in &elements {
			observer.observe(el);
		}
		Ok(Some(Self {
			observer: Some(observer),
		}))
	}

	fn detach(&mut self) {
		self.observer = None;
	}
}
