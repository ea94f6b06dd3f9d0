//! The landing page: every behavior, attached in a fixed order.

use log::{debug, error};

use crate::components::Behavior;
use crate::components::accordion::Accordion;
use crate::components::anchor_scroll::AnchorScroll;
use crate::components::beam::BeamDiagram;
use crate::components::contact_form::ContactForm;
use crate::components::cursor::CursorEffects;
use crate::components::mobile_nav::MobileNav;
use crate::components::reveal::Reveal;
use crate::components::scroll_header::ScrollHeader;
use crate::components::section_nav::SectionNav;
use crate::components::tabs::{ContactTabs, HeroTabs};
use crate::context::PageContext;

/// Every behavior of the landing page, attached against one context.
///
/// A behavior that fails to attach is logged and left out; the rest of the
/// page still works.
pub struct LandingPage {
	behaviors: Vec<(&'static str, Box<dyn Behavior>)>,
}

impl LandingPage {
	/// Attaches every behavior whose markup is present.
	pub fn attach(ctx: &PageContext) -> Self {
		let mut page = Self {
			behaviors: Vec::new(),
		};
		page.mount::<ScrollHeader>(ctx, "scroll header");
		page.mount::<AnchorScroll>(ctx, "anchor scroll");
		page.mount::<MobileNav>(ctx, "mobile nav");
		page.mount::<HeroTabs>(ctx, "hero tabs");
		page.mount::<ContactTabs>(ctx, "contact tabs");
		page.mount::<ContactForm>(ctx, "contact form");
		page.mount::<Accordion>(ctx, "faq accordion");
		page.mount::<Reveal>(ctx, "reveal");
		page.mount::<BeamDiagram>(ctx, "beam diagram");
		page.mount::<CursorEffects>(ctx, "cursor effects");
		page.mount::<SectionNav>(ctx, "section nav");
		page
	}

	fn mount<B: Behavior + 'static>(&mut self, ctx: &PageContext, name: &'static str) {
		match B::attach(ctx) {
			Ok(Some(behavior)) => {
				debug!("{name}: attached");
				self.behaviors.push((name, Box::new(behavior)));
			}
			Ok(None) => debug!("{name}: no markup, skipped"),
			Err(e) => error!("{name}: {e}"),
		}
	}

	/// Names of the behaviors that attached, in attach order.
	pub fn attached(&self) -> Vec<&'static str> {
		self.behaviors.iter().map(|(name, _)| *name).collect()
	}

	/// Detaches every behavior in attach order.
	pub fn detach(&mut self) {
		for (name, behavior) in &mut self.behaviors {
			behavior.detach();
			debug!("{name}: detached");
		}
		self.behaviors.clear();
	}
}

impl Drop for LandingPage {
	fn drop(&mut self) {
		self.detach();
	}
}
