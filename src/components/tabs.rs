//! Mutually exclusive tab groups: hero panel tabs and the contact form
//! selector.

use log::warn;
use web_sys::Element;

use super::Behavior;
use crate::config::{
	ACTIVE_CLASS, CONFIRMATION_ID, CONFIRMATION_SHOW_CLASS, CONTACT_TABS, HERO_TABS,
	TabGroupConfig,
};
use crate::context::PageContext;
use crate::dom::{self, EventListener};
use crate::error::Result;

/// Id of the panel a button targets.
pub fn panel_id(config: &TabGroupConfig, target: &str) -> String {
	format!("{}{}", config.panel_id_prefix, target)
}

/// Active flags after `clicked` is selected among `count` siblings.
pub fn selection(count: usize, clicked: usize) -> Vec<bool> {
	(0..count).map(|i| i == clicked).collect()
}

/// A wired tab group.
pub struct TabGroup {
	listeners: Vec<EventListener>,
}

#[derive(Clone)]
struct Group {
	config: TabGroupConfig,
	ctx: PageContext,
	buttons: Vec<Element>,
	panels: Vec<Element>,
}

impl TabGroup {
	/// Wires the buttons of `config`; `None` when the page has none.
	pub fn attach_group(ctx: &PageContext, config: TabGroupConfig) -> Result<Option<Self>> {
		let buttons = ctx.query_all(config.button_selector)?;
		if buttons.is_empty() {
			return Ok(None);
		}
		let group = Group {
			config,
			ctx: ctx.clone(),
			panels: ctx.query_all(config.panel_selector)?,
			buttons,
		};

		let mut listeners = Vec::with_capacity(group.buttons.len());
		for (index, button) in group.buttons.iter().enumerate() {
			let group = group.clone();
			listeners.push(EventListener::new(button, "click", move |_| {
				if let Err(e) = group.select(index) {
					warn!("tabs {}: {e}", group.config.button_selector);
				}
			})?);
		}
		Ok(Some(Self { listeners }))
	}

	/// Removes every click handler.
	pub fn detach(&mut self) {
		self.listeners.clear();
	}
}

impl Group {
	fn select(&self, clicked: usize) -> Result<()> {
		for (button, on) in self
			.buttons
			.iter()
			.zip(selection(self.buttons.len(), clicked))
		{
			dom::set_class(button, ACTIVE_CLASS, on)?;
		}
		for panel in &self.panels {
			dom::set_class(panel, ACTIVE_CLASS, false)?;
		}

		let target = self
			.buttons
			.get(clicked)
			.and_then(|b| b.get_attribute(self.config.target_attribute));
		match target.and_then(|t| self.ctx.by_id(&panel_id(&self.config, &t))) {
			Some(panel) => dom::set_class(&panel, ACTIVE_CLASS, true)?,
			None => warn!(
				"tabs {}: button {clicked} has no panel",
				self.config.button_selector
			),
		}

		if self.config.hides_confirmation {
			if let Some(confirmation) = self.ctx.by_id(CONFIRMATION_ID) {
				dom::set_class(&confirmation, CONFIRMATION_SHOW_CLASS, false)?;
			}
		}
		Ok(())
	}
}

/// Hero panel tabs.
pub struct HeroTabs(TabGroup);

impl Behavior for HeroTabs {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		Ok(TabGroup::attach_group(ctx, HERO_TABS)?.map(Self))
	}

	fn detach(&mut self) {
		self.0.detach();
	}
}

/// Operator/supplier form selector.
pub struct ContactTabs(TabGroup);

impl Behavior for ContactTabs {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		Ok(TabGroup::attach_group(ctx, CONTACT_TABS)?.map(Self))
	}

	fn detach(&mut self) {
		self.0.detach();
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn panel_ids_follow_prefix() {
		assert_eq!(panel_id(&HERO_TABS, "routes"), "panel-routes");
		assert_eq!(panel_id(&CONTACT_TABS, "supplier"), "form-supplier");
	}

	proptest! {
		#[test]
		fn exactly_one_active(count in 1usize..12, pick in 0usize..12) {
			let clicked = pick % count;
			let flags = selection(count, clicked);
			prop_assert_eq!(flags.iter().filter(|on| **on).count(), 1);
			prop_assert!(flags[clicked]);
		}
	}
}
