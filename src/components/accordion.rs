//! FAQ accordion with at most one item expanded.

use std::rc::Rc;

use log::warn;
use web_sys::Element;

use super::Behavior;
use crate::config::{FAQ_ANSWER_SELECTOR, FAQ_ITEM_SELECTOR, FAQ_OPEN_CLASS, FAQ_QUESTION_SELECTOR};
use crate::context::PageContext;
use crate::dom::{self, EventListener};
use crate::error::Result;

/// Which item, if any, is open after clicking `clicked` while `open` was
/// expanded.
pub fn next_open(open: Option<usize>, clicked: usize) -> Option<usize> {
	if open == Some(clicked) {
		None
	} else {
		Some(clicked)
	}
}

struct Item {
	root: Element,
	question: Element,
	answer: Element,
}

impl Item {
	fn is_open(&self) -> bool {
		dom::has_class(&self.root, FAQ_OPEN_CLASS)
	}

	fn set_open(&self, open: bool) -> Result<()> {
		dom::set_class(&self.root, FAQ_OPEN_CLASS, open)?;
		self.question
			.set_attribute("aria-expanded", if open { "true" } else { "false" })?;
		let height = open.then(|| format!("{}px", self.answer.scroll_height()));
		dom::set_style(&self.answer, "max-height", height.as_deref())
	}
}

/// Click handlers of every FAQ question.
pub struct Accordion {
	listeners: Vec<EventListener>,
}

impl Behavior for Accordion {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		let mut items = Vec::new();
		for root in ctx.query_all(FAQ_ITEM_SELECTOR)? {
			let (Some(question), Some(answer)) = (
				root.query_selector(FAQ_QUESTION_SELECTOR)?,
				root.query_selector(FAQ_ANSWER_SELECTOR)?,
			) else {
				continue;
			};
			items.push(Item {
				root,
				question,
				answer,
			});
		}
		if items.is_empty() {
			return Ok(None);
		}

		let items = Rc::new(items);
		let mut listeners = Vec::with_capacity(items.len());
		for (index, item) in items.iter().enumerate() {
			let items = items.clone();
			listeners.push(EventListener::new(&item.question, "click", move |_| {
				if let Err(e) = toggle(&items, index) {
					warn!("accordion: {e}");
				}
			})?);
		}
		Ok(Some(Self { listeners }))
	}

	fn detach(&mut self) {
		self.listeners.clear();
	}
}

fn toggle(items: &[Item], clicked: usize) -> Result<()> {
	// Read from the markup so items opened server-side collapse correctly.
	let open = items
		.get(clicked)
		.is_some_and(Item::is_open)
		.then_some(clicked);
	let next = next_open(open, clicked);
	for (i, item) in items.iter().enumerate() {
		item.set_open(next == Some(i))?;
	}
	Ok(())
}
