//! Highlights the top nav link of the section currently in view.

use log::warn;
use web_sys::Element;

use super::Behavior;
use crate::config::{ACTIVE_CLASS, NAV_LINK_SELECTOR, SECTION_ROOT_MARGIN, SECTION_THRESHOLD};
use crate::context::PageContext;
use crate::dom::{self, Observer};
use crate::error::Result;

/// A page section and the nav link pointing at it.
#[derive(Clone, Debug)]
pub struct SectionLink {
	/// Section observed for visibility.
	pub section: Element,
	/// Link highlighted while the section is current.
	pub link: Element,
}

/// Index of the link to activate for one observation batch, given
/// `(pair index, is_intersecting)` per entry in reported order. The last
/// intersecting entry wins.
pub fn resolve_active<I>(batch: I) -> Option<usize>
where
	I: IntoIterator<Item = (Option<usize>, bool)>,
{
	batch
		.into_iter()
		.filter_map(|(pair, intersecting)| pair.filter(|_| intersecting))
		.last()
}

/// Observer tracking which section is current.
pub struct SectionNav {
	observer: Option<Observer>,
}

impl Behavior for SectionNav {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		let links = ctx.query_all(NAV_LINK_SELECTOR)?;
		let pairs: Vec<SectionLink> = links
			.iter()
			.filter_map(|link| {
				let section = ctx.resolve_hash(&link.get_attribute("href")?)?;
				Some(SectionLink {
					section,
					link: link.clone(),
				})
			})
			.collect();
		if pairs.is_empty() {
			return Ok(None);
		}

		let sections: Vec<Element> = pairs.iter().map(|p| p.section.clone()).collect();
		let observer = Observer::new(SECTION_THRESHOLD, SECTION_ROOT_MARGIN, move |entries, _| {
			let batch = entries.iter().map(|entry| {
				let target = entry.target();
				let pair = pairs.iter().position(|p| p.section == target);
				(pair, entry.is_intersecting())
			});
			let Some(active) = resolve_active(batch).and_then(|i| pairs.get(i)) else {
				return;
			};
			if let Err(e) = highlight(&links, &active.link) {
				warn!("section nav: {e}");
			}
		})?;
		for section in &sections {
			observer.observe(section);
		}
		Ok(Some(Self {
			observer: Some(observer),
		}))
	}

	fn detach(&mut self) {
		self.observer = None;
	}
}

fn highlight(links: &[Element], active: &Element) -> Result<()> {
	for link in links {
		dom::set_class(link, ACTIVE_CLASS, link == active)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn last_intersecting_entry_wins() {
		let batch = [(Some(0), true), (Some(2), true), (Some(1), false)];
		assert_eq!(resolve_active(batch), Some(2));
	}

	#[test]
	fn leaving_entries_change_nothing() {
		assert_eq!(resolve_active([(Some(0), false), (Some(1), false)]), None);
		assert_eq!(resolve_active(Vec::new()), None);
	}

	#[test]
	fn unmatched_targets_are_ignored() {
		assert_eq!(resolve_active([(Some(1), true), (None, true)]), Some(1));
	}
}
