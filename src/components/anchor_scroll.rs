//! Smooth scrolling for same-page hash links, offset by the sticky header.

use log::warn;
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};

use super::Behavior;
use super::mobile_nav::NavElements;
use crate::config::{
	ANCHOR_SELECTOR, DEFAULT_HEADER_HEIGHT_PX, HEADER_HEIGHT_PROPERTY, SCROLL_MARGIN_PX,
};
use crate::context::PageContext;
use crate::dom::EventListener;
use crate::error::Result;

/// Parses the header height custom property like `parseInt` would: leading
/// whitespace, optional sign, then digits; anything after is ignored.
/// Missing, unparseable and zero values fall back to the default height.
pub fn parse_header_offset(raw: &str) -> f64 {
	let s = raw.trim_start();
	let (sign, digits) = match s.as_bytes().first() {
		Some(b'-') => (-1.0, &s[1..]),
		Some(b'+') => (1.0, &s[1..]),
		_ => (1.0, s),
	};
	let end = digits
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(digits.len());
	match digits[..end].parse::<f64>() {
		Ok(value) if value != 0.0 => sign * value,
		_ => DEFAULT_HEADER_HEIGHT_PX,
	}
}

/// Document-relative scroll position that puts a target just below the
/// header.
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
	rect_top + scroll_y - header_offset - SCROLL_MARGIN_PX
}

/// Click handlers of every hash link.
pub struct AnchorScroll {
	listeners: Vec<EventListener>,
}

impl Behavior for AnchorScroll {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		let links = ctx.query_all(ANCHOR_SELECTOR)?;
		if links.is_empty() {
			return Ok(None);
		}
		let nav = NavElements::find(ctx);

		let mut listeners = Vec::with_capacity(links.len());
		for link in links {
			let (ctx, nav, href_source) = (ctx.clone(), nav.clone(), link.clone());
			listeners.push(EventListener::new(&link, "click", move |event| {
				on_click(&ctx, nav.as_ref(), &href_source, &event);
			})?);
		}
		Ok(Some(Self { listeners }))
	}

	fn detach(&mut self) {
		self.listeners.clear();
	}
}

fn on_click(ctx: &PageContext, nav: Option<&NavElements>, link: &Element, event: &Event) {
	let Some(target) = link
		.get_attribute("href")
		.and_then(|href| ctx.resolve_hash(&href))
	else {
		return;
	};
	event.prevent_default();

	let top = scroll_target(
		target.get_bounding_client_rect().top(),
		ctx.scroll_y(),
		header_offset(ctx),
	);
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(if ctx.reduced_motion {
		ScrollBehavior::Auto
	} else {
		ScrollBehavior::Smooth
	});
	ctx.window.scroll_to_with_scroll_to_options(&options);

	if let Some(Err(e)) = nav.map(NavElements::close) {
		warn!("anchor scroll: closing nav: {e}");
	}
}

fn header_offset(ctx: &PageContext) -> f64 {
	ctx.document
		.document_element()
		.and_then(|root| ctx.window.get_computed_style(&root).ok().flatten())
		.and_then(|style| style.get_property_value(HEADER_HEIGHT_PROPERTY).ok())
		.map_or(DEFAULT_HEADER_HEIGHT_PX, |raw| parse_header_offset(&raw))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn header_offset_parses_like_parse_int() {
		assert_eq!(parse_header_offset("72px"), 72.0);
		assert_eq!(parse_header_offset("  64"), 64.0);
		assert_eq!(parse_header_offset("80.5px"), 80.0);
		assert_eq!(parse_header_offset("-8px"), -8.0);
	}

	#[test]
	fn header_offset_falls_back() {
		assert_eq!(parse_header_offset(""), 60.0);
		assert_eq!(parse_header_offset("auto"), 60.0);
		assert_eq!(parse_header_offset("0px"), 60.0);
		assert_eq!(parse_header_offset("-"), 60.0);
	}

	#[test]
	fn target_sits_below_header() {
		assert_eq!(scroll_target(300.0, 1000.0, 60.0), 1228.0);
		assert_eq!(scroll_target(-200.0, 500.0, 72.0), 216.0);
	}

	proptest! {
		#[test]
		fn target_is_top_minus_header_and_margin(
			rect_top in -5000.0f64..5000.0,
			scroll_y in 0.0f64..20_000.0,
			header in 1u32..200,
		) {
			let offset = parse_header_offset(&format!("{header}px"));
			let top = scroll_target(rect_top, scroll_y, offset);
			prop_assert!((top - (rect_top + scroll_y - f64::from(header) - 12.0)).abs() < 1e-9);
		}
	}
}
