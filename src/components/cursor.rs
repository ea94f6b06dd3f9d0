//! Pointer-driven card spotlight and hero panel tilt.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};
use log::warn;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, MouseEvent};

use super::Behavior;
use crate::config::{
	SPOTLIGHT_SELECTOR, TILT_MAX_DEG, TILT_PANEL_SELECTOR, TILT_PERSPECTIVE_PX,
	TILT_RESET_DELAY, TILT_RESET_TRANSITION,
};
use crate::context::PageContext;
use crate::dom::{self, EventListener};
use crate::error::Result;

/// Card background lit at `(x, y)` relative to the card.
pub fn spotlight_background(x: f64, y: f64) -> String {
	format!(
		"radial-gradient(400px circle at {x}px {y}px, rgba(91, 138, 245, 0.06), var(--bg-2) 70%)"
	)
}

/// Pointer offset from the center of a box, each axis in `[-0.5, 0.5]` while
/// the pointer is inside. `None` for an empty box.
pub fn center_offset(
	client: (f64, f64),
	left: f64,
	top: f64,
	width: f64,
	height: f64,
) -> Option<(f64, f64)> {
	if width <= 0.0 || height <= 0.0 {
		return None;
	}
	Some((
		(client.0 - left) / width - 0.5,
		(client.1 - top) / height - 0.5,
	))
}

/// Panel transform for a pointer at normalized offset `(nx, ny)`.
pub fn tilt_transform(nx: f64, ny: f64) -> String {
	format!(
		"perspective({TILT_PERSPECTIVE_PX}px) rotateY({}deg) rotateX({}deg)",
		nx * TILT_MAX_DEG,
		-ny * TILT_MAX_DEG
	)
}

/// Client coordinates of a mouse event at full precision.
///
/// Browsers report `clientX`/`clientY` as fractional CSS pixels; the typed
/// getters truncate to integers, so they are only the fallback.
fn pointer(event: &Event) -> Option<(f64, f64)> {
	let mouse = event.dyn_ref::<MouseEvent>()?;
	let axis = |name: &str, fallback: i32| {
		Reflect::get(mouse, &JsValue::from_str(name))
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(f64::from(fallback))
	};
	Some((axis("clientX", mouse.client_x()), axis("clientY", mouse.client_y())))
}

/// Spotlight on every card plus the hero panel tilt. Not attached when the
/// user prefers reduced motion.
pub struct CursorEffects {
	listeners: Vec<EventListener>,
	tilt_reset: Rc<Cell<Option<TimeoutHandle>>>,
}

impl Behavior for CursorEffects {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		if ctx.reduced_motion {
			return Ok(None);
		}
		let cards = ctx.query_all(SPOTLIGHT_SELECTOR)?;
		let panel = ctx.document.query_selector(TILT_PANEL_SELECTOR)?;
		if cards.is_empty() && panel.is_none() {
			return Ok(None);
		}

		let mut listeners = Vec::new();
		for card in cards {
			spotlight(&card, &mut listeners)?;
		}
		let tilt_reset = Rc::new(Cell::new(None));
		if let Some(panel) = panel {
			tilt(&panel, &tilt_reset, &mut listeners)?;
		}
		Ok(Some(Self {
			listeners,
			tilt_reset,
		}))
	}

	fn detach(&mut self) {
		self.listeners.clear();
		if let Some(handle) = self.tilt_reset.take() {
			handle.clear();
		}
	}
}

fn spotlight(card: &Element, listeners: &mut Vec<EventListener>) -> Result<()> {
	let target = card.clone();
	listeners.push(EventListener::new(card, "mousemove", move |event| {
		let Some((x, y)) = pointer(&event) else {
			return;
		};
		let rect = target.get_bounding_client_rect();
		let background = spotlight_background(x - rect.left(), y - rect.top());
		if let Err(e) = dom::set_style(&target, "background", Some(&background)) {
			warn!("spotlight: {e}");
		}
	})?);

	let target = card.clone();
	listeners.push(EventListener::new(card, "mouseleave", move |_| {
		let _ = dom::set_style(&target, "background", None);
	})?);
	Ok(())
}

fn tilt(
	panel: &Element,
	reset: &Rc<Cell<Option<TimeoutHandle>>>,
	listeners: &mut Vec<EventListener>,
) -> Result<()> {
	let target = panel.clone();
	listeners.push(EventListener::new(panel, "mousemove", move |event| {
		let Some(client) = pointer(&event) else {
			return;
		};
		let rect = target.get_bounding_client_rect();
		let Some((nx, ny)) =
			center_offset(client, rect.left(), rect.top(), rect.width(), rect.height())
		else {
			return;
		};
		if let Err(e) = dom::set_style(&target, "transform", Some(&tilt_transform(nx, ny))) {
			warn!("tilt: {e}");
		}
	})?);

	let (target, reset) = (panel.clone(), reset.clone());
	listeners.push(EventListener::new(panel, "mouseleave", move |_| {
		let _ = dom::set_style(&target, "transform", None);
		let _ = dom::set_style(&target, "transition", Some(TILT_RESET_TRANSITION));

		if let Some(handle) = reset.take() {
			handle.clear();
		}
		let (settled, slot) = (target.clone(), reset.clone());
		let pending = set_timeout_with_handle(
			move || {
				slot.set(None);
				let _ = dom::set_style(&settled, "transition", None);
			},
			TILT_RESET_DELAY,
		);
		match pending {
			Ok(handle) => reset.set(Some(handle)),
			Err(e) => warn!("tilt: reset timer: {e:?}"),
		}
	})?);
	Ok(())
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn spotlight_follows_pointer() {
		assert_eq!(
			spotlight_background(12.0, 40.5),
			"radial-gradient(400px circle at 12px 40.5px, rgba(91, 138, 245, 0.06), var(--bg-2) 70%)"
		);
	}

	#[test]
	fn offset_is_centered() {
		assert_eq!(
			center_offset((150.0, 100.0), 100.0, 50.0, 100.0, 100.0),
			Some((0.0, 0.0))
		);
		assert_eq!(
			center_offset((100.0, 150.0), 100.0, 50.0, 100.0, 100.0),
			Some((-0.5, 0.5))
		);
		assert_eq!(center_offset((1.0, 1.0), 0.0, 0.0, 0.0, 10.0), None);
	}

	#[test]
	fn tilt_leans_toward_pointer() {
		assert_eq!(
			tilt_transform(0.5, -0.5),
			"perspective(800px) rotateY(1.5deg) rotateX(1.5deg)"
		);
		assert_eq!(
			tilt_transform(-0.25, 0.25),
			"perspective(800px) rotateY(-0.75deg) rotateX(-0.75deg)"
		);
	}
}
