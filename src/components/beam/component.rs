use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::ev;
use leptos::prelude::{
	TimeoutHandle, WindowListenerHandle, set_timeout_with_handle, window_event_listener,
};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use super::geometry::{BeamPath, Point, Side, center_in};
use super::state::DotSchedule;
use crate::components::Behavior;
use crate::config::{
	BEAM_CENTER_ID, BEAM_CONTAINER_ID, BEAM_DOT_CLASS, BEAM_DOT_RADIUS, BEAM_LEFT_IDS,
	BEAM_PATH_CLASS, BEAM_RESIZE_DEBOUNCE, BEAM_RIGHT_IDS, BEAM_SVG_ID,
};
use crate::context::PageContext;
use crate::error::Result;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// One dot's self-rescheduling frame chain.
struct DotLoop {
	callback: FrameClosure,
	frame: Rc<Cell<Option<i32>>>,
}

impl DotLoop {
	fn is_live(&self) -> bool {
		self.frame.get().is_some() && self.callback.borrow().is_some()
	}

	fn cancel(&self, window: &Window) {
		if let Some(id) = self.frame.take() {
			let _ = window.cancel_animation_frame(id);
		}
		// The closure holds its own slot; dropping it breaks the cycle.
		self.callback.borrow_mut().take();
	}
}

struct Diagram {
	ctx: PageContext,
	svg: Element,
	container: Element,
	dots: RefCell<Vec<DotLoop>>,
	pending_resize: Cell<Option<TimeoutHandle>>,
	draws: Cell<usize>,
}

impl Diagram {
	fn cancel_dots(&self) {
		for dot in self.dots.borrow_mut().drain(..) {
			dot.cancel(&self.ctx.window);
		}
	}

	fn cancel_pending_resize(&self) {
		if let Some(handle) = self.pending_resize.take() {
			handle.clear();
		}
	}

	fn redraw(&self) {
		self.draws.set(self.draws.get() + 1);
		match self.draw() {
			Ok(paths) => debug!("beam: draw #{} with {paths} paths", self.draws.get()),
			Err(e) => warn!("beam: redraw failed: {e}"),
		}
	}

	/// Full rebuild of every path and dot; returns the number of paths.
	fn draw(&self) -> Result<usize> {
		self.cancel_dots();
		self.svg.set_inner_html("");

		let Some(hub) = self.ctx.by_id(BEAM_CENTER_ID) else {
			return Ok(0);
		};
		let origin = {
			let rect = self.container.get_bounding_client_rect();
			Point::new(rect.left(), rect.top())
		};
		let center_of = |el: &Element| {
			let r = el.get_bounding_client_rect();
			center_in(r.left(), r.top(), r.width(), r.height(), origin)
		};
		let center = center_of(&hub);

		let nodes = BEAM_LEFT_IDS
			.iter()
			.map(|id| (*id, Side::Left))
			.chain(BEAM_RIGHT_IDS.iter().map(|id| (*id, Side::Right)));
		let mut paths = Vec::new();
		for (id, side) in nodes {
			let Some(node) = self.ctx.by_id(id) else {
				continue;
			};
			let beam = BeamPath::new(center_of(&node), center, side);
			let el = self.svg_child("path")?;
			el.set_attribute("d", &beam.curve.svg_path())?;
			el.set_attribute("class", BEAM_PATH_CLASS)?;
			paths.push(beam);
		}

		if !self.ctx.reduced_motion {
			let mut dots = self.dots.borrow_mut();
			for (index, beam) in paths.iter().enumerate() {
				let dot = self.svg_child("circle")?;
				dot.set_attribute("class", BEAM_DOT_CLASS)?;
				dot.set_attribute("r", BEAM_DOT_RADIUS)?;
				dots.push(self.animate(dot, beam.clone(), DotSchedule::for_index(index))?);
			}
		}
		Ok(paths.len())
	}

	fn svg_child(&self, tag: &str) -> Result<Element> {
		let el = self.ctx.document.create_element_ns(Some(SVG_NS), tag)?;
		self.svg.append_child(&el)?;
		Ok(el)
	}

	fn animate(&self, dot: Element, beam: BeamPath, schedule: DotSchedule) -> Result<DotLoop> {
		let callback: FrameClosure = Rc::new(RefCell::new(None));
		let frame = Rc::new(Cell::new(None));
		let (callback_inner, frame_inner) = (callback.clone(), frame.clone());
		let window = self.ctx.window.clone();
		let mut first_frame = None;

		*callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			let start = *first_frame.get_or_insert(timestamp);
			let state = schedule.frame(timestamp - start);
			let at = beam.point_at_fraction(state.progress);
			let _ = dot.set_attribute("cx", &at.x.to_string());
			let _ = dot.set_attribute("cy", &at.y.to_string());
			let _ = dot.set_attribute("opacity", &state.opacity.to_string());

			if let Some(ref cb) = *callback_inner.borrow() {
				frame_inner.set(
					window
						.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok(),
				);
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			frame.set(Some(
				self.ctx
					.window
					.request_animation_frame(cb.as_ref().unchecked_ref())?,
			));
		}
		Ok(DotLoop { callback, frame })
	}
}

/// Hub-and-spoke diagram whose beams are redrawn after resizes and whose
/// dots loop along them every frame.
pub struct BeamDiagram {
	diagram: Rc<Diagram>,
	resize: Option<WindowListenerHandle>,
}

impl BeamDiagram {
	/// Rebuilds every path and dot now.
	pub fn redraw(&self) {
		self.diagram.redraw();
	}

	/// Dots whose frame chain is still scheduled.
	pub fn live_dots(&self) -> usize {
		self.diagram.dots.borrow().iter().filter(|d| d.is_live()).count()
	}
}

impl Behavior for BeamDiagram {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		let (Some(svg), Some(container)) = (ctx.by_id(BEAM_SVG_ID), ctx.by_id(BEAM_CONTAINER_ID))
		else {
			return Ok(None);
		};
		let diagram = Rc::new(Diagram {
			ctx: ctx.clone(),
			svg,
			container,
			dots: RefCell::new(Vec::new()),
			pending_resize: Cell::new(None),
			draws: Cell::new(0),
		});
		diagram.redraw();

		let weak = Rc::downgrade(&diagram);
		let resize = window_event_listener(ev::resize, move |_| schedule_redraw(&weak));
		Ok(Some(Self {
			diagram,
			resize: Some(resize),
		}))
	}

	fn detach(&mut self) {
		if let Some(resize) = self.resize.take() {
			resize.remove();
		}
		self.diagram.cancel_pending_resize();
		self.diagram.cancel_dots();
	}
}

impl Drop for BeamDiagram {
	fn drop(&mut self) {
		self.detach();
	}
}

/// Restarts the debounce window; only the last resize in a burst redraws.
fn schedule_redraw(weak: &Weak<Diagram>) {
	let Some(diagram) = weak.upgrade() else {
		return;
	};
	diagram.cancel_pending_resize();
	let target = weak.clone();
	let pending = set_timeout_with_handle(
		move || {
			if let Some(diagram) = target.upgrade() {
				diagram.pending_resize.set(None);
				diagram.redraw();
			}
		},
		BEAM_RESIZE_DEBOUNCE,
	);
	match pending {
		Ok(handle) => diagram.pending_resize.set(Some(handle)),
		Err(e) => warn!("beam: resize timer: {e:?}"),
	}
}
