//! Thin helpers over `web-sys` used by every behavior.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement,
	HtmlSelectElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, NodeList,
};

use crate::error::Result;

/// A DOM event listener that is removed when dropped.
pub struct EventListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	/// Registers `handler` for `event` on `target`.
	pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
	where
		F: FnMut(Event) + 'static,
	{
		Self::register(target, event, handler, None)
	}

	/// Like [`EventListener::new`], but marked passive: the handler cannot
	/// cancel the event, so the browser never waits on it before scrolling.
	pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
	where
		F: FnMut(Event) + 'static,
	{
		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		Self::register(target, event, handler, Some(&options))
	}

	fn register<F>(
		target: &EventTarget,
		event: &'static str,
		handler: F,
		options: Option<&AddEventListenerOptions>,
	) -> Result<Self>
	where
		F: FnMut(Event) + 'static,
	{
		let callback: Closure<dyn FnMut(Event)> = Closure::new(handler);
		let function: &js_sys::Function = callback.as_ref().unchecked_ref();
		match options {
			Some(options) => target
				.add_event_listener_with_callback_and_add_event_listener_options(
					event, function, options,
				)?,
			None => target.add_event_listener_with_callback(event, function)?,
		}
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}

	/// Registers a listener that fires at most once and then frees itself.
	///
	/// The browser drops the registration after the first dispatch, so no
	/// handle is returned.
	pub fn once<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<()>
	where
		F: FnOnce() + 'static,
	{
		let options = AddEventListenerOptions::new();
		options.set_once(true);
		let callback = Closure::once_into_js(handler);
		target.add_event_listener_with_callback_and_add_event_listener_options(
			event,
			callback.unchecked_ref(),
			&options,
		)?;
		Ok(())
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` that disconnects when dropped.
pub struct Observer {
	inner: IntersectionObserver,
	_callback: ObserverCallback,
}

impl Observer {
	/// Creates an observer reporting each batch of entries to `handler` in
	/// the order the browser lists them.
	pub fn new<F>(threshold: f64, root_margin: &str, mut handler: F) -> Result<Self>
	where
		F: FnMut(&[IntersectionObserverEntry], &IntersectionObserver) + 'static,
	{
		let callback: ObserverCallback =
			Closure::new(move |entries: Array, observer: IntersectionObserver| {
				let entries: Vec<IntersectionObserverEntry> = entries
					.iter()
					.filter_map(|entry| entry.dyn_into().ok())
					.collect();
				handler(&entries, &observer);
			});
		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(threshold));
		init.set_root_margin(root_margin);
		let inner =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
		Ok(Self {
			inner,
			_callback: callback,
		})
	}

	/// Starts watching `target`.
	pub fn observe(&self, target: &Element) {
		self.inner.observe(target);
	}
}

impl Drop for Observer {
	fn drop(&mut self) {
		self.inner.disconnect();
	}
}

/// All elements matching `selector` in the document, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
	Ok(elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
	Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Adds or removes `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<()> {
	let list = el.class_list();
	if on {
		list.add_1(class)?;
	} else {
		list.remove_1(class)?;
	}
	Ok(())
}

/// Whether `el` carries `class`.
pub fn has_class(el: &Element, class: &str) -> bool {
	el.class_list().contains(class)
}

/// Sets an inline style property, or removes it when `value` is `None`.
pub fn set_style(el: &Element, property: &str, value: Option<&str>) -> Result<()> {
	let Some(el) = el.dyn_ref::<HtmlElement>() else {
		return Ok(());
	};
	let style = el.style();
	match value {
		Some(value) => style.set_property(property, value)?,
		None => {
			style.remove_property(property)?;
		}
	}
	Ok(())
}

/// Current value of a form control, if `el` is one.
pub fn field_value(el: &Element) -> Option<String> {
	if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
		return Some(input.value());
	}
	if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
		return Some(area.value());
	}
	el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}
