//! Contact form validation and the local submission stub.
//!
//! Validation flags offending fields with a red border; nothing leaves the
//! page. A validated form is packaged into a [`Submission`] and handed to a
//! [`SubmissionSink`], which is where a network transport would plug in.

use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;

use js_sys::Array;
use log::{info, warn};
use regex::Regex;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement};

use super::Behavior;
use crate::config::{
	ACTIVE_CLASS, CONFIRMATION_ID, CONFIRMATION_SHOW_CLASS, CONTACT_FORM_SELECTOR,
	CONTACT_TOGGLE_SELECTOR, INVALID_BORDER_COLOR, OPERATOR_FORM_ID,
};
use crate::context::PageContext;
use crate::dom::{self, EventListener};
use crate::error::Result;

static EMAIL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(value: &str) -> bool {
	EMAIL.is_match(value)
}

/// Blank once surrounding whitespace is ignored.
pub fn is_missing(value: &str) -> bool {
	value.trim().is_empty()
}

/// Outcome of checking one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
	/// Indices of required fields left blank.
	pub missing: Vec<usize>,
	/// The email field is filled but malformed.
	pub bad_email: bool,
}

impl Validation {
	/// Nothing to flag.
	pub fn is_valid(&self) -> bool {
		self.missing.is_empty() && !self.bad_email
	}
}

/// Checks required values and, when present and non-empty, the email value.
pub fn validate<S: AsRef<str>>(required: &[S], email: Option<&str>) -> Validation {
	Validation {
		missing: required
			.iter()
			.enumerate()
			.filter(|(_, value)| is_missing(value.as_ref()))
			.map(|(i, _)| i)
			.collect(),
		bad_email: email.is_some_and(|v| !v.is_empty() && !is_valid_email(v)),
	}
}

/// Which of the two contact forms was submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FormKind {
	/// The `#form-operator` form.
	Operator,
	/// Any other contact form.
	Supplier,
}

impl FormKind {
	/// Kind of the form with element id `id`.
	pub fn from_form_id(id: &str) -> Self {
		if id == OPERATOR_FORM_ID {
			Self::Operator
		} else {
			Self::Supplier
		}
	}
}

impl fmt::Display for FormKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Operator => "Operator",
			Self::Supplier => "Supplier",
		})
	}
}

/// A validated form, ready for transport.
///
/// Serializes as one flat object: the fields in form order, then
/// `form_type`. A repeated name keeps its first position and its last value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
	/// Which form produced this submission.
	pub form_type: FormKind,
	/// Field name/value pairs in form order.
	pub fields: Vec<(String, String)>,
}

impl Submission {
	/// Fields with duplicates folded, in first-seen order.
	fn entries(&self) -> Vec<(&str, &str)> {
		let mut entries: Vec<(&str, &str)> = Vec::with_capacity(self.fields.len());
		for (name, value) in &self.fields {
			let (name, value) = (name.as_str(), value.as_str());
			// The tag always goes last and always wins.
			if name == "form_type" {
				continue;
			}
			match entries.iter_mut().find(|(seen, _)| *seen == name) {
				Some(entry) => entry.1 = value,
				None => entries.push((name, value)),
			}
		}
		entries
	}
}

impl Serialize for Submission {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let entries = self.entries();
		let mut map = serializer.serialize_map(Some(entries.len() + 1))?;
		for (name, value) in entries {
			map.serialize_entry(name, value)?;
		}
		map.serialize_entry("form_type", &self.form_type)?;
		map.end()
	}
}

/// Receives validated submissions.
pub trait SubmissionSink {
	/// Called once per valid submission.
	fn submit(&self, submission: &Submission);
}

/// Logs submissions to the console. Stands in for a real endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
	fn submit(&self, submission: &Submission) {
		match serde_json::to_string(submission) {
			Ok(json) => info!("Form submitted ({}): {json}", submission.form_type),
			Err(e) => warn!("Form submitted ({}), unserializable: {e}", submission.form_type),
		}
	}
}

/// Submit handlers of both contact forms.
pub struct ContactForm {
	listeners: Vec<EventListener>,
}

impl ContactForm {
	/// Wires every contact form to `sink`.
	pub fn attach_with_sink(
		ctx: &PageContext,
		sink: Rc<dyn SubmissionSink>,
	) -> Result<Option<Self>> {
		let forms = ctx.query_all(CONTACT_FORM_SELECTOR)?;
		let Some(confirmation) = ctx.by_id(CONFIRMATION_ID) else {
			return Ok(None);
		};
		if forms.is_empty() {
			return Ok(None);
		}

		let shared = Rc::new(Shared {
			ctx: ctx.clone(),
			forms: forms.clone(),
			confirmation,
			sink,
		});
		let mut listeners = Vec::with_capacity(forms.len());
		for form in forms {
			let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
				continue;
			};
			let shared = shared.clone();
			let handle = form.clone();
			listeners.push(EventListener::new(&handle, "submit", move |event| {
				event.prevent_default();
				if let Err(e) = shared.on_submit(&form) {
					warn!("contact form: {e}");
				}
			})?);
		}
		Ok(Some(Self { listeners }))
	}
}

impl Behavior for ContactForm {
	fn attach(ctx: &PageContext) -> Result<Option<Self>> {
		Self::attach_with_sink(ctx, Rc::new(ConsoleSink))
	}

	fn detach(&mut self) {
		self.listeners.clear();
	}
}

struct Shared {
	ctx: PageContext,
	forms: Vec<Element>,
	confirmation: Element,
	sink: Rc<dyn SubmissionSink>,
}

impl Shared {
	fn on_submit(&self, form: &HtmlFormElement) -> Result<()> {
		let required = dom::query_all_in(form, "[required]")?;
		let values: Vec<String> = required
			.iter()
			.map(|el| dom::field_value(el).unwrap_or_default())
			.collect();
		let email_field = form.query_selector(r#"input[type="email"]"#)?;
		let email = email_field.as_ref().and_then(dom::field_value);

		let validation = validate(&values, email.as_deref());
		for field in validation.missing.iter().filter_map(|&i| required.get(i)) {
			flag_until_input(field)?;
		}
		if validation.bad_email {
			if let Some(field) = &email_field {
				dom::set_style(field, "border-color", Some(INVALID_BORDER_COLOR))?;
			}
		}
		if !validation.is_valid() {
			return Ok(());
		}

		let submission = Submission {
			form_type: FormKind::from_form_id(&form.id()),
			fields: collect_fields(form)?,
		};
		for f in &self.forms {
			dom::set_class(f, ACTIVE_CLASS, false)?;
		}
		if let Some(toggle) = self.ctx.document.query_selector(CONTACT_TOGGLE_SELECTOR)? {
			dom::set_style(&toggle, "display", Some("none"))?;
		}
		dom::set_class(&self.confirmation, CONFIRMATION_SHOW_CLASS, true)?;
		self.sink.submit(&submission);
		Ok(())
	}
}

/// Red border that clears itself on the field's next input.
fn flag_until_input(field: &Element) -> Result<()> {
	dom::set_style(field, "border-color", Some(INVALID_BORDER_COLOR))?;
	let target = field.clone();
	EventListener::once(field, "input", move || {
		let _ = dom::set_style(&target, "border-color", None);
	})
}

fn collect_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>> {
	let data = FormData::new_with_form(form)?;
	let Some(entries) = js_sys::try_iter(&data)? else {
		return Ok(Vec::new());
	};
	let mut fields = Vec::new();
	for entry in entries {
		let Ok(pair) = entry?.dyn_into::<Array>() else {
			continue;
		};
		// File entries have no string value and are skipped.
		if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
			fields.push((name, value));
		}
	}
	Ok(fields)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn email_shape() {
		assert!(is_valid_email("a@b.com"));
		assert!(is_valid_email("first.last+tag@mail.example.org"));
		assert!(!is_valid_email("a@b"));
		assert!(!is_valid_email("a b@c.com"));
		assert!(!is_valid_email("a@@b.com"));
		assert!(!is_valid_email("@b.com"));
		assert!(!is_valid_email("a@b."));
	}

	#[test]
	fn blank_required_field_blocks() {
		let v = validate(&["Ada", "   ", "", "x"], None);
		assert_eq!(v.missing, vec![1, 2]);
		assert!(!v.is_valid());
	}

	#[test]
	fn email_checked_only_when_filled() {
		assert!(validate(&["Ada"], Some("")).is_valid());
		assert!(validate(&["Ada"], None).is_valid());
		assert!(validate(&["Ada"], Some("a@b.com")).is_valid());

		let v = validate(&["Ada"], Some("a@b"));
		assert!(v.bad_email);
		assert!(v.missing.is_empty());
		assert!(!v.is_valid());
	}

	#[test]
	fn form_kind_from_id() {
		assert_eq!(FormKind::from_form_id("form-operator"), FormKind::Operator);
		assert_eq!(FormKind::from_form_id("form-supplier"), FormKind::Supplier);
		assert_eq!(FormKind::from_form_id(""), FormKind::Supplier);
	}

	fn submission(form_type: FormKind, fields: &[(&str, &str)]) -> Submission {
		Submission {
			form_type,
			fields: fields
				.iter()
				.map(|(n, v)| (n.to_string(), v.to_string()))
				.collect(),
		}
	}

	#[test]
	fn json_keeps_form_order_then_tag() {
		let s = submission(FormKind::Operator, &[("zeta", "1"), ("alpha", "2")]);
		assert_eq!(
			serde_json::to_string(&s).unwrap(),
			r#"{"zeta":"1","alpha":"2","form_type":"Operator"}"#
		);
	}

	#[test]
	fn json_repeated_name_keeps_first_slot_last_value() {
		let s = submission(
			FormKind::Supplier,
			&[("name", "Ada"), ("email", "a@b.com"), ("name", "Grace")],
		);
		assert_eq!(
			serde_json::to_string(&s).unwrap(),
			r#"{"name":"Grace","email":"a@b.com","form_type":"Supplier"}"#
		);
	}

	#[test]
	fn json_field_cannot_shadow_tag() {
		let s = submission(FormKind::Operator, &[("form_type", "x"), ("company", "Acme")]);
		assert_eq!(
			serde_json::to_string(&s).unwrap(),
			r#"{"company":"Acme","form_type":"Operator"}"#
		);
	}
}
