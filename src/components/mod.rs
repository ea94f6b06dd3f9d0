//! Every behavior of the landing page, one module each.

pub mod accordion;
pub mod anchor_scroll;
pub mod beam;
pub mod contact_form;
pub mod cursor;
pub mod mobile_nav;
pub mod reveal;
pub mod scroll_header;
pub mod section_nav;
pub mod tabs;

use crate::context::PageContext;
use crate::error::Result;

/// A page behavior wired to existing markup.
///
/// `attach` returns `Ok(None)` when the behavior's anchors are absent from
/// the document, so pages missing a section simply skip it.
pub trait Behavior {
	/// Finds the behavior's elements and registers its handlers.
	fn attach(ctx: &PageContext) -> Result<Option<Self>>
	where
		Self: Sized;

	/// Removes every handler, observer and pending timer. Idempotent.
	fn detach(&mut self);
}
