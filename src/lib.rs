//! Client-side behaviors for the WTE Flow landing page.

use log::{Level, error, info};

// Modules
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod error;
pub mod pages;

pub use crate::context::PageContext;
pub use crate::error::PageError;
pub use crate::pages::landing::LandingPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Attaches every behavior to the current document and keeps them alive for
/// the rest of the page's life.
pub fn start() {
	let ctx = match PageContext::from_window() {
		Ok(ctx) => ctx,
		Err(e) => {
			error!("landing page not started: {e}");
			return;
		}
	};
	let page = LandingPage::attach(&ctx);
	info!("landing page ready: {}", page.attached().join(", "));
	std::mem::forget(page);
}
