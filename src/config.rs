//! Selectors, ids, thresholds and timings the page markup and stylesheet
//! agree on.

use std::time::Duration;

/// Media query that gates every animation-bearing behavior.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Class toggled on state changes across most behaviors.
pub const ACTIVE_CLASS: &str = "active";

// Scroll tracker
/// Id of the sticky header.
pub const TOPBAR_ID: &str = "topbar";
/// Class set on the header once the page has scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Scroll offset the header must exceed to count as scrolled.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

// Anchor scroller
/// Links that scroll within the page.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
/// Root custom property holding the header height.
pub const HEADER_HEIGHT_PROPERTY: &str = "--header-h";
/// Header height used when the custom property is missing or zero.
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 60.0;
/// Gap kept between the header and a scrolled-to section.
pub const SCROLL_MARGIN_PX: f64 = 12.0;

// Mobile nav
/// Id of the mobile menu button.
pub const HAMBURGER_ID: &str = "hamburger";
/// Id of the mobile nav overlay.
pub const MOBILE_NAV_ID: &str = "mobile-nav";
/// Class marking the overlay open.
pub const NAV_OPEN_CLASS: &str = "open";

// Contact form
/// Both contact forms.
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
/// Operator/supplier switch, hidden after a submission.
pub const CONTACT_TOGGLE_SELECTOR: &str = ".contact__toggle";
/// Id of the panel shown after a successful submission.
pub const CONFIRMATION_ID: &str = "form-confirmation";
/// Class that reveals the confirmation panel.
pub const CONFIRMATION_SHOW_CLASS: &str = "show";
/// Id of the operator form; any other form is the supplier form.
pub const OPERATOR_FORM_ID: &str = "form-operator";
/// Border color of a field that failed validation.
pub const INVALID_BORDER_COLOR: &str = "#ef4444";

// FAQ accordion
/// One question/answer pair.
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
/// Clickable question inside an item.
pub const FAQ_QUESTION_SELECTOR: &str = ".faq-item__question";
/// Collapsible answer inside an item.
pub const FAQ_ANSWER_SELECTOR: &str = ".faq-item__answer";
/// Class marking an expanded item.
pub const FAQ_OPEN_CLASS: &str = "open";

// Reveal on scroll
/// Elements revealed as they scroll into view.
pub const REVEAL_SELECTOR: &str = ".reveal";
/// Class that plays the reveal transition.
pub const REVEAL_VISIBLE_CLASS: &str = "visible";
/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.12;
/// Reveals start slightly above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

// Beam diagram
/// Id of the SVG the beams are drawn into.
pub const BEAM_SVG_ID: &str = "beam-svg";
/// Id of the box node positions are measured against.
pub const BEAM_CONTAINER_ID: &str = "beam-container";
/// Id of the hub node.
pub const BEAM_CENTER_ID: &str = "bn-center";
/// Nodes whose beams run into the hub, in drawing order.
pub const BEAM_LEFT_IDS: [&str; 4] = ["bn-op1", "bn-op2", "bn-op3", "bn-op4"];
/// Nodes whose beams run out of the hub, in drawing order.
pub const BEAM_RIGHT_IDS: [&str; 2] = ["bn-sup1", "bn-sup2"];
/// Class of each beam `<path>`.
pub const BEAM_PATH_CLASS: &str = "beam-path";
/// Class of each travelling `<circle>`.
pub const BEAM_DOT_CLASS: &str = "beam-dot";
/// Dot radius, as written to the `r` attribute.
pub const BEAM_DOT_RADIUS: &str = "3";
/// Quiet period after the last resize before beams are redrawn.
pub const BEAM_RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

// Cursor effects
/// Cards that get the pointer spotlight.
pub const SPOTLIGHT_SELECTOR: &str = ".usecase-card, .capability-card";
/// Panel that tilts toward the pointer.
pub const TILT_PANEL_SELECTOR: &str = ".hero-panel";
/// Rotation at the panel edge, in degrees.
pub const TILT_MAX_DEG: f64 = 3.0;
/// Perspective distance of the tilt.
pub const TILT_PERSPECTIVE_PX: f64 = 800.0;
/// Transition applied while the panel eases back flat.
pub const TILT_RESET_TRANSITION: &str = "transform 0.5s ease";
/// How long the reset transition stays on the panel.
pub const TILT_RESET_DELAY: Duration = Duration::from_millis(500);

// Active section nav
/// Top bar links tracked against their sections.
pub const NAV_LINK_SELECTOR: &str = ".topbar__link";
/// Visible fraction at which a section becomes current.
pub const SECTION_THRESHOLD: f64 = 0.3;
/// Only the band below the header and above the lower 40% counts.
pub const SECTION_ROOT_MARGIN: &str = "-60px 0px -40% 0px";

/// Describes one mutually exclusive group of tab buttons and panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabGroupConfig {
	/// Selector matching every button of the group.
	pub button_selector: &'static str,
	/// Selector matching every panel of the group.
	pub panel_selector: &'static str,
	/// Attribute on a button naming its target panel.
	pub target_attribute: &'static str,
	/// Prefix joined with the target to form the panel id.
	pub panel_id_prefix: &'static str,
	/// Hide the contact confirmation panel when switching.
	pub hides_confirmation: bool,
}

/// Hero panel tabs.
pub const HERO_TABS: TabGroupConfig = TabGroupConfig {
	button_selector: ".hero-panel__tab",
	panel_selector: ".hero-panel__content",
	target_attribute: "data-panel",
	panel_id_prefix: "panel-",
	hides_confirmation: false,
};

/// Operator/supplier contact form selector.
pub const CONTACT_TABS: TabGroupConfig = TabGroupConfig {
	button_selector: ".contact__toggle-btn",
	panel_selector: CONTACT_FORM_SELECTOR,
	target_attribute: "data-form",
	panel_id_prefix: "form-",
	hides_confirmation: true,
};
