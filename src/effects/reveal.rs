//! Fade sections in the first time they scroll into view.

use js_sys::Array;
use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit,
};

use super::query_all;
use crate::error::Result;

/// Sections that fade in on scroll.
pub const SECTION_SELECTOR: &str = ".fade-section";
/// Class added once a section has been seen.
pub const REVEALED_CLASS: &str = "show";
/// Fraction of a section that must be visible before it is revealed.
pub const THRESHOLD: f64 = 0.2;
/// Shrinks the viewport bottom so sections reveal slightly after entering.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Certificate card that fades in after the page loads.
pub const CERTIFICATE_SELECTOR: &str = ".certificate-container";

/// Observes every `.fade-section`. A section is revealed once and then
/// unobserved. Returns the number of sections observed.
pub fn attach(document: &Document) -> Result<usize> {
	let sections = query_all(document, SECTION_SELECTOR);
	if sections.is_empty() {
		return Ok(0);
	}

	let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		|entries: Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				let _ = target.class_list().add_1(REVEALED_CLASS);
				observer.unobserve(&target);
				debug!("portfolio-fx: revealed {}", target.id());
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	options.set_root_margin(ROOT_MARGIN);
	let observer =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
	for section in &sections {
		observer.observe(section);
	}
	// The observer lives as long as the page.
	on_intersect.forget();

	Ok(sections.len())
}

/// Makes the certificate card visible once the page has loaded. Applies
/// immediately if loading already finished.
pub fn reveal_on_load(document: &Document) {
	let Some(container) = document
		.query_selector(CERTIFICATE_SELECTOR)
		.ok()
		.flatten()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};

	if document.ready_state() == "complete" {
		let _ = container.style().set_property("opacity", "1");
		return;
	}
	let Some(window) = web_sys::window() else {
		return;
	};
	let on_load = Closure::once_into_js(move || {
		let _ = container.style().set_property("opacity", "1");
	});
	let _ = window.add_event_listener_with_callback("load", on_load.unchecked_ref());
}
