//! Page effects wired onto the static markup.
//!
//! Each effect looks up its own elements and quietly does nothing when the
//! current page lacks them, so one bundle serves every page of the site.

pub mod carousel;
pub mod contact;
pub mod resume;
pub mod reveal;
pub mod ripple;

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::Config;
use crate::error::{FxError, Result};

/// Attaches every effect whose elements exist on this page.
pub fn attach_all(document: &Document, config: &Config) {
	match reveal::attach(document) {
		Ok(0) => {}
		Ok(n) => info!("portfolio-fx: observing {} sections for reveal", n),
		Err(e) => warn!("portfolio-fx: scroll reveal disabled: {}", e),
	}
	reveal::reveal_on_load(document);

	let cards = ripple::attach(document);
	if cards > 0 {
		info!("portfolio-fx: ripple on {} cards", cards);
	}

	report("resume viewer", resume::attach(document, &config.resume));
	report("contact form", contact::attach(document, &config.contact));
	report("testimonial carousel", carousel::attach(document, &config.carousel));
}

fn report(name: &str, attached: Result<bool>) {
	match attached {
		Ok(true) => info!("portfolio-fx: {} attached", name),
		Ok(false) => {}
		Err(e) => warn!("portfolio-fx: {} disabled: {}", name, e),
	}
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(list) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Looks up an element by id and casts it to the expected type. `None` when
/// the page does not have it.
pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
	document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Casts `value`, naming `what` in the error when the cast fails.
pub(crate) fn cast<T: JsCast>(value: impl JsCast, what: &str) -> Result<T> {
	value
		.dyn_into::<T>()
		.map_err(|_| FxError::MissingElement(what.to_string()))
}
