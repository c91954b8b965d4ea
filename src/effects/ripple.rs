//! Click ripple on project cards.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::{cast, query_all};
use crate::error::Result;
use crate::timer;

/// Cards that get a ripple on click.
pub const CARD_SELECTOR: &str = ".project-card";
/// Class of the transient ripple element.
pub const RIPPLE_CLASS: &str = "click-circle";
/// How long a ripple stays in the DOM.
pub const RIPPLE_LIFETIME_MS: i32 = 500;

/// Adds the ripple handler to every card. Returns the number of cards.
pub fn attach(document: &Document) -> usize {
	let cards = query_all(document, CARD_SELECTOR);
	for card in &cards {
		let (document, target) = (document.clone(), card.clone());
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			if let Err(e) = spawn_ripple(&document, &target, ev.offset_x(), ev.offset_y()) {
				warn!("portfolio-fx: ripple failed: {}", e);
			}
		});
		let _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
	}
	cards.len()
}

/// Appends a ripple at `(x, y)` inside `card` and schedules its removal.
pub fn spawn_ripple(document: &Document, card: &Element, x: i32, y: i32) -> Result<()> {
	let circle: HtmlElement = cast(document.create_element("span")?, "span")?;
	circle.class_list().add_1(RIPPLE_CLASS)?;
	let style = circle.style();
	style.set_property("left", &format!("{}px", x))?;
	style.set_property("top", &format!("{}px", y))?;
	card.append_child(&circle)?;

	timer::after(RIPPLE_LIFETIME_MS, move || circle.remove());
	Ok(())
}
