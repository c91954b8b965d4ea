//! Testimonial slider with wrap-around navigation and auto-advance.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::{by_id, query_all};
use crate::config::CarouselConfig;
use crate::error::Result;
use crate::timer::{Fixed, RepeatingTask};

/// Element translated to show the current card.
pub const TRACK_SELECTOR: &str = ".testimonial-track";
/// One slide; the first one is measured for the slide width.
pub const CARD_SELECTOR: &str = ".testimonial-card";
/// Step-back button.
pub const PREV_ID: &str = "prevBtn";
/// Step-forward button.
pub const NEXT_ID: &str = "nextBtn";
/// Transition applied to the track on every move.
pub const TRANSITION: &str = "transform 0.6s ease-in-out";

/// Index into a fixed sequence of cards. Both directions wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
	index: usize,
	len: usize,
}

impl Carousel {
	/// Starts on the first of `len` cards.
	pub fn new(len: usize) -> Self {
		Self { index: 0, len }
	}

	/// Current card.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Number of cards.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Whether there are no cards at all.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Moves forward, wrapping to the first card. Returns the new index.
	pub fn next(&mut self) -> usize {
		if self.len > 0 {
			self.index = (self.index + 1) % self.len;
		}
		self.index
	}

	/// Moves back, wrapping to the last card. Returns the new index.
	pub fn prev(&mut self) -> usize {
		if self.len > 0 {
			self.index = (self.index + self.len - 1) % self.len;
		}
		self.index
	}

	/// Horizontal track offset for the current card.
	pub fn offset(&self, slide_width: f64) -> f64 {
		self.index as f64 * slide_width
	}

	/// CSS transform that brings the current card into view.
	pub fn transform(&self, slide_width: f64) -> String {
		format!("translateX(-{}px)", self.offset(slide_width))
	}
}

/// Leading numeric part of a CSS length, `0` when there is none.
pub fn parse_px(value: &str) -> f64 {
	let value = value.trim();
	let end = value
		.find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
		.unwrap_or(value.len());
	value[..end].parse().unwrap_or(0.0)
}

/// Width of one card including its horizontal margins.
pub fn slide_width(offset_width: f64, margin_left: &str, margin_right: &str) -> f64 {
	offset_width + parse_px(margin_left) + parse_px(margin_right)
}

fn measure(card: &HtmlElement) -> f64 {
	let offset_width = card.offset_width() as f64;
	let Some(style) = web_sys::window().and_then(|w| w.get_computed_style(card).ok().flatten())
	else {
		return offset_width;
	};
	slide_width(
		offset_width,
		&style.get_property_value("margin-left").unwrap_or_default(),
		&style.get_property_value("margin-right").unwrap_or_default(),
	)
}

/// Wires the prev/next buttons, the auto-advance timer, and resize handling.
/// Returns `false` when any of the slider elements is missing.
pub fn attach(document: &Document, config: &CarouselConfig) -> Result<bool> {
	let track = document
		.query_selector(TRACK_SELECTOR)?
		.and_then(|el| el.dyn_into::<HtmlElement>().ok());
	let cards = query_all(document, CARD_SELECTOR);
	let first = cards
		.first()
		.and_then(|el| el.clone().dyn_into::<HtmlElement>().ok());
	let (prev, next) = (
		by_id::<Element>(document, PREV_ID),
		by_id::<Element>(document, NEXT_ID),
	);
	let (Some(track), Some(first), Some(prev), Some(next)) = (track, first, prev, next) else {
		return Ok(false);
	};

	let carousel = Rc::new(RefCell::new(Carousel::new(cards.len())));
	let show: Rc<dyn Fn()> = {
		let carousel = carousel.clone();
		Rc::new(move || {
			let transform = carousel.borrow().transform(measure(&first));
			let style = track.style();
			let _ = style.set_property("transform", &transform);
			let _ = style.set_property("transition", TRANSITION);
		})
	};

	let autoplay = {
		let (carousel, show) = (carousel.clone(), show.clone());
		Rc::new(RepeatingTask::start(Fixed(config.interval_ms), move || {
			let index = carousel.borrow_mut().next();
			debug!("portfolio-fx: carousel auto-advanced to {}", index);
			show();
		}))
	};

	let buttons: [(&Element, fn(&mut Carousel) -> usize); 2] =
		[(&next, Carousel::next), (&prev, Carousel::prev)];
	for (button, step) in buttons {
		let (carousel, show, autoplay) = (carousel.clone(), show.clone(), autoplay.clone());
		let on_click = Closure::<dyn FnMut()>::new(move || {
			step(&mut carousel.borrow_mut());
			show();
			autoplay.restart();
		});
		button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
	}

	if let Some(window) = web_sys::window() {
		let on_resize = Closure::<dyn FnMut()>::new(move || show());
		window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
		on_resize.forget();
	}

	Ok(true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::timer::Countdown;

	#[test]
	fn next_wraps_after_full_cycle() {
		let mut c = Carousel::new(4);
		let visited: Vec<usize> = (0..4).map(|_| c.next()).collect();
		assert_eq!(visited, vec![1, 2, 3, 0]);
	}

	#[test]
	fn prev_from_start_goes_to_last() {
		let mut c = Carousel::new(5);
		assert_eq!(c.prev(), 4);
		assert_eq!(c.prev(), 3);
	}

	#[test]
	fn single_card_stays_put() {
		let mut c = Carousel::new(1);
		assert_eq!(c.next(), 0);
		assert_eq!(c.prev(), 0);
	}

	#[test]
	fn empty_carousel_is_inert() {
		let mut c = Carousel::new(0);
		assert!(c.is_empty());
		assert_eq!(c.next(), 0);
		assert_eq!(c.prev(), 0);
		assert_eq!(c.transform(300.0), "translateX(-0px)");
	}

	#[test]
	fn transform_tracks_index_and_width() {
		let mut c = Carousel::new(3);
		c.next();
		c.next();
		assert_eq!(c.offset(320.0), 640.0);
		assert_eq!(c.transform(320.5), "translateX(-641px)");
	}

	#[test]
	fn slide_width_includes_margins() {
		assert_eq!(slide_width(300.0, "10px", "15.5px"), 325.5);
		assert_eq!(slide_width(300.0, "", "auto"), 300.0);
	}

	#[test]
	fn parse_px_reads_leading_number() {
		assert_eq!(parse_px(" 12px "), 12.0);
		assert_eq!(parse_px("-4.5px"), -4.5);
		assert_eq!(parse_px("0"), 0.0);
		assert_eq!(parse_px("px"), 0.0);
	}

	#[test]
	fn auto_advance_fires_every_interval_and_resets_on_navigation() {
		let mut c = Carousel::new(3);
		let mut autoplay = Countdown::new(Fixed(5000.0));

		// No interaction: one advance per 5 s of simulated time.
		for _ in 0..3 {
			assert_eq!(autoplay.advance(4999.0), 0);
			for _ in 0..autoplay.advance(1.0) {
				c.next();
			}
		}
		assert_eq!(c.index(), 0);

		// Manual navigation 3 s in restarts the full interval.
		assert_eq!(autoplay.advance(3000.0), 0);
		c.prev();
		autoplay.restart();
		assert_eq!(autoplay.advance(4000.0), 0);
		assert_eq!(autoplay.advance(1000.0), 1);
	}
}
