//! portfolio-fx: animated background and page effects for a portfolio site.
//!
//! This crate provides a WASM client that paints a starfield behind the page
//! and wires the interactive bits of the static markup: scroll reveals, card
//! ripples, the resume viewer, the contact form, and the testimonial slider.

use leptos::prelude::*;
use log::{Level, info, warn};

// Linked only to enable the JS entropy backend that rand needs on wasm32.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;
pub mod config;
pub mod effects;
pub mod error;
pub mod timer;

pub use components::starfield::{AnimatorState, Preset, StarfieldCanvas};
pub use config::{Config, StarfieldConfig};
pub use error::FxError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Main application component: the background canvas.
#[component]
pub fn App(#[prop(optional)] config: Config) -> impl IntoView {
	view! { <StarfieldCanvas config=config.starfield /> }
}

/// Loads the page configuration, attaches the page effects, and mounts the
/// background canvas.
pub fn start() {
	init_logging();

	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("portfolio-fx: no document, nothing to do");
		return;
	};
	let config = Config::load(&document);
	effects::attach_all(&document, &config);

	mount_to_body(move || view! { <App config=config /> })
}
