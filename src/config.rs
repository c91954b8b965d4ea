//! Page configuration, read from an optional JSON script element.
//!
//! ```html
//! <script id="fx-config" type="application/json">
//!   { "starfield": { "preset": "bounce" }, "resume": { "download_name": "cv.pdf" } }
//! </script>
//! ```
//!
//! Every field has a default, so an absent element, an empty object, or a
//! partial object all work.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

use crate::components::starfield::Preset;

/// Id of the script element holding the page configuration.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Complete page configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
	/// Background animation.
	pub starfield: StarfieldConfig,
	/// Contact form relay.
	pub contact: ContactConfig,
	/// Resume viewer.
	pub resume: ResumeConfig,
	/// Testimonial slider.
	pub carousel: CarouselConfig,
}

/// Background animation settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
	/// Entity set to animate.
	pub preset: Preset,
	/// Drifting particles for [`Preset::Drift`].
	pub particle_count: usize,
	/// Bouncing stars for [`Preset::Bounce`].
	pub star_count: usize,
	/// Shortest wait between shooting stars.
	pub spawn_min_ms: f64,
	/// Longest wait between shooting stars.
	pub spawn_max_ms: f64,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			preset: Preset::Drift,
			particle_count: 150,
			star_count: 120,
			spawn_min_ms: 3000.0,
			spawn_max_ms: 7000.0,
		}
	}
}

/// EmailJS relay settings. All three identifiers are public.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
	/// REST endpoint the form is posted to.
	pub endpoint: String,
	/// Account public key, sent as `user_id`.
	pub public_key: String,
	/// Email service to send through.
	pub service_id: String,
	/// Template the form fields are rendered into.
	pub template_id: String,
}

impl ContactConfig {
	/// The relay needs every identifier before it can send.
	pub fn is_complete(&self) -> bool {
		!self.endpoint.is_empty()
			&& !self.public_key.is_empty()
			&& !self.service_id.is_empty()
			&& !self.template_id.is_empty()
	}
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			endpoint: "https://api.emailjs.com/api/v1.0/email/send".into(),
			public_key: String::new(),
			service_id: String::new(),
			template_id: String::new(),
		}
	}
}

/// Resume viewer settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResumeConfig {
	/// File name offered to the browser for the download.
	pub download_name: String,
}

impl Default for ResumeConfig {
	fn default() -> Self {
		Self {
			download_name: "Resume.pdf".into(),
		}
	}
}

/// Testimonial slider settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
	/// Auto-advance period.
	pub interval_ms: f64,
}

impl Default for CarouselConfig {
	fn default() -> Self {
		Self {
			interval_ms: 5000.0,
		}
	}
}

impl Config {
	/// Parses configuration JSON.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Loads configuration from the `#fx-config` script element, falling back
	/// to defaults when it is missing or malformed.
	pub fn load(document: &Document) -> Self {
		let Some(text) = document
			.get_element_by_id(CONFIG_ELEMENT_ID)
			.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
			.and_then(|script| script.text().ok())
		else {
			info!("portfolio-fx: no #{} element, using defaults", CONFIG_ELEMENT_ID);
			return Self::default();
		};

		match Self::from_json(&text) {
			Ok(config) => {
				info!(
					"portfolio-fx: loaded config (preset {:?})",
					config.starfield.preset
				);
				config
			}
			Err(e) => {
				warn!("portfolio-fx: failed to parse config: {}", e);
				Self::default()
			}
		}
	}
}
