//! Resume link: show the PDF inline and download it in one click.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlAnchorElement, HtmlIFrameElement};

use super::{by_id, cast};
use crate::config::ResumeConfig;
use crate::error::Result;

/// Link whose clicks are intercepted.
pub const BUTTON_ID: &str = "resumeBtn";
/// Inline viewer for the PDF.
pub const FRAME_ID: &str = "resumeFrame";

/// Name for the downloaded file: the configured one, or else the last path
/// segment of the URL, or else `resume.pdf`.
pub fn download_name(configured: &str, url: &str) -> String {
	if !configured.trim().is_empty() {
		return configured.trim().to_string();
	}
	url.split(['?', '#'])
		.next()
		.and_then(|path| path.rsplit('/').next())
		.filter(|segment| !segment.is_empty())
		.unwrap_or("resume.pdf")
		.to_string()
}

/// Intercepts clicks on `#resumeBtn`. Returns `false` when the page has no
/// resume link.
pub fn attach(document: &Document, config: &ResumeConfig) -> Result<bool> {
	let Some(button) = by_id::<Element>(document, BUTTON_ID) else {
		return Ok(false);
	};
	let frame = by_id::<HtmlIFrameElement>(document, FRAME_ID);
	if frame.is_none() {
		warn!("portfolio-fx: no #{}, resume will only download", FRAME_ID);
	}

	let (document, link) = (document.clone(), button.clone());
	let configured = config.download_name.clone();
	let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		ev.prevent_default();
		let Some(url) = link
			.dyn_ref::<HtmlAnchorElement>()
			.map(|a| a.href())
			.or_else(|| link.get_attribute("href"))
			.filter(|url| !url.is_empty())
		else {
			warn!("portfolio-fx: resume link has no href");
			return;
		};

		if let Some(frame) = &frame {
			show_inline(frame, &url);
		}
		let name = download_name(&configured, &url);
		match download(&document, &url, &name) {
			Ok(()) => info!("portfolio-fx: downloading {}", name),
			Err(e) => warn!("portfolio-fx: resume download failed: {}", e),
		}
	});
	button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
	on_click.forget();

	Ok(true)
}

fn show_inline(frame: &HtmlIFrameElement, url: &str) {
	frame.set_src(url);
	let _ = frame.style().set_property("display", "block");
}

/// Triggers a download through a temporary anchor.
fn download(document: &Document, url: &str, name: &str) -> Result<()> {
	let anchor: HtmlAnchorElement = cast(document.create_element("a")?, "a")?;
	anchor.set_href(url);
	anchor.set_download(name);
	anchor.click();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn configured_name_wins() {
		assert_eq!(download_name("Jane_Resume.pdf", "/files/cv.pdf"), "Jane_Resume.pdf");
	}

	#[test]
	fn falls_back_to_url_file_name() {
		assert_eq!(
			download_name("", "https://example.com/assets/cv-2024.pdf?v=3#page=2"),
			"cv-2024.pdf"
		);
	}

	#[test]
	fn falls_back_to_generic_name() {
		assert_eq!(download_name("  ", "https://example.com/"), "resume.pdf");
	}
}
