//! Contact form bridge to the EmailJS REST relay.
//!
//! Submissions are intercepted, the form fields are posted as template
//! parameters, and the outcome is shown in `#formMessage`. Failures are
//! logged and shown to the visitor; nothing is thrown back to the page.

use std::collections::BTreeMap;

use js_sys::Array;
use log::{error, info, warn};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event, FormData, HtmlElement, HtmlFormElement, Request, RequestInit, Response};

use super::by_id;
use crate::config::ContactConfig;
use crate::error::{FxError, Result};

/// Form whose submission is intercepted.
pub const FORM_ID: &str = "contactForm";
/// Element that shows the outcome.
pub const MESSAGE_ID: &str = "formMessage";

/// Form field name to submitted value.
pub type Fields = BTreeMap<String, String>;

/// Visitor-facing outcome of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
	/// The relay accepted the message.
	Sent,
	/// The relay rejected it or could not be reached.
	Failed,
}

impl SubmitStatus {
	/// Text shown in the status element.
	pub fn message(self) -> &'static str {
		match self {
			SubmitStatus::Sent => "✅ Message sent successfully!",
			SubmitStatus::Failed => "❌ Error sending message. Try again.",
		}
	}

	/// CSS color of the status text.
	pub fn color(self) -> &'static str {
		match self {
			SubmitStatus::Sent => "lightgreen",
			SubmitStatus::Failed => "red",
		}
	}
}

#[derive(Serialize)]
struct SendRequest<'a> {
	service_id: &'a str,
	template_id: &'a str,
	user_id: &'a str,
	template_params: &'a Fields,
}

/// Client for the EmailJS `email/send` endpoint.
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
	config: ContactConfig,
}

impl EmailJsRelay {
	/// Relay using the identifiers from `config`.
	pub fn new(config: ContactConfig) -> Self {
		Self { config }
	}

	/// JSON body for one submission.
	pub fn request_body(&self, fields: &Fields) -> Result<String> {
		let c = &self.config;
		for (name, value) in [
			("endpoint", &c.endpoint),
			("public_key", &c.public_key),
			("service_id", &c.service_id),
			("template_id", &c.template_id),
		] {
			if value.is_empty() {
				return Err(FxError::NotConfigured(name));
			}
		}

		Ok(serde_json::to_string(&SendRequest {
			service_id: &c.service_id,
			template_id: &c.template_id,
			user_id: &c.public_key,
			template_params: fields,
		})?)
	}

	/// Posts the fields and resolves once the relay has answered.
	pub async fn send(&self, fields: &Fields) -> Result<()> {
		let body = self.request_body(fields)?;
		let window = web_sys::window().ok_or_else(|| FxError::Js("no window".into()))?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_body(&JsValue::from_str(&body));
		let request = Request::new_with_str_and_init(&self.config.endpoint, &init)?;
		request.headers().set("Content-Type", "application/json")?;

		let resp: Response = JsFuture::from(window.fetch_with_request(&request))
			.await?
			.dyn_into()?;
		if resp.ok() {
			return Ok(());
		}

		let body = JsFuture::from(resp.text()?)
			.await?
			.as_string()
			.unwrap_or_default();
		Err(FxError::Status {
			status: resp.status(),
			body,
		})
	}
}

/// Collects the string-valued fields of a form.
pub fn form_fields(form: &HtmlFormElement) -> Result<Fields> {
	let data = FormData::new_with_form(form)?;
	let mut fields = Fields::new();
	if let Some(entries) = js_sys::try_iter(&data)? {
		for entry in entries {
			let entry: Array = entry?.unchecked_into();
			if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
				fields.insert(name, value);
			}
		}
	}
	Ok(fields)
}

/// Intercepts `#contactForm` submissions. Returns `false` when the page has
/// no contact form.
pub fn attach(document: &Document, config: &ContactConfig) -> Result<bool> {
	let Some(form) = by_id::<HtmlFormElement>(document, FORM_ID) else {
		return Ok(false);
	};
	let message = by_id::<HtmlElement>(document, MESSAGE_ID);
	if !config.is_complete() {
		warn!("portfolio-fx: contact relay identifiers missing, submissions will fail");
	}

	let relay = EmailJsRelay::new(config.clone());
	let target = form.clone();
	let on_submit = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		ev.prevent_default();
		let (relay, form, message) = (relay.clone(), target.clone(), message.clone());
		spawn_local(async move {
			let status = submit(&relay, &form).await;
			if let Some(el) = &message {
				show_status(el, status);
			}
			if status == SubmitStatus::Sent {
				form.reset();
			}
		});
	});
	form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
	on_submit.forget();

	Ok(true)
}

async fn submit(relay: &EmailJsRelay, form: &HtmlFormElement) -> SubmitStatus {
	let sent = match form_fields(form) {
		Ok(fields) => relay.send(&fields).await,
		Err(e) => Err(e),
	};
	match sent {
		Ok(()) => {
			info!("portfolio-fx: message sent");
			SubmitStatus::Sent
		}
		Err(e) => {
			error!("portfolio-fx: EmailJS error: {}", e);
			SubmitStatus::Failed
		}
	}
}

fn show_status(el: &HtmlElement, status: SubmitStatus) {
	el.set_text_content(Some(status.message()));
	let _ = el.style().set_property("color", status.color());
}
