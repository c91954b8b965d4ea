//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a canvas element sized to the viewport, builds the [`AnimatorState`], and runs an animation loop via
//! `requestAnimationFrame` that advances and renders the field each frame.
//! Shooting stars are spawned by a [`RepeatingTask`] on its own timer.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::state::AnimatorState;
use super::theme::FieldStyle;
use crate::config::StarfieldConfig;
use crate::timer::{Jittered, RepeatingTask};

/// Class on the mounted canvas element.
pub const CANVAS_CLASS: &str = "starfield-canvas";

/// Bundles animator state with its visual style.
struct FieldContext {
	state: AnimatorState,
	style: FieldStyle,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

/// Renders the animated background on a canvas that fills the viewport, sits
/// behind the page content, and follows window resizes.
///
/// The canvas carries the `starfield-canvas` class and no id, so it never
/// collides with ids already present in the page markup.
#[component]
pub fn StarfieldCanvas(#[prop(optional)] config: StarfieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let spawner: Rc<RefCell<Option<RepeatingTask>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("portfolio-fx: canvas has no 2d context, background disabled");
				return;
			}
		};

		let state = AnimatorState::new(&config, w, h, StdRng::from_os_rng());
		info!(
			"portfolio-fx: starfield {:?} on {}x{} ({} particles, {} stars)",
			state.preset,
			w,
			h,
			state.particles.len(),
			state.stars.len()
		);
		let spawns = state.has_shooting_stars();
		*context.borrow_mut() = Some(FieldContext {
			state,
			style: FieldStyle::default(),
		});

		if spawns {
			if let Some(ref mut c) = *context.borrow_mut() {
				c.state.spawn_shooting_star();
			}
			let context_spawn = context.clone();
			*spawner.borrow_mut() = Some(RepeatingTask::start(
				Jittered::new(
					config.spawn_min_ms,
					config.spawn_max_ms,
					StdRng::from_os_rng(),
				),
				move || {
					if let Some(ref mut c) = *context_spawn.borrow_mut() {
						c.state.spawn_shooting_star();
					}
				},
			));
		}

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
			debug!("portfolio-fx: resized to {}x{}", nw, nh);
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.advance_frame();
				render::render(&c.state, &ctx, &c.style);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=CANVAS_CLASS
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}
